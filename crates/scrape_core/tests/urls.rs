use pretty_assertions::assert_eq;
use scrape_core::parse_urls;

#[test]
fn commas_and_newlines_both_separate_urls() {
    let urls = parse_urls("https://a.example.com,https://b.example.com\nhttps://c.example.com");
    assert_eq!(
        urls,
        vec![
            "https://a.example.com".to_string(),
            "https://b.example.com".to_string(),
            "https://c.example.com".to_string(),
        ]
    );
}

#[test]
fn entries_are_trimmed_and_empties_dropped() {
    let urls = parse_urls("  https://a.example.com , ,\n\n\t https://b.example.com\r\n,  \n");
    assert_eq!(
        urls,
        vec![
            "https://a.example.com".to_string(),
            "https://b.example.com".to_string(),
        ]
    );
}

#[test]
fn duplicates_are_kept_in_input_order() {
    let urls = parse_urls("b.com\na.com,b.com");
    assert_eq!(urls, vec!["b.com", "a.com", "b.com"]);
}

#[test]
fn blank_input_yields_nothing() {
    assert!(parse_urls("").is_empty());
    assert!(parse_urls(" ,\n , ").is_empty());
}
