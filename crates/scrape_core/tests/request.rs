use pretty_assertions::assert_eq;
use scrape_core::{BatchRequest, Category, CategoryFlags, ExtractionRequest};

#[test]
fn non_empty_tag_takes_precedence_over_flags() {
    let request = ExtractionRequest::from_inputs("  li ", CategoryFlags::all());
    assert_eq!(request, ExtractionRequest::Tag("li".to_string()));
}

#[test]
fn blank_tag_falls_back_to_flags() {
    let flags = CategoryFlags {
        links: true,
        ..CategoryFlags::default()
    };
    let request = ExtractionRequest::from_inputs("   ", flags);
    assert_eq!(request, ExtractionRequest::Categories(flags));
}

#[test]
fn flags_toggle_independently() {
    let mut flags = CategoryFlags::default();
    assert!(!flags.any());

    flags.set(Category::Images, true);
    flags.set(Category::Headings, true);
    assert!(flags.is_enabled(Category::Images));
    assert!(!flags.is_enabled(Category::Links));

    flags.set(Category::Headings, false);
    assert_eq!(flags.enabled().collect::<Vec<_>>(), vec![Category::Images]);
}

#[test]
fn enabled_categories_follow_report_order() {
    let order: Vec<_> = CategoryFlags::all().enabled().collect();
    assert_eq!(order, Category::ALL.to_vec());
    assert_eq!(
        order.iter().map(|c| c.label()).collect::<Vec<_>>(),
        vec!["Headings", "Paragraphs", "Links", "Images"]
    );
}

#[test]
fn batch_request_cleans_urls_and_tag() {
    let batch = BatchRequest::from_inputs(" a.com ,\n b.com\n", " h2 ", CategoryFlags::default());
    assert_eq!(batch.urls, vec!["a.com", "b.com"]);
    assert_eq!(batch.extraction, ExtractionRequest::Tag("h2".to_string()));
}
