use pretty_assertions::assert_eq;
use scrape_core::{CategoryFlags, ExtractionRequest};
use scrape_engine::{ElementExtractor, Extractor, ParsedDocument};

fn extract(html: &str, request: ExtractionRequest) -> Vec<String> {
    let document = ParsedDocument::parse(html);
    ElementExtractor.extract(&document, &request)
}

fn categories(build: impl FnOnce(&mut CategoryFlags)) -> ExtractionRequest {
    let mut flags = CategoryFlags::default();
    build(&mut flags);
    ExtractionRequest::Categories(flags)
}

fn tag(name: &str) -> ExtractionRequest {
    ExtractionRequest::Tag(name.to_string())
}

#[test]
fn paragraphs_are_numbered_in_document_order() {
    let html = "<html><body><p>A</p><p>B</p><p>C</p></body></html>";
    let lines = extract(html, categories(|f| f.paragraphs = true));

    assert_eq!(
        lines,
        vec![
            "Paragraphs:",
            "Paragraph 1: A",
            "Paragraph 2: B",
            "Paragraph 3: C",
            "",
        ]
    );
}

#[test]
fn links_are_aggregated_by_exact_href_in_first_occurrence_order() {
    let html = r#"
        <a href="https://x.com">one</a>
        <a href="https://y.com">two</a>
        <a href="https://x.com">three</a>
        <a href="https://x.com/">slash is a different href</a>
        <a name="anchor">no href</a>
        <a href="">empty href</a>
    "#;
    let lines = extract(html, categories(|f| f.links = true));

    assert_eq!(
        lines,
        vec![
            "Links:",
            "Link 1: https://x.com (Used 2 times)",
            "Link 2: https://y.com (Used 1 times)",
            "Link 3: https://x.com/ (Used 1 times)",
            "",
        ]
    );
}

#[test]
fn misnested_anchors_are_counted_once_per_parsed_copy() {
    // The HTML5 tree builder reopens an anchor that a closing </p> or a new
    // <p> cuts off, so each href below ends up on two elements.
    let html = r#"<p><a href="/x">one</p>two</a><p><a href="/y">A<p>B</a>"#;
    let lines = extract(html, categories(|f| f.links = true));

    assert_eq!(
        lines,
        vec![
            "Links:",
            "Link 1: /x (Used 2 times)",
            "Link 2: /y (Used 2 times)",
            "",
        ]
    );
}

#[test]
fn links_section_is_kept_when_no_anchor_has_an_href() {
    let html = r#"<p><a name="top">Top</a></p>"#;
    let lines = extract(html, categories(|f| f.links = true));

    assert_eq!(lines, vec!["Links:", ""]);
}

#[test]
fn headings_are_grouped_by_level_not_by_position() {
    let html = "<h2>Second</h2><h1>First</h1><h3>Third</h3><h1>Again</h1><h6>Tiny</h6>";
    let lines = extract(html, categories(|f| f.headings = true));

    assert_eq!(
        lines,
        vec![
            "Headings:",
            "H1 1: First",
            "H1 2: Again",
            "H2 3: Second",
            "H3 4: Third",
            "H6 5: Tiny",
            "",
        ]
    );
}

#[test]
fn images_fall_back_to_placeholder_without_src() {
    let html = r#"<img src="a.png"><img alt="no src"><img src="">"#;
    let lines = extract(html, categories(|f| f.images = true));

    assert_eq!(
        lines,
        vec![
            "Images:",
            "Image 1: a.png",
            "Image 2: No source attribute",
            "Image 3: No source attribute",
            "",
        ]
    );
}

#[test]
fn sections_follow_fixed_order_and_empty_ones_are_omitted() {
    let html = r#"<img src="i.png"><p>Text</p>"#;
    let lines = extract(html, ExtractionRequest::Categories(CategoryFlags::all()));

    assert_eq!(
        lines,
        vec![
            "Paragraphs:",
            "Paragraph 1: Text",
            "",
            "Images:",
            "Image 1: i.png",
            "",
        ]
    );
}

#[test]
fn no_flags_reports_nothing_selected() {
    let lines = extract("<p>ignored</p>", ExtractionRequest::default());
    assert_eq!(lines, vec!["No selected items found on the page."]);
}

#[test]
fn flags_without_matches_report_nothing_selected() {
    let lines = extract(
        "<div>plain</div>",
        categories(|f| {
            f.headings = true;
            f.images = true;
        }),
    );
    assert_eq!(lines, vec!["No selected items found on the page."]);
}

#[test]
fn custom_tag_without_matches() {
    let lines = extract("<p>one</p>", tag("li"));
    assert_eq!(lines, vec!["No elements found with tag 'li'."]);
}

#[test]
fn custom_tag_trims_outer_whitespace_and_keeps_inner() {
    let html = "<ul><li>  one </li><li>\n two  <b>bold</b>\n</li></ul>";
    let lines = extract(html, tag("li"));

    assert_eq!(
        lines,
        vec!["Elements with tag 'li':", "Element 1: one", "Element 2: two  bold"]
    );
}

#[test]
fn custom_tag_match_is_exact_and_case_sensitive() {
    let html = "<p>para</p><pre>code</pre>";
    assert_eq!(extract(html, tag("P")), vec!["No elements found with tag 'P'."]);
    assert_eq!(
        extract(html, tag("p")),
        vec!["Elements with tag 'p':", "Element 1: para"]
    );
}

#[test]
fn custom_tag_includes_nested_matches_in_document_order() {
    let html = "<div>outer <div>inner</div></div><div>last</div>";
    let lines = extract(html, tag("div"));

    assert_eq!(
        lines,
        vec![
            "Elements with tag 'div':",
            "Element 1: outer inner",
            "Element 2: inner",
            "Element 3: last",
        ]
    );
}

#[test]
fn custom_tag_overrides_categories() {
    let html = "<title> Page </title><p>body</p>";
    let lines = extract(html, tag("title"));
    assert_eq!(lines, vec!["Elements with tag 'title':", "Element 1: Page"]);
}

#[test]
fn text_content_includes_descendants() {
    let html = r##"<p>Hello <a href="#">world</a>!</p>"##;
    let lines = extract(html, categories(|f| f.paragraphs = true));
    assert_eq!(lines[1], "Paragraph 1: Hello world!");
}

#[test]
fn malformed_markup_degrades_gracefully() {
    let html = "<p>Unclosed <b>bold<p>Next</div></span><img src=x.png";
    let lines = extract(
        html,
        categories(|f| {
            f.paragraphs = true;
            f.images = true;
        }),
    );

    assert_eq!(lines[0], "Paragraphs:");
    assert_eq!(lines[1], "Paragraph 1: Unclosed bold");
    assert_eq!(lines[2], "Paragraph 2: Next");
}

#[test]
fn extraction_is_deterministic() {
    let html = r#"<h1>T</h1><p>a</p><a href="/x">x</a><a href="/x">x</a><img src="i">"#;
    let request = ExtractionRequest::Categories(CategoryFlags::all());

    assert_eq!(extract(html, request.clone()), extract(html, request));
}
