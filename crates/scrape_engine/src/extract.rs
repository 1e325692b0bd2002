use std::collections::HashMap;

use scrape_core::{Category, CategoryFlags, ExtractionRequest};

use crate::dom::{collect_by_tag, DocumentNode, ParsedDocument};

/// Shown for an `<img>` without a usable `src`.
pub const NO_SOURCE_PLACEHOLDER: &str = "No source attribute";

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

pub trait Extractor: Send + Sync {
    /// Report lines for one page. Blank lines are empty strings.
    fn extract(&self, document: &ParsedDocument, request: &ExtractionRequest) -> Vec<String>;
}

/// Extracts either every element with a custom tag or the enabled
/// categories (headings, paragraphs, links, images), in that order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElementExtractor;

impl Extractor for ElementExtractor {
    fn extract(&self, document: &ParsedDocument, request: &ExtractionRequest) -> Vec<String> {
        extract_from(document.root(), request)
    }
}

/// Runs an extraction over any document tree rooted at `root`.
pub fn extract_from<N: DocumentNode + Clone>(root: N, request: &ExtractionRequest) -> Vec<String> {
    match request {
        ExtractionRequest::Tag(tag) => custom_tag_lines(root, tag),
        ExtractionRequest::Categories(flags) => category_lines(root, flags),
    }
}

fn custom_tag_lines<N: DocumentNode>(root: N, tag: &str) -> Vec<String> {
    let elements = collect_by_tag(root, tag);
    if elements.is_empty() {
        return vec![format!("No elements found with tag '{tag}'.")];
    }

    let mut lines = Vec::with_capacity(elements.len() + 1);
    lines.push(format!("Elements with tag '{tag}':"));
    for (idx, element) in elements.iter().enumerate() {
        lines.push(format!("Element {}: {}", idx + 1, element.text_content().trim()));
    }
    lines
}

fn category_lines<N: DocumentNode + Clone>(root: N, flags: &CategoryFlags) -> Vec<String> {
    let mut lines = Vec::new();
    for category in flags.enabled() {
        let entries = match category {
            Category::Headings => heading_entries(root.clone()),
            Category::Paragraphs => paragraph_entries(root.clone()),
            Category::Links => link_entries(root.clone()),
            Category::Images => image_entries(root.clone()),
        };
        // `None` means the page has no element of this kind at all.
        if let Some(entries) = entries {
            lines.push(format!("{}:", category.label()));
            lines.extend(entries);
            lines.push(String::new());
        }
    }

    if lines.is_empty() {
        lines.push("No selected items found on the page.".to_string());
    }
    lines
}

/// All h1 elements page-wide, then all h2, and so on; numbering runs across
/// levels.
fn heading_entries<N: DocumentNode + Clone>(root: N) -> Option<Vec<String>> {
    let headings: Vec<N> = HEADING_TAGS
        .iter()
        .flat_map(|tag| collect_by_tag(root.clone(), tag))
        .collect();
    if headings.is_empty() {
        return None;
    }

    Some(
        headings
            .iter()
            .enumerate()
            .map(|(idx, heading)| {
                format!(
                    "{} {}: {}",
                    heading.tag_name().to_uppercase(),
                    idx + 1,
                    heading.text_content().trim()
                )
            })
            .collect(),
    )
}

fn paragraph_entries<N: DocumentNode>(root: N) -> Option<Vec<String>> {
    let paragraphs = collect_by_tag(root, "p");
    if paragraphs.is_empty() {
        return None;
    }

    Some(
        paragraphs
            .iter()
            .enumerate()
            .map(|(idx, p)| format!("Paragraph {}: {}", idx + 1, p.text_content().trim()))
            .collect(),
    )
}

/// The section exists as soon as the page has an anchor, even when none of
/// them carries an href. Anchors the parser duplicated while repairing
/// misnested markup count once per copy.
fn link_entries<N: DocumentNode>(root: N) -> Option<Vec<String>> {
    let anchors = collect_by_tag(root, "a");
    if anchors.is_empty() {
        return None;
    }

    let hrefs = anchors
        .iter()
        .filter_map(|anchor| anchor.attribute("href"))
        .filter(|href| !href.is_empty());

    Some(
        count_by_first_occurrence(hrefs)
            .into_iter()
            .enumerate()
            .map(|(idx, (href, count))| format!("Link {}: {} (Used {} times)", idx + 1, href, count))
            .collect(),
    )
}

fn image_entries<N: DocumentNode>(root: N) -> Option<Vec<String>> {
    let images = collect_by_tag(root, "img");
    if images.is_empty() {
        return None;
    }

    Some(
        images
            .iter()
            .enumerate()
            .map(|(idx, img)| {
                let src = img
                    .attribute("src")
                    .filter(|src| !src.is_empty())
                    .unwrap_or(NO_SOURCE_PLACEHOLDER);
                format!("Image {}: {}", idx + 1, src)
            })
            .collect(),
    )
}

/// Counts exact-equal values, keeping the order in which each value was
/// first seen.
fn count_by_first_occurrence<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    for value in values {
        match positions.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }
    counts
}
