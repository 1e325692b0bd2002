/// Splits raw URL input on commas and newlines, trims every entry and drops
/// the empty ones. Order is preserved and duplicates are kept.
pub fn parse_urls(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
