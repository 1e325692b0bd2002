#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input (raw text, comma or newline separated).
    UrlInputChanged(String),
    /// User edited the custom tag input.
    TagInputChanged(String),
    /// User ticked or unticked one of the category boxes.
    CategoryToggled {
        category: crate::Category,
        enabled: bool,
    },
    /// User asked for the current inputs to be scraped.
    ScrapeClicked,
    /// The engine finished the batch and rendered its report.
    ReportReady(String),
}
