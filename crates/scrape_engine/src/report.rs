use std::fmt;

use crate::FetchError;

/// Accumulated report text for a whole batch, one entry per line.
///
/// Blank lines are stored as empty strings. Rendering terminates every line
/// with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn push_blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.lines.extend(lines);
    }

    /// Opens the section for one URL.
    pub fn begin_url(&mut self, url: &str) {
        self.push_line(format!("Scraping URL: {url}"));
        self.push_blank();
    }

    /// Records why `url` produced no page.
    pub fn push_fetch_failure(&mut self, url: &str, err: &FetchError) {
        match err.http_status() {
            Some(code) => {
                self.push_line(format!("Failed to retrieve the webpage. Status code: {code}"))
            }
            None => self.push_line(format!("Error while scraping {url}: {}", err.message)),
        }
        self.push_blank();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
