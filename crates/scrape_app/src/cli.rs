use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use scrape_core::{Category, CategoryFlags, Msg};
use scrape_engine::FetchSettings;
use scrape_logging::{LevelFilter, LogSettings};

/// Fetch web pages and list their headings, paragraphs, links, images or any
/// single tag as a plain-text report.
#[derive(Parser, Debug)]
#[command(name = "page_scraper", version)]
#[command(about = "Fetch web pages and report their headings, paragraphs, links, images or a custom tag", long_about = None)]
pub struct Args {
    /// URLs to scrape. Each argument may hold several URLs separated by commas or newlines.
    pub urls: Vec<String>,

    /// Read more URLs (comma or newline separated) from a file. Use "-" for stdin.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Report every element with this exact tag name; overrides the category flags.
    #[arg(short, long, default_value = "")]
    pub tag: String,

    /// Report h1-h6 headings.
    #[arg(long)]
    pub headings: bool,

    /// Report paragraphs.
    #[arg(long)]
    pub paragraphs: bool,

    /// Report link targets with their use counts.
    #[arg(long)]
    pub links: bool,

    /// Report image sources.
    #[arg(long)]
    pub images: bool,

    /// Shorthand for --headings --paragraphs --links --images.
    #[arg(short, long)]
    pub all: bool,

    /// Whole-request timeout in seconds (default: none).
    #[arg(long, value_name = "SECS", value_parser = parse_seconds)]
    pub timeout: Option<Duration>,

    /// Connection timeout in seconds (default: none).
    #[arg(long, value_name = "SECS", value_parser = parse_seconds)]
    pub connect_timeout: Option<Duration>,

    /// Maximum number of redirects to follow.
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub max_redirects: usize,

    /// Reject response bodies larger than this many bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_bytes: Option<u64>,

    /// User-Agent header to send.
    #[arg(long)]
    pub user_agent: Option<String>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// All URL text from arguments and the optional input file, newline joined.
    pub fn raw_urls(&self) -> Result<String> {
        if self.urls.is_empty() && self.input.is_none() {
            bail!("no URLs given; pass them as arguments or with --input");
        }

        let mut parts = self.urls.clone();
        if let Some(input) = self.input.as_ref() {
            parts.push(read_input(input)?);
        }
        Ok(parts.join("\n"))
    }

    pub fn flags(&self) -> CategoryFlags {
        if self.all {
            return CategoryFlags::all();
        }
        CategoryFlags {
            headings: self.headings,
            paragraphs: self.paragraphs,
            links: self.links,
            images: self.images,
        }
    }

    /// The messages a user filling in the form would produce.
    pub fn form_messages(&self, raw_urls: String) -> Vec<Msg> {
        let flags = self.flags();
        let mut messages = vec![
            Msg::UrlInputChanged(raw_urls),
            Msg::TagInputChanged(self.tag.clone()),
        ];
        messages.extend(Category::ALL.into_iter().map(|category| Msg::CategoryToggled {
            category,
            enabled: flags.is_enabled(category),
        }));
        messages
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: self.connect_timeout,
            request_timeout: self.timeout,
            redirect_limit: self.max_redirects,
            max_bytes: self.max_bytes,
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn log_settings(&self) -> LogSettings {
        let level = if self.quiet {
            LevelFilter::Error
        } else {
            match self.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };
        LogSettings {
            level,
            file: self.log_file.clone(),
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read URLs from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read URLs from {}", path.display()))
}

fn parse_seconds(raw: &str) -> Result<Duration, String> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number of seconds"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("'{raw}' must be a positive number of seconds"));
    }
    Duration::try_from_secs_f64(secs).map_err(|err| format!("'{raw}' {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("page_scraper").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn all_enables_every_category() {
        assert_eq!(parse(&["--all", "a.com"]).flags(), CategoryFlags::all());
    }

    #[test]
    fn seconds_accept_fractions_and_reject_nonsense() {
        assert_eq!(parse_seconds("1.5"), Ok(Duration::from_millis(1500)));
        assert!(parse_seconds("0").is_err());
        assert!(parse_seconds("-3").is_err());
        assert!(parse_seconds("soon").is_err());
        assert!(parse_seconds("1e30").is_err());
    }

    #[test]
    fn settings_default_to_client_defaults() {
        let settings = parse(&["a.com"]).fetch_settings();
        assert_eq!(settings.request_timeout, None);
        assert_eq!(settings.connect_timeout, None);
        assert_eq!(settings.redirect_limit, 10);
        assert_eq!(settings.max_bytes, None);
    }

    #[test]
    fn verbosity_maps_to_log_levels() {
        assert_eq!(parse(&["a.com"]).log_settings().level, LevelFilter::Warn);
        assert_eq!(parse(&["-vv", "a.com"]).log_settings().level, LevelFilter::Debug);
        assert_eq!(parse(&["-q", "a.com"]).log_settings().level, LevelFilter::Error);
        assert!(Args::try_parse_from(["page_scraper", "-q", "-v", "a.com"]).is_err());
    }

    #[test]
    fn url_arguments_are_joined_for_the_core() {
        let args = parse(&["a.com,b.com", "c.com"]);
        let raw = args.raw_urls().unwrap();
        assert_eq!(scrape_core::parse_urls(&raw), vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn form_messages_toggle_every_category() {
        let args = parse(&["--links", "--tag", "li", "a.com"]);
        let messages = args.form_messages("a.com".to_string());

        assert_eq!(messages.len(), 6);
        assert_eq!(messages[1], Msg::TagInputChanged("li".to_string()));
        assert!(messages.contains(&Msg::CategoryToggled {
            category: Category::Links,
            enabled: true,
        }));
        assert!(messages.contains(&Msg::CategoryToggled {
            category: Category::Images,
            enabled: false,
        }));
    }
}
