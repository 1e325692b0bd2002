//! Scraper engine: page fetching, element extraction and report assembly.
mod decode;
mod dom;
mod engine;
mod extract;
mod fetch;
mod report;
mod types;

pub use decode::{decode_html, DecodedHtml};
pub use dom::{collect_by_tag, DocumentNode, ParsedDocument};
pub use engine::{EngineHandle, ScrapeEngine};
pub use extract::{extract_from, ElementExtractor, Extractor, NO_SOURCE_PLACEHOLDER};
pub use fetch::{FetchSettings, Fetcher, LoggingProgressSink, ProgressSink, ReqwestFetcher};
pub use report::Report;
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, UrlSummary};
