// src/scrape/mod.rs
//
// Single-page extraction: GET one URL, read title, meta description and
// the first few <section>s. Every failure folds into ScrapeResult::Failed.

mod fetch;
mod page;

pub use fetch::{Fetch, HttpFetcher};
pub use page::{PageSummary, extract_from_html};

use std::fmt::Display;

use crate::config::consts::{FALLBACK_VALUE_PROPOSITION, SCRAPE_ERROR_PREFIX};
use crate::config::options::ScrapeOptions;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrapeResult {
    Page(PageSummary),
    Failed { error: String },
}

impl ScrapeResult {
    pub fn failed(cause: impl Display) -> Self {
        ScrapeResult::Failed { error: format!("{SCRAPE_ERROR_PREFIX}{cause}") }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ScrapeResult::Failed { .. })
    }

    /// Scraped value proposition, or the fallback constant when the scrape failed.
    pub fn value_proposition(&self) -> &str {
        match self {
            ScrapeResult::Page(p) => &p.value_proposition,
            ScrapeResult::Failed { .. } => FALLBACK_VALUE_PROPOSITION,
        }
    }
}

/// One GET over a fresh blocking client.
pub fn extract(opts: &ScrapeOptions, url: &str) -> ScrapeResult {
    match HttpFetcher::new(opts) {
        Ok(fetcher) => extract_with(&fetcher, url),
        Err(e) => {
            loge!("Scrape: client setup failed: {e}");
            ScrapeResult::failed(e)
        }
    }
}

pub fn extract_with(fetcher: &dyn Fetch, url: &str) -> ScrapeResult {
    logf!("Scrape: GET {url}");

    match fetcher.fetch(url) {
        Ok(doc) => {
            let summary = extract_from_html(&doc);
            logf!(
                "Scrape: OK bytes={} title={:?} info_len={}",
                doc.len(),
                summary.title,
                summary.additional_info.len()
            );
            ScrapeResult::Page(summary)
        }
        Err(e) => {
            loge!("Scrape: {url}: {e}");
            ScrapeResult::failed(e)
        }
    }
}
