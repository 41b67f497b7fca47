// src/scrape/fetch.rs
use reqwest::blocking::Client;

use crate::config::options::ScrapeOptions;
use crate::core::net;
use crate::Result;

/// Where page bodies come from. `HttpFetcher` in the app, canned HTML in tests.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        Ok(Self { client: net::client(opts.timeout())? })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        net::http_get(&self.client, url)
    }
}
