// src/core/net.rs

// Blocking HTTP GET; one request, no retry.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::{Error, Result};

pub fn client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}
