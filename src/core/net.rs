// src/core/net.rs

// Blocking HTTP(S) GET for the sheet export (reqwest, rustls)

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::SourceError;

pub fn http_get(url: &str) -> Result<String, SourceError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(SourceError::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}
