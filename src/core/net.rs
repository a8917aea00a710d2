// src/core/net.rs

// Blocking HTTP GET for the routine page.

use std::time::Duration;

use reqwest::{blocking::Client, header::CONTENT_TYPE};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};
use super::encoding::charset_from_content_type;

/// Raw response body plus what the server said about its encoding.
#[derive(Debug)]
pub struct FetchedPage {
    pub url: String,
    pub bytes: Vec<u8>,
    pub charset: Option<String>,
}

pub fn http_get(url: &str) -> Result<FetchedPage> {
    let http = |source| Error::Http { url: url.to_string(), source };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .map_err(http)?;

    logd!("GET {url}");
    let resp = client.get(url).send().map_err(http)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { url: url.to_string(), status });
    }

    let charset = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(charset_from_content_type);

    let bytes = resp.bytes().map_err(http)?.to_vec();
    logd!("GET {url} → {} bytes (charset={:?})", bytes.len(), charset);

    Ok(FetchedPage { url: url.to_string(), bytes, charset })
}
