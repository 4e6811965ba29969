use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::config::Settings;
use crate::error::{AppError, Context};
use crate::fetch::FetchResult;

#[derive(Debug, Clone, PartialEq)]
pub struct LogoImage {
    pub source_url: String,
    pub bytes: Vec<u8>,
}

/// Fetch the company logo for `symbol`: the metadata endpoint yields an image
/// URL, then the raw bytes are pulled with a blocking client off the async
/// runtime. Independent of the quote request; may finish before, after, or
/// never relative to it.
pub async fn fetch_logo(
    client: &Client,
    settings: &Settings,
    symbol: &str,
) -> FetchResult<LogoImage> {
    let url = settings.logo_url(symbol);
    let response = client.get(&url).send().await?;

    if response.status() != StatusCode::OK {
        return Err(AppError::message(format!(
            "Logo request for {} failed with status {}",
            symbol,
            response.status()
        )));
    }

    let body = response.text().await?;
    if body.is_empty() {
        return Err(AppError::message(format!(
            "Logo request for {} returned an empty body",
            symbol
        )));
    }

    let logo_url = parse_logo_url(&body)?;
    fetch_logo_bytes(logo_url).await
}

/// Extract and validate the `url` field from the logo metadata body.
pub fn parse_logo_url(body: &str) -> FetchResult<Url> {
    let json: serde_json::Value = serde_json::from_str(body)?;

    let raw = json
        .get("url")
        .and_then(|value| value.as_str())
        .ok_or_else(|| AppError::malformed("missing or non-string field `url`"))?;

    Url::parse(raw).map_err(|err| AppError::malformed(format!("invalid logo URL {}: {}", raw, err)))
}

async fn fetch_logo_bytes(url: Url) -> FetchResult<LogoImage> {
    let source_url = url.to_string();
    let bytes = tokio::task::spawn_blocking(move || -> FetchResult<Vec<u8>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to construct logo HTTP client")?;
        let response = client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    })
    .await??;

    Ok(LogoImage { source_url, bytes })
}
