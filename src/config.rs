//! Runtime settings: API credential and endpoint override.

use crate::error::{AppError, Result};

pub const DEFAULT_BASE_URL: &str = "https://cloud.iexapis.com/stable";

pub const TOKEN_ENV: &str = "IEX_API_TOKEN";
pub const BASE_URL_ENV: &str = "IEX_BASE_URL";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_token: String,
    pub base_url: String,
}

impl Settings {
    /// Resolve settings from explicit values (CLI flags) falling back to the
    /// environment. The token is required; the base URL defaults to IEX Cloud.
    pub fn resolve(token: Option<String>, base_url: Option<String>) -> Result<Self> {
        let token = token.or_else(|| std::env::var(TOKEN_ENV).ok());
        let base_url = base_url.or_else(|| std::env::var(BASE_URL_ENV).ok());
        Self::from_parts(token, base_url)
    }

    pub fn from_parts(token: Option<String>, base_url: Option<String>) -> Result<Self> {
        let api_token = match token {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => {
                return Err(AppError::message(format!(
                    "API token not configured; pass --token or set {}",
                    TOKEN_ENV
                )))
            }
        };

        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|err| AppError::message(format!("Invalid base URL {}: {}", base_url, err)))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(AppError::message(format!(
                "Base URL must be an absolute http(s) URL with a host: {}",
                base_url
            )));
        }

        Ok(Self {
            api_token,
            base_url,
        })
    }

    /// Host of the configured endpoint, used by the connectivity probe.
    pub fn api_host(&self) -> String {
        reqwest::Url::parse(&self.base_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "cloud.iexapis.com".to_string())
    }

    pub fn quote_url(&self, symbol: &str) -> String {
        format!(
            "{}/stock/{}/quote?token={}",
            self.base_url, symbol, self.api_token
        )
    }

    pub fn logo_url(&self, symbol: &str) -> String {
        format!(
            "{}/stock/{}/logo?token={}",
            self.base_url, symbol, self.api_token
        )
    }
}
