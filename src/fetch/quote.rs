use chrono::{DateTime, Local};
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::config::Settings;
use crate::error::AppError;
use crate::fetch::FetchResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Point-in-time price snapshot for one ticker symbol. Produced fresh per
/// request, never cached.
pub struct Quote {
    pub company_name: String,
    pub symbol: String,
    /// Latest traded price.
    pub price: f64,
    /// Absolute day-over-day change.
    pub change: f64,
    /// Fractional day-over-day change; multiply by 100 for display.
    pub change_percent: f64,
    pub fetched_at: DateTime<Local>,
}

/// Fetch the current quote for `symbol`. Single attempt, no retry; callers
/// log and drop failures so the previous display persists.
pub async fn fetch_quote(client: &Client, settings: &Settings, symbol: &str) -> FetchResult<Quote> {
    let url = settings.quote_url(symbol);
    let response = client.get(&url).send().await?;

    if response.status() != StatusCode::OK {
        return Err(AppError::message(format!(
            "Quote request for {} failed with status {}",
            symbol,
            response.status()
        )));
    }

    let body = response.text().await?;
    if body.is_empty() {
        return Err(AppError::message(format!(
            "Quote request for {} returned an empty body",
            symbol
        )));
    }

    parse_quote(&body)
}

/// Extract the required quote fields from a response body. A missing or
/// mistyped field makes the whole response malformed; no partial quotes.
pub fn parse_quote(body: &str) -> FetchResult<Quote> {
    let json: serde_json::Value = serde_json::from_str(body)?;

    let get_string = |key: &str| -> FetchResult<String> {
        json.get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .ok_or_else(|| AppError::malformed(format!("missing or non-string field `{}`", key)))
    };

    let get_number = |key: &str| -> FetchResult<f64> {
        json.get(key)
            .and_then(|value| value.as_f64())
            .ok_or_else(|| AppError::malformed(format!("missing or non-numeric field `{}`", key)))
    };

    Ok(Quote {
        company_name: get_string("companyName")?,
        symbol: get_string("symbol")?,
        price: get_number("latestPrice")?,
        change: get_number("change")?,
        change_percent: get_number("changePercent")?,
        fetched_at: Local::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{
        "companyName": "Apple Inc",
        "symbol": "AAPL",
        "latestPrice": 132.05,
        "change": -1.5,
        "changePercent": -0.01123,
        "volume": 111130532
    }"#;

    #[test]
    fn parses_a_well_formed_quote() {
        let quote = parse_quote(WELL_FORMED).expect("quote");
        assert_eq!(quote.company_name, "Apple Inc");
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, 132.05);
        assert_eq!(quote.change, -1.5);
        assert_eq!(quote.change_percent, -0.01123);
    }

    #[test]
    fn accepts_integer_valued_numbers() {
        let body = r#"{"companyName":"A","symbol":"A","latestPrice":100,"change":0,"changePercent":0}"#;
        let quote = parse_quote(body).expect("quote");
        assert_eq!(quote.price, 100.0);
        assert_eq!(quote.change, 0.0);
    }

    #[test]
    fn rejects_missing_latest_price() {
        let body = r#"{"companyName":"Apple Inc","symbol":"AAPL","change":-1.5,"changePercent":-0.01}"#;
        let err = parse_quote(body).expect_err("must fail");
        assert!(
            err.to_string().contains("latestPrice"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn rejects_mistyped_field() {
        let body = r#"{"companyName":"Apple Inc","symbol":"AAPL","latestPrice":"132.05","change":-1.5,"changePercent":-0.01}"#;
        assert!(parse_quote(body).is_err());
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(parse_quote("[]").is_err());
        assert!(parse_quote("not json").is_err());
    }
}
