//! Single-writer presentation state for the quote panel.

use chrono::{DateTime, Local};

use crate::fetch::{LogoImage, Quote};
use crate::present::format::{
    change_percent_tone, change_tone, format_change_percent, format_number, Tone,
};

pub const PLACEHOLDER: &str = "-";

/// Everything the quote screen renders. Only the UI loop mutates this; fetch
/// completions reach it as messages, never directly.
#[derive(Debug, Clone, Default)]
pub struct QuotePanel {
    pub company_name: String,
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub change_tone: Tone,
    pub change_percent: String,
    pub change_percent_tone: Tone,
    pub logo: Option<LogoImage>,
    pub busy: bool,
    pub as_of: Option<DateTime<Local>>,
}

impl QuotePanel {
    pub fn new() -> Self {
        let mut panel = Self::default();
        panel.reset();
        panel.busy = false;
        panel
    }

    /// Blank the text fields back to placeholders and start the busy
    /// indicator. The logo is left alone until a replacement arrives.
    pub fn reset(&mut self) {
        self.company_name = PLACEHOLDER.to_string();
        self.symbol = PLACEHOLDER.to_string();
        self.price = PLACEHOLDER.to_string();
        self.change = PLACEHOLDER.to_string();
        self.change_tone = Tone::Flat;
        self.change_percent = PLACEHOLDER.to_string();
        self.change_percent_tone = Tone::Flat;
        self.as_of = None;
        self.busy = true;
    }

    /// Apply a completed quote. This is the only transition that stops the
    /// busy indicator.
    pub fn apply_quote(&mut self, quote: &Quote) {
        self.company_name = quote.company_name.clone();
        self.symbol = quote.symbol.clone();
        self.price = format_number(quote.price);
        self.change = format_number(quote.change);
        self.change_tone = change_tone(quote.change);
        self.change_percent = format_change_percent(quote.change_percent);
        self.change_percent_tone = change_percent_tone(quote.change, quote.change_percent);
        self.as_of = Some(quote.fetched_at);
        self.busy = false;
    }

    /// Apply fetched logo bytes. Touches nothing but the logo; in particular
    /// the busy indicator keeps running until a quote lands.
    pub fn apply_logo(&mut self, logo: LogoImage) {
        self.logo = Some(logo);
    }
}
