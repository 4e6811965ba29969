pub mod format;
pub mod state;

pub use format::{change_percent_tone, change_tone, format_change_percent, format_number, Tone};
pub use state::{QuotePanel, PLACEHOLDER};
