pub mod quote_screen;
pub mod terminal;

pub use quote_screen::run_quote_screen;
pub use terminal::TerminalGuard;
