pub mod app;
pub mod cli;
pub mod companies;
pub mod config;
pub mod error;
pub mod fetch;
pub mod present;
pub mod ui;

pub use error::{AppError, Result};
