use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quote-watch")]
#[command(about = "Terminal viewer for single-symbol stock quotes from IEX Cloud")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// IEX Cloud API token (or set IEX_API_TOKEN)
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Override the API endpoint (or set IEX_BASE_URL)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive picker and quote panel
    Interactive,

    /// Fetch and print one quote, then exit
    Show {
        /// Company name or ticker symbol from the directory (e.g. Apple, AAPL)
        company: String,

        /// Write the fetched logo bytes to this file
        #[arg(long)]
        logo_out: Option<PathBuf>,

        /// Print the raw quote as JSON instead of the panel fields
        #[arg(long)]
        json: bool,
    },

    /// List the configured companies
    Companies,
}
