use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use quote_watch::app::Refresher;
use quote_watch::cli::{Cli, Commands};
use quote_watch::companies::CompanyDirectory;
use quote_watch::config::Settings;
use quote_watch::fetch::{fetch_logo, fetch_quote, ConnectivityProbe, TcpProbe};
use quote_watch::present::QuotePanel;
use quote_watch::ui::run_quote_screen;
use quote_watch::AppError;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Interactive => {
            let settings = Settings::resolve(cli.token, cli.base_url)?;
            run_interactive(settings)?;
        }
        Commands::Show {
            ref company,
            ref logo_out,
            json,
        } => {
            let settings = Settings::resolve(cli.token.clone(), cli.base_url.clone())?;
            show_quote(settings, company, logo_out.as_deref(), json).await?;
        }
        Commands::Companies => {
            for (name, symbol) in CompanyDirectory.entries() {
                println!("{:<5} {}", symbol, name);
            }
        }
    }

    Ok(())
}

fn run_interactive(settings: Settings) -> Result<()> {
    let probe = TcpProbe::new(settings.api_host());
    let (refresher, rx) = Refresher::new(settings, Box::new(probe));
    run_quote_screen(CompanyDirectory, &refresher, &rx)?;
    Ok(())
}

async fn show_quote(
    settings: Settings,
    company: &str,
    logo_out: Option<&Path>,
    json: bool,
) -> Result<()> {
    let directory = CompanyDirectory;
    let symbol = directory
        .resolve(company)
        .ok_or_else(|| AppError::message(format!("Unknown company: {}", company)))?;

    let probe = TcpProbe::new(settings.api_host());
    if !probe.is_connected() {
        return Err(AppError::Offline).context("Check your connection, then run again to retry");
    }

    let client = reqwest::Client::new();
    let (quote, logo) = tokio::join!(
        fetch_quote(&client, &settings, symbol),
        fetch_logo(&client, &settings, symbol),
    );

    if json {
        let quote = quote?;
        println!("{}", serde_json::to_string_pretty(&quote)?);
        if let (Some(path), Ok(logo)) = (logo_out, &logo) {
            std::fs::write(path, &logo.bytes)
                .with_context(|| format!("Failed to write logo to {}", path.display()))?;
        }
        return Ok(());
    }

    // Failures keep the "-" placeholders, matching the interactive panel.
    let mut panel = QuotePanel::new();
    panel.reset();
    match quote {
        Ok(quote) => panel.apply_quote(&quote),
        Err(err) => log::warn!("Quote fetch for {} failed: {}", symbol, err),
    }
    match logo {
        Ok(logo) => panel.apply_logo(logo),
        Err(err) => log::warn!("Logo fetch for {} failed: {}", symbol, err),
    }

    println!("Company   {}", panel.company_name);
    println!("Symbol    {}", panel.symbol);
    println!("Price     {}", panel.price);
    println!("Change    {}", panel.change);
    println!("Change %  {}", panel.change_percent);
    match &panel.logo {
        Some(logo) => println!("Logo      {} ({} bytes)", logo.source_url, logo.bytes.len()),
        None => println!("Logo      -"),
    }

    if let (Some(path), Some(logo)) = (logo_out, &panel.logo) {
        std::fs::write(path, &logo.bytes)
            .with_context(|| format!("Failed to write logo to {}", path.display()))?;
        println!("Logo bytes written to {}", path.display());
    }

    Ok(())
}
