#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use kindred_core::DEFAULT_REPLY_DELAY;

/// Simulated reply delay override, set from command line
static REPLY_DELAY_MS: OnceLock<u64> = OnceLock::new();

/// Get the simulated matchmaker reply delay (from command line or default)
pub fn reply_delay() -> Duration {
    REPLY_DELAY_MS
        .get()
        .map(|ms| Duration::from_millis(*ms))
        .unwrap_or(DEFAULT_REPLY_DELAY)
}

/// Kindred - Matchmaking Desktop
#[derive(Parser, Debug)]
#[command(name = "kindred-desktop")]
#[command(about = "Kindred - matchmaking views over mock data")]
struct Args {
    /// Window title suffix (useful when running several demo instances)
    #[arg(short, long)]
    title: Option<String>,

    /// Simulated matchmaker reply delay in milliseconds
    #[arg(short, long)]
    reply_delay_ms: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Some(ms) = args.reply_delay_ms {
        let _ = REPLY_DELAY_MS.set(ms);
    }

    let title = match args.title {
        Some(ref suffix) => format!("Kindred - {}", suffix),
        None => "Kindred".to_string(),
    };

    tracing::info!(
        reply_delay_ms = reply_delay().as_millis() as u64,
        "Starting '{}'",
        title
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
