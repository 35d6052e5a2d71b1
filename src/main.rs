//! tenkey - an iPhone-style ten-key calculator for the terminal.

mod clipboard;
mod config;
mod display;
mod engine;
mod input;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::{Config, ThemeVariant};

#[derive(Parser, Debug)]
#[command(
    name = "tenkey",
    version,
    about = "An iPhone-style ten-key calculator for the terminal."
)]
struct Cli {
    /// Evaluate a key script headlessly and print the final display.
    ///
    /// Digits, '.', '+', '-', '*', '/', '=', '%', 'n' (sign),
    /// 'b' (backspace), 'c' (clear); whitespace is ignored.
    #[arg(long, value_name = "SCRIPT")]
    keys: Option<String>,

    /// Configuration file path (defaults to the user config directory).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the color theme from the config file.
    #[arg(long, value_enum)]
    theme: Option<ThemeVariant>,

    /// Enable debug logging.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(variant) = cli.theme {
        config.theme.variant = variant;
    }

    match cli.keys {
        Some(script) => run_keys(&script, &config),
        None => ui::run(&config),
    }
}

fn run_keys(script: &str, config: &Config) -> Result<()> {
    let mut calc = engine::Calculator::new();
    input::feed(&mut calc, script)?;
    let readout = display::Readout::from_calculator(&calc, config.display.grouping);
    println!("{}", readout.primary);
    Ok(())
}

/// Logging goes to stderr so it never corrupts the frontend's stdout.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tenkey=debug")
    } else {
        EnvFilter::new("tenkey=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
