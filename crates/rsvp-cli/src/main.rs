//! `rsvp`: admin command line for the RSVP service.
//!
//! # Usage
//!
//! ```text
//! rsvp list
//! rsvp tally --url http://localhost:3000
//! rsvp submit --first-name Ana --last-name Suárez --attending si \
//!   --phone "+598 99 999 999" --identity 12345678
//! rsvp --config ~/.config/rsvp/config.toml list
//! ```

mod client;
mod render;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use rsvp_core::record::CandidateRsvp;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rsvp", about = "Admin command line for the RSVP service")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the RSVP server (default: http://localhost:3000).
  #[arg(long, env = "RSVP_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print the tally and every RSVP, newest first.
  List,
  /// Print only the tally.
  Tally,
  /// Submit an RSVP.
  Submit {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name:  String,
    /// `si`/`yes` or `no`.
    #[arg(long)]
    attending:  String,
    #[arg(long, default_value = "")]
    phone:      String,
    #[arg(long, default_value = "")]
    identity:   String,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:3000".to_string()),
  };

  let client = ApiClient::new(api_config)?;

  match args.command {
    Command::List => {
      let listing = client.listing().await?;
      println!("{}", render::listing(&listing, &Local));
    }
    Command::Tally => {
      let listing = client.listing().await?;
      println!("{}", render::tally(&listing.tally));
    }
    Command::Submit { first_name, last_name, attending, phone, identity } => {
      let candidate = CandidateRsvp {
        first_name,
        last_name,
        phone,
        identity_number: identity,
        attending,
      };
      let record = client.submit(&candidate).await?;
      println!("¡Confirmación enviada exitosamente! ({})", record.id);
    }
  }

  Ok(())
}
