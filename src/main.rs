//! Nexus Access - Accessibility Preference Engine
//!
//! CLI entry point for inspecting and mutating the persisted accessibility
//! settings from a shell.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nexus_access::{DocumentState, FileStorage, PreferenceStore, PreferenceUpdate};

#[derive(Parser)]
#[command(name = "nexus-access", version, about = "Accessibility settings for Nexus")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current settings as JSON
    Show,
    /// Merge a JSON partial update, e.g. '{"darkMode": true, "fontSize": 20}'
    Set {
        /// JSON object with the fields to change
        update: String,
    },
    /// Restore defaults and clear the stored settings
    Reset,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let storage = FileStorage::new();
    tracing::debug!("settings directory: {}", storage.root().display());
    let mut store = PreferenceStore::new(storage, DocumentState::new());

    match cli.command {
        Command::Show => {
            println!("{}", serde_json::to_string_pretty(store.settings())?);
        }
        Command::Set { update } => {
            let update: PreferenceUpdate =
                serde_json::from_str(&update).context("invalid settings update")?;
            let settings = store.update(update);
            println!("{}", serde_json::to_string_pretty(settings)?);
        }
        Command::Reset => {
            let settings = store.reset();
            println!("{}", serde_json::to_string_pretty(settings)?);
        }
    }

    Ok(())
}
