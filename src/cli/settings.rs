//! `geolab settings` command
//!
//! Manage the stored provider API key.
//!
//! # Usage
//! ```bash
//! geolab settings show            # Masked key and file location
//! geolab settings set-key         # Prompt (hidden input)
//! geolab settings set-key sk-...  # Set directly
//! geolab settings clear
//! geolab settings path
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use dialoguer::Password;

use crate::settings::{mask, CredentialStore, FileSettingsStore};

#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show the stored key (masked)
    Show,

    /// Store an API key
    SetKey {
        /// The key (prompted for when omitted)
        key: Option<String>,
    },

    /// Remove the stored key
    Clear,

    /// Print the settings file location
    Path,
}

pub fn run(args: SettingsArgs) -> Result<()> {
    let store = FileSettingsStore::open_default()?;

    match args.command {
        SettingsCommands::Show => {
            println!("{} {}", "File:".cyan(), store.path().display());
            match store.api_key() {
                Some(key) => println!("{} {}", "API key:".cyan(), mask(&key)),
                None => println!("{} {}", "API key:".cyan(), "not set".yellow()),
            }
        }
        SettingsCommands::SetKey { key } => {
            let key = match key {
                Some(key) => key,
                None => Password::new().with_prompt("API key").interact()?,
            };
            if key.trim().is_empty() {
                anyhow::bail!("API key cannot be empty (use 'geolab settings clear' to remove it)");
            }
            store.set_api_key(&key)?;
            println!("{} API key saved to {}", "✓".green(), store.path().display());
        }
        SettingsCommands::Clear => {
            store.clear()?;
            println!("{} API key removed", "✓".green());
        }
        SettingsCommands::Path => {
            println!("{}", store.path().display());
        }
    }

    Ok(())
}
