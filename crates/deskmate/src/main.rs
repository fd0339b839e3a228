// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deskmate - a multilingual IT helpdesk assistant.
//!
//! This is the binary entry point for the Deskmate CLI.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod chat;

/// Deskmate - a multilingual IT helpdesk assistant.
#[derive(Parser, Debug)]
#[command(name = "deskmate", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive helpdesk chat session.
    Chat,
    /// Print the resolved configuration.
    Config,
    /// List supported languages.
    Languages,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match deskmate_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            deskmate_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    // RUST_LOG overrides the configured level when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.agent.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Chat) | None => {
            if let Err(e) = chat::run_chat(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                eprintln!("error: failed to render config: {e}");
                std::process::exit(1);
            }
        },
        Some(Commands::Languages) => {
            for language in deskmate_core::Language::ALL {
                println!(
                    "{} {}  {}",
                    language.flag(),
                    language.code(),
                    language.native_name()
                );
            }
        }
    }
}
