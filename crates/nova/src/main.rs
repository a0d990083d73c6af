// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nova - an offline voice-driven personal assistant.
//!
//! This is the binary entry point. Running with no subcommand starts the
//! full assistant (speech loop plus introspection loop).

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod doctor;
mod memory_cmd;
mod serve;

/// Nova - an offline voice-driven personal assistant.
#[derive(Parser, Debug)]
#[command(name = "nova", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the assistant (speech loop plus introspection loop).
    Serve,
    /// Run diagnostic checks against the Nova environment.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Inspect or edit the long-term memory store.
    Memory {
        #[command(subcommand)]
        command: MemoryCommands,
    },
}

/// Memory store subcommands.
#[derive(Subcommand, Debug)]
enum MemoryCommands {
    /// List all remembered facts.
    List,
    /// Remove a remembered fact by key.
    Forget { key: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match nova_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            nova_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) | None => serve::run_serve(config).await,
        Some(Commands::Doctor { plain }) => doctor::run_doctor(&config, plain).await,
        Some(Commands::Memory { command }) => match command {
            MemoryCommands::List => memory_cmd::run_memory_list(&config),
            MemoryCommands::Forget { key } => memory_cmd::run_memory_forget(&config, &key),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
