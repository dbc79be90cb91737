//! Scopehook CLI - receiver server and signature tooling.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;

use commands::{serve, sign, verify};

#[derive(Parser)]
#[command(name = "scopehook")]
#[command(about = "Receiver and signature tooling for signed scope notifications")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP notification receiver
    Serve {
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides config)
        #[arg(long)]
        port: Option<u16>,
        /// Shared API key (overrides config)
        #[arg(long, env = "SCOPEHOOK_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
    /// Print the signature of a JSON notification
    Sign {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Shared API key
        #[arg(long, env = "SCOPEHOOK_API_KEY", hide_env_values = true, default_value = "")]
        api_key: String,
        /// Print the notification with its signature attached instead
        #[arg(long)]
        attach: bool,
    },
    /// Check the signature of a JSON notification
    Verify {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Shared API key
        #[arg(long, env = "SCOPEHOOK_API_KEY", hide_env_values = true, default_value = "")]
        api_key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if the notification is not authentic
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            api_key,
        } => serve::run(config, host, port, api_key, cli.verbose),
        Commands::Sign {
            input,
            api_key,
            attach,
        } => {
            commands::init_tracing(cli.verbose);
            sign::run(input, api_key, attach)
        }
        Commands::Verify {
            input,
            api_key,
            json,
            strict,
        } => {
            commands::init_tracing(cli.verbose);
            verify::run(input, api_key, json, strict)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
