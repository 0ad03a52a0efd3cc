use clap::{Parser, Subcommand};
use statusline::commands::{execute_cache_compact, execute_noti, execute_statusline};
use statusline::core::{
    config::{ConfigOverrides, StatuslineConfig},
    error::Result,
    print_error,
};
use std::env;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statusline")]
#[command(about = "Render a one-line git and notification status for a coding assistant prompt")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Read settings from this file instead of ~/.claude/.env
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Use this cache file instead of ~/.statusline_cache
    #[arg(long, global = true, value_name = "PATH")]
    cache_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List unread GitHub notifications
    Noti,
    /// Maintain the status line cache file
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Drop expired and superseded entries
    Compact,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the status line
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let overrides = ConfigOverrides {
        env_file: cli.env_file,
        cache_file: cli.cache_file,
    };
    let config = StatuslineConfig::load(&overrides);
    log::debug!("Loaded configuration: {config:?}");

    if let Err(e) = run(cli.command, &config) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>, config: &StatuslineConfig) -> Result<()> {
    match command {
        None => {
            // The host reads stdout through a pipe but renders the escapes
            colored::control::set_override(true);
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            execute_statusline(config, stdin, &mut stdout)
        }
        Some(Commands::Noti) => execute_noti(config),
        Some(Commands::Cache {
            action: CacheAction::Compact,
        }) => execute_cache_compact(config),
    }
}
