//! Wordkeep CLI - companion for the Wordkeep vocabulary service

use clap::Parser;

mod background;
mod bridge;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;
mod token;
mod words;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, ConfigCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warn, or debug with `--debug`
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Register { name } => cli::register::run(&name, &opts).await,
        Commands::Save { phrase } => cli::words::save(&phrase, &opts).await,
        Commands::Words { filters } => cli::words::list(&filters, &opts).await,
        Commands::Translate {
            word_id,
            translation,
            pos,
        } => cli::words::translate(&word_id, &translation, pos.as_deref(), &opts).await,
        Commands::Favorite { word_id, off } => cli::words::favorite(&word_id, !off, &opts).await,
        Commands::Delete { word_id, yes } => cli::words::delete(&word_id, yes, &opts).await,
        Commands::Whoami => cli::words::whoami(&opts).await,
        Commands::Shell => cli::shell::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => cli::config::show(&opts),
            ConfigCommands::SetEmail { address } => cli::config::set_email(&address, &opts),
            ConfigCommands::SetHost { host } => cli::config::set_host(&host, &opts),
        },
        Commands::Completion { shell } => {
            cli::completion::run(shell);
            Ok(())
        }
        Commands::Version => {
            println!("wordkeep version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
