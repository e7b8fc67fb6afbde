//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completion;
pub mod config;
pub mod context;
pub mod register;
pub mod shell;
pub mod status;
pub mod words;

pub use args::{OutputFormat, WordFilterArgs};
pub use context::CommandContext;

/// Wordkeep CLI - companion for the Wordkeep vocabulary service
#[derive(Parser, Debug)]
#[command(name = "wordkeep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "WORDKEEP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "WORDKEEP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the vocabulary service host
    #[arg(long, global = true, env = "WORDKEEP_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Email to log in with (defaults to the configured email)
    #[arg(long, global = true, env = "WORDKEEP_EMAIL", hide_env = true)]
    pub email: Option<String>,

    /// Password; prompted for when not set
    #[arg(
        long,
        global = true,
        env = "WORDKEEP_PASSWORD",
        hide = true,
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "WORDKEEP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new account
    Register {
        /// Display name
        #[arg(long)]
        name: String,
    },

    /// Save a word or phrase (the service translates it)
    Save {
        /// Word or phrase; several arguments are joined with spaces
        #[arg(required = true)]
        phrase: Vec<String>,
    },

    /// List saved words
    #[command(visible_alias = "ls")]
    Words {
        #[command(flatten)]
        filters: WordFilterArgs,
    },

    /// Set a custom translation for a saved word
    Translate {
        /// Word ID
        word_id: String,

        /// New translation
        translation: String,

        /// Part of speech; guessed by the service when omitted
        #[arg(long, short = 'p')]
        pos: Option<String>,
    },

    /// Mark a word as favourite
    Favorite {
        /// Word ID
        word_id: String,

        /// Remove the favourite mark instead
        #[arg(long)]
        off: bool,
    },

    /// Remove a word from your list
    Delete {
        /// Word ID
        word_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show the logged-in user
    Whoami,

    /// Interactive session
    Shell,

    /// Show configuration status
    Status,

    /// Manage local configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   wordkeep completion bash > /etc/bash_completion.d/wordkeep
  zsh:    wordkeep completion zsh > \"${fpath[1]}/_wordkeep\"
  fish:   wordkeep completion fish > ~/.config/fish/completions/wordkeep.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Set the default login email
    SetEmail {
        /// Email address
        #[arg(value_name = "EMAIL")]
        address: String,
    },

    /// Set the vocabulary service host
    SetHost {
        /// Host URL (e.g. http://127.0.0.1:8000)
        host: String,
    },
}
