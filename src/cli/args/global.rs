//! Global CLI options shared across all commands
//!
//! This module provides a centralized struct for global CLI options so
//! handlers take one argument instead of a growing list of flags.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
///
/// Not `Debug`, since it may hold a password.
#[derive(Clone)]
pub struct GlobalOptions {
    /// Output format; `None` defers to the config file
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.wordkeep/config.yaml)
    pub config: Option<String>,

    /// Custom API host for development/testing
    pub api_host: Option<String>,

    /// Login email override
    pub email: Option<String>,

    /// Password supplied through the environment (skips the prompt)
    pub password: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    ///
    /// This is the primary constructor, called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
            email: cli.email.clone(),
            password: cli.password.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }

    /// Get email override as `Option<&str>`.
    pub fn email_ref(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
