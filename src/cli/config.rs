//! Local configuration commands

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Print the effective configuration file contents
pub fn show(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;

    match opts.format {
        Some(OutputFormat::Json) => println!("{}", serde_json::to_string_pretty(&config)?),
        _ => {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
            print!("{}", yaml);
        }
    }

    Ok(())
}

/// Store the default login email
pub fn set_email(email: &str, opts: &GlobalOptions) -> Result<()> {
    if !email.contains('@') {
        return Err(ConfigError::Invalid(format!("'{}' is not an email address", email)).into());
    }

    let mut config = Config::load_at(opts.config_ref())?;
    config.email = Some(email.to_string());
    config.save_at(opts.config_ref())?;

    println!("{} Default email set to {}", "✓".green(), email.bold());
    Ok(())
}

/// Store the vocabulary service host
pub fn set_host(host: &str, opts: &GlobalOptions) -> Result<()> {
    if !(host.starts_with("http://") || host.starts_with("https://")) {
        return Err(ConfigError::Invalid(format!(
            "host must start with http:// or https://, got '{}'",
            host
        ))
        .into());
    }

    let mut config = Config::load_at(opts.config_ref())?;
    config.api_host = Some(host.trim_end_matches('/').to_string());
    config.save_at(opts.config_ref())?;

    println!("{} Vocabulary service set to {}", "✓".green(), host.cyan());
    Ok(())
}
