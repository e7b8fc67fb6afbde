//! Status command implementation

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::http::DEFAULT_API_HOST;
use crate::config::Config;
use crate::error::Result;
use crate::token::TimestampPolicy;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = Config::load_at(opts.config_ref())?;

    let email = opts.email_ref().or(config.email.as_deref());
    let (api_host, host_source) = match (opts.api_host_ref(), config.api_host.as_deref()) {
        (Some(host), _) => (host, "flag/env"),
        (None, Some(host)) => (host, "config"),
        (None, None) => (DEFAULT_API_HOST, "default"),
    };

    if opts.format == Some(OutputFormat::Json) {
        let output = serde_json::json!({
            "config_file": config_path.display().to_string(),
            "config_exists": config_path.exists(),
            "email": email,
            "api_host": api_host,
            "timestamp_policy": config.timestamp_policy,
            "request_timeout_secs": config.request_timeout_secs,
            "bridge_timeout_ms": config.bridge_timeout_ms,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", "Wordkeep Configuration Status".bold());

    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created yet)".dimmed()
        );
    }
    println!();

    match email {
        Some(email) => println!("{} Login email: {}", "✓".green(), email),
        None => {
            println!("{} No login email configured", "✗".red());
            println!("  → Run 'wordkeep config set-email <EMAIL>' or pass --email");
        }
    }

    println!(
        "{} Vocabulary service: {} {}",
        "✓".green(),
        api_host.cyan(),
        format!("({})", host_source).dimmed()
    );

    match config.timestamp_policy {
        TimestampPolicy::AssumeUtc => println!(
            "{} Zoneless expiry timestamps read as UTC",
            "○".dimmed()
        ),
        TimestampPolicy::Strict => println!(
            "{} Zoneless expiry timestamps rejected (strict)",
            "○".dimmed()
        ),
    }

    println!(
        "{} Timeouts: requests {}s, background answers {}ms",
        "○".dimmed(),
        config.request_timeout_secs,
        config.bridge_timeout_ms
    );
    println!();

    Ok(())
}
