//! Interactive shell
//!
//! Keeps one background service alive across many actions, so a token that
//! expires mid-session is refreshed before the next protected call.

use chrono::Utc;
use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::words::{list_with, save_with, whoami_with};
use crate::error::{Error, Result};
use crate::output::formatters::{format_local, format_remaining};

const ACTIONS: &[&str] = &[
    "List words",
    "Favourite words",
    "Save a phrase",
    "Who am I",
    "Session",
    "Quit",
];

/// Run the interactive shell
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.login().await?;
    println!("{} Logged in. Choose an action.\n", "✓".green());

    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("wordkeep")
            .items(ACTIONS)
            .default(0)
            .interact_opt()?;

        let outcome = match choice {
            Some(0) => {
                let filter = crate::words::WordFilter {
                    sort: ctx.config.preferences.sort.unwrap_or_default(),
                    ..Default::default()
                };
                list_with(&ctx, &filter).await
            }
            Some(1) => {
                let filter = crate::words::WordFilter {
                    favorites_only: true,
                    sort: ctx.config.preferences.sort.unwrap_or_default(),
                    ..Default::default()
                };
                list_with(&ctx, &filter).await
            }
            Some(2) => {
                let phrase: String = Input::with_theme(&theme)
                    .with_prompt("Word or phrase")
                    .interact_text()?;
                save_with(&ctx, &phrase).await
            }
            Some(3) => whoami_with(&ctx).await,
            Some(4) => {
                print_session(&ctx).await;
                Ok(())
            }
            _ => break,
        };

        match outcome {
            Ok(()) => {}
            Err(Error::Api(e)) if e.requires_login() => {
                eprintln!("{} {}", "✗".red(), e);
                ctx.login().await?;
            }
            Err(e) => eprintln!("{} {}", "✗".red(), e),
        }
        println!();
    }

    Ok(())
}

async fn print_session(ctx: &CommandContext) {
    let store = ctx.background().session().store();
    match store.current().await {
        Some(token) => {
            let expires = format_local(token.expires_at);
            match format_remaining(token.expires_at, Utc::now()) {
                Some(left) => println!(
                    "{} Token valid until {} ({} left)",
                    "✓".green(),
                    expires,
                    left
                ),
                None => println!(
                    "{} Token expired at {} (refreshed on next request)",
                    "⚠".yellow(),
                    expires
                ),
            }
        }
        None => println!("{} No token held", "○".dimmed()),
    }
    println!("  Service: {}", ctx.api_host().cyan());
}
