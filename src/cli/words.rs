//! Vocabulary commands
//!
//! Each command runs the login surface first, then acts through the
//! bridge-backed vocabulary client.

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, WordFilterArgs};
use crate::client::VocabularyApi;
use crate::error::Result;
use crate::models::{UserDisplay, WordDisplay};
use crate::output::Formattable;
use crate::words::WordFilter;

async fn logged_in(opts: &GlobalOptions) -> Result<CommandContext> {
    let ctx = CommandContext::new(opts)?;
    ctx.login().await?;
    Ok(ctx)
}

fn confirm_done(ctx: &CommandContext, message: &str) {
    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "ok": true })),
        _ => println!("{} {}", "✓".green(), message),
    }
}

/// Save a word or phrase
pub async fn save(phrase: &[String], opts: &GlobalOptions) -> Result<()> {
    let ctx = logged_in(opts).await?;
    save_with(&ctx, &phrase.join(" ")).await
}

pub(crate) async fn save_with(ctx: &CommandContext, phrase: &str) -> Result<()> {
    let saved = ctx.vocabulary().save_phrase(phrase.trim()).await?;
    match ctx.format {
        OutputFormat::Json => println!("{}", crate::output::json::format_json(&saved)?),
        _ => println!("{} Saved '{}'", "✓".green(), phrase.trim().bold()),
    }
    Ok(())
}

/// List saved words
pub async fn list(filters: &WordFilterArgs, opts: &GlobalOptions) -> Result<()> {
    let ctx = logged_in(opts).await?;
    let filter = filters.to_filter(ctx.config.preferences.sort);
    list_with(&ctx, &filter).await
}

pub(crate) async fn list_with(ctx: &CommandContext, filter: &WordFilter) -> Result<()> {
    let words = ctx.vocabulary().list_words().await?;
    let total = words.len();
    let words = filter.apply(words);
    debug!("Showing {} of {} words", words.len(), total);

    let display: Vec<WordDisplay> = words.into_iter().map(WordDisplay::from).collect();
    display.print(ctx.format)
}

/// Set a custom translation
pub async fn translate(
    word_id: &str,
    translation: &str,
    pos: Option<&str>,
    opts: &GlobalOptions,
) -> Result<()> {
    let ctx = logged_in(opts).await?;
    ctx.vocabulary()
        .set_custom_translation(word_id, translation, pos)
        .await?;
    confirm_done(&ctx, &format!("Translation updated for {}", word_id));
    Ok(())
}

/// Mark or unmark a favourite
pub async fn favorite(word_id: &str, on: bool, opts: &GlobalOptions) -> Result<()> {
    let ctx = logged_in(opts).await?;
    ctx.vocabulary().set_favorite(word_id, on).await?;
    let message = if on {
        format!("Marked {} as favourite", word_id)
    } else {
        format!("Removed favourite mark from {}", word_id)
    };
    confirm_done(&ctx, &message);
    Ok(())
}

/// Delete a word from the list
pub async fn delete(word_id: &str, yes: bool, opts: &GlobalOptions) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete word {}?", word_id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let ctx = logged_in(opts).await?;
    ctx.vocabulary().delete_word(word_id).await?;
    confirm_done(&ctx, &format!("Deleted {}", word_id));
    Ok(())
}

/// Show the logged-in user
pub async fn whoami(opts: &GlobalOptions) -> Result<()> {
    let ctx = logged_in(opts).await?;
    whoami_with(&ctx).await
}

pub(crate) async fn whoami_with(ctx: &CommandContext) -> Result<()> {
    let user = ctx.vocabulary().current_user().await?;
    UserDisplay::from(user).print(ctx.format)
}
