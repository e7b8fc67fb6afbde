//! Register command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::AuthApi;
use crate::error::Result;
use crate::models::UserDisplay;
use crate::output::{self, Formattable};

/// Create an account. No token is issued; log in afterwards.
pub async fn run(name: &str, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let email = ctx.email()?;
    let password = ctx.password("Choose a password", true)?;

    let spinner = output::spinner("Creating account...");
    let result = ctx.auth().register(name, &email, &password).await;
    spinner.finish_and_clear();
    let user = result?;

    if ctx.format == crate::cli::OutputFormat::Pretty {
        println!("{} Account created", "✓".green());
    }
    UserDisplay::from(user).print(ctx.format)?;

    Ok(())
}
