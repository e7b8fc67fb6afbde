//! Command execution context
//!
//! Provides a unified context for command execution: config loading, HTTP
//! client setup, the background service and the bridge-backed vocabulary
//! client used by every surface.

use std::sync::Arc;

use dialoguer::{Password, theme::ColorfulTheme};
use log::debug;

use crate::background::BackgroundService;
use crate::bridge::BridgeClient;
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{AuthApi, AuthClient, HttpContext, VocabularyClient};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::output;

/// Context for command execution containing config, clients and runtime options.
///
/// The background service lives as long as the context. Surfaces (the login
/// prompt, the word list, ...) reach its token state only through bridge
/// connections.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Output format preference
    pub format: OutputFormat,
    opts: GlobalOptions,
    http: HttpContext,
    auth: AuthClient,
    service: BackgroundService,
    vocabulary: VocabularyClient<BridgeClient>,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Must be called from within a Tokio runtime, since it spawns the
    /// background side of the vocabulary surface's bridge connection.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let format = resolve_format(opts, &config);

        let api_host = opts.api_host_ref().or(config.api_host.as_deref());
        let http = HttpContext::new(api_host, config.request_timeout())?;
        debug!("Using vocabulary service at {}", http.base_url());

        let auth = AuthClient::new(http.clone(), config.timestamp_policy);
        let service = BackgroundService::new(
            Arc::new(auth.clone()),
            config.timestamp_policy,
            config.bridge_timeout(),
        );
        let vocabulary = VocabularyClient::new(http.clone(), service.connect());

        Ok(Self {
            config,
            format,
            opts: opts.clone(),
            http,
            auth,
            service,
            vocabulary,
        })
    }

    pub fn api_host(&self) -> &str {
        self.http.base_url()
    }

    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    pub fn vocabulary(&self) -> &VocabularyClient<BridgeClient> {
        &self.vocabulary
    }

    pub fn background(&self) -> &BackgroundService {
        &self.service
    }

    /// Email to authenticate with (flag, env, then config)
    pub fn email(&self) -> Result<String> {
        self.config.require_email(self.opts.email_ref())
    }

    /// Password from the environment, or an interactive prompt
    pub fn password(&self, prompt: &str, confirm: bool) -> Result<String> {
        if let Some(ref password) = self.opts.password {
            return Ok(password.clone());
        }

        let theme = ColorfulTheme::default();
        let mut input = Password::with_theme(&theme).with_prompt(prompt);
        if confirm {
            input = input.with_confirmation("Repeat password", "Passwords do not match");
        }
        Ok(input.interact()?)
    }

    /// Run the login surface.
    ///
    /// Exchanges credentials for a token and delivers it to the background
    /// service over a dedicated bridge connection. The token is then read
    /// back on the same connection, which confirms the background applied
    /// the delivery before any other surface asks for it.
    pub async fn login(&self) -> Result<()> {
        let email = self.email()?;
        let password = self.password(&format!("Password for {}", email), false)?;

        let spinner = output::spinner("Logging in...");
        let result = self.auth.login(&email, &password).await;
        spinner.finish_and_clear();
        let token = result?;

        let surface = self.service.connect();
        surface.deliver_token(&token).await?;

        let reply = surface.request_token().await?;
        if reply.value.is_none() {
            return Err(ApiError::TokenUnavailable(
                "background service did not accept the token".to_string(),
            )
            .into());
        }

        debug!("Token delivered to background service");
        Ok(())
    }
}

/// Output format: flag/env first, then the config preference, then pretty
fn resolve_format(opts: &GlobalOptions, config: &Config) -> OutputFormat {
    opts.format
        .or_else(|| {
            config
                .preferences
                .format
                .as_deref()
                .and_then(OutputFormat::from_config)
        })
        .unwrap_or_default()
}
