//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::Config;
use crate::consts::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_NOTES_FILE};

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "chatmate")]
#[command(about = "Evening check-in companion with a tomorrow-notes file", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Notes file (default: user_schedule.json in the working directory)
    #[arg(short = 'f', long, global = true, value_name = "PATH")]
    pub(crate) notes: Option<PathBuf>,

    /// Model identifier sent to the completion API
    #[arg(short, long, global = true)]
    pub(crate) model: Option<String>,

    /// API key for the completion service
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub(crate) api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) base_url: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true, value_name = "SECS")]
    pub(crate) timeout: Option<u64>,

    /// Timezone used to work out "tomorrow" (e.g., "Asia/Seoul", "UTC")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Language for prompts and messages ("ko" or "en")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Output as JSON (notes listing)
    #[arg(short, long, global = true)]
    pub(crate) json: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Options: only apply if CLI didn't set them
        if self.notes.is_none() {
            self.notes = config.notes_file.clone();
        }
        if self.model.is_none() {
            self.model = config.model.clone();
        }
        if self.api_key.is_none() {
            self.api_key = config.api_key.clone();
        }
        if self.base_url.is_none() {
            self.base_url = config.base_url.clone();
        }
        if self.timeout.is_none() {
            self.timeout = config.timeout_secs;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        self
    }

    pub(crate) fn notes_path(&self) -> PathBuf {
        self.notes
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_FILE))
    }

    pub(crate) fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub(crate) fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
