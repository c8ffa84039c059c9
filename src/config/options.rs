// src/config/options.rs
use std::time::Duration;

use super::consts::*;
use crate::query::QueryMode;

/// What to do when a single query POST times out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TimeoutPolicy {
    /// Abort the remaining loop and report the icon.
    #[default]
    Stop,
    /// Report the icon and carry on with the next one.
    Skip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub source_url: String,
    api_base: String,
    pub mode: QueryMode,
    pub include_label_binding: bool,
    pub on_timeout: TimeoutPolicy,
    pub timeout: Duration,
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            api_base: API_BASE.to_string(),
            mode: QueryMode::default(),
            include_label_binding: true,
            on_timeout: TimeoutPolicy::default(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            dry_run: false,
        }
    }
}

impl RunOptions {
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Accepts `http://host:port` with or without a trailing slash.
    pub fn set_api_base(&mut self, base: &str) {
        self.api_base = base.trim().trim_end_matches('/').to_string();
    }

    pub fn appearances_url(&self) -> String {
        format!("{}{}", self.api_base, APPEARANCES_PATH)
    }

    pub fn query_url(&self) -> String {
        format!("{}{}", self.api_base, CYPHER_PATH)
    }
}
