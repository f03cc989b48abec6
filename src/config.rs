// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FinoraError, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Finora", "finora"));

pub const DEFAULT_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_SEARCH_URL: &str = "https://api.duckduckgo.com/";
pub const DEFAULT_MODEL: &str = "gemma2-9b-it";

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        FinoraError::Config("could not determine platform-specific config dir".into())
    })?;
    Ok(proj.config_dir().join("settings.json"))
}

/// Resolved runtime settings.
///
/// Layers, later wins: defaults, `settings.json` in the config dir,
/// environment (including `.env`), command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the spreadsheet web app; requests go to `{source_url}/exec`.
    pub source_url: String,
    pub api_key: Option<String>,
    pub chat_url: String,
    pub model: String,
    pub temperature: f64,
    pub search_url: String,
    pub search_results: usize,
    pub cache_ttl_secs: u64,
    /// Most recent chat turns replayed into each prompt.
    pub max_history_turns: usize,
    /// Most recent transactions serialized into each prompt.
    pub max_context_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: String::new(),
            api_key: None,
            chat_url: DEFAULT_CHAT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.5,
            search_url: DEFAULT_SEARCH_URL.to_string(),
            search_results: 3,
            cache_ttl_secs: 300,
            max_history_turns: 10,
            max_context_rows: 500,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        let path = settings_path()?;
        Self::from_file(&path)?.apply_env(|k| std::env::var(k).ok())
    }

    /// Reads a settings file; a missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no settings file at {}", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| {
            FinoraError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&text)
            .map_err(|e| FinoraError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("FINORA_SOURCE_URL") {
            self.source_url = v;
        }
        if let Some(v) = lookup("GROQ_API_KEY") {
            self.api_key = Some(v);
        }
        if let Some(v) = lookup("FINORA_CHAT_URL") {
            self.chat_url = v;
        }
        if let Some(v) = lookup("FINORA_MODEL") {
            self.model = v;
        }
        if let Some(v) = lookup("FINORA_TEMPERATURE") {
            self.temperature = parse_env("FINORA_TEMPERATURE", &v)?;
        }
        if let Some(v) = lookup("FINORA_SEARCH_RESULTS") {
            self.search_results = parse_env("FINORA_SEARCH_RESULTS", &v)?;
        }
        if let Some(v) = lookup("FINORA_CACHE_TTL_SECS") {
            self.cache_ttl_secs = parse_env("FINORA_CACHE_TTL_SECS", &v)?;
        }
        if let Some(v) = lookup("FINORA_MAX_HISTORY_TURNS") {
            self.max_history_turns = parse_env("FINORA_MAX_HISTORY_TURNS", &v)?;
        }
        if let Some(v) = lookup("FINORA_MAX_CONTEXT_ROWS") {
            self.max_context_rows = parse_env("FINORA_MAX_CONTEXT_ROWS", &v)?;
        }
        Ok(self)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn require_source_url(&self) -> Result<&str> {
        let url = self.source_url.trim();
        if url.is_empty() {
            return Err(FinoraError::Config(
                "transaction source URL is not set (FINORA_SOURCE_URL or --source-url)".into(),
            ));
        }
        Ok(url)
    }

    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(k) if !k.is_empty() => Ok(k),
            _ => Err(FinoraError::Config(
                "GROQ_API_KEY not found in environment or settings".into(),
            )),
        }
    }

    /// Copy safe to print.
    pub fn redacted(&self) -> Settings {
        let mut s = self.clone();
        if s.api_key.is_some() {
            s.api_key = Some("********".into());
        }
        s
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| FinoraError::Config(format!("invalid value '{}' for {}", value, key)))
}
