// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::error::{FinoraError, Result};
use crate::models::ChatMessage;
use crate::utils::http_client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

/// A hosted chat-completion model.
pub trait ChatModel {
    /// Returns the text of the first completion choice.
    fn complete(&self, messages: &[ChatMessage], temperature: f64) -> Result<String>;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint (Groq by default).
#[derive(Debug, Clone)]
pub struct GroqClient {
    http: reqwest::blocking::Client,
    url: String,
    model: String,
    api_key: String,
}

impl GroqClient {
    pub fn new(url: &str, model: &str, api_key: &str) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            url: url.to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.chat_url, &settings.model, settings.require_api_key()?)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| FinoraError::Config("API key contains invalid characters".into()))?;
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }
}

impl ChatModel for GroqClient {
    fn complete(&self, messages: &[ChatMessage], temperature: f64) -> Result<String> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            temperature,
        };
        log::debug!(
            "POST {} model={} messages={}",
            self.url,
            self.model,
            messages.len()
        );

        let response: CompletionResponse = self
            .http
            .post(&self.url)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .map_err(|e| FinoraError::AnswerGeneration(format!("POST {} failed: {}", self.url, e)))?
            .error_for_status()
            .map_err(|e| {
                FinoraError::AnswerGeneration(format!("model endpoint returned an error: {}", e))
            })?
            .json()
            .map_err(|e| FinoraError::AnswerGeneration(format!("unreadable completion: {}", e)))?;

        first_choice_text(response)
    }
}

fn first_choice_text(response: CompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| FinoraError::AnswerGeneration("completion had no choices".into()))
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
