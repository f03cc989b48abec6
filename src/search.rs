// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FinoraError, Result};
use crate::utils::http_client;
use serde::Deserialize;

pub trait WebSearch {
    /// Up to a handful of short text snippets; may be empty.
    fn search(&self, query: &str) -> Result<Vec<String>>;
}

/// DuckDuckGo Instant Answer API.
///
/// This endpoint only answers topics it has an abstract, a direct answer or
/// related topics for (encyclopedic terms, definitions, calculations). Most
/// everyday questions such as the weather come back empty, and the router then
/// reports that the web had nothing either. Point `search_url` at a compatible
/// JSON endpoint for broader coverage.
pub struct DuckDuckGo {
    http: reqwest::blocking::Client,
    url: String,
    max_results: usize,
}

impl DuckDuckGo {
    pub fn new(url: &str, max_results: usize) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            url: url.to_string(),
            max_results,
        })
    }
}

impl WebSearch for DuckDuckGo {
    fn search(&self, query: &str) -> Result<Vec<String>> {
        log::debug!("web search: {}", query);
        let answer: InstantAnswer = self
            .http
            .get(&self.url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| FinoraError::transport("web search failed", e))?;
        Ok(answer.snippets(self.max_results))
    }
}

pub fn join_snippets(snippets: &[String]) -> String {
    snippets.join("\n\n")
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InstantAnswer {
    #[serde(default)]
    abstract_text: String,
    #[serde(default)]
    answer: serde_json::Value,
    #[serde(default)]
    related_topics: Vec<Topic>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Topic {
    text: Option<String>,
    // Disambiguation groups nest their topics one level down.
    #[serde(default)]
    topics: Vec<Topic>,
}

impl InstantAnswer {
    fn snippets(&self, max: usize) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(a) = self.answer.as_str() {
            push_nonempty(&mut out, a);
        }
        push_nonempty(&mut out, &self.abstract_text);
        let mut stack: Vec<&Topic> = self.related_topics.iter().rev().collect();
        while let Some(t) = stack.pop() {
            if let Some(text) = &t.text {
                push_nonempty(&mut out, text);
            }
            stack.extend(t.topics.iter().rev());
        }
        out.truncate(max);
        out
    }
}

fn push_nonempty(out: &mut Vec<String>, s: &str) {
    let s = s.trim();
    if !s.is_empty() && !out.iter().any(|o| o == s) {
        out.push(s.to_string());
    }
}
