// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Data-grounded answers: the transaction table and recent chat turns are
//! packed into one prompt for the chat model.

use crate::error::{FinoraError, Result};
use crate::llm::ChatModel;
use crate::models::{ChatMessage, ChatTurn, Transaction};
use crate::utils::plain_table;

pub const SYSTEM_PROMPT: &str = "You are a helpful financial assistant. \
Only use the provided financial data to answer the questions. \
Be concise, accurate, and admit if data is missing.";

/// Bounds on how much context goes into a single prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptLimits {
    pub max_history_turns: usize,
    pub max_context_rows: usize,
}

impl Default for PromptLimits {
    fn default() -> Self {
        Self { max_history_turns: 10, max_context_rows: 500 }
    }
}

pub struct AnswerGenerator<M> {
    model: M,
    temperature: f64,
    limits: PromptLimits,
}

impl<M: ChatModel> AnswerGenerator<M> {
    pub fn new(model: M, temperature: f64, limits: PromptLimits) -> Self {
        Self { model, temperature, limits }
    }

    pub fn answer(
        &self,
        collection: &[Transaction],
        query: &str,
        history: &[ChatTurn],
    ) -> Result<String> {
        let messages = build_messages(collection, query, history, self.limits);
        let text = self.model.complete(&messages, self.temperature)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(FinoraError::AnswerGeneration("model returned an empty answer".into()));
        }
        Ok(text.to_string())
    }
}

/// System instruction, the most recent `max_history_turns` turns as
/// user/assistant pairs, then the data table with the new question.
pub fn build_messages(
    collection: &[Transaction],
    query: &str,
    history: &[ChatTurn],
    limits: PromptLimits,
) -> Vec<ChatMessage> {
    let recent = &history[history.len().saturating_sub(limits.max_history_turns)..];
    if recent.len() < history.len() {
        log::debug!("dropping {} oldest chat turns from prompt", history.len() - recent.len());
    }

    let mut messages = Vec::with_capacity(2 + recent.len() * 2);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));
    for turn in recent {
        messages.push(ChatMessage::user(turn.question.clone()));
        messages.push(ChatMessage::assistant(turn.answer.clone()));
    }
    let context = format_context(collection, limits.max_context_rows);
    messages.push(ChatMessage::user(format!(
        "Here is the data:\n{}\n\nQuestion: {}",
        context, query
    )));
    messages
}

/// Renders at most `max_rows` transactions, newest first, undated rows last.
pub fn format_context(collection: &[Transaction], max_rows: usize) -> String {
    let mut rows: Vec<&Transaction> = collection.iter().collect();
    rows.sort_by(|a, b| match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    if rows.len() > max_rows {
        log::debug!("truncating prompt data from {} to {} rows", rows.len(), max_rows);
        rows.truncate(max_rows);
    }

    let data = rows
        .into_iter()
        .map(|t| {
            vec![
                t.id.clone().unwrap_or_default(),
                t.date.map(|d| d.to_string()).unwrap_or_else(|| t.raw_date.clone()),
                format!("{:.2}", t.amount),
                t.method.to_string(),
                t.category.clone(),
                t.remark.clone().unwrap_or_default(),
                t.kind.to_string(),
                t.month.clone().unwrap_or_default(),
            ]
        })
        .collect();
    plain_table(&crate::models::COLUMNS, data)
}
