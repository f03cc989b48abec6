// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::llm::ChatModel;
use crate::models::{ChatTurn, Transaction};
use crate::router::{Answer, QueryRouter};
use crate::search::WebSearch;

pub const RESET_COMMANDS: [&str; 3] = ["reset", "clear", "start over"];

pub fn is_reset_command(input: &str) -> bool {
    let s = input.trim().to_lowercase();
    RESET_COMMANDS.contains(&s.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    Answered(Answer),
    Cleared,
    Ignored,
}

/// Conversation state for one interactive session.
#[derive(Debug, Default)]
pub struct ChatSession {
    history: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Reset commands clear the history and go no further. Anything else is
    /// routed; the turn is recorded only when routing succeeds.
    pub fn handle<M: ChatModel, W: WebSearch>(
        &mut self,
        input: &str,
        collection: &[Transaction],
        router: &QueryRouter<M, W>,
    ) -> Result<ChatReply> {
        if is_reset_command(input) {
            self.clear();
            return Ok(ChatReply::Cleared);
        }
        let query = input.trim();
        if query.is_empty() {
            return Ok(ChatReply::Ignored);
        }
        let answer = router.route(query, collection, &self.history)?;
        self.history.push(ChatTurn {
            question: query.to_string(),
            answer: answer.text().to_string(),
        });
        Ok(ChatReply::Answered(answer))
    }
}
