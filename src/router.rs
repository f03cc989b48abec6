// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::answer::AnswerGenerator;
use crate::error::Result;
use crate::llm::ChatModel;
use crate::models::{ChatTurn, Transaction};
use crate::search::{join_snippets, WebSearch};
use once_cell::sync::Lazy;
use regex::Regex;

/// Finance terms that send a question to the data-grounded answerer.
///
/// This is a keyword heuristic: paraphrased financial questions that miss
/// every term go to web search.
pub const RELEVANT_KEYWORDS: [&str; 25] = [
    "revenue",
    "profit",
    "loss",
    "expense",
    "growth",
    "sales",
    "forecast",
    "summary",
    "trend",
    "balance",
    "income",
    "debt",
    "budget",
    "earning",
    "spending",
    "financial",
    "finance",
    "monthly budget",
    "annual budget",
    "cash flow",
    "investment",
    "asset",
    "liability",
    "transactionid",
    "transaction id",
];

pub const NO_DATA_DISCLAIMER: &str = "I couldn't find a direct answer from your financial data.";

static KEYWORDS_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = RELEVANT_KEYWORDS
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("keyword pattern is built from escaped literals")
});

pub fn is_relevant(query: &str) -> bool {
    KEYWORDS_RE.is_match(&query.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    FromData(String),
    FromWeb(String),
}

impl Answer {
    pub fn text(&self) -> &str {
        match self {
            Answer::FromData(s) | Answer::FromWeb(s) => s,
        }
    }
}

pub struct QueryRouter<M, W> {
    generator: AnswerGenerator<M>,
    search: W,
}

impl<M: ChatModel, W: WebSearch> QueryRouter<M, W> {
    pub fn new(generator: AnswerGenerator<M>, search: W) -> Self {
        Self { generator, search }
    }

    pub fn route(
        &self,
        query: &str,
        collection: &[Transaction],
        history: &[ChatTurn],
    ) -> Result<Answer> {
        if is_relevant(query) {
            log::debug!("routing to data answerer");
            return self
                .generator
                .answer(collection, query, history)
                .map(Answer::FromData);
        }

        log::debug!("routing to web search");
        let snippets = self.search.search(query)?;
        Ok(Answer::FromWeb(web_fallback_text(&snippets)))
    }
}

fn web_fallback_text(snippets: &[String]) -> String {
    if snippets.is_empty() {
        log::warn!("web search returned no results");
        return format!("{}\n\nThe web search returned no results either.", NO_DATA_DISCLAIMER);
    }
    format!(
        "{}\n\nHowever, here's some information I found on the web that might help:\n\n{}",
        NO_DATA_DISCLAIMER,
        join_snippets(snippets)
    )
}
