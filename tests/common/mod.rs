// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use finora::error::{FinoraError, Result};
use finora::llm::ChatModel;
use finora::models::{
    ChatMessage, Method, NewTransaction, RawTransaction, SubmitResult, Transaction, TxType,
};
use finora::normalize::normalize;
use finora::search::WebSearch;
use finora::store::TransactionSource;
use rust_decimal::Decimal;
use serde_json::json;

pub fn raw(id: Option<&str>, date: &str, amount: i64, kind: TxType, category: &str) -> RawTransaction {
    RawTransaction {
        id: id.map(str::to_string),
        date: date.to_string(),
        amount: Decimal::new(amount, 0),
        method: Method::Cash,
        category: category.to_string(),
        remark: None,
        kind,
        upstream_month: None,
    }
}

pub fn tx(date: &str, amount: i64, kind: TxType, category: &str) -> Transaction {
    normalize(vec![raw(Some("1"), date, amount, kind, category)]).remove(0)
}

/// January income 1000, January expense 400, February income 2000.
pub fn scenario() -> Vec<Transaction> {
    normalize(vec![
        raw(Some("1"), "2024-01-05", 1000, TxType::Income, "Salary"),
        raw(Some("2"), "2024-01-10", 400, TxType::Expenses, "Food"),
        raw(Some("3"), "2024-02-01", 2000, TxType::Income, "Salary"),
    ])
}

/// In-memory sheet: submissions append a row, like the real web app.
#[derive(Default)]
pub struct FakeSheet {
    pub rows: RefCell<Vec<RawTransaction>>,
    pub fetches: Cell<usize>,
    pub submits: Cell<usize>,
    pub fail_fetch: Cell<bool>,
    /// Fetches beyond this count fail.
    pub fetch_budget: Cell<Option<usize>>,
    pub fail_submit: Cell<bool>,
}

impl FakeSheet {
    pub fn with_rows(rows: Vec<RawTransaction>) -> Self {
        Self { rows: RefCell::new(rows), ..Self::default() }
    }
}

impl TransactionSource for FakeSheet {
    fn fetch_all(&self) -> Result<Vec<RawTransaction>> {
        self.fetches.set(self.fetches.get() + 1);
        let over_budget = self.fetch_budget.get().is_some_and(|n| self.fetches.get() > n);
        if self.fail_fetch.get() || over_budget {
            return Err(FinoraError::Transport("sheet unreachable".into()));
        }
        Ok(self.rows.borrow().clone())
    }

    fn submit(&self, tx: &NewTransaction) -> Result<SubmitResult> {
        self.submits.set(self.submits.get() + 1);
        if self.fail_submit.get() {
            return Err(FinoraError::Transport("HTTP 500".into()));
        }
        let next_id = self.rows.borrow().len() + 1;
        self.rows.borrow_mut().push(RawTransaction {
            id: Some(next_id.to_string()),
            date: tx.date.to_string(),
            amount: tx.amount,
            method: tx.method,
            category: tx.category.clone(),
            remark: Some(tx.remark.clone()),
            kind: tx.kind,
            upstream_month: None,
        });
        Ok(SubmitResult { body: json!({"status": "success"}), synthetic: false })
    }
}

/// Records every prompt and answers with a fixed reply.
pub struct FakeModel {
    pub reply: std::result::Result<String, String>,
    pub calls: RefCell<Vec<Vec<ChatMessage>>>,
    pub temperatures: RefCell<Vec<f64>>,
}

impl FakeModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: RefCell::new(Vec::new()),
            temperatures: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            reply: Err(msg.to_string()),
            calls: RefCell::new(Vec::new()),
            temperatures: RefCell::new(Vec::new()),
        }
    }
}

impl ChatModel for FakeModel {
    fn complete(&self, messages: &[ChatMessage], temperature: f64) -> Result<String> {
        self.calls.borrow_mut().push(messages.to_vec());
        self.temperatures.borrow_mut().push(temperature);
        self.reply.clone().map_err(FinoraError::AnswerGeneration)
    }
}

impl ChatModel for &FakeModel {
    fn complete(&self, messages: &[ChatMessage], temperature: f64) -> Result<String> {
        (**self).complete(messages, temperature)
    }
}

pub struct FakeSearch {
    pub snippets: Vec<String>,
    pub queries: RefCell<Vec<String>>,
}

impl FakeSearch {
    pub fn returning(snippets: &[&str]) -> Self {
        Self {
            snippets: snippets.iter().map(|s| s.to_string()).collect(),
            queries: RefCell::new(Vec::new()),
        }
    }
}

impl WebSearch for FakeSearch {
    fn search(&self, query: &str) -> Result<Vec<String>> {
        self.queries.borrow_mut().push(query.to_string());
        Ok(self.snippets.clone())
    }
}

impl WebSearch for &FakeSearch {
    fn search(&self, query: &str) -> Result<Vec<String>> {
        (**self).search(query)
    }
}
