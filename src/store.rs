// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Access to the spreadsheet web app that holds the transactions.
//!
//! The sheet answers `GET {base}/exec` with a JSON array of positional rows
//! (see [`COLUMNS`]) and appends a row on `POST {base}/exec`.

use crate::error::{FinoraError, Result};
use crate::models::{Method, NewTransaction, RawTransaction, SubmitResult, TxType, COLUMNS};
use crate::utils::http_client;
use rust_decimal::Decimal;
use serde_json::{json, Value};

pub trait TransactionSource {
    fn fetch_all(&self) -> Result<Vec<RawTransaction>>;
    fn submit(&self, tx: &NewTransaction) -> Result<SubmitResult>;
}

pub struct SheetClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl SheetClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(FinoraError::Config("transaction source URL is empty".into()));
        }
        Ok(Self {
            http: http_client()?,
            endpoint: format!("{}/exec", base),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TransactionSource for SheetClient {
    fn fetch_all(&self) -> Result<Vec<RawTransaction>> {
        log::debug!("GET {}", self.endpoint);
        let body = self
            .http
            .get(&self.endpoint)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| FinoraError::transport("fetching transactions failed", e))?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| FinoraError::Schema(format!("response is not JSON: {}", e)))?;
        let rows = parse_rows(value)?;
        log::debug!("fetched {} rows", rows.len());
        Ok(rows)
    }

    fn submit(&self, tx: &NewTransaction) -> Result<SubmitResult> {
        log::info!(
            "submitting {} {} on {} ({})",
            tx.kind,
            tx.amount,
            tx.date,
            tx.category
        );
        let body = self
            .http
            .post(&self.endpoint)
            .json(tx)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| FinoraError::transport("submitting transaction failed", e))?;
        Ok(submit_result_from_body(&body))
    }
}

/// Interprets a successful POST body: JSON passes through, anything else is acknowledged locally.
pub fn submit_result_from_body(body: &str) -> SubmitResult {
    match serde_json::from_str::<Value>(body) {
        Ok(v) => SubmitResult { body: v, synthetic: false },
        Err(_) => SubmitResult {
            body: json!({
                "status": "success",
                "message": "Transaction added successfully (no JSON response)."
            }),
            synthetic: true,
        },
    }
}

/// Maps the sheet's JSON payload onto typed rows.
///
/// A leading header row is skipped. Dates are kept as text; see
/// [`crate::normalize::normalize`].
pub fn parse_rows(value: Value) -> Result<Vec<RawTransaction>> {
    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(FinoraError::Schema(format!(
                "expected a JSON array of rows, got {}",
                kind_of(&other)
            )));
        }
    };

    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let cells = match row {
            Value::Array(cells) => cells,
            other => {
                return Err(FinoraError::Schema(format!(
                    "row {}: expected an array, got {}",
                    i,
                    kind_of(&other)
                )));
            }
        };
        if cells.len() != COLUMNS.len() {
            return Err(FinoraError::Schema(format!(
                "row {}: expected {} columns, got {}",
                i,
                COLUMNS.len(),
                cells.len()
            )));
        }
        if i == 0 && is_header(&cells) {
            continue;
        }
        out.push(parse_row(i, &cells)?);
    }
    Ok(out)
}

fn parse_row(i: usize, cells: &[Value]) -> Result<RawTransaction> {
    let amount = parse_amount(&cells[2])
        .map_err(|msg| FinoraError::Schema(format!("row {}: {}", i, msg)))?;
    let kind_text = cell_text(&cells[6]).unwrap_or_default();
    let kind = kind_text
        .parse::<TxType>()
        .map_err(|e| FinoraError::Schema(format!("row {}: {}", i, e)))?;

    Ok(RawTransaction {
        id: cell_text(&cells[0]),
        date: cell_text(&cells[1]).unwrap_or_default(),
        amount,
        method: Method::from_sheet(&cell_text(&cells[3]).unwrap_or_default()),
        category: cell_text(&cells[4]).unwrap_or_default(),
        remark: cell_text(&cells[5]),
        kind,
        upstream_month: cell_text(&cells[7]),
    })
}

fn is_header(cells: &[Value]) -> bool {
    cells
        .iter()
        .zip(COLUMNS.iter())
        .all(|(c, name)| matches!(c, Value::String(s) if s.trim().eq_ignore_ascii_case(name)))
}

fn cell_text(v: &Value) -> Option<String> {
    let s = match v {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    };
    if s.is_empty() { None } else { Some(s) }
}

fn parse_amount(v: &Value) -> std::result::Result<Decimal, String> {
    let text = match v {
        Value::Null => return Ok(Decimal::ZERO),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.replace(',', "").trim().to_string(),
        other => return Err(format!("amount must be a number, got {}", kind_of(other))),
    };
    if text.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let amount = text
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| format!("invalid amount '{}'", text))?;
    if amount < Decimal::ZERO {
        return Err(format!("negative amount {}", amount));
    }
    Ok(amount)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
