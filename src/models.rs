// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinoraError;

/// Column names of the sheet, in positional order.
pub const COLUMNS: [&str; 8] = [
    "TransactionId",
    "Date",
    "Amount",
    "Method",
    "Category",
    "Remark",
    "Type",
    "Month",
];

/// Categories offered when entering a transaction. Free-form values are still accepted.
pub const SUGGESTED_CATEGORIES: [&str; 13] = [
    "Home",
    "Food",
    "Utilities",
    "Other",
    "Salary",
    "Investments",
    "EMI",
    "Medical",
    "Travelling",
    "Family",
    "Outing",
    "Interest",
    "Savings",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Cash,
    Card,
    #[serde(rename = "UPI")]
    Upi,
    Other,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Cash => "Cash",
            Method::Card => "Card",
            Method::Upi => "UPI",
            Method::Other => "Other",
        }
    }

    /// Lenient mapping used for rows read back from the sheet.
    pub fn from_sheet(s: &str) -> Self {
        s.parse().unwrap_or(Method::Other)
    }
}

impl FromStr for Method {
    type Err = FinoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(Method::Cash),
            "card" => Ok(Method::Card),
            "upi" => Ok(Method::Upi),
            "other" => Ok(Method::Other),
            other => Err(FinoraError::InvalidInput(format!(
                "unknown method '{}', expected Cash|Card|UPI|Other",
                other
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TxType {
    Income,
    Expenses,
}

impl TxType {
    pub const ALL: [TxType; 2] = [TxType::Income, TxType::Expenses];

    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Income => "Income",
            TxType::Expenses => "Expenses",
        }
    }
}

impl FromStr for TxType {
    type Err = FinoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxType::Income),
            "expenses" | "expense" => Ok(TxType::Expenses),
            other => Err(FinoraError::InvalidInput(format!(
                "unknown type '{}', expected Income|Expenses",
                other
            ))),
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row as it arrives from the sheet, before date parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub id: Option<String>,
    pub date: String,
    pub amount: Decimal,
    pub method: Method,
    pub category: String,
    pub remark: Option<String>,
    pub kind: TxType,
    /// Whatever the sheet had in its month column; never trusted.
    pub upstream_month: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<String>,
    pub date: Option<NaiveDate>,
    pub raw_date: String,
    pub amount: Decimal,
    pub method: Method,
    pub category: String,
    pub remark: Option<String>,
    #[serde(rename = "type")]
    pub kind: TxType,
    pub month: Option<String>,
}

/// Payload for appending a row to the sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub method: Method,
    pub category: String,
    pub remark: String,
    #[serde(rename = "type")]
    pub kind: TxType,
}

impl NewTransaction {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.amount < Decimal::ZERO {
            return Err(FinoraError::InvalidInput(format!(
                "amount must be non-negative, got {}",
                self.amount
            )));
        }
        if self.category.trim().is_empty() {
            return Err(FinoraError::InvalidInput("category must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub body: serde_json::Value,
    /// True when the sheet answered with a non-JSON body and the
    /// acknowledgement was made up locally.
    pub synthetic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}
