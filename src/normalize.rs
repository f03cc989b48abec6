// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{RawTransaction, Transaction};
use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime};

/// Label that selects every transaction, dated or not.
pub const ALL_MONTHS: &str = "All";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses dates and derives month labels. Unparseable dates become `None`
/// rather than failing the batch.
pub fn normalize(raw: Vec<RawTransaction>) -> Vec<Transaction> {
    raw.into_iter()
        .map(|r| {
            let date = parse_sheet_date(&r.date);
            if date.is_none() {
                log::warn!("unparseable date '{}' (id {:?}); month left empty", r.date, r.id);
            }
            Transaction {
                id: r.id,
                month: date.map(month_label),
                date,
                raw_date: r.date,
                amount: r.amount,
                method: r.method,
                category: r.category,
                remark: r.remark,
                kind: r.kind,
            }
        })
        .collect()
}

pub fn parse_sheet_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

pub fn month_label(date: NaiveDate) -> String {
    month_of(date).name().to_string()
}

fn month_of(date: NaiveDate) -> Month {
    Month::try_from(date.month() as u8).unwrap_or(Month::January)
}

/// `"All"` and the empty label return everything; any other label keeps only
/// rows whose derived month equals it.
pub fn filter_by_month(collection: &[Transaction], month: &str) -> Vec<Transaction> {
    let month = month.trim();
    if month.is_empty() || month == ALL_MONTHS {
        return collection.to_vec();
    }
    collection
        .iter()
        .filter(|t| t.month.as_deref() == Some(month))
        .cloned()
        .collect()
}

/// Distinct month labels present, in calendar order.
pub fn available_months(collection: &[Transaction]) -> Vec<String> {
    let mut months: Vec<Month> = collection
        .iter()
        .filter_map(|t| t.month.as_deref())
        .filter_map(|m| m.parse::<Month>().ok())
        .collect();
    months.sort_by_key(|m| m.number_from_month());
    months.dedup();
    months.into_iter().map(|m| m.name().to_string()).collect()
}

/// Turns user input such as `jan` or `MARCH` into a label accepted by
/// [`filter_by_month`]. Returns `None` for input that names no month.
pub fn resolve_month(input: &str) -> Option<String> {
    let s = input.trim();
    if s.is_empty() || s.eq_ignore_ascii_case(ALL_MONTHS) {
        return Some(ALL_MONTHS.to_string());
    }
    s.parse::<Month>().ok().map(|m| m.name().to_string())
}

/// Position of a month label in the calendar, used for ordering.
pub fn month_rank(label: &str) -> u32 {
    label.parse::<Month>().map(|m| m.number_from_month()).unwrap_or(13)
}
