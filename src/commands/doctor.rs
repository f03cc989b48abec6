// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dashboard::Dashboard;
use crate::models::RawTransaction;
use crate::normalize::{month_label, parse_sheet_date};
use crate::store::TransactionSource;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle<S: TransactionSource>(dash: &Dashboard<S>) -> Result<()> {
    // Raw rows, so the sheet's own month column can be compared.
    let raw = dash.source().fetch_all()?;
    let rows = issues(&raw);
    if rows.is_empty() {
        println!("doctor: no issues found in {} rows", raw.len());
    } else {
        println!("{}", pretty_table(&["Row", "Issue", "Detail"], rows));
    }
    Ok(())
}

pub fn issues(raw: &[RawTransaction]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for (i, r) in raw.iter().enumerate() {
        let row = (i + 1).to_string();
        if r.id.is_none() {
            rows.push(vec![row.clone(), "missing_id".into(), "not listed as a transaction".into()]);
        }
        match parse_sheet_date(&r.date) {
            None => rows.push(vec![
                row.clone(),
                "unparseable_date".into(),
                format!("'{}' (shown under All only)", r.date),
            ]),
            Some(d) => {
                let derived = month_label(d);
                if let Some(up) = &r.upstream_month {
                    if !up.eq_ignore_ascii_case(&derived) {
                        rows.push(vec![
                            row.clone(),
                            "month_mismatch".into(),
                            format!("sheet says '{}', date gives '{}'", up, derived),
                        ]);
                    }
                }
            }
        }
        if r.amount.is_zero() {
            rows.push(vec![row, "zero_amount".into(), r.category.clone()]);
        }
    }
    rows
}
