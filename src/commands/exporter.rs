// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::summary::month_from_args;
use crate::dashboard::Dashboard;
use crate::models::Transaction;
use crate::normalize::filter_by_month;
use crate::store::TransactionSource;
use anyhow::{bail, Result};
use serde_json::json;

pub fn handle<S: TransactionSource>(dash: &mut Dashboard<S>, sub: &clap::ArgMatches) -> Result<()> {
    let collection = dash.transactions()?;
    export_transactions(&collection, sub)
}

pub fn export_transactions(collection: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let out = match sub.get_one::<String>("out") {
        Some(o) => o,
        None => bail!("--out is required"),
    };
    let month = month_from_args(sub)?;
    let rows = filter_by_month(collection, &month);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id", "date", "amount", "method", "category", "remark", "type", "month",
            ])?;
            for t in &rows {
                wtr.write_record([
                    t.id.clone().unwrap_or_default(),
                    t.date.map(|d| d.to_string()).unwrap_or_else(|| t.raw_date.clone()),
                    t.amount.to_string(),
                    t.method.to_string(),
                    t.category.clone(),
                    t.remark.clone().unwrap_or_default(),
                    t.kind.to_string(),
                    t.month.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = rows
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id,
                        "date": t.date.map(|d| d.to_string()).unwrap_or_else(|| t.raw_date.clone()),
                        "amount": t.amount.to_string(),
                        "method": t.method.as_str(),
                        "category": t.category,
                        "remark": t.remark,
                        "type": t.kind.as_str(),
                        "month": t.month,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
