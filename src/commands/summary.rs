// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dashboard::Dashboard;
use crate::models::{Transaction, TxType};
use crate::normalize::{available_months, filter_by_month, resolve_month, ALL_MONTHS};
use crate::store::TransactionSource;
use crate::summary::{
    category_shares, group_by, totals, CategoryShare, Dimension, GroupTotal, Totals,
};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{anyhow, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub month: String,
    pub totals: Totals,
    pub by_month: Vec<GroupTotal>,
    pub by_category: Vec<GroupTotal>,
    pub expense_shares: Vec<CategoryShare>,
    pub income_shares: Vec<CategoryShare>,
}

pub fn month_from_args(sub: &clap::ArgMatches) -> Result<String> {
    match sub.get_one::<String>("month") {
        None => Ok(ALL_MONTHS.to_string()),
        Some(m) => resolve_month(m).ok_or_else(|| anyhow!("Unknown month '{}'", m)),
    }
}

pub fn build_report(collection: &[Transaction], month: &str) -> SummaryReport {
    let filtered = filter_by_month(collection, month);
    SummaryReport {
        month: month.to_string(),
        totals: totals(&filtered),
        by_month: group_by(&filtered, Dimension::Month),
        by_category: group_by(&filtered, Dimension::Category),
        expense_shares: category_shares(&filtered, TxType::Expenses),
        income_shares: category_shares(&filtered, TxType::Income),
    }
}

pub fn handle<S: TransactionSource>(dash: &mut Dashboard<S>, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_from_args(sub)?;
    let collection = dash.transactions()?;
    let report = build_report(&collection, &month);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }

    println!("Finance summary ({})", report.month);
    println!(
        "{}",
        pretty_table(
            &["Income", "Expense", "Savings"],
            vec![vec![
                fmt_money(&report.totals.income),
                fmt_money(&report.totals.expense),
                fmt_money(&report.totals.savings),
            ]],
        )
    );
    println!("Income vs Expense (monthly)");
    println!("{}", pivot_table("Month", &report.by_month));
    println!("Income & Expense by category");
    println!("{}", pivot_table("Category", &report.by_category));
    println!("Expenses by category");
    println!("{}", shares_table(&report.expense_shares));
    println!("Income by category");
    println!("{}", shares_table(&report.income_shares));
    Ok(())
}

/// One row per key with Income and Expenses side by side.
fn pivot_table(label: &str, rows: &[GroupTotal]) -> comfy_table::Table {
    let data = rows
        .chunks(TxType::ALL.len())
        .map(|pair| {
            let mut row = vec![pair[0].key.clone()];
            row.extend(pair.iter().map(|g| format!("{:.2}", g.amount)));
            row
        })
        .collect();
    pretty_table(&[label, "Income", "Expenses"], data)
}

fn shares_table(shares: &[CategoryShare]) -> comfy_table::Table {
    let data = shares
        .iter()
        .map(|s| {
            vec![
                s.category.clone(),
                format!("{:.2}", s.amount),
                format!("{:.2}%", s.percent),
            ]
        })
        .collect();
    pretty_table(&["Category", "Amount", "Share"], data)
}

pub fn handle_months<S: TransactionSource>(dash: &mut Dashboard<S>) -> Result<()> {
    let collection = dash.transactions()?;
    println!("{}", ALL_MONTHS);
    for m in available_months(&collection) {
        println!("{}", m);
    }
    Ok(())
}
