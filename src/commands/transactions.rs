// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::summary::month_from_args;
use crate::dashboard::Dashboard;
use crate::models::{Method, NewTransaction, Transaction, TxType, SUGGESTED_CATEGORIES};
use crate::normalize::filter_by_month;
use crate::store::TransactionSource;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use serde::Serialize;

pub fn handle<S: TransactionSource>(dash: &mut Dashboard<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(dash, sub)?,
        Some(("list", sub)) => list(dash, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn new_transaction_from(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let date = parse_date(sub.get_one::<String>("date").context("--date is required")?)?;
    let amount = parse_decimal(sub.get_one::<String>("amount").context("--amount is required")?)?;
    let method: Method = sub
        .get_one::<String>("method")
        .map(|s| s.as_str())
        .unwrap_or("Cash")
        .parse()?;
    let kind: TxType = sub
        .get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("Expenses")
        .parse()?;
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .context("--category is required")?;
    let remark = sub
        .get_one::<String>("remark")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let tx = NewTransaction { date, amount, method, category, remark, kind };
    tx.validate()?;
    Ok(tx)
}

fn add<S: TransactionSource>(dash: &mut Dashboard<S>, sub: &clap::ArgMatches) -> Result<()> {
    let tx = new_transaction_from(sub)?;
    if !SUGGESTED_CATEGORIES.contains(&tx.category.as_str()) {
        log::info!("category '{}' is not one of the suggested categories", tx.category);
    }
    let result = dash.add(&tx).context("Failed to add transaction")?;
    println!(
        "Transaction added: {} {} on {} ({}, {})",
        tx.kind, tx.amount, tx.date, tx.category, tx.method
    );
    if !result.synthetic {
        println!("{}", serde_json::to_string(&result.body)?);
    }
    Ok(())
}

fn list<S: TransactionSource>(dash: &mut Dashboard<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let collection = dash.transactions()?;
    let data = query_rows(&collection, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No transactions available for the selected month.");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.amount.clone(),
                    r.method.clone(),
                    r.category.clone(),
                    r.remark.clone(),
                    r.r#type.clone(),
                    r.month.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Amount", "Method", "Category", "Remark", "Type", "Month"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub amount: String,
    pub method: String,
    pub category: String,
    pub remark: String,
    pub r#type: String,
    pub month: String,
}

/// Recorded transactions (those carrying an identifier), newest first.
pub fn query_rows(
    collection: &[Transaction],
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let month = month_from_args(sub)?;
    let mut rows: Vec<Transaction> = filter_by_month(collection, &month)
        .into_iter()
        .filter(|t| t.id.is_some())
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }

    Ok(rows
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.unwrap_or_default(),
            date: t.date.map(|d| d.to_string()).unwrap_or(t.raw_date),
            amount: format!("{:.2}", t.amount),
            method: t.method.to_string(),
            category: t.category,
            remark: t.remark.unwrap_or_default(),
            r#type: t.kind.to_string(),
            month: t.month.unwrap_or_default(),
        })
        .collect())
}
