// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use std::time::Duration;

use chrono::NaiveDate;
use common::{raw, FakeSheet};
use finora::dashboard::Dashboard;
use finora::error::FinoraError;
use finora::models::{Method, NewTransaction, TxType};
use finora::summary::totals;
use rust_decimal::Decimal;

fn new_expense(amount: i64) -> NewTransaction {
    NewTransaction {
        date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        amount: Decimal::new(amount, 0),
        method: Method::Upi,
        category: "Food".into(),
        remark: "dinner".into(),
        kind: TxType::Expenses,
    }
}

fn dashboard() -> Dashboard<FakeSheet> {
    let sheet = FakeSheet::with_rows(vec![
        raw(Some("1"), "2024-01-05", 1000, TxType::Income, "Salary"),
        raw(Some("2"), "2024-01-10", 400, TxType::Expenses, "Food"),
    ]);
    Dashboard::new(sheet, Duration::from_secs(300))
}

#[test]
fn repeated_reads_within_ttl_fetch_once() {
    let mut dash = dashboard();
    let a = dash.transactions().unwrap();
    let b = dash.transactions().unwrap();
    assert_eq!(a, b);
    assert_eq!(dash.source().fetches.get(), 1);
    assert_eq!(a[0].month.as_deref(), Some("January"));
}

#[test]
fn successful_submit_invalidates_cached_totals() {
    let mut dash = dashboard();
    assert_eq!(totals(&dash.transactions().unwrap()).expense, Decimal::new(400, 0));

    dash.add(&new_expense(150)).unwrap();

    let after = dash.transactions().unwrap();
    assert_eq!(dash.source().fetches.get(), 2);
    assert_eq!(after.len(), 3);
    assert_eq!(totals(&after).expense, Decimal::new(550, 0));
    assert_eq!(totals(&after).savings, Decimal::new(450, 0));
}

#[test]
fn failed_submit_keeps_cache_and_totals() {
    let mut dash = dashboard();
    dash.transactions().unwrap();
    dash.source().fail_submit.set(true);

    let err = dash.add(&new_expense(150)).unwrap_err();
    assert!(matches!(err, FinoraError::Transport(_)));

    let after = dash.transactions().unwrap();
    assert_eq!(dash.source().fetches.get(), 1);
    assert_eq!(totals(&after).expense, Decimal::new(400, 0));
}

#[test]
fn negative_amount_is_rejected_before_submit() {
    let mut dash = dashboard();
    let err = dash.add(&new_expense(-5)).unwrap_err();
    assert!(matches!(err, FinoraError::InvalidInput(_)));
    assert_eq!(dash.source().submits.get(), 0);
}

#[test]
fn zero_ttl_always_refetches() {
    let sheet = FakeSheet::with_rows(vec![]);
    let mut dash = Dashboard::new(sheet, Duration::ZERO);
    dash.transactions().unwrap();
    dash.transactions().unwrap();
    assert_eq!(dash.source().fetches.get(), 2);
}

#[test]
fn fetch_error_propagates() {
    let sheet = FakeSheet::default();
    sheet.fail_fetch.set(true);
    let mut dash = Dashboard::new(sheet, Duration::from_secs(60));
    assert!(matches!(dash.transactions(), Err(FinoraError::Transport(_))));
}
