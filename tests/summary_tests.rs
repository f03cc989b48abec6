// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{raw, scenario, tx};
use finora::commands::summary::{build_report, month_from_args};
use finora::models::TxType;
use finora::normalize::{available_months, filter_by_month, normalize};
use finora::summary::{category_shares, group_by, totals, Dimension, GroupTotal, Totals};
use finora::cli;
use rust_decimal::Decimal;

fn d(v: i64) -> Decimal {
    Decimal::new(v, 0)
}

#[test]
fn january_and_all_totals() {
    let c = scenario();
    let jan = totals(&filter_by_month(&c, "January"));
    assert_eq!(jan, Totals { income: d(1000), expense: d(400), savings: d(600) });

    let all = totals(&filter_by_month(&c, "All"));
    assert_eq!(all, Totals { income: d(3000), expense: d(400), savings: d(2600) });
}

#[test]
fn savings_is_income_minus_expense_for_every_filter() {
    let mut c = scenario();
    c.push(tx("2024-02-11", 2500, TxType::Expenses, "Home"));
    c.push(tx("garbage", 75, TxType::Expenses, "Food"));

    let mut filters = vec!["All".to_string(), String::new()];
    filters.extend(available_months(&c));
    filters.push("December".into());
    for f in filters {
        let t = totals(&filter_by_month(&c, &f));
        assert_eq!(t.income - t.expense, t.savings, "filter {f}");
    }
}

#[test]
fn empty_collection_totals_are_zero() {
    assert_eq!(totals(&[]), Totals::default());
    assert!(group_by(&[], Dimension::Category).is_empty());
}

#[test]
fn group_by_reports_zero_for_missing_type() {
    let c = scenario();
    let by_month = group_by(&c, Dimension::Month);
    assert_eq!(
        by_month,
        vec![
            GroupTotal { key: "January".into(), kind: TxType::Income, amount: d(1000) },
            GroupTotal { key: "January".into(), kind: TxType::Expenses, amount: d(400) },
            GroupTotal { key: "February".into(), kind: TxType::Income, amount: d(2000) },
            GroupTotal { key: "February".into(), kind: TxType::Expenses, amount: d(0) },
        ]
    );

    let by_cat = group_by(&c, Dimension::Category);
    let food_income = by_cat
        .iter()
        .find(|g| g.key == "Food" && g.kind == TxType::Income)
        .unwrap();
    assert_eq!(food_income.amount, Decimal::ZERO);
    assert_eq!(by_cat.len(), 4);
}

#[test]
fn month_grouping_skips_undated_rows_but_category_keeps_them() {
    let c = normalize(vec![
        raw(Some("1"), "not-a-date", 50, TxType::Expenses, "Outing"),
        raw(Some("2"), "2024-03-02", 10, TxType::Expenses, "Food"),
    ]);
    let months: Vec<_> = group_by(&c, Dimension::Month).into_iter().map(|g| g.key).collect();
    assert_eq!(months, vec!["March", "March"]);
    assert!(group_by(&c, Dimension::Category).iter().any(|g| g.key == "Outing"));
}

#[test]
fn category_shares_sorted_with_percentages() {
    let c = vec![
        tx("2024-01-01", 300, TxType::Expenses, "Food"),
        tx("2024-01-02", 100, TxType::Expenses, "Home"),
        tx("2024-01-03", 600, TxType::Expenses, "Food"),
        tx("2024-01-04", 5000, TxType::Income, "Salary"),
    ];
    let shares = category_shares(&c, TxType::Expenses);
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].category, "Food");
    assert_eq!(shares[0].amount, d(900));
    assert_eq!(shares[0].percent, Decimal::new(9000, 2));
    assert_eq!(shares[1].percent, Decimal::new(1000, 2));
    assert!(category_shares(&[], TxType::Income).is_empty());
}

#[test]
fn summary_report_honours_month_flag() {
    let c = scenario();
    let matches = cli::build_cli().get_matches_from(["finora", "summary", "--month", "jan"]);
    if let Some(("summary", sub)) = matches.subcommand() {
        let month = month_from_args(sub).unwrap();
        assert_eq!(month, "January");
        let report = build_report(&c, &month);
        assert_eq!(report.totals.savings, d(600));
        assert_eq!(report.by_month.len(), 2);
        assert_eq!(report.income_shares[0].category, "Salary");
    } else {
        panic!("no summary subcommand");
    }
}

#[test]
fn summary_rejects_unknown_month() {
    let matches = cli::build_cli().get_matches_from(["finora", "summary", "--month", "Smarch"]);
    if let Some(("summary", sub)) = matches.subcommand() {
        let err = month_from_args(sub).unwrap_err();
        assert!(err.to_string().contains("Unknown month"));
    } else {
        panic!("no summary subcommand");
    }
}
