// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::raw;
use finora::cli;
use finora::commands::transactions::{self, new_transaction_from};
use finora::models::{Method, Transaction, TxType};
use finora::normalize::normalize;
use rust_decimal::Decimal;

fn setup() -> Vec<Transaction> {
    let mut rows = Vec::new();
    for i in 1..=3 {
        rows.push(raw(
            Some(i.to_string().as_str()),
            &format!("2025-01-0{}", i),
            10,
            TxType::Expenses,
            "Food",
        ));
    }
    rows.push(raw(None, "2025-01-09", 99, TxType::Expenses, "Food"));
    rows.push(raw(Some("4"), "2025-02-01", 20, TxType::Income, "Interest"));
    normalize(rows)
}

#[test]
fn list_limit_respected() {
    let data = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["finora", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&data, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, "2025-02-01");
            assert_eq!(rows[1].date, "2025-01-03");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_skips_rows_without_id_and_filters_month() {
    let data = setup();
    let matches = cli::build_cli().get_matches_from(["finora", "tx", "list", "--month", "january"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&data, list_m).unwrap();
            assert_eq!(rows.len(), 3);
            assert!(rows.iter().all(|r| r.month == "January"));
            assert!(rows.iter().all(|r| !r.id.is_empty()));
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn add_args_build_payload() {
    let matches = cli::build_cli().get_matches_from([
        "finora",
        "tx",
        "add",
        "--date",
        " 2025-03-04 ",
        "--amount",
        " 250.75 ",
        "--method",
        "upi",
        "--category",
        " Food ",
        "--remark",
        "  chai ",
        "--type",
        "income",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("add", add_m)) = tx_m.subcommand() {
            let tx = new_transaction_from(add_m).unwrap();
            assert_eq!(tx.date.to_string(), "2025-03-04");
            assert_eq!(tx.amount, Decimal::new(25075, 2));
            assert_eq!(tx.method, Method::Upi);
            assert_eq!(tx.category, "Food");
            assert_eq!(tx.remark, "chai");
            assert_eq!(tx.kind, TxType::Income);
        } else {
            panic!("no add subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn add_rejects_negative_amount_and_bad_method() {
    for (amount, method) in [("--amount=-1", "Cash"), ("--amount=10", "Cheque")] {
        let matches = cli::build_cli().get_matches_from([
            "finora", "tx", "add", "--date", "2025-03-04", amount, "--method", method,
            "--category", "Food",
        ]);
        if let Some(("tx", tx_m)) = matches.subcommand() {
            if let Some(("add", add_m)) = tx_m.subcommand() {
                assert!(new_transaction_from(add_m).is_err());
            } else {
                panic!("no add subcommand");
            }
        } else {
            panic!("no tx subcommand");
        }
    }
}
