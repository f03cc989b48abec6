// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Totals and breakdowns behind the summary view.
//!
//! Everything here is a pure function of the slice it is given, so the
//! dashboard recomputes it on every refresh.

use crate::models::{Transaction, TxType};
use crate::normalize::month_rank;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub savings: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Month,
    Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTotal {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: TxType,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    /// Share of the type's total, in percent, two decimals.
    pub percent: Decimal,
}

pub fn totals(collection: &[Transaction]) -> Totals {
    let mut t = Totals::default();
    for tx in collection {
        match tx.kind {
            TxType::Income => t.income += tx.amount,
            TxType::Expenses => t.expense += tx.amount,
        }
    }
    t.savings = t.income - t.expense;
    t
}

/// Sums amounts per (key, type). Every key appears with both types; a type
/// with no transactions for that key reports zero.
///
/// Month keys follow the calendar and skip undated rows; category keys are
/// sorted lexically.
pub fn group_by(collection: &[Transaction], dimension: Dimension) -> Vec<GroupTotal> {
    let mut sums: BTreeMap<(String, TxType), Decimal> = BTreeMap::new();
    let mut keys: BTreeSet<String> = BTreeSet::new();

    for tx in collection {
        let key = match dimension {
            Dimension::Month => match &tx.month {
                Some(m) => m.clone(),
                None => continue,
            },
            Dimension::Category => tx.category.clone(),
        };
        keys.insert(key.clone());
        *sums.entry((key, tx.kind)).or_insert(Decimal::ZERO) += tx.amount;
    }

    let mut keys: Vec<String> = keys.into_iter().collect();
    if dimension == Dimension::Month {
        keys.sort_by_key(|k| month_rank(k));
    }

    let mut out = Vec::with_capacity(keys.len() * TxType::ALL.len());
    for key in keys {
        for kind in TxType::ALL {
            let amount = sums
                .get(&(key.clone(), kind))
                .copied()
                .unwrap_or(Decimal::ZERO);
            out.push(GroupTotal { key: key.clone(), kind, amount });
        }
    }
    out
}

/// Distribution of one type across categories, largest first.
pub fn category_shares(collection: &[Transaction], kind: TxType) -> Vec<CategoryShare> {
    let mut agg: BTreeMap<&str, Decimal> = BTreeMap::new();
    for tx in collection.iter().filter(|t| t.kind == kind) {
        *agg.entry(tx.category.as_str()).or_insert(Decimal::ZERO) += tx.amount;
    }
    let total: Decimal = agg.values().copied().sum();

    let mut items: Vec<CategoryShare> = agg
        .into_iter()
        .map(|(category, amount)| {
            let percent = if total.is_zero() {
                Decimal::ZERO
            } else {
                (amount * Decimal::ONE_HUNDRED / total).round_dp(2)
            };
            CategoryShare { category: category.to_string(), amount, percent }
        })
        .collect();
    items.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
    items
}
