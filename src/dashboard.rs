// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cache::FetchCache;
use crate::error::Result;
use crate::models::{NewTransaction, SubmitResult, Transaction};
use crate::normalize::normalize;
use crate::store::TransactionSource;
use std::time::Duration;

/// Transaction source fronted by a TTL cache of the normalized collection.
pub struct Dashboard<S> {
    source: S,
    cache: FetchCache<Vec<Transaction>>,
}

impl<S: TransactionSource> Dashboard<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self { source, cache: FetchCache::new(ttl) }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Normalized transactions, fetched at most once per TTL.
    pub fn transactions(&mut self) -> Result<Vec<Transaction>> {
        let source = &self.source;
        self.cache
            .get_or_try_fetch(|| source.fetch_all().map(normalize))
    }

    /// Submits one transaction. The cache is dropped only when the source accepted it.
    pub fn add(&mut self, tx: &NewTransaction) -> Result<SubmitResult> {
        tx.validate()?;
        let result = self.source.submit(tx)?;
        self.cache.invalidate();
        Ok(result)
    }

    /// Forces the next read to go to the source.
    pub fn refresh(&mut self) {
        self.cache.invalidate();
    }
}
