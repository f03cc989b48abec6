// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::{Duration, Instant};

/// Single-slot cache with a time-to-live.
///
/// A value is served while `now - fetched_at < ttl`. Callers must
/// [`invalidate`](FetchCache::invalidate) after writing to the source.
#[derive(Debug)]
pub struct FetchCache<T> {
    ttl: Duration,
    entry: Option<(T, Instant)>,
}

impl<T: Clone> FetchCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn get_or_try_fetch<E, F>(&mut self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.get_or_try_fetch_at(Instant::now(), fetch)
    }

    /// Same as [`get_or_try_fetch`](FetchCache::get_or_try_fetch) with an explicit clock reading.
    /// A failed fetch leaves the slot as it was.
    pub fn get_or_try_fetch_at<E, F>(&mut self, now: Instant, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(v) = self.peek_at(now) {
            log::debug!("cache hit");
            return Ok(v.clone());
        }
        let value = fetch()?;
        self.entry = Some((value.clone(), now));
        Ok(value)
    }

    pub fn peek_at(&self, now: Instant) -> Option<&T> {
        match &self.entry {
            Some((v, at)) if now.saturating_duration_since(*at) < self.ttl => Some(v),
            _ => None,
        }
    }

    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            log::info!("transaction cache invalidated");
        }
    }
}
