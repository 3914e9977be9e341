//! In-memory stores for issued tokens and per-token daily word usage.
//!
//! Both stores are process-lifetime maps behind an `Arc<RwLock<...>>`. Lock
//! scopes are short and never held across an `.await`, so std locks are
//! sufficient. Persistence is out of scope: restarting the service revokes
//! all tokens and resets all counters.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

/// Word usage accumulated by one token for the current UTC day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenUsage {
    pub words: u64,
    /// UTC day the counter was last reset on.
    pub last_reset: NaiveDate,
}

/// Maps issued bearer tokens to the email they were issued for.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, token: String, email: String) {
        let mut map = self.inner.write().expect("token store lock poisoned");
        map.insert(token, email);
    }

    /// Returns the email the token was issued for, or `None` if the token
    /// was never issued by this process.
    pub fn email_for(&self, token: &str) -> Option<String> {
        let map = self.inner.read().expect("token store lock poisoned");
        map.get(token).cloned()
    }
}

/// Tracks daily word usage per token.
#[derive(Debug, Clone, Default)]
pub struct UsageStore {
    inner: Arc<RwLock<HashMap<String, TokenUsage>>>,
}

impl UsageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` against the usage entry for `token` under a single write
    /// lock, inserting a fresh entry for `today` if none exists. Holding the
    /// lock for the whole check-and-update means two concurrent requests on
    /// one token cannot both pass a near-exhausted quota.
    pub fn with_entry<T>(
        &self,
        token: &str,
        today: NaiveDate,
        f: impl FnOnce(&mut TokenUsage) -> T,
    ) -> T {
        let mut map = self.inner.write().expect("usage store lock poisoned");
        let usage = map.entry(token.to_string()).or_insert(TokenUsage {
            words: 0,
            last_reset: today,
        });
        f(usage)
    }

    #[cfg(test)]
    pub fn get(&self, token: &str) -> Option<TokenUsage> {
        let map = self.inner.read().expect("usage store lock poisoned");
        map.get(token).cloned()
    }
}
