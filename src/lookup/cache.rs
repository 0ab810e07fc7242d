//! Lookup cache with a time-based expiry window
//!
//! The store keeps one entry per category plus a single `last_fetch` stamp.
//! In the default [`ExpiryScope::Shared`] mode validity is judged from that
//! shared stamp alone, so writing any category keeps every category fresh.
//! Screens rely on that behaviour today; [`ExpiryScope::PerCategory`] judges
//! each entry by its own `fetched_at` instead.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::category::LookupCategory;
use super::record::LookupRecord;
use crate::error::RefDataError;

/// Default expiry window (5 minutes)
pub const DEFAULT_EXPIRY_WINDOW: Duration = Duration::from_secs(300);

/// How entry freshness is judged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryScope {
    /// One `last_fetch` stamp covers the whole store
    #[default]
    Shared,
    /// Every category expires on its own `fetched_at`
    PerCategory,
}

impl FromStr for ExpiryScope {
    type Err = RefDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "shared" => Ok(Self::Shared),
            "per_category" => Ok(Self::PerCategory),
            other => Err(RefDataError::Config(format!(
                "unknown expiry scope '{}', expected 'shared' or 'per_category'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    records: Vec<LookupRecord>,
    fetched_at: Instant,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<LookupCategory, CacheEntry>,
    last_fetch: Option<Instant>,
}

/// Point-in-time view of the cache, for diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct CacheSnapshot {
    pub valid: bool,
    pub scope: ExpiryScope,
    pub expiry_window_secs: u64,
    /// Seconds since the most recent write, if any
    pub last_fetch_age_secs: Option<u64>,
    pub record_counts: HashMap<LookupCategory, usize>,
}

/// Shared lookup cache
///
/// Owned by whoever builds the client and passed in as `Arc<CacheStore>`;
/// separate stores never see each other's data.
#[derive(Debug)]
pub struct CacheStore {
    state: RwLock<CacheState>,
    expiry_window: Duration,
    scope: ExpiryScope,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_EXPIRY_WINDOW)
    }
}

impl CacheStore {
    pub fn new(expiry_window: Duration) -> Self {
        Self::with_scope(expiry_window, ExpiryScope::Shared)
    }

    pub fn with_scope(expiry_window: Duration, scope: ExpiryScope) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            expiry_window,
            scope,
        }
    }

    pub fn expiry_window(&self) -> Duration {
        self.expiry_window
    }

    pub fn scope(&self) -> ExpiryScope {
        self.scope
    }

    /// Whether the store as a whole is within its expiry window
    ///
    /// Answers for every category at once: a stale category still reports
    /// valid if any other category was written recently.
    pub async fn is_valid(&self) -> bool {
        let state = self.state.read().await;
        self.within_window(state.last_fetch)
    }

    /// Whether `category` may be served from the cache under the configured scope
    pub async fn is_fresh(&self, category: LookupCategory) -> bool {
        let state = self.state.read().await;
        match self.scope {
            ExpiryScope::Shared => self.within_window(state.last_fetch),
            ExpiryScope::PerCategory => {
                self.within_window(state.entries.get(&category).map(|e| e.fetched_at))
            }
        }
    }

    /// Stored records for `category`, regardless of validity
    pub async fn get(&self, category: LookupCategory) -> Vec<LookupRecord> {
        self.state
            .read()
            .await
            .entries
            .get(&category)
            .map(|e| e.records.clone())
            .unwrap_or_default()
    }

    /// Records for `category` if they are fresh and non-empty
    pub async fn get_fresh(&self, category: LookupCategory) -> Option<Vec<LookupRecord>> {
        let state = self.state.read().await;
        let entry = state.entries.get(&category)?;
        let stamp = match self.scope {
            ExpiryScope::Shared => state.last_fetch,
            ExpiryScope::PerCategory => Some(entry.fetched_at),
        };
        if self.within_window(stamp) && !entry.records.is_empty() {
            Some(entry.records.clone())
        } else {
            None
        }
    }

    /// Store records for `category` and stamp the shared `last_fetch`
    pub async fn set(&self, category: LookupCategory, records: Vec<LookupRecord>) {
        let now = Instant::now();
        let mut state = self.state.write().await;
        state.entries.insert(
            category,
            CacheEntry {
                records,
                fetched_at: now,
            },
        );
        state.last_fetch = Some(now);
    }

    /// Drop every entry and forget `last_fetch`
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.entries.clear();
        state.last_fetch = None;
    }

    pub async fn snapshot(&self) -> CacheSnapshot {
        let state = self.state.read().await;
        CacheSnapshot {
            valid: self.within_window(state.last_fetch),
            scope: self.scope,
            expiry_window_secs: self.expiry_window.as_secs(),
            last_fetch_age_secs: state.last_fetch.map(|t| t.elapsed().as_secs()),
            record_counts: state
                .entries
                .iter()
                .map(|(category, entry)| (*category, entry.records.len()))
                .collect(),
        }
    }

    fn within_window(&self, stamp: Option<Instant>) -> bool {
        stamp.is_some_and(|t| t.elapsed() < self.expiry_window)
    }
}
