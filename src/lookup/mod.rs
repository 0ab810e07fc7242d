//! Reference-data lookups
//!
//! Resolves the dropdown lists that asset, transfer, disposal and
//! compliance screens share.
//!
//! ## Flow
//!
//! ```text
//! screen asks for "locations"
//!         │
//!         ▼
//! ReferenceDataClient.fetch(category, use_cache)
//!         │
//!         ├─► CacheStore fresh & non-empty? ──► cached records
//!         │
//!         ├─► LookupTransport GET /settings/getLocationsDropdown
//!         │
//!         ├─► unwrap_envelope (first matching rule)
//!         │
//!         ├─► LookupRecord::normalize ({id, value, label} + source fields)
//!         │
//!         └─► CacheStore.set (when caching)
//! ```

pub mod cache;
pub mod category;
pub mod client;
pub mod envelope;
pub mod record;
pub mod transport;

pub use cache::{CacheSnapshot, CacheStore, ExpiryScope, DEFAULT_EXPIRY_WINDOW};
pub use category::LookupCategory;
pub use client::{DropdownBundle, ReferenceDataClient};
pub use envelope::{unwrap_envelope, Unwrapped};
pub use record::{normalize_all, LookupRecord};
pub use transport::{HttpTransport, LookupTransport};
