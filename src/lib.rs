//! Asset Reference Data
//!
//! Client-side reference-data layer for the asset console: dropdown lookups
//! (statuses, categories, locations, vendors, employees, asset ids, ...)
//! fetched from inconsistently shaped endpoints, normalized to a single
//! `{id, value, label}` shape and cached for a short window, plus the
//! structured asset identifier codec.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Consumers: asset, transfer, disposal, compliance screens       │
//! └─────────────────────────────────────────────────────────────────┘
//!                │                                   │
//!                ▼                                   ▼
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │     ReferenceDataClient      │   │          asset_id            │
//! │  envelope → normalize → cache│   │ encode / decode / generator  │
//! └──────────────────────────────┘   └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │ LookupTransport (reqwest)    │
//! │ bearer token from session    │
//! └──────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use asset_refdata::{RefDataConfig, ReferenceDataClient, StaticToken};
//!
//! let config = RefDataConfig::from_file("config/refdata.yaml")?;
//! let client = ReferenceDataClient::from_config(&config, Arc::new(StaticToken::none()))?;
//!
//! let vendors = client.get_vendor_names(None).await;
//! let everything = client.get_all_dropdown_data(true).await;
//! ```

pub mod asset_id;
pub mod config;
pub mod error;
pub mod lookup;
pub mod session;

// Re-export main types
pub use asset_id::{
    decode, encode, validate, AssetFormData, AssetIdGenerator, AssetIdSegments, FixedSequence,
    RandomSequence, SequenceSource,
};
pub use config::RefDataConfig;
pub use error::{RefDataError, Result};
pub use lookup::{
    CacheStore, DropdownBundle, ExpiryScope, HttpTransport, LookupCategory, LookupRecord,
    LookupTransport, ReferenceDataClient,
};
pub use session::{EnvToken, SessionTokenProvider, StaticToken};
