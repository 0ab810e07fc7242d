//! Structured asset identifiers
//!
//! Identifiers have five dash-separated segments:
//!
//! ```text
//! BLR-IT-LTP-2025-0012
//! │   │  │   │    └─ sequence, zero-padded to 4 digits
//! │   │  │   └────── purchase year
//! │   │  └────────── asset type code
//! │   └───────────── department code
//! └───────────────── location code
//! ```
//!
//! Encoding never fails: unknown names fall back to each table's `Default`
//! code.

pub mod sequence;
pub mod tables;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub use sequence::{FixedSequence, RandomSequence, SequenceSource, MAX_SEQUENCE};
pub use tables::{CodeTable, ASSET_TYPE_CODES, DEPARTMENT_CODES, DEFAULT_KEY, LOCATION_CODES};

/// Decoded identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetIdSegments {
    /// Location name, or the raw code when no table entry matches
    pub location: String,
    pub department: String,
    pub asset_type: String,
    pub location_code: String,
    pub department_code: String,
    pub asset_type_code: String,
    /// `None` when the year segment is not a number
    pub purchase_year: Option<i32>,
    /// `None` when the sequence segment is not a number
    pub unique_number: Option<u32>,
}

/// Asset form fields the generator reads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFormData {
    pub location: Option<String>,
    pub department: Option<String>,
    #[serde(alias = "category", alias = "asset_type")]
    pub asset_type: Option<String>,
    #[serde(alias = "purchase_date")]
    pub purchase_date: Option<String>,
}

/// Encode names and numbers into `LOC-DEPT-TYPE-YYYY-NNNN`
///
/// The year segment is the last four digits of the year's magnitude, so the
/// result always has exactly five segments.
pub fn encode(
    location: &str,
    department: &str,
    asset_type: &str,
    purchase_year: i32,
    sequence_number: u32,
) -> String {
    format!(
        "{}-{}-{}-{:04}-{:04}",
        LOCATION_CODES.code_for(location),
        DEPARTMENT_CODES.code_for(department),
        ASSET_TYPE_CODES.code_for(asset_type),
        purchase_year.unsigned_abs() % 10_000,
        sequence_number
    )
}

/// Decode an identifier back into names
///
/// Returns `None` unless the id has exactly five segments.
pub fn decode(id: &str) -> Option<AssetIdSegments> {
    let parts: Vec<&str> = id.split('-').collect();
    let &[location, department, asset_type, year, sequence] = parts.as_slice() else {
        return None;
    };

    Some(AssetIdSegments {
        location: LOCATION_CODES.name_for(location).unwrap_or(location).to_string(),
        department: DEPARTMENT_CODES
            .name_for(department)
            .unwrap_or(department)
            .to_string(),
        asset_type: ASSET_TYPE_CODES
            .name_for(asset_type)
            .unwrap_or(asset_type)
            .to_string(),
        location_code: location.to_string(),
        department_code: department.to_string(),
        asset_type_code: asset_type.to_string(),
        purchase_year: year.trim().parse().ok(),
        unique_number: sequence.trim().parse().ok(),
    })
}

/// Accepts every identifier
///
/// Known gap: format checking is not enforced. Asset ids users have already
/// saved are accepted as-is; tightening this changes which ids the forms
/// accept and needs sign-off first.
pub fn validate(_id: Option<&str>) -> bool {
    true
}

/// Purchase year from a form date, or the current year
pub fn purchase_year(purchase_date: Option<&str>) -> i32 {
    purchase_date
        .and_then(parse_year)
        .unwrap_or_else(|| chrono::Local::now().year())
}

fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.year());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.year());
    }
    ["%Y-%m-%d", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(|d| d.year())
}

/// Generates identifiers for new assets
pub struct AssetIdGenerator<S: SequenceSource = RandomSequence> {
    source: S,
}

impl AssetIdGenerator<RandomSequence> {
    pub fn new() -> Self {
        Self {
            source: RandomSequence,
        }
    }
}

impl Default for AssetIdGenerator<RandomSequence> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SequenceSource> AssetIdGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn next_sequence_number(&self, asset_type: &str, department: &str, year: i32) -> u32 {
        self.source.next_sequence(asset_type, department, year)
    }

    /// Build an identifier from asset form data
    ///
    /// Missing names fall back to the table defaults; a missing or
    /// unparseable purchase date uses the current year.
    pub fn auto_generate(&self, form: &AssetFormData) -> String {
        let location = form.location.as_deref().unwrap_or_default();
        let department = form.department.as_deref().unwrap_or_default();
        let asset_type = form.asset_type.as_deref().unwrap_or_default();
        let year = purchase_year(form.purchase_date.as_deref());

        let sequence = self.next_sequence_number(asset_type, department, year);
        let id = encode(location, department, asset_type, year, sequence);
        tracing::debug!(%id, "Generated asset id");
        id
    }

    /// Carry an existing identifier over to the structured format
    ///
    /// Because [`validate`] accepts everything, this currently returns
    /// `old_id` unchanged.
    pub fn migrate(&self, old_id: &str, asset: &AssetFormData) -> String {
        if validate(Some(old_id)) {
            return old_id.to_string();
        }
        self.auto_generate(asset)
    }
}
