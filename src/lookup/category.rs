//! Lookup categories and their endpoint/field conventions

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One named kind of reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupCategory {
    StatusTypes,
    StatusNames,
    Categories,
    Locations,
    LocationTypes,
    LocationNames,
    VendorNames,
    AssetNames,
    /// Codes produced by the backend's asset id generator
    GeneratedAssetIds,
    /// Ids already assigned to assets, served with a textual prefix
    ExistingAssetIds,
    AssetTypes,
    RequestedBy,
    Employees,
    EmployeeNames,
    EmployeeIds,
    DepreciationMethods,
}

impl LookupCategory {
    pub const ALL: [LookupCategory; 16] = [
        Self::StatusTypes,
        Self::StatusNames,
        Self::Categories,
        Self::Locations,
        Self::LocationTypes,
        Self::LocationNames,
        Self::VendorNames,
        Self::AssetNames,
        Self::GeneratedAssetIds,
        Self::ExistingAssetIds,
        Self::AssetTypes,
        Self::RequestedBy,
        Self::Employees,
        Self::EmployeeNames,
        Self::EmployeeIds,
        Self::DepreciationMethods,
    ];

    /// Endpoint path, relative to the API base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::StatusTypes => "/settings/getStatusTypesDropdown",
            Self::StatusNames => "/settings/getStatusNamesDropdown",
            Self::Categories => "/settings/getCategoriesDropdown",
            Self::Locations => "/settings/getLocationsDropdown",
            Self::LocationTypes => "/settings/getLocationTypesDropdown",
            Self::LocationNames => "/settings/getLocationNamesDropdown",
            Self::VendorNames => "/settings/getVendorNamesDropdown",
            Self::AssetNames => "/assets/dropdown/asset-names",
            Self::GeneratedAssetIds => "/assets/generated-codes",
            Self::ExistingAssetIds => "/assets/dropdown/asset-ids",
            Self::AssetTypes => "/assets/dropdown/asset-types",
            Self::RequestedBy => "/assets/dropdown/requested-by",
            Self::Employees => "/settings/getEmployeesList",
            Self::EmployeeNames => "/settings/getEmployeeNamesDropdown",
            Self::EmployeeIds => "/settings/getEmployeeIdsDropdown",
            Self::DepreciationMethods => "/settings/getDepreciationMethodsDropdown",
        }
    }

    /// Stable name used as the cache key and on the CLI
    pub fn cache_key(&self) -> &'static str {
        match self {
            Self::StatusTypes => "status_types",
            Self::StatusNames => "status_names",
            Self::Categories => "categories",
            Self::Locations => "locations",
            Self::LocationTypes => "location_types",
            Self::LocationNames => "location_names",
            Self::VendorNames => "vendor_names",
            Self::AssetNames => "asset_names",
            Self::GeneratedAssetIds => "generated_asset_ids",
            Self::ExistingAssetIds => "existing_asset_ids",
            Self::AssetTypes => "asset_types",
            Self::RequestedBy => "requested_by",
            Self::Employees => "employees",
            Self::EmployeeNames => "employee_names",
            Self::EmployeeIds => "employee_ids",
            Self::DepreciationMethods => "depreciation_methods",
        }
    }

    /// Whether a fetch consults the cache when the caller does not say
    ///
    /// Categories and locations are edited from the settings screens within a
    /// session, so they always go to the network unless asked otherwise.
    pub fn default_use_cache(&self) -> bool {
        !matches!(self, Self::Categories | Self::Locations)
    }

    /// Candidate fields for the record id, in priority order
    ///
    /// Always starts with `id` so re-normalizing a record keeps its id.
    pub fn id_fields(&self) -> &'static [&'static str] {
        match self {
            Self::StatusTypes => &["id", "status_type_id", "value"],
            Self::StatusNames => &["id", "status_id", "value"],
            Self::Categories => &["id", "category_id", "value"],
            Self::Locations | Self::LocationNames => &["id", "location_id", "value"],
            Self::LocationTypes => &["id", "location_type_id", "value"],
            Self::VendorNames => &["id", "vendor_id", "value"],
            Self::AssetNames => &["id", "asset_name_id", "value"],
            Self::GeneratedAssetIds => &["id", "code", "generated_code", "value"],
            Self::ExistingAssetIds => &["id", "asset_id", "value"],
            Self::AssetTypes => &["id", "asset_type_id", "value"],
            Self::RequestedBy | Self::Employees | Self::EmployeeNames | Self::EmployeeIds => {
                &["id", "employee_id", "emp_id", "value"]
            }
            Self::DepreciationMethods => &["id", "depreciation_method_id", "method_id", "value"],
        }
    }

    /// Candidate fields for the display label, in priority order
    ///
    /// Always ends with `label` so re-normalizing a record keeps its label.
    pub fn name_fields(&self) -> &'static [&'static str] {
        match self {
            Self::StatusTypes => &["status_type_name", "status_type", "name", "label"],
            Self::StatusNames => &["status_name", "name", "label"],
            Self::Categories => &["category_name", "name", "label"],
            Self::Locations | Self::LocationNames => &["location_name", "name", "label"],
            Self::LocationTypes => &["location_type_name", "location_type", "name", "label"],
            Self::VendorNames => &["vendor_name", "name", "label"],
            Self::AssetNames => &["asset_name", "name", "label"],
            Self::GeneratedAssetIds => &["code", "generated_code", "asset_id", "name", "label"],
            Self::ExistingAssetIds => &["asset_id", "name", "label"],
            Self::AssetTypes => &["asset_type_name", "asset_type", "name", "label"],
            Self::RequestedBy => &["requested_by", "employee_name", "full_name", "name", "label"],
            Self::Employees | Self::EmployeeNames => {
                &["employee_name", "full_name", "name", "label"]
            }
            Self::EmployeeIds => &["employee_id", "emp_id", "label"],
            Self::DepreciationMethods => &[
                "depreciation_method_name",
                "method_name",
                "depreciation_method",
                "name",
                "label",
            ],
        }
    }

    /// Person lists may only carry `first_name`/`last_name`
    pub fn composes_person_name(&self) -> bool {
        matches!(self, Self::RequestedBy | Self::Employees | Self::EmployeeNames)
    }
}

impl std::fmt::Display for LookupCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.cache_key())
    }
}

impl FromStr for LookupCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.cache_key() == wanted)
            .ok_or_else(|| format!("unknown lookup category '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_endpoints_and_keys_are_unique() {
        let endpoints: HashSet<_> = LookupCategory::ALL.iter().map(|c| c.endpoint()).collect();
        let keys: HashSet<_> = LookupCategory::ALL.iter().map(|c| c.cache_key()).collect();
        assert_eq!(endpoints.len(), LookupCategory::ALL.len());
        assert_eq!(keys.len(), LookupCategory::ALL.len());
    }

    #[test]
    fn test_default_cache_policy() {
        assert!(!LookupCategory::Categories.default_use_cache());
        assert!(!LookupCategory::Locations.default_use_cache());
        assert!(LookupCategory::VendorNames.default_use_cache());
        assert!(LookupCategory::LocationNames.default_use_cache());
    }

    #[test]
    fn test_field_candidates_keep_normalized_fields_first_and_last() {
        for category in LookupCategory::ALL {
            assert_eq!(category.id_fields().first(), Some(&"id"), "{}", category);
            assert_eq!(category.name_fields().last(), Some(&"label"), "{}", category);
        }
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            "vendor-names".parse::<LookupCategory>().unwrap(),
            LookupCategory::VendorNames
        );
        assert_eq!(
            "Existing_Asset_Ids".parse::<LookupCategory>().unwrap(),
            LookupCategory::ExistingAssetIds
        );
        assert!("widgets".parse::<LookupCategory>().is_err());
    }

    #[test]
    fn test_serde_name_matches_cache_key() {
        for category in LookupCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.cache_key()));
        }
    }
}
