//! Reference-data client
//!
//! One retrieval method per lookup category. Every method resolves to a
//! list and never fails: transport and shape errors are logged and come
//! back as an empty list, so an empty result means "unavailable", not
//! "confirmed zero records".

use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;

use super::cache::CacheStore;
use super::category::LookupCategory;
use super::envelope::unwrap_envelope;
use super::record::{normalize_all, LookupRecord};
use super::transport::{HttpTransport, LookupTransport};
use crate::config::{RefDataConfig, DEFAULT_EXISTING_ASSET_ID_PREFIX};
use crate::error::Result;
use crate::session::SessionTokenProvider;

/// Every lookup list, fetched together
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DropdownBundle {
    pub status_types: Vec<LookupRecord>,
    pub status_names: Vec<LookupRecord>,
    pub categories: Vec<LookupRecord>,
    pub locations: Vec<LookupRecord>,
    pub location_types: Vec<LookupRecord>,
    pub location_names: Vec<LookupRecord>,
    pub vendor_names: Vec<LookupRecord>,
    pub asset_names: Vec<LookupRecord>,
    pub generated_asset_ids: Vec<LookupRecord>,
    pub existing_asset_ids: Vec<LookupRecord>,
    pub asset_types: Vec<LookupRecord>,
    pub requested_by: Vec<LookupRecord>,
    pub employees: Vec<LookupRecord>,
    pub employee_names: Vec<LookupRecord>,
    pub employee_ids: Vec<LookupRecord>,
    pub depreciation_methods: Vec<LookupRecord>,
}

impl DropdownBundle {
    fn slot(&mut self, category: LookupCategory) -> &mut Vec<LookupRecord> {
        match category {
            LookupCategory::StatusTypes => &mut self.status_types,
            LookupCategory::StatusNames => &mut self.status_names,
            LookupCategory::Categories => &mut self.categories,
            LookupCategory::Locations => &mut self.locations,
            LookupCategory::LocationTypes => &mut self.location_types,
            LookupCategory::LocationNames => &mut self.location_names,
            LookupCategory::VendorNames => &mut self.vendor_names,
            LookupCategory::AssetNames => &mut self.asset_names,
            LookupCategory::GeneratedAssetIds => &mut self.generated_asset_ids,
            LookupCategory::ExistingAssetIds => &mut self.existing_asset_ids,
            LookupCategory::AssetTypes => &mut self.asset_types,
            LookupCategory::RequestedBy => &mut self.requested_by,
            LookupCategory::Employees => &mut self.employees,
            LookupCategory::EmployeeNames => &mut self.employee_names,
            LookupCategory::EmployeeIds => &mut self.employee_ids,
            LookupCategory::DepreciationMethods => &mut self.depreciation_methods,
        }
    }

    /// Records for one category
    pub fn get(&self, category: LookupCategory) -> &[LookupRecord] {
        match category {
            LookupCategory::StatusTypes => &self.status_types,
            LookupCategory::StatusNames => &self.status_names,
            LookupCategory::Categories => &self.categories,
            LookupCategory::Locations => &self.locations,
            LookupCategory::LocationTypes => &self.location_types,
            LookupCategory::LocationNames => &self.location_names,
            LookupCategory::VendorNames => &self.vendor_names,
            LookupCategory::AssetNames => &self.asset_names,
            LookupCategory::GeneratedAssetIds => &self.generated_asset_ids,
            LookupCategory::ExistingAssetIds => &self.existing_asset_ids,
            LookupCategory::AssetTypes => &self.asset_types,
            LookupCategory::RequestedBy => &self.requested_by,
            LookupCategory::Employees => &self.employees,
            LookupCategory::EmployeeNames => &self.employee_names,
            LookupCategory::EmployeeIds => &self.employee_ids,
            LookupCategory::DepreciationMethods => &self.depreciation_methods,
        }
    }

    pub fn total_records(&self) -> usize {
        LookupCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

/// Fetches, normalizes and caches lookup lists
///
/// Concurrent fetches of the same category are not coalesced; two screens
/// loading at once may both hit the network. The cache lock is never held
/// across a request.
pub struct ReferenceDataClient {
    transport: Arc<dyn LookupTransport>,
    cache: Arc<CacheStore>,
    existing_asset_id_prefix: String,
}

impl ReferenceDataClient {
    pub fn new(transport: Arc<dyn LookupTransport>, cache: Arc<CacheStore>) -> Self {
        Self {
            transport,
            cache,
            existing_asset_id_prefix: DEFAULT_EXISTING_ASSET_ID_PREFIX.to_string(),
        }
    }

    /// Build an HTTP-backed client with its own cache
    pub fn from_config(
        config: &RefDataConfig,
        token: Arc<dyn SessionTokenProvider>,
    ) -> Result<Self> {
        let transport = HttpTransport::from_config(config, token)?;
        let cache = CacheStore::with_scope(config.cache_ttl(), config.expiry_scope);

        Ok(Self::new(Arc::new(transport), Arc::new(cache))
            .with_existing_asset_id_prefix(config.existing_asset_id_prefix.clone()))
    }

    pub fn with_existing_asset_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.existing_asset_id_prefix = prefix.into();
        self
    }

    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    /// Fetch one category
    ///
    /// `use_cache = None` applies the category's default policy. A cached
    /// list is only served while fresh and non-empty.
    pub async fn fetch(
        &self,
        category: LookupCategory,
        use_cache: Option<bool>,
    ) -> Vec<LookupRecord> {
        let use_cache = use_cache.unwrap_or_else(|| category.default_use_cache());

        if use_cache {
            if let Some(records) = self.cache.get_fresh(category).await {
                tracing::debug!(%category, records = records.len(), "Lookup cache hit");
                return records;
            }
        }

        match self.fetch_remote(category).await {
            Ok(records) => {
                if use_cache {
                    self.cache.set(category, records.clone()).await;
                }
                records
            }
            Err(e) => {
                tracing::error!(
                    %category,
                    path = category.endpoint(),
                    error = %e,
                    "Lookup fetch failed, returning empty list"
                );
                Vec::new()
            }
        }
    }

    async fn fetch_remote(&self, category: LookupCategory) -> Result<Vec<LookupRecord>> {
        let path = category.endpoint();
        let body = self.transport.get_json(path).await?;
        let unwrapped = unwrap_envelope(&body);

        let mut records = normalize_all(category, &unwrapped.items);
        if category == LookupCategory::ExistingAssetIds {
            for record in &mut records {
                record.strip_value_prefix(&self.existing_asset_id_prefix);
            }
        }

        tracing::info!(
            %category,
            path,
            envelope = unwrapped.rule.unwrap_or("none"),
            records = records.len(),
            "Fetched lookup list"
        );
        Ok(records)
    }

    pub async fn get_status_types(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::StatusTypes, use_cache).await
    }

    pub async fn get_status_names(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::StatusNames, use_cache).await
    }

    /// Asset categories; fresh by default
    pub async fn get_categories(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::Categories, use_cache).await
    }

    /// Locations; fresh by default
    pub async fn get_locations(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::Locations, use_cache).await
    }

    pub async fn get_location_types(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::LocationTypes, use_cache).await
    }

    pub async fn get_location_names(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::LocationNames, use_cache).await
    }

    pub async fn get_vendor_names(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::VendorNames, use_cache).await
    }

    pub async fn get_asset_names(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::AssetNames, use_cache).await
    }

    /// Codes from the backend's id generator
    pub async fn get_generated_asset_ids(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::GeneratedAssetIds, use_cache).await
    }

    /// Ids already assigned to assets, with the listing prefix removed
    ///
    /// Not interchangeable with [`Self::get_generated_asset_ids`]; transfer and
    /// disposal screens pick from existing ids only.
    pub async fn get_existing_asset_ids(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::ExistingAssetIds, use_cache).await
    }

    pub async fn get_asset_types(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::AssetTypes, use_cache).await
    }

    pub async fn get_requested_by(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::RequestedBy, use_cache).await
    }

    pub async fn get_employees(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::Employees, use_cache).await
    }

    pub async fn get_employee_names(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::EmployeeNames, use_cache).await
    }

    pub async fn get_employee_ids(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::EmployeeIds, use_cache).await
    }

    pub async fn get_depreciation_methods(&self, use_cache: Option<bool>) -> Vec<LookupRecord> {
        self.fetch(LookupCategory::DepreciationMethods, use_cache).await
    }

    /// Fetch every category concurrently
    ///
    /// `use_cache` applies to all categories, overriding their defaults.
    pub async fn get_all_dropdown_data(&self, use_cache: bool) -> DropdownBundle {
        let results = join_all(LookupCategory::ALL.iter().map(|&category| async move {
            (category, self.fetch(category, Some(use_cache)).await)
        }))
        .await;

        let mut bundle = DropdownBundle::default();
        for (category, records) in results {
            *bundle.slot(category) = records;
        }

        tracing::info!(
            use_cache,
            total = bundle.total_records(),
            "Loaded all dropdown data"
        );
        bundle
    }

    /// Clear the cache and refetch every category from the network
    pub async fn refresh_all_dropdown_data(&self) -> DropdownBundle {
        self.cache.clear().await;
        self.get_all_dropdown_data(true).await
    }
}
