//! Reference-data client behaviour against a canned transport
//!
//! Covers cache hits/expiry, bulk fetch and refresh, envelope handling,
//! normalization and the degrade-to-empty error policy.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use asset_refdata::{CacheStore, ExpiryScope, LookupCategory, ReferenceDataClient};
use helpers::FakeTransport;

fn client_with(transport: &Arc<FakeTransport>) -> ReferenceDataClient {
    ReferenceDataClient::new(transport.clone(), Arc::new(CacheStore::default()))
}

// ── Cache behaviour ──────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn second_cached_fetch_within_window_hits_cache() {
    let transport = Arc::new(FakeTransport::with_every_category());
    let client = client_with(&transport);

    for category in LookupCategory::ALL {
        let first = client.fetch(category, Some(true)).await;
        let second = client.fetch(category, Some(true)).await;
        assert_eq!(first, second, "{}", category);
        assert_eq!(transport.calls(category), 1, "{}", category);
    }
}

#[tokio::test(start_paused = true)]
async fn fetch_after_expiry_goes_back_to_network() {
    for category in LookupCategory::ALL {
        let transport = Arc::new(FakeTransport::with_every_category());
        let client = client_with(&transport);

        client.fetch(category, Some(true)).await;
        tokio::time::advance(Duration::from_secs(301)).await;
        client.fetch(category, Some(true)).await;

        assert_eq!(transport.calls(category), 2, "{}", category);
    }
}

#[tokio::test(start_paused = true)]
async fn write_to_one_category_keeps_others_fresh() {
    let transport = Arc::new(FakeTransport::with_every_category());
    let client = client_with(&transport);

    client.get_vendor_names(None).await;
    tokio::time::advance(Duration::from_secs(240)).await;
    client.get_asset_types(None).await;
    tokio::time::advance(Duration::from_secs(120)).await;

    // Vendor names are six minutes old but the shared stamp is two minutes old
    client.get_vendor_names(None).await;
    assert_eq!(transport.calls(LookupCategory::VendorNames), 1);
}

#[tokio::test(start_paused = true)]
async fn per_category_scope_expires_independently() {
    let transport = Arc::new(FakeTransport::with_every_category());
    let cache = CacheStore::with_scope(Duration::from_secs(300), ExpiryScope::PerCategory);
    let client = ReferenceDataClient::new(transport.clone(), Arc::new(cache));

    client.get_vendor_names(None).await;
    tokio::time::advance(Duration::from_secs(240)).await;
    client.get_asset_types(None).await;
    tokio::time::advance(Duration::from_secs(120)).await;

    client.get_vendor_names(None).await;
    client.get_asset_types(None).await;
    assert_eq!(transport.calls(LookupCategory::VendorNames), 2);
    assert_eq!(transport.calls(LookupCategory::AssetTypes), 1);
}

#[tokio::test(start_paused = true)]
async fn categories_and_locations_default_to_fresh() {
    let transport = Arc::new(FakeTransport::with_every_category());
    let client = client_with(&transport);

    client.get_categories(None).await;
    client.get_categories(None).await;
    client.get_locations(None).await;
    client.get_locations(None).await;
    client.get_location_names(None).await;
    client.get_location_names(None).await;

    assert_eq!(transport.calls(LookupCategory::Categories), 2);
    assert_eq!(transport.calls(LookupCategory::Locations), 2);
    assert_eq!(transport.calls(LookupCategory::LocationNames), 1);
}

#[tokio::test(start_paused = true)]
async fn empty_cached_list_is_refetched() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond(LookupCategory::StatusNames, json!({"data": []}));
    let client = client_with(&transport);

    assert!(client.get_status_names(None).await.is_empty());
    assert!(client.get_status_names(None).await.is_empty());
    assert_eq!(transport.calls(LookupCategory::StatusNames), 2);
}

#[tokio::test(start_paused = true)]
async fn separate_caches_do_not_share_state() {
    let transport = Arc::new(FakeTransport::with_every_category());
    let first = client_with(&transport);
    let second = client_with(&transport);

    first.get_vendor_names(None).await;
    second.get_vendor_names(None).await;
    assert_eq!(transport.calls(LookupCategory::VendorNames), 2);
}

// ── Bulk fetch and refresh ───────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn bulk_fetch_fills_every_slot() {
    let transport = Arc::new(FakeTransport::with_every_category());
    let client = client_with(&transport);

    let bundle = client.get_all_dropdown_data(true).await;
    for category in LookupCategory::ALL {
        assert_eq!(bundle.get(category).len(), 1, "{}", category);
        assert_eq!(transport.calls(category), 1, "{}", category);
    }
    assert_eq!(bundle.total_records(), LookupCategory::ALL.len());

    // Cached bulk fetch makes no new calls
    let again = client.get_all_dropdown_data(true).await;
    assert_eq!(again, bundle);
    assert_eq!(transport.total_calls(), LookupCategory::ALL.len());
}

#[tokio::test(start_paused = true)]
async fn uncached_bulk_fetch_always_hits_network() {
    let transport = Arc::new(FakeTransport::with_every_category());
    let client = client_with(&transport);

    client.get_all_dropdown_data(false).await;
    client.get_all_dropdown_data(false).await;
    assert_eq!(transport.total_calls(), 2 * LookupCategory::ALL.len());
    assert!(!client.cache().is_valid().await);
}

#[tokio::test(start_paused = true)]
async fn refresh_all_calls_every_endpoint_even_when_fresh() {
    let transport = Arc::new(FakeTransport::with_every_category());
    let client = client_with(&transport);

    client.get_all_dropdown_data(true).await;
    assert!(client.cache().is_valid().await);

    let bundle = client.refresh_all_dropdown_data().await;
    for category in LookupCategory::ALL {
        assert_eq!(transport.calls(category), 2, "{}", category);
    }
    assert_eq!(bundle.total_records(), LookupCategory::ALL.len());
    assert!(client.cache().is_valid().await);
}

// ── Envelopes and normalization ──────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn envelopes_are_unwrapped_per_endpoint() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond(
        LookupCategory::GeneratedAssetIds,
        json!({
            "success": true,
            "generated_codes": ["BLR-IT-LTP-2025-0001", "MUM-HR-DSK-2024-0002"]
        }),
    );
    transport.respond(
        LookupCategory::Employees,
        json!({"data": {"employeeList": [
            {"employee_id": "E-7", "first_name": "Ravi", "last_name": "Kumar"}
        ]}}),
    );
    transport.respond(
        LookupCategory::DepreciationMethods,
        json!({"result": [{"method_id": 2, "method_name": "Straight Line"}]}),
    );
    transport.respond(
        LookupCategory::VendorNames,
        json!([{"vendor_id": 11, "vendor_name": "Acme Supplies", "gstin": "29ABCDE1234F1Z5"}]),
    );
    let client = client_with(&transport);

    let codes = client.get_generated_asset_ids(None).await;
    assert_eq!(codes.len(), 2);
    assert_eq!(codes[0].label, "BLR-IT-LTP-2025-0001");

    let employees = client.get_employees(None).await;
    assert_eq!(employees[0].value, json!("E-7"));
    assert_eq!(employees[0].label, "Ravi Kumar");

    let methods = client.get_depreciation_methods(None).await;
    assert_eq!(methods[0].id, json!(2));
    assert_eq!(methods[0].label, "Straight Line");

    let vendors = client.get_vendor_names(None).await;
    assert_eq!(vendors[0].id, json!(11));
    assert_eq!(vendors[0].label, "Acme Supplies");
    assert_eq!(vendors[0].extra.get("gstin"), Some(&json!("29ABCDE1234F1Z5")));
}

#[tokio::test(start_paused = true)]
async fn unrecognised_envelope_is_empty_not_an_error() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond(LookupCategory::StatusTypes, json!({"status": "ok", "rows": [1, 2]}));
    let client = client_with(&transport);

    assert!(client.get_status_types(None).await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn existing_asset_ids_have_prefix_stripped() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond(
        LookupCategory::ExistingAssetIds,
        json!({"data": [
            {"asset_id": "ASSET-BLR-IT-LTP-2025-0012"},
            {"asset_id": "HYD-FIN-MON-2023-0420"}
        ]}),
    );
    transport.respond(
        LookupCategory::GeneratedAssetIds,
        json!({"generated_codes": ["ASSET-BLR-IT-LTP-2025-0099"]}),
    );
    let client = client_with(&transport);

    let existing = client.get_existing_asset_ids(None).await;
    let values: Vec<String> = existing.iter().map(|r| r.value_string()).collect();
    assert_eq!(values, vec!["BLR-IT-LTP-2025-0012", "HYD-FIN-MON-2023-0420"]);

    // Generated codes are served as-is
    let generated = client.get_generated_asset_ids(None).await;
    assert_eq!(generated[0].value_string(), "ASSET-BLR-IT-LTP-2025-0099");
}

#[tokio::test(start_paused = true)]
async fn cached_records_renormalize_to_same_triple() {
    let transport = Arc::new(FakeTransport::with_every_category());
    transport.respond(
        LookupCategory::ExistingAssetIds,
        json!({"data": [
            {"asset_id": "ASSET-BLR-IT-LTP-2025-0012"},
            {"id": "ASSET-PUN-FIN-MON-2019-4321", "asset_id": "ASSET-PUN-FIN-MON-2019-4321"},
            "ASSET-MUM-HR-DSK-2024-0003"
        ]}),
    );
    let client = client_with(&transport);

    for category in LookupCategory::ALL {
        for record in client.fetch(category, Some(true)).await {
            let again = asset_refdata::LookupRecord::normalize(
                category,
                &serde_json::to_value(&record).unwrap(),
            );
            assert_eq!(again.id, record.id, "{}", category);
            assert_eq!(again.value, record.value, "{}", category);
            assert_eq!(again.label, record.label, "{}", category);
        }
    }

    let labels: Vec<String> = client
        .get_existing_asset_ids(None)
        .await
        .into_iter()
        .map(|r| r.label)
        .collect();
    assert_eq!(
        labels,
        vec!["BLR-IT-LTP-2025-0012", "PUN-FIN-MON-2019-4321", "MUM-HR-DSK-2024-0003"]
    );
}

// ── Failure policy ───────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn failed_fetch_returns_empty_and_leaves_cache_alone() {
    let transport = Arc::new(FakeTransport::with_every_category());
    transport.fail(LookupCategory::VendorNames, 502);
    let client = client_with(&transport);

    assert!(client.get_vendor_names(None).await.is_empty());
    assert!(!client.cache().is_valid().await);

    // No retry: each call is one request
    assert!(client.get_vendor_names(None).await.is_empty());
    assert_eq!(transport.calls(LookupCategory::VendorNames), 2);
}

#[tokio::test(start_paused = true)]
async fn one_failing_category_does_not_break_bulk_fetch() {
    let transport = Arc::new(FakeTransport::with_every_category());
    transport.fail(LookupCategory::Employees, 500);
    let client = client_with(&transport);

    let bundle = client.get_all_dropdown_data(true).await;
    assert!(bundle.employees.is_empty());
    assert_eq!(bundle.total_records(), LookupCategory::ALL.len() - 1);
}

#[tokio::test(start_paused = true)]
async fn stale_cache_is_not_served_when_network_fails() {
    let transport = Arc::new(FakeTransport::with_every_category());
    let client = client_with(&transport);

    assert_eq!(client.get_asset_names(None).await.len(), 1);
    tokio::time::advance(Duration::from_secs(600)).await;
    transport.fail(LookupCategory::AssetNames, 503);

    assert!(client.get_asset_names(None).await.is_empty());
    // The stale entry is still in the store for callers that want it
    assert_eq!(client.cache().get(LookupCategory::AssetNames).await.len(), 1);
}
