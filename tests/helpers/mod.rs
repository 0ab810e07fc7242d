//! Shared fakes for the reference-data integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use asset_refdata::{LookupCategory, LookupTransport, RefDataError, Result};

/// Canned transport that counts GETs per path
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<HashMap<String, Value>>,
    failures: Mutex<HashMap<String, u16>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that answers every category with one record in a `data` envelope
    pub fn with_every_category() -> Self {
        let transport = Self::new();
        for category in LookupCategory::ALL {
            transport.respond(
                category,
                json!({"data": [{"id": 1, "name": format!("{} one", category)}]}),
            );
        }
        transport
    }

    pub fn respond(&self, category: LookupCategory, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(category.endpoint().to_string(), body);
    }

    pub fn fail(&self, category: LookupCategory, status: u16) {
        self.failures
            .lock()
            .unwrap()
            .insert(category.endpoint().to_string(), status);
    }

    pub fn calls(&self, category: LookupCategory) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(category.endpoint())
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl LookupTransport for FakeTransport {
    async fn get_json(&self, path: &str) -> Result<Value> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_insert(0) += 1;

        if let Some(status) = self.failures.lock().unwrap().get(path) {
            return Err(RefDataError::Status {
                status: *status,
                path: path.to_string(),
                body: "fake failure".to_string(),
            });
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| json!({"message": "no canned response"})))
    }
}
