//! In-memory analytics source and response helpers for route tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use budgetcoach_core::category::CategoryAliasTable;
use budgetcoach_shared::types::UserId;
use budgetcoach_upstream::source::reject_body_error;
use budgetcoach_upstream::{AnalyticsSource, Endpoint, FetchError};
use http_body_util::BodyExt;
use serde_json::{Value, json};

use crate::AppState;

/// Source answering every user from canned bodies, or failing every read.
pub struct StubSource {
    pub bodies: HashMap<&'static str, Value>,
    pub failure: Option<fn() -> FetchError>,
}

#[async_trait]
impl AnalyticsSource for StubSource {
    async fn fetch(&self, endpoint: Endpoint, _user: &UserId) -> Result<Value, FetchError> {
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        match self.bodies.get(endpoint.path()) {
            Some(body) => reject_body_error(body.clone()),
            None => Err(FetchError::Status {
                status: 404,
                body: json!({ "detail": "Not Found" }),
            }),
        }
    }
}

/// Bodies of a user whose coffee and lunch fold into 식비.
pub fn live_bodies() -> HashMap<&'static str, Value> {
    HashMap::from([
        (
            "coach",
            json!({
                "budgets": { "카페": 50000, "점심식사": 200000 },
                "saving_goal": 400000,
                "tips": ["소비 기록 습관 들이기"]
            }),
        ),
        (
            "actuals",
            json!({ "user_id": "soyeon123", "actuals": { "카페": 45600, "점심식사": 168200 } }),
        ),
        (
            "summary",
            json!({ "user_id": "soyeon123", "total_income": 2500000, "total_expense": 1980000 }),
        ),
    ])
}

pub fn state_with(source: StubSource, sample_fallback: bool) -> AppState {
    AppState {
        source: Arc::new(source),
        aliases: Arc::new(CategoryAliasTable::builtin()),
        sample_fallback,
    }
}

pub fn stub_state(sample_fallback: bool) -> AppState {
    state_with(
        StubSource {
            bodies: live_bodies(),
            failure: None,
        },
        sample_fallback,
    )
}

pub fn failing_state(failure: fn() -> FetchError, sample_fallback: bool) -> AppState {
    state_with(
        StubSource {
            bodies: HashMap::new(),
            failure: Some(failure),
        },
        sample_fallback,
    )
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
