//! reqwest client for the upstream API.

use std::time::Duration;

use async_trait::async_trait;
use budgetcoach_shared::config::UpstreamConfig;
use budgetcoach_shared::types::UserId;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::source::{AnalyticsSource, reject_body_error};
use crate::types::Endpoint;

/// HTTP implementation of [`AnalyticsSource`].
#[derive(Debug, Clone)]
pub struct HttpAnalyticsClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAnalyticsClient {
    /// Creates a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, FetchError> {
        Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Creates a client for `base_url` with an explicit per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("budgetcoach/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL reads are joined onto.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint, user: &UserId) -> String {
        format!("{}/{}/{}", self.base_url, endpoint.path(), user)
    }
}

#[async_trait]
impl AnalyticsSource for HttpAnalyticsClient {
    async fn fetch(&self, endpoint: Endpoint, user: &UserId) -> Result<Value, FetchError> {
        let url = self.url(endpoint, user);
        debug!(%url, "Upstream request");

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(%url, error = %e, "Upstream request failed");
            FetchError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            warn!(%url, status = status.as_u16(), "Upstream returned error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        reject_body_error(body).inspect_err(|e| warn!(%url, error = %e, "Upstream body error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use rust_decimal_macros::dec;
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn coach(Path(user_id): Path<String>) -> (StatusCode, Json<Value>) {
        match user_id.as_str() {
            "soyeon123" => (
                StatusCode::OK,
                Json(json!({
                    "budgets": { "카페": 50000 },
                    "saving_goal": 400000,
                    "tips": []
                })),
            ),
            "ghost" => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "사용자 데이터 없음" })),
            ),
            _ => (StatusCode::OK, Json(json!({ "error": "사용자 데이터 없음" }))),
        }
    }

    async fn slow_summary() -> Json<Value> {
        tokio::time::sleep(Duration::from_secs(2)).await;
        Json(json!({ "total_income": 1 }))
    }

    async fn broken_actuals() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "boom")
    }

    async fn spawn_upstream() -> String {
        let app = Router::new()
            .route("/coach/{user_id}", get(coach))
            .route("/summary/{user_id}", get(slow_summary))
            .route("/actuals/{user_id}", get(broken_actuals));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        format!("http://{addr}/")
    }

    fn user(raw: &str) -> UserId {
        UserId::parse(raw).unwrap()
    }

    #[test]
    fn test_url_join() {
        let client =
            HttpAnalyticsClient::with_timeout("http://localhost:3000/", Duration::from_secs(1))
                .unwrap();

        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.url(Endpoint::Summary, &user("soyeon123")),
            "http://localhost:3000/summary/soyeon123"
        );
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let base = spawn_upstream().await;
        let client = HttpAnalyticsClient::with_timeout(&base, Duration::from_secs(5)).unwrap();

        let plan = client.coaching_plan(&user("soyeon123")).await.unwrap();

        assert_eq!(plan.budgets.get("카페"), Some(&dec!(50000)));
        assert_eq!(plan.saving_goal, dec!(400000));
    }

    #[tokio::test]
    async fn test_status_is_relayed_with_json_body() {
        let base = spawn_upstream().await;
        let client = HttpAnalyticsClient::with_timeout(&base, Duration::from_secs(5)).unwrap();

        let err = client
            .fetch(Endpoint::Coach, &user("ghost"))
            .await
            .unwrap_err();

        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, json!({ "detail": "사용자 데이터 없음" }));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_kept_as_text() {
        let base = spawn_upstream().await;
        let client = HttpAnalyticsClient::with_timeout(&base, Duration::from_secs(5)).unwrap();

        let err = client
            .fetch(Endpoint::Actuals, &user("soyeon123"))
            .await
            .unwrap_err();

        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, json!("boom"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_body_error_field_is_failure() {
        let base = spawn_upstream().await;
        let client = HttpAnalyticsClient::with_timeout(&base, Duration::from_secs(5)).unwrap();

        let err = client
            .fetch(Endpoint::Coach, &user("nobody"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Upstream(ref m) if m == "사용자 데이터 없음"));
    }

    #[tokio::test]
    async fn test_timeout() {
        let base = spawn_upstream().await;
        let client =
            HttpAnalyticsClient::with_timeout(&base, Duration::from_millis(200)).unwrap();

        let err = client
            .fetch(Endpoint::Summary, &user("soyeon123"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            HttpAnalyticsClient::with_timeout(&format!("http://{addr}"), Duration::from_secs(5))
                .unwrap();

        let err = client
            .fetch(Endpoint::Coach, &user("soyeon123"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Connect(_)), "got {err:?}");
    }
}
