use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{
    LocationStatus, MetricGroup, MetricsWindow, MonitoringApi, MonitoringError, MonitoringNode,
    ServiceRecord,
};

/// Immutable connection settings for the monitoring API client.
#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    pub api_base: String,
    pub token: String,
    pub request_timeout_ms: u64,
}

/// HTTP implementation of [`MonitoringApi`].
///
/// Holds the bearer token for the lifetime of the client; the token travels
/// as a `token` query parameter on every call per the external API contract.
#[derive(Clone)]
pub struct MonitoringApiClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl MonitoringApiClient {
    pub fn new(config: MonitoringConfig) -> Result<Self, MonitoringError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("sdbot-monitoring"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_millis(
                config.request_timeout_ms.max(1),
            ))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.token.trim().to_string(),
        })
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, MonitoringError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.api_base, path);
        tracing::debug!(target: "sdbot::monitoring", %url, "monitoring api request");
        let response = self
            .http
            .get(&url)
            .query(&[("token", self.token.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MonitoringError::HttpStatus {
                status: status.as_u16(),
                body: truncate_for_error(&body, 800),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MonitoringApi for MonitoringApiClient {
    async fn list_services(&self) -> Result<Vec<ServiceRecord>, MonitoringError> {
        self.get_json("inventory/services", &[]).await
    }

    async fn view_service(&self, id: &str) -> Result<ServiceRecord, MonitoringError> {
        self.get_json(&format!("inventory/services/{id}"), &[])
            .await
    }

    async fn location_statuses(&self, id: &str) -> Result<Vec<LocationStatus>, MonitoringError> {
        self.get_json(&format!("service-monitor/serviceStatus/{id}/location"), &[])
            .await
    }

    async fn metrics(
        &self,
        id: &str,
        window: MetricsWindow,
        filter: &Value,
    ) -> Result<Vec<MetricGroup>, MonitoringError> {
        let filter = serde_json::to_string(filter)?;
        self.get_json(
            &format!("metrics/graphs/{id}"),
            &[
                ("start", window.start.to_string()),
                ("end", window.end.to_string()),
                ("filter", filter),
            ],
        )
        .await
    }

    async fn nodes(&self) -> Result<Vec<MonitoringNode>, MonitoringError> {
        self.get_json("service-monitor/nodes", &[]).await
    }
}

fn truncate_for_error(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        return body.to_string();
    }
    let mut truncated = body.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}
