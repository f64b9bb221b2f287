use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Classification of a service's monitoring method.
pub enum CheckType {
    Http,
    Tcp,
    /// Check kinds this plugin does not format; kept so inventory decoding
    /// never fails on them.
    #[serde(other)]
    Other,
}

impl CheckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Tcp => "tcp",
            Self::Other => "other",
        }
    }
}

/// One monitored endpoint as returned by the inventory API.
///
/// Owned and mutated by the external monitoring system; read-only here.
/// Unknown inventory fields are ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub check_type: CheckType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_threshold: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub check_locations: Vec<String>,
}

/// Latest check outcome for one geographic probe of a service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationStatus {
    pub location: String,
    pub status: String,
    /// Raw status code; the API mixes numbers and strings here.
    pub code: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

/// One sample in a metric series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricPoint {
    pub x: f64,
    pub y: f64,
}

/// Named, time-ordered series inside a metric group's tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricSeries {
    pub name: String,
    #[serde(default)]
    pub data: Vec<MetricPoint>,
}

/// Top-level entry of a metrics query response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricGroup {
    #[serde(default)]
    pub tree: Vec<MetricSeries>,
}

/// Monitoring node identity used to resolve location ids to display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonitoringNode {
    pub id: String,
    pub name: String,
}

/// Half-open query window for metric samples, in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsWindow {
    pub start: i64,
    pub end: i64,
}

impl MetricsWindow {
    /// Window covering the trailing `minutes` up to now.
    pub fn trailing_minutes(minutes: i64) -> Self {
        let end = Utc::now();
        let start = end - Duration::minutes(minutes);
        Self {
            start: start.timestamp(),
            end: end.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
/// Failures surfaced by monitoring API calls.
pub enum MonitoringError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("monitoring api returned non-success status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
/// Read operations the services plugin performs against the monitoring API.
///
/// The plugin consumes this trait rather than the concrete client so tests
/// can exercise command handling without a network.
pub trait MonitoringApi: Send + Sync {
    async fn list_services(&self) -> Result<Vec<ServiceRecord>, MonitoringError>;

    async fn view_service(&self, id: &str) -> Result<ServiceRecord, MonitoringError>;

    async fn location_statuses(&self, id: &str) -> Result<Vec<LocationStatus>, MonitoringError>;

    async fn metrics(
        &self,
        id: &str,
        window: MetricsWindow,
        filter: &Value,
    ) -> Result<Vec<MetricGroup>, MonitoringError>;

    async fn nodes(&self) -> Result<Vec<MonitoringNode>, MonitoringError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_record_decodes_inventory_payload() {
        let record: ServiceRecord = serde_json::from_value(serde_json::json!({
            "_id": "svc-1",
            "name": "website",
            "checkType": "http",
            "checkUrl": "https://example.com",
            "checkMethod": "GET",
            "slowThreshold": 2000,
            "checkLocations": ["lon", "nyc"],
            "accountId": "ignored",
        }))
        .expect("decode service record");
        assert_eq!(record.id, "svc-1");
        assert_eq!(record.check_type, CheckType::Http);
        assert_eq!(record.group, None);
        assert_eq!(record.check_locations, vec!["lon", "nyc"]);
    }

    #[test]
    fn unknown_check_type_decodes_as_other() {
        let record: ServiceRecord = serde_json::from_value(serde_json::json!({
            "_id": "svc-2",
            "name": "pinger",
            "checkType": "ping",
        }))
        .expect("decode service record");
        assert_eq!(record.check_type, CheckType::Other);
    }

    #[test]
    fn location_status_defaults_absent_timings() {
        let status: LocationStatus = serde_json::from_value(serde_json::json!({
            "location": "lon",
            "status": "up",
            "code": 200,
        }))
        .expect("decode location status");
        assert_eq!(status.rtt, None);
        assert_eq!(status.time, None);
        assert_eq!(status.code, serde_json::json!(200));
    }

    #[test]
    fn trailing_window_spans_requested_minutes() {
        let window = MetricsWindow::trailing_minutes(35);
        assert_eq!(window.end - window.start, 35 * 60);
    }
}
