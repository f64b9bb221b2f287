//! Server Density monitoring API facade.
//!
//! Exposes the read operations the services plugin needs (service inventory,
//! per-location status, metric queries, monitoring nodes) behind the
//! [`MonitoringApi`] trait, plus the concrete HTTP client implementation.

mod client;
mod types;

pub use client::{MonitoringApiClient, MonitoringConfig};
pub use types::{
    CheckType, LocationStatus, MetricGroup, MetricPoint, MetricSeries, MetricsWindow,
    MonitoringApi, MonitoringError, MonitoringNode, ServiceRecord,
};
