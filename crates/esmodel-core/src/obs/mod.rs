//! Observability: thread-local naming telemetry and sink abstractions.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport, ModelCounters};
pub use sink::{MetricsEvent, MetricsSink, OriginKind, metrics_report, metrics_reset_all};
