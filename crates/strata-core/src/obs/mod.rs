//! Observability: projection counters and the sink boundary.
//!
//! Engine code never touches counter state directly; all instrumentation
//! flows through `MetricsEvent` and `MetricsSink`.

pub(crate) mod metrics;
pub mod sink;

// re-exports
pub use metrics::EngineCounters;
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
