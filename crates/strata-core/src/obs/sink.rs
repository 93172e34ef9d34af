//! Metrics sink boundary.
//!
//! The engine records `MetricsEvent`s; where they land is a sink concern.
//! The default sink writes into process-local counters. Tests (or an
//! embedding service) can scope-override the sink without touching global
//! state.

use crate::obs::metrics::{self, EngineCounters};
use std::{cell::RefCell, rc::Rc};

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    RequestStart,
    RequestFinish {
        partitions: u64,
        shared_groups: u64,
        composing_groups: u64,
    },
    PathRejected,
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// Default process-local sink writing into global counter state.
struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::RequestStart => {
                metrics::with_state_mut(|m| m.requests = m.requests.saturating_add(1));
            }
            MetricsEvent::RequestFinish {
                partitions,
                shared_groups,
                composing_groups,
            } => {
                metrics::with_state_mut(|m| {
                    m.partitions_projected = m.partitions_projected.saturating_add(partitions);
                    m.shared_groups = m.shared_groups.saturating_add(shared_groups);
                    m.composing_groups = m.composing_groups.saturating_add(composing_groups);
                });
            }
            MetricsEvent::PathRejected => {
                metrics::with_state_mut(|m| m.rejected_paths = m.rejected_paths.saturating_add(1));
            }
        }
    }
}

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    match sink {
        Some(sink) => sink.record(event),
        None => GlobalMetricsSink.record(event),
    }
}

/// Run a closure with a temporary metrics sink override. The previous sink
/// is restored on all exits, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0.take();
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

/// Snapshot the current counters.
#[must_use]
pub fn metrics_report() -> EngineCounters {
    metrics::snapshot()
}

/// Reset all counter state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[derive(Default)]
    struct CountingSink {
        events: RefCell<Vec<MetricsEvent>>,
    }

    impl MetricsSink for CountingSink {
        fn record(&self, event: MetricsEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn default_sink_accumulates_counters() {
        metrics_reset_all();

        record(MetricsEvent::RequestStart);
        record(MetricsEvent::RequestFinish {
            partitions: 4,
            shared_groups: 1,
            composing_groups: 1,
        });
        record(MetricsEvent::PathRejected);

        let counters = metrics_report();
        assert_eq!(counters.requests, 1);
        assert_eq!(counters.partitions_projected, 4);
        assert_eq!(counters.shared_groups, 1);
        assert_eq!(counters.composing_groups, 1);
        assert_eq!(counters.rejected_paths, 1);
    }

    #[test]
    fn override_routes_events_and_restores() {
        metrics_reset_all();
        let sink = Rc::new(CountingSink::default());

        with_metrics_sink(sink.clone(), || {
            record(MetricsEvent::RequestStart);
            record(MetricsEvent::PathRejected);
        });

        assert_eq!(sink.events.borrow().len(), 2);
        // Global state untouched while the override was installed.
        assert_eq!(metrics_report(), EngineCounters::default());

        record(MetricsEvent::RequestStart);
        assert_eq!(metrics_report().requests, 1);
    }

    #[test]
    fn nested_overrides_restore_outward() {
        let outer = Rc::new(CountingSink::default());
        let inner = Rc::new(CountingSink::default());

        with_metrics_sink(outer.clone(), || {
            record(MetricsEvent::RequestStart);
            with_metrics_sink(inner.clone(), || {
                record(MetricsEvent::RequestStart);
            });
            record(MetricsEvent::RequestStart);
        });

        assert_eq!(outer.events.borrow().len(), 2);
        assert_eq!(inner.events.borrow().len(), 1);
    }

    #[test]
    fn override_is_restored_on_panic() {
        let sink = Rc::new(CountingSink::default());

        let panicked = catch_unwind(AssertUnwindSafe(|| {
            with_metrics_sink(sink.clone(), || {
                record(MetricsEvent::RequestStart);
                panic!("intentional panic for guard test");
            });
        }))
        .is_err();
        assert!(panicked);
        assert_eq!(sink.events.borrow().len(), 1);

        SINK_OVERRIDE.with(|cell| assert!(cell.borrow().is_none()));
    }
}
