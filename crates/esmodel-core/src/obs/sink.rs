//! Metrics sink boundary.
//!
//! Naming logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::{
    naming::{NameKind, NameOrigin},
    obs::metrics,
};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// OriginKind
/// Payload-free projection of `NameOrigin` for counters.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OriginKind {
    Default,
    Explicit,
    Inherited,
    Instance,
}

impl From<&NameOrigin> for OriginKind {
    fn from(origin: &NameOrigin) -> Self {
        match origin {
            NameOrigin::Default => Self::Default,
            NameOrigin::Explicit => Self::Explicit,
            NameOrigin::Inherited { .. } => Self::Inherited,
            NameOrigin::Instance => Self::Instance,
        }
    }
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    NameResolved {
        kind: NameKind,
        origin: OriginKind,
        model_path: &'static str,
    },
    NameAssigned {
        kind: NameKind,
        model_path: &'static str,
    },
    NameCleared {
        kind: NameKind,
        model_path: &'static str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into the metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::NameResolved {
                kind,
                origin,
                model_path,
            } => {
                metrics::with_state_mut(|m| {
                    match kind {
                        NameKind::IndexName => {
                            m.ops.index_name_lookups = m.ops.index_name_lookups.saturating_add(1);
                        }
                        NameKind::DocumentType => {
                            m.ops.document_type_lookups =
                                m.ops.document_type_lookups.saturating_add(1);
                        }
                    }

                    let entry = m.models.entry(model_path.to_string()).or_default();
                    entry.lookups = entry.lookups.saturating_add(1);

                    match origin {
                        OriginKind::Default => {
                            m.ops.default_hits = m.ops.default_hits.saturating_add(1);
                            entry.default_hits = entry.default_hits.saturating_add(1);
                        }
                        OriginKind::Explicit => {
                            m.ops.explicit_hits = m.ops.explicit_hits.saturating_add(1);
                            entry.explicit_hits = entry.explicit_hits.saturating_add(1);
                        }
                        OriginKind::Inherited => {
                            m.ops.inherited_hits = m.ops.inherited_hits.saturating_add(1);
                            entry.inherited_hits = entry.inherited_hits.saturating_add(1);
                        }
                        OriginKind::Instance => {
                            m.ops.instance_hits = m.ops.instance_hits.saturating_add(1);
                            entry.instance_hits = entry.instance_hits.saturating_add(1);
                        }
                    }
                });
            }

            MetricsEvent::NameAssigned { model_path, .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.assignments = m.ops.assignments.saturating_add(1);
                    let entry = m.models.entry(model_path.to_string()).or_default();
                    entry.assignments = entry.assignments.saturating_add(1);
                });
            }

            MetricsEvent::NameCleared { model_path, .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.clears = m.ops.clears.saturating_add(1);
                    let entry = m.models.entry(model_path.to_string()).or_default();
                    entry.clears = entry.clears.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn MetricsSink` in `with_metrics_sink`,
        //   which restores the previous pointer on every exit, including unwind.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        // - Only a shared reference is materialized, matching the original borrow.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current thread's metrics state.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope and `Guard`
    //   restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}
