use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for naming operations.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
    pub(crate) models: BTreeMap<String, ModelCounters>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventOps {
    // Lookups by name kind
    pub index_name_lookups: u64,
    pub document_type_lookups: u64,

    // Lookups by origin
    pub explicit_hits: u64,
    pub inherited_hits: u64,
    pub default_hits: u64,
    pub instance_hits: u64,

    // Registry writes
    pub assignments: u64,
    pub clears: u64,
}

///
/// ModelCounters
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ModelCounters {
    pub lookups: u64,
    pub explicit_hits: u64,
    pub inherited_hits: u64,
    pub default_hits: u64,
    pub instance_hits: u64,
    pub assignments: u64,
    pub clears: u64,
}

///
/// EventReport
/// Point-in-time snapshot returned to callers.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventReport {
    pub counters: EventOps,
    pub model_counters: Vec<(String, ModelCounters)>,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        counters: m.ops.clone(),
        model_counters: m
            .models
            .iter()
            .map(|(path, counters)| (path.clone(), counters.clone()))
            .collect(),
    })
}
