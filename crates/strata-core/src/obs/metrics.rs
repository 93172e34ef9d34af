//! Process-local counter state behind the sink boundary.

use serde::Serialize;
use std::cell::RefCell;

///
/// EngineCounters
/// Point-in-time snapshot of projection activity on this worker.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EngineCounters {
    pub requests: u64,
    pub partitions_projected: u64,
    pub shared_groups: u64,
    pub composing_groups: u64,
    pub rejected_paths: u64,
}

thread_local! {
    static STATE: RefCell<EngineCounters> = RefCell::new(EngineCounters::default());
}

pub(crate) fn with_state_mut<T>(f: impl FnOnce(&mut EngineCounters) -> T) -> T {
    STATE.with(|cell| f(&mut cell.borrow_mut()))
}

pub(crate) fn snapshot() -> EngineCounters {
    STATE.with(|cell| *cell.borrow())
}

pub(crate) fn reset_all() {
    STATE.with(|cell| *cell.borrow_mut() = EngineCounters::default());
}
