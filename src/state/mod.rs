//! # Model State Service
//!
//! Owns the current global model snapshot, the dirty set of sources
//! pending recomputation, and the `Uncomputed → Computing → Computed`
//! state machine.
//!
//! Readers call [`ModelStateService::get`] and never block on a rebuild:
//! while a recompute is wanted or in flight they receive
//! [`ModelRead::Pending`] and retry after the change notification fires.
//! Change-feed threads call [`ModelStateService::enqueue`] concurrently;
//! the dirty set has union semantics, entries are never lost. One
//! recompute runs at a time per service instance; the published snapshot
//! is swapped atomically so a reader sees either the previous or the next
//! fully consistent model.

mod events;
mod service;

pub use events::{ChangeListener, ModelChange};
pub use service::{ComputeState, ModelRead, ModelStateService, RecomputeOutcome};
