//! # Global Model Builder
//!
//! Consumes the local declarations discovered for a set of source files and
//! builds or rebuilds the global classifier maps. A full pass folds every
//! source known to the provider into an empty model; an incremental pass
//! starts from the previous snapshot, removes everything previously
//! attributed to the changed sources, and folds their current declarations
//! back in. Sources are processed independently and commutatively: the
//! canonical contribution order inside each classifier makes the final
//! state identical for any processing order.

mod pass;
mod provider;

pub use pass::{BuildOutcome, BuildRun, ChangedClassifiers, full_build, incremental_build};
pub use provider::{DeclarationProvider, StaticProvider};
