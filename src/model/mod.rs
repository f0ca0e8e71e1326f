//! # Global Model
//!
//! An immutable snapshot of the merged meta-model: one classifier map per
//! kind, a reverse index from source files to the classifiers they touch,
//! and a monotonically increasing modification counter. Readers always see
//! either the previous or the next fully consistent snapshot, never an
//! in-progress merge.

mod global;

pub use global::{GlobalClassifierRef, GlobalModel};
