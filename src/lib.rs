//! # typesys-base
//!
//! Core library aggregating platform type-system and bean descriptors into
//! one consistent, queryable global meta-model.
//!
//! Each module of a project contributes local declarations (item types,
//! enumerations, beans, relations, collections, maps, atomics) from its own
//! descriptor files; a custom module may re-declare or extend a type
//! declared elsewhere. All declarations sharing a logical name are folded
//! into a single merged classifier, tracking whether any contributor was
//! custom. Recomputation is incremental, driven by file-change events, and
//! never blocks readers.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! feed      → Change feed adapter (file events → dirty set)
//!   ↓
//! state     → Model state service (state machine, snapshot publication)
//!   ↓
//! builder   → Global model builder (full + incremental passes)
//!   ↓
//! model     → Global model snapshot (classifier maps, queries)
//!   ↓
//! merge     → Per-kind classifier merge/unmerge
//!   ↓
//! decl      → Local declaration records + validation
//!   ↓
//! base      → Primitives (Name, SourceId, descriptor suffixes)
//! ```

// ============================================================================
// MODULES (dependency order: base → decl → merge → model → builder → state → feed)
// ============================================================================

/// Foundation types: case-insensitive names, source identifiers, constants
pub mod base;

/// Local declaration records: pure data contributed by descriptor files
pub mod decl;

/// Self-merge classifiers: per-kind fold of same-named declarations
pub mod merge;

/// Global model: the merged, queryable snapshot
pub mod model;

/// Global model builder: full and incremental build passes
pub mod builder;

/// Model state service: dirty set, state machine, atomic publication
pub mod state;

/// Change feed adapter: file events to dirty-set entries
pub mod feed;

// Re-export foundation types
pub use base::{Name, SourceId};

// Re-export the primary collaborator surface
pub use builder::DeclarationProvider;
pub use decl::{ClassifierKind, LocalDeclaration};
pub use model::{GlobalClassifierRef, GlobalModel};
pub use state::{ModelRead, ModelStateService};
