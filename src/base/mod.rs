//! Foundation types for the typesys meta-model engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Name`] - Case-insensitive logical names
//! - [`SourceId`] - Identifiers for descriptor source files
//! - Domain constants (descriptor file suffixes)
//!
//! This module has NO dependencies on other typesys modules.

pub mod constants;
mod name;
mod source_id;

pub use name::Name;
pub use source_id::SourceId;
