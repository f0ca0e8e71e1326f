//! # Change Feed Adapter
//!
//! Bridges external file-change notifications to the model state service.
//! Events are filtered by descriptor suffix and mapped to source
//! identifiers; the adapter never reads file content or derives
//! declarations — that happens in the builder on the next recompute.

mod adapter;

pub use adapter::{ChangeFeedAdapter, FileEvent};
