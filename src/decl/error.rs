//! Validation errors for local declarations.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::SourceId;

/// A malformed local declaration.
///
/// Malformed declarations are rejected before they reach the merge step and
/// contribute nothing to the global model; the build continues with the
/// rest of the batch (skip-and-log, never batch-fatal).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    /// The declaration carries no logical name.
    #[error("declaration without a name in module '{module}' ({source})")]
    BlankName { module: SmolStr, source: SourceId },

    /// The declaration carries no owning module name.
    #[error("declaration '{name}' without a module name ({source})")]
    BlankModule { name: SmolStr, source: SourceId },

    /// A qualifier-keyed sub-element (attribute, property, enum value) has
    /// a blank qualifier.
    #[error("declaration '{name}' has a {element} with a blank qualifier ({source})")]
    BlankQualifier {
        name: SmolStr,
        element: &'static str,
        source: SourceId,
    },
}
