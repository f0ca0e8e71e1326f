use std::fmt;
use std::path::Path;

use smol_str::SmolStr;

/// Identifier of one descriptor source file.
///
/// Opaque to the engine; typically the file's path as reported by the
/// change-notification collaborator. Unlike [`super::Name`], source
/// identifiers compare case-sensitively.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(SmolStr);

impl SourceId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    /// Builds a source identifier from a filesystem path.
    pub fn from_path(path: &Path) -> Self {
        Self(SmolStr::from(path.to_string_lossy()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceId({:?})", self.0)
    }
}

// `thiserror` treats any enum field named `source` as an error source and
// requires the type to implement `std::error::Error`; `DeclarationError`
// carries `SourceId` fields under that name.
impl std::error::Error for SourceId {}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
