use rustc_hash::FxHashMap;

use crate::base::SourceId;
use crate::decl::LocalDeclaration;

/// The parser collaborator seam.
///
/// Given a source file, an implementation returns the local declarations
/// its current content yields, already carrying module name and custom
/// flag. Derivation must be deterministic for the same content. The engine
/// never reads file content itself.
pub trait DeclarationProvider {
    /// Every descriptor source currently known to the project.
    fn all_sources(&self) -> Vec<SourceId>;

    /// The declarations the source currently yields; empty for a source
    /// that disappeared or is no longer eligible.
    fn declarations(&self, source: &SourceId) -> Vec<LocalDeclaration>;
}

/// An in-memory provider backed by a map of sources to declarations.
///
/// Serves embedders that already hold parsed declarations, and the crate's
/// own tests.
#[derive(Debug, Default)]
pub struct StaticProvider {
    sources: FxHashMap<SourceId, Vec<LocalDeclaration>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the declarations of one source, replacing any previous content.
    /// Source and position fields are stamped onto the declarations.
    pub fn set_source(&mut self, source: SourceId, mut decls: Vec<LocalDeclaration>) {
        for (position, decl) in decls.iter_mut().enumerate() {
            decl.source = source.clone();
            decl.position = position as u32;
        }
        self.sources.insert(source, decls);
    }

    /// Removes a source, as when its file is deleted.
    pub fn remove_source(&mut self, source: &SourceId) {
        self.sources.remove(source);
    }
}

impl DeclarationProvider for StaticProvider {
    fn all_sources(&self) -> Vec<SourceId> {
        let mut sources: Vec<SourceId> = self.sources.keys().cloned().collect();
        sources.sort();
        sources
    }

    fn declarations(&self, source: &SourceId) -> Vec<LocalDeclaration> {
        self.sources.get(source).cloned().unwrap_or_default()
    }
}
