use crate::base::{Name, SourceId};
use crate::decl::{ClassifierKind, LocalDeclaration};

/// Fold behavior of one classifier kind's merged payload.
///
/// [`fold`] is invoked once per contribution, in canonical order. It must
/// only read the payload variant matching [`Self::KIND`]; a mismatched
/// variant is a routing defect upstream.
///
/// [`fold`]: MergePayload::fold
pub trait MergePayload: Default + Clone {
    const KIND: ClassifierKind;

    /// Folds one contribution into the merged payload.
    fn fold(&mut self, decl: &LocalDeclaration);
}

/// The merged view of all local declarations sharing one logical name.
///
/// Common fields live here; the kind-specific merged payload is rebuilt
/// from the contribution list whenever it changes, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier<P> {
    name: Name,
    is_custom: bool,
    declarations: Vec<LocalDeclaration>,
    payload: P,
}

impl<P: MergePayload> Classifier<P> {
    /// Folds `incoming` into `existing`, seeding a new classifier when no
    /// prior declarations exist for the name.
    pub fn merge(existing: Option<Self>, incoming: LocalDeclaration) -> Self {
        debug_assert_eq!(incoming.kind(), P::KIND, "declaration routed to wrong kind");
        match existing {
            None => {
                let mut classifier = Self {
                    name: incoming.logical_name(),
                    is_custom: incoming.is_custom,
                    declarations: vec![incoming],
                    payload: P::default(),
                };
                classifier.rebuild();
                classifier
            }
            Some(mut classifier) => {
                debug_assert_eq!(
                    classifier.name,
                    incoming.logical_name(),
                    "declaration merged under wrong name"
                );
                let at = classifier.declarations.partition_point(|d| {
                    (&d.module, &d.source, d.position)
                        <= (&incoming.module, &incoming.source, incoming.position)
                });
                classifier.declarations.insert(at, incoming);
                classifier.rebuild();
                classifier
            }
        }
    }

    /// Removes every contribution from `source` and rebuilds the remainder.
    ///
    /// Returns `None` when the last contribution is removed; the caller
    /// must then drop the classifier from its map.
    pub fn unmerge(mut self, source: &SourceId) -> Option<Self> {
        self.declarations.retain(|d| &d.source != source);
        if self.declarations.is_empty() {
            return None;
        }
        self.rebuild();
        Some(self)
    }

    /// Recomputes `is_custom` and the payload from the contribution list.
    fn rebuild(&mut self) {
        self.is_custom = self.declarations.iter().any(|d| d.is_custom);
        let mut payload = P::default();
        for decl in &self.declarations {
            payload.fold(decl);
        }
        self.payload = payload;
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// True if any contributing declaration comes from a custom module.
    pub fn is_custom(&self) -> bool {
        self.is_custom
    }

    /// All contributing declarations, in canonical order.
    pub fn declarations(&self) -> &[LocalDeclaration] {
        &self.declarations
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// True if any contribution comes from the given source file.
    pub fn declared_in(&self, source: &SourceId) -> bool {
        self.declarations.iter().any(|d| &d.source == source)
    }
}
