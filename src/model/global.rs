use rustc_hash::FxHashMap;

use crate::base::{Name, SourceId};
use crate::decl::{ClassifierKind, DeclPayload, LocalDeclaration};
use crate::merge::{
    AtomicClassifier, BeanClassifier, Classifier, CollectionClassifier, EnumClassifier,
    ItemClassifier, MapClassifier, MergePayload, RelationClassifier, post_merge_beans,
};

/// The merged, queryable meta-model snapshot.
#[derive(Debug, Clone, Default)]
pub struct GlobalModel {
    version: u64,
    items: FxHashMap<Name, ItemClassifier>,
    enums: FxHashMap<Name, EnumClassifier>,
    atomics: FxHashMap<Name, AtomicClassifier>,
    collections: FxHashMap<Name, CollectionClassifier>,
    relations: FxHashMap<Name, RelationClassifier>,
    maps: FxHashMap<Name, MapClassifier>,
    beans: FxHashMap<Name, BeanClassifier>,
    /// Classifiers each source file contributes to; drives incremental
    /// removal. Kept in lockstep with the kind maps.
    by_source: FxHashMap<SourceId, Vec<(ClassifierKind, Name)>>,
}

/// A borrowed view of one global classifier, any kind.
#[derive(Debug, Clone, Copy)]
pub enum GlobalClassifierRef<'a> {
    Item(&'a ItemClassifier),
    Enum(&'a EnumClassifier),
    Atomic(&'a AtomicClassifier),
    Collection(&'a CollectionClassifier),
    Relation(&'a RelationClassifier),
    Map(&'a MapClassifier),
    Bean(&'a BeanClassifier),
}

impl<'a> GlobalClassifierRef<'a> {
    pub fn kind(&self) -> ClassifierKind {
        match self {
            Self::Item(_) => ClassifierKind::Item,
            Self::Enum(_) => ClassifierKind::Enum,
            Self::Atomic(_) => ClassifierKind::Atomic,
            Self::Collection(_) => ClassifierKind::Collection,
            Self::Relation(_) => ClassifierKind::Relation,
            Self::Map(_) => ClassifierKind::Map,
            Self::Bean(_) => ClassifierKind::Bean,
        }
    }

    pub fn name(&self) -> &'a Name {
        match self {
            Self::Item(c) => c.name(),
            Self::Enum(c) => c.name(),
            Self::Atomic(c) => c.name(),
            Self::Collection(c) => c.name(),
            Self::Relation(c) => c.name(),
            Self::Map(c) => c.name(),
            Self::Bean(c) => c.name(),
        }
    }

    pub fn is_custom(&self) -> bool {
        match self {
            Self::Item(c) => c.is_custom(),
            Self::Enum(c) => c.is_custom(),
            Self::Atomic(c) => c.is_custom(),
            Self::Collection(c) => c.is_custom(),
            Self::Relation(c) => c.is_custom(),
            Self::Map(c) => c.is_custom(),
            Self::Bean(c) => c.is_custom(),
        }
    }

    /// Contributing declarations, for "go to declaration"-style consumers.
    pub fn declarations(&self) -> &'a [LocalDeclaration] {
        match self {
            Self::Item(c) => c.declarations(),
            Self::Enum(c) => c.declarations(),
            Self::Atomic(c) => c.declarations(),
            Self::Collection(c) => c.declarations(),
            Self::Relation(c) => c.declarations(),
            Self::Map(c) => c.declarations(),
            Self::Bean(c) => c.declarations(),
        }
    }
}

impl GlobalModel {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The modification counter stamped at publication.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    // ============================================================
    // Queries
    // ============================================================

    /// Case-insensitive lookup of one classifier by kind and name.
    pub fn find(&self, kind: ClassifierKind, name: &str) -> Option<GlobalClassifierRef<'_>> {
        let name = Name::new(name);
        match kind {
            ClassifierKind::Item => self.items.get(&name).map(GlobalClassifierRef::Item),
            ClassifierKind::Enum => self.enums.get(&name).map(GlobalClassifierRef::Enum),
            ClassifierKind::Atomic => self.atomics.get(&name).map(GlobalClassifierRef::Atomic),
            ClassifierKind::Collection => self
                .collections
                .get(&name)
                .map(GlobalClassifierRef::Collection),
            ClassifierKind::Relation => {
                self.relations.get(&name).map(GlobalClassifierRef::Relation)
            }
            ClassifierKind::Map => self.maps.get(&name).map(GlobalClassifierRef::Map),
            ClassifierKind::Bean => self.beans.get(&name).map(GlobalClassifierRef::Bean),
        }
    }

    /// Searches every kind map in the fixed [`ClassifierKind::ALL`] order.
    pub fn find_any(&self, name: &str) -> Option<GlobalClassifierRef<'_>> {
        ClassifierKind::ALL
            .iter()
            .find_map(|kind| self.find(*kind, name))
    }

    /// All classifiers of one kind, in unspecified order.
    pub fn all(&self, kind: ClassifierKind) -> Vec<GlobalClassifierRef<'_>> {
        match kind {
            ClassifierKind::Item => self.items.values().map(GlobalClassifierRef::Item).collect(),
            ClassifierKind::Enum => self.enums.values().map(GlobalClassifierRef::Enum).collect(),
            ClassifierKind::Atomic => self
                .atomics
                .values()
                .map(GlobalClassifierRef::Atomic)
                .collect(),
            ClassifierKind::Collection => self
                .collections
                .values()
                .map(GlobalClassifierRef::Collection)
                .collect(),
            ClassifierKind::Relation => self
                .relations
                .values()
                .map(GlobalClassifierRef::Relation)
                .collect(),
            ClassifierKind::Map => self.maps.values().map(GlobalClassifierRef::Map).collect(),
            ClassifierKind::Bean => self.beans.values().map(GlobalClassifierRef::Bean).collect(),
        }
    }

    pub fn find_item(&self, name: &str) -> Option<&ItemClassifier> {
        self.items.get(&Name::new(name))
    }

    pub fn find_enum(&self, name: &str) -> Option<&EnumClassifier> {
        self.enums.get(&Name::new(name))
    }

    pub fn find_bean(&self, name: &str) -> Option<&BeanClassifier> {
        self.beans.get(&Name::new(name))
    }

    pub fn find_relation(&self, name: &str) -> Option<&RelationClassifier> {
        self.relations.get(&Name::new(name))
    }

    pub fn items(&self) -> &FxHashMap<Name, ItemClassifier> {
        &self.items
    }

    pub fn enums(&self) -> &FxHashMap<Name, EnumClassifier> {
        &self.enums
    }

    pub fn beans(&self) -> &FxHashMap<Name, BeanClassifier> {
        &self.beans
    }

    /// Total classifier count across all kinds.
    pub fn classifier_count(&self) -> usize {
        self.items.len()
            + self.enums.len()
            + self.atomics.len()
            + self.collections.len()
            + self.relations.len()
            + self.maps.len()
            + self.beans.len()
    }

    /// Source files currently contributing to the model.
    pub fn sources(&self) -> impl Iterator<Item = &SourceId> {
        self.by_source.keys()
    }

    // ============================================================
    // Mutation (build passes only)
    // ============================================================

    /// Folds one declaration into the matching kind map and records it in
    /// the source index. Returns the classifier the declaration touched.
    pub(crate) fn apply(&mut self, decl: LocalDeclaration) -> (ClassifierKind, Name) {
        let kind = decl.kind();
        let source = decl.source.clone();
        let name = match &decl.payload {
            DeclPayload::Item(_) => fold_into(&mut self.items, decl),
            DeclPayload::Enum(_) => fold_into(&mut self.enums, decl),
            DeclPayload::Atomic(_) => fold_into(&mut self.atomics, decl),
            DeclPayload::Collection(_) => fold_into(&mut self.collections, decl),
            DeclPayload::Relation(_) => fold_into(&mut self.relations, decl),
            DeclPayload::Map(_) => fold_into(&mut self.maps, decl),
            DeclPayload::Bean(_) => fold_into(&mut self.beans, decl),
        };

        let touched = self.by_source.entry(source).or_default();
        if !touched.contains(&(kind, name.clone())) {
            touched.push((kind, name.clone()));
        }
        (kind, name)
    }

    /// Removes every declaration attributed to `source`, deleting
    /// classifiers left without contributors. Returns the touched
    /// classifiers.
    pub(crate) fn remove_source(&mut self, source: &SourceId) -> Vec<(ClassifierKind, Name)> {
        let Some(touched) = self.by_source.remove(source) else {
            return Vec::new();
        };
        for (kind, name) in &touched {
            match kind {
                ClassifierKind::Item => unmerge_in(&mut self.items, name, source),
                ClassifierKind::Enum => unmerge_in(&mut self.enums, name, source),
                ClassifierKind::Atomic => unmerge_in(&mut self.atomics, name, source),
                ClassifierKind::Collection => unmerge_in(&mut self.collections, name, source),
                ClassifierKind::Relation => unmerge_in(&mut self.relations, name, source),
                ClassifierKind::Map => unmerge_in(&mut self.maps, name, source),
                ClassifierKind::Bean => unmerge_in(&mut self.beans, name, source),
            }
        }
        touched
    }

    /// Runs the kind-specific second passes after a build has folded every
    /// declaration. Currently only beans declare one.
    pub(crate) fn run_post_merge(&mut self) {
        post_merge_beans(&mut self.beans);
    }

    /// True if the named classifier differs between the two snapshots
    /// (including present-in-one-only). Drives the narrow change set
    /// reported after an incremental build.
    pub(crate) fn classifier_differs(
        &self,
        other: &Self,
        kind: ClassifierKind,
        name: &Name,
    ) -> bool {
        match kind {
            ClassifierKind::Item => self.items.get(name) != other.items.get(name),
            ClassifierKind::Enum => self.enums.get(name) != other.enums.get(name),
            ClassifierKind::Atomic => self.atomics.get(name) != other.atomics.get(name),
            ClassifierKind::Collection => self.collections.get(name) != other.collections.get(name),
            ClassifierKind::Relation => self.relations.get(name) != other.relations.get(name),
            ClassifierKind::Map => self.maps.get(name) != other.maps.get(name),
            ClassifierKind::Bean => self.beans.get(name) != other.beans.get(name),
        }
    }

    /// Names of beans whose merged state differs from `previous`, in either
    /// direction. The bean post-merge pass resolves cross-classifier
    /// references, so its effects are not confined to touched sources.
    pub(crate) fn bean_names_differing_from(
        &self,
        previous: &Self,
    ) -> Vec<(ClassifierKind, Name)> {
        let mut names: Vec<(ClassifierKind, Name)> = Vec::new();
        for name in self.beans.keys().chain(previous.beans.keys()) {
            if self.beans.get(name) != previous.beans.get(name)
                && !names.iter().any(|(_, n)| n == name)
            {
                names.push((ClassifierKind::Bean, name.clone()));
            }
        }
        names
    }

    /// Structural equality over classifier content, ignoring the version
    /// counter. Used by idempotence checks.
    pub fn same_classifiers(&self, other: &Self) -> bool {
        self.items == other.items
            && self.enums == other.enums
            && self.atomics == other.atomics
            && self.collections == other.collections
            && self.relations == other.relations
            && self.maps == other.maps
            && self.beans == other.beans
    }
}

fn fold_into<P: MergePayload>(
    map: &mut FxHashMap<Name, Classifier<P>>,
    decl: LocalDeclaration,
) -> Name {
    let name = decl.logical_name();
    let existing = map.remove(&name);
    map.insert(name.clone(), Classifier::merge(existing, decl));
    name
}

fn unmerge_in<P: MergePayload>(
    map: &mut FxHashMap<Name, Classifier<P>>,
    name: &Name,
    source: &SourceId,
) {
    if let Some(classifier) = map.remove(name) {
        if let Some(kept) = classifier.unmerge(source) {
            debug_assert!(
                !kept.declarations().is_empty(),
                "classifier kept with an empty declaration set"
            );
            map.insert(name.clone(), kept);
        }
    }
}
