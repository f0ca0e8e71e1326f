//! Merged payloads for the single-valued descriptor kinds: relations,
//! collections, maps, and atomics.
//!
//! Scalar fields follow deterministic last-wins; the qualifier-keyed
//! sub-elements (relation ends) follow the same augment rule as item
//! attributes.

use smol_str::SmolStr;

use crate::decl::{
    Cardinality, ClassifierKind, CollectionKind, DeclPayload, Deployment, LocalDeclaration,
    RelationEndDecl,
};

use super::{MergePayload, augment};

/// Merged fields of a relation classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationPayload {
    pub deployment: Option<Deployment>,
    pub localized: Option<bool>,
    pub source_end: Option<RelationEnd>,
    pub target_end: Option<RelationEnd>,
}

/// A merged relation end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationEnd {
    pub item_type: Option<SmolStr>,
    pub qualifier: Option<SmolStr>,
    pub navigable: Option<bool>,
    pub cardinality: Option<Cardinality>,
    pub ordered: Option<bool>,
}

impl RelationEnd {
    fn augment_from(&mut self, decl: &RelationEndDecl) {
        augment(&mut self.item_type, &decl.item_type);
        augment(&mut self.qualifier, &decl.qualifier);
        augment(&mut self.navigable, &decl.navigable);
        augment(&mut self.cardinality, &decl.cardinality);
        augment(&mut self.ordered, &decl.ordered);
    }
}

fn fold_end(end: &mut Option<RelationEnd>, decl: &Option<RelationEndDecl>) {
    if let Some(decl) = decl {
        end.get_or_insert_with(RelationEnd::default).augment_from(decl);
    }
}

impl MergePayload for RelationPayload {
    const KIND: ClassifierKind = ClassifierKind::Relation;

    fn fold(&mut self, decl: &LocalDeclaration) {
        let DeclPayload::Relation(relation) = &decl.payload else {
            debug_assert!(false, "non-relation declaration folded into relation payload");
            return;
        };
        augment(&mut self.deployment, &relation.deployment);
        augment(&mut self.localized, &relation.localized);
        fold_end(&mut self.source_end, &relation.source_end);
        fold_end(&mut self.target_end, &relation.target_end);
    }
}

/// Merged fields of a collection-type classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionPayload {
    pub element_type: Option<SmolStr>,
    pub collection_kind: Option<CollectionKind>,
}

impl MergePayload for CollectionPayload {
    const KIND: ClassifierKind = ClassifierKind::Collection;

    fn fold(&mut self, decl: &LocalDeclaration) {
        let DeclPayload::Collection(collection) = &decl.payload else {
            debug_assert!(false, "non-collection declaration folded into collection payload");
            return;
        };
        augment(&mut self.element_type, &collection.element_type);
        augment(&mut self.collection_kind, &collection.collection_kind);
    }
}

/// Merged fields of a map-type classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapPayload {
    pub key_type: Option<SmolStr>,
    pub value_type: Option<SmolStr>,
}

impl MergePayload for MapPayload {
    const KIND: ClassifierKind = ClassifierKind::Map;

    fn fold(&mut self, decl: &LocalDeclaration) {
        let DeclPayload::Map(map) = &decl.payload else {
            debug_assert!(false, "non-map declaration folded into map payload");
            return;
        };
        augment(&mut self.key_type, &map.key_type);
        augment(&mut self.value_type, &map.value_type);
    }
}

/// Merged fields of an atomic-type classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomicPayload {
    pub extends: Option<SmolStr>,
}

impl MergePayload for AtomicPayload {
    const KIND: ClassifierKind = ClassifierKind::Atomic;

    fn fold(&mut self, decl: &LocalDeclaration) {
        let DeclPayload::Atomic(atomic) = &decl.payload else {
            debug_assert!(false, "non-atomic declaration folded into atomic payload");
            return;
        };
        augment(&mut self.extends, &atomic.extends);
    }
}
