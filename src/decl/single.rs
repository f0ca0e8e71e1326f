//! Declaration records for the single-valued descriptor kinds: relations,
//! collections, maps, and atomics.

use smol_str::SmolStr;

use super::item::Deployment;

/// A relation between two item types as declared in one descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationDecl {
    pub deployment: Option<Deployment>,
    pub localized: Option<bool>,
    /// Source end; augmentable like item attributes.
    pub source_end: Option<RelationEndDecl>,
    /// Target end; augmentable like item attributes.
    pub target_end: Option<RelationEndDecl>,
}

/// One end of a relation declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationEndDecl {
    pub item_type: Option<SmolStr>,
    /// Role name used to navigate this end.
    pub qualifier: Option<SmolStr>,
    pub navigable: Option<bool>,
    pub cardinality: Option<Cardinality>,
    pub ordered: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

/// A collection type as declared in one descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionDecl {
    pub element_type: Option<SmolStr>,
    pub collection_kind: Option<CollectionKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    List,
    Set,
    Collection,
}

/// A map type as declared in one descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapDecl {
    pub key_type: Option<SmolStr>,
    pub value_type: Option<SmolStr>,
}

/// An atomic (primitive wrapper) type as declared in one descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AtomicDecl {
    pub extends: Option<SmolStr>,
}
