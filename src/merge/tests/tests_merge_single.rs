#![allow(clippy::unwrap_used)]
use crate::decl::{
    Cardinality, CollectionDecl, CollectionKind, DeclPayload, RelationDecl, RelationEndDecl,
};
use crate::merge::{Classifier, CollectionClassifier, RelationClassifier};

use super::helpers::decl;

#[test]
fn relation_ends_augment_across_declarations() {
    let a = decl(
        "Category2Product",
        "core",
        false,
        DeclPayload::Relation(RelationDecl {
            source_end: Some(RelationEndDecl {
                item_type: Some("Category".into()),
                cardinality: Some(Cardinality::Many),
                ..RelationEndDecl::default()
            }),
            ..RelationDecl::default()
        }),
    );
    // Later declaration adds navigability without restating the type.
    let b = decl(
        "Category2Product",
        "customshop",
        true,
        DeclPayload::Relation(RelationDecl {
            source_end: Some(RelationEndDecl {
                navigable: Some(true),
                ..RelationEndDecl::default()
            }),
            ..RelationDecl::default()
        }),
    );

    let classifier = Classifier::merge(Some(RelationClassifier::merge(None, a)), b);

    let source_end = classifier.payload().source_end.as_ref().unwrap();
    assert_eq!(source_end.item_type.as_deref(), Some("Category"));
    assert_eq!(source_end.cardinality, Some(Cardinality::Many));
    assert_eq!(source_end.navigable, Some(true));
}

#[test]
fn collection_scalars_use_canonical_last_wins() {
    let a = decl(
        "ProductList",
        "alpha",
        false,
        DeclPayload::Collection(CollectionDecl {
            element_type: Some("Product".into()),
            collection_kind: Some(CollectionKind::Collection),
        }),
    );
    let b = decl(
        "ProductList",
        "zeta",
        true,
        DeclPayload::Collection(CollectionDecl {
            element_type: None,
            collection_kind: Some(CollectionKind::List),
        }),
    );

    let forward = Classifier::merge(Some(CollectionClassifier::merge(None, a.clone())), b.clone());
    let reverse = Classifier::merge(Some(CollectionClassifier::merge(None, b)), a);

    assert_eq!(forward.payload().element_type.as_deref(), Some("Product"));
    assert_eq!(forward.payload().collection_kind, Some(CollectionKind::List));
    assert_eq!(forward.payload(), reverse.payload());
}
