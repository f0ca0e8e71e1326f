#![allow(clippy::unwrap_used)]
use crate::base::Name;
use crate::decl::{AttributeDecl, Deployment, ItemDecl};
use crate::merge::{Classifier, ItemClassifier};

use super::helpers::{attribute, item_decl};

#[test]
fn seed_from_single_declaration() {
    let decl = item_decl(
        "Product",
        "core",
        false,
        ItemDecl {
            attributes: vec![attribute("code", "java.lang.String")],
            ..ItemDecl::default()
        },
    );
    let classifier = ItemClassifier::merge(None, decl);

    assert_eq!(classifier.name(), &Name::new("Product"));
    assert!(!classifier.is_custom());
    assert_eq!(classifier.declarations().len(), 1);
    assert!(classifier.payload().attributes.contains_key(&Name::new("code")));
}

#[test]
fn redeclaration_adds_new_attributes() {
    let base = item_decl(
        "Product",
        "core",
        false,
        ItemDecl {
            attributes: vec![attribute("code", "java.lang.String")],
            ..ItemDecl::default()
        },
    );
    let extension = item_decl(
        "Product",
        "customshop",
        true,
        ItemDecl {
            attributes: vec![attribute("ean", "java.lang.String")],
            ..ItemDecl::default()
        },
    );

    let classifier = ItemClassifier::merge(None, base);
    let classifier = Classifier::merge(Some(classifier), extension);

    assert!(classifier.is_custom());
    let attributes = &classifier.payload().attributes;
    assert_eq!(attributes.len(), 2);
    assert!(attributes.contains_key(&Name::new("code")));
    assert!(attributes.contains_key(&Name::new("ean")));
}

#[test]
fn later_declaration_augments_rather_than_replaces() {
    let base = item_decl(
        "Product",
        "core",
        false,
        ItemDecl {
            attributes: vec![AttributeDecl {
                qualifier: "code".into(),
                value_type: Some("java.lang.String".into()),
                unique: Some(true),
                ..AttributeDecl::default()
            }],
            ..ItemDecl::default()
        },
    );
    // Re-declares `code` setting only `optional`; the type and unique
    // marker must survive from the earlier declaration.
    let override_decl = item_decl(
        "product",
        "customshop",
        true,
        ItemDecl {
            attributes: vec![AttributeDecl {
                qualifier: "CODE".into(),
                optional: Some(false),
                ..AttributeDecl::default()
            }],
            ..ItemDecl::default()
        },
    );

    let classifier = ItemClassifier::merge(None, base);
    let classifier = Classifier::merge(Some(classifier), override_decl);

    let code = &classifier.payload().attributes[&Name::new("code")];
    assert_eq!(code.value_type.as_deref(), Some("java.lang.String"));
    assert_eq!(code.unique, Some(true));
    assert_eq!(code.optional, Some(false));
}

#[test]
fn deployment_uses_canonical_last_wins() {
    let a = item_decl(
        "Product",
        "alpha",
        false,
        ItemDecl {
            deployment: Some(Deployment {
                table: "products".into(),
                type_code: Some(1),
            }),
            ..ItemDecl::default()
        },
    );
    let b = item_decl(
        "Product",
        "zeta",
        true,
        ItemDecl {
            deployment: Some(Deployment {
                table: "products_custom".into(),
                type_code: None,
            }),
            ..ItemDecl::default()
        },
    );

    // Fold in both orders; module "zeta" is last in canonical order either
    // way, so its deployment must win in both runs.
    let forward = Classifier::merge(Some(ItemClassifier::merge(None, a.clone())), b.clone());
    let reverse = Classifier::merge(Some(ItemClassifier::merge(None, b)), a);

    assert_eq!(
        forward.payload().deployment.as_ref().unwrap().table,
        "products_custom"
    );
    assert_eq!(forward.payload(), reverse.payload());
}

#[test]
fn unmerge_restores_single_module_view() {
    let base = item_decl(
        "Product",
        "core",
        false,
        ItemDecl {
            attributes: vec![attribute("code", "java.lang.String")],
            ..ItemDecl::default()
        },
    );
    let extension = item_decl(
        "Product",
        "customshop",
        true,
        ItemDecl {
            attributes: vec![attribute("ean", "java.lang.String")],
            ..ItemDecl::default()
        },
    );
    let extension_source = extension.source.clone();

    let classifier = ItemClassifier::merge(None, base);
    let classifier = Classifier::merge(Some(classifier), extension);
    let classifier = classifier.unmerge(&extension_source).unwrap();

    assert!(!classifier.is_custom());
    let attributes = &classifier.payload().attributes;
    assert_eq!(attributes.len(), 1);
    assert!(attributes.contains_key(&Name::new("code")));
}

#[test]
fn unmerge_of_last_declaration_removes_classifier() {
    let decl = item_decl("Product", "core", false, ItemDecl::default());
    let source = decl.source.clone();
    let classifier = ItemClassifier::merge(None, decl);
    assert!(classifier.unmerge(&source).is_none());
}

#[test]
fn is_custom_flips_back_when_custom_contributors_leave() {
    let vendor = item_decl("Product", "core", false, ItemDecl::default());
    let custom = item_decl("Product", "customshop", true, ItemDecl::default());
    let custom_source = custom.source.clone();

    let classifier = ItemClassifier::merge(None, vendor);
    let classifier = Classifier::merge(Some(classifier), custom);
    assert!(classifier.is_custom());

    let classifier = classifier.unmerge(&custom_source).unwrap();
    assert!(!classifier.is_custom());
}
