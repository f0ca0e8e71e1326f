#![allow(clippy::unwrap_used)]
use rustc_hash::FxHashMap;

use crate::base::Name;
use crate::decl::{BeanDecl, BeanPropertyDecl};
use crate::merge::{BeanClassifier, Classifier, post_merge_beans};

use super::helpers::bean_decl;

fn property(name: &str, value_type: &str) -> BeanPropertyDecl {
    BeanPropertyDecl {
        name: name.into(),
        value_type: Some(value_type.into()),
        ..BeanPropertyDecl::default()
    }
}

#[test]
fn properties_merge_like_item_attributes() {
    let base = bean_decl(
        "AddressDto",
        "core",
        false,
        BeanDecl {
            properties: vec![property("street", "String")],
            ..BeanDecl::default()
        },
    );
    let extension = bean_decl(
        "AddressDto",
        "customshop",
        true,
        BeanDecl {
            properties: vec![property("district", "String")],
            ..BeanDecl::default()
        },
    );

    let classifier = Classifier::merge(Some(BeanClassifier::merge(None, base)), extension);

    assert_eq!(classifier.payload().properties.len(), 2);
    assert!(classifier.is_custom());
}

#[test]
fn extends_and_abstract_use_canonical_last_wins() {
    let a = bean_decl(
        "AddressDto",
        "alpha",
        false,
        BeanDecl {
            extends: Some("AbstractDto".into()),
            is_abstract: Some(false),
            ..BeanDecl::default()
        },
    );
    let b = bean_decl(
        "AddressDto",
        "zeta",
        true,
        BeanDecl {
            extends: Some("AbstractAddressDto".into()),
            ..BeanDecl::default()
        },
    );

    let classifier = Classifier::merge(Some(BeanClassifier::merge(None, a)), b);

    // "zeta" is last in canonical order: its extends wins, while the
    // abstract marker it never mentions survives from "alpha".
    assert_eq!(
        classifier.payload().extends.as_deref(),
        Some("AbstractAddressDto")
    );
    assert_eq!(classifier.payload().is_abstract, Some(false));
}

#[test]
fn imports_union_in_first_seen_order() {
    let a = bean_decl(
        "AddressDto",
        "core",
        false,
        BeanDecl {
            imports: vec!["java.util.Date".into(), "java.util.List".into()],
            ..BeanDecl::default()
        },
    );
    let b = bean_decl(
        "AddressDto",
        "customshop",
        true,
        BeanDecl {
            imports: vec!["java.util.List".into(), "java.util.Map".into()],
            ..BeanDecl::default()
        },
    );

    let classifier = Classifier::merge(Some(BeanClassifier::merge(None, a)), b);

    let imports: Vec<&str> = classifier.payload().imports.iter().map(|i| i.as_str()).collect();
    assert_eq!(imports, vec!["java.util.Date", "java.util.List", "java.util.Map"]);
}

#[test]
fn post_merge_resolves_extends_against_known_beans() {
    let parent = bean_decl("AbstractAddressDto", "core", false, BeanDecl::default());
    let child = bean_decl(
        "AddressDto",
        "core",
        false,
        BeanDecl {
            extends: Some("abstractaddressdto".into()),
            ..BeanDecl::default()
        },
    );

    let mut beans: FxHashMap<Name, BeanClassifier> = FxHashMap::default();
    for decl in [parent, child] {
        let name = decl.logical_name();
        let existing = beans.remove(&name);
        beans.insert(name, Classifier::merge(existing, decl));
    }
    post_merge_beans(&mut beans);

    let child = &beans[&Name::new("AddressDto")];
    assert_eq!(
        child.payload().resolved_extends,
        Some(Name::new("AbstractAddressDto"))
    );
}

#[test]
fn post_merge_leaves_unknown_extends_unresolved() {
    let child = bean_decl(
        "AddressDto",
        "core",
        false,
        BeanDecl {
            extends: Some("MissingDto".into()),
            ..BeanDecl::default()
        },
    );

    let mut beans: FxHashMap<Name, BeanClassifier> = FxHashMap::default();
    beans.insert(child.logical_name(), BeanClassifier::merge(None, child));
    post_merge_beans(&mut beans);

    let child = &beans[&Name::new("AddressDto")];
    assert_eq!(child.payload().extends.as_deref(), Some("MissingDto"));
    assert!(child.payload().resolved_extends.is_none());
}
