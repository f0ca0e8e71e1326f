#![allow(clippy::unwrap_used)]
use crate::base::SourceId;
use crate::decl::{
    AttributeDecl, ClassifierKind, DeclPayload, DeclarationError, EnumDecl, EnumValueDecl,
    ItemDecl, LocalDeclaration,
};

fn item_decl(name: &str, module: &str) -> LocalDeclaration {
    LocalDeclaration {
        name: name.into(),
        module: module.into(),
        source: SourceId::new("core/core-items.xml"),
        position: 0,
        is_custom: false,
        payload: DeclPayload::Item(ItemDecl::default()),
    }
}

#[test]
fn valid_declaration_passes() {
    assert!(item_decl("Product", "core").validate().is_ok());
}

#[test]
fn blank_name_is_rejected() {
    let decl = item_decl("  ", "core");
    assert!(matches!(
        decl.validate(),
        Err(DeclarationError::BlankName { .. })
    ));
}

#[test]
fn blank_module_is_rejected() {
    let decl = item_decl("Product", "");
    assert!(matches!(
        decl.validate(),
        Err(DeclarationError::BlankModule { .. })
    ));
}

#[test]
fn blank_attribute_qualifier_is_rejected() {
    let mut decl = item_decl("Product", "core");
    decl.payload = DeclPayload::Item(ItemDecl {
        attributes: vec![AttributeDecl {
            qualifier: "".into(),
            ..AttributeDecl::default()
        }],
        ..ItemDecl::default()
    });
    assert!(matches!(
        decl.validate(),
        Err(DeclarationError::BlankQualifier {
            element: "attribute",
            ..
        })
    ));
}

#[test]
fn blank_enum_value_code_is_rejected() {
    let mut decl = item_decl("Gender", "core");
    decl.payload = DeclPayload::Enum(EnumDecl {
        values: vec![EnumValueDecl {
            code: " ".into(),
            description: None,
        }],
        ..EnumDecl::default()
    });
    assert!(matches!(
        decl.validate(),
        Err(DeclarationError::BlankQualifier {
            element: "enum value",
            ..
        })
    ));
}

#[test]
fn kind_follows_payload() {
    assert_eq!(item_decl("Product", "core").kind(), ClassifierKind::Item);
}

#[test]
fn logical_name_is_case_insensitive() {
    let a = item_decl("Product", "core");
    let b = item_decl("PRODUCT", "custom");
    assert_eq!(a.logical_name(), b.logical_name());
}
