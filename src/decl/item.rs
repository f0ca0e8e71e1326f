//! Declaration records for the item-type and enumeration kinds.
//!
//! Fields that a later declaration may augment are `Option`-valued: `None`
//! means "not mentioned by this declaration", which is distinct from an
//! explicit value during merging.

use smol_str::SmolStr;

/// An item type as declared in one descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDecl {
    /// Parent type name, if this declaration states one.
    pub extends: Option<SmolStr>,
    pub is_abstract: Option<bool>,
    /// Database deployment descriptor, if this declaration states one.
    pub deployment: Option<Deployment>,
    pub attributes: Vec<AttributeDecl>,
    pub indexes: Vec<IndexDecl>,
    pub custom_properties: Vec<CustomPropertyDecl>,
}

/// Database deployment of an item type or relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub table: SmolStr,
    pub type_code: Option<i32>,
}

/// One attribute of an item type declaration, keyed by `qualifier`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeDecl {
    pub qualifier: SmolStr,
    pub value_type: Option<SmolStr>,
    pub optional: Option<bool>,
    pub unique: Option<bool>,
    pub localized: Option<bool>,
    pub default_value: Option<String>,
    pub description: Option<String>,
}

/// One index of an item type declaration, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexDecl {
    pub name: SmolStr,
    pub keys: Vec<SmolStr>,
    pub unique: Option<bool>,
}

/// One custom property of an item type declaration, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomPropertyDecl {
    pub name: SmolStr,
    pub value: Option<String>,
}

/// An enumeration as declared in one descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumDecl {
    /// Values in declaration order. Merge order across files is order of
    /// first appearance; duplicate codes are skipped.
    pub values: Vec<EnumValueDecl>,
    pub dynamic: Option<bool>,
    pub description: Option<String>,
}

/// One value of an enumeration declaration, keyed by `code`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumValueDecl {
    pub code: SmolStr,
    pub description: Option<String>,
}
