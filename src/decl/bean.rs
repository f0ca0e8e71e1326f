//! Declaration records for the bean (DTO) kind.

use smol_str::SmolStr;

/// A bean as declared in one descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BeanDecl {
    /// Name of the bean this one extends, if stated.
    pub extends: Option<SmolStr>,
    pub is_abstract: Option<bool>,
    /// Marks an event-template bean rather than a plain DTO.
    pub template: Option<bool>,
    pub properties: Vec<BeanPropertyDecl>,
    pub hints: Vec<HintDecl>,
    pub annotations: Vec<AnnotationDecl>,
    /// Import statements emitted into the generated source.
    pub imports: Vec<SmolStr>,
}

/// One property of a bean declaration, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BeanPropertyDecl {
    pub name: SmolStr,
    pub value_type: Option<SmolStr>,
    pub equality_relevant: Option<bool>,
    pub description: Option<String>,
}

/// One generator hint of a bean declaration, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HintDecl {
    pub name: SmolStr,
    pub value: Option<String>,
}

/// One annotation of a bean declaration, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotationDecl {
    pub name: SmolStr,
    pub value: Option<String>,
}
