use smol_str::SmolStr;

use crate::base::{Name, SourceId};

use super::bean::BeanDecl;
use super::error::DeclarationError;
use super::item::{EnumDecl, ItemDecl};
use super::single::{AtomicDecl, CollectionDecl, MapDecl, RelationDecl};

/// The closed set of classifier kinds known to the meta-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassifierKind {
    Item,
    Enum,
    Atomic,
    Collection,
    Relation,
    Map,
    Bean,
}

impl ClassifierKind {
    /// All kinds, in the fixed order used by name-only lookups.
    pub const ALL: [ClassifierKind; 7] = [
        ClassifierKind::Item,
        ClassifierKind::Enum,
        ClassifierKind::Atomic,
        ClassifierKind::Collection,
        ClassifierKind::Relation,
        ClassifierKind::Map,
        ClassifierKind::Bean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierKind::Item => "item",
            ClassifierKind::Enum => "enum",
            ClassifierKind::Atomic => "atomic",
            ClassifierKind::Collection => "collection",
            ClassifierKind::Relation => "relation",
            ClassifierKind::Map => "map",
            ClassifierKind::Bean => "bean",
        }
    }
}

impl std::fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific payload of a local declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclPayload {
    Item(ItemDecl),
    Enum(EnumDecl),
    Atomic(AtomicDecl),
    Collection(CollectionDecl),
    Relation(RelationDecl),
    Map(MapDecl),
    Bean(BeanDecl),
}

impl DeclPayload {
    pub fn kind(&self) -> ClassifierKind {
        match self {
            DeclPayload::Item(_) => ClassifierKind::Item,
            DeclPayload::Enum(_) => ClassifierKind::Enum,
            DeclPayload::Atomic(_) => ClassifierKind::Atomic,
            DeclPayload::Collection(_) => ClassifierKind::Collection,
            DeclPayload::Relation(_) => ClassifierKind::Relation,
            DeclPayload::Map(_) => ClassifierKind::Map,
            DeclPayload::Bean(_) => ClassifierKind::Bean,
        }
    }
}

/// One classifier as declared in one descriptor source file.
///
/// The triple `(module, source, position)` is the canonical ordering key
/// used when several declarations contribute to the same classifier: scalar
/// conflicts are resolved by the last declaration in this order, never by
/// processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDeclaration {
    /// Logical name as written in the descriptor (case preserved).
    pub name: SmolStr,
    /// Name of the declaring module or extension.
    pub module: SmolStr,
    /// Descriptor file this declaration came from.
    pub source: SourceId,
    /// Position of the declaration within its source file.
    pub position: u32,
    /// True if the declaring module is a custom module rather than
    /// vendor-supplied. Derivation is owned by the parser collaborator.
    pub is_custom: bool,
    pub payload: DeclPayload,
}

impl LocalDeclaration {
    pub fn kind(&self) -> ClassifierKind {
        self.payload.kind()
    }

    /// The case-insensitive identity this declaration merges under.
    pub fn logical_name(&self) -> Name {
        Name::new(self.name.clone())
    }

    /// Canonical ordering key within one classifier.
    pub fn canonical_key(&self) -> (&SmolStr, &SourceId, u32) {
        (&self.module, &self.source, self.position)
    }

    /// Checks structural requirements before the declaration may merge.
    pub fn validate(&self) -> Result<(), DeclarationError> {
        if self.name.trim().is_empty() {
            return Err(DeclarationError::BlankName {
                module: self.module.clone(),
                source: self.source.clone(),
            });
        }
        if self.module.trim().is_empty() {
            return Err(DeclarationError::BlankModule {
                name: self.name.clone(),
                source: self.source.clone(),
            });
        }
        if let Some(element) = self.blank_qualifier() {
            return Err(DeclarationError::BlankQualifier {
                name: self.name.clone(),
                element,
                source: self.source.clone(),
            });
        }
        Ok(())
    }

    /// Finds the first qualifier-keyed sub-element with a blank qualifier.
    fn blank_qualifier(&self) -> Option<&'static str> {
        let blank = |s: &str| s.trim().is_empty();
        match &self.payload {
            DeclPayload::Item(item) => {
                if item.attributes.iter().any(|a| blank(&a.qualifier)) {
                    Some("attribute")
                } else if item.indexes.iter().any(|i| blank(&i.name)) {
                    Some("index")
                } else if item.custom_properties.iter().any(|p| blank(&p.name)) {
                    Some("custom property")
                } else {
                    None
                }
            }
            DeclPayload::Enum(decl) => decl
                .values
                .iter()
                .any(|v| blank(&v.code))
                .then_some("enum value"),
            DeclPayload::Bean(bean) => {
                if bean.properties.iter().any(|p| blank(&p.name)) {
                    Some("property")
                } else if bean.hints.iter().any(|h| blank(&h.name)) {
                    Some("hint")
                } else if bean.annotations.iter().any(|a| blank(&a.name)) {
                    Some("annotation")
                } else {
                    None
                }
            }
            DeclPayload::Atomic(_)
            | DeclPayload::Collection(_)
            | DeclPayload::Relation(_)
            | DeclPayload::Map(_) => None,
        }
    }
}
