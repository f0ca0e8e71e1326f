//! # Local Declaration Model
//!
//! Immutable records describing one classifier as declared in exactly one
//! descriptor source file. Pure data: no behavior beyond structural equality
//! and validation. Producing the declaration set for a file's content is a
//! collaborator responsibility and must be deterministic.

mod bean;
mod error;
mod item;
mod record;
mod single;

pub use bean::{AnnotationDecl, BeanDecl, BeanPropertyDecl, HintDecl};
pub use error::DeclarationError;
pub use item::{AttributeDecl, CustomPropertyDecl, Deployment, EnumDecl, EnumValueDecl, IndexDecl, ItemDecl};
pub use record::{ClassifierKind, DeclPayload, LocalDeclaration};
pub use single::{
    AtomicDecl, Cardinality, CollectionDecl, CollectionKind, MapDecl, RelationDecl, RelationEndDecl,
};

#[cfg(test)]
mod tests;
