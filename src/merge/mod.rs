//! # Self-Merge Classifiers
//!
//! Per-kind merge logic folding all [`LocalDeclaration`]s that share one
//! logical name into a single global classifier.
//!
//! Contributions inside a classifier are kept in *canonical order* (sorted
//! by module, source, declaration position) and the kind-specific payload is
//! rebuilt by folding them in that order. "Last declaration wins" for scalar
//! conflicts therefore means last in canonical order, never last processed:
//! the merged result is a pure function of the surviving declaration set,
//! which makes merging commutative across processing order.
//!
//! [`LocalDeclaration`]: crate::decl::LocalDeclaration

mod bean;
mod classifier;
mod enumeration;
mod item;
mod single;

pub use bean::{Annotation, BeanPayload, BeanProperty, Hint, post_merge_beans};
pub use classifier::{Classifier, MergePayload};
pub use enumeration::{EnumPayload, EnumValue};
pub use item::{Attribute, CustomProperty, ItemIndex, ItemPayload};
pub use single::{AtomicPayload, CollectionPayload, MapPayload, RelationEnd, RelationPayload};

/// A global item-type classifier.
pub type ItemClassifier = Classifier<ItemPayload>;
/// A global enumeration classifier.
pub type EnumClassifier = Classifier<EnumPayload>;
/// A global atomic-type classifier.
pub type AtomicClassifier = Classifier<AtomicPayload>;
/// A global collection-type classifier.
pub type CollectionClassifier = Classifier<CollectionPayload>;
/// A global relation classifier.
pub type RelationClassifier = Classifier<RelationPayload>;
/// A global map-type classifier.
pub type MapClassifier = Classifier<MapPayload>;
/// A global bean classifier.
pub type BeanClassifier = Classifier<BeanPayload>;

/// Overwrites `dst` only when the incoming declaration explicitly sets the
/// field. This is the augment rule: absent fields inherit the earlier value.
pub(crate) fn augment<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
    if let Some(value) = src {
        *dst = Some(value.clone());
    }
}

#[cfg(test)]
mod tests;
