//! Merged payload for bean classifiers, plus the post-merge pass that
//! resolves `extends` references against the completed bean map.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::base::Name;
use crate::decl::{BeanPropertyDecl, ClassifierKind, DeclPayload, LocalDeclaration};

use super::{BeanClassifier, MergePayload, augment};

/// Merged fields of a bean classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeanPayload {
    /// `extends` as written; last declaration in canonical order wins.
    pub extends: Option<SmolStr>,
    pub is_abstract: Option<bool>,
    pub template: Option<bool>,
    pub properties: IndexMap<Name, BeanProperty>,
    pub hints: IndexMap<Name, Hint>,
    pub annotations: IndexMap<Name, Annotation>,
    /// Imports in first-seen order, deduplicated.
    pub imports: Vec<SmolStr>,
    /// Set by [`post_merge_beans`] when `extends` names a known bean.
    pub resolved_extends: Option<Name>,
}

/// A merged bean property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanProperty {
    pub name: SmolStr,
    pub value_type: Option<SmolStr>,
    pub equality_relevant: Option<bool>,
    pub description: Option<String>,
}

impl BeanProperty {
    fn seed(decl: &BeanPropertyDecl) -> Self {
        let mut property = Self {
            name: decl.name.clone(),
            value_type: None,
            equality_relevant: None,
            description: None,
        };
        property.augment(decl);
        property
    }

    fn augment(&mut self, decl: &BeanPropertyDecl) {
        augment(&mut self.value_type, &decl.value_type);
        augment(&mut self.equality_relevant, &decl.equality_relevant);
        augment(&mut self.description, &decl.description);
    }
}

/// A merged generator hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub name: SmolStr,
    pub value: Option<String>,
}

/// A merged annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: SmolStr,
    pub value: Option<String>,
}

impl MergePayload for BeanPayload {
    const KIND: ClassifierKind = ClassifierKind::Bean;

    fn fold(&mut self, decl: &LocalDeclaration) {
        let DeclPayload::Bean(bean) = &decl.payload else {
            debug_assert!(false, "non-bean declaration folded into bean payload");
            return;
        };
        tracing::trace!(name = %decl.name, module = %decl.module, "folding bean declaration");

        augment(&mut self.extends, &bean.extends);
        augment(&mut self.is_abstract, &bean.is_abstract);
        augment(&mut self.template, &bean.template);

        for property in &bean.properties {
            match self.properties.entry(Name::new(property.name.clone())) {
                indexmap::map::Entry::Occupied(mut entry) => entry.get_mut().augment(property),
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(BeanProperty::seed(property));
                }
            }
        }
        for hint in &bean.hints {
            fold_named(&mut self.hints, &hint.name, &hint.value, |name, value| Hint {
                name,
                value,
            });
        }
        for annotation in &bean.annotations {
            fold_named(
                &mut self.annotations,
                &annotation.name,
                &annotation.value,
                |name, value| Annotation { name, value },
            );
        }
        for import in &bean.imports {
            if !self.imports.contains(import) {
                self.imports.push(import.clone());
            }
        }

        // Any fold invalidates a previously resolved parent; resolution
        // reruns in the post-merge pass.
        self.resolved_extends = None;
    }
}

/// Augments or seeds a name/value entry in a qualifier-keyed map.
fn fold_named<T>(
    map: &mut IndexMap<Name, T>,
    name: &SmolStr,
    value: &Option<String>,
    seed: impl FnOnce(SmolStr, Option<String>) -> T,
) where
    T: NamedValue,
{
    match map.entry(Name::new(name.clone())) {
        indexmap::map::Entry::Occupied(mut entry) => {
            if value.is_some() {
                entry.get_mut().set_value(value.clone());
            }
        }
        indexmap::map::Entry::Vacant(entry) => {
            entry.insert(seed(name.clone(), value.clone()));
        }
    }
}

trait NamedValue {
    fn set_value(&mut self, value: Option<String>);
}

impl NamedValue for Hint {
    fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

impl NamedValue for Annotation {
    fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

/// Resolves each bean's `extends` name against the completed bean map.
///
/// Runs once per build pass, after every declaration has been folded, so
/// forward references between files resolve regardless of fold order.
/// An `extends` naming an unknown bean stays unresolved and is logged.
pub fn post_merge_beans(beans: &mut FxHashMap<Name, BeanClassifier>) {
    let known: FxHashSet<Name> = beans.keys().cloned().collect();
    for classifier in beans.values_mut() {
        let payload = classifier.payload_mut();
        payload.resolved_extends = match &payload.extends {
            Some(extends) => {
                let parent = Name::new(extends.clone());
                if known.contains(&parent) {
                    Some(parent)
                } else {
                    tracing::debug!(bean = %parent, "extends target not declared in any module");
                    None
                }
            }
            None => None,
        };
    }
}
