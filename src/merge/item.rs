//! Merged payload for item-type classifiers.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::Name;
use crate::decl::{
    AttributeDecl, ClassifierKind, CustomPropertyDecl, DeclPayload, Deployment, IndexDecl,
    LocalDeclaration,
};

use super::{MergePayload, augment};

/// Merged fields of an item-type classifier.
///
/// Qualifier-keyed maps preserve canonical fold order; a later declaration
/// augments an existing entry field-by-field rather than replacing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPayload {
    pub extends: Option<SmolStr>,
    pub is_abstract: Option<bool>,
    /// Deployment descriptor; last declaration in canonical order wins.
    pub deployment: Option<Deployment>,
    pub attributes: IndexMap<Name, Attribute>,
    pub indexes: IndexMap<Name, ItemIndex>,
    pub custom_properties: IndexMap<Name, CustomProperty>,
}

/// A merged item attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Qualifier as first spelled.
    pub qualifier: SmolStr,
    pub value_type: Option<SmolStr>,
    pub optional: Option<bool>,
    pub unique: Option<bool>,
    pub localized: Option<bool>,
    pub default_value: Option<String>,
    pub description: Option<String>,
}

impl Attribute {
    fn seed(decl: &AttributeDecl) -> Self {
        let mut attribute = Self {
            qualifier: decl.qualifier.clone(),
            value_type: None,
            optional: None,
            unique: None,
            localized: None,
            default_value: None,
            description: None,
        };
        attribute.augment(decl);
        attribute
    }

    fn augment(&mut self, decl: &AttributeDecl) {
        augment(&mut self.value_type, &decl.value_type);
        augment(&mut self.optional, &decl.optional);
        augment(&mut self.unique, &decl.unique);
        augment(&mut self.localized, &decl.localized);
        augment(&mut self.default_value, &decl.default_value);
        augment(&mut self.description, &decl.description);
    }
}

/// A merged item index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemIndex {
    pub name: SmolStr,
    pub keys: Vec<SmolStr>,
    pub unique: Option<bool>,
}

impl ItemIndex {
    fn seed(decl: &IndexDecl) -> Self {
        let mut index = Self {
            name: decl.name.clone(),
            keys: Vec::new(),
            unique: None,
        };
        index.augment(decl);
        index
    }

    fn augment(&mut self, decl: &IndexDecl) {
        if !decl.keys.is_empty() {
            self.keys = decl.keys.clone();
        }
        augment(&mut self.unique, &decl.unique);
    }
}

/// A merged custom property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomProperty {
    pub name: SmolStr,
    pub value: Option<String>,
}

impl CustomProperty {
    fn seed(decl: &CustomPropertyDecl) -> Self {
        Self {
            name: decl.name.clone(),
            value: decl.value.clone(),
        }
    }

    fn augment(&mut self, decl: &CustomPropertyDecl) {
        augment(&mut self.value, &decl.value);
    }
}

impl MergePayload for ItemPayload {
    const KIND: ClassifierKind = ClassifierKind::Item;

    fn fold(&mut self, decl: &LocalDeclaration) {
        let DeclPayload::Item(item) = &decl.payload else {
            debug_assert!(false, "non-item declaration folded into item payload");
            return;
        };
        tracing::trace!(name = %decl.name, module = %decl.module, "folding item declaration");

        augment(&mut self.extends, &item.extends);
        augment(&mut self.is_abstract, &item.is_abstract);
        augment(&mut self.deployment, &item.deployment);

        for attribute in &item.attributes {
            match self.attributes.entry(Name::new(attribute.qualifier.clone())) {
                indexmap::map::Entry::Occupied(mut entry) => entry.get_mut().augment(attribute),
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(Attribute::seed(attribute));
                }
            }
        }
        for index in &item.indexes {
            match self.indexes.entry(Name::new(index.name.clone())) {
                indexmap::map::Entry::Occupied(mut entry) => entry.get_mut().augment(index),
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(ItemIndex::seed(index));
                }
            }
        }
        for property in &item.custom_properties {
            match self.custom_properties.entry(Name::new(property.name.clone())) {
                indexmap::map::Entry::Occupied(mut entry) => entry.get_mut().augment(property),
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(CustomProperty::seed(property));
                }
            }
        }
    }
}
