//! Merged payload for enumeration classifiers.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::Name;
use crate::decl::{ClassifierKind, DeclPayload, LocalDeclaration};

use super::{MergePayload, augment};

/// Merged fields of an enumeration classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumPayload {
    /// Values in order of first appearance across contributions; a code
    /// already present is skipped entirely, keeping its first-seen fields.
    pub values: IndexMap<Name, EnumValue>,
    pub dynamic: Option<bool>,
    pub description: Option<String>,
}

/// A merged enumeration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub code: SmolStr,
    pub description: Option<String>,
}

impl MergePayload for EnumPayload {
    const KIND: ClassifierKind = ClassifierKind::Enum;

    fn fold(&mut self, decl: &LocalDeclaration) {
        let DeclPayload::Enum(en) = &decl.payload else {
            debug_assert!(false, "non-enum declaration folded into enum payload");
            return;
        };
        tracing::trace!(name = %decl.name, module = %decl.module, "folding enum declaration");

        for value in &en.values {
            let key = Name::new(value.code.clone());
            if self.values.contains_key(&key) {
                continue;
            }
            self.values.insert(
                key,
                EnumValue {
                    code: value.code.clone(),
                    description: value.description.clone(),
                },
            );
        }
        augment(&mut self.dynamic, &en.dynamic);
        augment(&mut self.description, &en.description);
    }
}
