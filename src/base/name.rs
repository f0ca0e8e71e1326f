use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use smol_str::SmolStr;

/// A case-insensitive logical name.
///
/// Logical names are the identity of classifiers and of qualifier-keyed
/// sub-elements (attribute qualifiers, enum value codes, bean property
/// names). Two names differing only by case are equal and hash to the same
/// bucket; the original spelling is preserved for display.
#[derive(Clone)]
pub struct Name {
    raw: SmolStr,
    key: SmolStr,
}

impl Name {
    pub fn new(raw: impl Into<SmolStr>) -> Self {
        let raw = raw.into();
        let key = fold_case(&raw);
        Self { raw, key }
    }

    /// The name as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The case-folded key this name compares and hashes by.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Lowercases only when needed so already-folded names stay allocation-free.
fn fold_case(raw: &str) -> SmolStr {
    if raw.chars().any(char::is_uppercase) {
        SmolStr::from(raw.to_lowercase())
    } else {
        SmolStr::from(raw)
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.raw)
    }
}

impl From<&str> for Name {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<SmolStr> for Name {
    fn from(raw: SmolStr) -> Self {
        Self::new(raw)
    }
}

impl Borrow<str> for Name {
    /// Borrows the folded key so map lookups by `&str` see the
    /// case-insensitive form.
    fn borrow(&self) -> &str {
        &self.key
    }
}
