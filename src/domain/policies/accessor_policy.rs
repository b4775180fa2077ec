//! Accessor Policy
//!
//! Fixed encapsulation rules for emitted classes: fields are private,
//! accessors are public, and accessor names derive from the feature name.
//! These are constants of the emitter, never configured per entity.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Public,
}

impl Visibility {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
        }
    }
}

pub const FIELD_VISIBILITY: Visibility = Visibility::Private;
pub const ACCESSOR_VISIBILITY: Visibility = Visibility::Public;

/// `title` -> `setTitle`
pub fn setter_name(feature: &str) -> String {
    format!("set{}", upper_first(feature))
}

/// `title` -> `getTitle`
pub fn getter_name(feature: &str) -> String {
    format!("get{}", upper_first(feature))
}

/// Uppercase the first character only; the rest is kept verbatim.
pub fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
