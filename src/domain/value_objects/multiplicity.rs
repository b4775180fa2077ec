//! Feature multiplicity

use serde::{Deserialize, Serialize};

/// Whether a feature holds one value or an array of values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Multiplicity {
    #[default]
    Single,
    /// Declared with `many`
    Array,
}

impl Multiplicity {
    pub fn from_many(many: bool) -> Self {
        if many {
            Self::Array
        } else {
            Self::Single
        }
    }

    pub fn is_array(self) -> bool {
        matches!(self, Self::Array)
    }
}
