//! Domain Policies
//!
//! Rules that govern resolution and emission. Pure values and functions,
//! no I/O.

mod accessor_policy;
mod resolution_policy;

pub use accessor_policy::{
    getter_name, setter_name, upper_first, Visibility, ACCESSOR_VISIBILITY, FIELD_VISIBILITY,
};
pub use resolution_policy::{AmbiguityPolicy, BuiltinTypes, FeatureRedeclaration};
