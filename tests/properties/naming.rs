//! Property tests for accessor naming.

use proptest::prelude::*;

use dmodel::domain::policies::{getter_name, setter_name, upper_first};

proptest! {
    /// PROPERTY: Accessor names are `get`/`set` plus the capitalized field name.
    #[test]
    fn property_accessor_names(field in "[a-z_][A-Za-z0-9_]{0,16}") {
        prop_assert_eq!(getter_name(&field), format!("get{}", upper_first(&field)));
        prop_assert_eq!(setter_name(&field), format!("set{}", upper_first(&field)));
    }

    /// PROPERTY: Capitalizing only touches the first character.
    #[test]
    fn property_upper_first_keeps_tail(field in "[A-Za-z_][A-Za-z0-9_]{0,16}") {
        let upper = upper_first(&field);
        prop_assert_eq!(&upper[1..], &field[1..]);
        prop_assert_eq!(upper_first(&upper), upper.clone());
    }
}
