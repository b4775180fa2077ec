//! Reusable `.dmodel` sources.

/// Root entity, a datatype, and references into nested packages
pub const QUALIFIED_NAMES: &str = include_str!("../fixtures/qualified-names.dmodel");

/// `base.Blog` and `example.blog.Blog` side by side
pub const BLOG: &str = include_str!("../fixtures/blog.dmodel");

pub const UNKNOWN_TYPE: &str = "\
package shop {
    entity Order {
        customer: Customer
    }
}
";

pub const CYCLE: &str = "\
entity A extends B {}
entity B extends A {}
";

pub const SHADOWED: &str = "\
entity Tag {}

package a {
    entity Tag {}

    package b {
        entity Post {
            tag: Tag
        }
    }
}
";

pub const OWN_PACKAGE_SHADOW: &str = "\
entity Tag {}

package a.b {
    entity Tag {}
    entity Post {
        tag: Tag
    }
}
";

pub const REDECLARED: &str = "\
entity Item {
    name: String
}

entity Post extends Item {
    name: String
}
";
