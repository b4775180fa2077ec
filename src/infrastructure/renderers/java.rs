//! Java renderer
//!
//! Generates one `.java` source file per compilation unit:
//! - `<package dirs>/<Name>.java`
//!
//! Layout: package header (omitted for the default package), class header,
//! every field, then each accessor separated by a blank line.

use std::fmt::Write;
use std::path::PathBuf;

use crate::domain::entities::{Accessor, AccessorKind, CompilationUnit, FieldType};
use crate::domain::ports::UnitRenderer;

const INDENT: &str = "    ";

/// Java adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaRenderer;

impl JavaRenderer {
    pub fn new() -> Self {
        Self
    }

    fn type_name(ty: &FieldType) -> String {
        if ty.is_array() {
            format!("{}[]", ty.name)
        } else {
            ty.name.clone()
        }
    }

    fn push_accessor(out: &mut String, accessor: &Accessor) {
        let ty = Self::type_name(&accessor.ty);
        let vis = accessor.visibility.keyword();
        let field = &accessor.field;

        // `write!` into a String cannot fail.
        match accessor.kind {
            AccessorKind::Setter => {
                let _ = writeln!(out, "{INDENT}{vis} void {}({ty} {field}) {{", accessor.name);
                let _ = writeln!(out, "{INDENT}{INDENT}this.{field} = {field};");
            }
            AccessorKind::Getter => {
                let _ = writeln!(out, "{INDENT}{vis} {ty} {}() {{", accessor.name);
                let _ = writeln!(out, "{INDENT}{INDENT}return {field};");
            }
        }
        let _ = writeln!(out, "{INDENT}}}");
    }
}

impl UnitRenderer for JavaRenderer {
    fn language(&self) -> &'static str {
        "java"
    }

    fn render(&self, unit: &CompilationUnit) -> String {
        let mut out = String::new();

        if unit.has_package_header() {
            let _ = writeln!(out, "package {};", unit.package.dotted());
            out.push('\n');
        }

        match &unit.extends {
            Some(parent) => {
                let _ = writeln!(out, "class {} extends {} {{", unit.name, parent);
            }
            None => {
                let _ = writeln!(out, "class {} {{", unit.name);
            }
        }

        for field in &unit.fields {
            let _ = writeln!(
                out,
                "{INDENT}{} {} {};",
                field.visibility.keyword(),
                Self::type_name(&field.ty),
                field.name
            );
        }

        for accessor in &unit.accessors {
            out.push('\n');
            Self::push_accessor(&mut out, accessor);
        }

        out.push_str("}\n");
        out
    }

    fn relative_path(&self, unit: &CompilationUnit) -> PathBuf {
        let mut path: PathBuf = unit.package.segments().iter().collect();
        path.push(format!("{}.java", unit.name));
        path
    }
}
