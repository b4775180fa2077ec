//! Package Path Value Object
//!
//! A dotted namespace path such as `example.blog`. The empty path is the
//! default (unnamed) package at the root of the namespace tree.

use std::fmt;

use serde::{Serialize, Serializer};

/// Ordered sequence of package name segments
///
/// Ordering is segment-wise lexicographic, so the root package sorts first
/// and `a` sorts before `a.b`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackagePath(Vec<String>);

impl PackagePath {
    /// The default (unnamed) package
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from already-split segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse a dotted path; the empty string is the root package
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self::from_segments(dotted.split('.'))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Append another path below this one (`a.b` + `c.d` = `a.b.c.d`)
    pub fn join(&self, other: &PackagePath) -> Self {
        let mut segments = self.0.clone();
        segments.extend(other.0.iter().cloned());
        Self(segments)
    }

    /// This path and every enclosing path, innermost first, ending at the root
    ///
    /// `a.b` yields `a.b`, `a`, and the root package.
    pub fn ancestors(&self) -> impl Iterator<Item = PackagePath> + '_ {
        (0..=self.0.len())
            .rev()
            .map(move |len| Self(self.0[..len].to_vec()))
    }

    /// Segments of `self` below `prefix`, if `prefix` encloses `self`
    pub fn strip_prefix(&self, prefix: &PackagePath) -> Option<PackagePath> {
        self.0
            .strip_prefix(prefix.0.as_slice())
            .map(|rest| Self(rest.to_vec()))
    }

    /// Dotted form, empty for the root package
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

impl fmt::Display for PackagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "<default>")
        } else {
            write!(f, "{}", self.dotted())
        }
    }
}

impl From<&str> for PackagePath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl Serialize for PackagePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.dotted())
    }
}
