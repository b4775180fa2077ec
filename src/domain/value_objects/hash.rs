//! Content Hash Value Object
//!
//! SHA-256 digest of rendered source text, used by the writer to skip files
//! whose content on disk already matches.

use std::fmt;

use sha2::{Digest, Sha256};

/// `sha256:`-prefixed hex digest
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    pub const PREFIX: &'static str = "sha256:";

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(format!("{}{:x}", Self::PREFIX, Sha256::digest(bytes)))
    }

    pub fn from_content(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex part without the prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
