//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations
//! - `renderers/` - Unit renderers (Java)

pub mod fs;
pub mod renderers;

pub use fs::LocalFs;
pub use renderers::{renderer_for, JavaRenderer};
