//! Unit renderers
//!
//! Implementations of the `UnitRenderer` port, one per target language.

mod java;

pub use java::JavaRenderer;

use crate::domain::ports::UnitRenderer;

/// Look up a renderer by its language identifier
pub fn renderer_for(language: &str) -> Option<Box<dyn UnitRenderer>> {
    match language.to_ascii_lowercase().as_str() {
        "java" => Some(Box::new(JavaRenderer::new())),
        _ => None,
    }
}
