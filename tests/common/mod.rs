//! Common test utilities for dmodel CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and config directories plus a CLI runner
//! - Fixtures: reusable `.dmodel` sources

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
