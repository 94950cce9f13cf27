#![allow(dead_code)]

//! Common test utilities for the CLI integration tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated workspace in a temp directory
//! - Fixtures: marker lines and source builders

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
