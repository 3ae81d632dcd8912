//! Shared test utilities for the warning map workspace.
//!
//! This crate provides common testing infrastructure including:
//! - CSV fixtures covering the documented row scenarios
//! - Source row builders
//! - Temp-file helpers for file-backed sources
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod files;
pub mod fixtures;
pub mod paths;

pub use files::*;
pub use fixtures::*;
pub use paths::*;
