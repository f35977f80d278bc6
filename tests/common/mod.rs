//! Shared test utilities for the levelnorm integration harness.
//!
//! Import everything via `mod common; use common::*;` at the top of each
//! harness file.

pub mod builders;

pub use builders::*;
