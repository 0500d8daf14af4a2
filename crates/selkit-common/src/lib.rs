//! Common utilities for the selkit workspace.
//!
//! This crate provides shared infrastructure used by the selector crates:
//! - **Warning System** - colored terminal output for tolerated but suspicious input

pub mod warning;
