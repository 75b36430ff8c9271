//! Shared test fixtures for MatchForge crates.
//!
//! This crate provides test functions and a recording sink for testing.
//! It only depends on `matchforge-core`, so every other crate can use it
//! as a dev-dependency.
//!
//! - [`fixtures`] - sample test functions over value boxes
//! - [`sink`] - a diagnostic sink that records messages
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! matchforge-test = { workspace = true }
//! ```

pub mod fixtures;
pub mod sink;

pub use sink::RecordingSink;
