//! Shared fixtures for integration tests

pub mod catalog;

pub use catalog::{fixture_catalog, fixture_data, today};
