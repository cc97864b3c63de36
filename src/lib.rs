//! hostglance: a refreshing terminal view of host telemetry.
//!
//! This library exposes the core modules for use by the binary and by tests.

pub mod app;
pub mod collectors;
pub mod error;
pub mod layout;
pub mod model;
pub mod report;
pub mod view;

pub use error::QueryError;
