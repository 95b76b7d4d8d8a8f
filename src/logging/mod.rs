// file: src/logging/mod.rs
// version: 1.1.0
// guid: 20ec36a9-3637-45ac-8813-7dfe32c33161

//! Logging system for the buildbot update step

pub mod logger;

pub use logger::init_logger;
