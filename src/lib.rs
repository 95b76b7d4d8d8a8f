// file: src/lib.rs
// version: 3.0.0
// guid: 6f0e2b8c-1d4a-4c57-9e3b-2a8f7c5d1e90

//! # Buildbot Update
//!
//! Buildbot worker step run before every build: reads the builder name and
//! branch from the command line, enters the source checkout, and runs
//! `build_files/utils/make_update.py` to sync libraries and submodules.
//! The process exits with the update script's exit code.

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod update;
pub mod workdir;

pub use error::{Result, UpdateError};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
