// file: src/config/mod.rs
// version: 2.0.0
// guid: 9be35f30-7acd-49f5-8215-31ebd791875a

//! Builder configuration for the buildbot update step
//!
//! Turns the worker's command line into a [`BuilderConfig`] describing where
//! the source checkout lives and which builder is running.

pub mod builder;
pub mod factory;

pub use builder::BuilderConfig;
pub use factory::{ArgBuilderFactory, BuilderFactory};

use std::fmt;

/// Platforms a buildbot builder can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Mac,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the platform from the builder name prefix
    pub fn from_builder_name(name: &str) -> crate::Result<Self> {
        if name.starts_with("mac") {
            Ok(Platform::Mac)
        } else if name.starts_with("linux") {
            Ok(Platform::Linux)
        } else if name.starts_with("win") {
            Ok(Platform::Windows)
        } else {
            Err(crate::error::UpdateError::invalid_argument(format!(
                "Unknown platform for builder {}",
                name
            )))
        }
    }

    /// Get the platform as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Mac => "mac",
            Platform::Linux => "linux",
            Platform::Windows => "win",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
