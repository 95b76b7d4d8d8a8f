// file: src/config/factory.rs
// version: 1.0.0
// guid: 1e608453-5c12-4ace-912b-b8b691d6cef7

//! Builder factory: command line to [`BuilderConfig`]

use super::BuilderConfig;
use crate::cli::WorkerArgs;
use crate::Result;
use clap::Parser;
use std::ffi::OsString;

/// Constructs a builder configuration from process arguments
pub trait BuilderFactory {
    /// Parse `args` (including the program name) into a configuration.
    ///
    /// Must not perform any side effect beyond reading the environment.
    fn create_builder(&self, args: Vec<OsString>) -> Result<BuilderConfig>;
}

/// Factory backed by the clap argument definitions
#[derive(Debug, Default, Clone, Copy)]
pub struct ArgBuilderFactory;

impl ArgBuilderFactory {
    /// Create a new factory
    pub fn new() -> Self {
        Self
    }
}

impl BuilderFactory for ArgBuilderFactory {
    fn create_builder(&self, args: Vec<OsString>) -> Result<BuilderConfig> {
        let args = WorkerArgs::try_parse_from(args)?;
        let cwd = std::env::current_dir()?;
        BuilderConfig::from_args(args, &cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;
    use crate::error::UpdateError;

    fn argv(args: &[&str]) -> Vec<OsString> {
        std::iter::once("buildbot-update")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_create_builder_from_arguments() {
        // Arrange
        let factory = ArgBuilderFactory::new();

        // Act
        let config = factory
            .create_builder(argv(&["linux_cmake", "master", "--source-dir", "/opt/checkout"]))
            .unwrap();

        // Assert
        assert_eq!(config.name, "linux_cmake");
        assert_eq!(config.platform, Platform::Linux);
        assert_eq!(config.source_dir, std::path::PathBuf::from("/opt/checkout"));
    }

    #[test]
    fn test_default_source_dir_is_sibling_of_cwd() {
        let factory = ArgBuilderFactory::new();
        let cwd = std::env::current_dir().unwrap();

        let config = factory.create_builder(argv(&["linux_cmake"])).unwrap();

        if std::env::var_os("BUILDBOT_SOURCE_DIR").is_none() {
            assert!(config.source_dir.ends_with("blender.git"));
            assert_eq!(config.source_dir.parent(), cwd.parent());
        }
    }

    #[test]
    fn test_malformed_arguments_fail() {
        let factory = ArgBuilderFactory::new();

        let result = factory.create_builder(argv(&[]));

        match result {
            Err(UpdateError::Argument(e)) => assert_ne!(e.exit_code(), 0),
            other => panic!("expected argument error, got {:?}", other),
        }
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let factory = ArgBuilderFactory::new();

        let err = factory.create_builder(argv(&["--help"])).unwrap_err();

        assert_eq!(err.exit_code(), 0);
    }
}
