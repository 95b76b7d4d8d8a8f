// file: src/config/builder.rs
// version: 1.0.0
// guid: a5a676af-993a-482e-86b7-19514fac3fd8

//! Builder configuration structures

use super::Platform;
use crate::cli::WorkerArgs;
use crate::error::UpdateError;
use crate::Result;
use regex::Regex;
use std::path::{Component, Path, PathBuf};

/// Source checkout directory name, relative to the worker's parent directory
pub const SOURCE_DIR_NAME: &str = "blender.git";

/// Update script location inside the source checkout
pub const UPDATE_SCRIPT: [&str; 3] = ["build_files", "utils", "make_update.py"];

/// Configuration for one buildbot builder run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Buildbot builder name
    pub name: String,
    /// Branch being built
    pub branch: String,
    /// Branch is a `blender-vX.Y-release` branch
    pub is_release_branch: bool,
    /// Builder signs its packages
    pub codesign: bool,
    /// Platform derived from the builder name
    pub platform: Platform,
    /// Root of the source checkout
    pub source_dir: PathBuf,
    /// Build output directory
    pub build_dir: PathBuf,
    /// Install directory
    pub install_dir: PathBuf,
    /// Directory packages are uploaded from
    pub upload_dir: PathBuf,
    /// Interpreter used to run the update script
    pub python: String,
}

impl BuilderConfig {
    /// Build the configuration from parsed arguments.
    ///
    /// Relative paths are resolved against `cwd`. Buildbot runs workers from
    /// the `build/` directory, so the default checkout is `../blender.git`.
    pub fn from_args(args: WorkerArgs, cwd: &Path) -> Result<Self> {
        let platform = Platform::from_builder_name(&args.builder_name)?;
        let is_release_branch = is_release_branch(&args.branch)?;

        let parent = cwd.join("..");
        let source_dir = match args.source_dir {
            Some(dir) => absolute(cwd, &dir),
            None => absolute(&parent, Path::new(SOURCE_DIR_NAME)),
        };

        Ok(Self {
            name: args.builder_name,
            branch: args.branch,
            is_release_branch,
            codesign: args.codesign,
            platform,
            source_dir,
            build_dir: absolute(&parent, Path::new("build")),
            install_dir: absolute(&parent, Path::new("install")),
            upload_dir: absolute(&parent, Path::new("install")),
            python: args.python,
        })
    }

    /// Path of the update script inside the source checkout
    pub fn update_script(&self) -> PathBuf {
        UPDATE_SCRIPT
            .iter()
            .fold(self.source_dir.clone(), |path, part| path.join(part))
    }
}

fn is_release_branch(branch: &str) -> Result<bool> {
    let re = Regex::new(r"^blender-v(.*)-release$")
        .map_err(|e| UpdateError::invalid_argument(format!("Invalid regex pattern: {}", e)))?;
    Ok(re.is_match(branch))
}

/// Join `path` onto `base` and drop `.` and `..` components lexically
fn absolute(base: &Path, path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in base.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
