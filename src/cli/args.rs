// file: src/cli/args.rs
// version: 2.0.0
// guid: be5c7073-b1ef-4335-b53a-6b8aef295532

//! Command line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Default branch when the worker does not pass one
pub const DEFAULT_BRANCH: &str = "master";

/// Default interpreter for the update script
pub const DEFAULT_PYTHON: &str = "python3";

#[derive(Parser, Debug, Clone)]
#[command(name = "buildbot-update")]
#[command(about = "Update a buildbot worker's source checkout, libraries and submodules")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct WorkerArgs {
    /// Buildbot builder name; its prefix selects the platform (mac, linux, win)
    pub builder_name: String,

    /// Branch being built
    #[arg(default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Builder signs its packages
    #[arg(long)]
    pub codesign: bool,

    #[arg(
        long,
        env = "BUILDBOT_SOURCE_DIR",
        help = "Source checkout to update [default: ../blender.git]"
    )]
    pub source_dir: Option<PathBuf>,

    #[arg(
        long,
        env = "BUILDBOT_PYTHON",
        default_value = DEFAULT_PYTHON,
        help = "Interpreter used to run the update script"
    )]
    pub python: String,
}
