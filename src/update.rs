// file: src/update.rs
// version: 1.0.0
// guid: 4acf76df-28b2-43f5-894a-2b3781d51a1a

//! The update step: configure, enter the checkout, run `make_update.py`

use crate::config::{BuilderConfig, BuilderFactory};
use crate::launcher::{CommandLauncher, UpdateCommand};
use crate::logging::logger::with_operation_span;
use crate::workdir::enter_source_dir;
use crate::Result;
use std::ffi::OsString;
use tracing::info;

/// Runs the update step with a pluggable factory and launcher
pub struct Updater<F, L> {
    factory: F,
    launcher: L,
}

impl<F, L> Updater<F, L>
where
    F: BuilderFactory,
    L: CommandLauncher + Sync,
{
    pub fn new(factory: F, launcher: L) -> Self {
        Self { factory, launcher }
    }

    /// Parse `args` and run the update.
    ///
    /// Returns the update script's exit code. Argument errors are returned
    /// before any directory change or process spawn.
    pub async fn run(&self, args: Vec<OsString>) -> Result<i32> {
        let config = with_operation_span("configure", || self.factory.create_builder(args))?;
        info!(
            "Builder {} ({}) on branch {}",
            config.name, config.platform, config.branch
        );
        self.update(&config).await
    }

    /// Enter the source checkout and run the update script there
    pub async fn update(&self, config: &BuilderConfig) -> Result<i32> {
        let cwd = with_operation_span("enter_source_dir", || enter_source_dir(&config.source_dir))?;
        info!("Updating source checkout in {}", cwd.display());

        // make_update.py handles all libraries and submodules.
        let command = update_command(config);
        self.launcher.call(&command).await
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}

/// Command line for the update script of `config`
pub fn update_command(config: &BuilderConfig) -> UpdateCommand {
    UpdateCommand::new(config.python.clone()).arg(config.update_script())
}
