// file: src/launcher.rs
// version: 1.0.0
// guid: b826313a-616e-4480-914c-bd25c339f7ee

//! Subprocess launching for the update step

use crate::error::UpdateError;
use crate::Result;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// A program and its arguments, run in the current working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl UpdateCommand {
    /// Create a new command
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument to the command
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Space-joined command line, as echoed before running
    pub fn display(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs a command to completion and reports its exit code
#[async_trait::async_trait]
pub trait CommandLauncher {
    /// Run `command`, blocking until it exits
    async fn call(&self, command: &UpdateCommand) -> Result<i32>;
}

/// Launcher that spawns a real child process with inherited stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    /// Create a new launcher
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandLauncher for ProcessLauncher {
    async fn call(&self, command: &UpdateCommand) -> Result<i32> {
        println!("{}", command.display());
        // Keep the echo ahead of the child's output when stdout is a pipe.
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();

        let program = which::which(&command.program).map_err(|e| {
            UpdateError::spawn(
                &command.program,
                io::Error::new(io::ErrorKind::NotFound, e.to_string()),
            )
        })?;
        debug!("Resolved {} to {}", command.program, program.display());

        let status = Command::new(&program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| UpdateError::spawn(&command.program, e))?;

        let code = exit_code(status);
        if code == 0 {
            info!("{} finished successfully", command.program);
        } else {
            warn!("{} exited with code {}", command.program, code);
        }
        Ok(code)
    }
}

/// Exit code for a finished child; signals map to `128 + signal` on Unix
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let command = UpdateCommand::new("python3").arg("/src/build_files/utils/make_update.py");

        assert_eq!(command.display(), "python3 /src/build_files/utils/make_update.py");
        assert_eq!(command.args.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let launcher = ProcessLauncher::new();
        let command = UpdateCommand::new("nonexistent-command-12345");

        let err = launcher.call(&command).await.unwrap_err();

        assert!(matches!(err, UpdateError::Spawn { .. }));
        assert_eq!(err.exit_code(), 127);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_code_is_propagated() {
        let launcher = ProcessLauncher::new();

        for expected in [0, 1, 127] {
            let command = UpdateCommand::new("sh")
                .arg("-c")
                .arg(format!("exit {}", expected));

            let code = launcher.call(&command).await.unwrap();

            assert_eq!(code, expected);
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_signal_exit_code() {
        let launcher = ProcessLauncher::new();
        let command = UpdateCommand::new("sh").arg("-c").arg("kill -TERM $$");

        let code = launcher.call(&command).await.unwrap();

        assert_eq!(code, 128 + 15);
    }
}
