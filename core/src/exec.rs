//! The central **abstraction** for external tool invocation.
//!
//! Every step that shells out goes through [`ToolRunner`] rather than
//! spawning processes directly. Steps describe *what* to run as a plain
//! [`ToolCommand`] value; the runner decides *how*. This keeps the
//! step logic testable with stub runners and confines process plumbing
//! to one place.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use async_trait::async_trait;
use tokio::process::Command;

/// A fully described external invocation: program, arguments, and an
/// optional working directory.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl fmt::Display for ToolCommand {
    /// Shell-style rendering, used when logging the exact invocation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Captured result of a finished invocation.
#[derive(Debug)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },
}

/// Runs external tools to completion, capturing exit status and both
/// output streams.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, cmd: &ToolCommand) -> Result<ToolOutput, ExecError>;
}

/// Production runner backed by the OS process facility.
pub struct SystemRunner;

#[async_trait]
impl ToolRunner for SystemRunner {
    async fn run(&self, cmd: &ToolCommand) -> Result<ToolOutput, ExecError> {
        let mut command = Command::new(cmd.program());
        command.args(cmd.arguments());
        if let Some(dir) = cmd.working_dir() {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|source| ExecError::Launch {
            program: cmd.program().to_string_lossy().into_owned(),
            source,
        })?;

        Ok(ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
