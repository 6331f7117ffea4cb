use crate::command::CommandLine;
use crate::error::{BuildError, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// How the conversion tool is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnMode {
    /// Spawn the tool directly with an argument list.
    #[default]
    Direct,
    /// Hand the whole command string to the platform shell.
    Shell,
}

/// What to do with a non-zero exit from the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    #[default]
    Propagate,
    /// Report success once the tool has finished, whatever its status.
    Ignore,
}

/// Completed run of the conversion tool.
///
/// `status` is `None` when the tool could not be started and the failure was
/// ignored.
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    status: Option<ExitStatus>,
}

impl Outcome {
    pub fn status(&self) -> Option<ExitStatus> {
        self.status
    }

    pub fn code(&self) -> Option<i32> {
        self.status.and_then(|s| s.code())
    }

    pub fn success(&self) -> bool {
        self.status.is_some_and(|s| s.success())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Executor {
    pub mode: SpawnMode,
    pub policy: ExitPolicy,
    pub working_dir: Option<PathBuf>,
}

impl Executor {
    /// Run the command synchronously with inherited standard streams and
    /// block until it exits. Stdout is flushed first so everything already
    /// printed appears before the tool's own output.
    pub fn run(&self, line: &CommandLine) -> Result<Outcome> {
        std::io::stdout().flush()?;

        let mut cmd = self.command(line);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(mode = ?self.mode, program = ?cmd.get_program(), "spawning conversion tool");
        let status = match cmd.status() {
            Ok(status) => status,
            Err(source) if self.policy == ExitPolicy::Ignore => {
                tracing::warn!(error = %source, "ignoring failure to start conversion tool");
                return Ok(Outcome { status: None });
            }
            Err(source) => {
                return Err(BuildError::Spawn {
                    program: cmd.get_program().to_string_lossy().into_owned(),
                    source,
                });
            }
        };
        tracing::debug!(%status, "conversion tool finished");

        if !status.success() {
            match self.policy {
                ExitPolicy::Propagate => {
                    return Err(BuildError::ToolFailed {
                        code: status.code(),
                    });
                }
                ExitPolicy::Ignore => {
                    tracing::warn!(%status, "ignoring conversion tool failure");
                }
            }
        }
        Ok(Outcome {
            status: Some(status),
        })
    }

    fn command(&self, line: &CommandLine) -> Command {
        match self.mode {
            SpawnMode::Direct => {
                let mut cmd = Command::new(line.program());
                cmd.args(line.args());
                cmd
            }
            SpawnMode::Shell => shell_command(line.to_shell_string()),
        }
    }
}

#[cfg(unix)]
fn shell_command(script: &str) -> Command {
    let mut cmd = Command::new("/bin/sh");
    cmd.arg("-c").arg(script);
    cmd
}

#[cfg(windows)]
fn shell_command(script: &str) -> Command {
    use std::os::windows::process::CommandExt;

    // cmd.exe does its own parsing, so the line is passed unquoted
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").raw_arg(script);
    cmd
}
