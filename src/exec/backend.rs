// src/exec/backend.rs

//! Pluggable shell backend abstraction.
//!
//! The command runner talks to a `ShellBackend` instead of spawning processes
//! itself. Production code uses [`SystemShell`]; tests can provide a backend
//! that records commands or sleeps instead of forking.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;

use crate::errors::Result;
use crate::exec::shell::Shell;

/// Result of one command run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// Non-zero exit. `-1` when the process was killed by a signal or never
    /// started.
    Failed(i32),
}

/// Trait abstracting "run this string as a shell command and wait for it".
pub trait ShellBackend: Send + Sync {
    /// Run `command` to completion.
    ///
    /// `Err` means the process could not be started or waited on; a process
    /// that ran and exited non-zero is `Ok(CommandOutcome::Failed(_))`.
    fn run<'a>(
        &'a self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>>;
}

/// Real backend: spawns the host shell with inherited stdout/stderr.
#[derive(Debug, Clone, Copy)]
pub struct SystemShell {
    shell: Shell,
}

impl SystemShell {
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }
}

impl ShellBackend for SystemShell {
    fn run<'a>(
        &'a self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        let shell = self.shell;

        Box::pin(async move {
            let mut cmd = shell.command(command);
            cmd.stdin(Stdio::null())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());

            let status = cmd
                .status()
                .await
                .with_context(|| format!("running `{} {} {}`", shell.program(), shell.flag(), command))?;

            Ok(if status.success() {
                CommandOutcome::Success
            } else {
                CommandOutcome::Failed(status.code().unwrap_or(-1))
            })
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_success_and_exit_codes() {
        let shell = SystemShell::new(Shell::Posix);
        assert_eq!(shell.run("true").await.unwrap(), CommandOutcome::Success);
        assert_eq!(shell.run("exit 3").await.unwrap(), CommandOutcome::Failed(3));
    }

    #[tokio::test]
    async fn unknown_command_is_a_shell_failure_not_an_error() {
        let shell = SystemShell::new(Shell::Posix);
        let outcome = shell.run("definitely-not-a-real-command-xyz").await.unwrap();
        assert_eq!(outcome, CommandOutcome::Failed(127));
    }
}
