// src/exec/shell.rs

use tokio::process::Command;

/// Host command interpreter used to run entry commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// `sh -c <command>`
    Posix,
    /// `cmd /C <command>`
    Cmd,
}

impl Shell {
    /// Pick the interpreter for the platform we were built for.
    pub fn detect() -> Self {
        if cfg!(windows) { Shell::Cmd } else { Shell::Posix }
    }

    pub fn program(self) -> &'static str {
        match self {
            Shell::Posix => "sh",
            Shell::Cmd => "cmd",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Shell::Posix => "-c",
            Shell::Cmd => "/C",
        }
    }

    /// Build a command that hands `line` to this shell as one argument.
    pub fn command(self, line: &str) -> Command {
        let mut c = Command::new(self.program());
        c.arg(self.flag()).arg(line);
        c
    }
}
