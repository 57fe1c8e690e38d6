// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`shell`] picks the host interpreter (`sh -c` or `cmd /C`).
//! - [`backend`] provides the `ShellBackend` trait and the production
//!   `SystemShell`, which tests can replace with a fake.
//! - [`permit`] is the per-entry execution permit that keeps runs of one
//!   entry from overlapping.
//! - [`runner`] runs one entry's command under its permit.

pub mod backend;
pub mod permit;
pub mod runner;
pub mod shell;

pub use backend::{CommandOutcome, ShellBackend, SystemShell};
pub use permit::{ExecutionPermit, PermitGuard, PermitTicket};
pub use runner::run_entry;
pub use shell::Shell;
