// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod registry;
pub mod watch;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::engine::{ChangeEvent, Dispatcher};
use crate::errors::Result;
use crate::exec::{Shell, SystemShell};
use crate::fs::{FileSystem, RealFileSystem};
use crate::registry::Registry;
use crate::watch::Poller;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - registry expansion (startup-fatal on bad patterns / unstat-able files)
/// - the poller task
/// - the dispatcher, backed by the platform shell
/// - Ctrl-C handling
///
/// Returns only on Ctrl-C or if the poller stops. In-flight commands are not
/// waited for.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.input)?;

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let registry = Arc::new(Registry::build(&cfg, fs.as_ref())?);

    if args.dry_run {
        print_dry_run(&registry, &cfg);
        return Ok(());
    }

    info!(sleep = ?cfg.poll_interval(), "poll interval");

    let (events_tx, events_rx) = mpsc::unbounded_channel::<ChangeEvent>();

    let poller = Poller::new(Arc::clone(&registry), fs, cfg.poll_interval(), events_tx);
    let poller_handle = tokio::spawn(poller.run());

    // Shell choice is made once, here.
    let backend = Arc::new(SystemShell::new(Shell::detect()));
    let dispatcher = Dispatcher::new(backend);

    tokio::select! {
        () = dispatcher.run(events_rx) => {
            debug!("dispatcher returned; collecting poller result");
            poller_handle.await.map_err(anyhow::Error::from)??;
        }
        res = tokio::signal::ctrl_c() => {
            res?;
            info!("interrupt received; exiting without waiting for running commands");
        }
    }

    Ok(())
}

/// Simple dry-run output: print groups, entries and substituted commands.
fn print_dry_run(registry: &Registry, cfg: &config::ConfigFile) {
    println!("spyrun dry-run");
    println!("  sleep = {:?}", cfg.poll_interval());
    println!();

    println!("groups ({}):", registry.groups().len());
    for group in registry.groups() {
        println!("  - {}", group.name());
        println!("      file: {}", group.pattern());
        if group.entries().is_empty() {
            println!("      (no matches)");
        }
        for entry in group.entries() {
            println!("      {} -> {}", entry.path().display(), entry.command());
        }
    }

    debug!("dry-run complete (no execution)");
}
