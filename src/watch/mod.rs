// src/watch/mod.rs

//! Change detection by polling.
//!
//! There is no filesystem notification here: every entry is re-stat'ed on a
//! fixed cadence and compared with its last observed modification time.

pub mod poller;

pub use poller::Poller;
