//! `flowpush` library crate.
//!
//! Re-exports internal modules for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;
