//! mrapack CLI library.
//!
//! This crate provides the command implementations and logging setup
//! behind the `mrapack` binary.

pub mod commands;
pub mod logging;
