//! Utilities shared by the binaries: batch queries, argument parsing and
//! logging setup

pub mod batch;
pub mod cli;
pub mod logging;
