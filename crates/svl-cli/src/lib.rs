//! Library surface of the `svl` command-line tool.

pub mod commands;
pub mod logging;
pub mod tables;
