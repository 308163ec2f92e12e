//! CLI command implementations for roster.

pub mod check;
pub mod init;
pub mod list;
