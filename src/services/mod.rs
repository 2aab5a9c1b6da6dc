//! Command implementations behind the CLI.
//!
//! ARCHITECTURE
//! ============
//! Each service owns one concern so `main` only parses arguments and maps
//! results to exit codes.

pub mod build;
pub mod listing;
pub mod watch;
