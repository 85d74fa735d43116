//! # fdp-cli — Subcommand Handlers
//!
//! One module per subcommand; `main.rs` assembles and dispatches.

pub mod build;
pub mod prove;
pub mod validate;
