//! Aura CLI library.
//!
//! - `cli/` - argument parsing and command dispatch
//! - `output` - table and JSON printing helpers

pub mod cli;
pub mod output;
