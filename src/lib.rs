//! Stetris (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` and hosts the pieces shared by
//! the binaries: environment configuration and the frame loop.

pub mod app;
pub mod config;

pub use stetris_core as core;
pub use stetris_input as input;
pub use stetris_sensehat as sensehat;
pub use stetris_term as term;
pub use stetris_types as types;
