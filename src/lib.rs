//! Match-3 (workspace facade crate).
//!
//! Re-exports the engine crates under `match3::{core, types}` and hosts the
//! headless autoplay runner used by the `match3` binary.

pub use match3_core as core;
pub use match3_types as types;

pub mod autoplay;
pub mod config;
