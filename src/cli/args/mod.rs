//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod filters;
mod global;

pub use common::OutputFormat;
pub use filters::WordFilterArgs;
pub use global::GlobalOptions;
