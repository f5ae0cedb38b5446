//! `ScratchRun` - find, list, and launch scratch projects by recency or fuzzy name.

#![deny(
    warnings,
    missing_debug_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]

pub mod error;
pub mod launch;
pub mod page;
pub mod resolve;
pub mod scanner;
pub mod score;
pub mod types;
