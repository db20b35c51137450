//! Command Line Interface (CLI) layer for texpack.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): resolve parameters from defaults,
//! an optional preset and flags, print the directory listing, then pack.
//!
//! If you are embedding texpack into another application, prefer the
//! high-level `texpack::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
