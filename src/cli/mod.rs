//! Command Line Interface (CLI) layer for thermoconv.
//!
//! This module defines argument parsing (`args`), error types (`errors`), the
//! interactive prompt loop (`interactive`) and the dispatch logic (`runner`).
//!
//! If you are embedding thermoconv into another application, prefer the
//! library API (`thermoconv::api`) instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod interactive;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
