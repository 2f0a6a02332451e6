//! reelscan: media library filename scanner.
//!
//! The extraction engine lives in the `reelscan-parser` crate; this crate
//! adds the configuration file, the directory walker and the CLI.

pub mod config;
pub mod walk;
