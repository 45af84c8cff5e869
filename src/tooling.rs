//! CLI Tooling
//!
//! Command-line surface for the importer.

pub mod cli;
