//! Core pipeline: collect template files, analyze them, build and write the registry.
//!
//! ## Module Structure
//!
//! - `collect`: Recursive, sorted file listing
//! - `analyze`: Textual extraction of component and props names
//! - `naming`: Case conversions and path-to-identifier derivations
//! - `registry`: Registry model and artifact rendering
//! - `generate`: The generator run (scan, build, render, write)
//! - `context`: Project layout resolved from config and CLI arguments

pub mod analyze;
pub mod collect;
mod context;
pub mod generate;
pub mod naming;
pub mod registry;

pub use context::ProjectContext;
