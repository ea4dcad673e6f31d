//! Mailgen - registry generator and convention checker for React email templates
//!
//! Mailgen scans a directory of email template files (`emails/<module>/<template>.tsx`)
//! and generates a typed registry module mapping module -> template -> component
//! and props type. It also validates templates against the scaffolding
//! conventions, scaffolds new templates, and classifies a change set as a
//! `minor`, `patch` or `none` release by comparing generated type declarations
//! across git revisions.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: File collection, analysis and registry generation
//! - `logging`: Diagnostic logging setup
//! - `release`: Release type classification across git revisions
//! - `rules`: Template convention checks
//! - `scaffold`: New template scaffolding

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod release;
pub mod rules;
pub mod scaffold;
