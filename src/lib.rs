//! apigen renders server route stubs and a web client wrapper from a JSON API
//! definition and a set of MiniJinja templates.

/// Command-line interface module for the apigen application
pub mod cli;

/// Generator configuration: input, services and tasks
/// Supports JSON and YAML formats (apigen.json, apigen.yml, apigen.yaml)
pub mod config;

/// Built-in defaults and file names
pub mod constants;

/// Error types and handling for the apigen application
pub mod error;

/// Source formatting of generated output
pub mod formatter;

/// Runs generation tasks in order
pub mod generator;

/// Identifier derivation and template string helpers
pub mod naming;

/// MiniJinja environment with the helpers registered
pub mod renderer;

/// API definition model and JSON loader
pub mod schema;

/// Output file creation and writing
pub mod writer;
