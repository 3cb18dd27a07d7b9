//! docview - API documentation metadata resolution
//!
//! Given parsed source declarations (classes, methods, fields, parameters)
//! and project settings, docview decides each piece of documentation
//! metadata: document titles, operation names, descriptions, and whether a
//! field is excluded or required. Sources are structured doc comments, the
//! Swagger v2/v3 annotations, and naming fallbacks, tried in a fixed,
//! settings-gated order.
//!
//! ## Module Structure
//!
//! - `annotation`: Annotation lookups and the Swagger annotation table
//! - `cli`: Command-line interface layer
//! - `comment`: Doc comment parsing and tag/body accessors
//! - `config`: Configuration file loading and parsing
//! - `model`: Declaration model supplied by the syntax-tree provider
//! - `resolve`: Metadata resolution engine

pub mod annotation;
pub mod cli;
pub mod comment;
pub mod config;
pub mod model;
pub mod resolve;
