//! Parsers for the input formats consumed by the CLI.
//!
//! This module provides parsers for:
//!
//! - **Clustering JSON files**: Either the components format or the
//!   orthogroups format, classified by [`crate::core::clustering::Clustering`]
//! - **Two-column text clusterings**: `cluster-id  seq-id` lines (either
//!   column order) for conversion to the JSON orthogroups format
//! - **NC-score files**: `id1 id2 value` lines keyed by unordered id pair
//!
//! ## Example
//!
//! ```rust,no_run
//! use cluster_compare::parsing::json::load_clustering;
//! use std::path::Path;
//!
//! let clustering = load_clustering(Path::new("orthogroups.json")).unwrap();
//! let assignments = clustering.invert();
//! println!("{} sequences found", assignments.len());
//! ```

pub mod json;
pub mod scores;
pub mod text;

pub use json::ParseError;
