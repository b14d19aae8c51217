//! Core data types for clustering comparison.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Clustering`](clustering::Clustering): A clustering in one of the two
//!   supported cluster-centric JSON shapes
//! - [`ClusterAssignments`](clustering::ClusterAssignments): The inverted,
//!   sequence-centric mapping from normalized sequence id to cluster label
//! - [`ids::strip_species_prefix`]: Sequence id normalization
//!
//! ## Sequence Id Normalization
//!
//! Different clustering tools emit sequence ids in different styles:
//!
//! | Style            | Example               |
//! |------------------|-----------------------|
//! | Species-prefixed | `Acamar.WP_012160728.1` |
//! | Bare accession   | `WP_012160728.1`      |
//!
//! Inversion normalizes both styles to the bare accession so that files from
//! different tools can be compared directly.

pub mod clustering;
pub mod ids;
