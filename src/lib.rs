//! # cluster-compare
//!
//! A library for comparing sequence clusterings produced by different
//! bioinformatics tools.
//!
//! Clustering tools disagree about format as much as they disagree about
//! clusters: some emit a `components` list of lists, others an
//! orthogroups-style map from cluster id to members, and sequence ids may or
//! may not carry a species prefix. `cluster-compare` normalizes all of that
//! and then measures how well two clusterings agree over their common
//! sequences.
//!
//! ## Features
//!
//! - **Format auto-detection**: Components and orthogroups JSON shapes are
//!   classified explicitly; unrecognized inputs are an error, not a silently
//!   empty result
//! - **Id normalization**: Species prefixes (`Acamar.WP_1` → `WP_1`) are
//!   stripped so differently-styled files can be compared directly
//! - **Agreement scores**: Adjusted Rand Index and Normalized Mutual
//!   Information over the common sequence set
//! - **Broken-cluster report**: Per-reference-cluster entropy, purity and
//!   Gini impurity flag clusters scattered across counterparts
//!
//! ## Example
//!
//! ```rust
//! use cluster_compare::compare::{reconcile, AgreementScores};
//! use cluster_compare::core::clustering::Clustering;
//!
//! let truth = Clustering::from_value(&serde_json::json!({
//!     "components": [["WP_1", "WP_2"], ["WP_3"]],
//! })).unwrap().invert();
//! let predicted = Clustering::from_value(&serde_json::json!({
//!     "og1": ["Acamar.WP_1", "Acamar.WP_2"], "og2": ["Bsub.WP_3"],
//! })).unwrap().invert();
//!
//! let rec = reconcile(&truth, &predicted).unwrap();
//! let scores = AgreementScores::from_labels(&rec.labels_first, &rec.labels_second);
//! println!("ARI: {:.4}, NMI: {:.4}", scores.adjusted_rand, scores.normalized_mutual_info);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Clustering shapes, inversion, and id normalization
//! - [`compare`]: Set reconciliation, contingency matrix, and agreement
//!   statistics
//! - [`parsing`]: Readers for clustering JSON, two-column text, and NC-score
//!   files
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod compare;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use compare::agreement::AgreementScores;
pub use compare::contingency::{BrokenCluster, ContingencyMatrix};
pub use compare::reconcile::{reconcile, Reconciliation};
pub use self::core::clustering::{ClusterAssignments, Clustering};
