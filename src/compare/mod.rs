//! Clustering comparison engine.
//!
//! This module provides the comparison pipeline for two inverted clusterings:
//!
//! - [`reconcile::reconcile`]: Intersect the two sequence sets and align both
//!   label projections over the sorted common ids
//! - [`contingency::ContingencyMatrix`]: Cross-tabulation of the aligned
//!   label sequences
//! - [`agreement::AgreementScores`]: Adjusted Rand Index and Normalized
//!   Mutual Information
//! - [`contingency::broken_clusters`]: Per-reference-cluster entropy, purity
//!   and Gini impurity for clusters scattered across counterparts
//!
//! ## Example
//!
//! ```rust
//! use cluster_compare::compare::agreement::AgreementScores;
//! use cluster_compare::compare::reconcile::reconcile;
//! use cluster_compare::core::clustering::Clustering;
//!
//! let first = Clustering::from_value(&serde_json::json!({
//!     "components": [["a", "b"], ["c"]],
//! })).unwrap().invert();
//! let second = Clustering::from_value(&serde_json::json!({
//!     "g1": ["a", "b"], "g2": ["c"],
//! })).unwrap().invert();
//!
//! let rec = reconcile(&first, &second).unwrap();
//! let scores = AgreementScores::from_labels(&rec.labels_first, &rec.labels_second);
//! assert!((scores.adjusted_rand - 1.0).abs() < 1e-12);
//! ```

pub mod agreement;
pub mod contingency;
pub mod reconcile;

pub use agreement::AgreementScores;
pub use contingency::{broken_clusters, BrokenCluster, ContingencyMatrix};
pub use reconcile::{reconcile, Reconciliation};
