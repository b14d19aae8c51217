//! Clustering formats and inversion to per-sequence labels.
//!
//! Two cluster-centric JSON shapes are recognized:
//!
//! - **Components format**: `{"components": [[seq1, seq2], [seq3]], ...}` —
//!   clusters live under a `components` key, any other fields are metadata.
//!   Cluster labels are the zero-based positions in the list.
//! - **Orthogroups format**: `{"OG0000001": [seq1, seq2], ...}` — each
//!   list-valued field is one cluster keyed by its id; non-list fields are
//!   skipped as metadata.
//!
//! Classification is explicit: an input that matches neither shape is a
//! [`FormatError`], not an empty result.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::core::ids::strip_species_prefix;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("expected a JSON object of clusters, got {0}")]
    NotAnObject(&'static str),

    #[error("'components' entry {0} is not a list of sequence ids")]
    InvalidComponent(usize),

    #[error("cluster '{0}' contains a non-string member")]
    NonStringMember(String),

    #[error("no recognizable clustering: neither a 'components' list nor any cluster-id list")]
    UnrecognizedShape,
}

/// A clustering in one of the supported cluster-centric shapes.
///
/// Orthogroup clusters keep document order; when the same sequence id occurs
/// in more than one cluster, the later occurrence wins during inversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clustering {
    Components(Vec<Vec<String>>),
    Orthogroups(Vec<(String, Vec<String>)>),
}

impl Clustering {
    /// Classify a parsed JSON value as one of the supported shapes.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] when the value is not an object, when a
    /// cluster contains a non-string member, or when the object matches
    /// neither shape.
    pub fn from_value(value: &Value) -> Result<Self, FormatError> {
        let object = match value {
            Value::Object(map) => map,
            Value::Null => return Err(FormatError::NotAnObject("null")),
            Value::Bool(_) => return Err(FormatError::NotAnObject("a boolean")),
            Value::Number(_) => return Err(FormatError::NotAnObject("a number")),
            Value::String(_) => return Err(FormatError::NotAnObject("a string")),
            Value::Array(_) => return Err(FormatError::NotAnObject("an array")),
        };

        // Components format: clusters live under a 'components' key
        if let Some(Value::Array(clusters)) = object.get("components") {
            let mut components = Vec::with_capacity(clusters.len());
            for (i, cluster) in clusters.iter().enumerate() {
                let members = cluster
                    .as_array()
                    .ok_or(FormatError::InvalidComponent(i))?;
                components.push(member_strings(members, || i.to_string())?);
            }
            return Ok(Self::Components(components));
        }

        // Orthogroups format: direct {cluster_id: [seq_ids]}, anything
        // non-list is metadata
        let mut groups = Vec::new();
        for (cluster_id, members) in object {
            if let Value::Array(members) = members {
                groups.push((
                    cluster_id.clone(),
                    member_strings(members, || cluster_id.clone())?,
                ));
            }
        }

        if groups.is_empty() {
            return Err(FormatError::UnrecognizedShape);
        }
        Ok(Self::Orthogroups(groups))
    }

    /// Total number of cluster members before deduplication.
    #[must_use]
    pub fn member_count(&self) -> usize {
        match self {
            Self::Components(clusters) => clusters.iter().map(Vec::len).sum(),
            Self::Orthogroups(groups) => groups.iter().map(|(_, m)| m.len()).sum(),
        }
    }

    /// Invert the cluster-centric form into a sequence-centric mapping.
    ///
    /// Sequence ids are normalized with [`strip_species_prefix`]. Components
    /// clusters are labeled by their stringified position; orthogroup
    /// clusters by their key. A sequence id claimed by two clusters keeps the
    /// later label.
    #[must_use]
    pub fn invert(&self) -> ClusterAssignments {
        let mut assignments = ClusterAssignments::default();
        match self {
            Self::Components(clusters) => {
                for (i, members) in clusters.iter().enumerate() {
                    let label = i.to_string();
                    for seq_id in members {
                        assignments.insert(strip_species_prefix(seq_id), &label);
                    }
                }
            }
            Self::Orthogroups(groups) => {
                for (label, members) in groups {
                    for seq_id in members {
                        assignments.insert(strip_species_prefix(seq_id), label);
                    }
                }
            }
        }
        assignments
    }
}

fn member_strings(
    members: &[Value],
    label: impl Fn() -> String,
) -> Result<Vec<String>, FormatError> {
    members
        .iter()
        .map(|m| {
            m.as_str()
                .map(str::to_string)
                .ok_or_else(|| FormatError::NonStringMember(label()))
        })
        .collect()
}

/// Mapping from normalized sequence id to cluster label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterAssignments {
    assignments: HashMap<String, String>,
}

impl ClusterAssignments {
    fn insert(&mut self, seq_id: &str, label: &str) {
        if let Some(previous) = self
            .assignments
            .insert(seq_id.to_string(), label.to_string())
        {
            if previous != label {
                debug!("sequence '{seq_id}' reassigned from cluster '{previous}' to '{label}'");
            }
        }
    }

    /// Number of distinct (normalized) sequence ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Cluster label for a normalized sequence id.
    #[must_use]
    pub fn label(&self, seq_id: &str) -> Option<&str> {
        self.assignments.get(seq_id).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, seq_id: &str) -> bool {
        self.assignments.contains_key(seq_id)
    }

    /// Iterate over the normalized sequence ids, in unspecified order.
    pub fn seq_ids(&self) -> impl Iterator<Item = &str> {
        self.assignments.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for ClusterAssignments {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}
