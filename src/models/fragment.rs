// src/models/fragment.rs

//! Highlight fragment data structure.

use serde::{Deserialize, Serialize};

/// Whether a fragment matched the search query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    /// Ordinary, non-matching text
    Text,
    /// A case-insensitive occurrence of the query
    Match,
}

/// One contiguous span of a highlighted text.
///
/// The values of a fragment sequence, joined in order, reproduce the
/// original text exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fragment {
    #[serde(rename = "type")]
    pub kind: FragmentKind,
    pub value: String,
}

impl Fragment {
    /// A non-matching span.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::Text,
            value: value.into(),
        }
    }

    /// A span that matched the query, with the casing of the source text.
    pub fn matched(value: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::Match,
            value: value.into(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.kind == FragmentKind::Match
    }
}
