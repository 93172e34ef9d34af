//! Field projection: the caller-facing spec, the `%`-glob parameter filter,
//! the schema-resolved projection tree, and the per-partition projector.

pub mod params;
pub mod project;
pub mod tree;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

// re-exports
pub use params::{ParamKeyFilter, like_match};
pub use tree::{ProjectionTree, SelectionNode};

///
/// ProjectionSpec
///
/// Which fields the caller wants, plus parameter-key include/exclude
/// patterns. An absent `field_list` projects everything; so does a present
/// but empty one (the observed behavior of the catalog surface this engine
/// serves — see DESIGN.md).
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_list: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_param_key_pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_param_key_pattern: Option<String>,
}

impl ProjectionSpec {
    /// Spec that projects every field, with no parameter filtering.
    #[must_use]
    pub fn everything() -> Self {
        Self::default()
    }

    /// Spec projecting exactly `paths`.
    #[must_use]
    pub fn fields<S: Into<String>>(paths: impl IntoIterator<Item = S>) -> Self {
        Self {
            field_list: Some(paths.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}

///
/// FilterSpec
///
/// Opaque upstream partition selection. The engine never interprets it; it
/// is handed to the retrieval collaborator, which has already produced the
/// candidate list it describes.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expr: Option<String>,
}
