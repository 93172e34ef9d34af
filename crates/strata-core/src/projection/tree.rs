//! Schema-resolved projection trees.
//!
//! A tree is the union of the caller's validated paths, normalized so that
//! prefix expansion has already happened: a path ending at a struct (or
//! list-of-struct) node is stored as every scalar leaf beneath it. After
//! normalization, selection checks are plain child lookups and overlapping
//! paths cannot conflict.

use crate::{error::Error, projection::ProjectionSpec};
use std::collections::BTreeMap;
use strata_schema::{StructSchema, partition::PARTITION, resolve_path};

///
/// SelectionNode
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectionNode {
    children: BTreeMap<&'static str, SelectionNode>,
}

impl SelectionNode {
    /// Child selection for `ident`, when that field was selected.
    #[must_use]
    pub fn field(&self, ident: &str) -> Option<&Self> {
        self.children.get(ident)
    }

    fn child_mut(&mut self, ident: &'static str) -> &mut Self {
        self.children.entry(ident).or_default()
    }

    // Insert every leaf reachable through `schema`.
    fn expand(&mut self, schema: &'static StructSchema) {
        for field in schema.fields {
            let child = self.child_mut(field.ident);
            if let Some(sub) = field.kind.descend() {
                child.expand(sub);
            }
        }
    }
}

///
/// ProjectionTree
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectionTree {
    root: SelectionNode,
}

impl ProjectionTree {
    /// The project-everything tree: every leaf of the partition surface,
    /// virtual fields included.
    #[must_use]
    pub fn all() -> Self {
        let mut root = SelectionNode::default();
        root.expand(&PARTITION);
        Self { root }
    }

    /// Build the merged tree for a projection spec, failing fast on the
    /// first path that does not resolve. No partial tree is ever returned.
    pub fn from_spec(spec: &ProjectionSpec) -> Result<Self, Error> {
        match spec.field_list.as_deref() {
            None | Some([]) => Ok(Self::all()),
            Some(paths) => Self::from_field_list(paths),
        }
    }

    pub fn from_field_list(paths: &[String]) -> Result<Self, Error> {
        let mut root = SelectionNode::default();

        for path in paths {
            let resolved = resolve_path(&PARTITION, path)
                .map_err(|source| Error::invalid_projection_field(path, source))?;

            let mut node = &mut root;
            for segment in resolved.segments {
                node = node.child_mut(segment);
            }
            // Ending on a struct or list-of-struct requests its whole
            // substructure.
            if let Some(sub) = resolved.terminal.descend() {
                node.expand(sub);
            }
        }

        Ok(Self { root })
    }

    #[must_use]
    pub const fn root(&self) -> &SelectionNode {
        &self.root
    }

    /// True when the leaf (or subtree root) at `path` is selected.
    #[must_use]
    pub fn selects(&self, path: &[&str]) -> bool {
        let mut node = &self.root;
        for segment in path {
            match node.field(segment) {
                Some(child) => node = child,
                None => return false,
            }
        }
        !path.is_empty()
    }
}
