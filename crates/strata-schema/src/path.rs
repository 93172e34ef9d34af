//! Dot-path resolution against the static schema.
//!
//! Resolution is fail-fast: the first segment that does not name a field of
//! the struct reached so far rejects the whole path. Callers are expected to
//! reject the whole request on the first bad path.

use crate::{MAX_PATH_DEPTH, node::FieldKind, node::StructSchema};
use thiserror::Error as ThisError;

///
/// PathError
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PathError {
    #[error("empty projection path")]
    EmptyPath,

    #[error("empty segment in projection path '{path}'")]
    EmptySegment { path: String },

    #[error("'{ident}' is not a struct field; path '{path}' descends into it")]
    NotAStruct { path: String, ident: &'static str },

    #[error("projection path '{path}' exceeds the maximum depth of {max}")]
    TooDeep { path: String, max: usize },

    #[error("unknown field '{ident}' of '{strukt}' in projection path '{path}'")]
    UnknownField {
        path: String,
        strukt: &'static str,
        ident: String,
    },
}

///
/// ResolvedPath
/// A validated path: canonical segment idents plus the kind of its terminal.
///

#[derive(Clone, Debug)]
pub struct ResolvedPath {
    pub segments: Vec<&'static str>,
    pub terminal: FieldKind,
}

/// Resolve one dot-path against `root`, consuming one struct level per
/// segment. List-of-struct fields admit exactly one further segment, into
/// their element type.
pub fn resolve_path(root: &'static StructSchema, path: &str) -> Result<ResolvedPath, PathError> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    if path.split('.').count() > MAX_PATH_DEPTH {
        return Err(PathError::TooDeep {
            path: path.to_string(),
            max: MAX_PATH_DEPTH,
        });
    }

    let mut segments = Vec::new();
    let mut cursor = root;
    let mut terminal: Option<FieldKind> = None;

    for segment in path.split('.') {
        if segment.is_empty() {
            return Err(PathError::EmptySegment {
                path: path.to_string(),
            });
        }
        // The prior segment must have been a struct (or list-of-struct) to
        // admit another one.
        if let Some(kind) = terminal {
            cursor = kind.descend().ok_or_else(|| PathError::NotAStruct {
                path: path.to_string(),
                ident: segments.last().map_or(root.name, |s| *s),
            })?;
        }
        let field = cursor
            .field(segment)
            .ok_or_else(|| PathError::UnknownField {
                path: path.to_string(),
                strukt: cursor.name,
                ident: segment.to_string(),
            })?;
        segments.push(field.ident);
        terminal = Some(field.kind);
    }

    // `terminal` is always set: the empty-path case returned above and the
    // loop runs at least once for every non-empty input.
    let terminal = terminal.ok_or(PathError::EmptyPath)?;

    Ok(ResolvedPath { segments, terminal })
}
