//! Static schema description for the partition catalog surface.
//!
//! This crate declares, at the language level, which fields exist on a
//! partition and its storage descriptor, which of them are structs or
//! lists-of-structs (and are therefore addressable one level deeper), and
//! resolves caller-supplied dot-paths against that description. Nothing here
//! is derived from runtime values; the schema is `&'static` data, read-only
//! after process start.

pub mod node;
pub mod partition;
pub mod path;

pub use node::{FieldKind, FieldNode, StructSchema};
pub use path::{PathError, ResolvedPath, resolve_path};

/// Maximum number of dot-separated segments a projection path can have.
///
/// The deepest addressable leaf is `sd.serdeInfo.parameters` /
/// `sd.cols.name`; anything longer cannot resolve and is rejected before
/// the walk begins.
pub const MAX_PATH_DEPTH: usize = 3;
