use crate::retrieval::RetrievalError;
use strata_schema::PathError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Public error surface of the engine. Projection-path validation fails the
/// whole request atomically before any projection or grouping work starts;
/// retrieval failures pass through from the collaborator unmodified.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid partition projection field '{path}'")]
    InvalidProjectionField {
        path: String,
        #[source]
        source: PathError,
    },

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

impl Error {
    pub(crate) fn invalid_projection_field(path: impl Into<String>, source: PathError) -> Self {
        Self::InvalidProjectionField {
            path: path.into(),
            source,
        }
    }

    /// True for request-shape failures the caller can fix.
    #[must_use]
    pub const fn is_invalid_projection(&self) -> bool {
        matches!(self, Self::InvalidProjectionField { .. })
    }
}
