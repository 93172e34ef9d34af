//! Core runtime for Strata: the partition data model, the field-projection
//! pipeline, shared-storage-descriptor grouping, and the engine consulted
//! identically by both retrieval strategies.

// public exports are one module level down
pub mod engine;
pub mod error;
pub mod group;
pub mod model;
pub mod obs;
pub mod projection;
pub mod response;
pub mod retrieval;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Catalog used when a request does not name one.
pub const DEFAULT_CATALOG: &str = "main";

///
/// Prelude
///
/// Domain vocabulary only. No internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        DEFAULT_CATALOG,
        engine::{EngineConfig, GetPartitionsRequest, ProjectionEngine},
        error::Error,
        model::{
            FieldSchema, Order, Params, Partition, SerdeInfo, SkewedInfo, StorageDescriptor,
            Table,
        },
        projection::{FilterSpec, ProjectionSpec},
        response::{
            ComposingGroup, PartitionWithoutSd, ProjectionGroup, ProjectionResponse,
            SharedSdGroup,
        },
    };
}
