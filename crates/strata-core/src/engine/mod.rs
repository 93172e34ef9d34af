//! Projection engine: the orchestrator both retrieval strategies consult.
//!
//! Pure function of its inputs; no caches, no cross-request state. All
//! validation happens before any projection or grouping work, so a failing
//! request never leaves partial state observable.

pub mod config;


use crate::{
    error::Error,
    group::{GroupHeader, group_partitions},
    model::{Partition, StorageDescriptor, Table},
    obs::sink::{self, MetricsEvent},
    projection::{
        FilterSpec, ParamKeyFilter, ProjectionSpec, ProjectionTree, project::project_partition,
        project::project_sd,
    },
    response::{ProjectionGroup, ProjectionResponse},
    retrieval::{ListPartitionsRequest, PartitionStore},
    DEFAULT_CATALOG,
};
use serde::{Deserialize, Serialize};

// re-exports
pub use config::EngineConfig;

///
/// GetPartitionsRequest
/// The transport-level ask: which table, which fields, which candidates.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPartitionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat_name: Option<String>,

    pub db_name: String,
    pub table_name: String,

    #[serde(default)]
    pub projection: ProjectionSpec,

    #[serde(default)]
    pub filter: FilterSpec,
}

impl GetPartitionsRequest {
    #[must_use]
    pub fn new(db_name: &str, table_name: &str) -> Self {
        Self {
            db_name: db_name.to_string(),
            table_name: table_name.to_string(),
            ..Self::default()
        }
    }

    /// Catalog to resolve against, falling back to the default catalog.
    #[must_use]
    pub fn catalog(&self) -> &str {
        self.cat_name.as_deref().unwrap_or(DEFAULT_CATALOG)
    }
}

///
/// RequestContext
/// Names every virtual projection path is answered from.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestContext {
    pub cat_name: String,
    pub db_name: String,
    pub table_name: String,
}

impl RequestContext {
    #[must_use]
    pub fn for_table(table: &Table) -> Self {
        Self {
            cat_name: table.cat_name.clone(),
            db_name: table.db_name.clone(),
            table_name: table.table_name.clone(),
        }
    }
}

///
/// ProjectionEngine
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectionEngine {
    config: EngineConfig,
}

impl ProjectionEngine {
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Full request boundary: table lookup, retrieval through the configured
    /// strategy, projection and grouping, names echoed per the projection.
    pub fn execute(
        &self,
        request: &GetPartitionsRequest,
        store: &dyn PartitionStore,
    ) -> Result<ProjectionResponse, Error> {
        sink::record(MetricsEvent::RequestStart);
        log::debug!(
            "projecting partitions of {}.{} (direct retrieval: {})",
            request.db_name,
            request.table_name,
            self.config.try_direct_retrieval
        );

        let table = store.table(request.catalog(), &request.db_name, &request.table_name)?;
        let list_req = ListPartitionsRequest {
            cat_name: table.cat_name.clone(),
            db_name: table.db_name.clone(),
            table_name: table.table_name.clone(),
            filter: request.filter.clone(),
        };
        let partitions = if self.config.try_direct_retrieval {
            store.list_partitions_direct(&list_req)
        } else {
            store.list_partitions_mapped(&list_req)
        }?;

        let groups = self
            .compute_groups(partitions, &table, &request.projection)
            .inspect_err(|err| {
                if err.is_invalid_projection() {
                    sink::record(MetricsEvent::PathRejected);
                }
            })?;

        let response = ProjectionResponse { groups };
        sink::record(MetricsEvent::RequestFinish {
            partitions: response.partition_count() as u64,
            shared_groups: response.shared().map_or(0, |_| 1),
            composing_groups: response.composing().len() as u64,
        });
        log::debug!(
            "projected {} partitions of {}.{} into {} groups",
            response.partition_count(),
            request.db_name,
            request.table_name,
            response.group_count()
        );

        Ok(response)
    }

    /// Project and group an already-retrieved candidate sequence. Fails only
    /// on projection-path validation; well-formed input never fails, and an
    /// empty candidate sequence yields an empty group sequence.
    pub fn compute_groups(
        &self,
        partitions: Vec<Partition>,
        table: &Table,
        spec: &ProjectionSpec,
    ) -> Result<Vec<ProjectionGroup>, Error> {
        let tree = ProjectionTree::from_spec(spec)?;
        if partitions.is_empty() {
            return Ok(Vec::new());
        }

        let filter = ParamKeyFilter::from_spec(spec);
        let ctx = RequestContext::for_table(table);

        let projected: Vec<Partition> = partitions
            .iter()
            .map(|partition| project_partition(partition, &tree, &ctx, &filter))
            .collect();

        let reference = reference_sd(table, &tree, &filter);
        let location_selected = tree.selects(&["sd", "location"]);
        let header = GroupHeader {
            db_name: tree.selects(&["dbName"]).then(|| ctx.db_name.clone()),
            table_name: tree.selects(&["tableName"]).then(|| ctx.table_name.clone()),
        };

        Ok(group_partitions(
            projected,
            &reference,
            location_selected,
            &header,
        ))
    }
}

// Candidate shared descriptor: the owning table's descriptor projected the
// same way partition descriptors are, so unselected sub-fields are absent
// from both sides of the eligibility comparison. Its location is the
// table's default location (populated only when selected).
fn reference_sd(
    table: &Table,
    tree: &ProjectionTree,
    filter: &ParamKeyFilter,
) -> StorageDescriptor {
    tree.root()
        .field("sd")
        .map(|selection| project_sd(&table.sd, selection, filter))
        .unwrap_or_default()
}
