//! Wire-shaped response types: compacted groups and the response envelope.

use crate::model::{Params, Partition, StorageDescriptor};
use serde::{Deserialize, Serialize};

///
/// PartitionWithoutSd
///
/// A shared-group member: the projected partition minus its storage
/// descriptor, plus the location suffix relative to the shared descriptor.
/// `shared.sd.location + relative_path` reproduces the original location
/// whenever location was projected.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionWithoutSd {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Params>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
}

impl PartitionWithoutSd {
    /// Strip the storage descriptor off a projected partition.
    #[must_use]
    pub fn from_projected(partition: Partition, relative_path: Option<String>) -> Self {
        Self {
            values: partition.values,
            parameters: partition.parameters,
            create_time: partition.create_time,
            last_access_time: partition.last_access_time,
            relative_path,
        }
    }
}

///
/// SharedSdGroup
/// Partitions whose descriptors are identical up to location, stored once.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedSdGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,

    pub sd: StorageDescriptor,
    pub partitions: Vec<PartitionWithoutSd>,
}

///
/// ComposingGroup
/// Fallback carrier for partitions that could not be compacted.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposingGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,

    pub partitions: Vec<Partition>,
}

///
/// ProjectionGroup
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectionGroup {
    SharedSd(SharedSdGroup),
    Composing(ComposingGroup),
}

impl ProjectionGroup {
    /// Number of partitions carried by this group. Never zero: empty groups
    /// are not emitted.
    #[must_use]
    pub fn partition_count(&self) -> usize {
        match self {
            Self::SharedSd(group) => group.partitions.len(),
            Self::Composing(group) => group.partitions.len(),
        }
    }

    #[must_use]
    pub const fn as_shared(&self) -> Option<&SharedSdGroup> {
        match self {
            Self::SharedSd(group) => Some(group),
            Self::Composing(_) => None,
        }
    }

    #[must_use]
    pub const fn as_composing(&self) -> Option<&ComposingGroup> {
        match self {
            Self::SharedSd(_) => None,
            Self::Composing(group) => Some(group),
        }
    }
}

///
/// ProjectionResponse
/// Ordered group sequence answered to the transport layer.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub groups: Vec<ProjectionGroup>,
}

impl ProjectionResponse {
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total partitions across all groups.
    #[must_use]
    pub fn partition_count(&self) -> usize {
        self.groups.iter().map(ProjectionGroup::partition_count).sum()
    }

    /// First shared-descriptor group, if one was emitted.
    #[must_use]
    pub fn shared(&self) -> Option<&SharedSdGroup> {
        self.groups.iter().find_map(ProjectionGroup::as_shared)
    }

    /// Composing groups in emitted order.
    #[must_use]
    pub fn composing(&self) -> Vec<&ComposingGroup> {
        self.groups
            .iter()
            .filter_map(ProjectionGroup::as_composing)
            .collect()
    }
}

impl IntoIterator for ProjectionResponse {
    type Item = ProjectionGroup;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
