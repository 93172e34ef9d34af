//! Shared-storage-descriptor grouping.
//!
//! Compacts projected partitions that match a reference descriptor into one
//! group carrying the descriptor once plus per-partition location suffixes;
//! everything else is emitted fully materialized, in order, one composing
//! group per run of matching descriptors.


use crate::{
    model::{Partition, StorageDescriptor},
    response::{ComposingGroup, PartitionWithoutSd, ProjectionGroup, SharedSdGroup},
};

///
/// GroupHeader
/// Names echoed on every emitted group, populated only when requested.
///

#[derive(Clone, Debug, Default)]
pub struct GroupHeader {
    pub db_name: Option<String>,
    pub table_name: Option<String>,
}

/// Split projected partitions into at most one shared group plus composing
/// groups, preserving each partition's relative order within its group.
///
/// `reference` is the table's descriptor already projected the same way the
/// partitions were; its location is populated only when `location` was
/// selected, which is also what switches the strict-descent test on.
#[must_use]
pub fn group_partitions(
    projected: Vec<Partition>,
    reference: &StorageDescriptor,
    location_selected: bool,
    header: &GroupHeader,
) -> Vec<ProjectionGroup> {
    let reference_no_loc = reference.without_location();

    let mut shared: Vec<PartitionWithoutSd> = Vec::new();
    let mut composing: Vec<ComposingGroup> = Vec::new();
    // Descriptor (sans location) of the run currently being composed.
    let mut run_sd: Option<StorageDescriptor> = None;

    for partition in projected {
        match eligibility(&partition, &reference_no_loc, reference, location_selected) {
            Some(relative_path) => {
                shared.push(PartitionWithoutSd::from_projected(partition, relative_path));
            }
            None => {
                let sd_no_loc = partition
                    .sd
                    .as_ref()
                    .map(StorageDescriptor::without_location)
                    .unwrap_or_default();
                if run_sd.as_ref() != Some(&sd_no_loc) {
                    composing.push(ComposingGroup {
                        db_name: header.db_name.clone(),
                        table_name: header.table_name.clone(),
                        partitions: Vec::new(),
                    });
                    run_sd = Some(sd_no_loc);
                }
                // A run was just opened if none existed.
                composing
                    .last_mut()
                    .expect("composing run exists")
                    .partitions
                    .push(partition);
            }
        }
    }

    let mut groups = Vec::with_capacity(composing.len() + 1);
    if !shared.is_empty() {
        groups.push(ProjectionGroup::SharedSd(SharedSdGroup {
            db_name: header.db_name.clone(),
            table_name: header.table_name.clone(),
            sd: reference.clone(),
            partitions: shared,
        }));
    }
    groups.extend(composing.into_iter().map(ProjectionGroup::Composing));

    groups
}

// `Some(relative_path)` when the partition belongs in the shared group.
// Equality is tested on the projected descriptors excluding location;
// unselected sub-fields are unpopulated on both sides and compare equal.
fn eligibility(
    partition: &Partition,
    reference_no_loc: &StorageDescriptor,
    reference: &StorageDescriptor,
    location_selected: bool,
) -> Option<Option<String>> {
    let sd_no_loc = partition
        .sd
        .as_ref()
        .map(StorageDescriptor::without_location)
        .unwrap_or_default();
    if &sd_no_loc != reference_no_loc {
        return None;
    }
    if !location_selected {
        return Some(None);
    }

    strict_suffix(reference.location.as_deref(), partition.location()).map(Some)
}

// Location suffix below `reference`, when `location` is a strict descendant
// (`reference` + separator + non-empty remainder). The suffix keeps its
// leading separator so reference + suffix reproduces the original location.
fn strict_suffix(reference: Option<&str>, location: Option<&str>) -> Option<String> {
    let rest = location?.strip_prefix(reference?)?;
    (rest.len() > 1 && rest.starts_with('/')).then(|| rest.to_string())
}
