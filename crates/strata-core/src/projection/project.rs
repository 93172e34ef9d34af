//! Per-partition projection.
//!
//! Pure: copies exactly the selected leaves of one raw partition into a
//! fresh value, fills virtual fields from the request context, and runs the
//! parameter filter over every parameter map it populates. Never mutates
//! its input.

use crate::{
    engine::RequestContext,
    model::{FieldSchema, Order, Params, Partition, SerdeInfo, SkewedInfo, StorageDescriptor},
    projection::{ParamKeyFilter, ProjectionTree, SelectionNode},
};

/// Project one partition through a validated tree.
#[must_use]
pub fn project_partition(
    partition: &Partition,
    tree: &ProjectionTree,
    ctx: &RequestContext,
    filter: &ParamKeyFilter,
) -> Partition {
    let root = tree.root();

    Partition {
        cat_name: root
            .field("catName")
            .map(|_| ctx.cat_name.clone()),
        db_name: root.field("dbName").map(|_| ctx.db_name.clone()),
        table_name: root
            .field("tableName")
            .map(|_| ctx.table_name.clone()),
        values: root
            .field("values")
            .and_then(|_| partition.values.clone()),
        parameters: root
            .field("parameters")
            .map(|_| filtered(partition.parameters.as_ref(), filter)),
        create_time: root.field("createTime").and_then(|_| partition.create_time),
        last_access_time: root
            .field("lastAccessTime")
            .and_then(|_| partition.last_access_time),
        sd: match (root.field("sd"), partition.sd.as_ref()) {
            (Some(selection), Some(sd)) => Some(project_sd(sd, selection, filter)),
            _ => None,
        },
    }
}

/// Project a storage descriptor through the `sd` subtree selection.
#[must_use]
pub fn project_sd(
    sd: &StorageDescriptor,
    selection: &SelectionNode,
    filter: &ParamKeyFilter,
) -> StorageDescriptor {
    StorageDescriptor {
        location: selection
            .field("location")
            .and_then(|_| sd.location.clone()),
        input_format: selection
            .field("inputFormat")
            .and_then(|_| sd.input_format.clone()),
        output_format: selection
            .field("outputFormat")
            .and_then(|_| sd.output_format.clone()),
        compressed: selection.field("compressed").and_then(|_| sd.compressed),
        num_buckets: selection.field("numBuckets").and_then(|_| sd.num_buckets),
        cols: match (selection.field("cols"), sd.cols.as_ref()) {
            (Some(cols_sel), Some(cols)) => Some(
                cols.iter()
                    .map(|col| project_field_schema(col, cols_sel))
                    .collect(),
            ),
            _ => None,
        },
        bucket_cols: selection
            .field("bucketCols")
            .and_then(|_| sd.bucket_cols.clone()),
        sort_cols: match (selection.field("sortCols"), sd.sort_cols.as_ref()) {
            (Some(sort_sel), Some(sort_cols)) => Some(
                sort_cols
                    .iter()
                    .map(|order| project_order(order, sort_sel))
                    .collect(),
            ),
            _ => None,
        },
        parameters: selection
            .field("parameters")
            .map(|_| filtered(sd.parameters.as_ref(), filter)),
        serde_info: match (selection.field("serdeInfo"), sd.serde_info.as_ref()) {
            (Some(serde_sel), Some(serde_info)) => {
                Some(project_serde_info(serde_info, serde_sel, filter))
            }
            _ => None,
        },
        skewed_info: match (selection.field("skewedInfo"), sd.skewed_info.as_ref()) {
            (Some(skew_sel), Some(skewed_info)) => {
                Some(project_skewed_info(skewed_info, skew_sel))
            }
            _ => None,
        },
    }
}

fn project_serde_info(
    serde_info: &SerdeInfo,
    selection: &SelectionNode,
    filter: &ParamKeyFilter,
) -> SerdeInfo {
    SerdeInfo {
        name: selection.field("name").and_then(|_| serde_info.name.clone()),
        serialization_lib: selection
            .field("serializationLib")
            .and_then(|_| serde_info.serialization_lib.clone()),
        parameters: selection
            .field("parameters")
            .map(|_| filtered(serde_info.parameters.as_ref(), filter)),
    }
}

// The skew location map is keyed by composite skew values, not parameter
// keys, so the parameter filter does not apply to it.
fn project_skewed_info(skewed_info: &SkewedInfo, selection: &SelectionNode) -> SkewedInfo {
    SkewedInfo {
        skewed_col_names: selection
            .field("skewedColNames")
            .and_then(|_| skewed_info.skewed_col_names.clone()),
        skewed_col_values: selection
            .field("skewedColValues")
            .and_then(|_| skewed_info.skewed_col_values.clone()),
        skewed_col_value_location_maps: selection
            .field("skewedColValueLocationMaps")
            .and_then(|_| skewed_info.skewed_col_value_location_maps.clone()),
    }
}

fn project_field_schema(col: &FieldSchema, selection: &SelectionNode) -> FieldSchema {
    FieldSchema {
        name: selection.field("name").and_then(|_| col.name.clone()),
        col_type: selection.field("type").and_then(|_| col.col_type.clone()),
        comment: selection.field("comment").and_then(|_| col.comment.clone()),
    }
}

fn project_order(order: &Order, selection: &SelectionNode) -> Order {
    Order {
        col: selection.field("col").and_then(|_| order.col.clone()),
        order: selection.field("order").and_then(|_| order.order),
    }
}

// Selected parameter maps are always populated: filtering an absent map
// yields the empty map, which is the requested-but-empty state.
fn filtered(params: Option<&Params>, filter: &ParamKeyFilter) -> Params {
    params.map(|p| filter.apply(p)).unwrap_or_default()
}
