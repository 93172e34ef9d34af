//! Shared fixtures: one partitioned table with four partitions under its
//! default location, parameter keys split between plain and exclude-prefixed.

use crate::{
    DEFAULT_CATALOG,
    model::{
        FieldSchema, Order, Params, Partition, SerdeInfo, SkewedInfo, StorageDescriptor, Table,
    },
    retrieval::MemoryStore,
};

pub(crate) const TEST_DB: &str = "test_projection_db";
pub(crate) const TEST_TABLE: &str = "test_projection_table";
pub(crate) const EXCLUDE_KEY_PREFIX: &str = "exclude";

pub(crate) fn table_location(table_name: &str) -> String {
    format!("/warehouse/{TEST_DB}.db/{table_name}")
}

fn base_sd(location: String, serde_name: &str) -> StorageDescriptor {
    StorageDescriptor {
        location: Some(location),
        input_format: Some("text".to_string()),
        output_format: Some("text".to_string()),
        compressed: Some(false),
        num_buckets: Some(2),
        cols: Some(vec![
            FieldSchema::new("col1", "string", Some("c1 comment")),
            FieldSchema::new("col2", "int", Some("c2 comment")),
        ]),
        bucket_cols: Some(vec!["col1".to_string()]),
        sort_cols: Some(vec![Order {
            col: Some("col2".to_string()),
            order: Some(1),
        }]),
        parameters: Some(Params::default()),
        serde_info: Some(SerdeInfo {
            name: Some(serde_name.to_string()),
            serialization_lib: Some("lazy-simple".to_string()),
            parameters: Some(Params::from([("serialization.format", "1")])),
        }),
        skewed_info: Some(SkewedInfo {
            skewed_col_names: Some(Vec::new()),
            skewed_col_values: Some(Vec::new()),
            skewed_col_value_location_maps: Some(Params::default()),
        }),
    }
}

pub(crate) fn named_table(table_name: &str, partition_keys: &[&str]) -> Table {
    Table {
        cat_name: DEFAULT_CATALOG.to_string(),
        db_name: TEST_DB.to_string(),
        table_name: table_name.to_string(),
        partition_keys: partition_keys
            .iter()
            .map(|key| FieldSchema::new(key, "string", None))
            .collect(),
        parameters: Params::from([("tableparam1", "tableval1")]),
        sd: base_sd(table_location(table_name), table_name),
    }
}

pub(crate) fn test_table() -> Table {
    named_table(TEST_TABLE, &["state", "city"])
}

/// One partition under the table's default location, keyed by `values`.
pub(crate) fn test_partition(table: &Table, values: &[&str], create_time: i64) -> Partition {
    let suffix: String = table
        .partition_keys
        .iter()
        .zip(values)
        .map(|(key, value)| format!("/{}={value}", key.name.as_deref().unwrap_or_default()))
        .collect();
    let location = format!("{}{suffix}", table.location().unwrap_or_default());

    Partition {
        cat_name: Some(table.cat_name.clone()),
        db_name: Some(table.db_name.clone()),
        table_name: Some(table.table_name.clone()),
        values: Some(values.iter().map(ToString::to_string).collect()),
        parameters: Some(Params::from([
            ("key1", "S1"),
            ("key2", "S2"),
            ("excludekey1", "e1"),
            ("excludekey2", "e2"),
        ])),
        create_time: Some(create_time),
        last_access_time: Some(create_time + 60),
        sd: Some(base_sd(location, &table.table_name)),
    }
}

/// The four standard partitions, in creation order; stores re-sort them by
/// key values on insert.
pub(crate) fn test_partitions(table: &Table) -> Vec<Partition> {
    vec![
        test_partition(table, &["CA", "SanFrancisco"], 1_690_000_000),
        test_partition(table, &["CA", "PaloAlto"], 1_690_000_100),
        test_partition(table, &["WA", "Seattle"], 1_690_000_200),
        test_partition(table, &["AZ", "Phoenix"], 1_690_000_300),
    ]
}

/// Store holding the standard table and its four partitions.
pub(crate) fn populated_store() -> (MemoryStore, Table) {
    let table = test_table();
    let mut store = MemoryStore::new();
    store.add_table(table.clone());
    store.add_partitions(&table, test_partitions(&table));
    (store, table)
}

/// Stored partitions in retrieval order (sorted by key values).
pub(crate) fn sorted_partitions(table: &Table) -> Vec<Partition> {
    let mut partitions = test_partitions(table);
    partitions.sort_by(|a, b| a.key_values().cmp(b.key_values()));
    partitions
}
