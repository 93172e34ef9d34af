//! Retrieval collaborators and the embedded backend.
//!
//! The engine consumes partitions through `PartitionStore`, which exposes
//! both execution strategies: the native/direct row path and the generic
//! object-mapping fallback. Which one runs is the caller's configuration
//! choice; the projected output must not depend on it.

use crate::{
    model::{Partition, Table},
    projection::FilterSpec,
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// RetrievalError
/// Raised by a collaborator; passed through the engine unmodified.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RetrievalError {
    #[error("partition retrieval failed: {0}")]
    Backend(String),

    #[error("table not found: {cat_name}.{db_name}.{table_name}")]
    TableNotFound {
        cat_name: String,
        db_name: String,
        table_name: String,
    },
}

///
/// ListPartitionsRequest
/// Selection criteria forwarded to the store. The filter is opaque here:
/// upstream has already reduced it to the candidate partition list.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListPartitionsRequest {
    pub cat_name: String,
    pub db_name: String,
    pub table_name: String,
    pub filter: FilterSpec,
}

///
/// PartitionStore
///
/// Both retrieval strategies over one backing row set. Implementations must
/// return identical partition sequences from both methods for the same
/// request; the engine's cross-backend contract is built on that.
///

pub trait PartitionStore {
    /// Owning table, for reference-descriptor construction.
    fn table(
        &self,
        cat_name: &str,
        db_name: &str,
        table_name: &str,
    ) -> Result<Table, RetrievalError>;

    /// Native/direct path: rows straight from the backing store.
    fn list_partitions_direct(
        &self,
        req: &ListPartitionsRequest,
    ) -> Result<Vec<Partition>, RetrievalError>;

    /// Generic-mapping fallback path: rows rebuilt through a dynamic
    /// field-map intermediate.
    fn list_partitions_mapped(
        &self,
        req: &ListPartitionsRequest,
    ) -> Result<Vec<Partition>, RetrievalError>;
}

type TableKey = (String, String, String);

///
/// MemoryStore
///
/// Embedded backend: tables and partition rows held in memory, partitions
/// kept sorted by their key values (the order the relational backend this
/// stands in for returns them in).
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: BTreeMap<TableKey, Table>,
    partitions: BTreeMap<TableKey, Vec<Partition>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(&mut self, table: Table) {
        let key = (
            table.cat_name.clone(),
            table.db_name.clone(),
            table.table_name.clone(),
        );
        self.tables.insert(key, table);
    }

    pub fn add_partitions(&mut self, table: &Table, partitions: Vec<Partition>) {
        let key = (
            table.cat_name.clone(),
            table.db_name.clone(),
            table.table_name.clone(),
        );
        let rows = self.partitions.entry(key).or_default();
        rows.extend(partitions);
        rows.sort_by(|a, b| a.key_values().cmp(b.key_values()));
    }

    /// Replace one stored partition, matched by key values.
    pub fn update_partition(&mut self, table: &Table, partition: Partition) {
        let key = (
            table.cat_name.clone(),
            table.db_name.clone(),
            table.table_name.clone(),
        );
        if let Some(rows) = self.partitions.get_mut(&key) {
            for row in rows.iter_mut() {
                if row.key_values() == partition.key_values() {
                    *row = partition;
                    return;
                }
            }
        }
    }

    fn rows(&self, req: &ListPartitionsRequest) -> &[Partition] {
        let key = (
            req.cat_name.clone(),
            req.db_name.clone(),
            req.table_name.clone(),
        );
        self.partitions.get(&key).map_or(&[], Vec::as_slice)
    }
}

impl PartitionStore for MemoryStore {
    fn table(
        &self,
        cat_name: &str,
        db_name: &str,
        table_name: &str,
    ) -> Result<Table, RetrievalError> {
        let key = (
            cat_name.to_string(),
            db_name.to_string(),
            table_name.to_string(),
        );
        self.tables
            .get(&key)
            .cloned()
            .ok_or_else(|| RetrievalError::TableNotFound {
                cat_name: cat_name.to_string(),
                db_name: db_name.to_string(),
                table_name: table_name.to_string(),
            })
    }

    fn list_partitions_direct(
        &self,
        req: &ListPartitionsRequest,
    ) -> Result<Vec<Partition>, RetrievalError> {
        Ok(self.rows(req).to_vec())
    }

    // Round-trips every row through a dynamic value tree, the way a generic
    // object mapper materializes results, then hands back typed partitions.
    fn list_partitions_mapped(
        &self,
        req: &ListPartitionsRequest,
    ) -> Result<Vec<Partition>, RetrievalError> {
        self.rows(req)
            .iter()
            .map(|row| {
                let mapped = serde_json::to_value(row)
                    .map_err(|err| RetrievalError::Backend(err.to_string()))?;
                serde_json::from_value(mapped)
                    .map_err(|err| RetrievalError::Backend(err.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{test_partitions, test_table};

    fn request(table: &Table) -> ListPartitionsRequest {
        ListPartitionsRequest {
            cat_name: table.cat_name.clone(),
            db_name: table.db_name.clone(),
            table_name: table.table_name.clone(),
            filter: FilterSpec::default(),
        }
    }

    #[test]
    fn unknown_table_is_a_retrieval_error() {
        let store = MemoryStore::new();
        let err = store.table("main", "nope", "missing").unwrap_err();
        assert!(matches!(err, RetrievalError::TableNotFound { .. }));
    }

    #[test]
    fn partitions_are_returned_sorted_by_key_values() {
        let table = test_table();
        let mut store = MemoryStore::new();
        store.add_table(table.clone());
        store.add_partitions(&table, test_partitions(&table));

        let rows = store.list_partitions_direct(&request(&table)).unwrap();
        let values: Vec<&[String]> = rows.iter().map(Partition::key_values).collect();
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(values, sorted);
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn both_strategies_return_identical_rows() {
        let table = test_table();
        let mut store = MemoryStore::new();
        store.add_table(table.clone());
        store.add_partitions(&table, test_partitions(&table));

        let direct = store.list_partitions_direct(&request(&table)).unwrap();
        let mapped = store.list_partitions_mapped(&request(&table)).unwrap();
        assert_eq!(direct, mapped);
    }

    #[test]
    fn update_partition_replaces_by_key_values() {
        let table = test_table();
        let mut store = MemoryStore::new();
        store.add_table(table.clone());
        store.add_partitions(&table, test_partitions(&table));

        let mut relocated = store.list_partitions_direct(&request(&table)).unwrap()[0].clone();
        relocated.sd.as_mut().unwrap().location = Some("/tmp/moved".to_string());
        store.update_partition(&table, relocated.clone());

        let rows = store.list_partitions_direct(&request(&table)).unwrap();
        assert_eq!(rows[0], relocated);
        assert_eq!(rows.len(), 4);
    }
}
