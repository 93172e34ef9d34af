use crate::model::{Params, StorageDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Partition
/// One addressable subdivision of a table's data, keyed by its ordered
/// partition column values. Identity is (catName, dbName, tableName, values).
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Params>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd: Option<StorageDescriptor>,
}

impl Partition {
    /// Partition key values, position-significant; empty when unpopulated.
    #[must_use]
    pub fn key_values(&self) -> &[String] {
        self.values.as_deref().unwrap_or_default()
    }

    /// Physical location, when the storage descriptor carries one.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.sd.as_ref().and_then(|sd| sd.location.as_deref())
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.key_values().join("/"))
    }
}
