use crate::model::{FieldSchema, Params, StorageDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Table
///
/// The slice of a table the engine consults: identity, the storage
/// descriptor the reference SD is built from, and the partition key schema.
/// Supplied by the table-lookup collaborator, always fully populated.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub cat_name: String,
    pub db_name: String,
    pub table_name: String,
    pub partition_keys: Vec<FieldSchema>,
    pub parameters: Params,
    pub sd: StorageDescriptor,
}

impl Table {
    /// Default location of the table's data, when set.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.sd.location.as_deref()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.cat_name, self.db_name, self.table_name)
    }
}
