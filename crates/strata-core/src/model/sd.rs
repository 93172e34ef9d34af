use crate::model::Params;
use serde::{Deserialize, Serialize};

///
/// FieldSchema
/// One column of a table or storage descriptor.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub col_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl FieldSchema {
    #[must_use]
    pub fn new(name: &str, col_type: &str, comment: Option<&str>) -> Self {
        Self {
            name: Some(name.to_string()),
            col_type: Some(col_type.to_string()),
            comment: comment.map(ToString::to_string),
        }
    }
}

///
/// Order
/// One sort column: name plus sort order.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

///
/// SerdeInfo
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerdeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serialization_lib: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Params>,
}

///
/// SkewedInfo
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkewedInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skewed_col_names: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skewed_col_values: Option<Vec<Vec<String>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skewed_col_value_location_maps: Option<Params>,
}

///
/// StorageDescriptor
/// Format/location/serialization metadata for one partition or table.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_buckets: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<Vec<FieldSchema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_cols: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_cols: Option<Vec<Order>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Params>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serde_info: Option<SerdeInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skewed_info: Option<SkewedInfo>,
}

impl StorageDescriptor {
    /// Copy with `location` unpopulated; the grouper compares descriptors
    /// this way because the shared group relativizes locations.
    #[must_use]
    pub fn without_location(&self) -> Self {
        Self {
            location: None,
            ..self.clone()
        }
    }
}
