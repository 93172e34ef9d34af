//! The catalog's partition surface, declared field by field.
//!
//! Idents are the wire names callers use in projection paths
//! (`sd.serdeInfo.serializationLib`, `sd.cols.name`, ...).

use crate::node::{FieldKind, FieldNode, StructSchema};

/// Element type of `sd.cols`.
pub static FIELD_SCHEMA: StructSchema = StructSchema {
    name: "FieldSchema",
    fields: &[
        FieldNode {
            ident: "name",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "type",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "comment",
            kind: FieldKind::Scalar,
        },
    ],
};

/// Element type of `sd.sortCols`.
pub static ORDER: StructSchema = StructSchema {
    name: "Order",
    fields: &[
        FieldNode {
            ident: "col",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "order",
            kind: FieldKind::Scalar,
        },
    ],
};

pub static SERDE_INFO: StructSchema = StructSchema {
    name: "SerdeInfo",
    fields: &[
        FieldNode {
            ident: "name",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "serializationLib",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "parameters",
            kind: FieldKind::Map,
        },
    ],
};

pub static SKEWED_INFO: StructSchema = StructSchema {
    name: "SkewedInfo",
    fields: &[
        FieldNode {
            ident: "skewedColNames",
            kind: FieldKind::ScalarList,
        },
        // List-of-list-of-string; flat as far as the path language goes.
        FieldNode {
            ident: "skewedColValues",
            kind: FieldKind::ScalarList,
        },
        FieldNode {
            ident: "skewedColValueLocationMaps",
            kind: FieldKind::Map,
        },
    ],
};

pub static STORAGE_DESCRIPTOR: StructSchema = StructSchema {
    name: "StorageDescriptor",
    fields: &[
        FieldNode {
            ident: "location",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "inputFormat",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "outputFormat",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "compressed",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "numBuckets",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "cols",
            kind: FieldKind::StructList(&FIELD_SCHEMA),
        },
        FieldNode {
            ident: "bucketCols",
            kind: FieldKind::ScalarList,
        },
        FieldNode {
            ident: "sortCols",
            kind: FieldKind::StructList(&ORDER),
        },
        FieldNode {
            ident: "parameters",
            kind: FieldKind::Map,
        },
        FieldNode {
            ident: "serdeInfo",
            kind: FieldKind::Struct(&SERDE_INFO),
        },
        FieldNode {
            ident: "skewedInfo",
            kind: FieldKind::Struct(&SKEWED_INFO),
        },
    ],
};

/// Root of the path language.
pub static PARTITION: StructSchema = StructSchema {
    name: "Partition",
    fields: &[
        FieldNode {
            ident: "catName",
            kind: FieldKind::Virtual,
        },
        FieldNode {
            ident: "dbName",
            kind: FieldKind::Virtual,
        },
        FieldNode {
            ident: "tableName",
            kind: FieldKind::Virtual,
        },
        FieldNode {
            ident: "values",
            kind: FieldKind::ScalarList,
        },
        FieldNode {
            ident: "parameters",
            kind: FieldKind::Map,
        },
        FieldNode {
            ident: "createTime",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "lastAccessTime",
            kind: FieldKind::Scalar,
        },
        FieldNode {
            ident: "sd",
            kind: FieldKind::Struct(&STORAGE_DESCRIPTOR),
        },
    ],
};
