//! Catalog value types.
//!
//! Every field a projection can leave out is an `Option`: `None` is the
//! explicit not-populated state, `Some` of an empty collection is
//! requested-but-empty. Values are built fresh per request and never mutated
//! after construction.

pub mod partition;
pub mod sd;
pub mod table;


use derive_more::{Deref, DerefMut, IntoIterator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// re-exports
pub use partition::Partition;
pub use sd::{FieldSchema, Order, SerdeInfo, SkewedInfo, StorageDescriptor};
pub use table::Table;

///
/// Params
///
/// Parameter mapping. Backed by a `BTreeMap` so serialized output is
/// deterministic, which the cross-backend equality contract relies on.
///

#[derive(
    Clone, Debug, Default, Deref, DerefMut, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
pub struct Params(pub BTreeMap<String, String>);

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Params {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
