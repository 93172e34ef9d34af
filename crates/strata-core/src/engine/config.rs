use serde::{Deserialize, Serialize};

///
/// EngineConfig
///
/// Consumed, not owned: the toggle only selects which retrieval path
/// supplies raw partitions. Projected output must be identical either way.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Use the native/direct row path; `false` falls back to the generic
    /// object-mapping path.
    pub try_direct_retrieval: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            try_direct_retrieval: true,
        }
    }
}
