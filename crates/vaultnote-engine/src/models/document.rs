use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::block::Block;

/// Data format tag stamped on every parsed document.
pub const FORMAT_VERSION: &str = "2.28.2";

/// The structured form exchanged with the block editor.
///
/// `time` and `version` are opaque pass-through metadata; only `blocks`
/// is interpreted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDocument {
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub time: i64,
    #[serde(deserialize_with = "crate::wire::known_blocks")]
    pub blocks: Vec<Block>,
    #[serde(default = "default_version")]
    pub version: String,
}

impl BlockDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self::with_time(blocks, now_millis())
    }

    pub fn with_time(blocks: Vec<Block>, time: i64) -> Self {
        Self {
            time,
            blocks,
            version: FORMAT_VERSION.to_string(),
        }
    }
}

fn default_version() -> String {
    FORMAT_VERSION.to_string()
}

pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
