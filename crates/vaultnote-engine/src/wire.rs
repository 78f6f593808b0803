//! # Wire Format
//!
//! JSON codec for [`BlockDocument`] in the block editor's shape:
//!
//! ```json
//! { "time": 1700000000000, "version": "2.28.2",
//!   "blocks": [{ "type": "header", "data": { "text": "Title", "level": 1 } }] }
//! ```
//!
//! Decoding is forward compatible. A block whose `type` is unknown, or whose
//! `data` does not fit a known shape, is dropped rather than failing the
//! whole document.

use serde::{Deserialize, Deserializer, de::IgnoredAny};

use crate::{
    error::ConvertError,
    models::{Block, BlockDocument},
    serialize::Serializer,
};

#[derive(Deserialize)]
#[serde(untagged)]
enum WireBlock {
    Known(Block),
    Unsupported {
        #[serde(rename = "type", default)]
        kind: Option<String>,
    },
    Malformed(IgnoredAny),
}

/// Deserializes a block array, skipping entries that are not a known [`Block`].
pub(crate) fn known_blocks<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<WireBlock>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|b| match b {
            WireBlock::Known(block) => Some(block),
            WireBlock::Unsupported { kind } => {
                log::debug!("skipping unsupported block type {kind:?}");
                None
            }
            WireBlock::Malformed(_) => {
                log::debug!("skipping malformed block entry");
                None
            }
        })
        .collect())
}

impl BlockDocument {
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConvertError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConvertError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Decodes an editor JSON document and renders it to Markdown in one step.
pub fn render_json(json: &str, serializer: &Serializer) -> Result<String, ConvertError> {
    let doc = BlockDocument::from_json(json)?;
    Ok(serializer.serialize(&doc))
}
