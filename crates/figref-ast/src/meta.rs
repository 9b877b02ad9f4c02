//! Document metadata and the top-level document value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::node::{Block, Inline};

/// Top-level metadata map, keyed by metadata field name.
pub type MetaMap = BTreeMap<String, MetaValue>;

/// Metadata value, mirroring pandoc's `MetaValue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum MetaValue {
    /// Nested map of metadata fields.
    MetaMap(MetaMap),
    /// List of metadata values.
    MetaList(Vec<MetaValue>),
    /// Boolean flag.
    MetaBool(bool),
    /// Bare string.
    MetaString(String),
    /// Formatted inline content.
    MetaInlines(Vec<Inline>),
}

impl MetaValue {
    /// The nested map, if this value is a `MetaMap`.
    #[must_use]
    pub fn as_map(&self) -> Option<&MetaMap> {
        match self {
            Self::MetaMap(map) => Some(map),
            _ => None,
        }
    }
}

/// A parsed document: API version marker, metadata, and block content.
///
/// Matches the JSON emitted by `pandoc -t json`, so documents stream through
/// the filter without a separate conversion step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pandoc {
    /// Version of the pandoc AST the document was encoded with.
    #[serde(rename = "pandoc-api-version")]
    pub api_version: Vec<u32>,
    /// Document metadata.
    pub meta: MetaMap,
    /// Document content.
    pub blocks: Vec<Block>,
}

impl Pandoc {
    /// Document with the given blocks and empty metadata.
    #[must_use]
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            api_version: vec![1, 23, 1],
            meta: MetaMap::new(),
            blocks,
        }
    }
}
