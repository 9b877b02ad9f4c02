//! Pandoc-style document tree shared by the figref filter crates.
//!
//! This crate models the slice of the pandoc AST the figure filter operates
//! on: a node-tagged union of blocks and inlines, attribute sets, document
//! metadata, and a rewriting tree walk. The serde representation matches
//! pandoc's JSON encoding (`{"t": "Str", "c": "text"}`, tuple contents as
//! arrays), so a document produced by `pandoc -t json` deserializes directly.
//!
//! The filter crates never parse or serialize documents themselves; they
//! consume [`walk_inlines`] and mutate nodes through it.
//!
//! # Example
//!
//! ```
//! use figref_ast::{Block, Inline};
//!
//! let blocks = vec![Block::Para(vec![Inline::Str("Hello".to_owned())])];
//! let json = serde_json::to_string(&blocks).unwrap();
//! assert_eq!(json, r#"[{"t":"Para","c":[{"t":"Str","c":"Hello"}]}]"#);
//! ```

mod meta;
mod node;
mod walk;

pub use meta::{MetaMap, MetaValue, Pandoc};
pub use node::{Attr, Block, Citation, Inline, Target};
pub use walk::{Visit, stringify, walk_inlines};
