//! Block and inline node types.
//!
//! A subset of the pandoc AST: the block and inline constructors the figure
//! filter traverses, plus the attribute/target/citation payloads they carry.
//! Serialization follows pandoc's JSON shape, with `Attr` and `Target`
//! encoding as positional arrays.

use serde::{Deserialize, Serialize};

/// Attribute set attached to a node: `(identifier, classes, key-value pairs)`.
///
/// Encodes as `["id", ["class", ...], [["key", "value"], ...]]`, matching
/// pandoc's `Attr`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr(pub String, pub Vec<String>, pub Vec<(String, String)>);

impl Attr {
    /// The node identifier (empty string when absent).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }

    /// The class list, in declared order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.1
    }

    /// Look up a key-value attribute. First declaration wins.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.2
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove every key-value attribute whose key appears in `keys`.
    pub fn remove_keys(&mut self, keys: &[&str]) {
        self.2.retain(|(k, _)| !keys.contains(&k.as_str()));
    }
}

/// Link or image target: `(url, title)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target(pub String, pub String);

impl Target {
    /// The target URL or file path.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0
    }
}

/// A single citation inside a [`Inline::Cite`] node.
///
/// Only the fields the filter reads or must round-trip are modeled; pandoc's
/// bookkeeping fields (mode, note number, hash) are ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// The cited identifier (`@id` without the marker).
    #[serde(rename = "citationId")]
    pub id: String,
    /// Inlines preceding the citation.
    #[serde(rename = "citationPrefix", default)]
    pub prefix: Vec<Inline>,
    /// Inlines following the citation.
    #[serde(rename = "citationSuffix", default)]
    pub suffix: Vec<Inline>,
}

impl Citation {
    /// Citation referring to `id` with no prefix or suffix.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prefix: Vec::new(),
            suffix: Vec::new(),
        }
    }
}

/// Inline-level node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Inline {
    /// Literal text.
    Str(String),
    /// Emphasized content.
    Emph(Vec<Inline>),
    /// Strongly emphasized content.
    Strong(Vec<Inline>),
    /// Inline code.
    Code(Attr, String),
    /// Inter-word space.
    Space,
    /// Soft line break.
    SoftBreak,
    /// Hard line break.
    LineBreak,
    /// Hyperlink with inline content.
    Link(Attr, Vec<Inline>, Target),
    /// Image with attribute set, caption inlines, and target.
    Image(Attr, Vec<Inline>, Target),
    /// Citation token: structured citations plus the rendered fallback text.
    Cite(Vec<Citation>, Vec<Inline>),
    /// Raw content in a named format, passed through untouched by writers
    /// that do not understand it.
    RawInline(String, String),
    /// Attributed inline container.
    Span(Attr, Vec<Inline>),
}

impl Inline {
    /// Raw LaTeX passthrough inline.
    #[must_use]
    pub fn raw_latex(content: impl Into<String>) -> Self {
        Self::RawInline("latex".to_owned(), content.into())
    }
}

/// Block-level node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Block {
    /// Plain text block (no paragraph spacing).
    Plain(Vec<Inline>),
    /// Paragraph.
    Para(Vec<Inline>),
    /// Section header: level, attributes, content.
    Header(u32, Attr, Vec<Inline>),
    /// Fenced or indented code block.
    CodeBlock(Attr, String),
    /// Raw content block in a named format.
    RawBlock(String, String),
    /// Block quotation.
    BlockQuote(Vec<Block>),
    /// Attributed block container.
    Div(Attr, Vec<Block>),
    /// Bullet list of item block sequences.
    BulletList(Vec<Vec<Block>>),
    /// Horizontal rule.
    HorizontalRule,
}
