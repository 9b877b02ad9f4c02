//! Attribute extraction for figure-like nodes.
//!
//! Turns a node's raw attribute set into a typed [`FigureAttrs`] descriptor.
//! Extraction is a pure function of the attributes: option values are kept
//! as raw strings, and anything malformed is passed along for the downstream
//! renderer to interpret.

use figref_ast::{Attr, Inline, stringify};

use crate::category::Category;

/// Key selecting a wrap width (enables text wrapping around the figure).
pub const WRAP_WIDTH: &str = "wwidth";
/// Key selecting the wrap position (defaults to `r` at render time).
pub const WRAP_POS: &str = "wpos";
/// Key selecting a float placement qualifier.
pub const FLOAT_POS: &str = "lpos";
/// Key selecting an environment-name suffix.
pub const ENV_SUFFIX: &str = "lts";

/// Keys stripped from figures on manual-rendering targets, where they carry
/// no meaning.
pub(crate) const PLACEMENT_KEYS: [&str; 4] = [WRAP_WIDTH, WRAP_POS, FLOAT_POS, ENV_SUFFIX];

/// Typed descriptor for a classified figure-like node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureAttrs {
    /// Category selected by the first matching class tag.
    pub category: Category,
    /// Node identifier; `None` means the node is numbered but cannot be
    /// referenced.
    pub label: Option<String>,
    /// Wrap width, verbatim.
    pub wrap_width: Option<String>,
    /// Wrap position, verbatim.
    pub wrap_pos: Option<String>,
    /// Float placement, verbatim.
    pub float_pos: Option<String>,
    /// Environment-name suffix, verbatim.
    pub env_suffix: Option<String>,
}

impl FigureAttrs {
    /// Extract a descriptor from a raw attribute set.
    ///
    /// Returns `None` when no class names a known category. When several
    /// classes do, the first in declared order wins. Unknown keys are
    /// ignored.
    #[must_use]
    pub fn from_attr(attr: &Attr) -> Option<Self> {
        let category = attr
            .classes()
            .iter()
            .find_map(|class| Category::from_class(class))?;

        let label = match attr.id() {
            "" => None,
            id => Some(id.to_owned()),
        };

        Some(Self {
            category,
            label,
            wrap_width: attr.get(WRAP_WIDTH).map(ToOwned::to_owned),
            wrap_pos: attr.get(WRAP_POS).map(ToOwned::to_owned),
            float_pos: attr.get(FLOAT_POS).map(ToOwned::to_owned),
            env_suffix: attr.get(ENV_SUFFIX).map(ToOwned::to_owned),
        })
    }
}

/// Candidate check shared by the numbering and rendering passes: a node
/// participates only if it classifies *and* carries a non-blank caption.
/// Uncaptioned figures are invisible to the numbering system.
#[must_use]
pub(crate) fn classify(attr: &Attr, caption: &[Inline]) -> Option<FigureAttrs> {
    if stringify(caption).trim().is_empty() {
        return None;
    }
    FigureAttrs::from_attr(attr)
}
