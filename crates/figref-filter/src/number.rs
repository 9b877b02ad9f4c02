//! Numbering pass.
//!
//! First of the two passes: walks the document once in document order,
//! classifies candidate figures, and populates the [`LabelRegistry`]. The
//! tree is not mutated here; numbering stays independent of any
//! target-format branching in the rendering pass.

use figref_ast::{Block, Inline, Visit, stringify, walk_inlines};

use crate::attrs::classify;
use crate::registry::LabelRegistry;

/// Number every classified, captioned figure in `blocks`.
///
/// Runs on the same mutable walk the rendering pass uses (mutating nothing)
/// so both passes observe candidates in identical pre-order: classified
/// figures are counted and skipped, their caption content not descended
/// into.
#[must_use]
pub fn number_figures(blocks: &mut [Block]) -> LabelRegistry {
    let mut registry = LabelRegistry::new();
    walk_inlines(blocks, &mut |inline| {
        if let Inline::Image(attr, caption, _) = inline {
            if let Some(figure) = classify(attr, caption) {
                registry.assign(figure.category, figure.label.as_deref(), stringify(caption));
                return Visit::Skip;
            }
        }
        Visit::Descend
    });
    registry
}
