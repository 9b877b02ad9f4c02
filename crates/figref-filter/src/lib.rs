//! Typed figure numbering and cross-reference engine.
//!
//! Classifies figure-like images into typed categories (figure, scheme,
//! chart, graph), numbers them per category in document order, resolves
//! `@label` citation tokens against those numbers, and renders
//! captions/placement for the requested output target.
//!
//! # Architecture
//!
//! A run is two strictly ordered passes over the document tree, with the
//! [`LabelRegistry`] as the only handoff between them:
//!
//! 1. **Numbering** ([`number_figures`]): one pre-order traversal that
//!    classifies candidates and assigns per-category sequence numbers. No
//!    tree mutation. Completing this pass first is what makes forward
//!    references work.
//! 2. **Rendering** ([`render_figures`]) and **resolution**
//!    ([`resolve_references`]): rewrite figures and reference tokens against
//!    the now-frozen registry. On `latex`/`pdf` targets both delegate to the
//!    downstream renderer (`\begin{scheme}`/`\label`/`\ref`); on every other
//!    target the numbered caption and reference text are synthesized here.
//!
//! All run state ([`LabelRegistry`], [`LabelFormatConfig`]) is constructed
//! per [`apply`] call; nothing is shared between runs.
//!
//! # Example
//!
//! ```
//! use figref_ast::{Attr, Block, Inline, Pandoc, Target};
//! use figref_filter::{OutputTarget, apply};
//!
//! let mut doc = Pandoc::from_blocks(vec![Block::Para(vec![Inline::Image(
//!     Attr("sch-a".to_owned(), vec!["scheme".to_owned()], Vec::new()),
//!     vec![Inline::Str("Synthesis".to_owned())],
//!     Target("mol.png".to_owned(), String::new()),
//! )])]);
//!
//! let registry = apply(&mut doc, &OutputTarget::new("html"));
//! assert_eq!(registry.lookup("sch-a").unwrap().number, 1);
//! ```

mod attrs;
mod category;
mod format;
mod number;
mod registry;
mod render;
mod resolve;
mod target;

pub use attrs::{ENV_SUFFIX, FLOAT_POS, FigureAttrs, WRAP_POS, WRAP_WIDTH};
pub use category::Category;
pub use format::{LabelFormat, LabelFormatConfig, LabelStyle};
pub use number::number_figures;
pub use registry::{Assignment, LabelConflict, LabelRegistry};
pub use render::render_figures;
pub use resolve::resolve_references;
pub use target::OutputTarget;

use figref_ast::Pandoc;

/// Run the whole filter over a document: resolve label formats from
/// metadata, number figures, render them for `target`, and resolve
/// references.
///
/// The tree is mutated in place. The returned registry is frozen; hosts can
/// inspect assigned numbers and any label conflicts. No input makes the run
/// fail: unclassifiable nodes and unresolvable references are left alone.
pub fn apply(doc: &mut Pandoc, target: &OutputTarget) -> LabelRegistry {
    let formats = LabelFormatConfig::from_meta(&doc.meta);
    let registry = number_figures(&mut doc.blocks);
    render_figures(&mut doc.blocks, &registry, &formats, target);
    resolve_references(&mut doc.blocks, &registry, &formats, target);
    registry
}
