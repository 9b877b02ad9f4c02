//! Reference resolution.
//!
//! Rewrites citation tokens that name a registered figure label. Tokens the
//! registry does not know are left exactly as found: other cross-reference
//! filters may run later in the pipeline and claim them.

use figref_ast::{Block, Inline, Visit, walk_inlines};

use crate::format::LabelFormatConfig;
use crate::registry::LabelRegistry;
use crate::target::OutputTarget;

/// Resolve figure references anywhere in `blocks`.
///
/// On native-delegation targets the token becomes a raw `\ref{...}`, keeping
/// prose numbers in the hands of the same renderer that numbers the
/// environments. Elsewhere it becomes the terse inline form, e.g. `Sch. 3`.
pub fn resolve_references(
    blocks: &mut [Block],
    registry: &LabelRegistry,
    formats: &LabelFormatConfig,
    target: &OutputTarget,
) {
    walk_inlines(blocks, &mut |inline| {
        let Inline::Cite(citations, _) = inline else {
            return Visit::Descend;
        };
        let Some(citation) = citations.first() else {
            return Visit::Descend;
        };
        let Some(assigned) = registry.lookup(&citation.id) else {
            return Visit::Descend;
        };

        if target.delegates_numbering() {
            Visit::Replace(vec![Inline::raw_latex(format!("\\ref{{{}}}", citation.id))])
        } else {
            let format = formats.format(assigned.category);
            Visit::Replace(vec![format.reference_inline(assigned.number)])
        }
    });
}
