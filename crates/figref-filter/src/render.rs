//! Rendering pass.
//!
//! Second traversal: rewrites each classified figure according to the output
//! target. Native-delegation targets get thin LaTeX constructs and keep
//! numbering downstream; every other target gets caption text synthesized
//! from the registry numbers.

use figref_ast::{Block, Inline, Target, Visit, walk_inlines};

use crate::attrs::{FigureAttrs, PLACEMENT_KEYS, classify};
use crate::format::LabelFormatConfig;
use crate::registry::LabelRegistry;
use crate::target::OutputTarget;

/// Rewrite every classified figure in `blocks` for the given target.
///
/// Assignments are consumed from the registry in traversal order, so the
/// numbers displayed here are exactly the ones the numbering pass recorded.
pub fn render_figures(
    blocks: &mut [Block],
    registry: &LabelRegistry,
    formats: &LabelFormatConfig,
    target: &OutputTarget,
) {
    let mut cursor = 0;
    walk_inlines(blocks, &mut |inline| {
        let Inline::Image(attr, caption, image_target) = inline else {
            return Visit::Descend;
        };
        let Some(figure) = classify(attr, caption) else {
            return Visit::Descend;
        };
        let Some(assigned) = registry.assignment(cursor) else {
            // Registry exhausted; leave the node untouched rather than guess.
            return Visit::Skip;
        };
        cursor += 1;

        if target.delegates_numbering() {
            return Visit::Replace(latex_figure(&figure, caption, image_target));
        }

        let preamble = formats.format(figure.category).caption_inlines(assigned.number);
        caption.splice(0..0, preamble);
        attr.remove_keys(&PLACEMENT_KEYS);
        Visit::Skip
    });
}

/// Build the raw LaTeX construct for one figure: a `wrapfloat` when a wrap
/// width is present, a placement-qualified environment when only a float
/// placement is, the plain environment otherwise. Option values pass through
/// verbatim; the LaTeX toolchain owns their validation.
fn latex_figure(figure: &FigureAttrs, caption: &[Inline], image_target: &Target) -> Vec<Inline> {
    let env = match &figure.env_suffix {
        Some(suffix) => format!("{}{suffix}", figure.category.tag()),
        None => figure.category.tag().to_owned(),
    };
    let url = image_target.url();

    let (open, close_env) = if let Some(width) = &figure.wrap_width {
        let pos = figure.wrap_pos.as_deref().unwrap_or("r");
        (
            format!(
                "\n\\begin{{wrapfloat}}{{{env}}}{{{pos}}}{{{width}}}\n\\centering\n\\includegraphics{{{url}}}\n"
            ),
            "wrapfloat".to_owned(),
        )
    } else if let Some(pos) = &figure.float_pos {
        (
            format!("\n\\begin{{{env}}}[{pos}]\n\\centering\n\\includegraphics{{{url}}}\n"),
            env.clone(),
        )
    } else {
        (
            format!("\n\\begin{{{env}}}\n\\centering\n\\includegraphics{{{url}}}\n"),
            env.clone(),
        )
    };

    let mut close = String::from("}");
    if let Some(label) = &figure.label {
        close.push_str(&format!("\n\\label{{{label}}}"));
    }
    close.push_str(&format!("\n\\end{{{close_env}}}\n"));

    let mut out = Vec::with_capacity(caption.len() + 3);
    out.push(Inline::raw_latex(open));
    out.push(Inline::raw_latex("\\caption{"));
    out.extend_from_slice(caption);
    out.push(Inline::raw_latex(close));
    out
}
