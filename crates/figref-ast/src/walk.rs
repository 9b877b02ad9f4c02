//! Rewriting tree walk over inline content.
//!
//! Every traversal the filter performs runs through [`walk_inlines`], so all
//! passes observe nodes in the same pre-order regardless of whether they
//! mutate anything.

use crate::node::{Block, Inline};

/// Visitor decision for one inline node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    /// Keep the node and descend into its inline children.
    Descend,
    /// Keep the node but do not enter its children.
    Skip,
    /// Replace the node with the given sequence. Replacements are spliced in
    /// place and not revisited.
    Replace(Vec<Inline>),
}

/// Walk every inline in a block forest in pre-order, applying `f` to each.
///
/// # Example
///
/// ```
/// use figref_ast::{Block, Inline, Visit, walk_inlines};
///
/// let mut blocks = vec![Block::Para(vec![Inline::Str("x".to_owned())])];
/// walk_inlines(&mut blocks, &mut |inline| match inline {
///     Inline::Str(s) if s == "x" => Visit::Replace(vec![Inline::Str("y".to_owned())]),
///     _ => Visit::Descend,
/// });
/// assert_eq!(blocks, vec![Block::Para(vec![Inline::Str("y".to_owned())])]);
/// ```
pub fn walk_inlines<F>(blocks: &mut [Block], f: &mut F)
where
    F: FnMut(&mut Inline) -> Visit,
{
    for block in blocks {
        walk_block(block, f);
    }
}

fn walk_block<F>(block: &mut Block, f: &mut F)
where
    F: FnMut(&mut Inline) -> Visit,
{
    match block {
        Block::Plain(inlines) | Block::Para(inlines) | Block::Header(_, _, inlines) => {
            walk_inline_vec(inlines, f);
        }
        Block::BlockQuote(blocks) | Block::Div(_, blocks) => walk_inlines(blocks, f),
        Block::BulletList(items) => {
            for item in items {
                walk_inlines(item, f);
            }
        }
        Block::CodeBlock(_, _) | Block::RawBlock(_, _) | Block::HorizontalRule => {}
    }
}

fn walk_inline_vec<F>(inlines: &mut Vec<Inline>, f: &mut F)
where
    F: FnMut(&mut Inline) -> Visit,
{
    let mut i = 0;
    while i < inlines.len() {
        match f(&mut inlines[i]) {
            Visit::Descend => {
                match &mut inlines[i] {
                    Inline::Emph(children)
                    | Inline::Strong(children)
                    | Inline::Span(_, children)
                    | Inline::Link(_, children, _)
                    | Inline::Image(_, children, _)
                    | Inline::Cite(_, children) => walk_inline_vec(children, f),
                    Inline::Str(_)
                    | Inline::Code(_, _)
                    | Inline::Space
                    | Inline::SoftBreak
                    | Inline::LineBreak
                    | Inline::RawInline(_, _) => {}
                }
                i += 1;
            }
            Visit::Skip => i += 1,
            Visit::Replace(items) => {
                let advance = items.len();
                inlines.splice(i..=i, items);
                i += advance;
            }
        }
    }
}

/// Flatten inline content to plain text, in the manner of pandoc's
/// `stringify`: spaces and breaks become single spaces, formatting is
/// dropped, raw content is omitted.
#[must_use]
pub fn stringify(inlines: &[Inline]) -> String {
    let mut out = String::new();
    push_text(inlines, &mut out);
    out
}

fn push_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Str(s) | Inline::Code(_, s) => out.push_str(s),
            Inline::Space | Inline::SoftBreak | Inline::LineBreak => out.push(' '),
            Inline::Emph(children)
            | Inline::Strong(children)
            | Inline::Span(_, children)
            | Inline::Link(_, children, _)
            | Inline::Image(_, children, _)
            | Inline::Cite(_, children) => push_text(children, out),
            Inline::RawInline(_, _) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Attr, Target};
    use pretty_assertions::assert_eq;

    fn para(inlines: Vec<Inline>) -> Vec<Block> {
        vec![Block::Para(inlines)]
    }

    #[test]
    fn test_replace_splices_sequence() {
        let mut blocks = para(vec![
            Inline::Str("a".to_owned()),
            Inline::Str("b".to_owned()),
        ]);
        walk_inlines(&mut blocks, &mut |inline| match inline {
            Inline::Str(s) if s == "a" => Visit::Replace(vec![
                Inline::Str("x".to_owned()),
                Inline::Space,
                Inline::Str("y".to_owned()),
            ]),
            _ => Visit::Descend,
        });
        assert_eq!(
            blocks,
            para(vec![
                Inline::Str("x".to_owned()),
                Inline::Space,
                Inline::Str("y".to_owned()),
                Inline::Str("b".to_owned()),
            ])
        );
    }

    #[test]
    fn test_replacement_not_revisited() {
        let mut visits = 0;
        let mut blocks = para(vec![Inline::Str("a".to_owned())]);
        walk_inlines(&mut blocks, &mut |inline| {
            if let Inline::Str(_) = inline {
                visits += 1;
                return Visit::Replace(vec![Inline::Str("again".to_owned())]);
            }
            Visit::Descend
        });
        assert_eq!(visits, 1);
    }

    #[test]
    fn test_replace_with_empty_removes_node() {
        let mut blocks = para(vec![
            Inline::Str("keep".to_owned()),
            Inline::Space,
            Inline::Str("drop".to_owned()),
        ]);
        walk_inlines(&mut blocks, &mut |inline| match inline {
            Inline::Str(s) if s == "drop" => Visit::Replace(Vec::new()),
            _ => Visit::Descend,
        });
        assert_eq!(
            blocks,
            para(vec![Inline::Str("keep".to_owned()), Inline::Space])
        );
    }

    #[test]
    fn test_skip_does_not_descend() {
        let mut seen = Vec::new();
        let mut blocks = para(vec![Inline::Image(
            Attr::default(),
            vec![Inline::Str("caption".to_owned())],
            Target::default(),
        )]);
        walk_inlines(&mut blocks, &mut |inline| {
            seen.push(format!("{inline:?}"));
            match inline {
                Inline::Image(_, _, _) => Visit::Skip,
                _ => Visit::Descend,
            }
        });
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_descend_reaches_nested_inlines() {
        let mut seen = Vec::new();
        let mut blocks = vec![Block::BlockQuote(vec![Block::Para(vec![Inline::Emph(
            vec![Inline::Str("deep".to_owned())],
        )])])];
        walk_inlines(&mut blocks, &mut |inline| {
            if let Inline::Str(s) = inline {
                seen.push(s.clone());
            }
            Visit::Descend
        });
        assert_eq!(seen, vec!["deep".to_owned()]);
    }

    #[test]
    fn test_walk_covers_list_items() {
        let mut count = 0;
        let mut blocks = vec![Block::BulletList(vec![
            vec![Block::Plain(vec![Inline::Str("one".to_owned())])],
            vec![Block::Plain(vec![Inline::Str("two".to_owned())])],
        ])];
        walk_inlines(&mut blocks, &mut |_| {
            count += 1;
            Visit::Descend
        });
        assert_eq!(count, 2);
    }

    #[test]
    fn test_stringify() {
        let inlines = vec![
            Inline::Str("A".to_owned()),
            Inline::Space,
            Inline::Strong(vec![Inline::Str("bold".to_owned())]),
            Inline::SoftBreak,
            Inline::Code(Attr::default(), "x+y".to_owned()),
            Inline::RawInline("latex".to_owned(), "\\relax".to_owned()),
        ];
        assert_eq!(stringify(&inlines), "A bold x+y");
    }

    #[test]
    fn test_stringify_whitespace_only() {
        let inlines = vec![Inline::Space, Inline::SoftBreak];
        assert!(stringify(&inlines).trim().is_empty());
    }
}
