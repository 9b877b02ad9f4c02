//! Label display formats.
//!
//! Resolves the per-category display template once per run, before the
//! numbering pass, from built-in defaults plus the document's `fig-abbr`
//! metadata. The rendering pass and the reference resolver share the
//! resolved configuration read-only.
//!
//! Metadata shape:
//!
//! ```yaml
//! fig-abbr:
//!   scheme:
//!     prefix: "**Scheme**"   # styled inlines set the number style too
//!     suffix: ". "
//! ```

use figref_ast::{Inline, MetaMap, MetaValue, stringify};

use crate::category::Category;

/// Metadata key holding label-format overrides.
const META_KEY: &str = "fig-abbr";

/// Inline style applied to the label prefix and, by inheritance, to the
/// rendered number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// Unstyled text.
    #[default]
    Plain,
    /// Strong emphasis.
    Strong,
    /// Emphasis.
    Emph,
}

impl LabelStyle {
    fn wrap(self, text: String) -> Inline {
        match self {
            Self::Plain => Inline::Str(text),
            Self::Strong => Inline::Strong(vec![Inline::Str(text)]),
            Self::Emph => Inline::Emph(vec![Inline::Str(text)]),
        }
    }
}

/// Display template for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormat {
    /// Text placed before the number (`"Sch."`).
    pub prefix: String,
    /// Text separating the numbered label from the caption (`" "`).
    pub separator: String,
    /// Style shared by prefix and number.
    pub style: LabelStyle,
}

impl LabelFormat {
    fn default_for(category: Category) -> Self {
        Self {
            prefix: category.default_prefix().to_owned(),
            separator: " ".to_owned(),
            style: LabelStyle::Plain,
        }
    }

    /// The terse inline reference form: `"Sch. 3"`.
    #[must_use]
    pub fn reference_text(&self, number: u32) -> String {
        format!("{} {number}", self.prefix)
    }

    /// The reference form as a styled inline.
    #[must_use]
    pub fn reference_inline(&self, number: u32) -> Inline {
        self.style.wrap(self.reference_text(number))
    }

    /// The caption preamble: styled `"Sch. 2"` followed by the separator.
    #[must_use]
    pub fn caption_inlines(&self, number: u32) -> Vec<Inline> {
        let mut inlines = vec![self.reference_inline(number)];
        if !self.separator.is_empty() {
            inlines.push(Inline::Str(self.separator.clone()));
        }
        inlines
    }
}

/// Resolved per-category label formats for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormatConfig {
    formats: [LabelFormat; Category::ALL.len()],
}

impl Default for LabelFormatConfig {
    fn default() -> Self {
        Self {
            formats: Category::ALL.map(LabelFormat::default_for),
        }
    }
}

impl LabelFormatConfig {
    /// Resolve formats from document metadata, falling back to defaults for
    /// absent categories. Unusable metadata entries are ignored with a
    /// warning; resolution never fails.
    #[must_use]
    pub fn from_meta(meta: &MetaMap) -> Self {
        let mut config = Self::default();
        let Some(value) = meta.get(META_KEY) else {
            return config;
        };
        let Some(overrides) = value.as_map() else {
            tracing::warn!(key = META_KEY, "label-format metadata is not a map; ignoring");
            return config;
        };
        for (tag, entry) in overrides {
            match Category::from_class(tag) {
                Some(category) => config.apply_override(category, entry),
                None => {
                    tracing::warn!(category = %tag, "unknown category in label-format metadata");
                }
            }
        }
        config
    }

    fn apply_override(&mut self, category: Category, entry: &MetaValue) {
        let Some(fields) = entry.as_map() else {
            tracing::warn!(
                category = category.tag(),
                "label-format override is not a map; ignoring"
            );
            return;
        };
        let format = &mut self.formats[category.index()];
        if let Some(prefix) = fields.get("prefix") {
            match meta_text(prefix) {
                Some((text, style)) => {
                    format.prefix = text;
                    format.style = style;
                }
                None => tracing::warn!(category = category.tag(), "unusable prefix override"),
            }
        }
        if let Some(suffix) = fields.get("suffix") {
            match meta_text(suffix) {
                Some((text, _)) => format.separator = text,
                None => tracing::warn!(category = category.tag(), "unusable suffix override"),
            }
        }
    }

    /// The format for `category`.
    #[must_use]
    pub fn format(&self, category: Category) -> &LabelFormat {
        &self.formats[category.index()]
    }
}

/// Extract text and inherited style from a metadata value. Strings are
/// plain; inline values take the style of their first inline.
fn meta_text(value: &MetaValue) -> Option<(String, LabelStyle)> {
    match value {
        MetaValue::MetaString(text) => Some((text.clone(), LabelStyle::Plain)),
        MetaValue::MetaInlines(inlines) => {
            let style = match inlines.first() {
                Some(Inline::Strong(_)) => LabelStyle::Strong,
                Some(Inline::Emph(_)) => LabelStyle::Emph,
                _ => LabelStyle::Plain,
            };
            Some((stringify(inlines), style))
        }
        MetaValue::MetaMap(_) | MetaValue::MetaList(_) | MetaValue::MetaBool(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn meta_with(tag: &str, prefix: MetaValue, suffix: Option<MetaValue>) -> MetaMap {
        let mut fields = MetaMap::new();
        fields.insert("prefix".to_owned(), prefix);
        if let Some(suffix) = suffix {
            fields.insert("suffix".to_owned(), suffix);
        }
        let mut overrides = MetaMap::new();
        overrides.insert(tag.to_owned(), MetaValue::MetaMap(fields));
        let mut meta = MetaMap::new();
        meta.insert(META_KEY.to_owned(), MetaValue::MetaMap(overrides));
        meta
    }

    #[test]
    fn test_defaults() {
        let config = LabelFormatConfig::default();
        assert_eq!(config.format(Category::Scheme).prefix, "Sch.");
        assert_eq!(config.format(Category::Figure).prefix, "Fig.");
        assert_eq!(config.format(Category::Scheme).separator, " ");
        assert_eq!(config.format(Category::Scheme).style, LabelStyle::Plain);
    }

    #[test]
    fn test_reference_and_caption_forms() {
        let format = LabelFormatConfig::default().format(Category::Scheme).clone();
        assert_eq!(format.reference_text(3), "Sch. 3");
        assert_eq!(
            format.caption_inlines(2),
            vec![Inline::Str("Sch. 2".to_owned()), Inline::Str(" ".to_owned())]
        );
    }

    #[test]
    fn test_string_override() {
        let meta = meta_with(
            "scheme",
            MetaValue::MetaString("Scheme".to_owned()),
            Some(MetaValue::MetaString(". ".to_owned())),
        );
        let config = LabelFormatConfig::from_meta(&meta);
        let format = config.format(Category::Scheme);
        assert_eq!(format.prefix, "Scheme");
        assert_eq!(format.separator, ". ");
        assert_eq!(format.reference_text(2), "Scheme 2");
        // Other categories keep their defaults.
        assert_eq!(config.format(Category::Chart).prefix, "Chart");
    }

    #[test]
    fn test_styled_prefix_sets_number_style() {
        let meta = meta_with(
            "graph",
            MetaValue::MetaInlines(vec![Inline::Strong(vec![Inline::Str("Graph".to_owned())])]),
            None,
        );
        let config = LabelFormatConfig::from_meta(&meta);
        let format = config.format(Category::Graph);
        assert_eq!(format.style, LabelStyle::Strong);
        assert_eq!(
            format.reference_inline(4),
            Inline::Strong(vec![Inline::Str("Graph 4".to_owned())])
        );
    }

    #[test]
    fn test_emph_prefix_inherited() {
        let meta = meta_with(
            "figure",
            MetaValue::MetaInlines(vec![Inline::Emph(vec![Inline::Str("Fig".to_owned())])]),
            None,
        );
        let format = LabelFormatConfig::from_meta(&meta)
            .format(Category::Figure)
            .clone();
        assert_eq!(
            format.reference_inline(1),
            Inline::Emph(vec![Inline::Str("Fig 1".to_owned())])
        );
    }

    #[test]
    fn test_unusable_metadata_is_ignored() {
        let mut meta = MetaMap::new();
        meta.insert(META_KEY.to_owned(), MetaValue::MetaBool(true));
        assert_eq!(LabelFormatConfig::from_meta(&meta), LabelFormatConfig::default());

        let meta = meta_with("scheme", MetaValue::MetaBool(true), None);
        assert_eq!(LabelFormatConfig::from_meta(&meta), LabelFormatConfig::default());
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let meta = meta_with("table", MetaValue::MetaString("Tbl.".to_owned()), None);
        assert_eq!(LabelFormatConfig::from_meta(&meta), LabelFormatConfig::default());
    }

    #[test]
    fn test_empty_separator_emits_no_inline() {
        let meta = meta_with(
            "scheme",
            MetaValue::MetaString("Sch.".to_owned()),
            Some(MetaValue::MetaString(String::new())),
        );
        let format = LabelFormatConfig::from_meta(&meta)
            .format(Category::Scheme)
            .clone();
        assert_eq!(format.caption_inlines(1), vec![Inline::Str("Sch. 1".to_owned())]);
    }
}
