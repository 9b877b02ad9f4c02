//! Figure categories.

/// Kind of figure-like node, selected by class tag.
///
/// The set is closed: adding a category means extending this enum, the tag
/// mapping, and the default label prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Ordinary figure.
    Figure,
    /// Reaction scheme.
    Scheme,
    /// Chart.
    Chart,
    /// Graph.
    Graph,
}

impl Category {
    /// Every category, in a fixed order used for per-category counters.
    pub const ALL: [Self; 4] = [Self::Figure, Self::Scheme, Self::Chart, Self::Graph];

    /// Map a class tag to its category. Total over the closed tag set,
    /// `None` for anything else.
    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "figure" => Some(Self::Figure),
            "scheme" => Some(Self::Scheme),
            "chart" => Some(Self::Chart),
            "graph" => Some(Self::Graph),
            _ => None,
        }
    }

    /// The class tag, which doubles as the LaTeX environment name
    /// (`figure`, `scheme`, `chart`, `graph`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Figure => "figure",
            Self::Scheme => "scheme",
            Self::Chart => "chart",
            Self::Graph => "graph",
        }
    }

    /// Capitalized display name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Figure => "Figure",
            Self::Scheme => "Scheme",
            Self::Chart => "Chart",
            Self::Graph => "Graph",
        }
    }

    /// Default caption/reference prefix.
    #[must_use]
    pub fn default_prefix(self) -> &'static str {
        match self {
            Self::Figure => "Fig.",
            Self::Scheme => "Sch.",
            Self::Chart => "Chart",
            Self::Graph => "Graph",
        }
    }

    /// Position in [`Self::ALL`], for indexed per-category state.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Figure => 0,
            Self::Scheme => 1,
            Self::Chart => 2,
            Self::Graph => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_class_round_trips_tags() {
        for category in Category::ALL {
            assert_eq!(Category::from_class(category.tag()), Some(category));
        }
    }

    #[test]
    fn test_from_class_rejects_unknown() {
        assert_eq!(Category::from_class("diagram"), None);
        assert_eq!(Category::from_class(""), None);
        // Matching is exact, not case-folded.
        assert_eq!(Category::from_class("Scheme"), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }
}
