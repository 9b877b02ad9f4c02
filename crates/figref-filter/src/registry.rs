//! Run-scoped label registry.
//!
//! Owned and populated by the numbering pass, then read-only for the rest of
//! the run. Assignments are stored in traversal order so the rendering pass
//! can consume them in the order they were made; labeled assignments are
//! additionally indexed for reference lookup.

use std::collections::HashMap;
use std::fmt;

use crate::category::Category;

/// One numbered figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Label id, when the node is referenceable.
    pub label: Option<String>,
    /// Category the number was assigned under.
    pub category: Category,
    /// Sequence number within the category, starting at 1.
    pub number: u32,
    /// Caption content flattened to plain text.
    pub caption: String,
}

/// A label id registered more than once. The later assignment wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConflict {
    /// The duplicated label id.
    pub label: String,
    /// Category and number of the overwritten assignment.
    pub earlier: (Category, u32),
    /// Category and number of the winning assignment.
    pub later: (Category, u32),
}

impl fmt::Display for LabelConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "label '{}' defined more than once; {} {} replaces {} {}",
            self.label,
            self.later.0.display_name(),
            self.later.1,
            self.earlier.0.display_name(),
            self.earlier.1,
        )
    }
}

/// Registry of numbered figures for one filter run.
#[derive(Debug, Default)]
pub struct LabelRegistry {
    assignments: Vec<Assignment>,
    by_label: HashMap<String, usize>,
    counters: [u32; Category::ALL.len()],
    conflicts: Vec<LabelConflict>,
}

impl LabelRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next number in `category` and record the assignment.
    ///
    /// Returns the assigned number. A duplicate label overwrites the earlier
    /// registration and records a conflict; the run continues.
    pub(crate) fn assign(
        &mut self,
        category: Category,
        label: Option<&str>,
        caption: String,
    ) -> u32 {
        self.counters[category.index()] += 1;
        let number = self.counters[category.index()];
        let index = self.assignments.len();

        if let Some(label) = label {
            if let Some(&previous) = self.by_label.get(label) {
                let earlier = (self.assignments[previous].category, self.assignments[previous].number);
                tracing::warn!(
                    label = %label,
                    earlier_category = earlier.0.display_name(),
                    earlier_number = earlier.1,
                    "duplicate figure label; later definition wins"
                );
                self.conflicts.push(LabelConflict {
                    label: label.to_owned(),
                    earlier,
                    later: (category, number),
                });
            }
            self.by_label.insert(label.to_owned(), index);
        }

        self.assignments.push(Assignment {
            label: label.map(ToOwned::to_owned),
            category,
            number,
            caption,
        });
        number
    }

    /// Look up the assignment a label currently resolves to.
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<&Assignment> {
        self.by_label
            .get(label)
            .map(|&index| &self.assignments[index])
    }

    /// The assignment made at `index` in traversal order.
    #[must_use]
    pub(crate) fn assignment(&self, index: usize) -> Option<&Assignment> {
        self.assignments.get(index)
    }

    /// All assignments, in traversal order.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Conflicts recorded while populating the registry.
    #[must_use]
    pub fn conflicts(&self) -> &[LabelConflict] {
        &self.conflicts
    }

    /// Number of figures counted in `category`.
    #[must_use]
    pub fn count(&self, category: Category) -> u32 {
        self.counters[category.index()]
    }

    /// Total number of assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether any figure was numbered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
