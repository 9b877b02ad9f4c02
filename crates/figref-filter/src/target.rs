//! Output target classification.

/// The conversion target requested for the whole run.
///
/// Read once at run start and shared read-only. The only decision the core
/// takes from it is whether numbering and captioning can be delegated to the
/// downstream renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget(String);

impl OutputTarget {
    /// Target for the given format name as supplied by the host
    /// (e.g. `"latex"`, `"html"`, `"docx"`).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The format name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether the downstream renderer numbers and captions figures natively,
    /// so the filter emits thin delegation constructs instead of synthesizing
    /// caption text.
    #[must_use]
    pub fn delegates_numbering(&self) -> bool {
        matches!(self.0.as_str(), "latex" | "pdf")
    }
}

impl From<&str> for OutputTarget {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_targets() {
        assert!(OutputTarget::new("latex").delegates_numbering());
        assert!(OutputTarget::new("pdf").delegates_numbering());
    }

    #[test]
    fn test_manual_targets() {
        assert!(!OutputTarget::new("html").delegates_numbering());
        assert!(!OutputTarget::new("docx").delegates_numbering());
        assert!(!OutputTarget::new("").delegates_numbering());
    }
}
