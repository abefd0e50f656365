//! Landing-page record of completed uploads.

use crate::RECENT_FILES_SHOWN;

/// Append-only list of file names reported by the uploader's completion
/// callback. Removal happens only in the staging area, never here.
#[derive(Debug, Clone, Default)]
pub struct DocumentLibrary {
    names: Vec<String>,
}

impl DocumentLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The most recently added names (up to [`RECENT_FILES_SHOWN`]), oldest
    /// first.
    pub fn recent(&self) -> &[String] {
        let start = self.names.len().saturating_sub(RECENT_FILES_SHOWN);
        &self.names[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_shows_last_three_in_order() {
        let mut library = DocumentLibrary::new();
        for name in ["a.pdf", "b.txt", "c.md", "d.pdf"] {
            library.record(name);
        }
        assert_eq!(library.len(), 4);
        assert_eq!(library.recent(), ["b.txt", "c.md", "d.pdf"]);
    }

    #[test]
    fn test_recent_on_short_list() {
        let mut library = DocumentLibrary::new();
        assert!(library.is_empty());
        assert!(library.recent().is_empty());

        library.record("only.pdf");
        assert_eq!(library.recent(), ["only.pdf"]);
    }
}
