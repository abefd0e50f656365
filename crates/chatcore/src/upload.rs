//! Staged upload queue with simulated ingestion.
//!
//! The queue itself is synchronous; the frontend drives the per-file latency
//! loop and calls back into [`UploadQueue::finish`] once the batch is done.

use serde::{Deserialize, Serialize};

/// Document types the knowledge base accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Pdf,
    Txt,
    Md,
}

impl DocumentKind {
    /// Classifies a file by the final dot-delimited suffix of its name,
    /// case-insensitively. Names without a dot (or with an empty suffix)
    /// yield `None`.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::Txt),
            "md" => Some(DocumentKind::Md),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Txt => "txt",
            DocumentKind::Md => "md",
        }
    }
}

/// A file the user has selected but not yet confirmed for upload.
/// Lives only in the queue; dropped on removal or after the upload loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCandidate {
    pub name: String,
    pub size_bytes: u64,
    pub kind: DocumentKind,
}

/// Result of one `submit` batch. A non-empty `rejected` list maps to exactly
/// one warning notification per call, not one per file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub accepted: usize,
    pub rejected: Vec<String>,
}

/// Staging area for the uploader.
///
/// States: Idle (staged empty) → Staged → Uploading → Idle. Uploading is
/// entered only through [`UploadQueue::begin`] and left only through
/// [`UploadQueue::finish`]; there is no pause or abort.
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    staged: Vec<UploadCandidate>,
    uploading: bool,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staged(&self) -> &[UploadCandidate] {
        &self.staged
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Stages every supported file in submission order. No de-duplication by
    /// name: two files called the same coexist as separate entries. Names of
    /// unsupported files come back in the outcome. No-op while uploading.
    pub fn submit<I>(&mut self, files: I) -> SubmitOutcome
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut outcome = SubmitOutcome::default();
        if self.uploading {
            return outcome;
        }
        for (name, size_bytes) in files {
            match DocumentKind::from_file_name(&name) {
                Some(kind) => {
                    self.staged.push(UploadCandidate {
                        name,
                        size_bytes,
                        kind,
                    });
                    outcome.accepted += 1;
                }
                None => outcome.rejected.push(name),
            }
        }
        outcome
    }

    /// Removes the candidate at `index`. Out of range is a silent no-op.
    pub fn remove(&mut self, index: usize) {
        if self.uploading || index >= self.staged.len() {
            return;
        }
        self.staged.remove(index);
    }

    /// Enters the uploading state and hands the candidates back, in staging
    /// order, for the caller's strictly sequential loop. `None` when nothing
    /// is staged or an upload is already running.
    pub fn begin(&mut self) -> Option<Vec<UploadCandidate>> {
        if self.uploading || self.staged.is_empty() {
            return None;
        }
        self.uploading = true;
        Some(self.staged.clone())
    }

    /// Leaves the uploading state, dropping the staged list.
    pub fn finish(&mut self) {
        self.staged.clear();
        self.uploading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> (String, u64) {
        (name.to_string(), 1024)
    }

    #[test]
    fn test_classifies_supported_extensions_case_insensitively() {
        assert_eq!(
            DocumentKind::from_file_name("report.PDF"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_file_name("notes.txt"),
            Some(DocumentKind::Txt)
        );
        assert_eq!(
            DocumentKind::from_file_name("readme.Md"),
            Some(DocumentKind::Md)
        );
        assert_eq!(DocumentKind::from_file_name("archive.docx"), None);
        assert_eq!(DocumentKind::from_file_name("no_extension"), None);
        assert_eq!(DocumentKind::from_file_name("trailing."), None);
    }

    #[test]
    fn test_submit_stages_valid_files_and_collects_rejects() {
        let mut queue = UploadQueue::new();
        let outcome = queue.submit(vec![
            file("a.pdf"),
            file("b.exe"),
            file("c.txt"),
        ]);
        assert_eq!(outcome.accepted, 2);
        assert_eq!(outcome.rejected, vec!["b.exe".to_string()]);
        assert_eq!(queue.staged().len(), 2);
        assert_eq!(queue.staged()[0].kind.extension(), "pdf");
        assert_eq!(queue.staged()[1].kind.extension(), "txt");
        assert!(queue
            .staged()
            .iter()
            .all(|c| DocumentKind::from_file_name(&c.name).is_some()));
    }

    #[test]
    fn test_submit_keeps_duplicate_names_as_separate_entries() {
        let mut queue = UploadQueue::new();
        queue.submit(vec![file("same.md"), file("same.md")]);
        assert_eq!(queue.staged().len(), 2);
    }

    #[test]
    fn test_remove_in_and_out_of_range() {
        let mut queue = UploadQueue::new();
        queue.submit(vec![file("a.pdf"), file("b.txt"), file("c.md")]);

        queue.remove(1);
        assert_eq!(queue.staged().len(), 2);
        assert_eq!(queue.staged()[0].name, "a.pdf");
        assert_eq!(queue.staged()[1].name, "c.md");

        queue.remove(5);
        assert_eq!(queue.staged().len(), 2);
    }

    #[test]
    fn test_begin_on_empty_queue_is_rejected() {
        let mut queue = UploadQueue::new();
        assert!(queue.begin().is_none());
        assert!(!queue.is_uploading());
    }

    #[test]
    fn test_upload_round_preserves_order_and_clears_queue() {
        let mut queue = UploadQueue::new();
        queue.submit(vec![file("1.pdf"), file("2.txt"), file("3.md")]);

        let batch = queue.begin().expect("staged files");
        assert!(queue.is_uploading());
        let names: Vec<&str> = batch.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["1.pdf", "2.txt", "3.md"]);

        // Re-entry and staging changes are blocked mid-upload.
        assert!(queue.begin().is_none());
        let outcome = queue.submit(vec![file("late.pdf")]);
        assert_eq!(outcome.accepted, 0);
        queue.remove(0);
        assert_eq!(queue.staged().len(), 3);

        queue.finish();
        assert!(queue.staged().is_empty());
        assert!(!queue.is_uploading());
    }
}
