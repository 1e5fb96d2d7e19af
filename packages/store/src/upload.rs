use crate::models::{FileKind, FileStatus, UploadFile};

/// Files queued on the upload page.
///
/// Ids are handed out from a counter that starts above the largest seeded
/// id, so they stay unique for the life of the queue even after removals.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadQueue {
    files: Vec<UploadFile>,
    next_id: u64,
}

impl Default for UploadQueue {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl UploadQueue {
    pub fn new(seed: Vec<UploadFile>) -> Self {
        let mut files: Vec<UploadFile> = Vec::with_capacity(seed.len());
        for file in seed {
            if files.iter().any(|f| f.id == file.id) {
                tracing::warn!("Dropping seeded upload with duplicate id {}", file.id);
                continue;
            }
            files.push(file);
        }
        let next_id = files.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self { files, next_id }
    }

    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Queue a newly selected or dropped file. It starts out processing.
    pub fn add(&mut self, name: impl Into<String>, mime: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let file = UploadFile {
            id,
            name: name.into(),
            status: FileStatus::Processing,
            kind: FileKind::from_mime(mime),
        };
        tracing::debug!("Queued upload {} ({:?})", file.name, file.kind);
        self.files.push(file);
        id
    }

    /// Remove a file by id. Returns false if no such file was queued.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    /// Finish every file still processing; returns how many changed.
    pub fn process_all(&mut self) -> usize {
        let mut count = 0;
        for file in self
            .files
            .iter_mut()
            .filter(|f| f.status == FileStatus::Processing)
        {
            file.status = FileStatus::Complete;
            count += 1;
        }
        count
    }

    /// Drop every file that has not finished processing.
    pub fn cancel_pending(&mut self) -> usize {
        let before = self.files.len();
        self.files.retain(|f| f.status == FileStatus::Complete);
        before - self.files.len()
    }

    pub fn pending(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Processing)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn seeded() -> UploadQueue {
        UploadQueue::new(AppConfig::bundled().unwrap().uploads)
    }

    #[test]
    fn test_seeded_queue() {
        let queue = seeded();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut queue = seeded();
        let a = queue.add("scan.png", "image/png");
        let b = queue.add("record.pdf", "application/pdf");
        assert_ne!(a, b);
        assert!(a > 2 && b > 2);

        let added = &queue.files()[2];
        assert_eq!(added.name, "scan.png");
        assert_eq!(added.status, FileStatus::Processing);
        assert_eq!(added.kind, FileKind::Image);
        assert_eq!(queue.files()[3].kind, FileKind::Pdf);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut queue = UploadQueue::default();
        assert!(queue.is_empty());
        let a = queue.add("a.pdf", "application/pdf");
        assert!(queue.remove(a));
        assert!(queue.is_empty());
        let b = queue.add("b.pdf", "application/pdf");
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_by_id() {
        let mut queue = seeded();
        assert!(queue.remove(1));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.files()[0].name, "copyright-page.pdf");
        assert!(!queue.remove(1));
        assert!(!queue.remove(99));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_process_all_and_cancel() {
        let mut queue = seeded();
        queue.add("x.jpg", "image/jpeg");
        assert_eq!(queue.pending(), 2);

        let mut other = queue.clone();
        assert_eq!(other.cancel_pending(), 2);
        assert_eq!(other.len(), 1);

        assert_eq!(queue.process_all(), 2);
        assert_eq!(queue.pending(), 0);
        assert_eq!(queue.process_all(), 0);
    }

    #[test]
    fn test_duplicate_seed_ids_are_dropped() {
        let file = UploadFile {
            id: 7,
            name: "dup.pdf".to_string(),
            status: FileStatus::Complete,
            kind: FileKind::Pdf,
        };
        let queue = UploadQueue::new(vec![file.clone(), file]);
        assert_eq!(queue.len(), 1);
    }
}
