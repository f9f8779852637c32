use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::store::{ContactStore, StoreError};
use crate::domain::ContactSubmission;

/// Appends submissions to a local JSON-lines file.
///
/// Used when no backend is configured, so the site still works offline.
pub struct JsonLinesStore {
    path: PathBuf,
    // Serializes appends so concurrent inserts never interleave lines.
    lock: Mutex<()>,
}

impl JsonLinesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads back every stored record, oldest first.
    pub fn load_all(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .map_err(|e| StoreError::Transport(format!("Invalid outbox line - {e}")))
            })
            .collect()
    }
}

impl ContactStore for JsonLinesStore {
    fn insert(&self, record: &ContactSubmission) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(record)
            .map_err(|e| StoreError::Transport(format!("Serialization failed: {e}")))?;
        line.push('\n');

        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;

        tracing::info!(path = %self.path.display(), "contact submission written to outbox");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("outbox {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(first_name: &str) -> ContactSubmission {
        ContactSubmission {
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            company: Some("Acme".to_string()),
            subject: "Demo request".to_string(),
            message: "Line one\nLine two".to_string(),
        }
    }

    #[test]
    fn test_insert_appends_one_line_per_record() {
        let dir = tempdir().unwrap();
        let store = JsonLinesStore::new(dir.path().join("outbox").join("submissions.jsonl"));

        store.insert(&record("John")).unwrap();
        store.insert(&record("Jane")).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.lines().count(), 2);

        let stored = store.load_all().unwrap();
        assert_eq!(stored, vec![record("John"), record("Jane")]);
    }

    #[test]
    fn test_load_all_on_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonLinesStore::new(dir.path().join("none.jsonl"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_path_is_a_transport_failure() {
        let dir = tempdir().unwrap();
        // A directory cannot be opened for appending.
        let store = JsonLinesStore::new(dir.path());
        let err = store.insert(&record("John")).unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }
}
