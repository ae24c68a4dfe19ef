//! Shared test fixtures for editor, config and session test modules.

use crate::editor::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Display fake that records every write separately.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    writes: Vec<String>,
}

impl RecordingDisplay {
    /// Individual writes in call order.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// All writes concatenated.
    pub fn output(&self) -> String {
        self.writes.concat()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Display for RecordingDisplay {
    fn write(&mut self, text: &str) {
        self.writes.push(text.to_string());
    }
}

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "replshim-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_display_keeps_write_boundaries() {
        let mut display = RecordingDisplay::default();
        display.write("a");
        display.write_prompt("> ");
        assert_eq!(display.writes(), &["a".to_string(), "> ".to_string()]);
        assert_eq!(display.output(), "a> ");
    }

    #[test]
    fn temp_dir_fixture_writes_nested_files() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert!(fixture.path().exists());
    }
}
