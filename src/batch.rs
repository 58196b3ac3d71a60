//! Upload batches for the ingestion benchmark.
//!
//! A batch is an ordered sequence of raw file blobs selected by the
//! operator. It is transient: the active ingestion request takes ownership
//! of the batch, and it is dropped once that request settles.

use crate::error::{BenchError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A single file staged for upload.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// File name sent to the endpoint; becomes the document identifier
    /// attached to search hits.
    pub name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// An ordered batch of files for one ingestion request.
#[derive(Debug, Clone, Default)]
pub struct UploadBatch {
    parts: Vec<FilePart>,
}

impl UploadBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a batch from filesystem paths, in the order given.
    ///
    /// Directories are expanded recursively; entries within a directory are
    /// visited in file-name order so repeated runs produce the same batch.
    pub fn from_paths(paths: &[PathBuf]) -> Result<Self> {
        let mut batch = Self::new();

        for path in paths {
            if path.is_dir() {
                for entry in WalkDir::new(path).sort_by_file_name() {
                    let entry = entry.map_err(|e| {
                        let source = e
                            .into_io_error()
                            .unwrap_or_else(|| std::io::Error::other("walk failed"));
                        BenchError::io(path, source)
                    })?;

                    if entry.file_type().is_file() {
                        batch.push_file(entry.path())?;
                    }
                }
            } else {
                batch.push_file(path)?;
            }
        }

        Ok(batch)
    }

    /// Read a file from disk and append it to the batch.
    pub fn push_file(&mut self, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path).map_err(|e| BenchError::io(path, e))?;

        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        self.push(name, bytes);
        Ok(())
    }

    /// Append an in-memory file to the batch.
    pub fn push(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.parts.push(FilePart {
            name: name.into(),
            bytes,
        });
    }

    /// Number of files in the batch.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the batch holds no files.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Borrow the staged files in upload order.
    pub fn parts(&self) -> &[FilePart] {
        &self.parts
    }

    /// Consume the batch, yielding the staged files in upload order.
    pub fn into_parts(self) -> Vec<FilePart> {
        self.parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_batch() {
        let batch = UploadBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut batch = UploadBatch::new();
        batch.push("a.txt", b"alpha".to_vec());
        batch.push("b.txt", b"beta".to_vec());

        let names: Vec<_> = batch.parts().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
    }

    #[test]
    fn test_from_paths_reads_files_in_given_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("zeta.txt");
        let second = dir.path().join("alpha.txt");
        std::fs::write(&first, "z").unwrap();
        std::fs::write(&second, "a").unwrap();

        // Explicit file arguments keep their command-line order
        let batch = UploadBatch::from_paths(&[first, second]).unwrap();
        let names: Vec<_> = batch.parts().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["zeta.txt", "alpha.txt"]);
        assert_eq!(batch.parts()[0].bytes, b"z");
    }

    #[test]
    fn test_from_paths_expands_directories_sorted() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("c.txt"), "c").unwrap();

        let batch = UploadBatch::from_paths(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<_> = batch.parts().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_from_paths_missing_file() {
        let result = UploadBatch::from_paths(&[PathBuf::from("/nonexistent/file.txt")]);
        assert!(result.is_err());
    }
}
