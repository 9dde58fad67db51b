use crate::error::Result;
use std::fs;
use std::path::Path;

/// File extension accepted for performance documents
const DOC_EXTENSION: &str = ".md";

/// A user-supplied performance document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name the document was loaded from
    pub name: String,
    /// Raw UTF-8 text content
    pub content: String,
}

/// Ordered, insertion-ordered collection of performance documents.
///
/// Entries are appended in the order they are added and removed by
/// zero-based index; there is no deduplication by name.
#[derive(Debug, Default)]
pub struct DocumentSet {
    docs: Vec<Document>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every matching file from a batch of paths.
    ///
    /// A path naming a `.md` file is read and appended; other files are
    /// silently skipped. A directory contributes its immediate `.md`
    /// entries in directory order. Returns the number of documents added.
    pub fn add_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<usize> {
        let mut added = 0;
        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                // read_dir order is platform-dependent; sort by name so a
                // directory's docs land in a reproducible order
                let mut entries: Vec<_> = fs::read_dir(path)?
                    .map(|entry| entry.map(|e| e.path()))
                    .collect::<std::io::Result<_>>()?;
                entries.sort();
                for entry_path in entries {
                    if entry_path.is_file() {
                        added += self.add_file(&entry_path)?;
                    }
                }
            } else {
                added += self.add_file(path)?;
            }
        }
        Ok(added)
    }

    /// Add a single file if its name carries the document extension
    fn add_file(&mut self, path: &Path) -> Result<usize> {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => return Ok(0),
        };

        if !name.ends_with(DOC_EXTENSION) {
            tracing::debug!(file = %name, "skipping non-markdown file");
            return Ok(0);
        }

        let content = fs::read_to_string(path)?;
        self.docs.push(Document { name, content });
        Ok(1)
    }

    /// Remove the document at `index`, shifting later entries down.
    ///
    /// Out-of-range indices are a no-op returning `None`.
    pub fn remove(&mut self, index: usize) -> Option<Document> {
        if index < self.docs.len() {
            Some(self.docs.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    #[test]
    fn test_add_paths_filters_by_extension() {
        let temp = TempDir::new().unwrap();
        let a = write_file(temp.path(), "a.md", "alpha");
        let b = write_file(temp.path(), "b.txt", "bravo");
        let c = write_file(temp.path(), "c.md", "charlie");

        let mut set = DocumentSet::new();
        let added = set.add_paths(&[a, b, c]).unwrap();

        assert_eq!(added, 2);
        let names: Vec<&str> = set.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.md", "c.md"]);
    }

    #[test]
    fn test_add_paths_reads_content() {
        let temp = TempDir::new().unwrap();
        let path = write_file(temp.path(), "notes.md", "# Q3 wins\n- shipped search");

        let mut set = DocumentSet::new();
        set.add_paths(&[path]).unwrap();

        let doc = set.iter().next().unwrap();
        assert_eq!(doc.name, "notes.md");
        assert_eq!(doc.content, "# Q3 wins\n- shipped search");
    }

    #[test]
    fn test_add_directory() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "one.md", "1");
        write_file(temp.path(), "skip.rs", "fn main() {}");
        write_file(temp.path(), "two.md", "2");

        let mut set = DocumentSet::new();
        let added = set.add_paths(&[temp.path()]).unwrap();

        assert_eq!(added, 2);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_add_directory_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        // Created out of alphabetical order on purpose
        write_file(temp.path(), "zulu.md", "z");
        write_file(temp.path(), "alpha.md", "a");
        write_file(temp.path(), "mike.md", "m");

        let mut set = DocumentSet::new();
        set.add_paths(&[temp.path()]).unwrap();

        let names: Vec<&str> = set.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["alpha.md", "mike.md", "zulu.md"]);
    }

    #[test]
    fn test_remove_shifts_entries_down() {
        let temp = TempDir::new().unwrap();
        let paths: Vec<_> = ["a.md", "b.md", "c.md"]
            .iter()
            .map(|n| write_file(temp.path(), n, n))
            .collect();

        let mut set = DocumentSet::new();
        set.add_paths(&paths).unwrap();

        let removed = set.remove(0).unwrap();
        assert_eq!(removed.name, "a.md");

        let names: Vec<&str> = set.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["b.md", "c.md"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut set = DocumentSet::new();
        assert!(set.remove(0).is_none());

        let temp = TempDir::new().unwrap();
        let path = write_file(temp.path(), "only.md", "x");
        set.add_paths(&[path]).unwrap();

        assert!(set.remove(5).is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_duplicate_names_kept() {
        let temp = TempDir::new().unwrap();
        let path = write_file(temp.path(), "same.md", "x");

        let mut set = DocumentSet::new();
        set.add_paths(&[path.clone(), path]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_missing_file_errors() {
        let mut set = DocumentSet::new();
        let result = set.add_paths(&[Path::new("/nonexistent/notes.md")]);
        assert!(result.is_err());
    }
}
