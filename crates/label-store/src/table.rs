//! Ordered label table

use crate::LabelError;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

/// Ordered class-label table; index i holds the label for output score i.
///
/// Lines are stored exactly as read, minus the line terminator: no trimming,
/// no deduplication, and empty lines stay in place so indices keep lining up
/// with the model's output positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    /// Load the table from a one-label-per-line text file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LabelError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(LabelError::ResourceUnavailable)?;
        let table = Self::from_reader(BufReader::new(file))?;
        debug!("Loaded {} labels from {}", table.len(), path.display());
        Ok(table)
    }

    /// Read labels line by line from any text resource
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LabelError> {
        let mut labels = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => LabelError::MalformedResource,
                _ => LabelError::ResourceUnavailable(e),
            })?;
            labels.push(line);
        }
        Ok(Self { labels })
    }

    /// Build a table from already-resident label lines
    pub fn from_lines(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Label for class index, if in range
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over labels in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_lines_become_labels_in_order() {
        let table = LabelTable::from_reader(Cursor::new("0 cat\n1 dog\n2 bird\n")).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0), Some("0 cat"));
        assert_eq!(table.get(1), Some("1 dog"));
        assert_eq!(table.get(2), Some("2 bird"));
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn test_empty_lines_are_kept() {
        let table = LabelTable::from_reader(Cursor::new("a\n\nb")).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(1), Some(""));
        assert_eq!(table.get(2), Some("b"));
    }

    #[test]
    fn test_no_trimming_beyond_line_terminator() {
        let table = LabelTable::from_reader(Cursor::new("  padded \r\nnext\n")).unwrap();
        assert_eq!(table.get(0), Some("  padded "));
        assert_eq!(table.get(1), Some("next"));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let err = LabelTable::from_reader(Cursor::new(&[0x66u8, 0xff, 0xfe][..])).unwrap_err();
        assert!(matches!(err, LabelError::MalformedResource));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = LabelTable::load("/nonexistent/labels.txt").unwrap_err();
        assert!(matches!(err, LabelError::ResourceUnavailable(_)));
    }

    #[test]
    fn test_iter_matches_indices() {
        let table = LabelTable::from_lines(vec!["x".into(), "y".into()]);
        let collected: Vec<&str> = table.iter().collect();
        assert_eq!(collected, vec!["x", "y"]);
    }
}
