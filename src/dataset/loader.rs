//! Dataset loading utilities
//!
//! Reads the same tab-separated format the embedded dataset is generated from:
//! `id<TAB>word<TAB>image_url<TAB>description`, one entry per line.
//! Blank lines and lines starting with `#` are skipped.

use super::{Dataset, DatasetError, Entry};
use std::fs;
use std::path::Path;

/// Load a dataset from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read, a line is malformed, or the
/// file contains no entries.
///
/// # Examples
/// ```no_run
/// use rordle::dataset::loader::load_from_file;
///
/// let dataset = load_from_file("data/brainrot.tsv").unwrap();
/// println!("Loaded {} entries", dataset.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse dataset text
///
/// # Errors
///
/// Returns an error on the first malformed line, or if no entries remain.
pub fn parse(content: &str) -> Result<Dataset, DatasetError> {
    let mut entries = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim_end();
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let [id, word, image_url, description] = fields[..] else {
            return Err(DatasetError::Malformed {
                line: i + 1,
                fields: fields.len(),
            });
        };

        if word.is_empty() {
            return Err(DatasetError::EmptyWord { line: i + 1 });
        }

        entries.push(Entry::new(id, word, image_url, description));
    }

    Dataset::from_entries(entries)
}
