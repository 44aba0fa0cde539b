//! Brainrot dataset
//!
//! Each entry pairs a word to guess with an image and a short description.
//! Only the word takes part in the game logic; the image reference and the
//! description are passed through to the display untouched.

mod embedded;
pub mod loader;

pub use embedded::{ENTRIES, ENTRIES_COUNT};

use rand::Rng;
use std::fmt;
use std::io;

/// One dataset entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: String,
    word: String,
    image_url: String,
    description: String,
}

impl Entry {
    /// Create an entry; the word is stored uppercase
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        word: &str,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.trim().to_uppercase(),
            image_url: image_url.into(),
            description: description.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of letters in the word
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Error type for dataset construction and loading
#[derive(Debug)]
pub enum DatasetError {
    Empty,
    Malformed { line: usize, fields: usize },
    EmptyWord { line: usize },
    Io(io::Error),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dataset contains no entries"),
            Self::Malformed { line, fields } => write!(
                f,
                "Line {line}: expected 4 tab-separated fields (id, word, image_url, description), got {fields}"
            ),
            Self::EmptyWord { line } => write!(f, "Line {line}: word is empty"),
            Self::Io(e) => write!(f, "Failed to read dataset: {e}"),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DatasetError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A non-empty, ordered list of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    /// Build a dataset from entries
    ///
    /// # Errors
    /// Returns `DatasetError::Empty` if `entries` is empty.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, DatasetError> {
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { entries })
    }

    /// The dataset compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use rordle::dataset::{Dataset, ENTRIES_COUNT};
    ///
    /// let dataset = Dataset::embedded();
    /// assert_eq!(dataset.len(), ENTRIES_COUNT);
    /// assert!(dataset.find_by_word("rizz").is_some());
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        let entries = ENTRIES
            .iter()
            .map(|&(id, word, image_url, description)| {
                Entry::new(id, word, image_url, description)
            })
            .collect();
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick an entry uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Entry {
        &self.entries[rng.random_range(0..self.entries.len())]
    }

    /// Case-insensitive lookup by word
    #[must_use]
    pub fn find_by_word(&self, word: &str) -> Option<&Entry> {
        let wanted = word.trim().to_uppercase();
        self.entries.iter().find(|e| e.word == wanted)
    }
}
