//! Question corpus loading and category bookkeeping.
//!
//! A corpus directory holds one plain-text file per category. Lines alternate
//! question, answer, question, answer, ... and every question receives a
//! zero-based id in file-then-line order, so each category owns a contiguous
//! id range.

use crate::error::{Error, Result};
use crate::types::{Category, Question};
use std::fs;
use std::path::{Path, PathBuf};

/// Byte order mark some editors put at the start of UTF-8 files.
const UTF8_BOM: char = '\u{feff}';

/// An immutable, loaded question corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    questions: Vec<Question>,
    categories: Vec<Category>,
}

impl Corpus {
    /// Build a corpus from `(label, pairs)` entries, in order.
    ///
    /// Ids are assigned sequentially across all entries; an entry with no
    /// pairs still produces an (empty) category.
    pub fn from_categories<I, L, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, P)>,
        L: Into<String>,
        P: IntoIterator<Item = (String, String)>,
    {
        let mut corpus = Self::default();
        for (label, pairs) in entries {
            corpus.push_category(label, pairs);
        }
        corpus
    }

    fn push_category(
        &mut self,
        label: impl Into<String>,
        pairs: impl IntoIterator<Item = (String, String)>,
    ) {
        let start = self.questions.len();
        for (question, answer) in pairs {
            let id = self.questions.len();
            self.questions.push(Question {
                id,
                question,
                answer,
            });
        }
        self.categories.push(Category::new(label, start, self.questions.len() - start));
    }

    /// Total number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All questions, indexed by id.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Categories in load order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a question by id.
    pub fn question(&self, id: usize) -> Result<&Question> {
        self.questions.get(id).ok_or(Error::UnknownQuestion(id))
    }

    /// Find the category owning a question id.
    ///
    /// Categories partition the id space in load order, so their exclusive
    /// ends are non-decreasing and a binary search over them finds the owner.
    /// Empty categories never match.
    pub fn category_of(&self, id: usize) -> Option<&Category> {
        let idx = self.categories.partition_point(|c| c.start + c.len <= id);
        self.categories.get(idx).filter(|c| c.contains(id))
    }

    /// Owning category and 1-based position within it for a valid question id.
    ///
    /// A miss for an id inside the corpus means the index is corrupt and is
    /// reported as [`Error::InconsistentIndex`].
    pub fn locate(&self, id: usize) -> Result<(&Category, usize)> {
        if id >= self.len() {
            return Err(Error::UnknownQuestion(id));
        }
        let category = self.category_of(id).ok_or(Error::InconsistentIndex(id))?;
        Ok((category, id - category.start + 1))
    }
}

/// Loads a [`Corpus`] from a directory of category files.
#[derive(Debug, Clone, Default)]
pub struct CorpusLoader {
    /// Reject files ending on an unanswered question instead of dropping it.
    strict_pairs: bool,
}

impl CorpusLoader {
    /// Create a loader that silently drops a dangling trailing question.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a dangling trailing question is an error.
    pub fn with_strict_pairs(mut self, strict: bool) -> Self {
        self.strict_pairs = strict;
        self
    }

    /// Load every category file in `dir`.
    ///
    /// Files are visited in file-name order; anything that is not a regular
    /// file is skipped. The category label is the file stem.
    pub fn load(&self, dir: impl AsRef<Path>) -> Result<Corpus> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::CorpusNotFound(dir.to_path_buf()));
        }

        let mut corpus = Corpus::default();
        for path in category_files(dir)? {
            let label = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            let content = fs::read_to_string(&path).map_err(|source| Error::ReadError {
                path: path.clone(),
                source,
            })?;

            let pairs = self.parse_category(&label, &content)?;
            log::debug!(
                "Loaded category '{}' with {} questions from {}",
                label,
                pairs.len(),
                path.display()
            );
            corpus.push_category(label, pairs);
        }

        log::debug!(
            "Corpus holds {} questions in {} categories",
            corpus.len(),
            corpus.categories().len()
        );
        Ok(corpus)
    }

    /// Split one category file into question/answer pairs.
    ///
    /// Lines are trimmed and empty lines skipped. The first remaining line is
    /// a question, the next its answer, and so on.
    pub fn parse_category(&self, label: &str, content: &str) -> Result<Vec<(String, String)>> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

        let mut pairs = Vec::new();
        let mut pending: Option<String> = None;

        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match pending.take() {
                None => pending = Some(line.to_string()),
                Some(question) => pairs.push((question, line.to_string())),
            }
        }

        if let Some(question) = pending {
            if self.strict_pairs {
                return Err(Error::DanglingQuestion {
                    category: label.to_string(),
                    question,
                });
            }
            log::warn!(
                "Dropping unanswered question at the end of category '{}': {}",
                label,
                question
            );
        }

        Ok(pairs)
    }
}

/// Regular files in `dir`, sorted by file name.
fn category_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| Error::ReadError {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() {
            files.push(path);
        } else {
            log::warn!("Skipping non-file corpus entry: {}", path.display());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
