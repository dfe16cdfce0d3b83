//! Domain types for representing a quiz corpus and the slides generated from it.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single question/answer pair from the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Zero-based id, assigned in file-then-line order.
    pub id: usize,

    /// The question text, trimmed.
    pub question: String,

    /// The answer text, trimmed.
    pub answer: String,
}

/// A named partition of the corpus, backed by one source file.
///
/// Owns the contiguous id range `start..start + len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Label derived from the source file name (without extension).
    pub label: String,

    /// First question id owned by this category.
    pub start: usize,

    /// Number of questions in this category. May be zero.
    pub len: usize,
}

impl Category {
    /// Create a new category covering `len` ids starting at `start`.
    pub fn new(label: impl Into<String>, start: usize, len: usize) -> Self {
        Self {
            label: label.into(),
            start,
            len,
        }
    }

    /// Half-open id range owned by this category.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Last id owned by this category (inclusive), or `None` when empty.
    pub fn end_id(&self) -> Option<usize> {
        (self.len > 0).then(|| self.start + self.len - 1)
    }

    /// Whether this category owns the given question id.
    pub fn contains(&self, id: usize) -> bool {
        self.range().contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 1-based position of `id` inside this category.
    pub fn position_of(&self, id: usize) -> Option<usize> {
        self.contains(id).then(|| id - self.start + 1)
    }
}

/// Display role of one answer character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunRole {
    /// A letter shown as-is.
    VisibleLetter,
    /// A letter hidden behind a blank.
    MaskedLetter,
    /// Punctuation, never masked.
    Punctuation,
    /// Whitespace, never masked and styled distinctly.
    Space,
}

impl RunRole {
    /// Whether this run is a letter, masked or not.
    pub fn is_letter(self) -> bool {
        matches!(self, Self::VisibleLetter | Self::MaskedLetter)
    }
}

/// One character of an answer tagged with its display role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedRun {
    /// The source character (kept for masked letters too).
    pub ch: char,

    /// How the renderer should present this character.
    pub role: RunRole,
}

impl AnnotatedRun {
    pub fn new(ch: char, role: RunRole) -> Self {
        Self { ch, role }
    }

    pub fn is_masked(&self) -> bool {
        self.role == RunRole::MaskedLetter
    }
}

/// Whether a slide shows the blanked answer or the full answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Question,
    Answer,
}

/// Renderer-facing description of one question or answer slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideRecord {
    pub kind: SlideKind,

    /// Id of the question this slide belongs to.
    pub question_id: usize,

    /// Slide title (the question text).
    pub title: String,

    /// Label of the owning category.
    pub category: String,

    /// 1-based position of the question inside its category.
    pub position_in_category: usize,

    /// 1-based position of the question inside the deck.
    pub position_in_deck: usize,

    /// Number of questions included in the deck.
    pub total: usize,

    /// Answer characters with their display roles.
    pub runs: Vec<AnnotatedRun>,
}

impl SlideRecord {
    /// Category label in the form `"<category>-<position>"`.
    pub fn category_label(&self) -> String {
        format!("{}-{}", self.category, self.position_in_category)
    }

    /// Deck position label in the form `"<position> / <total>"`.
    pub fn deck_label(&self) -> String {
        format!("{} / {}", self.position_in_deck, self.total)
    }

    /// Number of masked letters on this slide.
    pub fn masked_count(&self) -> usize {
        self.runs.iter().filter(|r| r.is_masked()).count()
    }
}

/// The opening slide of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSlide {
    pub heading: String,

    /// Number of questions included in the deck.
    pub question_count: usize,
}

impl TitleSlide {
    pub fn new(heading: impl Into<String>, question_count: usize) -> Self {
        Self {
            heading: heading.into(),
            question_count,
        }
    }

    /// Summary line shown under the heading.
    pub fn subtitle(&self) -> String {
        let noun = if self.question_count == 1 {
            "question"
        } else {
            "questions"
        };
        format!("{} {} from various categories.", self.question_count, noun)
    }
}

/// A fully assembled deck: title slide followed by question/answer slide pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub title: TitleSlide,

    /// Slides in presentation order, each question slide followed by its answer slide.
    pub slides: Vec<SlideRecord>,
}

impl Deck {
    /// Number of questions in the deck.
    pub fn question_count(&self) -> usize {
        self.title.question_count
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
