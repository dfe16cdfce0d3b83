//! Core pipeline for fill-in-the-blank quiz decks: corpus loading,
//! deck shuffling, answer masking, and slide assembly.

pub mod blank;
pub mod corpus;
pub mod deck;
pub mod error;
pub mod render;
pub mod shuffle;
pub mod text;
pub mod types;

pub use blank::{BlankSelector, DEFAULT_MASK_RATIO};
pub use corpus::{Corpus, CorpusLoader};
pub use deck::{DeckAssembler, DEFAULT_TITLE};
pub use error::{Error, Result};
pub use render::{DeckRenderer, TextDeckFormatter};
pub use shuffle::DeckOrder;
pub use types::{
    AnnotatedRun, Category, Deck, Question, RunRole, SlideKind, SlideRecord, TitleSlide,
};
