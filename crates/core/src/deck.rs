//! Deck assembly: turns a corpus and a deck order into renderer-ready slides.

use crate::blank::BlankSelector;
use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::shuffle::DeckOrder;
use crate::types::{Deck, SlideKind, SlideRecord, TitleSlide};
use rand::Rng;

/// Default heading of the title slide.
pub const DEFAULT_TITLE: &str = "Maradj Talpon!";

/// Builds decks from a loaded corpus.
#[derive(Debug, Clone)]
pub struct DeckAssembler<'a> {
    corpus: &'a Corpus,
    selector: BlankSelector,
    title: String,
}

impl<'a> DeckAssembler<'a> {
    /// Create an assembler with the default title and masking ratio.
    pub fn new(corpus: &'a Corpus) -> Self {
        Self {
            corpus,
            selector: BlankSelector::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Use a custom blank selector.
    pub fn with_selector(mut self, selector: BlankSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Set the title slide heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Shuffle the corpus and build a deck of at most `requested` questions.
    ///
    /// The same random source drives the shuffle and every blank selection.
    pub fn build_deck<R: Rng + ?Sized>(&self, requested: i64, rng: &mut R) -> Result<Deck> {
        let order = DeckOrder::shuffled(self.corpus.len(), rng);
        self.build(&order, requested, rng)
    }

    /// Build a deck from an existing order.
    ///
    /// Includes the first `min(requested, total)` questions of `order`; each
    /// contributes a question slide with a blanked answer followed by an answer
    /// slide with every letter visible.
    pub fn build<R: Rng + ?Sized>(
        &self,
        order: &DeckOrder,
        requested: i64,
        rng: &mut R,
    ) -> Result<Deck> {
        let included = order.included(requested);
        let total = included.len();
        log::debug!(
            "Building deck with {} of {} questions (requested {})",
            total,
            order.len(),
            requested
        );

        let mut slides = Vec::with_capacity(total * 2);
        for &id in included {
            let question = self.corpus.question(id)?;
            let (category, position_in_category) = self.corpus.locate(id)?;
            let position_in_deck = order.deck_position(id).ok_or(Error::UnknownQuestion(id))?;

            let question_slide = SlideRecord {
                kind: SlideKind::Question,
                question_id: id,
                title: question.question.clone(),
                category: category.label.clone(),
                position_in_category,
                position_in_deck,
                total,
                runs: self.selector.blank(&question.answer, rng),
            };
            let answer_slide = SlideRecord {
                kind: SlideKind::Answer,
                runs: self.selector.reveal(&question.answer),
                ..question_slide.clone()
            };

            slides.push(question_slide);
            slides.push(answer_slide);
        }

        Ok(Deck {
            title: TitleSlide::new(self.title.clone(), total),
            slides,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RunRole;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn corpus_of(categories: &[(&str, usize)]) -> Corpus {
        Corpus::from_categories(categories.iter().map(|&(label, count)| {
            let pairs: Vec<(String, String)> = (0..count)
                .map(|i| {
                    (
                        format!("{} question {}", label, i + 1),
                        format!("Answer number {}", i + 1),
                    )
                })
                .collect();
            (label, pairs)
        }))
    }

    #[test]
    fn test_build_pairs_question_and_answer() {
        let corpus = Corpus::from_categories(vec![(
            "geo",
            vec![("Capital of France?".to_string(), "Paris".to_string())],
        )]);
        let deck = DeckAssembler::new(&corpus)
            .build_deck(10, &mut StdRng::seed_from_u64(5))
            .unwrap();

        assert_eq!(deck.question_count(), 1);
        assert_eq!(deck.slides.len(), 2);

        let question = &deck.slides[0];
        let answer = &deck.slides[1];
        assert_eq!(question.kind, SlideKind::Question);
        assert_eq!(answer.kind, SlideKind::Answer);
        assert_eq!(question.title, "Capital of France?");
        assert_eq!(question.category_label(), "geo-1");
        assert_eq!(question.deck_label(), "1 / 1");
        assert_eq!(question.masked_count(), 3);
        assert_eq!(answer.masked_count(), 0);
        assert!(answer.runs.iter().all(|r| r.role == RunRole::VisibleLetter));
    }

    #[test]
    fn test_build_follows_order_without_repeats() {
        let corpus = corpus_of(&[("geo", 4), ("history", 3), ("music", 5)]);
        let mut rng = StdRng::seed_from_u64(11);
        let order = DeckOrder::shuffled(corpus.len(), &mut rng);
        let deck = DeckAssembler::new(&corpus)
            .build(&order, 8, &mut rng)
            .unwrap();

        assert_eq!(deck.question_count(), 8);
        assert_eq!(deck.slides.len(), 16);

        let mut seen = HashSet::new();
        for (idx, pair) in deck.slides.chunks(2).enumerate() {
            assert_eq!(pair[0].question_id, order.ids()[idx]);
            assert_eq!(pair[0].question_id, pair[1].question_id);
            assert_eq!(pair[0].position_in_deck, idx + 1);
            assert_eq!(pair[0].total, 8);
            assert!(seen.insert(pair[0].question_id));
        }
    }

    #[test]
    fn test_build_positions_in_category() {
        let corpus = corpus_of(&[("geo", 4), ("empty", 0), ("history", 3)]);
        let deck = DeckAssembler::new(&corpus)
            .build_deck(100, &mut StdRng::seed_from_u64(2))
            .unwrap();

        assert_eq!(deck.question_count(), 7);
        for slide in &deck.slides {
            let category = corpus.category_of(slide.question_id).unwrap();
            assert_eq!(slide.category, category.label);
            assert_eq!(
                slide.position_in_category,
                slide.question_id - category.start + 1
            );
            assert_eq!(
                slide.title,
                format!("{} question {}", category.label, slide.position_in_category)
            );
        }
    }

    #[test]
    fn test_build_zero_or_negative_request() {
        let corpus = corpus_of(&[("geo", 50)]);
        let assembler = DeckAssembler::new(&corpus);

        let deck = assembler
            .build_deck(0, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert!(deck.is_empty());
        assert_eq!(deck.question_count(), 0);

        let deck = assembler
            .build_deck(-4, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert!(deck.is_empty());
    }

    #[test]
    fn test_build_empty_corpus() {
        let corpus = Corpus::from_categories(vec![("empty", Vec::new())]);
        let deck = DeckAssembler::new(&corpus)
            .with_title("Quiz night")
            .build_deck(10, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert!(deck.is_empty());
        assert_eq!(deck.title.heading, "Quiz night");
        assert_eq!(deck.title.subtitle(), "0 questions from various categories.");
    }

    #[test]
    fn test_build_is_deterministic_for_seed() {
        let corpus = corpus_of(&[("geo", 6), ("music", 6)]);
        let assembler =
            DeckAssembler::new(&corpus).with_selector(BlankSelector::new().with_ratio(0.5));

        let a = assembler
            .build_deck(5, &mut StdRng::seed_from_u64(77))
            .unwrap();
        let b = assembler
            .build_deck(5, &mut StdRng::seed_from_u64(77))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_rejects_foreign_order() {
        let corpus = corpus_of(&[("geo", 2)]);
        let mut rng = StdRng::seed_from_u64(1);
        let order = DeckOrder::shuffled(5, &mut rng);

        let result = DeckAssembler::new(&corpus).build(&order, 5, &mut rng);
        assert!(matches!(result, Err(Error::UnknownQuestion(_))));
    }
}
