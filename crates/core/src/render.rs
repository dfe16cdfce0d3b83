//! Renderer seam and plain-text deck output.
//!
//! A slide-deck renderer receives the title slide followed by every slide
//! record in order. The bundled [`TextDeckFormatter`] writes each slide as a
//! block of lines separated by a blank line.

use crate::types::{AnnotatedRun, Deck, RunRole, SlideRecord, TitleSlide};

/// Receives deck content slide by slide.
pub trait DeckRenderer {
    fn render_title(&mut self, title: &TitleSlide);

    fn render_slide(&mut self, slide: &SlideRecord);
}

impl Deck {
    /// Feed the title slide and then every slide, in order, to `renderer`.
    pub fn render<R: DeckRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.render_title(&self.title);
        for slide in &self.slides {
            renderer.render_slide(slide);
        }
    }
}

/// Plain-text renderer for quiz decks.
#[derive(Debug, Clone)]
pub struct TextDeckFormatter {
    /// Glyph drawn for whitespace runs.
    space_glyph: char,
    /// Glyph drawn for masked letters.
    mask_glyph: char,
    blocks: Vec<String>,
}

impl Default for TextDeckFormatter {
    fn default() -> Self {
        Self {
            space_glyph: '␣',
            mask_glyph: '_',
            blocks: Vec::new(),
        }
    }
}

impl TextDeckFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glyph drawn in place of spaces.
    pub fn with_space_glyph(mut self, glyph: char) -> Self {
        self.space_glyph = glyph;
        self
    }

    /// Set the glyph drawn in place of masked letters.
    pub fn with_mask_glyph(mut self, glyph: char) -> Self {
        self.mask_glyph = glyph;
        self
    }

    /// Render answer runs on one line, one glyph per run separated by spaces.
    ///
    /// # Example output
    /// ```text
    /// _ e _ ␣ Y _ r _
    /// ```
    pub fn format_runs(&self, runs: &[AnnotatedRun]) -> String {
        runs.iter()
            .map(|run| match run.role {
                RunRole::MaskedLetter => self.mask_glyph,
                RunRole::Space => self.space_glyph,
                RunRole::VisibleLetter | RunRole::Punctuation => run.ch,
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Format a whole deck.
    pub fn format(mut self, deck: &Deck) -> String {
        deck.render(&mut self);
        self.blocks.join("\n\n")
    }

    /// Format a whole deck, adding a trailing newline.
    pub fn format_with_newline(self, deck: &Deck) -> String {
        format!("{}\n", self.format(deck))
    }
}

impl DeckRenderer for TextDeckFormatter {
    fn render_title(&mut self, title: &TitleSlide) {
        self.blocks.push(format!("{}\n{}", title.heading, title.subtitle()));
    }

    fn render_slide(&mut self, slide: &SlideRecord) {
        self.blocks.push(format!(
            "{}\n{}\n{}\n{}",
            slide.title,
            self.format_runs(&slide.runs),
            slide.category_label(),
            slide.deck_label()
        ));
    }
}
