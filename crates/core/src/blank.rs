//! Fill-in-the-blank answer masking.
//!
//! An answer is split into one run per character. Whitespace and punctuation
//! are never hidden; of the remaining letters, `max(1, ceil(letters * ratio))`
//! are picked uniformly at random without replacement and masked.

use crate::text::{self, CharClass};
use crate::types::{AnnotatedRun, RunRole};
use rand::seq::index;
use rand::Rng;

/// Default fraction of letters to mask.
pub const DEFAULT_MASK_RATIO: f64 = 0.6;

/// Relative tolerance absorbing binary floating-point noise such as
/// `100.0 * 0.07 = 7.000000000000001`.
const RATIO_EPSILON: f64 = 1e-12;

/// Chooses which letters of an answer become blanks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlankSelector {
    ratio: f64,
}

impl Default for BlankSelector {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_MASK_RATIO,
        }
    }
}

impl BlankSelector {
    /// Create a selector with the default 0.6 masking ratio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the masking ratio.
    ///
    /// Values are clamped to `[0.0, 1.0]`; a non-finite ratio keeps the default.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            DEFAULT_MASK_RATIO
        };
        self
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Number of letters to mask out of `eligible`.
    ///
    /// At least one when any letter exists, never more than `eligible`, and
    /// zero when there is nothing to mask.
    pub fn mask_count(&self, eligible: usize) -> usize {
        if eligible == 0 {
            return 0;
        }
        let product = eligible as f64 * self.ratio;
        let wanted = (product - product * RATIO_EPSILON).ceil() as usize;
        wanted.clamp(1, eligible)
    }

    /// Annotate `answer` with every letter visible.
    pub fn reveal(&self, answer: &str) -> Vec<AnnotatedRun> {
        text::compose(answer)
            .chars()
            .map(|c| {
                let role = match text::classify(c) {
                    CharClass::Letter => RunRole::VisibleLetter,
                    CharClass::Punctuation => RunRole::Punctuation,
                    CharClass::Space => RunRole::Space,
                };
                AnnotatedRun::new(c, role)
            })
            .collect()
    }

    /// Annotate `answer` and mask a random subset of its letters.
    pub fn blank<R: Rng + ?Sized>(&self, answer: &str, rng: &mut R) -> Vec<AnnotatedRun> {
        let mut runs = self.reveal(answer);

        let letters: Vec<usize> = runs
            .iter()
            .enumerate()
            .filter(|(_, run)| run.role.is_letter())
            .map(|(idx, _)| idx)
            .collect();

        let count = self.mask_count(letters.len());
        if count == 0 {
            return runs;
        }

        for pick in index::sample(rng, letters.len(), count).into_iter() {
            runs[letters[pick]].role = RunRole::MaskedLetter;
        }
        runs
    }
}
