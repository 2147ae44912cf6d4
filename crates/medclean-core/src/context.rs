//! Run-scoped configuration passed explicitly to the cleaning stages.

use chrono::{Datelike, Local};
use medclean_model::Lexicon;

/// Immutable context for one pipeline run.
///
/// The current year is injected rather than read from the clock inside
/// the stages, so age derivation is reproducible in tests.
#[derive(Debug, Clone)]
pub struct CleanContext<'a> {
    pub lexicon: &'a Lexicon,
    pub current_year: i32,
}

impl<'a> CleanContext<'a> {
    pub fn new(lexicon: &'a Lexicon, current_year: i32) -> Self {
        Self {
            lexicon,
            current_year,
        }
    }

    /// Context anchored to the wall-clock year.
    pub fn for_today(lexicon: &'a Lexicon) -> Self {
        Self::new(lexicon, Local::now().year())
    }
}
