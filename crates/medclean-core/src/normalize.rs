//! Clinical abbreviation expansion.

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};

use medclean_model::Lexicon;

/// Compiled expansion rules, built once per run from the lexicon.
///
/// One case-insensitive, word-boundary-anchored pattern per abbreviation,
/// applied in the lexicon's fixed order. Matching is whole-word only:
/// `CA` expands on its own but never inside `CARDIAC`. Each rule runs a
/// single non-recursive pass, so an expansion is never re-matched by the
/// rule that produced it.
#[derive(Debug)]
pub struct ExpansionEngine {
    rules: Vec<(Regex, String)>,
}

impl ExpansionEngine {
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let mut rules = Vec::with_capacity(lexicon.abbreviation_count());
        for (short, long) in lexicon.abbreviations() {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(short));
            let regex = Regex::new(&pattern)
                .with_context(|| format!("compile abbreviation pattern for {short:?}"))?;
            rules.push((regex, long.to_string()));
        }
        Ok(Self { rules })
    }

    /// Expand every configured abbreviation in `text`.
    pub fn expand(&self, text: &str) -> String {
        let mut expanded = text.to_string();
        for (regex, long) in &self.rules {
            if regex.is_match(&expanded) {
                expanded = regex.replace_all(&expanded, NoExpand(long)).into_owned();
            }
        }
        expanded
    }

    /// Expand an optional free-text field; absent fields pass through.
    pub fn expand_field(&self, field: Option<&str>) -> Option<String> {
        field.map(|text| self.expand(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ExpansionEngine {
        ExpansionEngine::new(&Lexicon::clinical()).unwrap()
    }

    #[test]
    fn expands_whole_words_case_insensitively() {
        let engine = engine();
        assert_eq!(engine.expand("Pt has DM"), "Patient has Diabetes Mellitus");
        assert_eq!(engine.expand("pt has dm"), "Patient has Diabetes Mellitus");
    }

    #[test]
    fn respects_word_boundaries() {
        let engine = engine();
        assert_eq!(
            engine.expand("Patient has CAD and CADENCE"),
            "Patient has Coronary Artery Disease and CADENCE"
        );
        assert_eq!(engine.expand("CARDIAC arrest"), "CARDIAC arrest");
    }

    #[test]
    fn expansion_output_is_not_rewritten_by_later_rules() {
        // HBP runs before BP; the later BP rule finds no whole-word
        // match inside "High Blood Pressure".
        let engine = engine();
        assert_eq!(engine.expand("HBP"), "High Blood Pressure");
    }

    #[test]
    fn punctuation_adjacent_abbreviations_still_match() {
        let engine = engine();
        assert_eq!(
            engine.expand("SOB, CP."),
            "Shortness of Breath, Chest Pain."
        );
    }

    #[test]
    fn absent_fields_pass_through() {
        let engine = engine();
        assert_eq!(engine.expand_field(None), None);
        assert_eq!(
            engine.expand_field(Some("Rx PRN")),
            Some("Prescription As Needed".to_string())
        );
    }
}
