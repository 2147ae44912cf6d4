//! Expansion fidelity scoring.
//!
//! Quantifies how much abbreviation expansion changed a text, using the
//! machine-translation family of metrics: modified n-gram precision
//! (n up to 4) between the original text as reference and the expanded
//! text as candidate, geometric mean under uniform weights, multiplied by
//! a brevity penalty. Zero-match orders are epsilon-smoothed so short
//! strings never collapse to exactly zero. Scores are observational only;
//! they never gate pipeline output.

use std::collections::BTreeMap;

/// Smoothing numerator substituted when an n-gram order has no matches.
const SMOOTHING_EPSILON: f64 = 0.1;

const MAX_ORDER: usize = 4;

fn ngram_counts<'a>(tokens: &'a [&'a str], n: usize) -> BTreeMap<&'a [&'a str], usize> {
    let mut counts = BTreeMap::new();
    for gram in tokens.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

/// Clipped n-gram precision of `candidate` against `reference`.
fn modified_precision(reference: &[&str], candidate: &[&str], n: usize) -> f64 {
    let candidate_counts = ngram_counts(candidate, n);
    let reference_counts = ngram_counts(reference, n);
    let total: usize = candidate_counts.values().sum();
    if total == 0 {
        return 0.0;
    }
    let matched: usize = candidate_counts
        .iter()
        .map(|(gram, count)| (*count).min(reference_counts.get(gram).copied().unwrap_or(0)))
        .sum();
    if matched == 0 {
        SMOOTHING_EPSILON / total as f64
    } else {
        matched as f64 / total as f64
    }
}

/// Score the similarity of `candidate` to `reference` in `[0, 1]`.
///
/// Tokens are whitespace-separated words. The n-gram order is capped at
/// the shorter token count so single-word texts stay defined. Identical
/// texts score 1.0; an empty candidate against a non-empty reference
/// scores 0.0.
pub fn fidelity_score(reference: &str, candidate: &str) -> f64 {
    let reference: Vec<&str> = reference.split_whitespace().collect();
    let candidate: Vec<&str> = candidate.split_whitespace().collect();
    if reference.is_empty() && candidate.is_empty() {
        return 1.0;
    }
    if reference.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let max_order = MAX_ORDER.min(reference.len()).min(candidate.len());
    let weight = 1.0 / max_order as f64;
    let log_mean: f64 = (1..=max_order)
        .map(|n| weight * modified_precision(&reference, &candidate, n).ln())
        .sum();

    let brevity_penalty = if candidate.len() < reference.len() {
        (1.0 - reference.len() as f64 / candidate.len() as f64).exp()
    } else {
        1.0
    };

    (brevity_penalty * log_mean.exp()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_score_one() {
        assert_eq!(fidelity_score("no change here", "no change here"), 1.0);
        assert_eq!(fidelity_score("word", "word"), 1.0);
        assert_eq!(fidelity_score("", ""), 1.0);
    }

    #[test]
    fn empty_candidate_against_text_scores_zero() {
        assert_eq!(fidelity_score("some notes", ""), 0.0);
        assert_eq!(fidelity_score("", "some notes"), 0.0);
    }

    #[test]
    fn expansion_lowers_but_does_not_zero_the_score() {
        let score = fidelity_score(
            "Pt has DM and HBP",
            "Patient has Diabetes Mellitus and High Blood Pressure",
        );
        assert!(score > 0.0 && score < 1.0, "score was {score}");
    }

    #[test]
    fn disjoint_texts_score_near_zero_but_positive() {
        let score = fidelity_score("alpha beta gamma delta", "one two three four");
        assert!(score > 0.0, "smoothing must keep the score positive");
        assert!(score < 0.1, "score was {score}");
    }

    #[test]
    fn partial_overlap_ranks_above_disjoint() {
        let reference = "patient reports chest pain at night";
        let close = fidelity_score(reference, "patient reports chest pain at rest");
        let far = fidelity_score(reference, "unrelated words entirely different text");
        assert!(close > far);
    }

    #[test]
    fn short_strings_stay_defined() {
        let score = fidelity_score("BP", "Blood Pressure");
        assert!((0.0..=1.0).contains(&score));
        assert!(score > 0.0);
    }
}
