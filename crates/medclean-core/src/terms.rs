//! Symptom term frequencies for the run summary.

use std::collections::BTreeMap;

use medclean_model::record::PatientRecord;

/// English stopwords excluded from term counting.
const STOPWORDS: [&str; 44] = [
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "for", "from", "had", "has",
    "have", "he", "her", "his", "i", "in", "is", "it", "its", "no", "not", "of", "on", "or",
    "she", "that", "the", "their", "them", "they", "this", "to", "was", "were", "with", "when",
    "which", "will", "would", "you",
];

fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Count lowercased symptom terms across the record set and return the
/// `top_n` most frequent, descending by count with alphabetical
/// tie-break. Tokens are whitespace-split with punctuation trimmed from
/// the edges; stopwords and empty tokens are dropped.
pub fn symptom_term_frequencies(records: &[PatientRecord], top_n: usize) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        let Some(symptoms) = record.symptoms.as_deref() else {
            continue;
        };
        for token in symptoms.split_whitespace() {
            let word: String = token
                .trim_matches(|ch: char| !ch.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() || is_stopword(&word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top_n);
    ranked
}
