use crate::vectorizer::Vocabulary;

/// Joins label terms
pub const LABEL_SEPARATOR: &str = " · ";

/// Label used when a cluster has no positively weighted term
pub const GENERIC_LABEL: &str = "Topic";

/// Up to `max_terms` vocabulary terms with positive centroid weight,
/// heaviest first; equal weights keep vocabulary order.
pub fn top_terms(vocabulary: &Vocabulary, centroid: &[f32], max_terms: usize) -> Vec<String> {
    let mut scored: Vec<(&str, f32)> = vocabulary
        .terms()
        .iter()
        .zip(centroid.iter())
        .filter(|&(_, &w)| w > 0.0)
        .map(|(term, &w)| (term.as_str(), w))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(max_terms);
    scored.into_iter().map(|(term, _)| term.to_string()).collect()
}

/// Display label for the cluster at `index` (0-based, pre-sort)
pub fn make_label(terms: &[String], index: usize) -> String {
    if terms.is_empty() {
        format!("{} {}", GENERIC_LABEL, index + 1)
    } else {
        terms.join(LABEL_SEPARATOR)
    }
}
