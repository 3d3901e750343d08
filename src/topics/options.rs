use crate::vectorizer::DEFAULT_MAX_VOCAB;
use serde::{Deserialize, Serialize};

/// Default cap on terms joined into a label
pub const DEFAULT_MAX_TERMS_PER_LABEL: usize = 4;

/// Cluster count bounds applied after the request or heuristic
pub const MIN_CLUSTERS: usize = 2;
pub const MAX_CLUSTERS: usize = 10;

/// Upper bound on the automatic heuristic alone
pub const AUTO_K_MAX: usize = 8;

/// Knobs for a clustering call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TopicOptions {
    /// Requested cluster count; `None` picks one from the document count
    pub k: Option<usize>,
    pub max_vocab: usize,
    pub max_terms_per_label: usize,
}

impl Default for TopicOptions {
    fn default() -> Self {
        Self {
            k: None,
            max_vocab: DEFAULT_MAX_VOCAB,
            max_terms_per_label: DEFAULT_MAX_TERMS_PER_LABEL,
        }
    }
}

impl TopicOptions {
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    pub fn with_max_vocab(mut self, max_vocab: usize) -> Self {
        self.max_vocab = max_vocab;
        self
    }

    pub fn with_max_terms_per_label(mut self, max_terms: usize) -> Self {
        self.max_terms_per_label = max_terms;
        self
    }

    /// Effective cluster count for `n` documents, clamped to `[2, min(10, n)]`
    pub fn resolve_k(&self, n: usize) -> usize {
        let wanted = self.k.unwrap_or_else(|| auto_k(n));
        let hi = MAX_CLUSTERS.min(n).max(MIN_CLUSTERS);
        wanted.clamp(MIN_CLUSTERS, hi)
    }
}

/// `round(sqrt(n / 2))`, kept within `[2, 8]`
pub fn auto_k(n: usize) -> usize {
    let k = (n as f64 / 2.0).sqrt().round() as usize;
    k.clamp(MIN_CLUSTERS, AUTO_K_MAX)
}
