use crate::tokenizer::Term;
use std::collections::HashMap;

/// Bounded, corpus-ranked vocabulary.
///
/// Position `i` in every document vector corresponds to `terms[i]`.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<Term>,
    document_frequency: Vec<usize>,
    idf: Vec<f32>,
    index: HashMap<Term, usize>,
}

/// Corpus-wide statistics for one distinct term
#[derive(Debug)]
struct CorpusTerm<'a> {
    term: &'a str,
    /// Documents containing the term at least once
    df: usize,
    /// Sum of per-document counts
    ctf: usize,
}

/// `ln(1 + N / (1 + df))`; the `+1` keeps the ratio finite for unseen terms
pub fn smoothed_idf(doc_count: usize, df: usize) -> f64 {
    (1.0 + doc_count as f64 / (1.0 + df as f64)).ln()
}

impl Vocabulary {
    /// Rank every corpus term by `ctf * idf` and keep the top `max_vocab`.
    ///
    /// Equal scores keep first-seen-in-corpus order.
    pub fn build(tokenized: &[Vec<Term>], max_vocab: usize) -> Self {
        let doc_count = tokenized.len();
        let stats = corpus_terms(tokenized);

        let mut scored: Vec<(&CorpusTerm, f64)> = stats
            .iter()
            .map(|s| (s, s.ctf as f64 * smoothed_idf(doc_count, s.df)))
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(max_vocab);

        let mut vocab = Self::default();
        for (position, (stat, _score)) in scored.into_iter().enumerate() {
            vocab.terms.push(stat.term.to_string());
            vocab.document_frequency.push(stat.df);
            vocab.idf.push(smoothed_idf(doc_count, stat.df) as f32);
            vocab.index.insert(stat.term.to_string(), position);
        }

        vocab
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in vector-position order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term(&self, position: usize) -> Option<&str> {
        self.terms.get(position).map(String::as_str)
    }

    /// Vector position of a term, if it made the cut
    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn idf(&self) -> &[f32] {
        &self.idf
    }

    pub fn document_frequency(&self, position: usize) -> Option<usize> {
        self.document_frequency.get(position).copied()
    }
}

/// Count a document's terms, preserving first-occurrence order
pub(crate) fn count_terms(tokens: &[Term]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        match slots.get(token.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(token.as_str(), counts.len());
                counts.push((token.as_str(), 1));
            }
        }
    }

    counts
}

/// Single pass over the corpus building df/ctf tables in first-seen order
fn corpus_terms(tokenized: &[Vec<Term>]) -> Vec<CorpusTerm<'_>> {
    let mut stats: Vec<CorpusTerm> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for tokens in tokenized {
        for (term, count) in count_terms(tokens) {
            match slots.get(term) {
                Some(&slot) => {
                    stats[slot].df += 1;
                    stats[slot].ctf += count;
                }
                None => {
                    slots.insert(term, stats.len());
                    stats.push(CorpusTerm {
                        term,
                        df: 1,
                        ctf: count,
                    });
                }
            }
        }
    }

    stats
}
