use super::vocab::{Vocabulary, count_terms};
use crate::tokenizer::Term;

/// Vocabulary plus one weighted, unit-length vector per document
#[derive(Debug, Clone)]
pub struct TfIdf {
    pub vocabulary: Vocabulary,
    pub vectors: Vec<Vec<f32>>,
}

impl TfIdf {
    /// Vector dimensionality (equal to vocabulary size)
    pub fn dim(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Build the vocabulary and vectorize every document against it.
///
/// Each vector holds `count / max_count * idf` at vocabulary positions,
/// L2-normalized. Documents sharing no vocabulary terms get the zero vector.
pub fn vectorize(tokenized: &[Vec<Term>], max_vocab: usize) -> TfIdf {
    let vocabulary = Vocabulary::build(tokenized, max_vocab);
    let idf = vocabulary.idf();

    let vectors = tokenized
        .iter()
        .map(|tokens| {
            let mut v = vec![0.0f32; vocabulary.len()];
            let mut max_count = 0usize;

            for (term, count) in count_terms(tokens) {
                if let Some(j) = vocabulary.position(term) {
                    max_count = max_count.max(count);
                    v[j] = count as f32;
                }
            }

            if max_count > 0 {
                let max = max_count as f32;
                for (x, w) in v.iter_mut().zip(idf) {
                    if *x > 0.0 {
                        *x = (*x / max) * w;
                    }
                }
            }

            l2_normalize(&mut v);
            v
        })
        .collect();

    TfIdf {
        vocabulary,
        vectors,
    }
}

/// Scale to unit Euclidean norm in place. No-op on the zero vector.
pub fn l2_normalize(v: &mut [f32]) {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }

    for x in v.iter_mut() {
        *x /= norm;
    }
}
