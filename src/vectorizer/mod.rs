mod tfidf;
mod vocab;


pub use tfidf::{TfIdf, l2_normalize, vectorize};
pub use vocab::{Vocabulary, smoothed_idf};

/// Default cap on vocabulary size (and so on vector dimensionality)
pub const DEFAULT_MAX_VOCAB: usize = 250;
