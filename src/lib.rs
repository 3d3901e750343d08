// Public API exports
pub mod clusterer;
pub mod conversation;
pub mod parser;
pub mod tokenizer;
pub mod topics;
pub mod vectorizer;

// Re-export main types for convenience
pub use tokenizer::{MIN_TOKEN_LEN, STOPWORDS, Term, tokenize, trim_blank};

pub use vectorizer::{DEFAULT_MAX_VOCAB, TfIdf, Vocabulary, vectorize};

pub use clusterer::{Cluster, ClusterResult, MAX_ITERATIONS, Mulberry32, kmeans};

pub use topics::{
    DEFAULT_MAX_TERMS_PER_LABEL, Document, TopicCluster, TopicOptions, cluster_topics,
};

pub use conversation::{ChatNode, Role};

pub use parser::{FormatChain, TranscriptError, TranscriptFormat, parse_transcript};
