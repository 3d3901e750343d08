mod labeler;
mod options;


pub use labeler::{GENERIC_LABEL, LABEL_SEPARATOR, make_label, top_terms};
pub use options::{
    AUTO_K_MAX, DEFAULT_MAX_TERMS_PER_LABEL, MAX_CLUSTERS, MIN_CLUSTERS, TopicOptions, auto_k,
};

use crate::clusterer::{MAX_ITERATIONS, compute_centroid, kmeans};
use crate::tokenizer::{Term, tokenize, trim_blank};
use crate::vectorizer::vectorize;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A piece of text to cluster, identified by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A labeled group of documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicCluster {
    /// `topic-<index>` where index is the cluster's position before sorting
    pub id: String,
    pub label: String,
    pub terms: Vec<String>,
    /// Member document ids in input order
    pub member_ids: Vec<String>,
}

/// Identity string for the cluster at a pre-sort index
pub fn topic_id(index: usize) -> String {
    format!("topic-{}", index)
}

/// Group documents into labeled topics, largest first.
///
/// Documents with blank text are ignored. Never fails: no documents gives an
/// empty list, a single document gives one unlabeled topic.
pub fn cluster_topics(documents: &[Document], options: &TopicOptions) -> Vec<TopicCluster> {
    let docs: Vec<&Document> = documents
        .iter()
        .filter(|d| !trim_blank(&d.text).is_empty())
        .collect();

    match docs.as_slice() {
        [] => return vec![],
        [only] => {
            return vec![TopicCluster {
                id: topic_id(0),
                label: GENERIC_LABEL.to_string(),
                terms: vec![],
                member_ids: vec![only.id.clone()],
            }];
        }
        _ => {}
    }

    let n = docs.len();
    let k = options.resolve_k(n);

    let tokenized: Vec<Vec<Term>> = docs.iter().map(|d| tokenize(trim_blank(&d.text))).collect();
    let tfidf = vectorize(&tokenized, options.max_vocab);
    debug!(
        documents = n,
        skipped = documents.len() - n,
        vocab = tfidf.dim(),
        k,
        "clustering topics"
    );

    let result = kmeans(&tfidf.vectors, k, MAX_ITERATIONS);

    // Ids come from the pre-sort index; empties are dropped after labeling
    let mut topics: Vec<TopicCluster> = result
        .clusters
        .iter()
        .enumerate()
        .map(|(idx, cluster)| {
            let members: Vec<&[f32]> = cluster
                .members
                .iter()
                .map(|&i| &tfidf.vectors[i][..])
                .collect();

            let centroid = if members.is_empty() {
                vec![0.0; tfidf.dim()]
            } else {
                compute_centroid(&members)
            };

            let terms = top_terms(&tfidf.vocabulary, &centroid, options.max_terms_per_label);
            TopicCluster {
                id: topic_id(idx),
                label: make_label(&terms, idx),
                terms,
                member_ids: cluster.members.iter().map(|&i| docs[i].id.clone()).collect(),
            }
        })
        .filter(|t| !t.member_ids.is_empty())
        .collect();

    // sort_by is stable, so equal sizes keep index order
    topics.sort_by(|a, b| b.member_ids.len().cmp(&a.member_ids.len()));

    debug!(topics = topics.len(), iterations = result.iterations, "topics ready");
    topics
}
