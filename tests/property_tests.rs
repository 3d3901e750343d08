use chatmap::{
    Document, MAX_ITERATIONS, TopicOptions, cluster_topics, kmeans, tokenize, vectorize,
};
use proptest::prelude::*;
use std::collections::HashSet;

const WORDS: &[&str] = &[
    "rust", "cargo", "borrow", "lifetime", "pasta", "tomato", "garlic", "japan", "tokyo",
    "train", "the", "and", "42", "ok",
];

fn corpus() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(prop::collection::vec(prop::sample::select(WORDS), 0..8), 0..25)
        .prop_map(|docs| {
            docs.into_iter()
                .enumerate()
                .map(|(i, words)| Document::new(format!("d{}", i), words.join(" ")))
                .collect()
        })
}

fn options() -> impl Strategy<Value = TopicOptions> {
    (prop::option::of(0usize..15), 0usize..20, 0usize..6).prop_map(|(k, vocab, terms)| {
        TopicOptions {
            k,
            max_vocab: vocab,
            max_terms_per_label: terms,
        }
    })
}

fn unit_vectors(n: usize, dim: usize) -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(0.0f32..1.0, dim), n).prop_map(|mut vs| {
        for v in vs.iter_mut() {
            chatmap::vectorizer::l2_normalize(v);
        }
        vs
    })
}

proptest! {
    #[test]
    fn prop_partition(docs in corpus(), opts in options()) {
        let topics = cluster_topics(&docs, &opts);

        let expected: HashSet<&str> = docs
            .iter()
            .filter(|d| !d.text.trim().is_empty())
            .map(|d| d.id.as_str())
            .collect();
        let members: Vec<&str> = topics
            .iter()
            .flat_map(|t| t.member_ids.iter().map(String::as_str))
            .collect();
        let unique: HashSet<&str> = members.iter().copied().collect();

        prop_assert_eq!(members.len(), expected.len());
        prop_assert_eq!(unique, expected);
        prop_assert!(topics.iter().all(|t| !t.member_ids.is_empty()));
        prop_assert!(topics.len() <= 10);
    }

    #[test]
    fn prop_sorted_by_size(docs in corpus(), opts in options()) {
        let topics = cluster_topics(&docs, &opts);
        for w in topics.windows(2) {
            prop_assert!(w[0].member_ids.len() >= w[1].member_ids.len());
        }
    }

    #[test]
    fn prop_deterministic(docs in corpus(), opts in options()) {
        let a = serde_json::to_string(&cluster_topics(&docs, &opts)).unwrap();
        let b = serde_json::to_string(&cluster_topics(&docs, &opts)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_label_terms_bounded(docs in corpus(), opts in options()) {
        for topic in cluster_topics(&docs, &opts) {
            prop_assert!(topic.terms.len() <= opts.max_terms_per_label);
            prop_assert!(topic.id.starts_with("topic-"));
        }
    }

    #[test]
    fn prop_iteration_bound(docs in corpus(), k in 1usize..8) {
        let tokenized: Vec<Vec<String>> = docs.iter().map(|d| tokenize(&d.text)).collect();
        let tfidf = vectorize(&tokenized, 250);
        let k = k.min(tfidf.vectors.len());

        let res = kmeans(&tfidf.vectors, k, MAX_ITERATIONS);
        prop_assert!(res.iterations <= MAX_ITERATIONS);
        prop_assert_eq!(res.assignments.len(), tfidf.vectors.len());
        prop_assert!(res.assignments.iter().all(|&a| a < k.max(1)));
    }

    #[test]
    fn prop_same_shape_same_first_seed(
        (a, b) in (2usize..12, 1usize..6)
            .prop_flat_map(|(n, dim)| (unit_vectors(n, dim), unit_vectors(n, dim)))
    ) {
        let ra = kmeans(&a, 2, MAX_ITERATIONS);
        let rb = kmeans(&b, 2, MAX_ITERATIONS);
        prop_assert_eq!(ra.seeds[0], rb.seeds[0]);
    }
}
