use crate::clusterer::{
    centroid::recompute_centroids,
    init::kmeans_plus_plus,
    rng::Mulberry32,
    similarity::cosine_distance,
    types::{Cluster, ClusterResult},
};
use tracing::debug;

/// Spherical k-means over unit vectors.
///
/// Seeds with k-means++ from a generator keyed on corpus shape, so identical
/// input always yields identical output.
pub fn kmeans(vectors: &[Vec<f32>], k: usize, max_iters: usize) -> ClusterResult {
    let n = vectors.len();
    if n == 0 || k == 0 {
        return ClusterResult::default();
    }

    let dim = vectors[0].len();
    let mut rng = Mulberry32::from_corpus_shape(n, dim);

    // 1. Pick well-separated initial centers (copied, never aliased)
    let seeds = kmeans_plus_plus(vectors, k, &mut rng);
    let centroids: Vec<Vec<f32>> = seeds.iter().map(|&i| vectors[i].clone()).collect();

    let (assignments, centroids, iterations) = lloyd(vectors, centroids, max_iters);
    debug!(n, dim, k, iterations, "k-means finished");

    // 2. Build result clusters
    let mut clusters: Vec<Cluster> = centroids
        .into_iter()
        .enumerate()
        .map(|(i, centroid)| Cluster {
            id: i as u32,
            members: vec![],
            centroid,
        })
        .collect();

    for (doc, &cluster_idx) in assignments.iter().enumerate() {
        clusters[cluster_idx].members.push(doc);
    }

    ClusterResult {
        clusters,
        assignments,
        seeds,
        iterations,
    }
}

/// Lloyd iteration from the given centroids.
///
/// Returns `(assignments, centroids, iterations)`. Stops once no document
/// changes cluster or after `max_iters` rounds. Clusters that lose every
/// member keep their previous centroid.
pub fn lloyd(
    vectors: &[Vec<f32>],
    mut centroids: Vec<Vec<f32>>,
    max_iters: usize,
) -> (Vec<usize>, Vec<Vec<f32>>, usize) {
    let n = vectors.len();
    let k = centroids.len();
    let mut assignments = vec![0usize; n];
    let mut iterations = 0;

    if k == 0 {
        return (assignments, centroids, iterations);
    }

    for _ in 0..max_iters {
        iterations += 1;

        // Assign each vector to nearest centroid; ties go to the lowest index
        let mut changed = false;
        for (i, v) in vectors.iter().enumerate() {
            let best = centroids
                .iter()
                .enumerate()
                .map(|(c, center)| (c, cosine_distance(v, center)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map_or(0, |(c, _)| c);

            if assignments[i] != best {
                changed = true;
                assignments[i] = best;
            }
        }

        // Recompute centroids
        for (c, centroid) in recompute_centroids(vectors, &assignments, k)
            .into_iter()
            .enumerate()
        {
            if let Some(centroid) = centroid {
                centroids[c] = centroid;
            }
        }

        if !changed {
            break; // converged
        }
    }

    (assignments, centroids, iterations)
}
