use super::rng::Mulberry32;
use super::similarity::cosine_distance;
use tracing::trace;

/// K-means++ seeding over cosine distance.
///
/// Returns the indices of the `k` chosen documents. The first is drawn uniformly;
/// each later one by roulette-wheel selection weighted by the squared distance
/// to the nearest already-chosen centroid. Consumes exactly `k` draws from `rng`.
pub fn kmeans_plus_plus(vectors: &[Vec<f32>], k: usize, rng: &mut Mulberry32) -> Vec<usize> {
    let n = vectors.len();
    if n == 0 || k == 0 {
        return Vec::new();
    }

    let first = ((rng.next_f64() * n as f64) as usize).min(n - 1);
    let mut chosen = vec![first];
    trace!(index = first, "seeded first centroid");

    let mut weights = vec![0.0f64; n];
    while chosen.len() < k {
        let mut total = 0.0f64;
        for (i, v) in vectors.iter().enumerate() {
            let nearest = chosen
                .iter()
                .map(|&c| cosine_distance(v, &vectors[c]))
                .fold(f32::INFINITY, f32::min);
            let w = f64::from(nearest) * f64::from(nearest);
            weights[i] = w;
            total += w;
        }

        let target = rng.next_f64() * total;
        let mut cumulative = 0.0f64;
        let next = weights
            .iter()
            .position(|&w| {
                cumulative += w;
                cumulative >= target
            })
            .unwrap_or(n - 1);

        trace!(index = next, total_weight = total, "seeded centroid");
        chosen.push(next);
    }

    chosen
}
