use crate::vectorizer::l2_normalize;

/// Mean of the member vectors, renormalized to unit length.
///
/// An all-zero sum stays zero.
pub fn compute_centroid(vectors: &[&[f32]]) -> Vec<f32> {
    let dim = vectors.first().map_or(0, |v| v.len());
    let mut out = vec![0.0; dim];

    for v in vectors {
        for (o, x) in out.iter_mut().zip(v.iter()) {
            *o += x;
        }
    }

    let n = vectors.len() as f32;
    for o in out.iter_mut() {
        *o /= n;
    }

    l2_normalize(&mut out);
    out
}

/// Centroid per cluster index for the given assignment; `None` for clusters with no members
pub fn recompute_centroids(
    vectors: &[Vec<f32>],
    assignments: &[usize],
    k: usize,
) -> Vec<Option<Vec<f32>>> {
    (0..k)
        .map(|c| {
            let members: Vec<&[f32]> = vectors
                .iter()
                .zip(assignments.iter())
                .filter(|&(_, a)| *a == c)
                .map(|(v, _)| &v[..])
                .collect();

            if members.is_empty() {
                None
            } else {
                Some(compute_centroid(&members))
            }
        })
        .collect()
}
