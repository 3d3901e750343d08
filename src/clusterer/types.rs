/// One k-means cluster over document indices
#[derive(Debug, Clone)]
pub struct Cluster {
    pub id: u32,
    /// Indices into the clustered vector list, ascending
    pub members: Vec<usize>,
    pub centroid: Vec<f32>,
}

#[derive(Debug, Clone, Default)]
pub struct ClusterResult {
    pub clusters: Vec<Cluster>,
    /// Cluster index per input vector
    pub assignments: Vec<usize>,
    /// Document indices picked as initial centroids, in draw order
    pub seeds: Vec<usize>,
    pub iterations: usize,
}
