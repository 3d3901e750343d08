mod centroid;
mod init;
mod kmeans;
mod rng;
mod similarity;
mod types;


pub use centroid::{compute_centroid, recompute_centroids};
pub use init::kmeans_plus_plus;
pub use kmeans::{kmeans, lloyd};
pub use rng::{Mulberry32, fnv1a_32};
pub use similarity::{cosine_distance, dot};
pub use types::{Cluster, ClusterResult};

/// Hard cap on assign/update rounds
pub const MAX_ITERATIONS: usize = 30;
