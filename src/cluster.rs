//! Seed-based greedy grouping of YUV samples.
//!
//! The first unassigned sample seeds a cluster and absorbs every remaining
//! sample closer than `threshold` to the seed. Absorbed members are never
//! used as seeds themselves, so the result depends on input order.

use std::collections::VecDeque;

use crate::yuv::Yuv;

/// Group `samples` into disjoint, non-empty clusters.
///
/// Members keep their input order inside each cluster, and clusters appear
/// in the order their seeds were taken.
pub fn cluster_samples(samples: &[Yuv], threshold: f64) -> Vec<Vec<Yuv>> {
    let mut pool: VecDeque<Yuv> = samples.iter().copied().collect();
    let mut clusters = Vec::new();

    while let Some(seed) = pool.pop_front() {
        let mut members = vec![seed];
        let mut remaining = VecDeque::with_capacity(pool.len());
        for sample in pool.drain(..) {
            if seed.distance(&sample) < threshold {
                members.push(sample);
            } else {
                remaining.push_back(sample);
            }
        }
        pool = remaining;
        clusters.push(members);
    }

    clusters
}

/// Elementwise mean of `cluster`, or `None` when it is empty.
pub fn centroid(cluster: &[Yuv]) -> Option<Yuv> {
    if cluster.is_empty() {
        return None;
    }
    let (y, u, v) = cluster
        .iter()
        .fold((0.0, 0.0, 0.0), |(y, u, v), s| (y + s.y, u + s.u, v + s.v));
    let n = cluster.len() as f64;
    Some(Yuv::new(y / n, u / n, v / n))
}
