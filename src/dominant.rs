//! Dominant color selection on top of [`crate::cluster`].

use tracing::{debug, trace};

use crate::cluster::{centroid, cluster_samples};
use crate::yuv::{Rgb, Yuv, to_rgb, to_yuv};

/// Tunables for [`select_dominant_colors`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DominantColorConfig {
    /// Maximum number of colors returned.
    pub count: usize,
    /// Samples closer than this to a cluster seed join that cluster.
    pub cluster_threshold: f64,
    /// Consecutive picks must be farther apart than this.
    pub separation_threshold: f64,
    /// Candidates within this distance of the excluded color are dropped.
    pub exclude_threshold: f64,
}

impl Default for DominantColorConfig {
    fn default() -> Self {
        Self {
            count: 3,
            cluster_threshold: 16.0,
            separation_threshold: 32.0,
            exclude_threshold: 48.0,
        }
    }
}

impl DominantColorConfig {
    pub fn select(&self, samples: &[Rgb], exclude: Option<Rgb>) -> Vec<Rgb> {
        select_dominant_colors(
            samples,
            self.count,
            self.cluster_threshold,
            self.separation_threshold,
            exclude,
            self.exclude_threshold,
        )
    }
}

/// Keep only candidates farther than `threshold` from `excluded`.
pub fn exclude_near(candidates: Vec<Yuv>, excluded: Yuv, threshold: f64) -> Vec<Yuv> {
    candidates
        .into_iter()
        .filter(|c| c.distance(&excluded) > threshold)
        .collect()
}

/// Pick up to `n` representative colors from `samples`.
///
/// Cluster centroids are ranked by member count (stable on ties). Walking
/// that ranking, a pending color is committed once the next candidate lies
/// more than `separation_threshold` away from it, and that candidate becomes
/// the new pending color; closer candidates are skipped. If the ranking runs
/// out before `n` commits, the pending color is appended as well.
pub fn select_dominant_colors(
    samples: &[Rgb],
    n: usize,
    cluster_threshold: f64,
    separation_threshold: f64,
    exclude_color: Option<Rgb>,
    exclude_threshold: f64,
) -> Vec<Rgb> {
    if n == 0 || samples.is_empty() {
        return Vec::new();
    }

    let yuvs: Vec<Yuv> = samples.iter().copied().map(to_yuv).collect();
    let mut clusters = cluster_samples(&yuvs, cluster_threshold);
    clusters.sort_by(|a, b| b.len().cmp(&a.len()));
    debug!(
        samples = samples.len(),
        clusters = clusters.len(),
        largest = clusters.first().map_or(0, Vec::len),
        "clustered samples"
    );

    let mut candidates: Vec<Yuv> = clusters.iter().filter_map(|c| centroid(c)).collect();
    if let Some(color) = exclude_color {
        candidates = exclude_near(candidates, to_yuv(color), exclude_threshold);
        debug!(remaining = candidates.len(), "applied exclusion color");
    }

    let mut candidates = candidates.into_iter();
    let Some(mut pending) = candidates.next() else {
        return Vec::new();
    };

    let mut picked = Vec::with_capacity(n);
    while picked.len() < n {
        let Some(next) = candidates.next() else {
            break;
        };
        if pending.distance(&next) > separation_threshold {
            trace!(?pending, "committed color");
            picked.push(pending);
            pending = next;
        }
    }
    if picked.len() < n {
        picked.push(pending);
    }

    picked.into_iter().map(to_rgb).collect()
}
