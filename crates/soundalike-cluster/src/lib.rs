//! # soundalike-cluster
//!
//! **Tier 3 (Aggregation & Ranking)**
//!
//! Turns phonetic buckets into immutable [`ConfusionCluster`] records and
//! ranks them by confusion score.
//!
//! ## What belongs here
//! * Singleton filtering and per-cluster aggregates
//! * Stable ranking
//! * Read-only display values consumed by report renderers
//!
//! ## What does NOT belong here
//! * Encoding names (see `soundalike-phonetic`)
//! * The score formula itself (see `soundalike-score`)

use soundalike_diversity::diversity;
use soundalike_math::{mean, mean_u64};
use soundalike_phonetic::PhoneticIndex;
use soundalike_types::{NameRecord, PhoneticKey};

/// Smallest bucket that can form a cluster.
pub const MIN_CLUSTER_SIZE: usize = 2;

/// Members with complexity strictly above this count as "high complexity".
pub const HIGH_COMPLEXITY_THRESHOLD: f64 = 0.6;

/// A scored group of at least two names sharing a phonetic key.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionCluster {
    phonetic_code: PhoneticKey,
    members: Vec<NameRecord>,
    avg_value: f64,
    avg_complexity: f64,
    confusion_score: f64,
}

impl ConfusionCluster {
    /// Aggregate a bucket into a cluster.
    ///
    /// Returns `None` for buckets below [`MIN_CLUSTER_SIZE`].
    pub fn from_bucket(phonetic_code: PhoneticKey, members: Vec<NameRecord>) -> Option<Self> {
        if members.len() < MIN_CLUSTER_SIZE {
            return None;
        }
        let values: Vec<u64> = members.iter().map(NameRecord::value).collect();
        let complexities: Vec<f64> = members.iter().map(NameRecord::complexity).collect();
        let confusion_score = soundalike_score::score(&members);
        Some(Self {
            phonetic_code,
            avg_value: mean_u64(&values),
            avg_complexity: mean(&complexities),
            confusion_score,
            members,
        })
    }

    pub fn phonetic_code(&self) -> &PhoneticKey {
        &self.phonetic_code
    }

    pub fn members(&self) -> &[NameRecord] {
        &self.members
    }

    pub fn avg_value(&self) -> f64 {
        self.avg_value
    }

    pub fn avg_complexity(&self) -> f64 {
        self.avg_complexity
    }

    pub fn confusion_score(&self) -> f64 {
        self.confusion_score
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(NameRecord::name).collect()
    }

    /// Members whose complexity exceeds [`HIGH_COMPLEXITY_THRESHOLD`].
    pub fn high_complexity_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.complexity() > HIGH_COMPLEXITY_THRESHOLD)
            .count()
    }

    pub fn min_value(&self) -> u64 {
        self.members.iter().map(NameRecord::value).min().unwrap_or(0)
    }

    pub fn max_value(&self) -> u64 {
        self.members.iter().map(NameRecord::value).max().unwrap_or(0)
    }

    /// Orthographic diversity recomputed from the members.
    ///
    /// Always equal to the diversity term used when scoring.
    pub fn orthographic_diversity(&self) -> f64 {
        diversity(&self.names())
    }
}

/// Build clusters from every bucket with at least two members, in bucket order.
pub fn build(index: PhoneticIndex) -> Vec<ConfusionCluster> {
    index
        .into_iter()
        .filter_map(|(key, members)| ConfusionCluster::from_bucket(key, members))
        .collect()
}

/// Same as [`build`], scoring buckets on the rayon thread pool.
///
/// Output order matches [`build`] exactly.
#[cfg(feature = "parallel")]
pub fn build_parallel(index: PhoneticIndex) -> Vec<ConfusionCluster> {
    use rayon::prelude::*;

    let buckets: Vec<(PhoneticKey, Vec<NameRecord>)> = index.into_iter().collect();
    buckets
        .into_par_iter()
        .filter_map(|(key, members)| ConfusionCluster::from_bucket(key, members))
        .collect()
}

/// Sort clusters by confusion score, highest first.
///
/// The sort is stable: clusters with equal scores keep their build order.
pub fn rank(mut clusters: Vec<ConfusionCluster>) -> Vec<ConfusionCluster> {
    clusters.sort_by(|a, b| b.confusion_score.total_cmp(&a.confusion_score));
    clusters
}
