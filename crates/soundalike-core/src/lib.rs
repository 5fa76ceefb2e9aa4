//! # soundalike-core
//!
//! This crate is the **primary library interface** for `soundalike`.
//! It runs the scoring pipeline end to end:
//!
//! ```text
//! RawRecord -> ingest (complexity) -> phonetic index -> clusters -> ranking
//! ```
//!
//! Each stage consumes the previous stage's output and nothing else, so every
//! stage can be exercised in isolation through its own crate.
//!
//! ## Example
//!
//! ```rust
//! use soundalike_core::{AnalyzeOptions, analyze};
//! use soundalike_phonetic::DoubleMetaphoneEncoder;
//! use soundalike_types::RawRecord;
//!
//! let records = vec![
//!     RawRecord::new("Katherine", 10),
//!     RawRecord::new("Catherine", 7),
//! ];
//! let analysis = analyze(&records, &DoubleMetaphoneEncoder::new(), AnalyzeOptions::default())
//!     .expect("records are valid");
//! assert_eq!(analysis.clusters.len(), 1);
//! ```

mod error;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

pub use error::{IngestError, InvalidReason};
pub use soundalike_cluster as cluster;
pub use soundalike_types as types;

use soundalike_cluster::ConfusionCluster;
use soundalike_complexity::ComplexityBreakdown;
use soundalike_phonetic::{PhoneticEncoder, PhoneticIndex};
use soundalike_types::{NameRecord, PhoneticKey, RawRecord};

/// Runtime switches for [`analyze`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeOptions {
    /// Score buckets on the rayon pool. Requires the `parallel` feature;
    /// otherwise scoring stays serial.
    pub parallel: bool,
}

/// Counts describing one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub records: usize,
    pub buckets: usize,
    /// Buckets discarded because they held a single name.
    pub singleton_buckets: usize,
    pub clusters: usize,
    /// Names that ended up in some cluster.
    pub clustered_names: usize,
}

/// Ranked clusters plus run summary.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub summary: AnalysisSummary,
    pub clusters: Vec<ConfusionCluster>,
}

/// Complexity and phonetic key for a single name.
#[derive(Debug, Clone, Serialize)]
pub struct NameExplanation {
    pub name: String,
    pub phonetic_code: String,
    pub complexity: f64,
    pub breakdown: ComplexityBreakdown,
}

/// Validate raw pairs and compute each record's complexity.
///
/// Fails on the first record with an empty name or a negative value.
pub fn ingest(raw: &[RawRecord]) -> Result<Vec<NameRecord>, IngestError> {
    raw.iter()
        .enumerate()
        .map(|(index, r)| {
            if r.name.is_empty() {
                return Err(IngestError::InvalidRecord {
                    index,
                    reason: InvalidReason::EmptyName,
                });
            }
            let value = u64::try_from(r.value).map_err(|_| IngestError::InvalidRecord {
                index,
                reason: InvalidReason::NegativeValue(r.value),
            })?;
            Ok(NameRecord::new(
                r.name.as_str(),
                value,
                soundalike_complexity::compute(&r.name),
            ))
        })
        .collect()
}

/// Run the full pipeline over already-parsed records.
pub fn analyze<E>(
    raw: &[RawRecord],
    encoder: &E,
    options: AnalyzeOptions,
) -> Result<Analysis, IngestError>
where
    E: PhoneticEncoder + ?Sized,
{
    let records = {
        let _span = info_span!("ingest", records = raw.len()).entered();
        ingest(raw)?
    };
    let record_count = records.len();

    let index = {
        let _span = info_span!("index").entered();
        soundalike_phonetic::index(records, encoder)
    };
    let bucket_count = index.len();
    debug!(buckets = bucket_count, "phonetic index built");

    let built = {
        let _span = info_span!("build", parallel = options.parallel).entered();
        build_clusters(index, options)
    };

    let clusters = {
        let _span = info_span!("rank", clusters = built.len()).entered();
        soundalike_cluster::rank(built)
    };

    let clustered_names = clusters.iter().map(ConfusionCluster::member_count).sum();
    let summary = AnalysisSummary {
        records: record_count,
        buckets: bucket_count,
        singleton_buckets: bucket_count - clusters.len(),
        clusters: clusters.len(),
        clustered_names,
    };
    info!(
        records = summary.records,
        clusters = summary.clusters,
        "analysis complete"
    );

    Ok(Analysis { summary, clusters })
}

/// Parse a name list from disk and analyze it.
pub fn analyze_file<E>(
    path: &Path,
    delimiter: char,
    encoder: &E,
    options: AnalyzeOptions,
) -> Result<Analysis>
where
    E: PhoneticEncoder + ?Sized,
{
    let raw = soundalike_input::parse_file(path, delimiter)
        .with_context(|| format!("Failed to parse name list {}", path.display()))?;
    debug!(records = raw.len(), path = %path.display(), "name list parsed");
    let analysis = analyze(&raw, encoder, options)
        .with_context(|| format!("Failed to analyze {}", path.display()))?;
    Ok(analysis)
}

/// Explain how a single name is scored and keyed.
pub fn explain<E>(name: &str, encoder: &E) -> NameExplanation
where
    E: PhoneticEncoder + ?Sized,
{
    let breakdown = soundalike_complexity::breakdown(name);
    let key: PhoneticKey = encoder.encode(name);
    NameExplanation {
        name: name.to_string(),
        phonetic_code: key.to_string(),
        complexity: breakdown.total(),
        breakdown,
    }
}

#[cfg(feature = "parallel")]
fn build_clusters(index: PhoneticIndex, options: AnalyzeOptions) -> Vec<ConfusionCluster> {
    if options.parallel {
        soundalike_cluster::build_parallel(index)
    } else {
        soundalike_cluster::build(index)
    }
}

#[cfg(not(feature = "parallel"))]
fn build_clusters(index: PhoneticIndex, options: AnalyzeOptions) -> Vec<ConfusionCluster> {
    if options.parallel {
        debug!("parallel scoring requested without the `parallel` feature; scoring serially");
    }
    soundalike_cluster::build(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial(name: &str) -> PhoneticKey {
        PhoneticKey::new(name.chars().take(1).collect::<String>(), "")
    }

    #[test]
    fn ingest_rejects_empty_name_with_index() {
        let raw = vec![RawRecord::new("Ann", 1), RawRecord::new("", 2)];
        let err = ingest(&raw).unwrap_err();
        assert_eq!(
            err,
            IngestError::InvalidRecord {
                index: 1,
                reason: InvalidReason::EmptyName
            }
        );
    }

    #[test]
    fn ingest_rejects_negative_value_with_index() {
        let raw = vec![RawRecord::new("Ann", -4)];
        let err = ingest(&raw).unwrap_err();
        assert_eq!(err.to_string(), "invalid record at index 0: value -4 is negative");
    }

    #[test]
    fn ingest_computes_complexity_once() {
        let raw = vec![RawRecord::new("Katherine", 10)];
        let records = ingest(&raw).unwrap();
        assert_eq!(
            records[0].complexity(),
            soundalike_complexity::compute("Katherine")
        );
        assert_eq!(records[0].value(), 10);
    }

    #[test]
    fn summary_counts_singletons() {
        let raw = vec![
            RawRecord::new("Ann", 1),
            RawRecord::new("Amy", 2),
            RawRecord::new("Bob", 3),
            RawRecord::new("Cy", 4),
        ];
        let analysis = analyze(&raw, &initial, AnalyzeOptions::default()).unwrap();
        assert_eq!(
            analysis.summary,
            AnalysisSummary {
                records: 4,
                buckets: 3,
                singleton_buckets: 2,
                clusters: 1,
                clustered_names: 2,
            }
        );
    }

    #[test]
    fn explain_reports_flattened_key() {
        let ex = explain("Ann", &initial);
        assert_eq!(ex.phonetic_code, "A|");
        assert_eq!(ex.complexity, soundalike_complexity::compute("Ann"));
    }
}
