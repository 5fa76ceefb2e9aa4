//! # soundalike-format
//!
//! **Tier 3 (Formatting)**
//!
//! This crate handles the rendering and serialization of `soundalike`
//! reports. It supports Markdown, TSV, and JSON.
//!
//! ## What belongs here
//! * Row shaping and display rounding
//! * Markdown / TSV rendering and JSON receipts
//! * Output writing
//!
//! ## What does NOT belong here
//! * Computing scores or aggregates
//! * CLI arg parsing

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use soundalike_cluster::ConfusionCluster;
use soundalike_core::{Analysis, AnalysisSummary, NameExplanation};
use soundalike_math::round_f64;
use soundalike_types::{ReportFormat, SCHEMA_VERSION, ToolInfo};

/// Decimal places used for every displayed float.
const DISPLAY_DECIMALS: u32 = 4;

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// One cluster, shaped for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterRow {
    pub rank: usize,
    pub phonetic_code: String,
    pub names: Vec<String>,
    pub member_count: usize,
    pub high_complexity_count: usize,
    pub min_value: u64,
    pub max_value: u64,
    pub avg_value: f64,
    pub avg_complexity: f64,
    pub orthographic_diversity: f64,
    pub confusion_score: f64,
}

impl ClusterRow {
    fn from_cluster(rank: usize, cluster: &ConfusionCluster) -> Self {
        Self {
            rank,
            phonetic_code: cluster.phonetic_code().to_string(),
            names: cluster.names().into_iter().map(str::to_string).collect(),
            member_count: cluster.member_count(),
            high_complexity_count: cluster.high_complexity_count(),
            min_value: cluster.min_value(),
            max_value: cluster.max_value(),
            avg_value: round_f64(cluster.avg_value(), DISPLAY_DECIMALS),
            avg_complexity: round_f64(cluster.avg_complexity(), DISPLAY_DECIMALS),
            orthographic_diversity: round_f64(cluster.orthographic_diversity(), DISPLAY_DECIMALS),
            confusion_score: round_f64(cluster.confusion_score(), DISPLAY_DECIMALS),
        }
    }
}

/// JSON receipt for a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub summary: AnalysisSummary,
    /// Row limit applied (0 = all).
    pub top: usize,
    pub clusters: Vec<ClusterRow>,
}

/// Shape ranked clusters into rows, keeping only the first `top` (0 = all).
pub fn cluster_rows(clusters: &[ConfusionCluster], top: usize) -> Vec<ClusterRow> {
    let take = if top == 0 { clusters.len() } else { top };
    clusters
        .iter()
        .take(take)
        .enumerate()
        .map(|(i, c)| ClusterRow::from_cluster(i + 1, c))
        .collect()
}

pub fn render(analysis: &Analysis, format: ReportFormat, top: usize) -> Result<String> {
    match format {
        ReportFormat::Md => Ok(render_md(analysis, top)),
        ReportFormat::Tsv => Ok(render_tsv(analysis, top)),
        ReportFormat::Json => render_json(analysis, top),
    }
}

/// Render and write a report to `output`, or stdout when `None`.
pub fn write_report(
    analysis: &Analysis,
    format: ReportFormat,
    top: usize,
    output: Option<&Path>,
) -> Result<()> {
    let text = render(analysis, format, top)?;
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut out = BufWriter::new(file);
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

fn md_escape(s: &str) -> String {
    s.replace('|', "\\|")
}

fn tsv_escape(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

pub fn render_md(analysis: &Analysis, top: usize) -> String {
    let mut s = String::new();
    s.push_str("## Confusion clusters\n\n");

    let rows = cluster_rows(&analysis.clusters, top);
    if rows.is_empty() {
        s.push_str("_No confusion clusters found._\n");
    } else {
        s.push_str(
            "|Rank|Code|Size|High|Min|Max|Avg Value|Avg Complexity|Diversity|Score|Names|\n",
        );
        s.push_str("|---:|---|---:|---:|---:|---:|---:|---:|---:|---:|---|\n");
        for r in &rows {
            s.push_str(&format!(
                "|{}|{}|{}|{}|{}|{}|{:.4}|{:.4}|{:.4}|{:.4}|{}|\n",
                r.rank,
                md_escape(&r.phonetic_code),
                r.member_count,
                r.high_complexity_count,
                r.min_value,
                r.max_value,
                r.avg_value,
                r.avg_complexity,
                r.orthographic_diversity,
                r.confusion_score,
                md_escape(&r.names.join(", ")),
            ));
        }
    }

    let sum = &analysis.summary;
    s.push_str(&format!(
        "\n**Summary:** {} records, {} buckets, {} singletons dropped, {} clusters, {} clustered names\n",
        sum.records, sum.buckets, sum.singleton_buckets, sum.clusters, sum.clustered_names
    ));
    s
}

pub fn render_tsv(analysis: &Analysis, top: usize) -> String {
    let mut s = String::new();
    s.push_str("Rank\tCode\tSize\tHigh\tMin\tMax\tAvgValue\tAvgComplexity\tDiversity\tScore\tNames\n");
    for r in cluster_rows(&analysis.clusters, top) {
        s.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{}\n",
            r.rank,
            tsv_escape(&r.phonetic_code),
            r.member_count,
            r.high_complexity_count,
            r.min_value,
            r.max_value,
            r.avg_value,
            r.avg_complexity,
            r.orthographic_diversity,
            r.confusion_score,
            tsv_escape(&r.names.join(", ")),
        ));
    }
    s
}

pub fn render_json(analysis: &Analysis, top: usize) -> Result<String> {
    let receipt = ReportReceipt {
        schema_version: SCHEMA_VERSION,
        generated_at_ms: now_ms(),
        tool: ToolInfo::current(),
        summary: analysis.summary.clone(),
        top,
        clusters: cluster_rows(&analysis.clusters, top),
    };
    let mut out = serde_json::to_string_pretty(&receipt)?;
    out.push('\n');
    Ok(out)
}

/// Render name explanations as Markdown or TSV; JSON emits an array.
pub fn render_explanations(items: &[NameExplanation], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Md => Ok(render_explanations_md(items)),
        ReportFormat::Tsv => Ok(render_explanations_tsv(items)),
        ReportFormat::Json => {
            let mut s = serde_json::to_string_pretty(items)?;
            s.push('\n');
            Ok(s)
        }
    }
}

fn render_explanations_md(items: &[NameExplanation]) -> String {
    let mut s = String::new();
    s.push_str("|Name|Code|Length|Syllables|Non-standard|Ortho|Density|Complexity|\n");
    s.push_str("|---|---|---:|---:|---:|---:|---:|---:|\n");
    for e in items {
        let b = &e.breakdown;
        s.push_str(&format!(
            "|{}|{}|{:.4}|{:.4}|{:.4}|{:.4}|{:.4}|{:.4}|\n",
            md_escape(&e.name),
            md_escape(&e.phonetic_code),
            b.length_factor,
            b.syllable_factor,
            b.non_standard_factor,
            b.ortho_neighbor_factor,
            b.phonetic_density_factor,
            e.complexity,
        ));
    }
    s
}

fn render_explanations_tsv(items: &[NameExplanation]) -> String {
    let mut s = String::new();
    s.push_str("Name\tCode\tLength\tSyllables\tNonStandard\tOrtho\tDensity\tComplexity\n");
    for e in items {
        let b = &e.breakdown;
        s.push_str(&format!(
            "{}\t{}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\n",
            tsv_escape(&e.name),
            tsv_escape(&e.phonetic_code),
            b.length_factor,
            b.syllable_factor,
            b.non_standard_factor,
            b.ortho_neighbor_factor,
            b.phonetic_density_factor,
            e.complexity,
        ));
    }
    s
}
