//! # soundalike-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `soundalike`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Input pairs and ingested name records
//! * The structured phonetic key
//! * Output format enums and tool metadata
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Scoring logic

use std::fmt;

use serde::{Deserialize, Serialize};

/// The current schema version for JSON receipts.
pub const SCHEMA_VERSION: u32 = 1;

/// Separator used when a [`PhoneticKey`] is flattened for display.
pub const KEY_SEPARATOR: char = '|';

/// One `(name, value)` pair as handed over by the input supplier.
///
/// Values are signed. Negative values are rejected at ingestion, which
/// reports the offending record index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub value: i64,
}

impl RawRecord {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A validated input name with its precomputed complexity.
///
/// Records are created once at ingestion and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameRecord {
    name: String,
    value: u64,
    complexity: f64,
}

impl NameRecord {
    pub fn new(name: impl Into<String>, value: u64, complexity: f64) -> Self {
        Self {
            name: name.into(),
            value,
            complexity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn complexity(&self) -> f64 {
        self.complexity
    }
}

/// Composite phonetic encoding: a primary code and an alternate code.
///
/// Keys compare structurally, so two keys whose sub-codes happen to contain
/// [`KEY_SEPARATOR`] can never collide. The flattened `primary|secondary`
/// form produced by `Display` is for reports only.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PhoneticKey {
    pub primary: String,
    /// Alternate encoding; empty when the encoder has none.
    pub secondary: String,
}

impl PhoneticKey {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

impl fmt::Display for PhoneticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.primary, KEY_SEPARATOR, self.secondary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Markdown table.
    #[default]
    Md,
    /// Tab-separated values.
    Tsv,
    /// JSON receipt.
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "soundalike".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
