//! # soundalike-phonetic
//!
//! **Tier 2 (Phonetic Bucketing)**
//!
//! Groups ingested names by the composite key returned from a
//! [`PhoneticEncoder`]. The default encoder is Double Metaphone.
//!
//! ## What belongs here
//! * The encoder seam and its Double Metaphone implementation
//! * Folding names to ASCII before encoding
//! * Order-preserving bucket construction
//!
//! ## What does NOT belong here
//! * Filtering of singleton buckets (see `soundalike-cluster`)
//! * Scoring

use std::panic::{self, AssertUnwindSafe};

use indexmap::IndexMap;
use rphonetic::DoubleMetaphone;
use soundalike_types::{NameRecord, PhoneticKey};
use tracing::warn;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Buckets of records keyed by phonetic code.
///
/// Bucket order is first-occurrence order of each key; records inside a
/// bucket keep their input order.
pub type PhoneticIndex = IndexMap<PhoneticKey, Vec<NameRecord>>;

/// Produces a `(primary, secondary)` phonetic encoding for a name.
///
/// Implementations must be deterministic and pure.
pub trait PhoneticEncoder {
    fn encode(&self, name: &str) -> PhoneticKey;
}

impl<F> PhoneticEncoder for F
where
    F: Fn(&str) -> PhoneticKey,
{
    fn encode(&self, name: &str) -> PhoneticKey {
        self(name)
    }
}

/// Double Metaphone encoder backed by `rphonetic`.
pub struct DoubleMetaphoneEncoder {
    inner: DoubleMetaphone,
}

impl Default for DoubleMetaphoneEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DoubleMetaphoneEncoder {
    pub fn new() -> Self {
        Self {
            inner: DoubleMetaphone::default(),
        }
    }
}

impl PhoneticEncoder for DoubleMetaphoneEncoder {
    fn encode(&self, name: &str) -> PhoneticKey {
        let folded = fold_to_ascii(name);
        if !folded.chars().any(|c| c.is_ascii_alphabetic()) {
            return unencodable_key(name);
        }
        // Input is ASCII here; a panic still maps to the name's own key.
        let encoded = panic::catch_unwind(AssertUnwindSafe(|| {
            let result = self.inner.double_metaphone(&folded);
            (result.primary().to_string(), result.alternate().to_string())
        }));
        match encoded {
            Ok((primary, _)) if primary.is_empty() => unencodable_key(name),
            Ok((primary, alternate)) => {
                let secondary = if alternate == primary {
                    String::new()
                } else {
                    alternate
                };
                PhoneticKey::new(primary, secondary)
            }
            Err(_) => {
                warn!(name, "double metaphone panicked; keying name by itself");
                unencodable_key(name)
            }
        }
    }
}

/// Reduce a name to ASCII for the encoder.
///
/// Diacritics are stripped after compatibility decomposition and a few
/// ligatures are spelled out. Any other non-ASCII character is dropped.
pub fn fold_to_ascii(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.nfkd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        match ch {
            'ß' => out.push_str("ss"),
            'æ' | 'ǽ' => out.push_str("ae"),
            'Æ' | 'Ǽ' => out.push_str("AE"),
            'œ' => out.push_str("oe"),
            'Œ' => out.push_str("OE"),
            'ø' => out.push('o'),
            'Ø' => out.push('O'),
            'đ' => out.push('d'),
            'Đ' => out.push('D'),
            'ł' => out.push('l'),
            'Ł' => out.push('L'),
            _ => {}
        }
    }
    out
}

/// Key for a name the encoder cannot handle.
///
/// Encoded keys always carry a non-empty primary. These keys have an empty
/// primary and hold the name itself as the secondary, so they never collide
/// with an encoded key or with each other.
fn unencodable_key(name: &str) -> PhoneticKey {
    PhoneticKey::new("", name)
}

/// Group records into phonetic buckets, preserving input order.
pub fn index<E>(records: impl IntoIterator<Item = NameRecord>, encoder: &E) -> PhoneticIndex
where
    E: PhoneticEncoder + ?Sized,
{
    let mut buckets = PhoneticIndex::new();
    for record in records {
        let key = encoder.encode(record.name());
        buckets.entry(key).or_default().push(record);
    }
    buckets
}
