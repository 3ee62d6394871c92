//! nucleoscan: nucleotide sequence-analysis engine
//!
//! # Overview
//!
//! nucleoscan analyzes DNA/RNA sequences through a family of
//! sequence-scanning and statistical algorithms: exact and
//! mismatch-tolerant pattern search, k-mer frequency analysis, nucleotide
//! composition transforms, cumulative G/C skew scanning, multi-sequence
//! motif statistics, and codon-to-amino-acid translation.
//!
//! The engine is purely computational: no I/O, no blocking, no caching.
//! A [`Genome`] is immutable once constructed, so any number of scans may
//! run against it concurrently without locking.
//!
//! ## Quick Start
//!
//! ```
//! use nucleoscan::{count_pattern, minimum_skew, Genome};
//!
//! # fn main() -> nucleoscan::Result<()> {
//! // Construct a genome from a topology tag and a sequence
//! let genome = Genome::from_tag("linear", "GAGCCATGATG")?;
//!
//! // Issue read-only queries against it
//! assert_eq!(count_pattern(&genome, "ATG")?, 2);
//! assert_eq!(minimum_skew(&genome), vec![0, 5, 6, 7]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`genome`]: sequence + topology data model (linear/circular
//!   addressing, wraparound view)
//! - [`operations`]: the scanning and statistics operations, one module
//!   per family
//! - [`error`]: the crate error type and `Result` alias
//!
//! Frequency analysis ([`frequency_map`], [`frequent_words`]),
//! composition transforms ([`complement`], [`reverse_complement`]),
//! motif statistics ([`motif`]) and translation ([`translate`]) take raw
//! text and have no `Genome` dependency.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod genome;
pub mod operations;

// Re-export commonly used types and operations
pub use error::{NucleoscanError, Result};
pub use genome::{Genome, Topology};
pub use operations::motif;
pub use operations::{
    complement, count_approximate_pattern, count_pattern, frequency_map, frequent_words,
    hamming_distance, is_reverse_palindrome, match_approximate_pattern, match_pattern,
    minimum_skew, reverse_complement, skew, symbol_window_counts, translate, ApproximateScanner,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
