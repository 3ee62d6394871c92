//! Sequence-scanning and statistical operations
//!
//! One focused module per operation family:
//!
//! - `pattern`: exact/approximate substring search over a genome
//! - `distance`: Hamming distance primitive
//! - `frequency`: k-mer frequency tables over raw text
//! - `composition`: complement and reverse complement
//! - `skew`: cumulative G/C skew
//! - `motif`: column statistics over motif sets
//! - `translate`: codon-table translation of RNA

pub mod composition;
pub mod distance;
pub mod frequency;
pub mod motif;
pub mod pattern;
pub mod skew;
pub mod translate;

pub use composition::{complement, is_reverse_palindrome, reverse_complement};
pub use distance::hamming_distance;
pub use frequency::{frequency_map, frequent_words};
pub use pattern::{
    count_approximate_pattern, count_pattern, match_approximate_pattern, match_pattern,
    symbol_window_counts, ApproximateScanner,
};
pub use skew::{minimum_skew, skew};
pub use translate::translate;
