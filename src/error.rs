//! Error types for nucleoscan

use thiserror::Error;

/// Result type alias for nucleoscan operations
pub type Result<T> = std::result::Result<T, NucleoscanError>;

/// Error types that can occur in nucleoscan
///
/// Every error is detected at the boundary of the operation that first
/// violates an invariant: no scan produces partial results, and none of
/// these conditions is retryable; they are caller input errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NucleoscanError {
    /// Unrecognized genome topology tag
    #[error("unknown genome topology {0:?} (expected \"linear\" or \"circular\")")]
    UnknownTopology(String),

    /// Genome constructed from an empty sequence
    #[error("genome sequence must not be empty")]
    EmptySequence,

    /// Genome constructed from a non-ASCII sequence
    #[error("genome sequence must be ASCII")]
    NonAsciiSequence,

    /// Empty search pattern
    #[error("search pattern must not be empty")]
    EmptyPattern,

    /// Search pattern longer than the scanned sequence
    #[error("pattern length {pattern} exceeds sequence length {sequence}")]
    PatternTooLong {
        /// Pattern length
        pattern: usize,
        /// Sequence length
        sequence: usize,
    },

    /// K-mer length out of range for the scanned text
    #[error("k-mer length {k} out of range for text of length {text}")]
    InvalidKmerLength {
        /// Requested k-mer length
        k: usize,
        /// Text length
        text: usize,
    },

    /// Unequal-length operands to a distance computation
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },

    /// Motif statistics requested over an empty motif set
    #[error("motif set must not be empty")]
    EmptyMotifSet,

    /// Motif set with unequal motif lengths
    #[error("motif length mismatch: expected {expected}, found {found}")]
    MotifLengthMismatch {
        /// Length of the first motif
        expected: usize,
        /// Offending motif length
        found: usize,
    },

    /// Motif symbol outside the A/C/G/T alphabet
    #[error("invalid motif symbol {symbol:?} (expected A, C, G or T)")]
    InvalidMotifSymbol {
        /// Offending symbol
        symbol: char,
    },

    /// RNA input whose length is not a multiple of 3
    #[error("RNA length {0} is not a multiple of 3")]
    PartialCodon(usize),

    /// Codon containing a symbol outside the A/C/G/U alphabet
    #[error("invalid codon {0:?}")]
    InvalidCodon(String),

    /// Genome too short for a windowed scan
    #[error("sequence length {len} below minimum {min} for window scan")]
    SequenceTooShort {
        /// Actual genome length
        len: usize,
        /// Minimum length required
        min: usize,
    },
}
