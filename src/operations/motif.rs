//! Motif-matrix statistics
//!
//! Column-wise statistics over a set of equal-length motifs drawn from
//! the `{A, C, G, T}` alphabet: count matrix, profile matrix, consensus
//! string, score against the consensus, and total Shannon entropy.
//!
//! The alphabet is checked up front so the matrices always account for
//! every motif character: a column of the count matrix sums to the
//! number of motifs, and a column of the profile matrix sums to 1.0.
//!
//! # Examples
//!
//! ```
//! use nucleoscan::motif;
//!
//! # fn main() -> nucleoscan::Result<()> {
//! let motifs = ["ACGT", "ACCT", "ACGA"];
//!
//! assert_eq!(motif::consensus(&motifs)?, "ACGT");
//! assert_eq!(motif::score(&motifs)?, 2);
//!
//! let counts = motif::count_matrix(&motifs)?;
//! assert_eq!(counts[&'G'], vec![0, 0, 2, 0]);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use crate::error::{NucleoscanError, Result};
use crate::operations::distance::hamming_distance;

/// Fixed symbol order; consensus tie-breaking follows this order
const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Validate a motif set, returning the shared motif length
fn validate_motifs(motifs: &[&str]) -> Result<usize> {
    let first = motifs.first().ok_or(NucleoscanError::EmptyMotifSet)?;
    let k = first.len();
    for motif in motifs {
        if motif.len() != k {
            return Err(NucleoscanError::MotifLengthMismatch {
                expected: k,
                found: motif.len(),
            });
        }
        if let Some(symbol) = motif.chars().find(|c| !NUCLEOTIDES.contains(c)) {
            return Err(NucleoscanError::InvalidMotifSymbol { symbol });
        }
    }
    Ok(k)
}

/// Per-column symbol counts across the motif set
///
/// Four keys (`A`, `C`, `G`, `T`), each mapped to `k` per-column counts.
/// Every column sums to the number of motifs.
///
/// # Errors
///
/// [`NucleoscanError::EmptyMotifSet`] for an empty set,
/// [`NucleoscanError::MotifLengthMismatch`] for ragged motifs,
/// [`NucleoscanError::InvalidMotifSymbol`] for symbols outside
/// `{A, C, G, T}`. All five statistics in this module validate the same
/// way.
///
/// # Examples
///
/// ```
/// use nucleoscan::motif::count_matrix;
///
/// let counts = count_matrix(&["ACGT", "ACCT", "ACGA"]).unwrap();
/// assert_eq!(counts[&'A'], vec![3, 0, 0, 1]);
/// assert_eq!(counts[&'C'], vec![0, 3, 1, 0]);
/// assert_eq!(counts[&'G'], vec![0, 0, 2, 0]);
/// assert_eq!(counts[&'T'], vec![0, 0, 0, 2]);
/// ```
pub fn count_matrix(motifs: &[&str]) -> Result<HashMap<char, Vec<usize>>> {
    let k = validate_motifs(motifs)?;
    let mut matrix: HashMap<char, Vec<usize>> = NUCLEOTIDES
        .iter()
        .map(|&symbol| (symbol, vec![0; k]))
        .collect();
    for motif in motifs {
        for (column, symbol) in motif.chars().enumerate() {
            // validate_motifs guarantees the symbol is a key
            if let Some(counts) = matrix.get_mut(&symbol) {
                counts[column] += 1;
            }
        }
    }
    Ok(matrix)
}

/// Count matrix normalized by the number of motifs
///
/// Every column sums to 1.0 within floating tolerance.
///
/// # Errors
///
/// Same as [`count_matrix`].
pub fn profile_matrix(motifs: &[&str]) -> Result<HashMap<char, Vec<f64>>> {
    let counts = count_matrix(motifs)?;
    let total = motifs.len() as f64;
    Ok(counts
        .into_iter()
        .map(|(symbol, column)| {
            (
                symbol,
                column.into_iter().map(|c| c as f64 / total).collect(),
            )
        })
        .collect())
}

/// Per-column majority symbol across the motif set
///
/// For each column the symbol with the strictly greatest count wins; ties
/// resolve to the first symbol in `A, C, G, T` order reaching the
/// maximum. A later symbol with an equal count never overwrites.
///
/// # Errors
///
/// Same as [`count_matrix`].
///
/// # Examples
///
/// ```
/// use nucleoscan::motif::consensus;
///
/// assert_eq!(consensus(&["ACGT", "ACCT", "ACGA"]).unwrap(), "ACGT");
/// assert_eq!(
///     consensus(&["AACGTA", "CCCGTT", "CACCTT", "GGATTA", "TTCCGG"]).unwrap(),
///     "CACCTA"
/// );
/// ```
pub fn consensus(motifs: &[&str]) -> Result<String> {
    let counts = count_matrix(motifs)?;
    let k = counts[&NUCLEOTIDES[0]].len();
    let mut result = String::with_capacity(k);
    for column in 0..k {
        let mut best = NUCLEOTIDES[0];
        let mut best_count = 0;
        for &symbol in &NUCLEOTIDES {
            let count = counts[&symbol][column];
            if count > best_count {
                best = symbol;
                best_count = count;
            }
        }
        result.push(best);
    }
    Ok(result)
}

/// Total Hamming distance from every motif to the consensus
///
/// Summed over all motifs and columns, i.e. the total per-column
/// mismatches against the consensus symbol. Lower is more conserved.
///
/// # Errors
///
/// Same as [`count_matrix`].
///
/// # Examples
///
/// ```
/// use nucleoscan::motif::score;
///
/// // Consensus ACGT: ACGT differs in 0, ACCT in 1, ACGA in 1
/// assert_eq!(score(&["ACGT", "ACCT", "ACGA"]).unwrap(), 2);
/// ```
pub fn score(motifs: &[&str]) -> Result<usize> {
    let consensus = consensus(motifs)?;
    let mut total = 0;
    for motif in motifs {
        total += hamming_distance(motif, &consensus)?;
    }
    Ok(total)
}

/// Total Shannon entropy of the motif profile, in bits
///
/// `-Σ p·log2(p)` over every cell of the profile matrix, with `p = 0`
/// contributing 0. The value is the sum across columns, not a per-column
/// average; a fully conserved set has entropy 0.
///
/// # Errors
///
/// Same as [`count_matrix`].
pub fn entropy(motifs: &[&str]) -> Result<f64> {
    let profile = profile_matrix(motifs)?;
    let total = profile
        .values()
        .flatten()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum();
    Ok(total)
}
