//! Hamming distance primitive
//!
//! Shared by approximate pattern matching and motif scoring. The distance
//! is only defined for equal-length operands; unequal lengths are an
//! explicit [`NucleoscanError::LengthMismatch`] rather than silent
//! truncation.

use crate::error::{NucleoscanError, Result};

/// Position-wise mismatch count between two equal-length sequences
///
/// # Errors
///
/// [`NucleoscanError::LengthMismatch`] when the operands differ in length.
///
/// # Examples
///
/// ```
/// use nucleoscan::hamming_distance;
///
/// assert_eq!(hamming_distance("ATGC", "GCTA").unwrap(), 4);
/// assert_eq!(hamming_distance("ATGC", "ATGC").unwrap(), 0);
/// assert_eq!(hamming_distance("ATGC", "ATGA").unwrap(), 1);
/// assert!(hamming_distance("ATGC", "ATG").is_err());
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Result<usize> {
    if a.len() != b.len() {
        return Err(NucleoscanError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count())
}
