//! Nucleotide composition transforms
//!
//! Complement and reverse complement over the uppercase DNA alphabet.
//! The substitution is case-sensitive by contract: only uppercase
//! `A`/`T`/`C`/`G` are exchanged; every other character (lowercase
//! bases, gaps, IUPAC ambiguity codes) passes through unchanged. Callers
//! that want case-insensitive behavior normalize before calling.
//!
//! # Examples
//!
//! ```
//! use nucleoscan::{complement, reverse_complement};
//!
//! assert_eq!(complement("ATGC"), "TACG");
//! assert_eq!(reverse_complement("ATGC"), "GCAT");
//!
//! // Lowercase and gap characters pass through literally
//! assert_eq!(complement("AtG-c"), "TtC-c");
//! ```

/// Complement a DNA sequence without reversing
///
/// Maps `A↔T` and `C↔G` (uppercase only); all other characters are
/// emitted unchanged. Involutive on the four-letter alphabet:
/// `complement(complement(s)) == s`.
///
/// # Examples
///
/// ```
/// use nucleoscan::complement;
///
/// assert_eq!(complement("ATGC"), "TACG");
/// assert_eq!(complement("ATGC-N"), "TACG-N");
/// ```
pub fn complement(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'A' => 'T',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            other => other,
        })
        .collect()
}

/// Reverse complement of a DNA sequence
///
/// Equivalent to `complement(reverse(text))`. A sequence is a
/// reverse-complement palindrome iff `reverse_complement(s) == s`; see
/// [`is_reverse_palindrome`].
///
/// # Examples
///
/// ```
/// use nucleoscan::reverse_complement;
///
/// assert_eq!(reverse_complement("ATGC"), "GCAT");
/// assert_eq!(reverse_complement("GGATCC"), "GGATCC"); // BamHI site
/// ```
pub fn reverse_complement(text: &str) -> String {
    text.chars()
        .rev()
        .map(|c| match c {
            'A' => 'T',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            other => other,
        })
        .collect()
}

/// Whether a sequence equals its own reverse complement
///
/// Restriction sites such as `GGATCC` (BamHI) and `GAATTC` (EcoRI) are
/// reverse-complement palindromes.
///
/// # Examples
///
/// ```
/// use nucleoscan::is_reverse_palindrome;
///
/// assert!(is_reverse_palindrome("GGATCC"));
/// assert!(!is_reverse_palindrome("ATGC"));
/// ```
pub fn is_reverse_palindrome(text: &str) -> bool {
    reverse_complement(text) == text
}
