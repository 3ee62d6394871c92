//! RNA to amino-acid translation
//!
//! Translates an RNA sequence codon by codon through the standard genetic
//! code. Input is normalized to uppercase and consumed in consecutive
//! non-overlapping triplets from offset 0. Translation does not stop at a
//! stop codon: every triplet is translated positionally, with stop codons
//! rendered as `*`.
//!
//! # Examples
//!
//! ```
//! use nucleoscan::translate;
//!
//! # fn main() -> nucleoscan::Result<()> {
//! assert_eq!(translate("AUGCCAUAG")?, "MP*");
//! assert_eq!(translate("AUGGCACCCUGG")?, "MAPW");
//! # Ok(())
//! # }
//! ```

use crate::error::{NucleoscanError, Result};

/// Standard genetic code: RNA codon to single-letter amino-acid code
///
/// Covers all 64 codons; the three stop codons (`UAA`, `UAG`, `UGA`) map
/// to `*`. Returns `None` for anything else; there is no fallback.
fn amino_acid(codon: &str) -> Option<char> {
    let amino = match codon {
        "UUU" | "UUC" => 'F',
        "UUA" | "UUG" | "CUU" | "CUC" | "CUA" | "CUG" => 'L',
        "AUU" | "AUC" | "AUA" => 'I',
        "AUG" => 'M',
        "GUU" | "GUC" | "GUA" | "GUG" => 'V',
        "UCU" | "UCC" | "UCA" | "UCG" | "AGU" | "AGC" => 'S',
        "CCU" | "CCC" | "CCA" | "CCG" => 'P',
        "ACU" | "ACC" | "ACA" | "ACG" => 'T',
        "GCU" | "GCC" | "GCA" | "GCG" => 'A',
        "UAU" | "UAC" => 'Y',
        "UAA" | "UAG" | "UGA" => '*',
        "CAU" | "CAC" => 'H',
        "CAA" | "CAG" => 'Q',
        "AAU" | "AAC" => 'N',
        "AAA" | "AAG" => 'K',
        "GAU" | "GAC" => 'D',
        "GAA" | "GAG" => 'E',
        "UGU" | "UGC" => 'C',
        "UGG" => 'W',
        "CGU" | "CGC" | "CGA" | "CGG" | "AGA" | "AGG" => 'R',
        "GGU" | "GGC" | "GGA" | "GGG" => 'G',
        _ => return None,
    };
    Some(amino)
}

/// Translate an RNA sequence into an amino-acid string
///
/// Input is uppercased first, so `augccauag` translates like
/// `AUGCCAUAG`. All codons are translated, including those after a stop
/// codon.
///
/// # Errors
///
/// [`NucleoscanError::PartialCodon`] when the input length is not a
/// multiple of 3; [`NucleoscanError::InvalidCodon`] when a triplet
/// contains a symbol outside `{A, C, G, U}` (reported uppercased, as
/// looked up).
///
/// # Examples
///
/// ```
/// use nucleoscan::translate;
///
/// assert_eq!(translate("AUGCCAUAG").unwrap(), "MP*");
///
/// // Translation continues past the stop codon
/// assert_eq!(translate("UAAAUG").unwrap(), "*M");
/// ```
pub fn translate(rna: &str) -> Result<String> {
    let symbols: Vec<char> = rna.chars().map(|c| c.to_ascii_uppercase()).collect();
    if symbols.len() % 3 != 0 {
        return Err(NucleoscanError::PartialCodon(symbols.len()));
    }
    let mut protein = String::with_capacity(symbols.len() / 3);
    for triplet in symbols.chunks_exact(3) {
        let codon: String = triplet.iter().collect();
        match amino_acid(&codon) {
            Some(amino) => protein.push(amino),
            None => return Err(NucleoscanError::InvalidCodon(codon)),
        }
    }
    Ok(protein)
}
