//! K-mer frequency analysis over raw text
//!
//! Not tied to a [`crate::Genome`]: frequency analysis takes any text so
//! callers can analyze fragments, reads, or windows of a genome directly.
//!
//! The window convention is inclusive of the final window: a text of
//! length n has exactly `n - k + 1` length-k windows, at offsets
//! `0..=n-k`. A 9-character text with k = 3 therefore contributes 7
//! window observations in total.
//!
//! # Examples
//!
//! ```
//! use nucleoscan::{frequency_map, frequent_words};
//!
//! # fn main() -> nucleoscan::Result<()> {
//! let map = frequency_map("ATGATGATG", 3)?;
//! assert_eq!(map["ATG"], 3);
//! assert_eq!(map["TGA"], 2);
//! assert_eq!(map["GAT"], 2);
//!
//! assert_eq!(frequent_words("ATGATGATG", 3)?, vec!["ATG"]);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use crate::error::{NucleoscanError, Result};

fn check_kmer_length(text: &str, k: usize) -> Result<()> {
    if k == 0 || text.is_empty() || k > text.len() {
        return Err(NucleoscanError::InvalidKmerLength { k, text: text.len() });
    }
    Ok(())
}

/// Count every length-`k` window of `text`
///
/// Built fresh per call, no caching. Keys are the distinct k-mers, values
/// their occurrence counts; the counts sum to `text.len() - k + 1`.
///
/// # Errors
///
/// [`NucleoscanError::InvalidKmerLength`] when `k == 0`, `k` exceeds the
/// text length, or the text is empty.
///
/// # Examples
///
/// ```
/// use nucleoscan::frequency_map;
///
/// let map = frequency_map("ATGATGATG", 2).unwrap();
/// assert_eq!(map["AT"], 3);
/// assert_eq!(map["TG"], 3);
/// assert_eq!(map["GA"], 2);
/// ```
pub fn frequency_map(text: &str, k: usize) -> Result<HashMap<String, usize>> {
    check_kmer_length(text, k)?;
    let mut map = HashMap::new();
    for i in 0..=text.len() - k {
        *map.entry(text[i..i + k].to_string()).or_insert(0) += 1;
    }
    Ok(map)
}

/// All k-mers of `text` attaining the maximum occurrence count
///
/// Ties all qualify; the result is sorted ascending so the output is
/// deterministic.
///
/// # Errors
///
/// Same as [`frequency_map`].
///
/// # Examples
///
/// ```
/// use nucleoscan::frequent_words;
///
/// // AT and TG both occur 3 times
/// assert_eq!(frequent_words("ATGATGATG", 2).unwrap(), vec!["AT", "TG"]);
/// ```
pub fn frequent_words(text: &str, k: usize) -> Result<Vec<String>> {
    let map = frequency_map(text, k)?;
    // The map is non-empty whenever frequency_map succeeds
    let max = map.values().copied().max().unwrap_or(0);
    let mut words: Vec<String> = map
        .into_iter()
        .filter(|&(_, count)| count == max)
        .map(|(kmer, _)| kmer)
        .collect();
    words.sort_unstable();
    Ok(words)
}
