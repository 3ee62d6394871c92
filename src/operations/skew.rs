//! Cumulative G/C skew scanning
//!
//! Skew is the running difference between cumulative G and C counts along
//! a sequence. In bacterial genomes the skew typically reaches its
//! minimum near the replication origin, which makes the minimizing
//! positions the interesting output.
//!
//! # Examples
//!
//! ```
//! use nucleoscan::{minimum_skew, skew, Genome, Topology};
//!
//! # fn main() -> nucleoscan::Result<()> {
//! let genome = Genome::new(Topology::Linear, "GAGCC")?;
//! assert_eq!(skew(&genome), vec![0, 1, 1, 2, 1, 0]);
//! assert_eq!(minimum_skew(&genome), vec![0, 5]);
//! # Ok(())
//! # }
//! ```

use crate::genome::Genome;

/// Cumulative G/C skew along the genome sequence
///
/// Returns `len + 1` values: `skew[0] == 0`, and each subsequent value
/// adds `+1` for `G`, `-1` for `C`, and `0` for every other symbol.
///
/// # Examples
///
/// ```
/// use nucleoscan::{skew, Genome, Topology};
///
/// let genome = Genome::new(Topology::Linear, "GGCCGGAA").unwrap();
/// assert_eq!(skew(&genome), vec![0, 1, 2, 1, 0, 1, 2, 2, 2]);
/// ```
pub fn skew(genome: &Genome) -> Vec<i64> {
    let mut values = Vec::with_capacity(genome.len() + 1);
    let mut running = 0i64;
    values.push(running);
    for symbol in genome.sequence().bytes() {
        running += match symbol {
            b'G' => 1,
            b'C' => -1,
            _ => 0,
        };
        values.push(running);
    }
    values
}

/// All indices where the skew attains its global minimum, ascending
///
/// Indices refer to positions in the [`skew`] array (0 through `len`).
/// Ties all qualify. When the sequence contains no G or C, the minimum is
/// 0 and every index is returned.
///
/// # Examples
///
/// ```
/// use nucleoscan::{minimum_skew, Genome, Topology};
///
/// let genome = Genome::new(Topology::Linear, "GAGCC").unwrap();
/// assert_eq!(minimum_skew(&genome), vec![0, 5]);
/// ```
pub fn minimum_skew(genome: &Genome) -> Vec<usize> {
    let values = skew(genome);
    // skew[0] == 0 means the array is never empty
    let minimum = values.iter().copied().min().unwrap_or(0);
    values
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value == minimum)
        .map(|(i, _)| i)
        .collect()
}
