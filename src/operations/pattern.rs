//! Pattern scanning over a genome sequence
//!
//! Exact and mismatch-tolerant substring search, counting, and the
//! wraparound symbol-window scan. All scans are brute-force windowed
//! passes, O(n*k) for sequence length n and pattern length k. The hard
//! part here is correctness of window bounds and distance semantics, not
//! asymptotic performance, so there is no indexing or precomputation.
//!
//! Every offset in `0..=n-k` starts a window, so overlapping occurrences
//! all count.
//!
//! # Examples
//!
//! ```
//! use nucleoscan::{count_pattern, match_pattern, Genome, Topology};
//!
//! # fn main() -> nucleoscan::Result<()> {
//! let genome = Genome::new(Topology::Linear, "ATGATGATG")?;
//! assert_eq!(count_pattern(&genome, "ATG")?, 3);
//!
//! let genome = Genome::new(Topology::Linear, "ATCGATCG")?;
//! assert_eq!(match_pattern(&genome, "ATC")?, vec![0, 4]);
//! # Ok(())
//! # }
//! ```

use crate::error::{NucleoscanError, Result};
use crate::genome::{Genome, Topology};

/// Validate a pattern against the scanned genome, returning the window
/// offsets it can start at
fn window_offsets(genome: &Genome, pattern: &str) -> Result<std::ops::RangeInclusive<usize>> {
    if pattern.is_empty() {
        return Err(NucleoscanError::EmptyPattern);
    }
    if pattern.len() > genome.len() {
        return Err(NucleoscanError::PatternTooLong {
            pattern: pattern.len(),
            sequence: genome.len(),
        });
    }
    Ok(0..=genome.len() - pattern.len())
}

/// Count exact occurrences of `pattern` in the genome sequence
///
/// Every starting offset is examined, so overlapping occurrences all
/// count.
///
/// # Errors
///
/// [`NucleoscanError::EmptyPattern`] for an empty pattern (an empty
/// pattern must not silently count every position),
/// [`NucleoscanError::PatternTooLong`] when the pattern exceeds the
/// sequence.
///
/// # Examples
///
/// ```
/// use nucleoscan::{count_pattern, Genome, Topology};
///
/// let genome = Genome::new(Topology::Linear, "ATGATGATG").unwrap();
/// assert_eq!(count_pattern(&genome, "ATG").unwrap(), 3);
/// assert_eq!(count_pattern(&genome, "GGGG").unwrap(), 0);
/// ```
pub fn count_pattern(genome: &Genome, pattern: &str) -> Result<usize> {
    let offsets = window_offsets(genome, pattern)?;
    let sequence = genome.sequence().as_bytes();
    let pattern = pattern.as_bytes();
    Ok(offsets
        .filter(|&i| &sequence[i..i + pattern.len()] == pattern)
        .count())
}

/// Starting offsets of exact matches of `pattern`, ascending
///
/// The number of offsets returned always equals
/// [`count_pattern`] for the same inputs.
///
/// # Errors
///
/// Same as [`count_pattern`].
///
/// # Examples
///
/// ```
/// use nucleoscan::{match_pattern, Genome, Topology};
///
/// let genome = Genome::new(Topology::Linear, "ATGATGATGATG").unwrap();
/// assert_eq!(match_pattern(&genome, "ATG").unwrap(), vec![0, 3, 6, 9]);
/// ```
pub fn match_pattern(genome: &Genome, pattern: &str) -> Result<Vec<usize>> {
    let offsets = window_offsets(genome, pattern)?;
    let sequence = genome.sequence().as_bytes();
    let pattern = pattern.as_bytes();
    Ok(offsets
        .filter(|&i| &sequence[i..i + pattern.len()] == pattern)
        .collect())
}

/// Count windows within Hamming distance `max_distance` of `pattern`
///
/// # Errors
///
/// Same as [`count_pattern`]. Non-negativity of `max_distance` is
/// enforced by its type.
///
/// # Examples
///
/// ```
/// use nucleoscan::{count_approximate_pattern, Genome, Topology};
///
/// let genome = Genome::new(Topology::Linear, "ATCATGATC").unwrap();
/// // ATC exactly at 0 and 6, ATG at 3 is one mismatch away
/// assert_eq!(count_approximate_pattern(&genome, "ATC", 1).unwrap(), 3);
/// ```
pub fn count_approximate_pattern(
    genome: &Genome,
    pattern: &str,
    max_distance: usize,
) -> Result<usize> {
    Ok(match_approximate_pattern(genome, pattern, max_distance)?.len())
}

/// Starting offsets of windows within Hamming distance `max_distance` of
/// `pattern`, ascending
///
/// Delegates to a scalar [`ApproximateScanner`]; construct one with
/// [`ApproximateScanner::with_parallel`] to scan very long genomes on
/// multiple threads.
///
/// # Errors
///
/// Same as [`count_pattern`].
///
/// # Examples
///
/// ```
/// use nucleoscan::{match_approximate_pattern, Genome, Topology};
///
/// let genome = Genome::new(Topology::Linear, "ATCATGATC").unwrap();
/// // ATC exactly at 0 and 6, ATG at 3 is one mismatch away
/// assert_eq!(
///     match_approximate_pattern(&genome, "ATC", 1).unwrap(),
///     vec![0, 3, 6]
/// );
/// ```
pub fn match_approximate_pattern(
    genome: &Genome,
    pattern: &str,
    max_distance: usize,
) -> Result<Vec<usize>> {
    ApproximateScanner::new().scan(genome, pattern, max_distance)
}

/// Configurable approximate-pattern scanner with optional parallelism
///
/// The default scanner is scalar. Parallel scanning splits window offsets
/// across a bounded rayon pool and is only engaged when the window count
/// reaches [`ApproximateScanner::PARALLEL_THRESHOLD`]; below that the
/// per-window work is far too small to amortize thread overhead. Scalar
/// and parallel configurations return identical offset lists.
///
/// # Examples
///
/// ```
/// use nucleoscan::{ApproximateScanner, Genome, Topology};
///
/// let genome = Genome::new(Topology::Linear, "ATCATGATC").unwrap();
///
/// let scalar = ApproximateScanner::new();
/// let parallel = ApproximateScanner::with_parallel(4);
///
/// assert_eq!(
///     scalar.scan(&genome, "ATC", 1).unwrap(),
///     parallel.scan(&genome, "ATC", 1).unwrap()
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ApproximateScanner {
    parallel: bool,
    threads: usize,
}

impl ApproximateScanner {
    /// Minimum window count before a parallel scanner actually forks
    ///
    /// Each window costs one Hamming comparison of pattern length, so
    /// small scans finish before a pool is worth building.
    pub const PARALLEL_THRESHOLD: usize = 16_384;

    /// Create a scalar scanner
    pub fn new() -> Self {
        Self {
            parallel: false,
            threads: 1,
        }
    }

    /// Create a scanner with parallel scanning enabled
    ///
    /// Threads are capped at 4; per-window work is memory-bound and more
    /// threads contend on bandwidth rather than help.
    pub fn with_parallel(threads: usize) -> Self {
        Self {
            parallel: true,
            threads: threads.clamp(1, 4),
        }
    }

    /// Returns true if a scan over `windows` offsets will fork
    pub fn will_use_parallel(&self, windows: usize) -> bool {
        self.parallel && windows >= Self::PARALLEL_THRESHOLD
    }

    /// Starting offsets of windows within `max_distance` of `pattern`,
    /// ascending
    ///
    /// # Errors
    ///
    /// Same as [`count_pattern`].
    pub fn scan(&self, genome: &Genome, pattern: &str, max_distance: usize) -> Result<Vec<usize>> {
        let offsets = window_offsets(genome, pattern)?;
        let windows = offsets.end() - offsets.start() + 1;
        if self.will_use_parallel(windows) {
            Ok(self.scan_parallel(genome, pattern, max_distance))
        } else {
            Ok(scan_scalar(genome, pattern, max_distance))
        }
    }

    /// Parallel scan over window offsets
    ///
    /// Falls back to the scalar scan if pool construction fails (e.g.
    /// resource exhaustion), so the scanner never errors on pool state.
    fn scan_parallel(&self, genome: &Genome, pattern: &str, max_distance: usize) -> Vec<usize> {
        use rayon::prelude::*;

        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
        {
            Ok(pool) => pool,
            Err(_) => return scan_scalar(genome, pattern, max_distance),
        };

        let sequence = genome.sequence().as_bytes();
        let pattern = pattern.as_bytes();
        pool.install(|| {
            (0..=sequence.len() - pattern.len())
                .into_par_iter()
                .filter(|&i| mismatches_within(&sequence[i..i + pattern.len()], pattern, max_distance))
                .collect()
        })
    }
}

impl Default for ApproximateScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Scalar scan; inputs already validated by the caller
fn scan_scalar(genome: &Genome, pattern: &str, max_distance: usize) -> Vec<usize> {
    let sequence = genome.sequence().as_bytes();
    let pattern = pattern.as_bytes();
    (0..=sequence.len() - pattern.len())
        .filter(|&i| mismatches_within(&sequence[i..i + pattern.len()], pattern, max_distance))
        .collect()
}

/// Equal-length mismatch predicate with early exit past the threshold
#[inline]
fn mismatches_within(window: &[u8], pattern: &[u8], max_distance: usize) -> bool {
    let mut mismatches = 0;
    for (a, b) in window.iter().zip(pattern) {
        if a != b {
            mismatches += 1;
            if mismatches > max_distance {
                return false;
            }
        }
    }
    true
}

/// Occurrences of `symbol` in every half-length window of the genome
///
/// Window width is `len / 2`. For a circular genome the scan runs over
/// [`Genome::extended_sequence`], yielding one window per sequence
/// position (`len` counts), where the windows near the end wrap through the
/// origin. For a linear genome only the windows that fit are counted
/// (`len - len/2 + 1` counts). The first window is counted directly and
/// subsequent windows by a rolling update, so the scan is O(n) overall.
///
/// # Errors
///
/// [`NucleoscanError::SequenceTooShort`] when the genome has fewer than 2
/// symbols (the window width would be zero).
///
/// # Examples
///
/// ```
/// use nucleoscan::{symbol_window_counts, Genome, Topology};
///
/// let genome = Genome::new(Topology::Circular, "AAAA").unwrap();
/// assert_eq!(symbol_window_counts(&genome, 'A').unwrap(), vec![2, 2, 2, 2]);
///
/// let genome = Genome::new(Topology::Circular, "AGCGAT").unwrap();
/// // Width-3 windows: AGC, GCG, CGA, GAT, ATA, TAG
/// assert_eq!(symbol_window_counts(&genome, 'G').unwrap(), vec![1, 2, 1, 1, 0, 1]);
/// ```
pub fn symbol_window_counts(genome: &Genome, symbol: char) -> Result<Vec<usize>> {
    let width = genome.len() / 2;
    if width == 0 {
        return Err(NucleoscanError::SequenceTooShort {
            len: genome.len(),
            min: 2,
        });
    }

    let extended = genome.extended_sequence();
    let extended = extended.as_bytes();
    let symbol = symbol as u8;
    // One window per sequence position when the scan wraps; otherwise
    // every window that fits. The extended view always covers both.
    let windows = match genome.topology() {
        Topology::Circular => genome.len(),
        Topology::Linear => genome.len() - width + 1,
    };

    let mut counts = Vec::with_capacity(windows);
    let mut count = extended[..width].iter().filter(|&&b| b == symbol).count();
    counts.push(count);
    for i in 1..windows {
        if extended[i - 1] == symbol {
            count -= 1;
        }
        if extended[i + width - 1] == symbol {
            count += 1;
        }
        counts.push(count);
    }
    Ok(counts)
}
