//! Genome data model: sequence plus addressing topology
//!
//! A [`Genome`] owns a nucleotide sequence and the topology under which it
//! is addressed. Linear genomes are scanned as-is; circular genomes expose
//! an extended view that appends the first half of the sequence after its
//! end, so window scans near the origin can wrap around without modular
//! index arithmetic.
//!
//! Genomes are immutable after construction: every accessor borrows, and
//! re-analysis of a different sequence means constructing a new `Genome`.
//! This makes concurrent read-only use by multiple scanners safe without
//! locking.
//!
//! # Examples
//!
//! ```
//! use nucleoscan::{Genome, Topology};
//!
//! # fn main() -> nucleoscan::Result<()> {
//! let genome = Genome::new(Topology::Circular, "ATGCATGC")?;
//! assert_eq!(genome.len(), 8);
//! assert_eq!(genome.extended_sequence(), "ATGCATGCATGC");
//!
//! // Factory construction from a topology tag
//! let genome = Genome::from_tag("linear", "ATGC")?;
//! assert_eq!(genome.topology(), Topology::Linear);
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::str::FromStr;

use crate::error::{NucleoscanError, Result};

/// Addressing mode of a genome sequence
///
/// The only behavioral difference between the two is the
/// [`Genome::extended_sequence`] computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Sequence addressing ends at the last symbol
    Linear,
    /// Sequence addressing wraps around the origin
    Circular,
}

impl FromStr for Topology {
    type Err = NucleoscanError;

    /// Parse a topology tag
    ///
    /// Accepts exactly `"linear"` or `"circular"` (case-sensitive). Any
    /// other tag is an explicit [`NucleoscanError::UnknownTopology`], not a
    /// silently absent genome.
    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "linear" => Ok(Topology::Linear),
            "circular" => Ok(Topology::Circular),
            other => Err(NucleoscanError::UnknownTopology(other.to_string())),
        }
    }
}

/// An immutable nucleotide sequence with its addressing topology
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    sequence: String,
    topology: Topology,
}

impl Genome {
    /// Construct a genome from a sequence and a topology
    ///
    /// # Errors
    ///
    /// - [`NucleoscanError::EmptySequence`] if `sequence` is empty
    /// - [`NucleoscanError::NonAsciiSequence`] if `sequence` contains
    ///   non-ASCII characters (byte-offset windowing requires ASCII)
    ///
    /// # Examples
    ///
    /// ```
    /// use nucleoscan::{Genome, Topology};
    ///
    /// let genome = Genome::new(Topology::Linear, "GATTACA").unwrap();
    /// assert_eq!(genome.sequence(), "GATTACA");
    /// ```
    pub fn new(topology: Topology, sequence: &str) -> Result<Self> {
        if sequence.is_empty() {
            return Err(NucleoscanError::EmptySequence);
        }
        if !sequence.is_ascii() {
            return Err(NucleoscanError::NonAsciiSequence);
        }
        Ok(Self {
            sequence: sequence.to_string(),
            topology,
        })
    }

    /// Construct a genome from a topology tag (`"linear"` or `"circular"`)
    ///
    /// Factory entry point for callers that receive the topology as text,
    /// e.g. a command shell.
    ///
    /// # Errors
    ///
    /// [`NucleoscanError::UnknownTopology`] for an unrecognized tag, plus
    /// the [`Genome::new`] sequence errors.
    pub fn from_tag(tag: &str, sequence: &str) -> Result<Self> {
        Self::new(tag.parse()?, sequence)
    }

    /// The underlying nucleotide sequence
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Sequence length in symbols
    #[allow(clippy::len_without_is_empty)] // a Genome is never empty
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Addressing topology fixed at construction
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Extended view used by wraparound window scans
    ///
    /// For a linear genome this borrows the sequence unchanged. For a
    /// circular genome it is the sequence followed by its own first
    /// `len / 2` symbols (integer division), so every window starting
    /// inside the sequence and spanning the origin fits without modular
    /// indexing.
    ///
    /// # Examples
    ///
    /// ```
    /// use nucleoscan::{Genome, Topology};
    ///
    /// let circular = Genome::new(Topology::Circular, "ATGCATG").unwrap();
    /// assert_eq!(circular.extended_sequence(), "ATGCATGATG");
    ///
    /// let linear = Genome::new(Topology::Linear, "ATGCATG").unwrap();
    /// assert_eq!(linear.extended_sequence(), "ATGCATG");
    /// ```
    pub fn extended_sequence(&self) -> Cow<'_, str> {
        match self.topology {
            Topology::Linear => Cow::Borrowed(&self.sequence),
            Topology::Circular => {
                let half = self.sequence.len() / 2;
                let mut extended = String::with_capacity(self.sequence.len() + half);
                extended.push_str(&self.sequence);
                extended.push_str(&self.sequence[..half]);
                Cow::Owned(extended)
            }
        }
    }
}
