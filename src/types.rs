//src/types.rs

/// A single FASTA record: header text plus the cleaned, uppercased sequence.
///
/// `symbols` only ever contains characters accepted by the alphabet filter
/// used at read time; everything else (whitespace, digits, punctuation) is
/// dropped by the reader.
#[derive(Debug, Clone, Default)]
pub struct SequenceRecord {
    /// Text after the `>` marker. Empty if the file has no header line.
    pub header: String,
    /// Accepted-alphabet characters, case-folded to uppercase.
    pub symbols: String,
}

impl SequenceRecord {
    /// Number of accepted symbols in the record.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Per-base tallies for a nucleotide sequence.
///
/// `unknown` holds everything that passed the read-time filter but is not
/// A/T/G/C (in practice: N). Invariant: the five buckets sum to the record
/// length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NucleotideCounts {
    pub a: u64,
    pub t: u64,
    pub g: u64,
    pub c: u64,
    pub unknown: u64,
}

impl NucleotideCounts {
    /// Sum over all buckets, including `unknown`.
    pub fn total(&self) -> u64 {
        self.a + self.t + self.g + self.c + self.unknown
    }
}

/// Per-residue tallies for a protein sequence, indexed by residue-table
/// order. Letters with no table entry (B, J, O, U, X, Z) land in `unknown`.
/// Invariant: `counts` plus `unknown` sum to the record length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidueCounts {
    pub counts: [u64; 20],
    pub unknown: u64,
}

impl ResidueCounts {
    /// Sum over all residues, including `unknown`.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum::<u64>() + self.unknown
    }
}
