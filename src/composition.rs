//src/composition.rs

use crate::residues::ResidueTable;
use crate::types::{NucleotideCounts, ResidueCounts, SequenceRecord};

/// Tallies each base of `record` in a single pass. A/T/G/C get their own
/// buckets; anything else the reader let through (N) counts as unknown.
pub fn count_nucleotides(record: &SequenceRecord) -> NucleotideCounts {
    let mut counts = NucleotideCounts::default();
    for ch in record.symbols.chars() {
        match ch {
            'A' => counts.a += 1,
            'T' => counts.t += 1,
            'G' => counts.g += 1,
            'C' => counts.c += 1,
            _ => counts.unknown += 1,
        }
    }
    counts
}

/// Tallies each residue of `record` in a single pass, resolving one-letter
/// codes through the table; letters without a table entry count as unknown.
pub fn count_residues(record: &SequenceRecord, table: &ResidueTable) -> ResidueCounts {
    let mut counts = ResidueCounts::default();
    for ch in record.symbols.chars() {
        match table.lookup(ch) {
            Some(idx) => counts.counts[idx] += 1,
            None => counts.unknown += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(symbols: &str) -> SequenceRecord {
        SequenceRecord {
            header: String::new(),
            symbols: symbols.to_string(),
        }
    }

    #[test]
    fn test_nucleotide_counts() {
        let counts = count_nucleotides(&record("ATGCATGCNN"));
        assert_eq!(counts.a, 2);
        assert_eq!(counts.t, 2);
        assert_eq!(counts.g, 2);
        assert_eq!(counts.c, 2);
        assert_eq!(counts.unknown, 2);
    }

    #[test]
    fn test_nucleotide_counts_exhaustive() {
        let rec = record("ATGCNATGCNATGCN");
        let counts = count_nucleotides(&rec);
        assert_eq!(counts.total(), rec.len() as u64);
    }

    #[test]
    fn test_residue_counts() {
        let table = ResidueTable::new();
        let counts = count_residues(&record("AACD"), &table);
        assert_eq!(counts.counts[0], 2); // Ala
        assert_eq!(counts.counts[1], 1); // Cys
        assert_eq!(counts.counts[2], 1); // Asp
        assert_eq!(counts.unknown, 0);
    }

    #[test]
    fn test_residue_counts_unknown_letters() {
        let table = ResidueTable::new();
        let rec = record("AXBZU");
        let counts = count_residues(&rec, &table);
        assert_eq!(counts.counts[0], 1);
        assert_eq!(counts.unknown, 4);
        assert_eq!(counts.total(), rec.len() as u64);
    }

    #[test]
    fn test_empty_record() {
        let table = ResidueTable::new();
        assert_eq!(count_nucleotides(&record("")).total(), 0);
        assert_eq!(count_residues(&record(""), &table).total(), 0);
    }
}
