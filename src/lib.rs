// src/lib.rs
pub mod composition;
pub mod errors;
pub mod fasta;
pub mod residues;
pub mod stats;
pub mod types;

use std::fmt::Write as FmtWrite;
use std::path::Path;

use crate::composition::{count_nucleotides, count_residues};
use crate::errors::AnalyzerError;
use crate::fasta::{read_fasta_record, Alphabet};
use crate::residues::ResidueTable;
use crate::stats::{NucleotideStats, ProteinStats};
use crate::types::{NucleotideCounts, ResidueCounts, SequenceRecord};

/// A completed nucleotide analysis. Only structured data is stored; report
/// text is generated on demand.
#[derive(Debug)]
pub struct NucleotideAnalysis {
    pub record: SequenceRecord,
    pub counts: NucleotideCounts,
    /// `None` when the sequence is empty; rendering then reports every
    /// statistic as undefined.
    pub stats: Option<NucleotideStats>,
}

impl NucleotideAnalysis {
    /// Generate the detailed screen report on demand.
    pub fn get_report(&self) -> String {
        let mut out = String::new();
        writeln!(out).unwrap();
        writeln!(out, "============================================").unwrap();
        writeln!(out, "       DNA SEQUENCE ANALYSIS REPORT").unwrap();
        writeln!(out, "============================================\n").unwrap();

        writeln!(out, "Sequence Name: {}", self.record.header).unwrap();
        writeln!(out, "Total Length: {} bp", self.record.len()).unwrap();

        writeln!(out, "\n--- Nucleotide Composition ---\n").unwrap();
        match &self.stats {
            Some(stats) => {
                writeln!(out, "  Adenine  (A): {:5}  ({:6.2}%)", self.counts.a, stats.pct_a).unwrap();
                writeln!(out, "  Thymine  (T): {:5}  ({:6.2}%)", self.counts.t, stats.pct_t).unwrap();
                writeln!(out, "  Guanine  (G): {:5}  ({:6.2}%)", self.counts.g, stats.pct_g).unwrap();
                writeln!(out, "  Cytosine (C): {:5}  ({:6.2}%)", self.counts.c, stats.pct_c).unwrap();
                if self.counts.unknown > 0 {
                    writeln!(
                        out,
                        "  Unknown  (N): {:5}  ({:6.2}%)",
                        self.counts.unknown, stats.pct_unknown
                    )
                    .unwrap();
                }
            }
            None => {
                writeln!(out, "  No sequence data - composition undefined").unwrap();
            }
        }

        writeln!(out, "\n--- Derived Statistics ---\n").unwrap();
        match &self.stats {
            Some(stats) => {
                writeln!(out, "  GC Content: {:.2}%", stats.gc_content).unwrap();
                writeln!(out, "  AT Content: {:.2}%", stats.at_content).unwrap();
                if let Some(ratio) = stats.at_gc_ratio {
                    writeln!(out, "  AT/GC Ratio: {:.2}", ratio).unwrap();
                }
                if let Some(ratio) = stats.purine_pyrimidine_ratio {
                    writeln!(out, "  Purine/Pyrimidine Ratio: {:.2}", ratio).unwrap();
                }
            }
            None => {
                writeln!(out, "  GC Content: undefined").unwrap();
                writeln!(out, "  AT Content: undefined").unwrap();
            }
        }

        writeln!(out, "\n--- Biological Interpretation ---\n").unwrap();
        match &self.stats {
            Some(stats) => writeln!(out, "  {}", stats.band.description()).unwrap(),
            None => writeln!(out, "  No sequence data - interpretation undefined").unwrap(),
        }

        writeln!(out, "\n============================================").unwrap();
        out
    }

    /// Generate the condensed result-file text on demand.
    pub fn get_summary(&self) -> String {
        let mut out = String::new();
        writeln!(out, "DNA Sequence Analysis Results").unwrap();
        writeln!(out, "=============================\n").unwrap();
        writeln!(out, "Sequence: {}", self.record.header).unwrap();
        writeln!(out, "Length: {} bp\n", self.record.len()).unwrap();
        writeln!(out, "Nucleotide Counts:").unwrap();
        writeln!(out, "A: {}", self.counts.a).unwrap();
        writeln!(out, "T: {}", self.counts.t).unwrap();
        writeln!(out, "G: {}", self.counts.g).unwrap();
        writeln!(out, "C: {}", self.counts.c).unwrap();
        match &self.stats {
            Some(stats) => writeln!(out, "\nGC Content: {:.2}%", stats.gc_content).unwrap(),
            None => writeln!(out, "\nGC Content: undefined").unwrap(),
        }
        out
    }
}

/// A completed protein analysis, structured data only; see
/// [`NucleotideAnalysis`].
pub struct ProteinAnalysis {
    pub record: SequenceRecord,
    pub counts: ResidueCounts,
    pub stats: Option<ProteinStats>,
}

impl ProteinAnalysis {
    /// Generate the detailed screen report on demand.
    pub fn get_report(&self) -> String {
        let mut out = String::new();
        writeln!(out).unwrap();
        writeln!(out, "============================================================").unwrap();
        writeln!(out, "         PROTEIN AMINO ACID COMPOSITION ANALYSIS").unwrap();
        writeln!(out, "============================================================\n").unwrap();

        writeln!(out, "Protein: {}", self.record.header).unwrap();
        writeln!(out, "Length: {} amino acids", self.record.len()).unwrap();

        writeln!(out, "\n--- Amino Acid Composition ---\n").unwrap();
        match &self.stats {
            Some(stats) => {
                writeln!(out, "  AA   Name           Count    Percentage").unwrap();
                writeln!(out, "  ---  -------------  -----    ----------").unwrap();
                for row in &stats.rows {
                    writeln!(
                        out,
                        "  {}    {:<13}  {:5}    {:6.2}%",
                        row.one_letter, row.name, row.count, row.pct
                    )
                    .unwrap();
                }
                if stats.unknown_count > 0 {
                    writeln!(
                        out,
                        "  X    {:<13}  {:5}    {:6.2}%",
                        "Unknown", stats.unknown_count, stats.pct_unknown
                    )
                    .unwrap();
                }
            }
            None => {
                writeln!(out, "  No sequence data - composition undefined").unwrap();
            }
        }

        writeln!(out, "\n--- Property-Based Composition ---\n").unwrap();
        match &self.stats {
            Some(stats) => {
                for group in &stats.groups {
                    let legend = format!("{} ({}):", group.property.label(), group.members);
                    writeln!(out, "  {:<30} {:5}  ({:5.2}%)", legend, group.count, group.pct)
                        .unwrap();
                }
            }
            None => {
                writeln!(out, "  No sequence data - composition undefined").unwrap();
            }
        }

        writeln!(out, "\n--- Abundance Analysis ---\n").unwrap();
        match &self.stats {
            Some(stats) => {
                let most = &stats.most_abundant;
                writeln!(
                    out,
                    "  Most abundant:  {} ({}) - {} ({:.2}%)",
                    most.name, most.one_letter, most.count, most.pct
                )
                .unwrap();
                match &stats.least_abundant {
                    Some(least) => writeln!(
                        out,
                        "  Least abundant: {} ({}) - {} ({:.2}%)",
                        least.name, least.one_letter, least.count, least.pct
                    )
                    .unwrap(),
                    None => writeln!(out, "  Least abundant: none").unwrap(),
                }
            }
            None => {
                writeln!(out, "  No sequence data - abundance undefined").unwrap();
            }
        }

        writeln!(out, "\n--- Physical Properties ---\n").unwrap();
        match &self.stats {
            Some(stats) => writeln!(
                out,
                "  Estimated Molecular Weight: {:.2} Da ({:.2} kDa)",
                stats.molecular_weight,
                stats.molecular_weight / 1000.0
            )
            .unwrap(),
            None => writeln!(out, "  Estimated Molecular Weight: undefined").unwrap(),
        }

        writeln!(out, "\n============================================================").unwrap();
        out
    }

    /// Generate the condensed result-file text on demand.
    pub fn get_summary(&self) -> String {
        let mut out = String::new();
        writeln!(out, "Protein Composition Analysis Results").unwrap();
        writeln!(out, "=====================================\n").unwrap();
        writeln!(out, "Protein: {}", self.record.header).unwrap();
        writeln!(out, "Length: {} amino acids\n", self.record.len()).unwrap();
        writeln!(out, "Amino Acid Counts:").unwrap();
        if let Some(stats) = &self.stats {
            for row in &stats.rows {
                writeln!(out, "{} ({}): {}", row.one_letter, row.three_letter, row.count).unwrap();
            }
        }
        match &self.stats {
            Some(stats) => {
                writeln!(out, "\nMolecular Weight: {:.2} Da", stats.molecular_weight).unwrap()
            }
            None => writeln!(out, "\nMolecular Weight: undefined").unwrap(),
        }
        out
    }
}

/// Runs the nucleotide pipeline over one FASTA file.
pub fn analyze_nucleotide<P: AsRef<Path>>(path: P) -> Result<NucleotideAnalysis, AnalyzerError> {
    // 1. Read and clean the record
    let record = read_fasta_record(path, Alphabet::Dna)?;
    log::info!(
        "Read sequence '{}' with {} accepted symbols",
        record.header,
        record.len()
    );

    // 2. Count bases
    let counts = count_nucleotides(&record);

    // 3. Derive statistics (None for an empty sequence)
    let stats = NucleotideStats::from_counts(&counts);

    Ok(NucleotideAnalysis {
        record,
        counts,
        stats,
    })
}

/// Runs the protein pipeline over one FASTA file.
pub fn analyze_protein<P: AsRef<Path>>(path: P) -> Result<ProteinAnalysis, AnalyzerError> {
    // 1. Read and clean the record
    let record = read_fasta_record(path, Alphabet::Protein)?;
    log::info!(
        "Read protein '{}' with {} accepted symbols",
        record.header,
        record.len()
    );

    // 2. Build the residue table and count residues
    let table = ResidueTable::new();
    let counts = count_residues(&record, &table);

    // 3. Derive statistics (None for an empty sequence)
    let stats = ProteinStats::from_counts(&counts, &table);

    Ok(ProteinAnalysis {
        record,
        counts,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_analyze_nucleotide_fixture() {
        let analysis = analyze_nucleotide("data/sample1.fasta").expect("fixture should parse");
        assert_eq!(analysis.record.header, "seq1");
        assert_eq!(analysis.record.len(), 8);
        assert_eq!(analysis.counts.a, 2);
        assert_eq!(analysis.counts.t, 2);
        assert_eq!(analysis.counts.g, 2);
        assert_eq!(analysis.counts.c, 2);

        let report = analysis.get_report();
        assert!(report.contains("Sequence Name: seq1"));
        assert!(report.contains("Total Length: 8 bp"));
        assert!(report.contains("GC Content: 50.00%"));
        assert!(report.contains("AT/GC Ratio: 1.00"));
        assert!(report.contains("Moderate GC content"));
        // No N in the fixture, so no unknown row
        assert!(!report.contains("Unknown  (N)"));

        let summary = analysis.get_summary();
        assert!(summary.contains("Sequence: seq1"));
        assert!(summary.contains("A: 2"));
        assert!(summary.contains("GC Content: 50.00%"));
    }

    #[test]
    fn test_analyze_protein_fixture() {
        let analysis = analyze_protein("data/insulin.fasta").expect("fixture should parse");
        assert!(analysis.record.header.contains("insulin"));
        assert_eq!(
            analysis.counts.total(),
            analysis.record.len() as u64,
            "counting must be exhaustive"
        );

        let report = analysis.get_report();
        assert!(report.contains("--- Amino Acid Composition ---"));
        assert!(report.contains("--- Property-Based Composition ---"));
        assert!(report.contains("Estimated Molecular Weight:"));
        assert!(report.contains("kDa"));
    }

    #[test]
    fn test_reports_are_deterministic() {
        let first = analyze_nucleotide("data/sample1.fasta").unwrap();
        let second = analyze_nucleotide("data/sample1.fasta").unwrap();
        assert_eq!(first.get_report(), second.get_report());
        assert_eq!(first.get_summary(), second.get_summary());

        let first = analyze_protein("data/insulin.fasta").unwrap();
        let second = analyze_protein("data/insulin.fasta").unwrap();
        assert_eq!(first.get_report(), second.get_report());
        assert_eq!(first.get_summary(), second.get_summary());
    }

    #[test]
    fn test_header_only_file_reports_undefined() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b">empty record\n").unwrap();

        let analysis = analyze_nucleotide(f.path()).unwrap();
        assert!(analysis.stats.is_none());
        let report = analysis.get_report();
        assert!(report.contains("Total Length: 0 bp"));
        assert!(report.contains("GC Content: undefined"));
        assert!(report.contains("interpretation undefined"));
        assert!(analysis.get_summary().contains("GC Content: undefined"));

        let analysis = analyze_protein(f.path()).unwrap();
        assert!(analysis.stats.is_none());
        let report = analysis.get_report();
        assert!(report.contains("Length: 0 amino acids"));
        assert!(report.contains("Estimated Molecular Weight: undefined"));
        assert!(analysis.get_summary().contains("Molecular Weight: undefined"));
    }

    #[test]
    fn test_unreadable_input_is_an_error() {
        let err = analyze_nucleotide("data/does_not_exist.fasta").unwrap_err();
        assert!(err.to_string().contains("does_not_exist.fasta"));
    }

    #[test]
    fn test_protein_scenario_report() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b">p1\nAACD\n").unwrap();

        let analysis = analyze_protein(f.path()).unwrap();
        let report = analysis.get_report();
        assert!(report.contains("Length: 4 amino acids"));
        assert!(report.contains("Alanine"));
        assert!(report.contains("Most abundant:  Alanine (A) - 2 (50.00%)"));
        assert!(report.contains("Estimated Molecular Weight: 378.50 Da (0.38 kDa)"));

        let summary = analysis.get_summary();
        assert!(summary.contains("A (Ala): 2"));
        assert!(summary.contains("C (Cys): 1"));
        assert!(summary.contains("Molecular Weight: 378.50 Da"));
    }
}
