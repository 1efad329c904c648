use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::AnalyzerError;
use crate::types::SequenceRecord;

/// Which symbols the reader keeps from sequence lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// A, T, G, C plus N for unresolved bases.
    Dna,
    /// Any ASCII letter; membership in the 20 standard residues is decided
    /// later, at count time.
    Protein,
}

impl Alphabet {
    /// Filter applied to each already-uppercased character.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Alphabet::Dna => matches!(c, 'A' | 'T' | 'G' | 'C' | 'N'),
            Alphabet::Protein => c.is_ascii_uppercase(),
        }
    }
}

/// Reads one FASTA record from `path`, filtering sequence characters through
/// `alphabet`. Files ending in `.gz` are decompressed on the fly.
///
/// Lines starting with `>` set the header (marker stripped); all other lines
/// are sequence lines whose characters are uppercased and kept only if the
/// alphabet accepts them. Blank lines and CRLF endings are tolerated.
///
/// Note: on multi-record input, each later `>` line overwrites the header
/// while sequence lines from every record keep accumulating into one
/// combined sequence. Callers wanting per-record results must not feed
/// multi-record files to this reader.
pub fn read_fasta_record<P: AsRef<Path>>(
    path: P,
    alphabet: Alphabet,
) -> Result<SequenceRecord, AnalyzerError> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|source| AnalyzerError::FileNotReadable {
        path: path.to_path_buf(),
        source,
    })?;

    // If the file ends with ".gz", wrap it in a MultiGzDecoder
    let is_gz = path.extension().map(|ext| ext == "gz").unwrap_or(false);
    let mut reader: Box<dyn BufRead> = if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };

    let mut record = SequenceRecord::default();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);

        if let Some(hdr) = trimmed.strip_prefix('>') {
            // Last header line wins
            record.header.clear();
            record.header.push_str(hdr);
        } else {
            for ch in trimmed.chars() {
                let up = ch.to_ascii_uppercase();
                if alphabet.accepts(up) {
                    record.symbols.push(up);
                }
            }
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        f.write_all(contents.as_bytes()).expect("write temp file");
        f
    }

    #[test]
    fn test_reads_header_and_sequence() {
        let f = write_temp(">seq1\nATGCATGC\n");
        let rec = read_fasta_record(f.path(), Alphabet::Dna).unwrap();
        assert_eq!(rec.header, "seq1");
        assert_eq!(rec.symbols, "ATGCATGC");
        assert_eq!(rec.len(), 8);
    }

    #[test]
    fn test_case_folding_and_filtering() {
        let f = write_temp(">mixed\nat gc\n12nn!\nACGT-acgt\n");
        let rec = read_fasta_record(f.path(), Alphabet::Dna).unwrap();
        assert_eq!(rec.symbols, "ATGCNNACGTACGT");
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let f = write_temp(">win\r\nATGC\r\n\r\nGGCC\r\n");
        let rec = read_fasta_record(f.path(), Alphabet::Dna).unwrap();
        assert_eq!(rec.header, "win");
        assert_eq!(rec.symbols, "ATGCGGCC");
    }

    #[test]
    fn test_missing_header() {
        let f = write_temp("ATGC\nTTAA\n");
        let rec = read_fasta_record(f.path(), Alphabet::Dna).unwrap();
        assert_eq!(rec.header, "");
        assert_eq!(rec.symbols, "ATGCTTAA");
    }

    #[test]
    fn test_last_header_wins_sequences_accumulate() {
        let f = write_temp(">first\nATGC\n>second\nGGTT\n");
        let rec = read_fasta_record(f.path(), Alphabet::Dna).unwrap();
        assert_eq!(rec.header, "second");
        assert_eq!(rec.symbols, "ATGCGGTT");
    }

    #[test]
    fn test_protein_accepts_all_letters() {
        let f = write_temp(">p\nacdZ*xB9\n");
        let rec = read_fasta_record(f.path(), Alphabet::Protein).unwrap();
        assert_eq!(rec.symbols, "ACDZXB");
    }

    #[test]
    fn test_gz_input() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("seq.fasta.gz");
        let f = std::fs::File::create(&path).expect("create gz file");
        let mut enc = GzEncoder::new(f, Compression::default());
        enc.write_all(b">gz\nATGC\n").expect("write gz payload");
        enc.finish().expect("finish gz stream");

        let rec = read_fasta_record(&path, Alphabet::Dna).unwrap();
        assert_eq!(rec.header, "gz");
        assert_eq!(rec.symbols, "ATGC");
    }

    #[test]
    fn test_unreadable_path() {
        let err = read_fasta_record("no/such/file.fasta", Alphabet::Dna).unwrap_err();
        match err {
            AnalyzerError::FileNotReadable { path, .. } => {
                assert_eq!(path.to_str().unwrap(), "no/such/file.fasta");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
