//! Parser for FASTA files using noodles.
//!
//! Extracts record identifiers and amino-acid sequences from FASTA files.
//! Supports both uncompressed and gzip/bgzip compressed files, and reading
//! FASTA text from stdin via `-`.
//!
//! Record identifiers follow the usual FASTA convention: everything between
//! `>` and the first whitespace. Sequences may span multiple lines.

use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Sequence of record '{0}' is not valid UTF-8")]
    InvalidSequence(String),
}

/// A single FASTA record: identifier plus raw sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Identifier up to the first whitespace of the definition line
    pub id: String,

    /// Sequence with line breaks removed, case preserved
    pub sequence: String,
}

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read all records from a FASTA file, or from stdin when `path` is `-`.
///
/// An input with zero records yields an empty vector, not an error.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if a record is malformed, or `ParseError::InvalidSequence` if a sequence
/// is not valid UTF-8.
pub fn read_records(path: &Path) -> Result<Vec<FastaRecord>, ParseError> {
    if path == Path::new("-") {
        let stdin = io::stdin().lock();
        let mut reader = fasta::io::Reader::new(BufReader::new(stdin));
        return read_from_reader(&mut reader);
    }

    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        let decoder = GzDecoder::new(file);
        let mut reader = fasta::io::Reader::new(BufReader::new(decoder));
        read_from_reader(&mut reader)
    } else {
        let mut reader = fasta::io::Reader::new(BufReader::new(file));
        read_from_reader(&mut reader)
    }
}

/// Read all records from a noodles FASTA reader
fn read_from_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<FastaRecord>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let id = String::from_utf8_lossy(record.name()).to_string();
        let sequence = std::str::from_utf8(record.sequence().as_ref())
            .map_err(|_| ParseError::InvalidSequence(id.clone()))?
            .to_string();

        records.push(FastaRecord { id, sequence });
    }

    Ok(records)
}
