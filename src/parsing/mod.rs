//! Readers for supplying sequences to the scanner.
//!
//! The scanner itself only ever sees an in-memory string; this module turns
//! FASTA inputs into those strings:
//!
//! - **FASTA files**: one identifier + one amino-acid sequence per record,
//!   plain or gzip/bgzip compressed
//! - **stdin**: `-` reads FASTA text from standard input
//!
//! ## Example
//!
//! ```rust,no_run
//! use epiya_typer::parsing::fasta::read_records;
//! use std::path::Path;
//!
//! let records = read_records(Path::new("caga.fasta")).unwrap();
//! for record in &records {
//!     println!("{}: {} residues", record.id, record.sequence.len());
//! }
//! ```

pub mod fasta;

pub use fasta::{FastaRecord, ParseError};
