//! # epiya-typer
//!
//! A library for genotyping Helicobacter pylori cagA sequences by scanning
//! for EPIYA-family motifs.
//!
//! The C-terminal variable region of cagA carries a variable number of EPIYA
//! motifs whose arrangement (e.g. ABC, ABD, ABCCC) correlates with strain
//! origin and pathogenicity. Each occurrence is a 5-residue segment motif
//! (EPIYA or a rare variant) immediately followed by a 4-residue type motif
//! that determines the A/B/C/D label.
//!
//! `epiya-typer` slides a 9-residue window over a sequence and emits one
//! classification token per occurrence, concatenated into a genotype string.
//!
//! ## Features
//!
//! - **Pure scanning core**: total over all string inputs, no error cases
//! - **Rare-variant tags**: primed and starred segment variants (`B'`, `B*`)
//! - **Tag collapsing**: optionally render rare variants as their base label
//! - **FASTA batch mode**: genotype every record of a file via noodles
//!
//! ## Example
//!
//! ```rust
//! use epiya_typer::scanning::{find_motifs, scan};
//!
//! // Western-type arrangement with a rare B variant
//! assert_eq!(scan("EPIYAQVNKEPIYTQVAKK", false), "AB'");
//!
//! // Collapse rare segment tags
//! assert_eq!(scan("EPIYAQVNKEPIYTQVAKK", true), "AB");
//!
//! // Hits carry their offsets
//! let hits = find_motifs("EPIYAQVNKK");
//! assert_eq!(hits[0].offset, 0);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Motif tables and classification types
//! - [`scanning`]: The sliding-window scanner
//! - [`parsing`]: FASTA record reading
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod scanning;

// Re-export commonly used types for convenience
pub use crate::core::motif::{MotifHit, SegmentTag, TypeLabel};
pub use crate::parsing::fasta::FastaRecord;
pub use crate::scanning::{find_motifs, scan};
