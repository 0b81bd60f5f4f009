//! Core data types for EPIYA genotyping.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`SegmentTag`]: The 5-residue segment variant of an EPIYA motif
//! - [`TypeLabel`]: The A/B/C/D type determined by the 4 residues following the segment
//! - [`MotifHit`]: One classified motif occurrence within a sequence
//!
//! ## Motif Anatomy
//!
//! An EPIYA occurrence spans 9 residues: a 5-residue segment immediately
//! followed (no gap) by a 4-residue type motif:
//!
//! | Segment tag | Segment motifs |
//! |-------------|----------------|
//! | (none)      | EPIYA          |
//! | `'`         | EPIYT          |
//! | `''`        | ESIYA          |
//! | `'''`       | ESIYT          |
//! | `*`         | EPVYA, EPLYA, ELIYA, EHIYA, EAIYA, APIYA, DPIYA |
//!
//! | Type label | Type motifs |
//! |------------|-------------|
//! | A          | QVNK, KVNK, EVNK |
//! | B          | QVAK        |
//! | C          | TIDD, TIDE, TIED |
//! | D          | TIDF        |
//!
//! Motif tables follow Xue et al. 2021 (doi:10.1186/s13099-021-00419-3).

pub mod motif;

pub use motif::{MotifHit, SegmentTag, TypeLabel};
