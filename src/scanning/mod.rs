//! Sliding-window EPIYA motif scanner.
//!
//! This module provides the genotyping core:
//!
//! - [`find_motifs`]: Locate and classify every EPIYA occurrence in a sequence
//! - [`scan`]: Render the occurrences as a compact genotype string
//!
//! ## Scanning Algorithm
//!
//! A 9-residue window slides over the sequence one position at a time, over
//! offsets `0..len - 9`. The bound is exclusive: the final full window, the
//! one starting at offset `len - 9`, is never examined. Genotype strings for
//! existing datasets were produced with this boundary, so it is kept as-is
//! to keep published calls stable. At each offset:
//!
//! 1. The first 5 residues are looked up in the segment table. No segment
//!    match means nothing happens at this offset.
//! 2. The next 4 residues are looked up in the type table. Only a type match
//!    produces a hit; a segment match alone emits nothing.
//!
//! Overlapping windows are scanned independently - a residue may participate
//! in several hits, and the scan position never jumps past a match. Sequences
//! of 9 residues or fewer produce zero hits; an empty result is a normal
//! outcome, never an error.
//!
//! ## Example
//!
//! ```rust
//! use epiya_typer::scanning::scan;
//!
//! assert_eq!(scan("EPIYAQVNKEPIYTQVAKK", false), "AB'");
//! assert_eq!(scan("EPIYAQVNKEPIYTQVAKK", true), "AB");
//! assert_eq!(scan("no motifs here", false), "");
//!
//! // A motif flush against the end of the sequence sits in the unscanned
//! // tail window and is not reported
//! assert_eq!(scan("EPIYAQVNK", false), "");
//! ```

use crate::core::motif::{
    segment_tag_for, type_label_for, MotifHit, SEGMENT_WIDTH, WINDOW_WIDTH,
};

/// Locate and classify every EPIYA occurrence in `sequence`, in scan order.
///
/// Pure and total: any string is acceptable input, including the empty
/// string. Comparison is byte-wise and case-sensitive, so symbols outside
/// the amino-acid alphabet simply never match.
#[must_use]
pub fn find_motifs(sequence: &str) -> Vec<MotifHit> {
    let seq = sequence.as_bytes();
    let mut hits = Vec::new();

    if seq.len() < WINDOW_WIDTH {
        return hits;
    }

    // Exclusive bound: the window at offset len - 9 is never scanned.
    // Existing genotype calls were made with this boundary; changing it
    // would alter output for sequences with a motif at the tail.
    for offset in 0..seq.len() - WINDOW_WIDTH {
        let segment = &seq[offset..offset + SEGMENT_WIDTH];
        // Segment match gates the window; type match gates emission.
        let Some(tag) = segment_tag_for(segment) else {
            continue;
        };
        let after = &seq[offset + SEGMENT_WIDTH..offset + WINDOW_WIDTH];
        if let Some(label) = type_label_for(after) {
            hits.push(MotifHit { offset, tag, label });
        }
    }

    hits
}

/// Scan `sequence` and return its genotype string: every classification
/// token in scan order, concatenated with no separator.
///
/// With `collapse_rare_segments` set, rare segment tags are dropped from
/// the output (`B'`, `B''`, `B'''` all render as `B`).
#[must_use]
pub fn scan(sequence: &str, collapse_rare_segments: bool) -> String {
    find_motifs(sequence)
        .iter()
        .map(|hit| hit.token(collapse_rare_segments))
        .collect()
}
