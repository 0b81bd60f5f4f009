use serde::Serialize;

/// Width of a segment motif in residues
pub const SEGMENT_WIDTH: usize = 5;

/// Width of a type motif in residues
pub const TYPE_WIDTH: usize = 4;

/// Full scan window: segment motif immediately followed by type motif
pub const WINDOW_WIDTH: usize = SEGMENT_WIDTH + TYPE_WIDTH;

/// Segment variant of an EPIYA motif.
///
/// The canonical segment is `EPIYA`; the primed variants are rare
/// single-substitution forms, and `Star` covers the remaining known
/// substitutions that are not assigned their own prime level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentTag {
    /// EPIYA - rendered with no suffix
    Canonical,
    /// EPIYT - rendered as `'`
    Prime,
    /// ESIYA - rendered as `''`
    DoublePrime,
    /// ESIYT - rendered as `'''`
    TriplePrime,
    /// Other single-substitution variants - rendered as `*`
    Star,
}

impl SegmentTag {
    /// Suffix appended to the type label in a genotype string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canonical => "",
            Self::Prime => "'",
            Self::DoublePrime => "''",
            Self::TriplePrime => "'''",
            Self::Star => "*",
        }
    }
}

impl std::fmt::Display for SegmentTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type label of an EPIYA motif, determined by the 4 residues that follow
/// the segment.
///
/// A and B types occur in Western strains, C in Western strains with
/// duplication, D in East Asian strains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeLabel {
    A,
    B,
    C,
    D,
}

impl TypeLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Segment motif table: tag -> literal 5-residue motifs.
///
/// Declaration order is the lookup order; the first tag whose motif list
/// contains the window wins. No literal may appear under more than one tag
/// (verified by tests).
pub const SEGMENT_MOTIFS: &[(SegmentTag, &[&str])] = &[
    (SegmentTag::Canonical, &["EPIYA"]),
    (SegmentTag::Prime, &["EPIYT"]),
    (SegmentTag::DoublePrime, &["ESIYA"]),
    (SegmentTag::TriplePrime, &["ESIYT"]),
    (
        SegmentTag::Star,
        &["EPVYA", "EPLYA", "ELIYA", "EHIYA", "EAIYA", "APIYA", "DPIYA"],
    ),
];

/// Type motif table: label -> literal 4-residue motifs.
///
/// Same ordering and uniqueness rules as [`SEGMENT_MOTIFS`].
pub const TYPE_MOTIFS: &[(TypeLabel, &[&str])] = &[
    (TypeLabel::A, &["QVNK", "KVNK", "EVNK"]),
    (TypeLabel::B, &["QVAK"]),
    (TypeLabel::C, &["TIDD", "TIDE", "TIED"]),
    (TypeLabel::D, &["TIDF"]),
];

/// Whether a 5-residue window is a known segment motif under any tag.
///
/// Windows are compared as raw bytes so callers can scan arbitrary input
/// without worrying about char boundaries; anything outside the amino-acid
/// alphabet simply fails to match.
#[must_use]
pub fn is_segment_motif(window: &[u8]) -> bool {
    SEGMENT_MOTIFS
        .iter()
        .any(|(_, motifs)| motifs.iter().any(|m| m.as_bytes() == window))
}

/// Resolve the segment tag for a 5-residue window, first tag in
/// declaration order wins
#[must_use]
pub fn segment_tag_for(window: &[u8]) -> Option<SegmentTag> {
    SEGMENT_MOTIFS
        .iter()
        .find(|(_, motifs)| motifs.iter().any(|m| m.as_bytes() == window))
        .map(|(tag, _)| *tag)
}

/// Resolve the type label for a 4-residue window, first label in
/// declaration order wins
#[must_use]
pub fn type_label_for(window: &[u8]) -> Option<TypeLabel> {
    TYPE_MOTIFS
        .iter()
        .find(|(_, motifs)| motifs.iter().any(|m| m.as_bytes() == window))
        .map(|(label, _)| *label)
}

/// One classified EPIYA occurrence within a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MotifHit {
    /// Offset of the segment motif within the sequence (0-based)
    pub offset: usize,

    /// Segment variant found at `offset`
    pub tag: SegmentTag,

    /// Type found immediately after the segment
    pub label: TypeLabel,
}

impl MotifHit {
    /// Render the classification token, e.g. `B'`.
    ///
    /// When `collapse_rare_segments` is set, the segment tag is dropped and
    /// only the type label remains; the label itself is never altered.
    #[must_use]
    pub fn token(&self, collapse_rare_segments: bool) -> String {
        if collapse_rare_segments {
            self.label.as_str().to_string()
        } else {
            format!("{}{}", self.label, self.tag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_segment_motifs_have_segment_width() {
        for (tag, motifs) in SEGMENT_MOTIFS {
            for motif in *motifs {
                assert_eq!(motif.len(), SEGMENT_WIDTH, "{tag:?}: {motif}");
            }
        }
    }

    #[test]
    fn test_type_motifs_have_type_width() {
        for (label, motifs) in TYPE_MOTIFS {
            for motif in *motifs {
                assert_eq!(motif.len(), TYPE_WIDTH, "{label:?}: {motif}");
            }
        }
    }

    #[test]
    fn test_no_segment_motif_under_two_tags() {
        let mut seen = HashSet::new();
        for (tag, motifs) in SEGMENT_MOTIFS {
            for motif in *motifs {
                assert!(seen.insert(*motif), "{motif} appears under {tag:?} and an earlier tag");
            }
        }
    }

    #[test]
    fn test_no_type_motif_under_two_labels() {
        let mut seen = HashSet::new();
        for (label, motifs) in TYPE_MOTIFS {
            for motif in *motifs {
                assert!(
                    seen.insert(*motif),
                    "{motif} appears under {label:?} and an earlier label"
                );
            }
        }
    }

    #[test]
    fn test_segment_lookup() {
        assert_eq!(segment_tag_for(b"EPIYA"), Some(SegmentTag::Canonical));
        assert_eq!(segment_tag_for(b"EPIYT"), Some(SegmentTag::Prime));
        assert_eq!(segment_tag_for(b"ESIYA"), Some(SegmentTag::DoublePrime));
        assert_eq!(segment_tag_for(b"ESIYT"), Some(SegmentTag::TriplePrime));
        assert_eq!(segment_tag_for(b"DPIYA"), Some(SegmentTag::Star));
        assert_eq!(segment_tag_for(b"EPIYX"), None);
        assert!(is_segment_motif(b"EPVYA"));
        assert!(!is_segment_motif(b"QVNKE"));
    }

    #[test]
    fn test_type_lookup() {
        assert_eq!(type_label_for(b"QVNK"), Some(TypeLabel::A));
        assert_eq!(type_label_for(b"EVNK"), Some(TypeLabel::A));
        assert_eq!(type_label_for(b"QVAK"), Some(TypeLabel::B));
        assert_eq!(type_label_for(b"TIED"), Some(TypeLabel::C));
        assert_eq!(type_label_for(b"TIDF"), Some(TypeLabel::D));
        assert_eq!(type_label_for(b"TIDX"), None);
    }

    #[test]
    fn test_token_rendering() {
        let hit = MotifHit {
            offset: 0,
            tag: SegmentTag::Prime,
            label: TypeLabel::B,
        };
        assert_eq!(hit.token(false), "B'");
        assert_eq!(hit.token(true), "B");

        let hit = MotifHit {
            offset: 12,
            tag: SegmentTag::Canonical,
            label: TypeLabel::A,
        };
        assert_eq!(hit.token(false), "A");
        assert_eq!(hit.token(true), "A");
    }
}
