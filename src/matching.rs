//! # Matching Engine
//!
//! Filters a corpus of [`Chord`]s by root, quality, bass and group.
//!
//! ## Semantics
//! - Every criterion is an independent predicate; a [`ChordQuery`] keeps a
//!   chord only if all set criteria hold, so the order in which criteria
//!   are added never changes the result.
//! - Results keep the corpus order. The corpus is only read.
//! - Quality matches the exact variant; use [`ChordQuery::group`] for
//!   coarse filtering.
//! - `bass(None)` means "chords without a bass note", not "any bass".
//! - Roots and basses compare by pitch class ([`PitchMatching::Enharmonic`])
//!   unless the query asks for exact spelling.
//!
//! ## Example
//! ```rust
//! use chordex::{parse, ChordQuery, Quality};
//!
//! let corpus: Vec<_> = ["Cmaj7", "Cm7", "G7"].iter().map(|s| parse(s)).collect::<Result<_, _>>()?;
//!
//! let found = ChordQuery::new()
//!     .quality(Quality::MinorSeven)
//!     .root("C".parse()?)
//!     .apply(&corpus);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].name(), "Cm7");
//! # Ok::<(), chordex::ChordError>(())
//! ```

use crate::chord::Chord;
use crate::error::ChordError;
use crate::parser;
use crate::pitch::PitchClass;
use crate::quality::{Quality, QualityGroup};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How roots and basses are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchMatching {
    /// Same semitone (C# matches Db)
    #[default]
    Enharmonic,
    /// Same letter and accidental
    Spelling,
}

impl PitchMatching {
    pub fn same(self, a: PitchClass, b: PitchClass) -> bool {
        match self {
            PitchMatching::Enharmonic => a.same_class(&b),
            PitchMatching::Spelling => a == b,
        }
    }
}

impl FromStr for PitchMatching {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "enharmonic" => Ok(PitchMatching::Enharmonic),
            "spelling" => Ok(PitchMatching::Spelling),
            other => Err(format!(
                "pitch-matching must be enharmonic or spelling (got {:?})",
                other
            )),
        }
    }
}

/// A set of criteria over chord fields. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChordQuery {
    root: Option<PitchClass>,
    quality: Option<Quality>,
    bass: Option<Option<PitchClass>>,
    group: Option<QualityGroup>,
    pitch_matching: PitchMatching,
}

impl ChordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query for exactly what a symbol spells: its root, its quality and its
    /// bass (a symbol without `/` asks for chords without a bass).
    ///
    /// A symbol whose quality is not recognized is rejected with
    /// `UnknownQuality` rather than becoming a query for `Quality::Unknown`.
    pub fn from_symbol(symbol: &str) -> crate::Result<Self> {
        let chord = parser::parse(symbol)?;
        if chord.quality().is_unknown() {
            return Err(ChordError::UnknownQuality(symbol.to_string()));
        }
        Ok(Self::new()
            .root(chord.root())
            .quality(chord.quality())
            .bass(chord.bass()))
    }

    pub fn root(mut self, root: PitchClass) -> Self {
        self.root = Some(root);
        self
    }

    pub fn quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    /// `None` keeps only chords with no bass note.
    pub fn bass(mut self, bass: Option<PitchClass>) -> Self {
        self.bass = Some(bass);
        self
    }

    pub fn group(mut self, group: QualityGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn pitch_matching(mut self, mode: PitchMatching) -> Self {
        self.pitch_matching = mode;
        self
    }

    pub fn matches(&self, chord: &Chord) -> bool {
        let mode = self.pitch_matching;

        if let Some(root) = self.root {
            if !mode.same(chord.root(), root) {
                return false;
            }
        }
        if let Some(quality) = self.quality {
            if chord.quality() != quality {
                return false;
            }
        }
        if let Some(group) = self.group {
            if chord.quality().group() != group {
                return false;
            }
        }
        match self.bass {
            None => true,
            Some(None) => chord.bass().is_none(),
            Some(Some(wanted)) => chord.bass().is_some_and(|b| mode.same(b, wanted)),
        }
    }

    /// Matching chords in corpus order.
    pub fn apply<'a>(&self, corpus: &'a [Chord]) -> Vec<&'a Chord> {
        let found: Vec<&Chord> = corpus.iter().filter(|chord| self.matches(chord)).collect();
        tracing::trace!(corpus = corpus.len(), matched = found.len(), "chord query");
        found
    }
}

/// Filter a corpus by any combination of root, quality and bass.
///
/// `bass: Some(None)` keeps only chords without a bass; `bass: None`
/// leaves the bass unconstrained.
pub fn matching<'a>(
    corpus: &'a [Chord],
    root: Option<PitchClass>,
    quality: Option<Quality>,
    bass: Option<Option<PitchClass>>,
) -> Vec<&'a Chord> {
    ChordQuery {
        root,
        quality,
        bass,
        ..ChordQuery::default()
    }
    .apply(corpus)
}

/// Find the chords a symbol names. An unparseable symbol, or one with an
/// unrecognized quality, finds nothing.
pub fn search<'a>(corpus: &'a [Chord], symbol: &str) -> Vec<&'a Chord> {
    match ChordQuery::from_symbol(symbol) {
        Ok(query) => query.apply(corpus),
        Err(e) => {
            tracing::debug!(symbol, error = %e, "search symbol did not parse");
            Vec::new()
        }
    }
}
