//! # Quality Taxonomy
//!
//! The closed set of chord qualities understood by the parser, with the
//! per-quality metadata used for storage, display and filtering.
//!
//! ## Tables
//! Everything lives in one ordered table, [`QUALITIES`]. A row holds:
//! - the **raw token** (`"m7"`, `"7sus4"`, `""` for major), the storage form
//!   and the only form that must round-trip through [`Quality::from_token`]
//! - the **display token**, identical to the raw token except where the
//!   printed form contains a slash (`"6/9"` vs raw `"69"`)
//! - the [`QualityGroup`] used for coarse filtering
//! - the four display strings ([`QualityNames`])
//!
//! ## Ordering
//! A quality's rank is its row index in [`QUALITIES`]; `Ord` compares
//! ranks. The order is musical (triads, sixths, added notes, sevenths,
//! ninths...) and is neither alphabetical nor tied to the enum
//! declaration. [`Quality::Unknown`] sorts after every real quality.
//!
//! ## Aliases
//! Common alternative spellings (`"min"`, `"-7"`, `"Δ7"`, `"6/9"`...) are
//! resolved through a separate alias table, consulted before the raw
//! tokens. An alias never introduces a new variant.
//!
//! ## Storage
//! Qualities serialize as their raw token. Changing a raw token is a
//! breaking change for anything persisted.

use crate::error::ChordError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Five,
    SusTwo,
    SusFour,
    Six,
    MinorSix,
    SixNine,
    MinorSixNine,
    AddNine,
    MinorAddNine,
    AddEleven,
    Seven,
    SevenSusTwo,
    SevenSusFour,
    SevenFlatFive,
    SevenSharpFive,
    SevenFlatNine,
    SevenSharpNine,
    SevenSharpEleven,
    SevenFlatThirteen,
    MajorSeven,
    MajorSevenFlatFive,
    MajorSevenSharpFive,
    MajorSevenSharpEleven,
    MinorSeven,
    MinorSevenFlatFive,
    MinorMajorSeven,
    DiminishedSeven,
    AugmentedSeven,
    Nine,
    NineSusFour,
    NineSharpEleven,
    MajorNine,
    MinorNine,
    Eleven,
    MinorEleven,
    Thirteen,
    ThirteenSusFour,
    ThirteenFlatNine,
    MajorThirteen,
    MinorThirteen,
    /// Quality text that matched no token or alias
    Unknown,
}

/// Coarse classification for UI-level filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityGroup {
    Major,
    Minor,
    Diminished,
    Augmented,
    Suspended,
    Other,
}

/// The four human-facing renderings of a quality.
///
/// Presentation data only: two qualities may share a rendering
/// (`aug7` and `7#5` both have the alt symbol `+⁷`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityNames {
    /// Spoken phrase ("minor seven")
    pub accessible: &'static str,
    /// Plain text ("m7")
    pub short: &'static str,
    /// With superscripts ("m⁷")
    pub symbol: &'static str,
    /// Alternate symbol ("ø⁷" for m7b5)
    pub alt_symbol: &'static str,
}

/// One row of the taxonomy
#[derive(Debug)]
pub struct QualityInfo {
    pub quality: Quality,
    pub token: &'static str,
    pub display_token: &'static str,
    pub group: QualityGroup,
    pub names: QualityNames,
}

#[allow(clippy::too_many_arguments)]
const fn row(
    quality: Quality,
    token: &'static str,
    display_token: &'static str,
    group: QualityGroup,
    accessible: &'static str,
    short: &'static str,
    symbol: &'static str,
    alt_symbol: &'static str,
) -> QualityInfo {
    QualityInfo {
        quality,
        token,
        display_token,
        group,
        names: QualityNames {
            accessible,
            short,
            symbol,
            alt_symbol,
        },
    }
}

use QualityGroup as G;

/// Every real quality in rank order.
#[rustfmt::skip]
pub static QUALITIES: &[QualityInfo] = &[
    // Triads and power chord
    row(Quality::Major, "", "", G::Major, "major", "", "", ""),
    row(Quality::Minor, "m", "m", G::Minor, "minor", "m", "m", "−"),
    row(Quality::Diminished, "dim", "dim", G::Diminished, "diminished", "dim", "°", "o"),
    row(Quality::Augmented, "aug", "aug", G::Augmented, "augmented", "aug", "+", "+"),
    row(Quality::Five, "5", "5", G::Other, "five", "5", "⁵", "⁵"),
    row(Quality::SusTwo, "sus2", "sus2", G::Suspended, "suspended two", "sus2", "sus²", "sus²"),
    row(Quality::SusFour, "sus4", "sus4", G::Suspended, "suspended four", "sus4", "sus⁴", "sus⁴"),
    // Sixths
    row(Quality::Six, "6", "6", G::Other, "six", "6", "⁶", "⁶"),
    row(Quality::MinorSix, "m6", "m6", G::Minor, "minor six", "m6", "m⁶", "−⁶"),
    row(Quality::SixNine, "69", "6/9", G::Major, "six nine", "6/9", "⁶ᐟ⁹", "⁶ᐟ⁹"),
    row(Quality::MinorSixNine, "m69", "m6/9", G::Minor, "minor six nine", "m6/9", "m⁶ᐟ⁹", "−⁶ᐟ⁹"),
    // Added notes
    row(Quality::AddNine, "add9", "add9", G::Major, "add nine", "add9", "add⁹", "²"),
    row(Quality::MinorAddNine, "madd9", "madd9", G::Minor, "minor add nine", "madd9", "madd⁹", "−add⁹"),
    row(Quality::AddEleven, "add11", "add11", G::Major, "add eleven", "add11", "add¹¹", "add¹¹"),
    // Sevenths
    row(Quality::Seven, "7", "7", G::Other, "seven", "7", "⁷", "⁷"),
    row(Quality::SevenSusTwo, "7sus2", "7sus2", G::Suspended, "seven suspended two", "7sus2", "⁷sus²", "⁷sus²"),
    row(Quality::SevenSusFour, "7sus4", "7sus4", G::Suspended, "seven suspended four", "7sus4", "⁷sus⁴", "⁷sus⁴"),
    row(Quality::SevenFlatFive, "7b5", "7b5", G::Other, "seven flat five", "7b5", "⁷♭⁵", "⁷♭⁵"),
    row(Quality::SevenSharpFive, "7#5", "7#5", G::Augmented, "seven sharp five", "7#5", "⁷♯⁵", "+⁷"),
    row(Quality::SevenFlatNine, "7b9", "7b9", G::Other, "seven flat nine", "7b9", "⁷♭⁹", "⁷♭⁹"),
    row(Quality::SevenSharpNine, "7#9", "7#9", G::Other, "seven sharp nine", "7#9", "⁷♯⁹", "⁷♯⁹"),
    row(Quality::SevenSharpEleven, "7#11", "7#11", G::Other, "seven sharp eleven", "7#11", "⁷♯¹¹", "⁷♯¹¹"),
    row(Quality::SevenFlatThirteen, "7b13", "7b13", G::Other, "seven flat thirteen", "7b13", "⁷♭¹³", "⁷♭¹³"),
    row(Quality::MajorSeven, "maj7", "maj7", G::Major, "major seven", "maj7", "maj⁷", "Δ⁷"),
    row(Quality::MajorSevenFlatFive, "maj7b5", "maj7b5", G::Major, "major seven flat five", "maj7b5", "maj⁷♭⁵", "Δ⁷♭⁵"),
    row(Quality::MajorSevenSharpFive, "maj7#5", "maj7#5", G::Augmented, "major seven sharp five", "maj7#5", "maj⁷♯⁵", "Δ⁷♯⁵"),
    row(Quality::MajorSevenSharpEleven, "maj7#11", "maj7#11", G::Major, "major seven sharp eleven", "maj7#11", "maj⁷♯¹¹", "Δ⁷♯¹¹"),
    row(Quality::MinorSeven, "m7", "m7", G::Minor, "minor seven", "m7", "m⁷", "−⁷"),
    row(Quality::MinorSevenFlatFive, "m7b5", "m7b5", G::Diminished, "minor seven flat five", "m7b5", "m⁷♭⁵", "ø⁷"),
    row(Quality::MinorMajorSeven, "mmaj7", "mmaj7", G::Minor, "minor major seven", "mmaj7", "m(maj⁷)", "−Δ⁷"),
    row(Quality::DiminishedSeven, "dim7", "dim7", G::Diminished, "diminished seven", "dim7", "°⁷", "o⁷"),
    row(Quality::AugmentedSeven, "aug7", "aug7", G::Augmented, "augmented seven", "aug7", "+⁷", "+⁷"),
    // Ninths
    row(Quality::Nine, "9", "9", G::Other, "nine", "9", "⁹", "⁹"),
    row(Quality::NineSusFour, "9sus4", "9sus4", G::Suspended, "nine suspended four", "9sus4", "⁹sus⁴", "⁹sus⁴"),
    row(Quality::NineSharpEleven, "9#11", "9#11", G::Other, "nine sharp eleven", "9#11", "⁹♯¹¹", "⁹♯¹¹"),
    row(Quality::MajorNine, "maj9", "maj9", G::Major, "major nine", "maj9", "maj⁹", "Δ⁹"),
    row(Quality::MinorNine, "m9", "m9", G::Minor, "minor nine", "m9", "m⁹", "−⁹"),
    // Elevenths
    row(Quality::Eleven, "11", "11", G::Other, "eleven", "11", "¹¹", "¹¹"),
    row(Quality::MinorEleven, "m11", "m11", G::Minor, "minor eleven", "m11", "m¹¹", "−¹¹"),
    // Thirteenths
    row(Quality::Thirteen, "13", "13", G::Other, "thirteen", "13", "¹³", "¹³"),
    row(Quality::ThirteenSusFour, "13sus4", "13sus4", G::Suspended, "thirteen suspended four", "13sus4", "¹³sus⁴", "¹³sus⁴"),
    row(Quality::ThirteenFlatNine, "13b9", "13b9", G::Other, "thirteen flat nine", "13b9", "¹³♭⁹", "¹³♭⁹"),
    row(Quality::MajorThirteen, "maj13", "maj13", G::Major, "major thirteen", "maj13", "maj¹³", "Δ¹³"),
    row(Quality::MinorThirteen, "m13", "m13", G::Minor, "minor thirteen", "m13", "m¹³", "−¹³"),
];

static UNKNOWN: QualityInfo = row(Quality::Unknown, "?", "?", G::Other, "unknown", "?", "?", "?");

/// Alternative spellings, checked before the raw tokens.
///
/// An alias that happens to equal a raw token must name that same quality.
pub static ALIASES: &[(&str, Quality)] = &[
    ("69", Quality::SixNine),
    ("6/9", Quality::SixNine),
    ("m6/9", Quality::MinorSixNine),
    ("m", Quality::Minor),
    ("maj", Quality::Major),
    ("M", Quality::Major),
    ("min", Quality::Minor),
    ("-", Quality::Minor),
    ("°", Quality::Diminished),
    ("o", Quality::Diminished),
    ("+", Quality::Augmented),
    ("sus", Quality::SusFour),
    ("add2", Quality::AddNine),
    ("2", Quality::AddNine),
    ("M7", Quality::MajorSeven),
    ("Maj7", Quality::MajorSeven),
    ("Δ", Quality::MajorSeven),
    ("Δ7", Quality::MajorSeven),
    ("min7", Quality::MinorSeven),
    ("-7", Quality::MinorSeven),
    ("ø", Quality::MinorSevenFlatFive),
    ("ø7", Quality::MinorSevenFlatFive),
    ("m7-5", Quality::MinorSevenFlatFive),
    ("°7", Quality::DiminishedSeven),
    ("o7", Quality::DiminishedSeven),
    ("+7", Quality::AugmentedSeven),
    ("7+5", Quality::SevenSharpFive),
    ("7-5", Quality::SevenFlatFive),
    ("m(maj7)", Quality::MinorMajorSeven),
    ("mM7", Quality::MinorMajorSeven),
    ("M9", Quality::MajorNine),
    ("min9", Quality::MinorNine),
    ("-9", Quality::MinorNine),
];

static ALIAS_LOOKUP: Lazy<HashMap<&'static str, Quality>> =
    Lazy::new(|| ALIASES.iter().copied().collect());

static TOKEN_LOOKUP: Lazy<HashMap<&'static str, Quality>> = Lazy::new(|| {
    QUALITIES
        .iter()
        .chain(std::iter::once(&UNKNOWN))
        .map(|info| (info.token, info.quality))
        .collect()
});

static RANKS: Lazy<HashMap<Quality, usize>> = Lazy::new(|| {
    QUALITIES
        .iter()
        .enumerate()
        .map(|(rank, info)| (info.quality, rank))
        .collect()
});

impl Quality {
    /// All real qualities in rank order (excludes [`Quality::Unknown`]).
    pub fn all() -> impl Iterator<Item = Quality> {
        QUALITIES.iter().map(|info| info.quality)
    }

    /// Resolve a token: aliases first, then exact raw-token lookup.
    ///
    /// Matching is exact and case-sensitive over the whole string, so
    /// `"7"` never matches the start of `"7sus4"`.
    ///
    /// ```
    /// use chordex::Quality;
    ///
    /// assert_eq!(Quality::from_token("7sus4"), Some(Quality::SevenSusFour));
    /// assert_eq!(Quality::from_token("69"), Some(Quality::SixNine));
    /// assert_eq!(Quality::from_token("Maj9"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Quality> {
        if let Some(&quality) = ALIAS_LOOKUP.get(token) {
            tracing::trace!(token, ?quality, "quality alias");
            return Some(quality);
        }
        TOKEN_LOOKUP.get(token).copied()
    }

    pub fn info(self) -> &'static QualityInfo {
        match RANKS.get(&self) {
            Some(&rank) => &QUALITIES[rank],
            None => &UNKNOWN,
        }
    }

    /// Position in the canonical order
    pub fn rank(self) -> usize {
        RANKS.get(&self).copied().unwrap_or(QUALITIES.len())
    }

    /// Raw storage token
    pub fn token(self) -> &'static str {
        self.info().token
    }

    /// Token as printed (`"6/9"` rather than `"69"`)
    pub fn display_token(self) -> &'static str {
        self.info().display_token
    }

    pub fn group(self) -> QualityGroup {
        self.info().group
    }

    pub fn names(self) -> QualityNames {
        self.info().names
    }

    pub fn is_unknown(self) -> bool {
        self == Quality::Unknown
    }
}

impl PartialOrd for Quality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quality {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.names().short)
    }
}

impl FromStr for Quality {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quality::from_token(s).ok_or_else(|| ChordError::UnknownQuality(s.to_string()))
    }
}

impl Serialize for Quality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Quality {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
