//! # Chord Entity
//!
//! The immutable record produced by the parser: the original symbol text,
//! the root, the quality, an optional bass note and an opaque instrument
//! context supplied by the caller.
//!
//! A [`Chord`] can only be built by parsing. Deserialization goes through
//! the parser too: a stored chord is re-parsed from its `name`, and the
//! other stored fields are treated as derived data.

use crate::error::{ChordError, Result};
use crate::format::{format, DisplayStyle};
use crate::parser::{self, split_symbol};
use crate::pitch::PitchClass;
use crate::quality::Quality;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed chord symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredChord")]
pub struct Chord {
    name: String,
    root: PitchClass,
    quality: Quality,
    #[serde(skip_serializing_if = "Option::is_none")]
    bass: Option<PitchClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instrument: Option<String>,
}

/// Fields read back when deserializing a chord
#[derive(Deserialize)]
struct StoredChord {
    name: String,
    #[serde(default)]
    instrument: Option<String>,
}

impl TryFrom<StoredChord> for Chord {
    type Error = ChordError;

    fn try_from(stored: StoredChord) -> Result<Self> {
        parser::parse_with_instrument(&stored.name, stored.instrument)
    }
}

impl Chord {
    pub(crate) fn from_parts(
        name: String,
        root: PitchClass,
        quality: Quality,
        bass: Option<PitchClass>,
        instrument: Option<String>,
    ) -> Self {
        Self {
            name,
            root,
            quality,
            bass,
            instrument,
        }
    }

    /// Parse a chord symbol. Same as [`crate::parse`].
    pub fn parse(name: &str) -> Result<Self> {
        parser::parse(name)
    }

    /// Parse a chord symbol and attach an instrument context ("guitar", "ukulele"...).
    pub fn parse_for(name: &str, instrument: impl Into<String>) -> Result<Self> {
        parser::parse_with_instrument(name, Some(instrument.into()))
    }

    /// The symbol exactly as it was given to the parser
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn bass(&self) -> Option<PitchClass> {
        self.bass
    }

    pub fn instrument(&self) -> Option<&str> {
        self.instrument.as_deref()
    }

    pub fn display(&self, style: DisplayStyle) -> String {
        format(self, style)
    }

    /// Transpose root and bass by `semitones`, respelling with sharps or flats.
    ///
    /// The quality text is carried over verbatim, so an unrecognized quality
    /// stays unrecognized and an alias keeps its spelling.
    ///
    /// ```
    /// use chordex::Chord;
    ///
    /// let chord = Chord::parse("Am7/G")?;
    /// let up = chord.transposed(2, false)?;
    /// assert_eq!(up.name(), "Bm7/A");
    /// # Ok::<(), chordex::ChordError>(())
    /// ```
    pub fn transposed(&self, semitones: i32, prefer_flats: bool) -> Result<Self> {
        let parts = split_symbol(&self.name)?;
        let mut name = parts.root.transposed(semitones, prefer_flats).to_string();
        name.push_str(parts.quality_text);
        if let Some(bass) = parts.bass {
            name.push('/');
            name.push_str(&bass.transposed(semitones, prefer_flats).to_string());
        }
        parser::parse_with_instrument(&name, self.instrument.clone())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self, DisplayStyle::Short))
    }
}

impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instrument_context() {
        let chord = Chord::parse_for("D", "ukulele").unwrap();
        assert_eq!(chord.instrument(), Some("ukulele"));
        assert_eq!(Chord::parse("D").unwrap().instrument(), None);
    }

    #[test]
    fn test_from_str() {
        let chord: Chord = "Fmaj7".parse().unwrap();
        assert_eq!(chord.quality(), Quality::MajorSeven);
        assert!("x".parse::<Chord>().is_err());
    }

    #[test]
    fn test_display_is_short_form() {
        let chord = Chord::parse("C♯min7/G♯").unwrap();
        assert_eq!(chord.to_string(), "C#m7/G#");
    }

    #[test]
    fn test_transposed() {
        let chord = Chord::parse("G7/B").unwrap();
        let down = chord.transposed(-2, true).unwrap();
        assert_eq!(down.name(), "F7/A");
        assert_eq!(down.quality(), Quality::Seven);

        let flat = Chord::parse("C").unwrap().transposed(3, true).unwrap();
        assert_eq!(flat.name(), "Eb");

        let unknown = Chord::parse("Cxyz").unwrap().transposed(7, false).unwrap();
        assert_eq!(unknown.name(), "Gxyz");
        assert_eq!(unknown.quality(), Quality::Unknown);
    }

    #[test]
    fn test_transposed_extreme_intervals() {
        let chord = Chord::parse("B7/D#").unwrap();
        assert_eq!(chord.transposed(i32::MAX, false).unwrap().name(), "F#7/A#");
        assert_eq!(chord.transposed(i32::MIN, true).unwrap().name(), "Eb7/G");
    }

    #[test]
    fn test_transposed_keeps_instrument() {
        let chord = Chord::parse_for("A", "guitar").unwrap();
        assert_eq!(chord.transposed(1, false).unwrap().instrument(), Some("guitar"));
    }

    #[test]
    fn test_serialize_uses_raw_tokens() {
        let chord = Chord::parse("C6/9/E").unwrap();
        let json = serde_json::to_value(&chord).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "C6/9/E",
                "root": "C",
                "quality": "69",
                "bass": "E",
            })
        );
    }

    #[test]
    fn test_deserialize_reparses_name() {
        let chord: Chord =
            serde_json::from_str(r#"{"name":"Bbm7","root":"Bb","quality":"m7","instrument":"piano"}"#)
                .unwrap();
        assert_eq!(chord, Chord::parse_for("Bbm7", "piano").unwrap());

        let bad = serde_json::from_str::<Chord>(r#"{"name":"7"}"#);
        assert!(bad.is_err());
    }
}
