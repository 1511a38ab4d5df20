//! # Chord Symbol Parser
//!
//! Turns a chord symbol such as `"Cm7"`, `"G7/B"` or `"C#maj7b5"` into a
//! [`Chord`].
//!
//! ## Grammar
//! ```text
//! chord   := root quality? ("/" bass)?
//! root    := letter accidental?
//! bass    := letter accidental?
//! quality := any raw token or alias of the quality taxonomy
//! ```
//!
//! ## Parse Steps
//! 1. **Root** - a note letter (any case) plus an optional `#`/`♯`/`b`/`♭`.
//!    No letter at position 0 fails with `MalformedRoot`.
//! 2. **Bass** - the text after the last `/` must be a pitch spelling.
//!    If it is not, the whole remainder is tried as a quality (so `C6/9`
//!    is a six-nine chord); if that fails too, `MalformedBass`.
//! 3. **Quality** - the region between root and bass must equal an alias
//!    or raw token *exactly*. There is no prefix matching: `"7sus4"` is
//!    [`Quality::SevenSusFour`], never `"7"` with `"sus4"` left over.
//!    An empty region is [`Quality::Major`]; an unrecognized region is
//!    [`Quality::Unknown`] and does not fail the parse.
//!
//! ## Example
//! ```rust
//! use chordex::{parse, NoteName, Quality};
//!
//! let chord = parse("G7/B")?;
//! assert_eq!(chord.root().note, NoteName::G);
//! assert_eq!(chord.quality(), Quality::Seven);
//! assert_eq!(chord.bass().map(|b| b.note), Some(NoteName::B));
//! # Ok::<(), chordex::ChordError>(())
//! ```

use crate::chord::Chord;
use crate::error::{ChordError, Result};
use crate::pitch::PitchClass;
use crate::quality::Quality;

/// The three regions of a chord symbol
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SymbolParts<'a> {
    pub root: PitchClass,
    pub quality_text: &'a str,
    pub bass: Option<PitchClass>,
}

/// Split a symbol into root, quality text and bass.
pub(crate) fn split_symbol(input: &str) -> Result<SymbolParts<'_>> {
    let (root, rest) = PitchClass::split_prefix(input).ok_or_else(|| ChordError::MalformedRoot {
        input: input.to_string(),
    })?;

    let Some(slash) = rest.rfind('/') else {
        return Ok(SymbolParts {
            root,
            quality_text: rest,
            bass: None,
        });
    };

    let bass_text = &rest[slash + 1..];
    match bass_text.parse::<PitchClass>() {
        Ok(bass) => Ok(SymbolParts {
            root,
            quality_text: &rest[..slash],
            bass: Some(bass),
        }),
        // Slash belongs to the quality ("6/9")
        Err(_) if Quality::from_token(rest).is_some() => Ok(SymbolParts {
            root,
            quality_text: rest,
            bass: None,
        }),
        Err(_) => Err(ChordError::MalformedBass {
            input: input.to_string(),
            bass: bass_text.to_string(),
        }),
    }
}

/// Resolve a quality region. Never fails.
pub fn resolve_quality(region: &str) -> Quality {
    if region.is_empty() {
        return Quality::Major;
    }
    match Quality::from_token(region) {
        Some(quality) => quality,
        None => {
            tracing::debug!(region, "unrecognized chord quality");
            Quality::Unknown
        }
    }
}

/// Parse a chord symbol.
///
/// # Errors
/// `MalformedRoot` when the symbol does not start with a note letter,
/// `MalformedBass` when a `/` suffix is not a note spelling.
pub fn parse(name: &str) -> Result<Chord> {
    parse_with_instrument(name, None)
}

pub(crate) fn parse_with_instrument(name: &str, instrument: Option<String>) -> Result<Chord> {
    let parts = split_symbol(name)?;
    let quality = resolve_quality(parts.quality_text);
    Ok(Chord::from_parts(
        name.to_string(),
        parts.root,
        quality,
        parts.bass,
        instrument,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{Accidental, NoteName};

    fn pitch(s: &str) -> PitchClass {
        s.parse().unwrap()
    }

    #[test]
    fn test_root_only() {
        let chord = parse("C").unwrap();
        assert_eq!(chord.root(), pitch("C"));
        assert_eq!(chord.quality(), Quality::Major);
        assert_eq!(chord.bass(), None);
    }

    #[test]
    fn test_longest_token_wins() {
        assert_eq!(parse("C7sus4").unwrap().quality(), Quality::SevenSusFour);
        assert_eq!(parse("C7b5").unwrap().quality(), Quality::SevenFlatFive);
        assert_eq!(parse("C7#9").unwrap().quality(), Quality::SevenSharpNine);
        assert_eq!(parse("C7").unwrap().quality(), Quality::Seven);
        assert_eq!(parse("Cm7b5").unwrap().quality(), Quality::MinorSevenFlatFive);
    }

    #[test]
    fn test_root_accidental_then_quality() {
        let chord = parse("C#maj7b5").unwrap();
        assert_eq!(chord.root(), PitchClass::new(NoteName::C, Accidental::Sharp));
        assert_eq!(chord.quality(), Quality::MajorSevenFlatFive);

        // Flat root directly followed by a flat-five quality
        let chord = parse("Bb7b5").unwrap();
        assert_eq!(chord.root(), pitch("Bb"));
        assert_eq!(chord.quality(), Quality::SevenFlatFive);
    }

    #[test]
    fn test_slash_chord() {
        let chord = parse("G7/B").unwrap();
        assert_eq!(chord.root(), pitch("G"));
        assert_eq!(chord.quality(), Quality::Seven);
        assert_eq!(chord.bass(), Some(pitch("B")));

        let chord = parse("C/E").unwrap();
        assert_eq!(chord.quality(), Quality::Major);
        assert_eq!(chord.bass(), Some(pitch("E")));
    }

    #[test]
    fn test_six_nine_slash_is_quality() {
        let chord = parse("C6/9").unwrap();
        assert_eq!(chord.quality(), Quality::SixNine);
        assert_eq!(chord.bass(), None);

        let chord = parse("C69").unwrap();
        assert_eq!(chord.quality(), Quality::SixNine);

        let chord = parse("C6/9/E").unwrap();
        assert_eq!(chord.quality(), Quality::SixNine);
        assert_eq!(chord.bass(), Some(pitch("E")));
    }

    #[test]
    fn test_unknown_quality_tolerated() {
        let chord = parse("Cxyz").unwrap();
        assert_eq!(chord.root(), pitch("C"));
        assert_eq!(chord.quality(), Quality::Unknown);
        assert_eq!(chord.bass(), None);

        let chord = parse("Cxyz/G").unwrap();
        assert_eq!(chord.quality(), Quality::Unknown);
        assert_eq!(chord.bass(), Some(pitch("G")));
    }

    #[test]
    fn test_case_sensitive_quality() {
        assert_eq!(parse("CMAJ7").unwrap().quality(), Quality::Unknown);
        assert_eq!(parse("CMaj7").unwrap().quality(), Quality::MajorSeven); // declared alias
    }

    #[test]
    fn test_malformed_root() {
        assert!(matches!(parse("7"), Err(ChordError::MalformedRoot { .. })));
        assert!(matches!(parse(""), Err(ChordError::MalformedRoot { .. })));
        assert!(matches!(parse("Hm"), Err(ChordError::MalformedRoot { .. })));
        assert!(matches!(parse(" C"), Err(ChordError::MalformedRoot { .. })));
    }

    #[test]
    fn test_malformed_bass() {
        assert_eq!(
            parse("G7/"),
            Err(ChordError::MalformedBass {
                input: "G7/".to_string(),
                bass: "".to_string(),
            })
        );
        assert!(matches!(parse("G7/X"), Err(ChordError::MalformedBass { .. })));
        assert!(matches!(parse("C/Em"), Err(ChordError::MalformedBass { .. })));
    }

    #[test]
    fn test_name_kept_verbatim() {
        let chord = parse("e♭m7").unwrap();
        assert_eq!(chord.name(), "e♭m7");
        assert_eq!(chord.root(), pitch("Eb"));
        assert_eq!(chord.quality(), Quality::MinorSeven);
    }

    #[test]
    fn test_split_symbol_regions() {
        let parts = split_symbol("Abm7/Gb").unwrap();
        assert_eq!(parts.root, pitch("Ab"));
        assert_eq!(parts.quality_text, "m7");
        assert_eq!(parts.bass, Some(pitch("Gb")));
    }
}
