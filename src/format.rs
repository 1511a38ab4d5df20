//! Display formatting for chords.
//!
//! Renders a [`Chord`] in one of four styles taken from the quality's
//! display names: root, then the quality form, then `/bass` if present.
//! The plain-text styles spell accidentals as `#`/`b`; the symbol styles
//! use `♯`/`♭`. The accessible style spells them out and separates the
//! quality with a space ("C sharp minor seven").

use crate::chord::Chord;
use crate::pitch::PitchClass;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayStyle {
    /// Spoken phrase for screen readers
    Accessible,
    /// Plain text ("Cm7")
    #[default]
    Short,
    /// Superscripts ("Cm⁷")
    Symbol,
    /// Alternate symbols ("Cø⁷", "CΔ⁷")
    AltSymbol,
}

impl FromStr for DisplayStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "accessible" => Ok(DisplayStyle::Accessible),
            "short" => Ok(DisplayStyle::Short),
            "symbol" => Ok(DisplayStyle::Symbol),
            "alt-symbol" => Ok(DisplayStyle::AltSymbol),
            other => Err(format!(
                "display-style must be one of accessible, short, symbol, alt-symbol (got {:?})",
                other
            )),
        }
    }
}

fn spell(pitch: PitchClass, style: DisplayStyle) -> String {
    match style {
        DisplayStyle::Accessible => pitch.spoken(),
        DisplayStyle::Short => pitch.to_string(),
        DisplayStyle::Symbol | DisplayStyle::AltSymbol => pitch.symbol(),
    }
}

/// Render a chord in the given style.
///
/// ```
/// use chordex::{format, parse, DisplayStyle};
///
/// let chord = parse("Bm7b5")?;
/// assert_eq!(format(&chord, DisplayStyle::Accessible), "B minor seven flat five");
/// assert_eq!(format(&chord, DisplayStyle::Short), "Bm7b5");
/// assert_eq!(format(&chord, DisplayStyle::Symbol), "Bm⁷♭⁵");
/// assert_eq!(format(&chord, DisplayStyle::AltSymbol), "Bø⁷");
/// # Ok::<(), chordex::ChordError>(())
/// ```
pub fn format(chord: &Chord, style: DisplayStyle) -> String {
    let names = chord.quality().names();
    let mut out = spell(chord.root(), style);

    match style {
        DisplayStyle::Accessible => {
            out.push(' ');
            out.push_str(names.accessible);
        }
        DisplayStyle::Short => out.push_str(names.short),
        DisplayStyle::Symbol => out.push_str(names.symbol),
        DisplayStyle::AltSymbol => out.push_str(names.alt_symbol),
    }

    if let Some(bass) = chord.bass() {
        out.push('/');
        out.push_str(&spell(bass, style));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_major_has_empty_short_forms() {
        let chord = parse("C").unwrap();
        assert_eq!(format(&chord, DisplayStyle::Short), "C");
        assert_eq!(format(&chord, DisplayStyle::Symbol), "C");
        assert_eq!(format(&chord, DisplayStyle::AltSymbol), "C");
        assert_eq!(format(&chord, DisplayStyle::Accessible), "C major");
    }

    #[test]
    fn test_bass_suffix() {
        let chord = parse("F#7/A#").unwrap();
        assert_eq!(format(&chord, DisplayStyle::Short), "F#7/A#");
        assert_eq!(format(&chord, DisplayStyle::Symbol), "F♯⁷/A♯");
        assert_eq!(format(&chord, DisplayStyle::Accessible), "F sharp seven/A sharp");
    }

    #[test]
    fn test_alias_renders_canonically() {
        let chord = parse("Ebmin7").unwrap();
        assert_eq!(format(&chord, DisplayStyle::Short), "Ebm7");
        assert_eq!(format(&chord, DisplayStyle::AltSymbol), "E♭−⁷");
    }

    #[test]
    fn test_six_nine() {
        let chord = parse("G69").unwrap();
        assert_eq!(format(&chord, DisplayStyle::Short), "G6/9");
    }

    #[test]
    fn test_unknown_quality() {
        let chord = parse("Cxyz").unwrap();
        assert_eq!(format(&chord, DisplayStyle::Short), "C?");
        assert_eq!(format(&chord, DisplayStyle::Accessible), "C unknown");
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("alt-symbol".parse::<DisplayStyle>(), Ok(DisplayStyle::AltSymbol));
        assert!("fancy".parse::<DisplayStyle>().is_err());
    }
}
