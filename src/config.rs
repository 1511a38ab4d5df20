//! # Settings
//!
//! Caller-facing options loaded from a YAML document:
//!
//! ```yaml
//! pitch-matching: enharmonic   # or: spelling
//! display-style: symbol        # accessible | short | symbol | alt-symbol
//! prefer-flats: true
//! ```
//!
//! Every key is optional; missing keys take the defaults
//! (enharmonic matching, short style, sharps).

use crate::chord::Chord;
use crate::error::{ChordError, Result};
use crate::format::{format, DisplayStyle};
use crate::matching::{ChordQuery, PitchMatching};
use serde::Deserialize;

/// Raw settings as read from YAML
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawSettings {
    pitch_matching: Option<String>,
    display_style: Option<String>,
    prefer_flats: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    pub pitch_matching: PitchMatching,
    pub display_style: DisplayStyle,
    pub prefer_flats: bool,
}

impl Settings {
    /// Parse settings from YAML. An empty document gives the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let raw: RawSettings = if content.trim().is_empty() {
            RawSettings::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| ChordError::Config(e.to_string()))?
        };

        let mut settings = Settings::default();
        if let Some(mode) = raw.pitch_matching {
            settings.pitch_matching = mode.parse::<PitchMatching>().map_err(ChordError::Config)?;
        }
        if let Some(style) = raw.display_style {
            settings.display_style = style.parse::<DisplayStyle>().map_err(ChordError::Config)?;
        }
        if let Some(prefer_flats) = raw.prefer_flats {
            settings.prefer_flats = prefer_flats;
        }

        tracing::debug!(?settings, "loaded settings");
        Ok(settings)
    }

    /// A query that compares pitches the configured way
    pub fn query(&self) -> ChordQuery {
        ChordQuery::new().pitch_matching(self.pitch_matching)
    }

    pub fn format(&self, chord: &Chord) -> String {
        format(chord, self.display_style)
    }

    /// Transpose using the configured sharp/flat preference
    pub fn transpose(&self, chord: &Chord, semitones: i32) -> Result<Chord> {
        chord.transposed(semitones, self.prefer_flats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_yaml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.pitch_matching, PitchMatching::Enharmonic);
        assert_eq!(settings.display_style, DisplayStyle::Short);
        assert!(!settings.prefer_flats);
    }

    #[test]
    fn test_full_document() {
        let settings = Settings::from_yaml(
            "pitch-matching: spelling\ndisplay-style: alt-symbol\nprefer-flats: true\n",
        )
        .unwrap();
        assert_eq!(settings.pitch_matching, PitchMatching::Spelling);
        assert_eq!(settings.display_style, DisplayStyle::AltSymbol);
        assert!(settings.prefer_flats);
    }

    #[test]
    fn test_partial_document() {
        let settings = Settings::from_yaml("display-style: accessible").unwrap();
        assert_eq!(settings.display_style, DisplayStyle::Accessible);
        assert_eq!(settings.pitch_matching, PitchMatching::Enharmonic);
    }

    #[test]
    fn test_invalid_values() {
        let result = Settings::from_yaml("display-style: fancy");
        match result {
            Err(ChordError::Config(message)) => assert!(message.contains("display-style")),
            other => panic!("expected config error, got {:?}", other),
        }
        assert!(matches!(
            Settings::from_yaml("pitch-matching: fuzzy"),
            Err(ChordError::Config(_))
        ));
        assert!(matches!(
            Settings::from_yaml("prefer-flats: [1, 2]"),
            Err(ChordError::Config(_))
        ));
    }

    #[test]
    fn test_settings_drive_query_and_format() {
        let settings = Settings::from_yaml("pitch-matching: spelling\ndisplay-style: symbol").unwrap();
        let corpus = vec![parse("C#m7").unwrap(), parse("Dbm7").unwrap()];
        let found = settings.query().root("Db".parse().unwrap()).apply(&corpus);
        assert_eq!(found.len(), 1);
        assert_eq!(settings.format(found[0]), "D♭m⁷");
    }

    #[test]
    fn test_settings_transpose() {
        let settings = Settings::from_yaml("prefer-flats: true").unwrap();
        let chord = parse("F7").unwrap();
        assert_eq!(settings.transpose(&chord, 5).unwrap().name(), "Bb7");
    }
}
