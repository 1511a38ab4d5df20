//! # Pitch Classes
//!
//! Root and bass notes of a chord symbol: a natural letter (A-G) plus an
//! optional sharp or flat.
//!
//! ## Spelling vs. Class
//! A [`PitchClass`] keeps the spelling it was written with (`C#` stays
//! `C#`, `Db` stays `Db`). Derived equality compares spellings; use
//! [`PitchClass::same_class`] or [`PitchClass::semitone`] to compare the
//! underlying class (C# and Db are both semitone 1).
//!
//! ## Grammar
//! ```text
//! pitch      := letter accidental?
//! letter     := [A-Ga-g]
//! accidental := "#" | "♯" | "b" | "♭"
//! ```

use crate::error::ChordError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Note names A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoteName {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    /// Case-insensitive letter lookup.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }

    /// Semitone offset from C
    fn semitone(self) -> i8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }
}

/// Accidentals: none, sharp, flat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp, // # or ♯
    Flat,  // b or ♭
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' | '♯' => Some(Accidental::Sharp),
            'b' | '♭' => Some(Accidental::Flat),
            _ => None,
        }
    }

    fn offset(self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    /// ASCII marker (`#`, `b`), empty for natural
    pub fn ascii(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    /// Unicode marker (`♯`, `♭`), empty for natural
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "♯",
            Accidental::Flat => "♭",
        }
    }

    /// Spoken form used by the accessible display style
    pub fn spoken(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => " sharp",
            Accidental::Flat => " flat",
        }
    }
}

/// A spelled pitch class, used for both chord roots and bass notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PitchClass {
    pub note: NoteName,
    pub accidental: Accidental,
}

impl PitchClass {
    pub const fn new(note: NoteName, accidental: Accidental) -> Self {
        Self { note, accidental }
    }

    pub const fn natural(note: NoteName) -> Self {
        Self::new(note, Accidental::Natural)
    }

    /// Read a pitch spelling from the start of `s`.
    ///
    /// Returns the pitch and the unconsumed remainder, or `None` when `s`
    /// does not start with a note letter.
    ///
    /// ```
    /// use chordex::{Accidental, NoteName, PitchClass};
    ///
    /// let (pitch, rest) = PitchClass::split_prefix("C#m7").unwrap();
    /// assert_eq!(pitch, PitchClass::new(NoteName::C, Accidental::Sharp));
    /// assert_eq!(rest, "m7");
    /// assert!(PitchClass::split_prefix("7").is_none());
    /// ```
    pub fn split_prefix(s: &str) -> Option<(Self, &str)> {
        let first = s.chars().next()?;
        let note = NoteName::from_char(first)?;
        let after_letter = first.len_utf8();

        let rest = &s[after_letter..];
        match rest.chars().next().and_then(|c| Accidental::from_char(c).map(|a| (a, c))) {
            Some((accidental, c)) => Some((Self::new(note, accidental), &rest[c.len_utf8()..])),
            None => Some((Self::natural(note), rest)),
        }
    }

    /// Underlying class as a semitone above C (0-11)
    pub fn semitone(&self) -> u8 {
        (self.note.semitone() + self.accidental.offset()).rem_euclid(12) as u8
    }

    /// True when both spellings denote the same class (C# and Db, E# and F).
    pub fn same_class(&self, other: &PitchClass) -> bool {
        self.semitone() == other.semitone()
    }

    /// Build the conventional spelling of a semitone (0 = C).
    pub fn from_semitone(semitone: i32, prefer_flats: bool) -> Self {
        use Accidental::{Flat, Natural, Sharp};
        use NoteName::*;

        let (note, accidental) = match semitone.rem_euclid(12) {
            0 => (C, Natural),
            1 => if prefer_flats { (D, Flat) } else { (C, Sharp) },
            2 => (D, Natural),
            3 => if prefer_flats { (E, Flat) } else { (D, Sharp) },
            4 => (E, Natural),
            5 => (F, Natural),
            6 => if prefer_flats { (G, Flat) } else { (F, Sharp) },
            7 => (G, Natural),
            8 => if prefer_flats { (A, Flat) } else { (G, Sharp) },
            9 => (A, Natural),
            10 => if prefer_flats { (B, Flat) } else { (A, Sharp) },
            _ => (B, Natural),
        };
        Self::new(note, accidental)
    }

    /// Move by `semitones` (negative is down) and respell.
    pub fn transposed(&self, semitones: i32, prefer_flats: bool) -> Self {
        Self::from_semitone(self.semitone() as i32 + semitones.rem_euclid(12), prefer_flats)
    }

    /// Spelling with `♯`/`♭`
    pub fn symbol(&self) -> String {
        format!("{}{}", self.note.as_char(), self.accidental.symbol())
    }

    /// Spelling for screen readers ("C sharp", "B flat")
    pub fn spoken(&self) -> String {
        format!("{}{}", self.note.as_char(), self.accidental.spoken())
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note.as_char(), self.accidental.ascii())
    }
}

impl FromStr for PitchClass {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match PitchClass::split_prefix(s) {
            Some((pitch, "")) => Ok(pitch),
            _ => Err(ChordError::MalformedRoot {
                input: s.to_string(),
            }),
        }
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PitchClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
