//! # chordex
//!
//! Chord symbol parsing, classification and matching.
//!
//! ## Pipeline
//! ```text
//! "G7/B" ──parse──▶ Chord { root: G, quality: Seven, bass: Some(B) }
//!                     ├──▶ matching / search over a corpus
//!                     └──▶ format (accessible, short, symbol, alt-symbol)
//! ```
//!
//! ## Modules
//! - `quality` - closed, ordered quality taxonomy with tokens, names and groups
//! - `pitch` - root and bass spellings
//! - `parser` - symbol grammar
//! - `chord` - the parsed chord record
//! - `matching` - corpus filtering
//! - `format` - display styles
//! - `config` - YAML settings
//!
//! ## Example
//! ```rust
//! use chordex::{format, parse, search, DisplayStyle, Quality};
//!
//! let chord = parse("Cm7")?;
//! assert_eq!(chord.quality(), Quality::MinorSeven);
//! assert_eq!(format(&chord, DisplayStyle::Symbol), "Cm⁷");
//!
//! let corpus = vec![parse("Cmaj7")?, chord, parse("G7")?];
//! assert_eq!(search(&corpus, "Cm7").len(), 1);
//! assert!(search(&corpus, "not a chord").is_empty());
//! # Ok::<(), chordex::ChordError>(())
//! ```

pub mod chord;
pub mod config;
pub mod error;
pub mod format;
pub mod matching;
pub mod parser;
pub mod pitch;
pub mod quality;

pub use chord::Chord;
pub use config::Settings;
pub use error::{ChordError, Result};
pub use format::{format, DisplayStyle};
pub use matching::{matching, search, ChordQuery, PitchMatching};
pub use parser::parse;
pub use pitch::{Accidental, NoteName, PitchClass};
pub use quality::{Quality, QualityGroup, QualityNames};
