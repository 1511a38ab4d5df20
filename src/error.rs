//! # Error Types
//!
//! This module defines all error types for chord symbol handling.
//!
//! ## Error Types
//! - `MalformedRoot` - The symbol does not start with a note letter (A-G)
//! - `MalformedBass` - A `/` suffix is present but is not a note spelling
//! - `UnknownQuality` - A quality token was required but not recognized
//! - `Config` - Invalid YAML settings
//!
//! An unrecognized quality inside a chord symbol is *not* an error: the
//! parser still builds the chord with [`Quality::Unknown`](crate::Quality::Unknown).
//! `UnknownQuality` only comes out of strict conversions such as
//! `"xyz".parse::<Quality>()` or deserializing a stored quality token.
//!
//! ## Usage
//! ```rust
//! use chordex::{parse, ChordError};
//!
//! match parse("H7") {
//!     Ok(chord) => println!("root {}", chord.root()),
//!     Err(ChordError::MalformedRoot { input }) => eprintln!("no root in {:?}", input),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChordError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordError {
    /// The symbol has no valid root spelling at position 0.
    ///
    /// # Example
    /// ```
    /// # use chordex::ChordError;
    /// let err = ChordError::MalformedRoot { input: "7".to_string() };
    /// assert_eq!(err.to_string(), "Malformed root in chord symbol \"7\"");
    /// ```
    #[error("Malformed root in chord symbol {input:?}")]
    MalformedRoot { input: String },

    /// The text after `/` is not a note spelling.
    ///
    /// # Example
    /// ```
    /// # use chordex::ChordError;
    /// let err = ChordError::MalformedBass {
    ///     input: "G7/X".to_string(),
    ///     bass: "X".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Malformed bass \"X\" in chord symbol \"G7/X\"");
    /// ```
    #[error("Malformed bass {bass:?} in chord symbol {input:?}")]
    MalformedBass { input: String, bass: String },

    /// A quality token that matches neither an alias nor a raw token.
    #[error("Unknown chord quality: {0:?}")]
    UnknownQuality(String),

    /// Invalid settings document.
    ///
    /// # Example
    /// ```
    /// # use chordex::ChordError;
    /// let err = ChordError::Config("display-style must be one of accessible, short, symbol, alt-symbol".to_string());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid settings: display-style must be one of accessible, short, symbol, alt-symbol"
    /// );
    /// ```
    #[error("Invalid settings: {0}")]
    Config(String),
}
