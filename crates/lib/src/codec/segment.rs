//! Path segment classification.
//!
//! A path key splits into ordered segments, each addressing either a mapping
//! entry by name or a sequence element by position. Classification is purely
//! textual and context-free: the same segment text always classifies the same
//! way, regardless of what surrounds it. This is what keeps flatten and
//! unflatten from disagreeing about the structure a key describes.
//!
//! Sequence positions use a wrapped marker form, `_<digits>_` (e.g. `_3_`),
//! rather than a bare digit string. A bare-digit segment would be ambiguous
//! with a mapping key that happens to be all digits; the wrapped form removes
//! that ambiguity. An all-digit mapping key like `"2024"` is therefore an
//! ordinary [`Segment::Key`].

use std::fmt;

use thiserror::Error;

/// Error type for segment parsing failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    /// The segment is shaped like an index marker but the number inside it
    /// cannot be represented.
    #[error("index marker '{marker}' is out of range")]
    IndexOutOfRange { marker: String },
}

/// One segment of a path key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Addresses a mapping entry by name.
    Key(String),
    /// Addresses a sequence element by position, written as `_<index>_`.
    Index(usize),
}

impl Segment {
    /// Classifies and parses a single segment.
    ///
    /// Text matching `_<digits>_` is a sequence index; anything else is a
    /// mapping key. A marker whose digits overflow `usize` is an error rather
    /// than a key: silently demoting it to a key would make classification
    /// depend on the platform's pointer width.
    pub fn parse(text: &str) -> Result<Segment, SegmentError> {
        if let Some(digits) = index_marker_digits(text) {
            return match digits.parse::<usize>() {
                Ok(index) => Ok(Segment::Index(index)),
                Err(_) => Err(SegmentError::IndexOutOfRange {
                    marker: text.to_string(),
                }),
            };
        }
        Ok(Segment::Key(text.to_string()))
    }

    /// Returns true if this segment addresses a sequence element
    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(name) => write!(f, "{name}"),
            Segment::Index(index) => write!(f, "_{index}_"),
        }
    }
}

/// Returns the digit run inside a `_<digits>_` marker, or `None` if the text
/// is not marker-shaped.
fn index_marker_digits(text: &str) -> Option<&str> {
    let digits = text.strip_prefix('_')?.strip_suffix('_')?;
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}
