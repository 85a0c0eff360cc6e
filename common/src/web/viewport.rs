//! # Viewport Model
//!
//! Simulated browser window dimensions for a single page render.
//!
//! The accepted syntax is `<positive-integer>x<positive-integer>`
//! (e.g. `360x640`); anything else is rejected before a browser is
//! launched.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Window dimensions in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewportError {
    #[error("invalid viewport format: {0}. Use format: 360x640")]
    Malformed(String),
}

impl FromStr for Viewport {
    type Err = ViewportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ViewportError::Malformed(s.to_owned());

        let (width, height) = s.split_once('x').ok_or_else(malformed)?;
        let width = parse_dimension(width).ok_or_else(malformed)?;
        let height = parse_dimension(height).ok_or_else(malformed)?;

        Ok(Self { width, height })
    }
}

/// Digits only, no sign or whitespace, and non-zero.
fn parse_dimension(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|&v| v > 0)
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_viewports() {
        assert_eq!(
            Viewport::from_str("360x640"),
            Ok(Viewport {
                width: 360,
                height: 640
            })
        );
        assert_eq!(
            Viewport::from_str("1280x800"),
            Ok(Viewport {
                width: 1280,
                height: 800
            })
        );
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "360", "360x", "x640", "360X640", "360x640x1", "axb"] {
            assert!(Viewport::from_str(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn rejects_signs_whitespace_and_zero() {
        for input in ["+360x640", "360x-640", " 360x640", "360x 640", "0x640", "360x0"] {
            assert!(Viewport::from_str(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn display_round_trips() {
        let viewport = Viewport::from_str("768x1024").unwrap();
        assert_eq!(viewport.to_string(), "768x1024");
    }
}
