//! Coordinate cleanup and validation.
//!
//! Users tend to paste ECEF values the way survey sheets print them, with
//! thousands separators (`-5,069,012.421`) or stray spaces. This module strips
//! those and checks that what remains is a number.
//!
//! The cleaned *text* is kept, not a reformatted float, so the value sent to
//! the conversion service is exactly what the user typed minus separators.

use std::fmt;
use std::io::{self, Write};

use crate::error::{GeodesyError, Result};

/// Message written when an entered coordinate is not a number.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

/// One of the three ECEF axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in prompt order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(label)
    }
}

/// Remove every comma and space from a raw coordinate.
///
/// Characters are removed wherever they appear, not only between digit groups.
/// There is no error path; use [`is_valid_coordinate`] on the result.
///
/// # Examples
///
/// ```
/// use xyzelev::coordinate::clean_coordinate;
///
/// assert_eq!(clean_coordinate("-5,069,012.421"), "-5069012.421");
/// assert_eq!(clean_coordinate(" 3 852 223.063 "), "3852223.063");
/// assert_eq!(clean_coordinate("abc"), "abc");
/// ```
pub fn clean_coordinate(raw: &str) -> String {
    raw.chars().filter(|c| *c != ',' && *c != ' ').collect()
}

/// Check whether a value parses as a floating-point number.
///
/// Only parseability is checked, there is no range validation. Surrounding
/// whitespace other than spaces (tabs, `\r`) is not ignored: `"\t5"` is
/// rejected, since the cleaned text is sent to the conversion service as-is.
pub fn is_valid_coordinate(value: &str) -> bool {
    value.parse::<f64>().is_ok()
}

/// Validate a possibly not-yet-entered coordinate.
///
/// * `None` means nothing has been entered yet: returns `false` silently.
/// * `Some` value that parses: returns `true`.
/// * `Some` value that does not parse: writes [`INVALID_INPUT_MESSAGE`] to
///   `diagnostics` once and returns `false`.
pub fn check_coordinate<W: Write>(value: Option<&str>, diagnostics: &mut W) -> io::Result<bool> {
    match value {
        None => Ok(false),
        Some(v) if is_valid_coordinate(v) => Ok(true),
        Some(_) => {
            writeln!(diagnostics, "{}", INVALID_INPUT_MESSAGE)?;
            Ok(false)
        }
    }
}

/// A validated ECEF coordinate triple, in meters.
///
/// Each component holds the cleaned text of a value that is known to parse
/// as `f64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcefCoordinates {
    x: String,
    y: String,
    z: String,
}

impl EcefCoordinates {
    /// Clean and validate three raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeodesyError::InvalidCoordinate`] naming the first axis whose
    /// cleaned value is not a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use xyzelev::EcefCoordinates;
    ///
    /// let coords = EcefCoordinates::parse("-217,687.297", "-5,069,012.421", "3,852,223.063")?;
    /// assert_eq!(coords.x(), "-217687.297");
    /// # Ok::<(), xyzelev::GeodesyError>(())
    /// ```
    pub fn parse(x: &str, y: &str, z: &str) -> Result<Self> {
        Ok(Self {
            x: validated(Axis::X, x)?,
            y: validated(Axis::Y, y)?,
            z: validated(Axis::Z, z)?,
        })
    }

    /// Build from values that already went through [`clean_coordinate`] and
    /// passed [`is_valid_coordinate`].
    pub(crate) fn from_validated(x: String, y: String, z: String) -> Self {
        Self { x, y, z }
    }

    /// Cleaned X value.
    pub fn x(&self) -> &str {
        &self.x
    }

    /// Cleaned Y value.
    pub fn y(&self) -> &str {
        &self.y
    }

    /// Cleaned Z value.
    pub fn z(&self) -> &str {
        &self.z
    }
}

fn validated(axis: Axis, raw: &str) -> Result<String> {
    let cleaned = clean_coordinate(raw);
    if is_valid_coordinate(&cleaned) {
        Ok(cleaned)
    } else {
        Err(GeodesyError::InvalidCoordinate {
            axis,
            input: raw.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_commas_and_spaces_anywhere() {
        assert_eq!(clean_coordinate("-217,687.297"), "-217687.297");
        assert_eq!(clean_coordinate("1 2,3 4"), "1234");
        assert_eq!(clean_coordinate(",,  ,"), "");
        assert_eq!(clean_coordinate("12.5"), "12.5");
    }

    #[test]
    fn test_clean_keeps_other_whitespace() {
        // Only ',' and ' ' are separators; a tab makes the value invalid.
        assert_eq!(clean_coordinate("1\t2"), "1\t2");
        assert!(!is_valid_coordinate(&clean_coordinate("1\t2")));
    }

    #[test]
    fn test_clean_then_validate_matches_manual_strip() {
        let inputs = [
            "-5,069,012.421",
            " 42 ",
            "1,2,3,.5",
            "abc,def",
            "1e3",
            "- 4",
            "",
            "1.2.3",
        ];
        for raw in inputs {
            let manual = raw.replace(',', "").replace(' ', "");
            assert_eq!(
                is_valid_coordinate(&clean_coordinate(raw)),
                is_valid_coordinate(&manual),
                "mismatch for {raw:?}"
            );
        }
    }

    #[test]
    fn test_is_valid_coordinate() {
        assert!(is_valid_coordinate("-217687.297"));
        assert!(is_valid_coordinate("0"));
        assert!(is_valid_coordinate("3852223"));
        assert!(is_valid_coordinate("1e6"));
        assert!(!is_valid_coordinate(""));
        assert!(!is_valid_coordinate("abc"));
        assert!(!is_valid_coordinate("12..5"));
        assert!(!is_valid_coordinate("1,000"));
        assert!(!is_valid_coordinate("\t5"));
        assert!(!is_valid_coordinate("5\r"));
    }

    #[test]
    fn test_check_coordinate_not_entered_is_silent() {
        let mut diagnostics = Vec::new();
        assert!(!check_coordinate(None, &mut diagnostics).unwrap());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_check_coordinate_valid_is_silent() {
        let mut diagnostics = Vec::new();
        assert!(check_coordinate(Some("-217687.297"), &mut diagnostics).unwrap());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_check_coordinate_invalid_emits_once() {
        let mut diagnostics = Vec::new();
        assert!(!check_coordinate(Some("twelve"), &mut diagnostics).unwrap());
        assert_eq!(String::from_utf8(diagnostics).unwrap(), "Invalid input\n");
    }

    #[test]
    fn test_check_coordinate_sentinel_like_text_is_just_invalid() {
        // Text that looks like a placeholder is ordinary input.
        let mut diagnostics = Vec::new();
        assert!(!check_coordinate(Some("BLANKCOORD"), &mut diagnostics).unwrap());
        assert_eq!(String::from_utf8(diagnostics).unwrap(), "Invalid input\n");
    }

    #[test]
    fn test_parse_cleans_all_axes() {
        let coords =
            EcefCoordinates::parse("-217,687.297", "-5,069,012.421", "3,852,223.063").unwrap();
        assert_eq!(coords.x(), "-217687.297");
        assert_eq!(coords.y(), "-5069012.421");
        assert_eq!(coords.z(), "3852223.063");
    }

    #[test]
    fn test_parse_reports_first_bad_axis() {
        let err = EcefCoordinates::parse("1", "two", "three").unwrap_err();
        match err {
            GeodesyError::InvalidCoordinate { axis, input } => {
                assert_eq!(axis, Axis::Y);
                assert_eq!(input, "two");
            }
            other => panic!("Expected InvalidCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn test_axis_display() {
        let labels: Vec<String> = Axis::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(labels, vec!["X", "Y", "Z"]);
    }
}
