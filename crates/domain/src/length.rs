//! Tolerant feet/inches length parser.
//!
//! Three notations are accepted, checked in this order:
//!
//! | input     | form                 | inches |
//! |-----------|----------------------|--------|
//! | `12'6"`   | feet and inches      | 150    |
//! | `150"`    | inches with marker   | 150    |
//! | `36`      | bare integer inches  | 36     |
//!
//! Either side of a feet-and-inches expression may be empty (`12'`, `'6"`).
//! Only the text before the second `'` counts as inches, so `12'6''` is 150
//! and anything after that marker is ignored.
//! Whitespace around the numbers is ignored. Signs are accepted as the
//! integer parser accepts them; the parser does not reject zero or negative
//! lengths.

use panel_order_shared_kernel::{Inches, LengthComponent, LengthParseError};

pub const FEET_MARKER: char = '\'';
pub const INCHES_MARKER: char = '"';

/// Resolves a length expression into whole inches.
///
/// # Errors
/// Returns [`LengthParseError::InvalidNumber`] naming the failing component
/// and substring, or [`LengthParseError::OutOfRange`] when the combined value
/// does not fit.
pub fn parse_length(input: &str) -> Result<Inches, LengthParseError> {
    let normalized = input.trim().to_lowercase();

    if normalized.contains(FEET_MARKER) {
        let mut parts = normalized.split(FEET_MARKER);
        let feet_part = parts.next().unwrap_or_default();
        let inch_part = parts.next().unwrap_or_default();
        let feet = parse_optional(feet_part, LengthComponent::Feet)?;
        let inch_part = strip_inches_marker(inch_part.trim());
        let inches = parse_optional(inch_part, LengthComponent::Inches)?;
        return Inches::from_feet_and_inches(feet, inches)
            .ok_or(LengthParseError::OutOfRange { input: normalized.clone() });
    }

    let inch_part = if normalized.contains(INCHES_MARKER) {
        strip_inches_marker(&normalized)
    } else {
        normalized.as_str()
    };
    parse_required(inch_part, LengthComponent::Inches).map(Inches::new)
}

/// Renders inches as `<feet>' <inches>"`.
pub fn format_feet_inches(length: Inches) -> String {
    format!("{length:#}")
}

fn strip_inches_marker(s: &str) -> &str {
    s.strip_suffix(INCHES_MARKER).unwrap_or(s).trim()
}

fn parse_optional(s: &str, component: LengthComponent) -> Result<i64, LengthParseError> {
    let s = s.trim();
    if s.is_empty() { Ok(0) } else { parse_required(s, component) }
}

fn parse_required(s: &str, component: LengthComponent) -> Result<i64, LengthParseError> {
    let s = s.trim();
    s.parse::<i64>().map_err(|source| LengthParseError::InvalidNumber {
        component,
        input: s.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inches(s: &str) -> i64 {
        parse_length(s).expect("valid length").value()
    }

    #[test]
    fn feet_and_inches() {
        assert_eq!(inches("12'6\""), 150);
        assert_eq!(inches("12' 6\""), 150);
        assert_eq!(inches("  12 ' 6 \"  "), 150);
        assert_eq!(inches("12'6"), 150);
    }

    #[test]
    fn either_side_may_be_empty() {
        assert_eq!(inches("12'"), 144);
        assert_eq!(inches("'6\""), 6);
        assert_eq!(inches("'"), 0);
        assert_eq!(inches("10'\""), 120);
    }

    #[test]
    fn inches_with_marker() {
        assert_eq!(inches("150\""), 150);
        assert_eq!(inches("150 \""), 150);
    }

    #[test]
    fn bare_integer() {
        assert_eq!(inches("36"), 36);
        assert_eq!(inches(" 36 "), 36);
        assert_eq!(inches("+36"), 36);
    }

    #[test]
    fn signed_values_are_not_rejected() {
        assert_eq!(inches("-6"), -6);
        assert_eq!(inches("0'0\""), 0);
    }

    #[test]
    fn feet_failure_names_the_feet_side() {
        let err = parse_length("ab'6\"").unwrap_err();
        assert_eq!(err.component(), Some(LengthComponent::Feet));
        assert!(err.to_string().starts_with("invalid feet 'ab'"));
    }

    #[test]
    fn inches_failure_names_the_inches_side() {
        let err = parse_length("12'x\"").unwrap_err();
        assert_eq!(err.component(), Some(LengthComponent::Inches));
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn text_after_a_second_feet_marker_is_ignored() {
        assert_eq!(inches("12'6''"), 150);
        assert_eq!(inches("12''"), 144);
        assert_eq!(inches("1'2'3"), 14);
        assert_eq!(inches("5' 3 \"'"), 63);
    }

    #[test]
    fn bad_inches_before_a_second_marker_still_fail() {
        let err = parse_length("1'x'3").unwrap_err();
        assert_eq!(err.component(), Some(LengthComponent::Inches));
    }

    #[test]
    fn marker_alone_is_an_error() {
        assert!(parse_length("\"").is_err());
        assert!(parse_length("").is_err());
        assert!(parse_length("twelve").is_err());
    }

    #[test]
    fn overflowing_feet_are_out_of_range() {
        let err = parse_length(&format!("{}'", i64::MAX)).unwrap_err();
        assert!(matches!(err, LengthParseError::OutOfRange { .. }));
    }

    #[test]
    fn formats_feet_and_inches() {
        assert_eq!(format_feet_inches(Inches::new(150)), "12' 6\"");
        assert_eq!(format_feet_inches(Inches::new(120)), "10' 0\"");
        assert_eq!(format_feet_inches(Inches::new(5)), "0' 5\"");
    }
}
