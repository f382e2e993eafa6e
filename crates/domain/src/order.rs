// crates/domain/src/order.rs
use log::{debug, info};
use panel_order_shared_kernel::{DomainError, DomainResult, Inches, Quantity};

use crate::length::parse_length;

pub const QUANTITY_DELIMITER: char = '@';

/// A single `quantity @ length` entry before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    /// 1-based position in the raw input.
    pub line_number: usize,
    pub quantity: Quantity,
    pub length: Inches,
}

/// Parses every non-blank line of `raw`, stopping at the first bad one.
///
/// # Errors
/// Returns the [`DomainError`] for the first malformed line.
pub fn parse_order(raw: &str) -> DomainResult<Vec<OrderLine>> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_order_line(idx + 1, line))
        .collect::<DomainResult<Vec<_>>>()
        .inspect_err(|err| info!("order rejected: {err}"))
}

/// Parses one `quantity @ length` line.
///
/// # Errors
/// - [`DomainError::InvalidFormat`] unless the line has exactly one `@`.
/// - [`DomainError::InvalidQuantity`] unless the quantity is a positive integer.
/// - [`DomainError::InvalidLength`] when the length expression does not parse.
pub fn parse_order_line(line_number: usize, line: &str) -> DomainResult<OrderLine> {
    let line = line.trim();
    let mut parts = line.split(QUANTITY_DELIMITER);
    let (Some(quantity_str), Some(length_str), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(DomainError::InvalidFormat { line_number, line: line.to_string() });
    };

    let quantity_str = quantity_str.trim();
    let quantity = parse_quantity(quantity_str).ok_or_else(|| DomainError::InvalidQuantity {
        line_number,
        quantity: quantity_str.to_string(),
    })?;

    let length_str = length_str.trim();
    let length = parse_length(length_str).map_err(|source| DomainError::InvalidLength {
        line_number,
        length: length_str.to_string(),
        source,
    })?;

    debug!("line {line_number}: {quantity} @ {length} in");
    Ok(OrderLine { line_number, quantity, length })
}

fn parse_quantity(s: &str) -> Option<Quantity> {
    let value = s.parse::<i64>().ok()?;
    u64::try_from(value).ok().filter(|v| *v > 0).map(Quantity::new)
}

#[cfg(test)]
mod tests {
    use panel_order_shared_kernel::LengthComponent;

    use super::*;

    #[test]
    fn parses_quantity_and_length() {
        let line = parse_order_line(1, " 5 @ 12'6\" ").unwrap();
        assert_eq!(line.quantity, 5u64);
        assert_eq!(line.length, 150);
        assert_eq!(line.line_number, 1);
    }

    #[test]
    fn missing_delimiter_is_a_format_error() {
        let err = parse_order_line(3, "bad-line").unwrap_err();
        assert_eq!(err, DomainError::InvalidFormat { line_number: 3, line: "bad-line".to_string() });
    }

    #[test]
    fn extra_delimiter_is_a_format_error() {
        let err = parse_order_line(1, "5 @ 10' @ 2").unwrap_err();
        assert!(matches!(err, DomainError::InvalidFormat { .. }));
    }

    #[test]
    fn quantity_must_be_positive() {
        for bad in ["0", "-3", "two", "", "1.5"] {
            let err = parse_order_line(1, &format!("{bad} @ 10'")).unwrap_err();
            assert_eq!(
                err,
                DomainError::InvalidQuantity { line_number: 1, quantity: bad.to_string() },
                "quantity {bad:?}"
            );
        }
    }

    #[test]
    fn quantity_accepts_explicit_plus_sign() {
        assert_eq!(parse_order_line(1, "+4 @ 36").unwrap().quantity, 4u64);
    }

    #[test]
    fn length_error_wraps_parser_detail() {
        let err = parse_order_line(2, "5 @ x'6\"").unwrap_err();
        match err {
            DomainError::InvalidLength { line_number, length, source } => {
                assert_eq!(line_number, 2);
                assert_eq!(length, "x'6\"");
                assert_eq!(source.component(), Some(LengthComponent::Feet));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_lines_are_skipped_but_keep_numbering() {
        let lines = parse_order("\n  \n2 @ 10'\n\n3 @ 36\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line_number, 3);
        assert_eq!(lines[1].line_number, 5);
    }

    #[test]
    fn first_bad_line_aborts_the_batch() {
        let err = parse_order("5 @ 12'6\"\nbad-line\n2 @ 10'\nworse").unwrap_err();
        assert_eq!(err, DomainError::InvalidFormat { line_number: 2, line: "bad-line".to_string() });
    }

    #[test]
    fn crlf_input_is_tolerated() {
        let lines = parse_order("1 @ 10'\r\n2 @ 5\"\r\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].length, 5);
    }
}
