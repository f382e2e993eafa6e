// crates/shared-kernel/tests/error_context.rs
use std::io;

use panel_order_shared_kernel::{DomainError, ErrorContext, PanelOrderError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(PanelOrderError::from)
        .context("reading order")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading order"));
    assert!(display.contains("Output error:"));
    assert!(err.as_domain().is_none());
}

#[test]
fn domain_error_survives_context_chain() {
    let result: Result<(), DomainError> =
        Err(DomainError::InvalidFormat { line_number: 2, line: "bad-line".to_string() });
    let err = result.context("processing order").unwrap_err();

    let domain = err.as_domain().expect("domain error at the root");
    assert_eq!(domain.line_number(), Some(2));
    assert!(err.to_string().contains("bad-line"));
}
