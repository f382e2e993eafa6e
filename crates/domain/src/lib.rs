#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod length;
pub mod order;
pub mod report;

pub use analytics::{Aggregator, OrderSummary, PanelGroup};
pub use length::{format_feet_inches, parse_length};
pub use order::{OrderLine, parse_order, parse_order_line};
pub use report::{Report, Segment, SegmentKind, SegmentStyle};

use panel_order_shared_kernel::DomainResult;

/// Parses, groups and sorts a raw multi-line order.
///
/// # Errors
/// Returns the first [`DomainError`](panel_order_shared_kernel::DomainError)
/// found in the input; no partial summary is produced.
pub fn summarize(raw: &str) -> DomainResult<OrderSummary> {
    let lines = parse_order(raw)?;
    Aggregator::aggregate(&lines)
}

/// Full pipeline from raw order text to a rendered [`Report`].
///
/// # Errors
/// See [`summarize`].
pub fn aggregate(raw: &str) -> DomainResult<Report> {
    summarize(raw).map(|summary| Report::from_summary(&summary))
}
