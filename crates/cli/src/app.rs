// crates/cli/src/app.rs
use panel_order_shared_kernel::{ErrorContext, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::presentation;

/// Reads the order, builds the summary and writes it out.
///
/// # Errors
/// Propagates input, order and output failures; order failures can be
/// recovered with [`PanelOrderError::as_domain`](panel_order_shared_kernel::PanelOrderError::as_domain).
pub fn run(config: &Config) -> Result<()> {
    let source = config.source.describe();
    debug!(%source, format = ?config.format, mode = ?config.mode, "reading order");

    let raw = config.source.read_to_string()?;
    let summary = panel_order_domain::summarize(&raw)?;
    info!(groups = summary.groups.len(), total_inches = summary.total.value(), "order summarized");

    let rendered = presentation::render(&summary, config)?;
    presentation::emit(&rendered, config.output_path.as_deref())
        .with_context(|| format!("writing summary for {source}"))
}
