use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text report
    #[default]
    Text,
    /// Markdown with emphasis and a code block for panel lines
    Md,
    Json,
    Yaml,
}

/// Which parts of the report are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Header, panel lines and total
    #[default]
    Full,
    /// Panel lines only, ready to paste into an order form
    Panels,
    /// Total line only
    TotalOnly,
}
