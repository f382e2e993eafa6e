// crates/cli/src/presentation.rs
use std::{fs, io::Write, path::Path};

use panel_order_domain::{OrderSummary, PanelGroup, Report};
use panel_order_shared_kernel::{FeetInches, InfraResult, InfrastructureError, Inches};
use serde::Serialize;

use crate::config::Config;
use crate::options::{OutputFormat, OutputMode};

/// Renders a summary in the configured format and mode.
///
/// # Errors
/// Returns [`InfrastructureError::SerializationError`] if the structured
/// formats fail to serialize.
pub fn render(summary: &OrderSummary, config: &Config) -> InfraResult<String> {
    let report = Report::from_summary(summary);
    match config.format {
        OutputFormat::Text => Ok(render_text(&report, config.mode)),
        OutputFormat::Md => Ok(render_markdown(&report, config.mode)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&OrderDocument::new(summary, &report, config.mode))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&OrderDocument::new(summary, &report, config.mode))?),
    }
}

/// Writes rendered output to the configured file, or stdout.
///
/// # Errors
/// Returns [`InfrastructureError::FileWrite`] or an output error from stdout.
pub fn emit(rendered: &str, output_path: Option<&Path>) -> InfraResult<()> {
    match output_path {
        Some(path) => fs::write(path, rendered)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn render_text(report: &Report, mode: OutputMode) -> String {
    if report.is_empty_order() {
        return report.render_plain();
    }
    match mode {
        OutputMode::Full => report.render_plain(),
        OutputMode::Panels => report.panel_text(),
        OutputMode::TotalOnly => report.total_line().map(|t| format!("{t}\n")).unwrap_or_default(),
    }
}

fn render_markdown(report: &Report, mode: OutputMode) -> String {
    if report.is_empty_order() {
        return report.render_markdown();
    }
    match mode {
        OutputMode::Full => report.render_markdown(),
        OutputMode::Panels => format!("```\n{}```\n", report.panel_text()),
        OutputMode::TotalOnly => report
            .total_line()
            .map(|t| format!("***{t}***\n"))
            .unwrap_or_default(),
    }
}

/// Structured output shape for JSON and YAML.
#[derive(Debug, Serialize)]
struct OrderDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    panels: Option<Vec<PanelEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<LengthEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    panel_count: Option<u64>,
}

#[derive(Debug, Serialize)]
struct PanelEntry {
    quantity: u64,
    #[serde(flatten)]
    length: LengthEntry,
}

#[derive(Debug, Serialize)]
struct LengthEntry {
    inches: i64,
    feet_inches: FeetInches,
    display: String,
}

impl From<Inches> for LengthEntry {
    fn from(length: Inches) -> Self {
        Self { inches: length.value(), feet_inches: length.to_feet_inches(), display: format!("{length:#}") }
    }
}

impl From<&PanelGroup> for PanelEntry {
    fn from(group: &PanelGroup) -> Self {
        Self { quantity: group.quantity.value(), length: group.length.into() }
    }
}

impl OrderDocument {
    fn new(summary: &OrderSummary, report: &Report, mode: OutputMode) -> Self {
        if report.is_empty_order() {
            return Self {
                notice: report.segments().first().map(|s| s.text.clone()),
                panels: Some(Vec::new()),
                total: Some(Inches::zero().into()),
                panel_count: Some(0),
            };
        }
        let panels = || Some(summary.groups.iter().map(PanelEntry::from).collect());
        let total = || Some(LengthEntry::from(summary.total));
        match mode {
            OutputMode::Full => Self {
                notice: None,
                panels: panels(),
                total: total(),
                panel_count: Some(summary.panel_count()),
            },
            OutputMode::Panels => Self { notice: None, panels: panels(), total: None, panel_count: None },
            OutputMode::TotalOnly => Self {
                notice: None,
                panels: None,
                total: total(),
                panel_count: Some(summary.panel_count()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ORDER: &str = "5 @ 12'6\"\n2 @ 150\"\n3 @ 10'\n";

    fn rendered(format: OutputFormat, mode: OutputMode) -> String {
        let summary = panel_order_domain::summarize(SAMPLE_ORDER).unwrap();
        let config = Config { format, mode, ..Config::default() };
        render(&summary, &config).unwrap()
    }

    #[test]
    fn text_modes() {
        assert!(rendered(OutputFormat::Text, OutputMode::Full).starts_with("Sorted Panel List"));
        assert_eq!(rendered(OutputFormat::Text, OutputMode::Panels), "7 @ 12' 6\"\n3 @ 10' 0\"\n");
        assert_eq!(
            rendered(OutputFormat::Text, OutputMode::TotalOnly),
            "Total Order Length: 117' 6\" (1410 inches)\n"
        );
    }

    #[test]
    fn markdown_panels_are_fenced() {
        assert_eq!(
            rendered(OutputFormat::Md, OutputMode::Panels),
            "```\n7 @ 12' 6\"\n3 @ 10' 0\"\n```\n"
        );
    }

    #[test]
    fn json_full_document() {
        let value: serde_json::Value =
            serde_json::from_str(&rendered(OutputFormat::Json, OutputMode::Full)).unwrap();
        assert_eq!(value["panels"][0]["quantity"], 7);
        assert_eq!(value["panels"][0]["inches"], 150);
        assert_eq!(value["panels"][0]["display"], "12' 6\"");
        assert_eq!(value["panels"][1]["feet_inches"]["feet"], 10);
        assert_eq!(value["total"]["inches"], 1410);
        assert_eq!(value["panel_count"], 10);
        assert!(value.get("notice").is_none());
    }

    #[test]
    fn json_panels_mode_drops_total() {
        let value: serde_json::Value =
            serde_json::from_str(&rendered(OutputFormat::Json, OutputMode::Panels)).unwrap();
        assert!(value.get("total").is_none());
        assert_eq!(value["panels"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn yaml_total_only() {
        let yaml = rendered(OutputFormat::Yaml, OutputMode::TotalOnly);
        assert!(yaml.contains("inches: 1410"));
        assert!(!yaml.contains("panels:"));
    }

    #[test]
    fn empty_order_carries_notice_in_every_mode() {
        let summary = panel_order_domain::summarize("  \n").unwrap();
        for mode in [OutputMode::Full, OutputMode::Panels, OutputMode::TotalOnly] {
            let config = Config { mode, ..Config::default() };
            assert_eq!(render(&summary, &config).unwrap(), "No valid panels entered.\n");
        }
        let config = Config { format: OutputFormat::Json, ..Config::default() };
        let value: serde_json::Value = serde_json::from_str(&render(&summary, &config).unwrap()).unwrap();
        assert_eq!(value["notice"], "No valid panels entered.");
        assert_eq!(value["panel_count"], 0);
    }

    #[test]
    fn emit_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.txt");
        emit("7 @ 12' 6\"\n", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "7 @ 12' 6\"\n");
    }

    #[test]
    fn emit_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("summary.txt");
        let err = emit("x", Some(&path)).unwrap_err();
        assert!(matches!(err, InfrastructureError::FileWrite { .. }));
    }
}
