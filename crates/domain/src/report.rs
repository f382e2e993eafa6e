//! Rendered order report.
//!
//! A [`Report`] is an ordered list of styled [`Segment`]s: a header, one
//! segment per panel group and a closing total. Front ends either print the
//! plain text, emit Markdown, or pick individual segments (for example only
//! the panel lines when copying the order elsewhere).

use std::fmt;

use panel_order_shared_kernel::Inches;
use serde::Serialize;

use crate::analytics::{OrderSummary, PanelGroup};

pub const HEADER: &str = "Sorted Panel List (Longest to Shortest):";
pub const EMPTY_ORDER: &str = "No valid panels entered.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Notice,
    Header,
    Panel,
    Total,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SegmentStyle {
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
}

impl SegmentStyle {
    const PLAIN: Self = Self { bold: false, italic: false, monospace: false };
    const HEADER: Self = Self { bold: true, italic: false, monospace: false };
    const PANEL: Self = Self { bold: false, italic: false, monospace: true };
    const TOTAL: Self = Self { bold: true, italic: true, monospace: false };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
    pub style: SegmentStyle,
}

impl Segment {
    fn new(kind: SegmentKind, text: impl Into<String>, style: SegmentStyle) -> Self {
        Self { kind, text: text.into(), style }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    segments: Vec<Segment>,
}

impl Report {
    pub fn from_summary(summary: &OrderSummary) -> Self {
        if summary.is_empty() {
            return Self {
                segments: vec![Segment::new(SegmentKind::Notice, EMPTY_ORDER, SegmentStyle::PLAIN)],
            };
        }

        let mut segments = Vec::with_capacity(summary.groups.len() + 2);
        segments.push(Segment::new(SegmentKind::Header, HEADER, SegmentStyle::HEADER));
        segments.extend(
            summary
                .groups
                .iter()
                .map(|g| Segment::new(SegmentKind::Panel, panel_line(g), SegmentStyle::PANEL)),
        );
        segments.push(Segment::new(SegmentKind::Total, total_line(summary.total), SegmentStyle::TOTAL));
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// `true` when the report only carries the "no panels" notice.
    pub fn is_empty_order(&self) -> bool {
        self.segments.iter().all(|s| s.kind == SegmentKind::Notice)
    }

    pub fn panel_lines(&self) -> impl Iterator<Item = &str> {
        self.of_kind(SegmentKind::Panel)
    }

    pub fn total_line(&self) -> Option<&str> {
        self.of_kind(SegmentKind::Total).next()
    }

    /// Panel lines only, newline terminated; what gets copied out of the report.
    pub fn panel_text(&self) -> String {
        self.panel_lines().fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment.kind {
                SegmentKind::Notice | SegmentKind::Panel => {
                    out.push_str(&segment.text);
                    out.push('\n');
                }
                SegmentKind::Header => {
                    out.push_str(&segment.text);
                    out.push_str("\n\n");
                }
                SegmentKind::Total => {
                    out.push('\n');
                    out.push_str(&segment.text);
                    out.push('\n');
                }
            }
        }
        out
    }

    /// Markdown rendering: styles map to emphasis, panel lines to a code block.
    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        let mut in_code = false;
        for segment in &self.segments {
            if segment.style.monospace != in_code {
                out.push_str("```\n");
                in_code = segment.style.monospace;
                if !in_code {
                    out.push('\n');
                }
            }
            if in_code {
                out.push_str(&segment.text);
                out.push('\n');
            } else {
                out.push_str(&emphasize(&segment.text, segment.style));
                out.push_str("\n\n");
            }
        }
        if in_code {
            out.push_str("```\n");
        }
        out
    }

    fn of_kind(&self, kind: SegmentKind) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(move |s| s.kind == kind)
            .map(|s| s.text.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_plain())
    }
}

fn panel_line(group: &PanelGroup) -> String {
    format!("{} @ {:#}", group.quantity, group.length)
}

fn total_line(total: Inches) -> String {
    format!("Total Order Length: {total:#} ({total} inches)")
}

fn emphasize(text: &str, style: SegmentStyle) -> String {
    match (style.bold, style.italic) {
        (true, true) => format!("***{text}***"),
        (true, false) => format!("**{text}**"),
        (false, true) => format!("*{text}*"),
        (false, false) => text.to_string(),
    }
}
