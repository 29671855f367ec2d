use crate::analysis::AnalysisResult;
use crate::geometry::ViewportPoint;

/// Entries below this share are left out of the panel.
pub const MIN_DISPLAY_PERCENT: f64 = 1.0;
/// Offset of the panel's top-left corner from the selection origin, both axes.
pub const PANEL_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub name: String,
    pub swatch: String,
    pub percent: f64,
    pub label: String,
}

/// Everything a host needs to draw one result panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub position: ViewportPoint,
    pub rows: Vec<ResultRow>,
}

pub fn build_panel(result: &AnalysisResult, anchor: ViewportPoint) -> ResultPanel {
    let mut entries = result
        .entries()
        .filter(|entry| entry.percent >= MIN_DISPLAY_PERCENT)
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.percent.total_cmp(&a.percent));

    let rows = entries
        .into_iter()
        .map(|entry| ResultRow {
            name: entry.name.clone(),
            swatch: entry.swatch.clone(),
            percent: entry.percent,
            label: format!("{}: {}%", entry.name, format_percent(entry.percent)),
        })
        .collect();

    ResultPanel {
        position: ViewportPoint::new(anchor.x + PANEL_MARGIN, anchor.y + PANEL_MARGIN),
        rows,
    }
}

/// Shortest decimal form with at most two fractional digits: `40`, `12.5`, `33.33`.
pub fn format_percent(percent: f64) -> String {
    let mut text = format!("{percent:.2}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}
