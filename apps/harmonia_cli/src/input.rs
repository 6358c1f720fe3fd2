use anyhow::Context;
use harmonia::chart::Chart;
use std::fs;
use std::path::Path;

/// Read a chart written by the position resolver as JSON.
pub fn read_chart(path: &Path) -> anyhow::Result<Chart> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chart {}", path.display()))?;
    let chart: Chart = serde_json::from_str(&text)
        .with_context(|| format!("Invalid chart JSON in {}", path.display()))?;
    log::debug!(
        "Loaded chart {} with {} bodies",
        chart.label.as_deref().unwrap_or("<unlabeled>"),
        chart.bodies().len()
    );
    Ok(chart)
}
