use crate::models::analytics::{HeatmapRow, TierCounts};
use crate::models::defect::Defect;
use std::collections::HashMap;

pub const TOP_COMPONENTS: usize = 10;
pub const UNKNOWN_COMPONENT: &str = "Unknown";

/// Component × severity-tier counts over raw component names, busiest ten first.
pub fn analyze_component_severity(defects: &[Defect]) -> Vec<HeatmapRow> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<HeatmapRow> = Vec::new();

    for d in defects {
        let component = d
            .component
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNKNOWN_COMPONENT);
        let slot = *positions.entry(component).or_insert_with(|| {
            rows.push(HeatmapRow {
                component: component.to_string(),
                counts: TierCounts::default(),
            });
            rows.len() - 1
        });
        if let Some(tier) = d.severity_tier() {
            rows[slot].counts.bump(tier);
        }
    }

    rows.sort_by(|a, b| b.counts.total().cmp(&a.counts.total()));
    rows.truncate(TOP_COMPONENTS);
    rows
}
