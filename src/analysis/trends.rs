use crate::models::analytics::{SeverityTrendPoint, TierCounts};
use crate::models::defect::Defect;
use std::collections::BTreeMap;

/// Monthly tier counts, oldest month first. Every month with a record gets a
/// row; severities outside the four tiers add nothing to it.
pub fn analyze_severity_trends(defects: &[Defect]) -> Vec<SeverityTrendPoint> {
    let mut months: BTreeMap<String, TierCounts> = BTreeMap::new();

    for d in defects {
        let month = d.created_at.format("%Y-%m").to_string();
        let counts = months.entry(month).or_default();
        if let Some(tier) = d.severity_tier() {
            counts.bump(tier);
        }
    }

    months
        .into_iter()
        .map(|(month, counts)| SeverityTrendPoint { month, counts })
        .collect()
}
