use crate::models::analytics::ReleaseSummary;
use crate::models::defect::Defect;
use std::collections::BTreeMap;

/// Open/closed split per scheduled release, sorted lexicographically by release.
/// Anything not open or in progress counts as closed.
pub fn analyze_release_calendar(defects: &[Defect]) -> Vec<ReleaseSummary> {
    let mut releases: BTreeMap<&str, ReleaseSummary> = BTreeMap::new();

    for d in defects {
        let Some(release) = d.scheduled_release() else {
            continue;
        };
        let summary = releases.entry(release).or_insert_with(|| ReleaseSummary {
            release: release.to_string(),
            ..ReleaseSummary::default()
        });
        summary.total += 1;
        if d.status_class().is_active() {
            summary.open += 1;
        } else {
            summary.closed += 1;
        }
    }

    releases.into_values().collect()
}
