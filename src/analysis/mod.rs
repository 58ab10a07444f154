pub mod generator;
pub mod heatmap;
pub mod kpis;
pub mod quality;
pub mod recurrence;
pub mod releases;
pub mod trends;

#[cfg(test)]
pub(crate) mod test_support;

use crate::models::analytics::AnalyticsReport;
use crate::models::defect::Defect;

/// Reduce one generated dataset into every analytics view. Pure: the same
/// input always produces the same report.
pub fn aggregate(defects: &[Defect]) -> AnalyticsReport {
    AnalyticsReport {
        kpis: kpis::compute_kpis(defects),
        recurrence_analysis: recurrence::analyze_recurrence(defects),
        severity_trends: trends::analyze_severity_trends(defects),
        component_severity_heatmap: heatmap::analyze_component_severity(defects),
        release_calendar: releases::analyze_release_calendar(defects),
        data_quality: quality::assess_data_quality(defects),
    }
}
