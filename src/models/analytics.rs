use super::defect::SeverityTier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_defects: usize,
    pub open_defects: usize,
    pub critical_defects: usize,
    pub recurrence_rate: f64,
    pub avg_resolution_time: f64,
    pub missing_required_fields_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceEntry {
    #[serde(rename = "type")]
    pub defect_type: String,
    pub count: u64,
}

/// Per-tier counters shared by the trend and heatmap views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl TierCounts {
    pub fn bump(&mut self, tier: SeverityTier) {
        match tier {
            SeverityTier::Critical => self.critical += 1,
            SeverityTier::High => self.high += 1,
            SeverityTier::Medium => self.medium += 1,
            SeverityTier::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityTrendPoint {
    pub month: String, // "YYYY-MM"
    #[serde(flatten)]
    pub counts: TierCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub component: String,
    #[serde(flatten)]
    pub counts: TierCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSummary {
    pub release: String,
    pub total: usize,
    pub open: usize,
    pub closed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQuality {
    pub missing_component: usize,
    pub missing_owner: usize,
    pub missing_description: usize,
    pub total_records: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub kpis: Kpis,
    pub recurrence_analysis: Vec<RecurrenceEntry>,
    pub severity_trends: Vec<SeverityTrendPoint>,
    pub component_severity_heatmap: Vec<HeatmapRow>,
    pub release_calendar: Vec<ReleaseSummary>,
    pub data_quality: DataQuality,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectList {
    pub defects: Vec<super::defect::Defect>,
    pub total: usize,
}
