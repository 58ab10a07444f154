use crate::analysis::{aggregate, generator::generate_defects};
use crate::models::analytics::{AnalyticsReport, DefectList};
use crate::models::defect::Defect;
use crate::server::AppState;
use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Deserialize;

/// Optional `/defects` query filters. Empty values are treated as unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefectFilters {
    pub severity: Option<String>,
    pub status: Option<String>,
    pub component: Option<String>,
    pub release: Option<String>,
}

impl DefectFilters {
    /// severity/status: case-insensitive exact; component: case-insensitive
    /// substring; release: exact. Unknown values simply match nothing.
    pub fn matches(&self, defect: &Defect) -> bool {
        if let Some(severity) = active(&self.severity) {
            if !defect.severity.eq_ignore_ascii_case(severity) {
                return false;
            }
        }
        if let Some(status) = active(&self.status) {
            if !defect.status.eq_ignore_ascii_case(status) {
                return false;
            }
        }
        if let Some(component) = active(&self.component) {
            let needle = component.to_lowercase();
            match defect.component.as_deref() {
                Some(c) if c.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }
        if let Some(release) = active(&self.release) {
            if defect.release.as_deref() != Some(release) {
                return false;
            }
        }
        true
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub async fn get_defects(
    State(state): State<AppState>,
    Query(filters): Query<DefectFilters>,
) -> Json<DefectList> {
    let mut rng = state.settings.dataset_rng();
    Json(get_defects_internal(
        &filters,
        state.settings.sample_size,
        &mut rng,
        Utc::now(),
    ))
}

pub fn get_defects_internal<R: Rng + ?Sized>(
    filters: &DefectFilters,
    sample_size: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> DefectList {
    let generated = generate_defects(sample_size, rng, now);
    let generated_count = generated.len();
    let defects: Vec<Defect> = generated.into_iter().filter(|d| filters.matches(d)).collect();

    log::debug!(
        "Listing {} of {} generated defects (filters: {:?})",
        defects.len(),
        generated_count,
        filters
    );

    DefectList {
        total: defects.len(),
        defects,
    }
}

pub async fn get_defect_analytics(State(state): State<AppState>) -> Json<AnalyticsReport> {
    let mut rng = state.settings.dataset_rng();
    Json(get_defect_analytics_internal(
        state.settings.sample_size,
        &mut rng,
        Utc::now(),
    ))
}

pub fn get_defect_analytics_internal<R: Rng + ?Sized>(
    sample_size: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> AnalyticsReport {
    let defects = generate_defects(sample_size, rng, now);
    let report = aggregate(&defects);
    log::debug!(
        "Aggregated {} defects ({} open, {} critical)",
        report.kpis.total_defects,
        report.kpis.open_defects,
        report.kpis.critical_defects
    );
    report
}
