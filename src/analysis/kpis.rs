use crate::models::analytics::Kpis;
use crate::models::defect::{Defect, SeverityTier};

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `numerator / denominator * 100`, or 0 when the denominator is empty.
pub fn percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64 * 100.0
}

pub fn compute_kpis(defects: &[Defect]) -> Kpis {
    let total = defects.len();
    let open = defects.iter().filter(|d| d.status_class().is_active()).count();
    let critical = defects
        .iter()
        .filter(|d| d.severity_tier() == Some(SeverityTier::Critical))
        .count();
    let recurring = defects.iter().filter(|d| d.recurrence_count > 1).count();

    let resolution_days: Vec<f64> = defects.iter().filter_map(Defect::resolution_days).collect();
    let avg_resolution_time = if resolution_days.is_empty() {
        0.0
    } else {
        resolution_days.iter().sum::<f64>() / resolution_days.len() as f64
    };

    // A record missing both fields counts twice against a denominator of two fields per record.
    let missing_component = defects.iter().filter(|d| d.is_missing_component()).count();
    let missing_owner = defects.iter().filter(|d| d.is_missing_owner()).count();

    Kpis {
        total_defects: total,
        open_defects: open,
        critical_defects: critical,
        recurrence_rate: round_to(percentage(recurring, total), 2),
        avg_resolution_time: round_to(avg_resolution_time, 1),
        missing_required_fields_pct: round_to(
            percentage(missing_component + missing_owner, total * 2),
            2,
        ),
    }
}
