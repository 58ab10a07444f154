use crate::models::defect::Defect;
use chrono::{TimeZone, Utc};

/// A fully populated record; tests blank out whichever field they exercise.
pub fn defect(id: &str, severity: &str, status: &str) -> Defect {
    let mut d = defect_at(id, severity, 2024, 2, 14);
    d.status = status.to_string();
    d
}

pub fn defect_at(id: &str, severity: &str, year: i32, month: u32, day: u32) -> Defect {
    Defect {
        id: id.to_string(),
        title: "Memory Leak".to_string(),
        component: Some("Payment Gateway".to_string()),
        severity: severity.to_string(),
        status: "Open".to_string(),
        owner: Some("alice.brown@company.com".to_string()),
        release: Some("v1.3.0".to_string()),
        created_at: Utc.with_ymd_and_hms(year, month, day, 9, 30, 0).unwrap(),
        resolved_at: None,
        description: Some("Issue with payment_api".to_string()),
        recurrence_count: 1,
    }
}
