use crate::models::defect::{Defect, SeverityTier, StatusClass};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// 32 spellings of 8 logical components.
pub const COMPONENTS: [&str; 32] = [
    "Authentication Module", "auth-module", "Auth System", "authentication_service",
    "Payment Gateway", "payment-processor", "PaymentGateway", "payment_api",
    "User Dashboard", "dashboard", "user-ui", "Dashboard Component",
    "API Gateway", "api-gateway", "API_Gateway", "gateway-service",
    "Database Layer", "db-layer", "DatabaseService", "data_layer",
    "Notification System", "notifications", "NotificationService", "notify-service",
    "File Upload", "upload-module", "FileUploadService", "file_handler",
    "Search Engine", "search", "SearchService", "search-api",
];

pub const DEFECT_TYPES: [&str; 32] = [
    "Null Pointer Exception", "NullPointerException", "NPE", "null reference",
    "Memory Leak", "memory-leak", "Memory Issue", "mem leak",
    "Race Condition", "race condition", "concurrency issue", "thread safety",
    "SQL Injection", "SQLInjection", "sql-injection", "injection vulnerability",
    "Authentication Bypass", "auth bypass", "AuthBypass", "authentication failure",
    "UI Rendering Bug", "ui-bug", "rendering issue", "display problem",
    "Performance Degradation", "performance issue", "slow response", "perf-bug",
    "Data Validation Error", "validation-error", "invalid data", "validation bug",
];

pub const SEVERITIES: [&str; 12] = [
    "Critical", "critical", "CRITICAL", "High", "high", "HIGH",
    "Medium", "medium", "Med", "Low", "low", "LOW",
];

pub const STATUSES: [&str; 11] = [
    "Open", "open", "OPEN", "In Progress", "in-progress", "In-Progress",
    "Closed", "closed", "CLOSED", "Resolved", "resolved",
];

pub const OWNERS: [Option<&str>; 10] = [
    Some("john.doe@company.com"),
    Some("jane.smith@company.com"),
    Some("bob.wilson@company.com"),
    Some("alice.brown@company.com"),
    Some("charlie.davis@company.com"),
    Some("diana.miller@company.com"),
    Some("eric.taylor@company.com"),
    None,
    Some("unassigned"),
    Some(""),
];

pub const RELEASES: [Option<&str>; 11] = [
    Some("v1.2.0"),
    Some("v1.2.1"),
    Some("v1.3.0"),
    Some("v1.3.1"),
    Some("v1.4.0"),
    Some("v2.0.0"),
    Some("v2.1.0"),
    None,
    Some(""),
    Some("TBD"),
    Some("unknown"),
];

pub const WINDOW_DAYS: i64 = 180;
pub const FIRST_ID: usize = 1000;

const MISSING_FIELDS_P: f64 = 0.15;
const MISSING_COMPONENT_P: f64 = 0.30;
const DUPLICATE_P: f64 = 0.08;
const INCONSISTENT_NAMING_P: f64 = 0.25;
const NULL_DESCRIPTION_P: f64 = 0.2;
const VARIABLE_RECURRENCE_P: f64 = 0.3;

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, choices: &'a [T]) -> &'a T {
    &choices[rng.gen_range(0..choices.len())]
}

/// Inclusive day range a defect of this tier takes to resolve.
pub fn resolution_window(tier: Option<SeverityTier>) -> (i64, i64) {
    match tier {
        Some(SeverityTier::Critical) | Some(SeverityTier::High) => (1, 10),
        Some(SeverityTier::Medium) => (5, 20),
        _ => (10, 40),
    }
}

/// Synthesize `count` messy defect records, plus a `-DUP` twin for roughly 8% of them.
pub fn generate_defects<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<Defect> {
    let base_date = now - Duration::days(WINDOW_DAYS);
    let mut defects = Vec::with_capacity(count + count / 8);

    for i in 0..count {
        let missing_fields = rng.gen_bool(MISSING_FIELDS_P);
        let duplicate = rng.gen_bool(DUPLICATE_P);
        let inconsistent_naming = rng.gen_bool(INCONSISTENT_NAMING_P);

        let created_at = base_date
            + Duration::days(rng.gen_range(0..=WINDOW_DAYS))
            + Duration::hours(rng.gen_range(0..=23));

        let severity_raw = *pick(rng, &SEVERITIES);
        let (min_days, max_days) = resolution_window(SeverityTier::classify(severity_raw));
        let resolution_days = rng.gen_range(min_days..=max_days);

        let status = *pick(rng, &STATUSES);
        let resolved_at = StatusClass::classify(status)
            .is_terminal()
            .then(|| created_at + Duration::days(resolution_days));

        let title = *pick(rng, &DEFECT_TYPES);
        let drop_component = missing_fields && rng.gen_bool(MISSING_COMPONENT_P);
        let component = if drop_component {
            None
        } else {
            Some(pick(rng, &COMPONENTS).to_string())
        };
        let owner = if missing_fields {
            None
        } else {
            pick(rng, &OWNERS).map(str::to_string)
        };
        let release = pick(rng, &RELEASES).map(str::to_string);
        let description = if rng.gen_bool(NULL_DESCRIPTION_P) {
            None
        } else {
            Some(format!("Issue with {}", pick(rng, &COMPONENTS)))
        };
        let recurrence_count = if rng.gen_bool(VARIABLE_RECURRENCE_P) {
            rng.gen_range(0..=5)
        } else {
            1
        };

        let severity = if inconsistent_naming {
            severity_raw.to_uppercase()
        } else {
            severity_raw.to_string()
        };

        let defect = Defect {
            id: format!("DEF-{}", FIRST_ID + i),
            title: title.to_string(),
            component,
            severity,
            status: status.to_string(),
            owner,
            release,
            created_at,
            resolved_at,
            description,
            recurrence_count,
        };

        if duplicate {
            // resolved_at moves with created_at so the twin keeps a non-negative delay
            let shift = Duration::hours(rng.gen_range(1..=48));
            let twin = Defect {
                id: format!("{}-DUP", defect.id),
                created_at: created_at + shift,
                resolved_at: resolved_at.map(|resolved| resolved + shift),
                ..defect.clone()
            };
            defects.push(defect);
            defects.push(twin);
        } else {
            defects.push(defect);
        }
    }

    defects
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn sample(seed: u64, count: usize) -> Vec<Defect> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_defects(count, &mut rng, Utc::now())
    }

    #[test]
    fn never_returns_fewer_records_than_requested() {
        for seed in 0..20 {
            let defects = sample(seed, 200);
            let dups = defects.iter().filter(|d| d.id.ends_with("-DUP")).count();
            assert!(defects.len() >= 200);
            assert_eq!(defects.len(), 200 + dups);
        }
    }

    #[test]
    fn zero_count_yields_empty_dataset() {
        assert!(sample(7, 0).is_empty());
    }

    #[test]
    fn ids_are_unique_within_a_run() {
        let defects = sample(42, 500);
        let ids: HashSet<&str> = defects.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), defects.len());
        assert_eq!(defects[0].id, "DEF-1000");
    }

    #[test]
    fn resolved_at_tracks_terminal_status() {
        for d in sample(3, 500) {
            let lower = d.status.to_lowercase();
            let terminal = lower == "closed" || lower == "resolved";
            assert_eq!(d.resolved_at.is_some(), terminal, "{}", d.id);
            if let Some(resolved) = d.resolved_at {
                assert!(resolved >= d.created_at, "{}", d.id);
            }
        }
    }

    #[test]
    fn resolution_delay_stays_within_tier_window() {
        for d in sample(11, 500) {
            let Some(days) = d.resolution_days() else { continue };
            // the upper-cased copy classifies to the same tier as the raw draw
            let (min, max) = resolution_window(d.severity_tier());
            assert!(days >= min as f64 && days <= max as f64, "{} took {days}", d.id);
        }
    }

    #[test]
    fn created_at_falls_inside_generation_window() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(5);
        for d in generate_defects(300, &mut rng, now) {
            assert!(d.created_at >= now - Duration::days(WINDOW_DAYS));
            assert!(d.created_at <= now + Duration::hours(23 + 48));
        }
    }

    #[test]
    fn duplicates_mirror_their_source_record() {
        let defects = sample(99, 1000);
        let mut seen = 0;
        for pair in defects.windows(2) {
            if pair[1].id.ends_with("-DUP") {
                seen += 1;
                let (src, dup) = (&pair[0], &pair[1]);
                let shift = dup.created_at - src.created_at;
                assert!(shift >= Duration::hours(1) && shift <= Duration::hours(48));
                let expected = Defect {
                    id: format!("{}-DUP", src.id),
                    created_at: src.created_at + shift,
                    resolved_at: src.resolved_at.map(|r| r + shift),
                    ..src.clone()
                };
                assert_eq!(dup, &expected);
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn messy_fields_show_up_in_large_samples() {
        let defects = sample(1, 2000);
        assert!(defects.iter().any(|d| d.component.is_none()));
        assert!(defects.iter().any(|d| d.owner.is_none()));
        assert!(defects.iter().any(|d| d.description.is_none()));
        assert!(defects.iter().any(|d| d.recurrence_count != 1));
        assert!(defects.iter().all(|d| d.recurrence_count <= 5));
        assert!(defects.iter().all(|d| d.severity_tier().is_some()));
        assert!(defects
            .iter()
            .any(|d| d.severity != "CRITICAL" && d.severity == d.severity.to_uppercase()));
    }

    #[test]
    fn component_is_only_dropped_alongside_owner() {
        for seed in 0..5 {
            for d in sample(seed, 2000).iter().filter(|d| d.component.is_none()) {
                assert_eq!(d.owner, None, "{}", d.id);
            }
        }
    }

    fn rate(hits: usize, total: usize) -> f64 {
        hits as f64 / total as f64
    }

    fn assert_near(label: &str, actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "{label}: {actual:.4} not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn mess_rates_follow_generation_probabilities() {
        let defects = sample(2024, 50_000);
        let base: Vec<&Defect> = defects.iter().filter(|d| !d.id.ends_with("-DUP")).collect();
        let n = base.len();
        assert_eq!(n, 50_000);

        let count = |pred: fn(&Defect) -> bool| base.iter().filter(|d| pred(d)).count();

        // 0.15 * 0.30
        assert_near("null component", rate(count(|d| d.component.is_none()), n), 0.045, 0.006);
        // 0.15 + 0.85 * (1 of 10 owners is None)
        assert_near("null owner", rate(count(|d| d.owner.is_none()), n), 0.235, 0.012);
        assert_near("duplicates", rate(defects.len() - n, n), 0.08, 0.008);
        assert_near("null description", rate(count(|d| d.description.is_none()), n), 0.20, 0.012);
        // 0.30 * (5 of 6 draws from 0..=5 differ from 1)
        assert_near("recurrence != 1", rate(count(|d| d.recurrence_count != 1), n), 0.25, 0.012);
        // 3 of 12 labels are already upper-case; 25% of the rest get upper-cased
        assert_near(
            "upper-case severity",
            rate(count(|d| d.severity == d.severity.to_uppercase()), n),
            0.25 + 0.75 * 0.25,
            0.012,
        );
    }

    #[test]
    fn same_seed_reproduces_the_same_dataset() {
        let now = Utc::now();
        let a = generate_defects(100, &mut StdRng::seed_from_u64(8), now);
        let b = generate_defects(100, &mut StdRng::seed_from_u64(8), now);
        assert_eq!(a, b);
    }
}
