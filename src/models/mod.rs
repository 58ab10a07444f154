pub mod analytics;
pub mod defect;
pub mod status_check;
