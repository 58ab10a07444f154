use crate::models::analytics::DataQuality;
use crate::models::defect::Defect;

pub fn assess_data_quality(defects: &[Defect]) -> DataQuality {
    DataQuality {
        missing_component: defects.iter().filter(|d| d.is_missing_component()).count(),
        missing_owner: defects.iter().filter(|d| d.is_missing_owner()).count(),
        missing_description: defects.iter().filter(|d| d.is_missing_description()).count(),
        total_records: defects.len(),
    }
}
