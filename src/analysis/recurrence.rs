use crate::models::analytics::RecurrenceEntry;
use crate::models::defect::Defect;
use std::collections::HashMap;

pub const TOP_DEFECT_TYPES: usize = 10;

/// Sum `recurrence_count` per raw title and rank the heaviest.
/// Titles are not normalized, so "Memory Leak" and "memory-leak" rank separately.
pub fn analyze_recurrence(defects: &[Defect]) -> Vec<RecurrenceEntry> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<RecurrenceEntry> = Vec::new();

    for d in defects {
        let slot = *positions.entry(d.title.as_str()).or_insert_with(|| {
            entries.push(RecurrenceEntry {
                defect_type: d.title.clone(),
                count: 0,
            });
            entries.len() - 1
        });
        entries[slot].count += u64::from(d.recurrence_count);
    }

    // stable: equal counts keep first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(TOP_DEFECT_TYPES);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::defect;

    fn titled(title: &str, recurrence: u32) -> Defect {
        let mut d = defect("DEF-1", "Low", "Open");
        d.title = title.to_string();
        d.recurrence_count = recurrence;
        d
    }

    #[test]
    fn sums_recurrence_per_raw_title() {
        let defects = vec![
            titled("Memory Leak", 2),
            titled("memory-leak", 5),
            titled("Memory Leak", 3),
        ];
        let ranked = analyze_recurrence(&defects);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].defect_type, "Memory Leak");
        assert_eq!(ranked[0].count, 5);
        assert_eq!(ranked[1].defect_type, "memory-leak");
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let defects = vec![titled("b", 1), titled("a", 1), titled("c", 4)];
        let names: Vec<_> = analyze_recurrence(&defects)
            .into_iter()
            .map(|e| e.defect_type)
            .collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn keeps_only_the_top_ten() {
        let defects: Vec<Defect> = (0..15).map(|i| titled(&format!("type-{i}"), i)).collect();
        let ranked = analyze_recurrence(&defects);
        assert_eq!(ranked.len(), TOP_DEFECT_TYPES);
        assert_eq!(ranked[0].count, 14);
        assert_eq!(ranked[9].count, 5);
    }

    #[test]
    fn zero_recurrence_titles_still_appear() {
        let ranked = analyze_recurrence(&[titled("NPE", 0)]);
        assert_eq!(ranked[0].count, 0);
    }
}
