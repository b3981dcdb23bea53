//! Healing for per-lane profile entries: width polynomials and surface
//! height offsets.

use crate::math::{fuzzy_eq, sorting};

use super::{Healed, IssueList, LaneHeightEntry, LaneWidthEntry};

/// Heals a lane-width entry list.
///
/// Width entries anchor lane boundary geometry, so a list that is empty
/// or does not start at `s_offset = 0` (beyond tolerance) is a FATAL
/// condition: the lane cannot be constructed and the caller skips it.
/// Everything else is healed in place with warnings.
#[must_use]
pub fn heal_lane_width_entries(
    entries: Vec<LaneWidthEntry>,
    tolerance: f64,
) -> Healed<Vec<LaneWidthEntry>> {
    let mut issues = IssueList::new();
    let mut healed: Vec<LaneWidthEntry> = Vec::with_capacity(entries.len());

    for mut entry in entries {
        if !entry.s_offset.is_finite() {
            issues.add_error("lane width entry with non-finite sOffset dropped".to_owned());
            continue;
        }
        if entry.s_offset < -tolerance {
            issues.add_error(format!(
                "lane width entry at negative sOffset={} dropped",
                entry.s_offset
            ));
            continue;
        }
        if entry.s_offset < 0.0 {
            issues.add_warning(format!(
                "lane width sOffset={} healed to 0",
                entry.s_offset
            ));
            entry.s_offset = 0.0;
        }
        for value in [&mut entry.a, &mut entry.b, &mut entry.c, &mut entry.d] {
            if !value.is_finite() {
                issues.add_warning("non-finite lane width coefficient healed to 0".to_owned());
                *value = 0.0;
            }
        }
        // The constant term is the width at the entry's anchor; negative
        // widths are clamped, the severity depending on how negative.
        if entry.a < -tolerance {
            issues.add_error(format!(
                "negative lane width a={} clamped to 0",
                entry.a
            ));
            entry.a = 0.0;
        } else if entry.a < 0.0 {
            issues.add_warning(format!("lane width a={} healed to 0", entry.a));
            entry.a = 0.0;
        }
        healed.push(entry);
    }

    let keys: Vec<f64> = healed.iter().map(|e| e.s_offset).collect();
    if !sorting::is_sorted(&keys, tolerance) {
        issues.add_warning("lane width entries were not sorted by sOffset and were re-sorted".to_owned());
        sorting::sort_by_key_value(&mut healed, |e| e.s_offset);
    }

    let mut deduped: Vec<LaneWidthEntry> = Vec::with_capacity(healed.len());
    for entry in healed {
        if let Some(last) = deduped.last() {
            if fuzzy_eq(entry.s_offset, last.s_offset, tolerance) {
                issues.add_warning(format!(
                    "duplicate lane width entry at sOffset={} dropped",
                    entry.s_offset
                ));
                continue;
            }
        }
        deduped.push(entry);
    }

    match deduped.first().map(|entry| entry.s_offset) {
        None => issues.add_fatal("lane has no usable width entries".to_owned()),
        Some(first) if first > tolerance => issues.add_fatal(format!(
            "first lane width entry starts at sOffset={first}, not 0"
        )),
        Some(first) => {
            if first > 0.0 {
                deduped[0].s_offset = 0.0;
            }
        }
    }

    Healed::new(deduped, issues)
}

/// Heals a lane-height entry list: finite offsets, strictly ascending
/// `s_offset`.
#[must_use]
pub fn heal_lane_height_entries(
    entries: Vec<LaneHeightEntry>,
    tolerance: f64,
) -> Healed<Vec<LaneHeightEntry>> {
    let mut issues = IssueList::new();
    let mut healed: Vec<LaneHeightEntry> = Vec::with_capacity(entries.len());

    for mut entry in entries {
        if !entry.s_offset.is_finite() || entry.s_offset < -tolerance {
            issues.add_error(format!(
                "lane height entry at sOffset={} dropped",
                entry.s_offset
            ));
            continue;
        }
        if entry.s_offset < 0.0 {
            entry.s_offset = 0.0;
        }
        for value in [&mut entry.inner, &mut entry.outer] {
            if !value.is_finite() {
                issues.add_warning("non-finite lane height offset healed to 0".to_owned());
                *value = 0.0;
            }
        }
        healed.push(entry);
    }

    let keys: Vec<f64> = healed.iter().map(|e| e.s_offset).collect();
    if !sorting::is_sorted(&keys, tolerance) {
        issues.add_warning("lane height entries were not sorted by sOffset and were re-sorted".to_owned());
        sorting::sort_by_key_value(&mut healed, |e| e.s_offset);
    }

    let mut deduped: Vec<LaneHeightEntry> = Vec::with_capacity(healed.len());
    for entry in healed {
        if let Some(last) = deduped.last() {
            if fuzzy_eq(entry.s_offset, last.s_offset, tolerance) {
                issues.add_warning(format!(
                    "duplicate lane height entry at sOffset={} dropped",
                    entry.s_offset
                ));
                continue;
            }
        }
        deduped.push(entry);
    }

    Healed::new(deduped, issues)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-7;

    fn width(s_offset: f64, a: f64) -> LaneWidthEntry {
        LaneWidthEntry::new(s_offset, a, 0.0, 0.0, 0.0)
    }

    #[test]
    fn clean_width_entries_pass_through() {
        let entries = vec![width(0.0, 3.5), width(40.0, 3.0)];
        let healed = heal_lane_width_entries(entries.clone(), TOL);
        assert_eq!(healed.value, entries);
        assert!(healed.issues.is_empty());
    }

    #[test]
    fn empty_width_list_is_fatal() {
        let healed = heal_lane_width_entries(vec![], TOL);
        assert!(healed.issues.has_fatal());
    }

    #[test]
    fn first_width_entry_off_zero_is_fatal() {
        let healed = heal_lane_width_entries(vec![width(5.0, 3.5)], TOL);
        assert!(healed.issues.has_fatal());
    }

    #[test]
    fn first_width_entry_within_tolerance_is_healed() {
        let healed = heal_lane_width_entries(vec![width(1e-9, 3.5)], TOL);
        assert!(!healed.issues.has_fatal());
        assert_eq!(healed.value[0].s_offset, 0.0);
    }

    #[test]
    fn negative_width_is_clamped_with_error() {
        let healed = heal_lane_width_entries(vec![width(0.0, -0.5)], TOL);
        assert_eq!(healed.value[0].a, 0.0);
        assert!(!healed.issues.has_fatal());
        assert!(healed
            .issues
            .iter()
            .any(|i| i.severity == super::super::IssueSeverity::Error));
    }

    #[test]
    fn unsorted_width_entries_are_resorted_then_anchored() {
        let healed = heal_lane_width_entries(vec![width(40.0, 3.0), width(0.0, 3.5)], TOL);
        assert!(!healed.issues.has_fatal());
        assert_eq!(healed.value[0].s_offset, 0.0);
        assert_eq!(healed.value[0].a, 3.5);
    }

    #[test]
    fn height_entries_heal_non_finite_offsets() {
        let healed = heal_lane_height_entries(
            vec![
                LaneHeightEntry::new(0.0, f64::NAN, 0.1),
                LaneHeightEntry::new(10.0, 0.2, 0.2),
            ],
            TOL,
        );
        assert_eq!(healed.value[0].inner, 0.0);
        assert_eq!(healed.value.len(), 2);
        assert!(!healed.issues.is_empty());
    }

    #[test]
    fn duplicate_height_offsets_are_dropped() {
        let healed = heal_lane_height_entries(
            vec![
                LaneHeightEntry::new(0.0, 0.1, 0.1),
                LaneHeightEntry::new(1e-9, 0.9, 0.9),
            ],
            TOL,
        );
        assert_eq!(healed.value.len(), 1);
        assert_eq!(healed.value[0].inner, 0.1);
    }
}
