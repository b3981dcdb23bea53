//! Healing and function construction for the road's vertical profiles:
//! elevation, superelevation and the lateral shape field.

use crate::analysis::{
    ConcatenatedFunction, CubicFunction, ShapeFunction, ShapeSection, UnivariateFunction,
};
use crate::error::Result;
use crate::math::{fuzzy_eq, sorting};

use super::{Healed, IssueList, PolynomialEntry, ShapeEntry};

/// Heals an elevation profile: `s` keys must be finite, non-negative and
/// strictly ascending.
#[must_use]
pub fn heal_elevation_entries(
    entries: Vec<PolynomialEntry>,
    tolerance: f64,
) -> Healed<Vec<PolynomialEntry>> {
    heal_polynomial_entries(entries, tolerance, "elevation")
}

/// Heals a superelevation profile under the same rules as elevation.
#[must_use]
pub fn heal_superelevation_entries(
    entries: Vec<PolynomialEntry>,
    tolerance: f64,
) -> Healed<Vec<PolynomialEntry>> {
    heal_polynomial_entries(entries, tolerance, "superelevation")
}

fn heal_polynomial_entries(
    entries: Vec<PolynomialEntry>,
    tolerance: f64,
    what: &str,
) -> Healed<Vec<PolynomialEntry>> {
    let mut issues = IssueList::new();
    let mut healed: Vec<PolynomialEntry> = Vec::with_capacity(entries.len());

    for mut entry in entries {
        if !entry.s.is_finite() {
            issues.add_error(format!("{what} entry with non-finite s dropped"));
            continue;
        }
        if entry.s < -tolerance {
            issues.add_error(format!("{what} entry at negative s={} dropped", entry.s));
            continue;
        }
        if entry.s < 0.0 {
            issues.add_warning(format!("{what} entry s={} healed to 0", entry.s));
            entry.s = 0.0;
        }
        heal_coefficients(
            &mut [&mut entry.a, &mut entry.b, &mut entry.c, &mut entry.d],
            &mut issues,
            what,
        );
        healed.push(entry);
    }

    let keys: Vec<f64> = healed.iter().map(|e| e.s).collect();
    if !sorting::is_sorted(&keys, tolerance) {
        issues.add_warning(format!("{what} entries were not sorted by s and were re-sorted"));
        sorting::sort_by_key_value(&mut healed, |e| e.s);
    }

    // Strictly ascending keys: tolerance-coincident duplicates keep the
    // first occurrence.
    let mut deduped: Vec<PolynomialEntry> = Vec::with_capacity(healed.len());
    for entry in healed {
        if let Some(last) = deduped.last() {
            if fuzzy_eq(entry.s, last.s, tolerance) {
                issues.add_warning(format!("duplicate {what} entry at s={} dropped", entry.s));
                continue;
            }
        }
        deduped.push(entry);
    }

    // A profile starting after the road start is anchored backward with
    // a constant entry, so the function covers s=0 onward.
    if let Some(first) = deduped.first().copied() {
        if first.s > tolerance {
            issues.add_warning(format!(
                "{what} profile starts at s={}; extended backward to s=0",
                first.s
            ));
            deduped.insert(0, PolynomialEntry::new(0.0, first.a, 0.0, 0.0, 0.0));
        } else if first.s > 0.0 {
            deduped[0].s = 0.0;
        }
    }

    Healed::new(deduped, issues)
}

fn heal_coefficients(coefficients: &mut [&mut f64], issues: &mut IssueList, what: &str) {
    for value in coefficients {
        if !value.is_finite() {
            issues.add_warning(format!("non-finite {what} coefficient healed to 0"));
            **value = 0.0;
        }
    }
}

/// Builds the elevation function over `[0, road_length]` from healed
/// entries. An empty list yields the constant-zero function (flat road).
///
/// # Errors
///
/// Returns an error if the entries are not strictly ascending inside
/// `[0, road_length)` (healed input never is) or `road_length` is not
/// above the tolerance.
pub fn elevation_function(
    entries: &[PolynomialEntry],
    road_length: f64,
    tolerance: f64,
) -> Result<UnivariateFunction> {
    profile_function(entries, road_length, tolerance)
}

/// Builds the superelevation (torsion) function over `[0, road_length]`.
///
/// # Errors
///
/// Same contract as [`elevation_function`].
pub fn superelevation_function(
    entries: &[PolynomialEntry],
    road_length: f64,
    tolerance: f64,
) -> Result<UnivariateFunction> {
    profile_function(entries, road_length, tolerance)
}

fn profile_function(
    entries: &[PolynomialEntry],
    road_length: f64,
    tolerance: f64,
) -> Result<UnivariateFunction> {
    // Entries anchored at or beyond the road end contribute no section.
    let usable: Vec<&PolynomialEntry> = entries
        .iter()
        .filter(|e| e.s < road_length - tolerance)
        .collect();
    if usable.is_empty() {
        return Ok(UnivariateFunction::zero());
    }
    let starts: Vec<f64> = usable.iter().map(|e| e.s).collect();
    let members: Vec<UnivariateFunction> = usable
        .iter()
        .map(|e| CubicFunction::new(e.coefficients()).into())
        .collect();
    Ok(ConcatenatedFunction::new(starts, members, Some(road_length), tolerance)?.into())
}

/// Heals a road-shape entry list: `s` may repeat across lateral groups
/// (non-strict), `t` must be strictly ascending within each `s` group.
#[must_use]
pub fn heal_shape_entries(entries: Vec<ShapeEntry>, tolerance: f64) -> Healed<Vec<ShapeEntry>> {
    let mut issues = IssueList::new();
    let mut healed: Vec<ShapeEntry> = Vec::with_capacity(entries.len());

    for mut entry in entries {
        if !entry.s.is_finite() || !entry.t.is_finite() {
            issues.add_error("shape entry with non-finite position dropped".to_owned());
            continue;
        }
        if entry.s < -tolerance {
            issues.add_error(format!("shape entry at negative s={} dropped", entry.s));
            continue;
        }
        if entry.s < 0.0 {
            issues.add_warning(format!("shape entry s={} healed to 0", entry.s));
            entry.s = 0.0;
        }
        heal_coefficients(
            &mut [&mut entry.a, &mut entry.b, &mut entry.c, &mut entry.d],
            &mut issues,
            "shape",
        );
        healed.push(entry);
    }

    let keys: Vec<f64> = healed.iter().map(|e| e.s).collect();
    if !sorting::is_sorted(&keys, tolerance) {
        issues.add_warning("shape entries were not sorted by s and were re-sorted".to_owned());
        sorting::sort_by_key_value(&mut healed, |e| e.s);
    }

    // Within each s group, t strictly ascending.
    let mut result: Vec<ShapeEntry> = Vec::with_capacity(healed.len());
    let mut group_start = 0;
    while group_start < healed.len() {
        let s = healed[group_start].s;
        let group_end = healed[group_start..]
            .iter()
            .position(|e| !fuzzy_eq(e.s, s, tolerance))
            .map_or(healed.len(), |offset| group_start + offset);

        let mut group: Vec<ShapeEntry> = healed[group_start..group_end].to_vec();
        let t_keys: Vec<f64> = group.iter().map(|e| e.t).collect();
        if !sorting::is_sorted(&t_keys, tolerance) {
            issues.add_warning(format!(
                "shape entries at s={s} were not sorted by t and were re-sorted"
            ));
            sorting::sort_by_key_value(&mut group, |e| e.t);
        }
        for entry in group {
            if let Some(last) = result.last() {
                if fuzzy_eq(last.s, entry.s, tolerance) && fuzzy_eq(last.t, entry.t, tolerance) {
                    issues.add_warning(format!(
                        "duplicate shape entry at s={}, t={} dropped",
                        entry.s, entry.t
                    ));
                    continue;
                }
            }
            result.push(entry);
        }
        group_start = group_end;
    }

    Healed::new(result, issues)
}

/// Builds the bivariate shape function from healed entries, or `None`
/// when the road carries no shape profile.
///
/// # Errors
///
/// Returns an error if the healed entries still violate the section
/// ordering contract (healed input never does).
pub fn shape_function(entries: &[ShapeEntry], tolerance: f64) -> Result<Option<ShapeFunction>> {
    if entries.is_empty() {
        return Ok(None);
    }
    let mut sections: Vec<ShapeSection> = Vec::new();
    let mut group_start = 0;
    while group_start < entries.len() {
        let s = entries[group_start].s;
        let group_end = entries[group_start..]
            .iter()
            .position(|e| !fuzzy_eq(e.s, s, tolerance))
            .map_or(entries.len(), |offset| group_start + offset);
        let lateral: Vec<(f64, CubicFunction)> = entries[group_start..group_end]
            .iter()
            .map(|e| (e.t, CubicFunction::new(e.coefficients())))
            .collect();
        sections.push(ShapeSection::new(s, lateral, tolerance)?);
        group_start = group_end;
    }
    Ok(Some(ShapeFunction::new(sections, tolerance)?))
}
