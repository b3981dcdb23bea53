//! Healing for road-object records: repeat parameters and outline
//! corners.

use super::{Healed, IssueList, LocalCornerEntry, ObjectRepeatEntry, RoadCornerEntry};

/// Heals a road-object repeat entry: all fields finite, lengths and
/// extents non-negative.
#[must_use]
pub fn heal_object_repeat(mut entry: ObjectRepeatEntry, tolerance: f64) -> Healed<ObjectRepeatEntry> {
    let mut issues = IssueList::new();

    let fields: [(&str, &mut f64); 11] = [
        ("s", &mut entry.s),
        ("length", &mut entry.length),
        ("distance", &mut entry.distance),
        ("tStart", &mut entry.t_start),
        ("tEnd", &mut entry.t_end),
        ("widthStart", &mut entry.width_start),
        ("widthEnd", &mut entry.width_end),
        ("heightStart", &mut entry.height_start),
        ("heightEnd", &mut entry.height_end),
        ("zOffsetStart", &mut entry.z_offset_start),
        ("zOffsetEnd", &mut entry.z_offset_end),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            issues.add_warning(format!("non-finite repeat {name} healed to 0"));
            *value = 0.0;
        }
    }

    if entry.length < 0.0 {
        issues.add_error(format!("negative repeat length {} clamped to 0", entry.length));
        entry.length = 0.0;
    }
    if entry.s < 0.0 {
        issues.add_warning(format!("negative repeat s={} healed to 0", entry.s));
        entry.s = 0.0;
    }
    if entry.distance < 0.0 {
        issues.add_warning(format!(
            "negative repeat distance {} healed to 0",
            entry.distance
        ));
        entry.distance = 0.0;
    }
    for (name, value) in [
        ("widthStart", &mut entry.width_start),
        ("widthEnd", &mut entry.width_end),
        ("heightStart", &mut entry.height_start),
        ("heightEnd", &mut entry.height_end),
    ] {
        if *value < 0.0 {
            issues.add_warning(format!("negative repeat {name} {value} healed to 0"));
            *value = 0.0;
        } else if *value > 0.0 && *value <= tolerance {
            issues.add_warning(format!(
                "repeat {name} {value} below tolerance healed to 0"
            ));
            *value = 0.0;
        }
    }

    Healed::new(entry, issues)
}

/// Heals curve-relative outline corners.
///
/// Heights in `(0, tolerance)` collapse to zero and negative heights are
/// zeroed, so each corner is unambiguously volumetric or flat. A corner
/// with non-finite coordinates is dropped. When both kinds remain after
/// healing, the outline cannot satisfy the all-or-nothing head-point
/// contract of the polyhedron builder: a FATAL issue is recorded and the
/// caller skips the object.
#[must_use]
pub fn heal_road_corner_entries(
    corners: Vec<RoadCornerEntry>,
    tolerance: f64,
) -> Healed<Vec<RoadCornerEntry>> {
    heal_corner_entries(
        corners,
        tolerance,
        |corner| [corner.s, corner.t, corner.dz],
        |corner| &mut corner.height,
    )
}

/// Heals object-local outline corners under the same rules as
/// [`heal_road_corner_entries`].
#[must_use]
pub fn heal_local_corner_entries(
    corners: Vec<LocalCornerEntry>,
    tolerance: f64,
) -> Healed<Vec<LocalCornerEntry>> {
    heal_corner_entries(
        corners,
        tolerance,
        |corner| [corner.u, corner.v, corner.z],
        |corner| &mut corner.height,
    )
}

fn heal_corner_entries<T: Copy>(
    corners: Vec<T>,
    tolerance: f64,
    coordinates: impl Fn(&T) -> [f64; 3],
    height: impl Fn(&mut T) -> &mut f64,
) -> Healed<Vec<T>> {
    let mut issues = IssueList::new();
    let mut healed: Vec<T> = Vec::with_capacity(corners.len());

    for mut corner in corners {
        if coordinates(&corner).iter().any(|c| !c.is_finite()) {
            issues.add_error("outline corner with non-finite coordinates dropped".to_owned());
            continue;
        }
        let h = height(&mut corner);
        if !h.is_finite() {
            issues.add_warning("non-finite outline corner height healed to 0".to_owned());
            *h = 0.0;
        } else if *h < 0.0 {
            issues.add_warning(format!("negative outline corner height {h} healed to 0"));
            *h = 0.0;
        } else if *h > 0.0 && *h < tolerance {
            issues.add_warning(format!(
                "outline corner height {h} below tolerance healed to 0"
            ));
            *h = 0.0;
        }
        healed.push(corner);
    }

    let mut flat = 0;
    for corner in &mut healed {
        if *height(corner) == 0.0 {
            flat += 1;
        }
    }
    if flat != 0 && flat != healed.len() {
        issues.add_fatal(
            "outline mixes zero-height and volumetric corners; object cannot be built".to_owned(),
        );
    }

    Healed::new(healed, issues)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-7;

    #[test]
    fn repeat_non_finite_fields_are_zeroed() {
        let entry = ObjectRepeatEntry {
            s: 0.0,
            length: f64::NAN,
            distance: 0.0,
            t_start: 1.0,
            t_end: f64::INFINITY,
            width_start: 0.5,
            width_end: 0.5,
            height_start: 1.0,
            height_end: 1.0,
            z_offset_start: 0.0,
            z_offset_end: 0.0,
        };
        let healed = heal_object_repeat(entry, TOL);
        assert_eq!(healed.value.length, 0.0);
        assert_eq!(healed.value.t_end, 0.0);
        assert_eq!(healed.issues.len(), 2);
    }

    #[test]
    fn repeat_negative_extents_are_clamped() {
        let entry = ObjectRepeatEntry {
            s: -1.0,
            length: -5.0,
            distance: -2.0,
            t_start: 0.0,
            t_end: 0.0,
            width_start: -0.5,
            width_end: 0.5,
            height_start: 1.0,
            height_end: 1.0,
            z_offset_start: 0.0,
            z_offset_end: 0.0,
        };
        let healed = heal_object_repeat(entry, TOL);
        assert_eq!(healed.value.s, 0.0);
        assert_eq!(healed.value.length, 0.0);
        assert_eq!(healed.value.distance, 0.0);
        assert_eq!(healed.value.width_start, 0.0);
        assert!(!healed.issues.is_empty());
        assert!(!healed.issues.has_fatal());
    }

    #[test]
    fn sub_tolerance_corner_heights_collapse_to_flat() {
        let corners = vec![
            RoadCornerEntry::new(0.0, 1.0, 0.0, 1e-9),
            RoadCornerEntry::new(0.0, -1.0, 0.0, 0.0),
            RoadCornerEntry::new(1.0, 0.0, 0.0, -0.2),
        ];
        let healed = heal_road_corner_entries(corners, TOL);
        assert!(healed.value.iter().all(|c| c.height == 0.0));
        assert!(!healed.issues.has_fatal());
    }

    #[test]
    fn mixed_outline_is_fatal() {
        let corners = vec![
            RoadCornerEntry::new(0.0, 1.0, 0.0, 2.0),
            RoadCornerEntry::new(0.0, -1.0, 0.0, 0.0),
            RoadCornerEntry::new(1.0, 0.0, 0.0, 2.0),
        ];
        let healed = heal_road_corner_entries(corners, TOL);
        assert!(healed.issues.has_fatal());
    }

    #[test]
    fn non_finite_corners_are_dropped() {
        let corners = vec![
            LocalCornerEntry::new(0.0, 0.0, 0.0, 1.0),
            LocalCornerEntry::new(f64::NAN, 0.0, 0.0, 1.0),
            LocalCornerEntry::new(1.0, 0.0, 0.0, 1.0),
        ];
        let healed = heal_local_corner_entries(corners, TOL);
        assert_eq!(healed.value.len(), 2);
        assert!(!healed.issues.has_fatal());
    }
}
