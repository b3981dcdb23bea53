mod issue;
mod lanes;
mod objects;
mod profiles;
mod records;

pub use issue::{Healed, Issue, IssueList, IssueSeverity};
pub use lanes::{heal_lane_height_entries, heal_lane_width_entries};
pub use objects::{
    heal_local_corner_entries, heal_object_repeat, heal_road_corner_entries,
};
pub use profiles::{
    elevation_function, heal_elevation_entries, heal_shape_entries, heal_superelevation_entries,
    shape_function, superelevation_function,
};
pub use records::{
    LaneHeightEntry, LaneWidthEntry, LocalCornerEntry, ObjectRepeatEntry, PolynomialEntry,
    RoadCornerEntry, RoadObjectEntry, ShapeEntry,
};
