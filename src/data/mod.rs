mod diagnostics;
mod drought;
mod project;
mod region;
mod repair;

pub use diagnostics::{Diagnostics, Issue, Source};
pub use drought::{parse_drought, parse_severity, DroughtFeature, SEVERITY_PROPERTY};
pub use project::{parse_projects, projects_table, ProjectRecord};
pub use region::{parse_regions, RegionPolygon, NAME_PROPERTY};
pub use repair::{repair_feature, repair_feature_collection, RepairOutcome, RepairReport};
