mod marker;
mod popup;

pub use marker::{project_all, Marker, MarkerCategory, AIRBORNE_MARKER, ICON_PREFIX};
pub use popup::{Link, Popup, MAX_FIELD_CHARS, POPUP_MAX_WIDTH};
