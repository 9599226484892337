mod compose;
mod layer;

pub use compose::{compose, unique_names, Bounds, LayerInputs, LayerSet};
pub use layer::{
    CategoryCounts, ChoroplethRegion, Layer, LayerContent, LayerKind, StyleRule, StyledFeature, TooltipField,
};
