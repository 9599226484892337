mod choropleth;
mod color;
mod drought;

use serde::Serialize;

pub use choropleth::ScoreRamp;
pub use color::{diverging_color, Paint, Rgb};
pub use drought::drought_style;

/// Visual style of one feature, as handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Style {
    pub fill_color: Paint,
    pub fill_opacity: f64,
    pub stroke_color: Paint,
    pub stroke_weight: f64,
    pub stroke_opacity: f64,
}
