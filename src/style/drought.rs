use crate::style::{color::{Rgb, BLACK}, Paint, Style};

const DROUGHT_FILL_OPACITY: f64 = 0.7;
const DROUGHT_STROKE_WEIGHT: f64 = 0.5;

/// Drought-monitor class -> fill, most severe last.
const DROUGHT_FILLS: [(i64, Rgb); 5] = [
    (0, Rgb::new(0xff, 0xff, 0x00)), // abnormally dry: yellow
    (1, Rgb::new(0xfc, 0xd3, 0x7f)), // moderate: light tan
    (2, Rgb::new(0xff, 0xaa, 0x00)), // severe: orange
    (3, Rgb::new(0xe6, 0x00, 0x00)), // extreme: strong red
    (4, Rgb::new(0x73, 0x00, 0x00)), // exceptional: near-black red
];

/// Style for anything outside the table, including a missing level.
const NO_DROUGHT: Style = Style {
    fill_color: Paint::Transparent,
    fill_opacity: 0.0,
    stroke_color: Paint::Solid(BLACK),
    stroke_weight: DROUGHT_STROKE_WEIGHT,
    stroke_opacity: 1.0,
};

/// Style a drought polygon by its severity level. Total: every input has a style.
pub fn drought_style(level: Option<i64>) -> Style {
    level
        .and_then(|level| DROUGHT_FILLS.iter().find(|(l, _)| *l == level))
        .map_or(NO_DROUGHT, |&(_, fill)| Style {
            fill_color: Paint::Solid(fill),
            fill_opacity: DROUGHT_FILL_OPACITY,
            ..NO_DROUGHT
        })
}
