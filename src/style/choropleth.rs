use serde::Serialize;

use crate::{
    join::ScoreStatus,
    style::{color::{diverging_color, BLACK, GAINSBORO}, Paint, Style},
};

const CHOROPLETH_FILL_OPACITY: f64 = 0.6;
const CHOROPLETH_STROKE_OPACITY: f64 = 0.4;
const CHOROPLETH_STROKE_WEIGHT: f64 = 1.0;

/// Maps ordinal scores onto the diverging ramp over a fixed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRamp {
    pub min: i64,
    pub max: i64,
}

impl ScoreRamp {
    /// Ramp over [min, max]; the bounds are swapped if given in reverse.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min: min.min(max), max: min.max(max) }
    }

    /// Ramp over a table's domain, or a single-point ramp at 0 for an empty table.
    pub fn from_domain(domain: Option<(i64, i64)>) -> Self {
        domain.map_or(Self::new(0, 0), |(min, max)| Self::new(min, max))
    }

    /// Position of `score` on the ramp in [0, 1]. A degenerate domain sits in the middle.
    pub fn position(&self, score: i64) -> f64 {
        if self.max == self.min { return 0.5 }
        (score as f64 - self.min as f64) / (self.max as f64 - self.min as f64)
    }

    /// Style for one region. Total: unscored regions get the neutral fallback fill.
    pub fn style(&self, status: ScoreStatus) -> Style {
        let fill = match status {
            ScoreStatus::Scored(score) => diverging_color(self.position(score)),
            ScoreStatus::Unscored => GAINSBORO,
        };
        Style {
            fill_color: Paint::Solid(fill),
            fill_opacity: CHOROPLETH_FILL_OPACITY,
            stroke_color: Paint::Solid(BLACK),
            stroke_weight: CHOROPLETH_STROKE_WEIGHT,
            stroke_opacity: CHOROPLETH_STROKE_OPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_scores_are_green_high_scores_red() {
        let ramp = ScoreRamp::new(1, 3);
        assert_eq!(ramp.style(ScoreStatus::Scored(1)).fill_color.to_string(), "#1a9850");
        assert_eq!(ramp.style(ScoreStatus::Scored(2)).fill_color.to_string(), "#ffffbf");
        assert_eq!(ramp.style(ScoreStatus::Scored(3)).fill_color.to_string(), "#d73027");
    }

    #[test]
    fn unscored_fallback_is_off_the_ramp() {
        let ramp = ScoreRamp::new(1, 3);
        let fallback = ramp.style(ScoreStatus::Unscored);
        assert_eq!(fallback.fill_color.to_string(), "#dcdcdc");
        for score in -1..=10 {
            assert_ne!(ramp.style(ScoreStatus::Scored(score)).fill_color, fallback.fill_color);
        }
    }

    #[test]
    fn out_of_domain_scores_clamp() {
        let ramp = ScoreRamp::new(1, 3);
        assert_eq!(ramp.style(ScoreStatus::Scored(-5)), ramp.style(ScoreStatus::Scored(1)));
        assert_eq!(ramp.style(ScoreStatus::Scored(99)), ramp.style(ScoreStatus::Scored(3)));
        assert_eq!(ramp.style(ScoreStatus::Scored(i64::MAX)), ramp.style(ScoreStatus::Scored(3)));
    }

    #[test]
    fn degenerate_domain_uses_midpoint() {
        let ramp = ScoreRamp::from_domain(Some((2, 2)));
        assert_eq!(ramp.position(2), 0.5);
        assert_eq!(ScoreRamp::from_domain(None), ScoreRamp::new(0, 0));
        assert_eq!(ScoreRamp::new(3, 1), ScoreRamp::new(1, 3));
    }

    #[test]
    fn choropleth_stroke() {
        let style = ScoreRamp::new(1, 3).style(ScoreStatus::Scored(2));
        assert_eq!(style.fill_opacity, 0.6);
        assert_eq!(style.stroke_opacity, 0.4);
    }
}
