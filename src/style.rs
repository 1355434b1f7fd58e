//! Visual state derivation: lengths, colors and the score-to-style table.

use std::fmt;

use crate::types::{StrengthLevel, StrengthScore};

/// Measure unit for indicator lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Percent,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Px => write!(f, "px"),
            Unit::Percent => write!(f, "%"),
        }
    }
}

/// A length with its measure unit, rendered CSS-style (`30px`, `40%`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const fn px(value: f64) -> Self {
        Length {
            value,
            unit: Unit::Px,
        }
    }

    pub const fn percent(value: f64) -> Self {
        Length {
            value,
            unit: Unit::Percent,
        }
    }

    /// Same unit, value multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Length {
            value: self.value * factor,
            unit: self.unit,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Indicator fill color as a hex triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(&'static str);

impl Color {
    pub const RED: Color = Color("#ff0000");
    pub const AMBER: Color = Color("#edc422");
    pub const GREEN: Color = Color("#2dda2f");

    pub fn as_hex(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a width change reaches the element: a smooth transition over the
/// host's default duration, or an instant jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Animated,
    Instant,
}

/// Number of bar segments at full strength.
pub const SEGMENT_COUNT: u8 = 5;

/// Bar height, fixed at bind time.
pub const BAR_HEIGHT: Length = Length::px(10.0);

/// Corner radius, fixed at bind time.
pub const CORNER_RADIUS: Length = Length::px(5.0);

/// Margin on all four sides, fixed at bind time.
pub const BAR_MARGIN: Length = Length::px(5.0);

/// A single style mutation pushed to the host element.
#[derive(Debug, Clone, PartialEq)]
pub enum StylePatch {
    /// One-time framing applied at bind: the visible "empty" bar. Always
    /// applied instantaneously.
    Base {
        background: Color,
        width: Length,
        height: Length,
        border_radius: Length,
        margin: Length,
    },
    /// Width update carrying the configured transition mode.
    Width { width: Length, transition: Transition },
    /// Fill color update. Never animated, in either mode.
    Background(Color),
}

/// The (width, color) pair derived from a score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub width: Length,
    pub color: Color,
}

impl VisualState {
    /// Maps a score onto the fixed visual table: width grows by one segment
    /// per point, color follows the red/amber/green bands.
    pub fn for_score(score: StrengthScore, segment: Length) -> VisualState {
        let width = segment.scaled(f64::from(score.segments()));
        let color = match score.level() {
            StrengthLevel::Fair => Color::AMBER,
            StrengthLevel::Strong => Color::GREEN,
            _ => Color::RED,
        };
        VisualState { width, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_display_px() {
        assert_eq!(Length::px(30.0).to_string(), "30px");
        assert_eq!(Length::px(30.4).to_string(), "30.4px");
    }

    #[test]
    fn test_length_display_percent() {
        assert_eq!(Length::percent(40.0).to_string(), "40%");
    }

    #[test]
    fn test_visual_table() {
        let segment = Length::px(30.0);
        let expected = [
            (30.0, Color::RED),
            (60.0, Color::RED),
            (90.0, Color::AMBER),
            (120.0, Color::AMBER),
            (150.0, Color::GREEN),
        ];
        for (score, (width, color)) in expected.into_iter().enumerate() {
            let state = VisualState::for_score(StrengthScore::new(score as u8), segment);
            assert_eq!(state.width, Length::px(width));
            assert_eq!(state.color, color);
        }
    }

    #[test]
    fn test_width_grows_one_segment_per_point() {
        let segment = Length::percent(3.0);
        for score in 1..=4u8 {
            let prev = VisualState::for_score(StrengthScore::new(score - 1), segment);
            let curr = VisualState::for_score(StrengthScore::new(score), segment);
            assert!((curr.width.value - prev.width.value - segment.value).abs() < 1e-9);
            assert_eq!(curr.width.unit, segment.unit);
        }
    }
}
