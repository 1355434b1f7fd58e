//! Indicator component: configuration, binding and per-keystroke updates.

use secrecy::SecretString;
use thiserror::Error;

use crate::scorer::score_password;
use crate::style::{
    BAR_HEIGHT, BAR_MARGIN, CORNER_RADIUS, Color, Length, SEGMENT_COUNT, StylePatch, Transition,
    Unit, VisualState,
};
use crate::types::StrengthScore;

const DEFAULT_MAX_LENGTH: &str = "150px";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BindError {
    #[error("indicator_field is required but was not provided")]
    MissingIndicatorField,
    #[error("max_indicator_length {0:?} must be a number followed by px or %")]
    MalformedLengthUnit(String),
}

/// Externally-owned UI element the indicator styles.
///
/// Implementations translate patches into whatever the host toolkit
/// understands; the component never awaits a transition and never reads
/// styles back.
pub trait IndicatorSurface {
    fn apply(&mut self, patch: StylePatch);
}

impl<S: IndicatorSurface + ?Sized> IndicatorSurface for &mut S {
    fn apply(&mut self, patch: StylePatch) {
        (**self).apply(patch);
    }
}

/// Binding options.
///
/// `indicator_field` names the element to style and has no default; the
/// other options fall back to a 150px bar with animated width changes.
pub struct IndicatorOptions<S> {
    pub indicator_field: Option<S>,
    pub max_indicator_length: String,
    pub use_animate: bool,
}

impl<S> IndicatorOptions<S> {
    pub fn new(field: S) -> Self {
        IndicatorOptions {
            indicator_field: Some(field),
            ..Self::default()
        }
    }
}

impl<S> Default for IndicatorOptions<S> {
    fn default() -> Self {
        IndicatorOptions {
            indicator_field: None,
            max_indicator_length: DEFAULT_MAX_LENGTH.to_string(),
            use_animate: true,
        }
    }
}

/// A strength indicator bound to one host element.
///
/// The handle owns the surface for the lifetime of the binding; dropping it
/// releases the element untouched (last applied style stays in place).
pub struct PasswordStrengthIndicator<S> {
    surface: S,
    segment: Length,
    transition: Transition,
    score: Option<StrengthScore>,
}

impl<S: IndicatorSurface> PasswordStrengthIndicator<S> {
    /// Validates the options, styles the element into its empty state and
    /// returns the bound handle.
    ///
    /// On error nothing is styled: binding is all-or-nothing. Errors are
    /// also reported on the log channel when the `tracing` feature is on.
    pub fn bind(options: IndicatorOptions<S>) -> Result<Self, BindError> {
        let Some(mut surface) = options.indicator_field else {
            let err = BindError::MissingIndicatorField;
            #[cfg(feature = "tracing")]
            tracing::error!("indicator binding failed: {}", err);
            return Err(err);
        };

        let max = match parse_max_length(&options.max_indicator_length) {
            Ok(max) => max,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::error!("indicator binding failed: {}", err);
                return Err(err);
            }
        };

        // one block length
        let segment = Length {
            value: max.value / f64::from(SEGMENT_COUNT),
            unit: max.unit,
        };
        let transition = if options.use_animate {
            Transition::Animated
        } else {
            Transition::Instant
        };

        // the initial state of the indicator
        surface.apply(StylePatch::Base {
            background: Color::RED,
            width: segment,
            height: BAR_HEIGHT,
            border_radius: CORNER_RADIUS,
            margin: BAR_MARGIN,
        });

        Ok(PasswordStrengthIndicator {
            surface,
            segment,
            transition,
            score: None,
        })
    }

    /// Rescores the field contents and pushes the matching width and color.
    ///
    /// Call once per input-committed event, i.e. after the keystroke has
    /// landed in the field's value. Width goes out first, carrying the
    /// configured transition; color follows instantaneously.
    pub fn on_input(&mut self, password: &SecretString) {
        #[cfg(feature = "async")]
        let evaluation = score_password(password, None);

        #[cfg(not(feature = "async"))]
        let evaluation = score_password(password);

        let Some(score) = evaluation.score else {
            return;
        };
        self.score = Some(score);

        let state = VisualState::for_score(score, self.segment);
        self.surface.apply(StylePatch::Width {
            width: state.width,
            transition: self.transition,
        });
        self.surface.apply(StylePatch::Background(state.color));
    }

    /// Score from the most recent update, if any input has been seen.
    pub fn score(&self) -> Option<StrengthScore> {
        self.score
    }

    /// One fifth of the configured maximum length.
    pub fn segment(&self) -> Length {
        self.segment
    }

    /// Releases the surface, ending the binding.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Parses `<number>px` or `<number>%`. The unit suffix is checked first,
/// then the numeric portion; anything else is a configuration error.
fn parse_max_length(raw: &str) -> Result<Length, BindError> {
    let (number, unit) = if let Some(number) = raw.strip_suffix("px") {
        (number, Unit::Px)
    } else if let Some(number) = raw.strip_suffix('%') {
        (number, Unit::Percent)
    } else {
        return Err(BindError::MalformedLengthUnit(raw.to_string()));
    };

    let value: f64 = number
        .parse()
        .map_err(|_| BindError::MalformedLengthUnit(raw.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(BindError::MalformedLengthUnit(raw.to_string()));
    }

    Ok(Length { value, unit })
}
