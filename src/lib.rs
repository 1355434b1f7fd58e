//! Password strength indicator library
//!
//! Scores a password on four complexity criteria and drives a host-owned
//! indicator element (bar width and fill color) from the score. The crate
//! owns no event loop and no toolkit: the host delivers input events by
//! calling [`PasswordStrengthIndicator::on_input`] and receives style
//! mutations through its [`IndicatorSurface`] implementation.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable scoring with a channel-delivery
//!   variant debounced per keystroke
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_indicator::{IndicatorOptions, IndicatorSurface, PasswordStrengthIndicator, StylePatch};
//! use secrecy::SecretString;
//!
//! struct LoggingBar;
//!
//! impl IndicatorSurface for LoggingBar {
//!     fn apply(&mut self, patch: StylePatch) {
//!         println!("{patch:?}");
//!     }
//! }
//!
//! let options = IndicatorOptions {
//!     max_indicator_length: "120px".to_string(),
//!     use_animate: false,
//!     ..IndicatorOptions::new(LoggingBar)
//! };
//!
//! let mut indicator = PasswordStrengthIndicator::bind(options).expect("Failed to bind indicator");
//! indicator.on_input(&SecretString::new("abcDEF12".to_string().into()));
//!
//! println!("Score: {:?}", indicator.score());
//! ```

// Internal modules
mod criteria;
mod indicator;
mod scorer;
mod style;
mod types;

// Public API
pub use indicator::{BindError, IndicatorOptions, IndicatorSurface, PasswordStrengthIndicator};
pub use scorer::{MIN_SCORED_LENGTH, score_password};
pub use style::{
    BAR_HEIGHT, BAR_MARGIN, CORNER_RADIUS, Color, Length, SEGMENT_COUNT, StylePatch, Transition,
    Unit, VisualState,
};
pub use types::{ScoreEvaluation, StrengthLevel, StrengthScore};

#[cfg(feature = "async")]
pub use scorer::score_password_tx;
