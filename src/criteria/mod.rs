//! Password complexity criteria.
//!
//! Each criterion checks one character class over the full password and is
//! worth exactly one point, no matter how many characters match.

mod digit;
mod lowercase;
mod symbol;
mod uppercase;

pub use digit::digit_criterion;
pub use lowercase::lowercase_criterion;
pub use symbol::symbol_criterion;
pub use uppercase::uppercase_criterion;

use secrecy::SecretString;

/// Signature shared by all criterion checks.
pub type CriterionCheck = fn(&SecretString) -> bool;
