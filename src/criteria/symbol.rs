//! Symbol criterion - checks for at least one non-word character.

use secrecy::{ExposeSecret, SecretString};

/// Returns `true` if the password contains at least one character outside
/// `A-Z`, `a-z`, `0-9` and `_` (the non-word character class).
pub fn symbol_criterion(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && c != '_')
}
