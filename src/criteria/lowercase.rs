//! Lowercase criterion - checks for at least one lowercase Latin letter.

use secrecy::{ExposeSecret, SecretString};

/// Returns `true` if the password contains at least one `a-z` letter.
pub fn lowercase_criterion(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_lowercase())
}
