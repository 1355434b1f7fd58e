//! Uppercase criterion - checks for at least one uppercase Latin letter.

use secrecy::{ExposeSecret, SecretString};

/// Returns `true` if the password contains at least one `A-Z` letter.
pub fn uppercase_criterion(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_present() {
        let pwd = SecretString::new("abcDef".to_string().into());
        assert!(uppercase_criterion(&pwd));
    }

    #[test]
    fn test_uppercase_absent() {
        let pwd = SecretString::new("abc123!".to_string().into());
        assert!(!uppercase_criterion(&pwd));
    }
}
