//! Digit criterion - checks for at least one decimal digit.

use secrecy::{ExposeSecret, SecretString};

/// Returns `true` if the password contains at least one `0-9` digit.
pub fn digit_criterion(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_present() {
        let pwd = SecretString::new("abc1def".to_string().into());
        assert!(digit_criterion(&pwd));
    }

    #[test]
    fn test_digit_absent() {
        let pwd = SecretString::new("abcdef!".to_string().into());
        assert!(!digit_criterion(&pwd));
    }

    #[test]
    fn test_many_digits_still_one_match() {
        // the criterion is boolean; callers award at most one point
        let pwd = SecretString::new("123456789".to_string().into());
        assert!(digit_criterion(&pwd));
    }
}
