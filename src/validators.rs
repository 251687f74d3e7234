//! Form field validation
//!
//! Regex-based validators shared by the sign-in/sign-up flows, the account
//! screen, and configuration checks. Patterns are compiled once per process.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ShopError};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]{2,31}$").expect("valid username pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 \-]{6,14}[0-9]$").expect("valid phone pattern"));

static POSTAL_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 \-]{1,9}$").expect("valid postal pattern"));

static FULL_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z .'\-]{1,63}$").expect("valid name pattern"));

/// Validate an email address
pub fn validate_email(value: &str) -> Result<()> {
    if EMAIL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ShopError::validation(
            "Email must look like name@example.com",
        ))
    }
}

/// Validate a username (3-32 chars, starts with a letter, alphanumeric + underscore)
pub fn validate_username(value: &str) -> Result<()> {
    if USERNAME_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ShopError::validation(
            "Username must be 3-32 characters, start with a letter, and use only letters, numbers, and underscores",
        ))
    }
}

/// Validate a password: at least 8 characters with a letter and a digit,
/// and no whitespace
pub fn validate_password(value: &str) -> Result<()> {
    if value.len() < 8 {
        return Err(ShopError::validation(
            "Password must be at least 8 characters",
        ));
    }
    if value.contains(char::is_whitespace) {
        return Err(ShopError::validation("Password cannot contain whitespace"));
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) || !value.chars().any(|c| c.is_ascii_digit())
    {
        return Err(ShopError::validation(
            "Password must contain at least one letter and one digit",
        ));
    }
    Ok(())
}

/// Validate a phone number (digits with optional +, spaces, and dashes)
pub fn validate_phone(value: &str) -> Result<()> {
    if PHONE_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ShopError::validation(
            "Phone number must be 8-16 digits, optionally starting with +",
        ))
    }
}

/// Validate a postal code (2-10 alphanumeric characters)
pub fn validate_postal_code(value: &str) -> Result<()> {
    if POSTAL_CODE_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ShopError::validation(
            "Postal code must be 2-10 letters or digits",
        ))
    }
}

/// Validate a person's name
pub fn validate_full_name(value: &str) -> Result<()> {
    if FULL_NAME_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ShopError::validation(
            "Name must start with a letter and use only letters, spaces, and ' - .",
        ))
    }
}

/// Validate a free-form required field (address line, city, country)
pub fn validate_non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(ShopError::validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("ada.lovelace+shop@mail.co.uk").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_username_validation() {
        assert!(validate_username("ada").is_ok());
        assert!(validate_username("ada_lovelace42").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("1ada").is_err());
        assert!(validate_username("ada lovelace").is_err());
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("correct1horse").is_ok());
        assert!(validate_password("short1").is_err());
        assert!(validate_password("lettersonly").is_err());
        assert!(validate_password("12345678").is_err());
        assert!(validate_password("has space1").is_err());
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("+1 415 555 0172").is_ok());
        assert!(validate_phone("020-7946-0958").is_ok());
        assert!(validate_phone("12ab34").is_err());
        assert!(validate_phone("123").is_err());
    }

    #[test]
    fn test_postal_code_validation() {
        assert!(validate_postal_code("94103").is_ok());
        assert!(validate_postal_code("EC1A 1BB").is_ok());
        assert!(validate_postal_code("!").is_err());
    }

    #[test]
    fn test_full_name_validation() {
        assert!(validate_full_name("Ada Lovelace").is_ok());
        assert!(validate_full_name("Conan O'Brien").is_ok());
        assert!(validate_full_name("4da").is_err());
        assert!(validate_full_name("").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert!(validate_non_empty("1 Market St", "Address").is_ok());
        let err = validate_non_empty("   ", "City").unwrap_err();
        assert!(err.to_string().contains("City"));
    }
}
