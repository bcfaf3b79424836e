//! # Validation Utilities
//!
//! Input validation helpers for account fields.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check).
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.contains('@') && email.contains('.') && !email.contains(char::is_whitespace) {
        Ok(())
    } else {
        Err("Invalid email format".to_string())
    }
}

/// Validate minimum length.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.len() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("spaces in@mail.com").is_err());
        assert!(validate_email("a@nodot").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("pix-key-123", "pix_key").is_ok());
        assert_eq!(
            validate_not_empty("   ", "pix_key").unwrap_err(),
            "pix_key cannot be empty"
        );
    }

    #[test]
    fn test_validate_min_length() {
        assert!(validate_min_length("longenough", 8, "password").is_ok());
        assert!(validate_min_length("short", 8, "password").is_err());
    }
}
