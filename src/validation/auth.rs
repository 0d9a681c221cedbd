use crate::error::{AppError, Result};

/// Validates a username.
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() || username.len() < 3 {
        return Err(AppError::Validation(
            "Username must be at least 3 characters long".to_string(),
        ));
    }

    if username.len() > 255 {
        return Err(AppError::Validation(
            "Username must be at most 255 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validates an email address; shape only, deliverability is not our
/// problem.
pub fn validate_email(email: &str) -> Result<()> {
    let valid = email.len() <= 255
        && email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        });

    if !valid {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    Ok(())
}

/// Validates a password.
pub fn validate_password(password: &str) -> Result<()> {
    if password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    if password.len() > 128 {
        return Err(AppError::Validation(
            "Password must be at most 128 characters".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_length_bounds() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("abc").is_ok());
        assert!(validate_username(&"x".repeat(255)).is_ok());
        assert!(validate_username(&"x".repeat(256)).is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("jane").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("jane@").is_err());
        assert!(validate_email("jane@localhost").is_err());
    }

    #[test]
    fn password_length_bounds() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long enough").is_ok());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }
}
