/// Signup-form checks, mirrored by the backend. All of these run
/// before any network call is made.
pub fn validate_username(username: &str) -> Result<(), String> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required".to_string());
    }
    if username.chars().count() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if !email_shape_ok(email) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    Ok(())
}

fn email_shape_ok(email: &str) -> bool {
    if email.len() > 254 {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(l), Some(d), None) => (l, d),
        _ => return false,
    };
    if local.is_empty() || local.len() > 64 || domain.is_empty() {
        return false;
    }
    // Domain needs at least one dot with something on either side.
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(validate_username("bob").is_ok());
        assert!(validate_username("  ab  ").is_err());
        assert!(validate_username("").is_err());
        assert_eq!(
            validate_username("ab").unwrap_err(),
            "Username must be at least 3 characters"
        );
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("user@mail.example.org").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@b.com").is_err());
        assert!(validate_email("a@nodot").is_err());
        assert!(validate_email("@b.com").is_err());
        assert!(validate_email("a@.com").is_err());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("12345678").is_ok());
        assert_eq!(
            validate_password("1234567").unwrap_err(),
            "Password must be at least 8 characters"
        );
        assert!(validate_password("").is_err());
    }
}
