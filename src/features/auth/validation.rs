//! Client-side form validation, run before any network call. Failures are
//! reported inline and never leave the browser.

/// Password length bounds shared by sign-in, sign-up, and reset.
pub(crate) const PASSWORD_MIN: usize = 8;
pub(crate) const PASSWORD_MAX: usize = 100;

/// Name/username length bounds for sign-up.
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;

pub(crate) fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    });

    if valid {
        Ok(())
    } else {
        Err("Invalid email".to_string())
    }
}

pub(crate) fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < PASSWORD_MIN {
        return Err(format!("Password must be at least {PASSWORD_MIN} characters"));
    }
    if password.chars().count() > PASSWORD_MAX {
        return Err(format!("Password must be at most {PASSWORD_MAX} characters"));
    }
    Ok(())
}

pub(crate) fn validate_name(field: &str, value: &str) -> Result<(), String> {
    let length = value.trim().chars().count();
    if length < NAME_MIN {
        return Err(format!("{field} must be at least {NAME_MIN} characters"));
    }
    if length > NAME_MAX {
        return Err(format!("{field} must be at most {NAME_MAX} characters"));
    }
    Ok(())
}

pub(crate) fn validate_sign_in(email: &str, password: &str) -> Result<(), String> {
    validate_email(email)?;
    validate_password(password)
}

pub(crate) fn validate_sign_up(
    name: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), String> {
    validate_name("Name", name)?;
    validate_name("Username", username)?;
    validate_email(email)?;
    validate_password(password)
}

pub(crate) fn validate_reset(password: &str, confirm_password: &str) -> Result<(), String> {
    validate_password(password)?;
    validate_password(confirm_password)?;
    if password != confirm_password {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reset_password_fails_before_anything_else() {
        let err = validate_reset("abc", "abc").expect_err("expected a validation error");
        assert_eq!(err, "Password must be at least 8 characters");
    }

    #[test]
    fn mismatched_reset_passwords_are_rejected() {
        let err = validate_reset("password1", "password2").expect_err("expected a mismatch");
        assert_eq!(err, "Passwords do not match");
    }

    #[test]
    fn matching_reset_passwords_pass() {
        assert!(validate_reset("password1", "password1").is_ok());
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email(" a@x.com ").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("missing-at.example.com").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("a@nodot").is_err());
    }

    #[test]
    fn password_bounds() {
        assert!(validate_password("password").is_ok());
        assert!(validate_password("1234567").is_err());
        assert!(validate_password(&"x".repeat(100)).is_ok());
        assert!(validate_password(&"x".repeat(101)).is_err());
    }

    #[test]
    fn length_messages_match_the_inclusive_bounds() {
        let err = validate_password(&"x".repeat(101)).expect_err("expected a validation error");
        assert_eq!(err, "Password must be at most 100 characters");

        let err = validate_name("Name", &"x".repeat(101)).expect_err("expected a validation error");
        assert_eq!(err, "Name must be at most 100 characters");
        assert!(validate_name("Name", &"x".repeat(100)).is_ok());
    }

    #[test]
    fn sign_up_checks_every_field_in_order() {
        assert!(validate_sign_up("A", "ada", "a@x.com", "password1").is_err());
        assert!(validate_sign_up("Ada", "a", "a@x.com", "password1").is_err());
        assert!(validate_sign_up("Ada", "ada", "bad-email", "password1").is_err());
        assert!(validate_sign_up("Ada", "ada", "a@x.com", "short").is_err());
        assert!(validate_sign_up("Ada", "ada", "a@x.com", "password1").is_ok());
    }
}
