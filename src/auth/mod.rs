// Password hashing and credential validation

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::SeedError;

pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

const MAX_EMAIL_CHARS: usize = 254;
const MIN_PASSWORD_CHARS: usize = 8;
// bcrypt only looks at the first 72 bytes of its input
const MAX_PASSWORD_BYTES: usize = 72;

// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, SeedError> {
    hash_password_with_cost(password, DEFAULT_COST)
}

// Hash a password using bcrypt at an explicit work factor (4..=31)
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, SeedError> {
    hash(password, cost).map_err(|e| SeedError::Hashing(e.to_string()))
}

// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, SeedError> {
    verify(password, hash).map_err(|e| SeedError::Hashing(e.to_string()))
}

/// Validate email shape: one '@', non-empty local part, dotted domain
pub fn validate_email(email: &str) -> Result<(), SeedError> {
    if email.is_empty() {
        return Err(SeedError::InvalidInput("Email must not be empty".to_string()));
    }
    if email.chars().count() > MAX_EMAIL_CHARS {
        return Err(SeedError::InvalidInput(format!(
            "Email must be at most {} characters",
            MAX_EMAIL_CHARS
        )));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(SeedError::InvalidInput("Email must not contain whitespace".to_string()));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| SeedError::InvalidInput(format!("'{}' is not an email address", email)))?;

    if local.is_empty() || domain.contains('@') {
        return Err(SeedError::InvalidInput(format!("'{}' is not an email address", email)));
    }
    // Domain needs at least one dot with something on both sides
    let dotted = domain
        .split('.')
        .all(|label| !label.is_empty())
        && domain.contains('.');
    if !dotted {
        return Err(SeedError::InvalidInput(format!(
            "'{}' does not have a valid domain",
            email
        )));
    }

    Ok(())
}

// Validate password strength
pub fn validate_password(password: &str) -> Result<(), SeedError> {
    let chars = password.chars().count();
    if chars < MIN_PASSWORD_CHARS {
        return Err(SeedError::InvalidInput(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_CHARS
        )));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SeedError::InvalidInput(format!(
            "Password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let password = "test_password_123";
        let hash = hash_password_with_cost(password, MIN_BCRYPT_COST).unwrap();

        assert_ne!(hash, password);
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_default_cost_hash() {
        let hash = hash_password("minstlol").unwrap();

        assert!(hash.starts_with("$2b$12$"));
        assert!(verify_password("minstlol", &hash).unwrap());
    }

    #[test]
    fn test_hashing_is_salted() {
        let first = hash_password_with_cost("minstlol", MIN_BCRYPT_COST).unwrap();
        let second = hash_password_with_cost("minstlol", MIN_BCRYPT_COST).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_cost_is_hashing_error() {
        let result = hash_password_with_cost("minstlol", 2);
        assert!(matches!(result, Err(SeedError::Hashing(_))));
    }

    #[test]
    fn test_verify_garbage_hash_is_error() {
        assert!(verify_password("minstlol", "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("davidbaeriksson@gmail.com").is_ok());
        assert!(validate_email("admin@data.engine.local").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign.com").is_err()); // missing @
        assert!(validate_email("@gmail.com").is_err()); // empty local part
        assert!(validate_email("a@b@gmail.com").is_err()); // two @
        assert!(validate_email("admin@localhost").is_err()); // undotted domain
        assert!(validate_email("admin@gmail.").is_err()); // trailing dot
        assert!(validate_email("ad min@gmail.com").is_err()); // whitespace
    }

    #[test]
    fn test_email_length_limit() {
        let long = format!("{}@gmail.com", "a".repeat(250));
        assert!(validate_email(&long).is_err());
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("minstlol").is_ok()); // exactly 8
        assert!(validate_password("short").is_err()); // too short
        assert!(validate_password(&"x".repeat(72)).is_ok()); // bcrypt limit
        assert!(validate_password(&"x".repeat(73)).is_err()); // would be truncated
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 7 characters, 14 bytes
        assert!(validate_password("äääääää").is_err());
        // 8 characters, 16 bytes
        assert!(validate_password("ääääääää").is_ok());
        // 36 characters, 72 bytes
        assert!(validate_password(&"é".repeat(36)).is_ok());
        // 37 characters, 74 bytes: over the bcrypt input limit
        assert!(validate_password(&"é".repeat(37)).is_err());
    }

    #[test]
    fn test_email_length_counts_characters() {
        // 250 characters but 490 bytes
        let local = "é".repeat(240);
        let email = format!("{}@gmail.com", local);
        assert_eq!(email.chars().count(), 250);
        assert!(validate_email(&email).is_ok());
    }
}
