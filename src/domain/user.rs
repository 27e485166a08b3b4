use time::OffsetDateTime;
use uuid::Uuid;

pub const MAX_USERNAME_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: OffsetDateTime,
}

/// Trims and checks a username before it is stored.
///
/// # Errors
/// Returns an error if the username is blank or too long.
pub fn normalize_username(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("username is required".into());
    }
    if trimmed.chars().count() > MAX_USERNAME_LEN {
        return Err(format!("username is too long (max {MAX_USERNAME_LEN} characters)"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("  alice ").unwrap(), "alice");
        assert_eq!(normalize_username("   ").unwrap_err(), "username is required");
        assert!(normalize_username(&"a".repeat(MAX_USERNAME_LEN + 1)).is_err());
        assert!(normalize_username(&"a".repeat(MAX_USERNAME_LEN)).is_ok());
    }
}
