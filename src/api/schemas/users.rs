use crate::domain::user::{User, normalize_username};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    #[serde(default)]
    pub username: Option<String>,
}

impl CreateUserForm {
    /// Returns the trimmed username.
    ///
    /// # Errors
    /// Returns an error if the username is missing, blank or too long.
    pub fn validate(&self) -> Result<String, String> {
        normalize_username(self.username.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self { id: user.id, username: user.username }
    }
}

/// Parses the `{_id}` path segment.
///
/// # Errors
/// Returns an error if the segment is not a UUID.
pub fn parse_user_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("Invalid user id: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_missing_username() {
        let form = CreateUserForm { username: None };
        assert_eq!(form.validate().unwrap_err(), "username is required");
    }

    #[test]
    fn test_validate_trims_username() {
        let form = CreateUserForm { username: Some("  bob ".into()) };
        assert_eq!(form.validate().unwrap(), "bob");
    }

    #[test]
    fn test_user_response_uses_underscore_id() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(UserResponse { id, username: "bob".into() }).unwrap();
        assert_eq!(json["_id"], id.to_string());
        assert_eq!(json["username"], "bob");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_user_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_user_id(&id.to_string()).unwrap(), id);
        assert_eq!(parse_user_id("abc").unwrap_err(), "Invalid user id: abc");
    }
}
