use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::response::format_creation_time;

use super::repo::User;

/// Request body for creating a user. Every key must be present and nothing
/// else is accepted; `email` may be `null`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUser {
    pub name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub email: Option<String>,
    pub password: String,
}

/// Request body for partially updating a user. Absent fields stay untouched;
/// an explicit `"email": null` clears the stored address.
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::extractors::double_option")]
    pub email: Option<Option<String>>,
    pub password: Option<String>,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct UserOut {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub creation_time: String,
}

impl UserOut {
    pub fn from_row(user: User) -> Result<Self, ApiError> {
        Ok(Self {
            id: user.id,
            name: user.name,
            email: user.email,
            creation_time: format_creation_time(user.creation_time)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn create_user_accepts_a_null_email() {
        let body: CreateUser =
            serde_json::from_str(r#"{"name": "alice", "email": null, "password": "pw"}"#).unwrap();
        assert_eq!(body.name, "alice");
        assert!(body.email.is_none());
    }

    #[test]
    fn create_user_requires_every_key() {
        assert!(serde_json::from_str::<CreateUser>(r#"{"email": null, "password": "pw"}"#).is_err());
        assert!(serde_json::from_str::<CreateUser>(r#"{"name": "alice", "password": "pw"}"#).is_err());
        assert!(serde_json::from_str::<CreateUser>(r#"{"name": "alice", "email": null}"#).is_err());
    }

    #[test]
    fn create_user_rejects_unknown_keys() {
        let body = r#"{"name": "alice", "email": null, "password": "pw", "role": "admin"}"#;
        assert!(serde_json::from_str::<CreateUser>(body).is_err());
    }

    #[test]
    fn update_user_defaults_to_all_absent() {
        let body: UpdateUser = serde_json::from_str("{}").unwrap();
        assert!(body.name.is_none());
        assert!(body.email.is_none());
        assert!(body.password.is_none());
    }

    #[test]
    fn update_user_tells_a_null_email_from_an_absent_one() {
        let absent: UpdateUser = serde_json::from_str(r#"{"name": "alice"}"#).unwrap();
        assert_eq!(absent.email, None);

        let cleared: UpdateUser = serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert_eq!(cleared.email, Some(None));

        let replaced: UpdateUser = serde_json::from_str(r#"{"email": "new@example.com"}"#).unwrap();
        assert_eq!(replaced.email, Some(Some("new@example.com".to_string())));
    }

    #[test]
    fn user_out_never_carries_the_password_hash() {
        let user = User {
            id: 1,
            name: "alice".into(),
            email: Some("alice@example.com".into()),
            password_hash: "secret-hash".into(),
            creation_time: datetime!(2024-03-07 09:05:42 UTC),
        };
        let body = serde_json::to_value(UserOut::from_row(user).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "alice",
                "email": "alice@example.com",
                "creation_time": "2024-03-07 09:05"
            })
        );
    }
}
