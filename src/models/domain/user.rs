use serde::{Deserialize, Serialize};

/// A registered account. The username is the email address used at registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i64,
    pub username: String,
    pub password_hash: String, // Argon2 PHC string
}

impl User {
    pub fn new(username: &str, password_hash: &str) -> Self {
        User {
            id: 0,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        }
    }
}

#[cfg(test)]
impl User {
    pub fn test_user(id: i64, username: &str) -> Self {
        User {
            id,
            username: username.to_string(),
            password_hash: "not-a-real-hash".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("john@example.com", "$argon2id$hash");
        assert_eq!(user.id, 0);
        assert_eq!(user.username, "john@example.com");
        assert_eq!(user.password_hash, "$argon2id$hash");
    }
}
