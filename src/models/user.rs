use serde::{Deserialize, Serialize};

/// A registered account.
///
/// The id is assigned from the durable `userId` counter on registration and
/// is unique alongside email and mobile number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct User {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub mobileno: String,
    pub location: String,
}

/// Partial update applied to a stored user. Absent fields keep their
/// current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub mobileno: Option<String>,
    pub location: Option<String>,
}

impl User {
    /// Applies a partial update in place, leaving absent fields untouched.
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(firstname) = update.firstname {
            self.firstname = firstname;
        }
        if let Some(lastname) = update.lastname {
            self.lastname = lastname;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(mobileno) = update.mobileno {
            self.mobileno = mobileno;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
    }
}

/// Profile projection returned by `GET /user-preference/:userId`.
///
/// The stored password never appears here.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserProfile {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub mobileno: String,
    pub location: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            mobileno: user.mobileno,
            location: user.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            user_id: 1,
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            mobileno: "5550001".to_string(),
            location: "London".to_string(),
        }
    }

    #[test]
    fn test_apply_partial_update_keeps_unset_fields() {
        let mut user = sample_user();
        user.apply(UserUpdate {
            location: Some("Cambridge".to_string()),
            ..Default::default()
        });

        assert_eq!(user.location, "Cambridge");
        assert_eq!(user.firstname, "Ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_profile_omits_password() {
        let profile = UserProfile::from(sample_user());
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["mobileno"], "5550001");
    }

    #[test]
    fn test_user_serializes_wire_field_names() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["firstname"], "Ada");
    }
}
