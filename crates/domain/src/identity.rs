//! The authenticated identity as known to the client.
//!
//! An [`Identity`] is owned by the session and never mutated in place —
//! it is replaced wholesale on re-login. The remote API transports
//! identities wrapped in a one-element array; that wrapping is unwrapped
//! at the gateway-client boundary and never appears here.

use serde::{Deserialize, Serialize};

/// Role granted to an identity by the remote platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Moderator,
}

impl Role {
    /// The wire string for this role (`"user"` / `"moderator"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Moderator => "moderator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user's profile data and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Class / cohort label (e.g. graduating year).
    #[serde(default)]
    pub class: Option<String>,
    /// Reference to the stored profile picture.
    #[serde(default)]
    pub picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_strings_are_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Role::Moderator).unwrap(),
            r#""moderator""#
        );
    }

    #[test]
    fn unknown_role_string_is_rejected() {
        let err = serde_json::from_str::<Role>(r#""superadmin""#);
        assert!(err.is_err());
    }

    #[test]
    fn identity_round_trips_with_optional_fields_absent() {
        let json = r#"{
            "id": "u-17",
            "name": "Maja Nilsson",
            "email": "maja@example.edu",
            "role": "user"
        }"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.role, Role::User);
        assert!(identity.class.is_none());
        assert!(identity.picture.is_none());

        let back = serde_json::to_string(&identity).unwrap();
        let again: Identity = serde_json::from_str(&back).unwrap();
        assert_eq!(identity, again);
    }
}
