//! Authentication models

use serde::{Deserialize, Serialize};

/// OAuth2 password-grant form sent to the login endpoint.
///
/// Only `username` and `password` carry values; the remaining fields are sent
/// empty so OAuth2-style token endpoints accept the form.
#[derive(Clone, Serialize)]
pub struct PasswordGrantForm<'a> {
    pub grant_type: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub scope: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

impl<'a> PasswordGrantForm<'a> {
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self {
            grant_type: "",
            username,
            password,
            scope: "",
            client_id: "",
            client_secret: "",
        }
    }
}

/// Token payload returned by the login and refresh endpoints
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer access token
    pub access_token: String,

    /// Expiry timestamp as sent by the server
    pub exp: String,

    /// Token type, "bearer" when present
    #[serde(default)]
    #[allow(dead_code)]
    pub token_type: Option<String>,
}

/// Account creation request
#[derive(Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_grant_form_leaves_oauth_fields_empty() {
        let form = PasswordGrantForm::new("a@b.com", "pw");
        let value = serde_json::to_value(&form).unwrap();

        assert_eq!(value["username"], "a@b.com");
        assert_eq!(value["password"], "pw");
        for field in ["grant_type", "scope", "client_id", "client_secret"] {
            assert_eq!(value[field], "", "{} should be empty", field);
        }
    }

    #[test]
    fn test_token_response_with_type() {
        let json = r#"{"access_token":"T1","exp":"2030-01-01T00:00:00","token_type":"bearer"}"#;
        let parsed: TokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.access_token, "T1");
        assert_eq!(parsed.exp, "2030-01-01T00:00:00");
        assert_eq!(parsed.token_type.as_deref(), Some("bearer"));
    }

    #[test]
    fn test_token_response_missing_exp_fails() {
        let json = r#"{"access_token":"T1"}"#;
        assert!(serde_json::from_str::<TokenResponse>(json).is_err());
    }
}
