use serde::Deserialize;

use crate::domain::User;
use crate::transport::TransportError;

#[derive(Debug, Clone, Deserialize)]
struct UserJsonResponse {
    #[serde(default)]
    username: Option<String>,
    credit_balance: f64,
}

pub fn decode_user_json_response(json: &str) -> Result<User, TransportError> {
    let parsed: UserJsonResponse = serde_json::from_str(json)?;
    Ok(User {
        username: parsed.username,
        credit_balance: parsed.credit_balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_user_with_username() {
        let json = r#"{ "username": "alice", "credit_balance": 12.5 }"#;
        let user = decode_user_json_response(json).unwrap();
        assert_eq!(user.username.as_deref(), Some("alice"));
        assert_eq!(user.credit_balance, 12.5);
    }

    #[test]
    fn decode_user_without_username() {
        let json = r#"{ "credit_balance": 0.0 }"#;
        let user = decode_user_json_response(json).unwrap();
        assert!(user.username.is_none());
        assert_eq!(user.credit_balance, 0.0);
    }
}
