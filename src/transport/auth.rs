use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

use crate::domain::{AuthenticationResult, BearerToken, ClientKey, ClientSecret};
use crate::transport::TransportError;

/// Header carrying the simple token on `POST SimpleAuthentication`.
pub const SIMPLE_TOKEN_HEADER: &str = "X-SIMPLE-API-ACCESS-TOKEN";

/// Build the `Authorization` value for `POST Authentication`: the key/secret
/// pair encoded as an HTTP Basic credential.
pub fn basic_authorization(key: &ClientKey, secret: &ClientSecret) -> String {
    let credential = format!("{}:{}", key.as_str(), secret.as_str());
    format!("Basic {}", BASE64.encode(credential))
}

#[derive(Debug, Clone, Deserialize)]
struct AuthenticationJsonResponse {
    bearer_token: String,
    #[serde(default)]
    expiration: Option<String>,
    #[serde(default)]
    ticks: Option<i64>,
}

/// Decode the body shared by both authentication endpoints.
pub fn decode_authentication_json_response(
    json: &str,
) -> Result<AuthenticationResult, TransportError> {
    let parsed: AuthenticationJsonResponse = serde_json::from_str(json)?;
    Ok(AuthenticationResult {
        bearer_token: BearerToken::new(parsed.bearer_token)?,
        expiration: parsed.expiration.unwrap_or_default(),
        ticks: parsed.ticks.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_authorization_encodes_key_and_secret() {
        let key = ClientKey::new("k").unwrap();
        let secret = ClientSecret::new("s").unwrap();
        assert_eq!(basic_authorization(&key, &secret), "Basic azpz");
    }

    #[test]
    fn decode_full_authentication_response() {
        let json = r#"
        {
          "bearer_token": "tok1",
          "expiration": "2026-08-30T12:00:00Z",
          "ticks": 863999999999
        }
        "#;

        let result = decode_authentication_json_response(json).unwrap();
        assert_eq!(result.bearer_token.as_str(), "tok1");
        assert_eq!(result.expiration, "2026-08-30T12:00:00Z");
        assert_eq!(result.ticks, 863_999_999_999);
    }

    #[test]
    fn decode_tolerates_missing_metadata_fields() {
        let json = r#"{ "bearer_token": "tok1" }"#;

        let result = decode_authentication_json_response(json).unwrap();
        assert_eq!(result.bearer_token.as_str(), "tok1");
        assert_eq!(result.expiration, "");
        assert_eq!(result.ticks, 0);
    }

    #[test]
    fn decode_rejects_blank_bearer_token() {
        let json = r#"{ "bearer_token": "   " }"#;
        assert!(matches!(
            decode_authentication_json_response(json),
            Err(TransportError::Invalid(_))
        ));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        assert!(matches!(
            decode_authentication_json_response("{ not json }"),
            Err(TransportError::Json(_))
        ));
    }
}
