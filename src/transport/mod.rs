//! Transport layer: HTTP wire-format details (headers, serialization).

mod auth;
mod preferences;
mod target;
mod user;
mod verification;

pub use auth::{SIMPLE_TOKEN_HEADER, basic_authorization, decode_authentication_json_response};
pub use preferences::{
    decode_area_codes_json_response, decode_preferences_json_response, encode_preferences_body,
};
pub use target::{decode_target_json_response, decode_targets_json_response};
pub use user::decode_user_json_response;
pub use verification::{
    decode_pending_verifications_json_response, decode_verification_json_response,
    encode_create_verification_body,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains unknown verification status: {value}")]
    UnknownVerificationStatus { value: String },

    #[error("response contains an invalid value: {0}")]
    Invalid(#[from] crate::domain::ValidationError),
}
