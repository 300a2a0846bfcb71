use serde::Deserialize;

use crate::domain::{
    PendingVerification, TargetId, Verification, VerificationId, VerificationStatus,
};
use crate::transport::TransportError;

#[derive(Debug, Clone, Deserialize)]
struct VerificationJsonResponse {
    id: String,
    cost: f64,
    #[serde(default)]
    target_name: Option<String>,
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    time_remaining: Option<String>,
    #[serde(default)]
    reuse_window: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    sms: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    verification_uri: Option<String>,
    #[serde(default)]
    cancel_uri: Option<String>,
    #[serde(default)]
    report_uri: Option<String>,
    #[serde(default)]
    reuse_uri: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PendingVerificationJson {
    id: String,
    target_id: String,
}

// The service spells Timed Out with a space.
fn parse_status(value: &str) -> Result<VerificationStatus, TransportError> {
    match value {
        "Pending" => Ok(VerificationStatus::Pending),
        "Completed" => Ok(VerificationStatus::Completed),
        "Timed Out" => Ok(VerificationStatus::TimedOut),
        "Reported" => Ok(VerificationStatus::Reported),
        "Cancelled" => Ok(VerificationStatus::Cancelled),
        other => Err(TransportError::UnknownVerificationStatus {
            value: other.to_owned(),
        }),
    }
}

pub fn decode_verification_json_response(json: &str) -> Result<Verification, TransportError> {
    let parsed: VerificationJsonResponse = serde_json::from_str(json)?;
    let status = parsed.status.as_deref().map(parse_status).transpose()?;
    Ok(Verification {
        id: VerificationId::new(parsed.id)?,
        cost: parsed.cost,
        target_name: parsed.target_name,
        number: parsed.number,
        time_remaining: parsed.time_remaining,
        reuse_window: parsed.reuse_window,
        status,
        sms: parsed.sms,
        code: parsed.code,
        verification_uri: parsed.verification_uri,
        cancel_uri: parsed.cancel_uri,
        report_uri: parsed.report_uri,
        reuse_uri: parsed.reuse_uri,
    })
}

pub fn decode_pending_verifications_json_response(
    json: &str,
) -> Result<Vec<PendingVerification>, TransportError> {
    let parsed: Vec<PendingVerificationJson> = serde_json::from_str(json)?;
    parsed
        .into_iter()
        .map(|entry| {
            Ok(PendingVerification {
                id: VerificationId::new(entry.id)?,
                target_id: entry.target_id,
            })
        })
        .collect()
}

/// Encode the `POST verifications` body. A missing target id serializes to an
/// empty object, matching what the service expects.
pub fn encode_create_verification_body(target_id: Option<TargetId>) -> serde_json::Value {
    match target_id {
        Some(id) => serde_json::json!({ "id": id.value() }),
        None => serde_json::json!({}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_completed_verification() {
        let json = r#"
        {
          "id": "abc-123",
          "cost": 0.5,
          "target_name": "Google / Gmail",
          "number": "2061234567",
          "status": "Completed",
          "sms": "Your code is 90210",
          "code": "90210",
          "reuse_window": "00:29:59"
        }
        "#;

        let verification = decode_verification_json_response(json).unwrap();
        assert_eq!(verification.id.as_str(), "abc-123");
        assert_eq!(verification.cost, 0.5);
        assert_eq!(verification.status, Some(VerificationStatus::Completed));
        assert_eq!(verification.code.as_deref(), Some("90210"));
        assert_eq!(verification.reuse_window.as_deref(), Some("00:29:59"));
        assert!(verification.time_remaining.is_none());
    }

    #[test]
    fn decode_maps_timed_out_status_with_space() {
        let json = r#"{ "id": "abc", "cost": 0.5, "status": "Timed Out" }"#;
        let verification = decode_verification_json_response(json).unwrap();
        assert_eq!(verification.status, Some(VerificationStatus::TimedOut));
    }

    #[test]
    fn decode_rejects_unknown_status() {
        let json = r#"{ "id": "abc", "cost": 0.5, "status": "Exploded" }"#;
        assert!(matches!(
            decode_verification_json_response(json),
            Err(TransportError::UnknownVerificationStatus { value }) if value == "Exploded"
        ));
    }

    #[test]
    fn decode_pending_listing() {
        let json = r#"
        [
          { "id": "abc-123", "target_id": "12" },
          { "id": "def-456", "target_id": "3" }
        ]
        "#;

        let pending = decode_pending_verifications_json_response(json).unwrap();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].id.as_str(), "abc-123");
        assert_eq!(pending[1].target_id, "3");
    }

    #[test]
    fn encode_create_body_with_and_without_target() {
        assert_eq!(
            encode_create_verification_body(Some(TargetId::new(12))),
            serde_json::json!({ "id": 12 })
        );
        assert_eq!(
            encode_create_verification_body(None),
            serde_json::json!({})
        );
    }
}
