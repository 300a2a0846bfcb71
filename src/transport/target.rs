use serde::Deserialize;

use crate::domain::{PricingModeCode, Target, TargetId, TargetStatusCode};
use crate::transport::TransportError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TargetJson {
    target_id: i64,
    name: String,
    normalized_name: String,
    cost: f64,
    status: i32,
    pricing_mode: i32,
}

impl From<TargetJson> for Target {
    fn from(value: TargetJson) -> Self {
        Target {
            target_id: TargetId::new(value.target_id),
            name: value.name,
            normalized_name: value.normalized_name,
            cost: value.cost,
            status: TargetStatusCode::new(value.status),
            pricing_mode: PricingModeCode::new(value.pricing_mode),
        }
    }
}

pub fn decode_target_json_response(json: &str) -> Result<Target, TransportError> {
    let parsed: TargetJson = serde_json::from_str(json)?;
    Ok(parsed.into())
}

pub fn decode_targets_json_response(json: &str) -> Result<Vec<Target>, TransportError> {
    let parsed: Vec<TargetJson> = serde_json::from_str(json)?;
    Ok(parsed.into_iter().map(Target::from).collect())
}
