use serde::{Deserialize, Serialize};

use crate::domain::{AreaCodeFilters, Preferences};
use crate::transport::TransportError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreferencesJson {
    block_surge_pricing: bool,
    area_code_filter_enabled: bool,
    #[serde(default)]
    area_code_filters: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AreaCodesJsonResponse {
    #[serde(default)]
    acceptable_area_codes: Vec<String>,
}

pub fn decode_preferences_json_response(json: &str) -> Result<Preferences, TransportError> {
    let parsed: PreferencesJson = serde_json::from_str(json)?;
    Ok(Preferences {
        block_surge_pricing: parsed.block_surge_pricing,
        area_code_filter_enabled: parsed.area_code_filter_enabled,
        area_code_filters: parsed.area_code_filters,
    })
}

pub fn decode_area_codes_json_response(json: &str) -> Result<AreaCodeFilters, TransportError> {
    let parsed: AreaCodesJsonResponse = serde_json::from_str(json)?;
    Ok(AreaCodeFilters {
        acceptable_area_codes: parsed.acceptable_area_codes,
    })
}

/// Encode the `POST preferences` body. All fields are required by the service.
pub fn encode_preferences_body(preferences: &Preferences) -> serde_json::Value {
    serde_json::json!({
        "blockSurgePricing": preferences.block_surge_pricing,
        "areaCodeFilterEnabled": preferences.area_code_filter_enabled,
        "areaCodeFilters": preferences.area_code_filters,
    })
}
