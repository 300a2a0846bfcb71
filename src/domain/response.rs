use crate::domain::value::{
    BearerToken, PricingModeCode, TargetId, TargetStatusCode, VerificationId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a successful login call.
///
/// Only the token is consumed by the session; `expiration` and `ticks` are
/// informational metadata reported by the service. No expiry-driven refresh
/// happens locally — token expiry is detected lazily, by observing the first
/// rejected request.
pub struct AuthenticationResult {
    pub bearer_token: BearerToken,
    /// UTC timestamp text after which the token stops being accepted.
    pub expiration: String,
    /// Ticks remaining before the token expires.
    pub ticks: i64,
}

#[derive(Debug, Clone, PartialEq)]
/// Account verification preferences.
pub struct Preferences {
    pub block_surge_pricing: bool,
    pub area_code_filter_enabled: bool,
    pub area_code_filters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Area code filters the service accepts.
pub struct AreaCodeFilters {
    pub acceptable_area_codes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// A verification target (the service you want a number for).
pub struct Target {
    pub target_id: TargetId,
    pub name: String,
    pub normalized_name: String,
    pub cost: f64,
    pub status: TargetStatusCode,
    pub pricing_mode: PricingModeCode,
}

#[derive(Debug, Clone, PartialEq)]
/// Account details for the authenticated user.
pub struct User {
    pub username: Option<String>,
    pub credit_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Lifecycle state of a verification.
pub enum VerificationStatus {
    /// Waiting for SMS.
    Pending,
    /// SMS received.
    Completed,
    /// Verification expired.
    TimedOut,
    /// Verification was reported by the user.
    Reported,
    /// Verification was cancelled by the user or the system.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
/// A verification and its current state.
pub struct Verification {
    pub id: VerificationId,
    pub cost: f64,
    pub target_name: Option<String>,
    /// Number to hand to the target service.
    pub number: Option<String>,
    pub time_remaining: Option<String>,
    pub reuse_window: Option<String>,
    pub status: Option<VerificationStatus>,
    /// Raw contents of the received SMS.
    pub sms: Option<String>,
    /// Verification code parsed out of the SMS.
    pub code: Option<String>,
    pub verification_uri: Option<String>,
    pub cancel_uri: Option<String>,
    pub report_uri: Option<String>,
    pub reuse_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Entry in the pending verifications listing.
pub struct PendingVerification {
    pub id: VerificationId,
    pub target_id: String,
}
