use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Pre-issued TextVerified simple API access token.
///
/// Invariant: non-empty after trimming and begins with `"1_"`.
pub struct SimpleToken(String);

impl SimpleToken {
    /// Field name used in validation messages.
    pub const FIELD: &'static str = "simple_token";

    /// Literal prefix every simple token carries.
    pub const PREFIX: &'static str = "1_";

    /// Create a validated [`SimpleToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.starts_with(Self::PREFIX) {
            return Err(ValidationError::SimpleTokenPrefix {
                prefix: Self::PREFIX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// TextVerified API client key.
///
/// Invariant: non-empty after trimming.
pub struct ClientKey(String);

impl ClientKey {
    /// Field name used in validation messages.
    pub const FIELD: &'static str = "client_key";

    /// Create a validated [`ClientKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// TextVerified API client secret.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct ClientSecret(String);

impl ClientSecret {
    /// Field name used in validation messages.
    pub const FIELD: &'static str = "client_secret";

    /// Create a validated [`ClientSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Bearer token returned by the authentication endpoints (RFC 6750 style).
///
/// Invariant: non-empty after trimming. The value is opaque; no expiry
/// information is derived from it locally.
pub struct BearerToken(String);

impl BearerToken {
    /// Field name used in validation messages.
    pub const FIELD: &'static str = "bearer_token";

    /// Create a validated [`BearerToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unique identifier for a verification, as issued by the service.
///
/// Invariant: non-empty after trimming.
pub struct VerificationId(String);

impl VerificationId {
    /// Field name used in validation messages.
    pub const FIELD: &'static str = "verification_id";

    /// Create a validated [`VerificationId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Numeric identifier of a verification target (e.g. Google, Telegram).
pub struct TargetId(i64);

impl TargetId {
    /// Wrap a raw target id.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw id.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Availability status code reported for a target.
///
/// The service reports these as integers; unknown values are preserved.
pub struct TargetStatusCode(i32);

impl TargetStatusCode {
    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as reported by the service.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known status variant, if one exists.
    pub fn known_kind(self) -> Option<KnownTargetStatus> {
        KnownTargetStatus::from_code(self.0)
    }

    /// Returns `true` if a verification can currently be created for the target.
    pub fn is_available(self) -> bool {
        self.known_kind() == Some(KnownTargetStatus::Available)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Target availability statuses documented by the service.
pub enum KnownTargetStatus {
    NotAvailable,
    Available,
    SurgePricingBlocked,
    QuotaExceeded,
}

impl KnownTargetStatus {
    /// Map an integer code to a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::NotAvailable),
            4 => Some(Self::Available),
            8 => Some(Self::SurgePricingBlocked),
            128 => Some(Self::QuotaExceeded),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Pricing mode code reported for a target.
///
/// The service reports these as integers; unknown values are preserved.
pub struct PricingModeCode(i32);

impl PricingModeCode {
    /// Construct a pricing mode from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as reported by the service.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known pricing mode variant, if one exists.
    pub fn known_kind(self) -> Option<KnownPricingMode> {
        KnownPricingMode::from_code(self.0)
    }

    /// Returns `true` if the target is currently surge priced.
    pub fn is_surge(self) -> bool {
        self.known_kind() == Some(KnownPricingMode::Surge)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Pricing modes documented by the service.
pub enum KnownPricingMode {
    Default,
    Surge,
    Free,
    Premium,
    Adjusted,
    Filtered,
    Discounted,
}

impl KnownPricingMode {
    /// Map an integer code to a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Default),
            2 => Some(Self::Surge),
            4 => Some(Self::Free),
            8 => Some(Self::Premium),
            16 => Some(Self::Adjusted),
            32 => Some(Self::Filtered),
            64 => Some(Self::Discounted),
            _ => None,
        }
    }
}
