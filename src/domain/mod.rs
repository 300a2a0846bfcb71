//! Domain layer: strong types with validation and invariants (no I/O).

mod response;
mod session;
mod validation;
mod value;

pub use response::{
    AreaCodeFilters, AuthenticationResult, PendingVerification, Preferences, Target, User,
    Verification, VerificationStatus,
};
pub use session::{Session, SessionHandle};
pub use validation::ValidationError;
pub use value::{
    BearerToken, ClientKey, ClientSecret, KnownPricingMode, KnownTargetStatus, PricingModeCode,
    SimpleToken, TargetId, TargetStatusCode, VerificationId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_token_requires_prefix() {
        assert!(matches!(
            SimpleToken::new("abc"),
            Err(ValidationError::SimpleTokenPrefix { prefix: "1_" })
        ));
        assert!(SimpleToken::new("1_abc").is_ok());
    }

    #[test]
    fn simple_token_rejects_empty() {
        assert!(matches!(
            SimpleToken::new("   "),
            Err(ValidationError::Empty {
                field: SimpleToken::FIELD
            })
        ));
    }

    #[test]
    fn simple_token_trims_before_checking_prefix() {
        let token = SimpleToken::new("  1_abc  ").unwrap();
        assert_eq!(token.as_str(), "1_abc");
    }

    #[test]
    fn client_key_rejects_empty() {
        assert!(matches!(
            ClientKey::new(" "),
            Err(ValidationError::Empty {
                field: ClientKey::FIELD
            })
        ));
    }

    #[test]
    fn client_secret_rejects_empty_but_preserves_whitespace() {
        assert!(matches!(
            ClientSecret::new(""),
            Err(ValidationError::Empty {
                field: ClientSecret::FIELD
            })
        ));
        assert_eq!(ClientSecret::new(" s ").unwrap().as_str(), " s ");
    }

    #[test]
    fn bearer_token_rejects_empty_and_trims() {
        assert!(BearerToken::new("  ").is_err());
        assert_eq!(BearerToken::new(" tok ").unwrap().as_str(), "tok");
    }

    #[test]
    fn verification_id_rejects_empty() {
        assert!(matches!(
            VerificationId::new(""),
            Err(ValidationError::Empty {
                field: VerificationId::FIELD
            })
        ));
    }

    #[test]
    fn target_status_known_mapping() {
        assert_eq!(
            TargetStatusCode::new(4).known_kind(),
            Some(KnownTargetStatus::Available)
        );
        assert!(TargetStatusCode::new(4).is_available());
        assert_eq!(
            TargetStatusCode::new(128).known_kind(),
            Some(KnownTargetStatus::QuotaExceeded)
        );
        assert_eq!(TargetStatusCode::new(999).known_kind(), None);
    }

    #[test]
    fn pricing_mode_known_mapping() {
        assert_eq!(
            PricingModeCode::new(2).known_kind(),
            Some(KnownPricingMode::Surge)
        );
        assert!(PricingModeCode::new(2).is_surge());
        assert_eq!(
            PricingModeCode::new(64).known_kind(),
            Some(KnownPricingMode::Discounted)
        );
        assert_eq!(PricingModeCode::new(3).known_kind(), None);
    }

    #[test]
    fn target_id_round_trips_and_displays() {
        let id = TargetId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }
}
