//! Typed Rust client for the TextVerified SMS verification API.
//!
//! The design follows three layers: a domain layer of strong types
//! (credentials, session state, resource models), a transport layer for
//! wire-format details, and a client layer orchestrating the session
//! lifecycle and the typed endpoint wrappers.
//!
//! Authentication supports two mutually exclusive strategies: a pre-issued
//! simple token (`1_…`) or a client key/secret pair. A successful login
//! stores a bearer token that is attached to every subsequent request; a
//! request rejected with a 401 marks the session unauthenticated so the next
//! authenticate call performs a fresh login.
//!
//! ```rust,no_run
//! use textverified::{AuthOptions, TextVerifiedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), textverified::TextVerifiedError> {
//!     let client = TextVerifiedClient::builder().simple_token("1_...").build()?;
//!     client
//!         .authenticate_with_simple_token(
//!             None,
//!             AuthOptions {
//!                 propagate_failure: true,
//!                 ..Default::default()
//!             },
//!         )
//!         .await?;
//!
//!     let user = client.get_user().await?;
//!     println!("credit balance: {}", user.credit_balance);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    AuthOptions, Credentials, TextVerifiedClient, TextVerifiedClientBuilder, TextVerifiedError,
};
pub use domain::{
    AreaCodeFilters, AuthenticationResult, BearerToken, ClientKey, ClientSecret,
    KnownPricingMode, KnownTargetStatus, PendingVerification, Preferences, PricingModeCode,
    Session, SimpleToken, Target, TargetId, TargetStatusCode, User, ValidationError, Verification,
    VerificationId, VerificationStatus,
};
