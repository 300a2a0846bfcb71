//! Client layer: session lifecycle, authentication, and typed endpoint wrappers.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AreaCodeFilters, AuthenticationResult, BearerToken, ClientKey, ClientSecret,
    PendingVerification, Preferences, Session, SessionHandle, SimpleToken, Target, TargetId, User,
    ValidationError, Verification, VerificationId,
};
use crate::transport;

const DEFAULT_BASE_ENDPOINT: &str = "https://www.textverified.com/api";
const DEFAULT_USER_AGENT: &str = concat!("textverified/", env!("CARGO_PKG_VERSION"));

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Put,
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// A validated credential strategy for one authentication attempt.
///
/// Exactly one strategy is active per attempt. Use [`Credentials::simple_token`]
/// for a pre-issued `1_`-prefixed token, or [`Credentials::client_credentials`]
/// for a key/secret pair exchanged for a bearer token.
pub enum Credentials {
    /// Single-step authentication with a pre-issued simple token.
    SimpleToken(SimpleToken),
    /// Key/secret pair sent as an HTTP Basic credential.
    ClientCredentials { key: ClientKey, secret: ClientSecret },
}

impl Credentials {
    /// Create [`Credentials::SimpleToken`] and validate the `1_` prefix.
    pub fn simple_token(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::SimpleToken(SimpleToken::new(value)?))
    }

    /// Create [`Credentials::ClientCredentials`] and validate that both parts
    /// are non-empty.
    pub fn client_credentials(
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::ClientCredentials {
            key: ClientKey::new(key)?,
            secret: ClientSecret::new(secret)?,
        })
    }

    // Login requests carry their own credential header and never the stored
    // bearer token.
    fn login_request(&self, base_endpoint: &str) -> HttpRequest {
        match self {
            Self::SimpleToken(token) => HttpRequest {
                method: HttpMethod::Post,
                url: format!("{base_endpoint}/SimpleAuthentication"),
                headers: vec![(
                    transport::SIMPLE_TOKEN_HEADER.to_owned(),
                    token.as_str().to_owned(),
                )],
                body: None,
            },
            Self::ClientCredentials { key, secret } => HttpRequest {
                method: HttpMethod::Post,
                url: format!("{base_endpoint}/Authentication"),
                headers: vec![(
                    "Authorization".to_owned(),
                    transport::basic_authorization(key, secret),
                )],
                body: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Options for the authenticate operations.
pub struct AuthOptions {
    /// Issue a login call even if the session is already authenticated.
    pub force_reauth: bool,
    /// Return the underlying error when the remote login fails. When `false`
    /// (the default), a failed login resolves normally and leaves the session
    /// unauthenticated; the dominant use case is "ensure session, proceed if
    /// possible".
    pub propagate_failure: bool,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextVerifiedClient`].
pub enum TextVerifiedError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TextVerifiedError {
    /// Returns `true` if the server rejected the attached credential
    /// (the canonical 401 signal that demotes the session).
    pub fn is_authorization_rejected(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 401, .. })
    }
}

#[derive(Debug, Clone, Default)]
struct CredentialConfig {
    simple_token: Option<String>,
    client_key: Option<String>,
    client_secret: Option<String>,
}

#[derive(Debug, Clone)]
/// Builder for [`TextVerifiedClient`].
///
/// Use this to configure construction-time credentials, a pre-existing bearer
/// token, or to customize the endpoint, timeout, or user-agent.
pub struct TextVerifiedClientBuilder {
    base_endpoint: String,
    credentials: CredentialConfig,
    bearer_token: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TextVerifiedClientBuilder {
    /// Create a builder with the default endpoint and no credentials.
    pub fn new() -> Self {
        Self {
            base_endpoint: DEFAULT_BASE_ENDPOINT.to_owned(),
            credentials: CredentialConfig::default(),
            bearer_token: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base endpoint.
    pub fn base_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.base_endpoint = endpoint.into();
        self
    }

    /// Set the simple token used when an authenticate call passes no argument.
    pub fn simple_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.simple_token = Some(token.into());
        self
    }

    /// Set the key/secret pair used when an authenticate call passes no
    /// arguments.
    pub fn client_credentials(
        mut self,
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        self.credentials.client_key = Some(key.into());
        self.credentials.client_secret = Some(secret.into());
        self
    }

    /// Seed the session with an externally supplied bearer token.
    ///
    /// The session still starts unauthenticated; the first successful call
    /// (or an explicit authenticate with `force_reauth`) raises the flag.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TextVerifiedClient`].
    pub fn build(self) -> Result<TextVerifiedClient, TextVerifiedError> {
        let session = match self.bearer_token {
            Some(raw) => SessionHandle::seeded(BearerToken::new(raw)?),
            None => SessionHandle::new(),
        };

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder = builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
        );

        let client = builder
            .build()
            .map_err(|err| TextVerifiedError::Transport(Box::new(err)))?;

        Ok(TextVerifiedClient {
            base_endpoint: normalize_endpoint(self.base_endpoint),
            credentials: self.credentials,
            session,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

impl Default for TextVerifiedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_endpoint(endpoint: String) -> String {
    endpoint.trim_end_matches('/').to_owned()
}

#[derive(Clone)]
/// High-level TextVerified client.
///
/// One logical session per client: authenticate once, then call the typed
/// endpoint wrappers. Clones share the same session, so an authenticated
/// session obtained from any clone is visible to all of them.
///
/// Token expiry is detected lazily: the first request rejected with a 401
/// marks the session unauthenticated (the token itself is kept), and the
/// original failure is surfaced unchanged. A subsequent authenticate call
/// then performs a fresh login.
pub struct TextVerifiedClient {
    base_endpoint: String,
    credentials: CredentialConfig,
    session: SessionHandle,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for TextVerifiedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextVerifiedClient")
            .field("base_endpoint", &self.base_endpoint)
            .finish_non_exhaustive()
    }
}

impl TextVerifiedClient {
    /// Create a client with the default endpoint and no configured
    /// credentials.
    ///
    /// For construction-time credentials or customization, use
    /// [`TextVerifiedClient::builder`].
    pub fn new() -> Self {
        Self {
            base_endpoint: DEFAULT_BASE_ENDPOINT.to_owned(),
            credentials: CredentialConfig::default(),
            session: SessionHandle::new(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> TextVerifiedClientBuilder {
        TextVerifiedClientBuilder::new()
    }

    /// Whether the session is currently considered authenticated.
    ///
    /// This is a local optimistic flag, not proof the token is still valid
    /// server-side.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.snapshot()
    }

    /// Authenticate with a simple token (`POST SimpleAuthentication`).
    ///
    /// Passing `None` falls back to the token configured at construction
    /// time; if neither is present, validation fails. Validation errors are
    /// always returned, regardless of [`AuthOptions::propagate_failure`].
    ///
    /// Unless [`AuthOptions::force_reauth`] is set, an already authenticated
    /// session is returned as-is without a network call.
    pub async fn authenticate_with_simple_token(
        &self,
        token: Option<&str>,
        options: AuthOptions,
    ) -> Result<Session, TextVerifiedError> {
        let raw = token
            .or(self.credentials.simple_token.as_deref())
            .ok_or(ValidationError::MissingCredential {
                field: SimpleToken::FIELD,
            })?;
        let credentials = Credentials::simple_token(raw)?;
        self.authenticate(&credentials, options).await
    }

    /// Authenticate with a key/secret pair (`POST Authentication`).
    ///
    /// The pair is sent as an HTTP Basic credential. `None` arguments fall
    /// back to construction-time configuration, and missing values fail
    /// validation. The short-circuit and failure policy match
    /// [`TextVerifiedClient::authenticate_with_simple_token`].
    pub async fn authenticate_with_client_credentials(
        &self,
        key: Option<&str>,
        secret: Option<&str>,
        options: AuthOptions,
    ) -> Result<Session, TextVerifiedError> {
        let key = key
            .or(self.credentials.client_key.as_deref())
            .ok_or(ValidationError::MissingCredential {
                field: ClientKey::FIELD,
            })?;
        let secret = secret
            .or(self.credentials.client_secret.as_deref())
            .ok_or(ValidationError::MissingCredential {
                field: ClientSecret::FIELD,
            })?;
        let credentials = Credentials::client_credentials(key, secret)?;
        self.authenticate(&credentials, options).await
    }

    /// Authenticate with an already validated credential strategy.
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
        options: AuthOptions,
    ) -> Result<Session, TextVerifiedError> {
        if !options.force_reauth && self.session.is_authenticated() {
            return Ok(self.session.snapshot());
        }

        match self.login(credentials).await {
            Ok(result) => {
                self.session.install(result.bearer_token);
                Ok(self.session.snapshot())
            }
            Err(err) if options.propagate_failure => Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "login failed; session left unauthenticated");
                Ok(self.session.snapshot())
            }
        }
    }

    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthenticationResult, TextVerifiedError> {
        let request = credentials.login_request(&self.base_endpoint);
        let response = self.execute(request).await?;
        transport::decode_authentication_json_response(&response.body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }

    // Every response passes through here. A 401 demotes the session (token
    // untouched) before the failure is surfaced unchanged; this is the lazy
    // expiry detection path. Transport-level failures never reach the status
    // check and do not demote.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TextVerifiedError> {
        let response = self
            .http
            .execute(request)
            .await
            .map_err(TextVerifiedError::Transport)?;

        if response.status == 401 {
            tracing::debug!("authorization rejected by server; marking session unauthenticated");
            self.session.demote();
        }

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(TextVerifiedError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response)
    }

    async fn resource_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String, TextVerifiedError> {
        let mut headers = Vec::new();
        if let Some(token) = self.session.bearer_token() {
            headers.push((
                "Authorization".to_owned(),
                format!("Bearer {}", token.as_str()),
            ));
        }

        let response = self
            .execute(HttpRequest {
                method,
                url: format!("{}/{}", self.base_endpoint, path),
                headers,
                body,
            })
            .await?;

        // Optimistic promotion: any successful resource response marks the
        // session authenticated, even though it proves nothing about a fresh
        // login. Preserved from the service client's observable behavior.
        self.session.promote();
        Ok(response.body)
    }

    /// Fetch the account's verification preferences (`GET preferences`).
    pub async fn get_preferences(&self) -> Result<Preferences, TextVerifiedError> {
        let body = self
            .resource_request(HttpMethod::Get, "preferences", None)
            .await?;
        transport::decode_preferences_json_response(&body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }

    /// Fetch the accepted area code filters (`GET preferences/area-codes`).
    pub async fn get_area_code_filters(&self) -> Result<AreaCodeFilters, TextVerifiedError> {
        let body = self
            .resource_request(HttpMethod::Get, "preferences/area-codes", None)
            .await?;
        transport::decode_area_codes_json_response(&body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }

    /// Update the account's verification preferences (`POST preferences`).
    /// All fields must be provided.
    pub async fn update_preferences(
        &self,
        preferences: &Preferences,
    ) -> Result<Preferences, TextVerifiedError> {
        let body = self
            .resource_request(
                HttpMethod::Post,
                "preferences",
                Some(transport::encode_preferences_body(preferences)),
            )
            .await?;
        transport::decode_preferences_json_response(&body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }

    /// List all verification targets with availability and pricing
    /// (`GET targets`).
    pub async fn get_targets(&self) -> Result<Vec<Target>, TextVerifiedError> {
        let body = self
            .resource_request(HttpMethod::Get, "targets", None)
            .await?;
        transport::decode_targets_json_response(&body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }

    /// Fetch a single target (`GET target/{id}`).
    pub async fn get_target(&self, id: TargetId) -> Result<Target, TextVerifiedError> {
        let body = self
            .resource_request(HttpMethod::Get, &format!("target/{id}"), None)
            .await?;
        transport::decode_target_json_response(&body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }

    /// Fetch the authenticated user's account details (`GET users`).
    pub async fn get_user(&self) -> Result<User, TextVerifiedError> {
        let body = self.resource_request(HttpMethod::Get, "users", None).await?;
        transport::decode_user_json_response(&body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }

    /// Fetch a verification's details (`GET verifications/{id}`).
    pub async fn get_verification(
        &self,
        id: &VerificationId,
    ) -> Result<Verification, TextVerifiedError> {
        let body = self
            .resource_request(
                HttpMethod::Get,
                &format!("verifications/{}", id.as_str()),
                None,
            )
            .await?;
        transport::decode_verification_json_response(&body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }

    /// List verifications still waiting for an SMS
    /// (`GET verifications/pending`).
    pub async fn pending_verifications(
        &self,
    ) -> Result<Vec<PendingVerification>, TextVerifiedError> {
        let body = self
            .resource_request(HttpMethod::Get, "verifications/pending", None)
            .await?;
        transport::decode_pending_verifications_json_response(&body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }

    /// Create a verification for a target (`POST verifications`).
    pub async fn create_verification(
        &self,
        target_id: Option<TargetId>,
    ) -> Result<Verification, TextVerifiedError> {
        let body = self
            .resource_request(
                HttpMethod::Post,
                "verifications",
                Some(transport::encode_create_verification_body(target_id)),
            )
            .await?;
        transport::decode_verification_json_response(&body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }

    /// Cancel a pending verification (`PUT verifications/{id}/cancel`).
    pub async fn cancel_verification(
        &self,
        id: &VerificationId,
    ) -> Result<(), TextVerifiedError> {
        self.resource_request(
            HttpMethod::Put,
            &format!("verifications/{}/cancel", id.as_str()),
            None,
        )
        .await?;
        Ok(())
    }

    /// Report a pending verification (`PUT verifications/{id}/report`).
    pub async fn report_verification(
        &self,
        id: &VerificationId,
    ) -> Result<(), TextVerifiedError> {
        self.resource_request(
            HttpMethod::Put,
            &format!("verifications/{}/report", id.as_str()),
            None,
        )
        .await?;
        Ok(())
    }

    /// Reuse a completed verification within its reuse window
    /// (`PUT verifications/{id}/reuse`).
    pub async fn reuse_verification(
        &self,
        id: &VerificationId,
    ) -> Result<Verification, TextVerifiedError> {
        let body = self
            .resource_request(
                HttpMethod::Put,
                &format!("verifications/{}/reuse", id.as_str()),
                None,
            )
            .await?;
        transport::decode_verification_json_response(&body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }

    /// Resurrect a verification (`PUT verifications/{id}/resurrect`).
    pub async fn resurrect_verification(
        &self,
        id: &VerificationId,
    ) -> Result<Verification, TextVerifiedError> {
        let body = self
            .resource_request(
                HttpMethod::Put,
                &format!("verifications/{}/resurrect", id.as_str()),
                None,
            )
            .await?;
        transport::decode_verification_json_response(&body)
            .map_err(|err| TextVerifiedError::Parse(Box::new(err)))
    }
}

impl Default for TextVerifiedClient {
    fn default() -> Self {
        Self::new()
    }
}
