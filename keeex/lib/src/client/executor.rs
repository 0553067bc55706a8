//! Request execution with tracing instrumentation.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn, Span};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ConfigError, Result};
use crate::response::{decode_json, normalize};
use crate::route::Route;

/// Body placeholder for requests that send none.
pub const NO_BODY: Option<&()> = None;

/// Builder for configuring a [`KeeexClient`].
#[derive(Debug, Default)]
pub struct KeeexClientBuilder {
    config: ClientConfig,
    port: Option<u16>,
}

impl KeeexClientBuilder {
    /// Starts from an existing configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the API root, e.g. `http://localhost:8288/kx/api`.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.config.base_url = base_url;
        self
    }

    /// Overrides the port of the API root.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets a per-request timeout. Requests wait indefinitely by default.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = KeeexClient::builder()
    ///     .timeout(Duration::from_secs(60))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Sets the initial token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Builds the [`KeeexClient`].
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] if the port cannot be applied or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<KeeexClient> {
        let mut config = self.config;
        if let Some(port) = self.port {
            config = config.with_port(port)?;
        }

        let mut http = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().map_err(ConfigError::HttpClient)?;

        Ok(KeeexClient {
            http,
            base_url: config.base_url,
            token: RwLock::new(config.token),
        })
    }
}

/// Async client for the local KeeeX API.
///
/// Each client owns its token, so several clients in one process do not
/// share credentials. The token starts unset (or as configured), is stored
/// automatically by a successful [`request_token`](Self::request_token) and
/// can be replaced at any time with [`set_token`](Self::set_token).
#[derive(Debug)]
pub struct KeeexClient {
    http: reqwest::Client,
    base_url: Url,
    token: RwLock<Option<String>>,
}

impl KeeexClient {
    /// Creates a new builder with default settings.
    pub fn builder() -> KeeexClientBuilder {
        KeeexClientBuilder::default()
    }

    /// Creates a client for `http://localhost:8288/kx/api`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Creates a client configured from `KEEEX_API_*` environment variables.
    ///
    /// ## Errors
    ///
    /// Returns an error if a variable is invalid or the HTTP client cannot
    /// be constructed.
    pub fn from_env() -> Result<Self> {
        Self::builder().config(ClientConfig::from_env()?).build()
    }

    /// Returns the API root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sets the token sent with every authorized request.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Returns the current token.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forgets the current token.
    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Value of the `Authorization` header: the raw token, or empty when
    /// none is set.
    fn authorization(&self) -> Result<HeaderValue> {
        match self.token().as_deref() {
            Some(token) => {
                Ok(HeaderValue::from_str(token).map_err(|_| ConfigError::InvalidToken)?)
            }
            None => Ok(HeaderValue::from_static("")),
        }
    }

    /// Executes `route` and decodes the JSON body of a 200 response.
    ///
    /// This is what every operation uses; it is public so callers can reach
    /// routes without a dedicated method (for example under `/plugin`).
    ///
    /// ## Errors
    ///
    /// Returns an error if the request fails, the status is not exactly 200
    /// or the body does not decode into `T`.
    pub async fn execute<T, B>(&self, route: &Route, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = self.send(route, body).await?;
        Ok(decode_json(&bytes)?)
    }

    /// Sends one request and normalizes the response.
    #[instrument(
        name = "keeex_request",
        skip(self, route, body),
        fields(
            route = route.id(),
            http.method = %route.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    pub(crate) async fn send<B>(&self, route: &Route, body: Option<&B>) -> Result<Bytes>
    where
        B: Serialize + ?Sized,
    {
        let url = route.url(&self.base_url)?;
        Span::current().record("http.url", url.as_str());

        let mut request = self.http.request(route.method().to_reqwest(), url);

        if route.is_authorized() {
            request = request.header(AUTHORIZATION, self.authorization()?);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ClientError::Request)?;
        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        let bytes = response.bytes().await.map_err(ClientError::Request)?;
        let body = normalize(status, bytes).inspect_err(|err| {
            warn!(status = status.as_u16(), error = %err, "request rejected");
        })?;

        debug!(len = body.len(), "request succeeded");
        Ok(body)
    }
}
