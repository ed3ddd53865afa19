/*
[INPUT]:  HTTP configuration (base URLs, timeouts, credentials)
[OUTPUT]: Configured reqwest client, signed request URLs and validated JSON
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::http::endpoint::{Endpoint, Verb};
use crate::http::response::check_response;
use crate::http::{OcceError, RequestSigner, Result};
use crate::types::OrderParams;

/// Base URLs for OCCE API
const PUBLIC_BASE_URL: &str = "https://api.occe.io/public/";
const API_BASE_URL: &str = "https://api.occe.io";

/// Version path segment, part of both the URL and the signed message
pub const API_VERSION: &str = "/v2/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// API key pair for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
struct Signing {
    access_key: String,
    signer: RequestSigner,
}

/// Main HTTP client for OCCE API
#[derive(Debug, Clone)]
pub struct OcceClient {
    http_client: Client,
    public_base_url: Url,
    api_base_url: Url,
    signing: Option<Signing>,
}

impl OcceClient {
    /// Create a client for public endpoints only
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), None)
    }

    /// Create a client able to call authenticated endpoints
    pub fn with_credentials(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), Some(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        Self::with_config_and_base_urls(config, PUBLIC_BASE_URL, API_BASE_URL, credentials)
    }

    /// Create a new client with custom configuration and base URLs
    ///
    /// `public_base_url` is the prefix of public endpoints (`.../public/`),
    /// `api_base_url` the host the versioned API lives under.
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        public_base_url: &str,
        api_base_url: &str,
        credentials: Option<Credentials>,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let signing = credentials
            .map(|credentials| {
                RequestSigner::new(&credentials.secret_key).map(|signer| Signing {
                    access_key: credentials.access_key,
                    signer,
                })
            })
            .transpose()?;

        Ok(Self {
            http_client,
            public_base_url: Url::parse(&with_trailing_slash(public_base_url))?,
            api_base_url: Url::parse(api_base_url)?,
            signing,
        })
    }

    /// Whether authenticated endpoints can be called
    pub fn has_credentials(&self) -> bool {
        self.signing.is_some()
    }

    /// Access key in use, if any
    pub fn access_key(&self) -> Option<&str> {
        self.signing.as_ref().map(|s| s.access_key.as_str())
    }

    /// Build full URL for public endpoints
    fn public_url(&self, endpoint: &Endpoint) -> Result<Url> {
        Ok(self.public_base_url.join(&endpoint.path())?)
    }

    /// Build the unsigned versioned URL for an API method
    fn api_url(&self, method: &str) -> Result<Url> {
        let base = self.api_base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{API_VERSION}{method}"))?)
    }

    /// Build the signed URL for an authenticated endpoint
    ///
    /// Query order: order params (type, amount, price, balanceVersion) if any,
    /// then access_key, timestamp, signature.
    pub fn signed_url(
        &self,
        endpoint: &Endpoint,
        params: Option<&OrderParams>,
        timestamp: i64,
    ) -> Result<Url> {
        let signing = self.signing.as_ref().ok_or(OcceError::MissingCredentials)?;
        let method = endpoint.path();
        let signature = signing.signer.sign_request(
            endpoint.verb(),
            API_VERSION,
            &method,
            &signing.access_key,
            timestamp,
        );

        let mut url = self.api_url(&method)?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(params) = params {
                for (key, value) in params.query_pairs() {
                    query.append_pair(key, &value);
                }
            }
            query
                .append_pair("access_key", &signing.access_key)
                .append_pair("timestamp", &timestamp.to_string())
                .append_pair("signature", &signature);
        }
        Ok(url)
    }

    /// Send a signed request to an authenticated endpoint
    ///
    /// The parsed body is returned unchanged once its `result` field reads
    /// `"success"`; any other envelope becomes [`OcceError::Exchange`].
    pub async fn call_api(&self, endpoint: &Endpoint, params: Option<&OrderParams>) -> Result<Value> {
        let url = self.signed_url(endpoint, params, timestamp_ms())?;
        let verb = endpoint.verb();
        debug!(verb = %verb, method = %endpoint.path(), "sending signed request");

        let mut builder = self.http_client.request(verb.method(), url);
        if verb == Verb::Post {
            builder = builder.json(&params);
        }

        let body: Value = self.send_json(builder).await?;
        check_response(&body)?;
        Ok(body)
    }

    /// Send an unauthenticated GET to a public endpoint, no envelope check
    pub async fn public_request(&self, endpoint: &Endpoint) -> Result<Value> {
        let url = self.public_url(endpoint)?;
        debug!(method = %endpoint.path(), "sending public request");
        let builder = self.http_client.request(endpoint.verb().method(), url);
        self.send_json(builder).await
    }

    /// Route an endpoint to the signed or public path
    pub async fn request(&self, endpoint: &Endpoint, params: Option<&OrderParams>) -> Result<Value> {
        if endpoint.is_signed() {
            self.call_api(endpoint, params).await
        } else {
            self.public_request(endpoint).await
        }
    }

    /// Dispatch a request and parse the body as JSON regardless of HTTP status
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Current unix time in milliseconds, truncated to whole seconds
pub fn timestamp_ms() -> i64 {
    Utc::now().timestamp() * 1000
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}
