//! Turvo HTTP client.
//!
//! Authenticates once with the OAuth password grant and then issues
//! bearer-authenticated requests for locations and shipments. Requests are
//! sent one at a time; nothing is retried.

use reqwest::{StatusCode, Url};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::service::LoadGateway;

use super::error::TurvoError;
use super::types::{
    Envelope, Location, LocationId, LocationPage, ShipmentPage, ShipmentRequest,
};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Scope requested with the password grant.
const TOKEN_SCOPE: &str = "read+trust+write";

/// Longest response body kept in parse errors.
const MAX_ERROR_BODY: usize = 500;

/// Configuration for the Turvo client.
#[derive(Debug, Clone)]
pub struct TurvoConfig {
    /// API base URL, e.g. `https://my-sandbox-publicapi.turvo.com/v1`
    pub base_url: String,
    /// Value of the `x-api-key` header
    pub api_key: String,
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TurvoConfig {
    /// Create a new config for the given API.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client_id: String::new(),
            client_secret: String::new(),
            username: String::new(),
            password: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the OAuth client credentials.
    pub fn with_client(mut self, id: impl Into<String>, secret: impl Into<String>) -> Self {
        self.client_id = id.into();
        self.client_secret = secret.into();
        self
    }

    /// Set the user the password grant authenticates as.
    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    username: &'a str,
    password: &'a str,
    scope: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
}

/// Turvo public API client.
#[derive(Debug, Clone)]
pub struct TurvoClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl TurvoClient {
    /// Create an unauthenticated client.
    ///
    /// Use [`TurvoClient::connect`] to also obtain an access token.
    pub fn new(config: &TurvoConfig) -> Result<Self, TurvoError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| TurvoError::Config("invalid API key format".to_string()))?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: String::new(),
        })
    }

    /// Create a client and authenticate it.
    pub async fn connect(config: &TurvoConfig) -> Result<Self, TurvoError> {
        let mut client = Self::new(config)?;
        client.token = client.fetch_token(config).await?;
        Ok(client)
    }

    async fn fetch_token(&self, config: &TurvoConfig) -> Result<String, TurvoError> {
        let url = format!("{}/oauth/token", self.base_url);
        debug!(%url, "requesting access token");

        let response = self
            .http
            .post(&url)
            .query(&[
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
            ])
            .json(&TokenRequest {
                grant_type: "password",
                username: &config.username,
                password: &config.password,
                scope: TOKEN_SCOPE,
                kind: "business",
            })
            .send()
            .await?;

        let body = read_body(response, &[StatusCode::OK]).await?;
        let token: TokenResponse = parse_json(&body)?;

        if token.access_token.is_empty() {
            return Err(TurvoError::Auth(
                "access token was empty in the response".to_string(),
            ));
        }

        Ok(token.access_token)
    }

    /// List locations whose name matches `name`.
    pub async fn list_locations(&self, name: &str) -> Result<Vec<Location>, TurvoError> {
        let url = locations_url(&self.base_url, name)?;
        debug!(%url, name, "listing locations");

        let response = self.http.get(url).bearer_auth(&self.token).send().await?;
        let body = read_body(response, &[StatusCode::OK]).await?;
        let envelope: Envelope<LocationPage> = parse_json(&body)?;

        Ok(envelope.details.locations)
    }

    /// Create one shipment.
    pub async fn create_shipment(&self, request: &ShipmentRequest) -> Result<(), TurvoError> {
        let url = format!("{}/shipments", self.base_url);
        debug!(%url, "creating shipment");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;

        read_body(response, &[StatusCode::CREATED, StatusCode::OK]).await?;
        Ok(())
    }

    /// Fetch one page of shipments.
    ///
    /// Absent paging parameters are left out of the query entirely.
    pub async fn list_shipments(
        &self,
        start: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<ShipmentPage, TurvoError> {
        let url = format!("{}/shipments/list", self.base_url);
        debug!(%url, ?start, ?page_size, "listing shipments");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(&paging_query(start, page_size))
            .send()
            .await?;

        let body = read_body(response, &[StatusCode::OK]).await?;
        let envelope: Envelope<ShipmentPage> = parse_json(&body)?;

        Ok(envelope.details)
    }
}

impl LoadGateway for TurvoClient {
    async fn resolve_location(&self, name: &str) -> Result<LocationId, TurvoError> {
        let locations = self.list_locations(name).await?;
        locations
            .first()
            .map(|l| l.id)
            .ok_or_else(|| TurvoError::LocationNotFound(name.to_string()))
    }

    async fn submit_load(&self, request: &ShipmentRequest) -> Result<(), TurvoError> {
        self.create_shipment(request).await
    }

    async fn list_loads(
        &self,
        start: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<ShipmentPage, TurvoError> {
        self.list_shipments(start, page_size).await
    }
}

/// URL of a location search.
///
/// Turvo wants the `name[in]=[...]` filter with literal brackets, so only
/// the name itself is form-encoded.
fn locations_url(base_url: &str, name: &str) -> Result<Url, TurvoError> {
    let mut url = Url::parse(&format!("{base_url}/locations/list"))
        .map_err(|e| TurvoError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

    if !name.is_empty() {
        let encoded = {
            let mut scratch = url.clone();
            scratch.query_pairs_mut().clear().append_pair("name", name);
            scratch
                .query()
                .and_then(|q| q.strip_prefix("name="))
                .unwrap_or_default()
                .to_string()
        };
        url.set_query(Some(&format!("name[in]=[{encoded}]")));
    }

    Ok(url)
}

fn paging_query(start: Option<u32>, page_size: Option<u32>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(start) = start {
        query.push(("start", start.to_string()));
    }
    if let Some(page_size) = page_size {
        query.push(("pageSize", page_size.to_string()));
    }
    query
}

/// Read the body of a response, failing unless its status is accepted.
async fn read_body(
    response: reqwest::Response,
    accepted: &[StatusCode],
) -> Result<String, TurvoError> {
    let status = response.status();

    if !accepted.contains(&status) {
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %body, "Turvo request failed");
        return Err(TurvoError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, TurvoError> {
    serde_json::from_str(body).map_err(|e| TurvoError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(MAX_ERROR_BODY).collect()),
    })
}
