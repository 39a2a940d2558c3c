//! HTTP client for the `/api/v1/surprises` endpoints.
//!
//! Every endpoint has the same shape: an authenticated GET returning a
//! [`SurpriseResponse`] envelope. The eight named methods are thin wrappers
//! around [`SurpriseClient::fetch`].

use std::fmt;
use std::str::FromStr;

use hyper::ext::ReasonPhrase;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::consts::API_PREFIX;
use crate::error::{SurpriseError, SurpriseResult};

/// The uniform envelope every surprise endpoint returns.
///
/// `content` is server-defined and passed through uninterpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurpriseResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: Map<String, Value>,
    pub timestamp: String,
}

/// One of the eight fixed surprise endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Random,
    Quote,
    Joke,
    Fact,
    Art,
    Challenge,
    Celebrate,
    Daily,
}

impl Endpoint {
    pub const ALL: [Endpoint; 8] = [
        Endpoint::Random,
        Endpoint::Quote,
        Endpoint::Joke,
        Endpoint::Fact,
        Endpoint::Art,
        Endpoint::Challenge,
        Endpoint::Celebrate,
        Endpoint::Daily,
    ];

    /// Last path segment, e.g. `"quote"`.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Random => "random",
            Endpoint::Quote => "quote",
            Endpoint::Joke => "joke",
            Endpoint::Fact => "fact",
            Endpoint::Art => "art",
            Endpoint::Challenge => "challenge",
            Endpoint::Celebrate => "celebrate",
            Endpoint::Daily => "daily",
        }
    }

    /// Phrase used in `Failed to {operation}: ...` errors.
    pub fn operation(self) -> &'static str {
        match self {
            Endpoint::Random => "get surprise",
            Endpoint::Quote => "get quote",
            Endpoint::Joke => "get joke",
            Endpoint::Fact => "get fact",
            Endpoint::Art => "get art",
            Endpoint::Challenge => "get challenge",
            Endpoint::Celebrate => "celebrate",
            Endpoint::Daily => "get daily inspiration",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Endpoint::ALL
            .into_iter()
            .find(|e| e.path() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Endpoint::ALL.iter().map(|e| e.path()).collect();
                format!("unknown surprise '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Client for the surprise endpoints under a configurable base URL.
#[derive(Debug, Clone)]
pub struct SurpriseClient {
    http: reqwest::Client,
    base_url: String,
}

impl SurpriseClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint, e.g. `{base}/api/v1/surprises/joke`.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}/{}", self.base_url, API_PREFIX, endpoint.path())
    }

    /// Issue the authenticated GET for `endpoint` and decode the envelope.
    pub async fn fetch(&self, endpoint: Endpoint, token: &str) -> SurpriseResult<SurpriseResponse> {
        let url = self.url(endpoint);
        let auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| SurpriseError::InvalidToken(e.to_string()))?;

        debug!(%url, "fetching surprise");
        let resp = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, auth)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let status_text = status_text(&resp);
            warn!(%url, status = status.as_u16(), "surprise request failed");
            return Err(SurpriseError::RequestFailed {
                operation: endpoint.operation(),
                status: status_text,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_random_surprise(&self, token: &str) -> SurpriseResult<SurpriseResponse> {
        self.fetch(Endpoint::Random, token).await
    }

    pub async fn get_quote(&self, token: &str) -> SurpriseResult<SurpriseResponse> {
        self.fetch(Endpoint::Quote, token).await
    }

    pub async fn get_joke(&self, token: &str) -> SurpriseResult<SurpriseResponse> {
        self.fetch(Endpoint::Joke, token).await
    }

    pub async fn get_fact(&self, token: &str) -> SurpriseResult<SurpriseResponse> {
        self.fetch(Endpoint::Fact, token).await
    }

    /// ASCII art.
    pub async fn get_art(&self, token: &str) -> SurpriseResult<SurpriseResponse> {
        self.fetch(Endpoint::Art, token).await
    }

    /// A coding challenge.
    pub async fn get_challenge(&self, token: &str) -> SurpriseResult<SurpriseResponse> {
        self.fetch(Endpoint::Challenge, token).await
    }

    pub async fn celebrate(&self, token: &str) -> SurpriseResult<SurpriseResponse> {
        self.fetch(Endpoint::Celebrate, token).await
    }

    /// The surprise of the day. The server keeps it stable per UTC date.
    pub async fn get_daily_inspiration(&self, token: &str) -> SurpriseResult<SurpriseResponse> {
        self.fetch(Endpoint::Daily, token).await
    }
}

/// The reason phrase the server sent, else the canonical one, else the code.
///
/// hyper only records a `ReasonPhrase` when it differs from the canonical
/// phrase for the status.
fn status_text(resp: &reqwest::Response) -> String {
    if let Some(reason) = resp.extensions().get::<ReasonPhrase>() {
        return String::from_utf8_lossy(reason.as_bytes()).into_owned();
    }
    let status = resp.status();
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}
