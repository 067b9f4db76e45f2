use std::fmt;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::model::Item;

const GRAPHQL_ENDPOINT: &str = "https://api.tarkov.dev/graphql";

/// Fixed query: exactly the five fields the sync persists. The whole item
/// list arrives in one response; the API is not paginated for this query.
const ITEMS_QUERY: &str = "\
query {
  items {
    id
    name
    shortName
    basePrice
    lastLowPrice
  }
}";

/// Why a fetch pass produced no items. Every failure mode of the single
/// POST comes back as a value; nothing is retried and nothing panics.
#[derive(Debug)]
pub enum FetchError {
    /// Non-success HTTP status from the endpoint.
    Http(StatusCode),
    /// Top-level `errors` array in the GraphQL response body.
    Api(Value),
    /// Transport or body-decode failure.
    Transport(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(status) => write!(f, "tarkov.dev returned {status}"),
            FetchError::Api(errors) => write!(f, "tarkov.dev reported errors: {errors}"),
            FetchError::Transport(err) => write!(f, "request to tarkov.dev failed: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<EnvelopeData>,
    #[serde(default)]
    errors: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    #[serde(default)]
    items: Vec<Item>,
}

/// Client for the tarkov.dev GraphQL API.
#[derive(Debug, Clone)]
pub struct TarkovMarket {
    http: Client,
}

impl TarkovMarket {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("tarkov-market-sync/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http })
    }

    /// One POST against the GraphQL endpoint. On success only items with a
    /// last low price are returned, in upstream order.
    pub async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        let response = self
            .http
            .post(GRAPHQL_ENDPOINT)
            .json(&json!({ "query": ITEMS_QUERY }))
            .send()
            .await
            .map_err(FetchError::Transport)?;

        classify_status(response.status())?;

        let envelope: Envelope = response.json().await.map_err(FetchError::Transport)?;
        let items = sift(envelope)?;
        info!(items = items.len(), "Items fetched");
        Ok(items)
    }
}

/// Gate on the HTTP status before any body handling: a non-success status
/// is a fetch error and no bytes of the body are interpreted.
fn classify_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Http(status))
    }
}

/// Split a decoded envelope into listed items or an API-level error, dropping
/// entries without a last low price.
fn sift(envelope: Envelope) -> Result<Vec<Item>, FetchError> {
    if let Some(errors) = envelope.errors {
        return Err(FetchError::Api(errors));
    }
    let items = envelope.data.map(|d| d.items).unwrap_or_default();
    Ok(items
        .into_iter()
        .filter(|item| item.last_low_price.is_some())
        .collect())
}
