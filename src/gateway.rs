//! Relay to the YGOPRODeck card database.
//!
//! Responses are decoded only far enough to re-wrap them in the API envelope. Upstream
//! status codes are ignored: the body decides, as it does for the "no card found" answer
//! which comes back as a 400 with an error object.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::Config,
    error::{AppError, ConfigError},
    models::card::{ArchetypeEntry, Card, CardInfoResponse},
};

/// What a card search filters on. A name query wins over an archetype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardQuery {
    Name(String),
    Archetype(String),
}

impl CardQuery {
    pub fn from_params(name: Option<&str>, archetype: Option<&str>) -> Option<Self> {
        let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);

        non_empty(name)
            .map(CardQuery::Name)
            .or_else(|| non_empty(archetype).map(CardQuery::Archetype))
    }

    fn param(&self) -> (&'static str, &str) {
        match self {
            CardQuery::Name(name) => ("fname", name),
            CardQuery::Archetype(archetype) => ("archetype", archetype),
        }
    }
}

pub struct Gateway {
    http: Client,
    base_url: String,
}

impl Gateway {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self::with_client(http, &config.upstream_api_base))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!("GET {url} {query:?}");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!("{url} answered {status} with {} bytes", body.len());

        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn search_cards(&self, query: &CardQuery) -> Result<Vec<Card>, AppError> {
        let response: CardInfoResponse = self.get("cardinfo.php", &[query.param()]).await?;
        Ok(response.data)
    }

    pub async fn card_info(&self, id: &str) -> Result<Card, AppError> {
        let response: CardInfoResponse = self.get("cardinfo.php", &[("id", id)]).await?;
        response.data.into_iter().next().ok_or(AppError::CardNotFound)
    }

    pub async fn archetypes(&self) -> Result<Vec<String>, AppError> {
        let entries: Vec<ArchetypeEntry> = self.get("archetypes.php", &[]).await?;
        Ok(entries.into_iter().map(ArchetypeEntry::into_name).collect())
    }
}
