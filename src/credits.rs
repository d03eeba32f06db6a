//! Credits list fetched over HTTP.
//!
//! The endpoint returns a list of cast credits; each credit links to a
//! character whose name is what the credits screen shows.

use derive_more::{Display, Error};
use futures::future::try_join_all;
use serde::Deserialize;
use tracing::{debug, info, instrument};

#[derive(Debug, Deserialize)]
struct CastCredit {
    #[serde(rename = "_links")]
    links: CreditLinks,
}

#[derive(Debug, Deserialize)]
struct CreditLinks {
    character: Link,
}

#[derive(Debug, Deserialize)]
struct Link {
    href: String,
}

#[derive(Debug, Deserialize)]
struct Character {
    name: String,
}

/// Decodes a cast-credits body into the character URLs, in order.
#[instrument(skip(body))]
pub fn decode_cast_credits(body: &str) -> Result<Vec<String>, CreditsError> {
    let credits: Vec<CastCredit> = serde_json::from_str(body)?;
    Ok(credits.into_iter().map(|c| c.links.character.href).collect())
}

/// Decodes a character body into its name.
#[instrument(skip(body))]
pub fn decode_character_name(body: &str) -> Result<String, CreditsError> {
    let character: Character = serde_json::from_str(body)?;
    Ok(character.name)
}

/// HTTP client for the credits endpoint.
#[derive(Debug, Clone)]
pub struct CreditsClient {
    url: String,
    client: reqwest::Client,
}

impl CreditsClient {
    /// Creates a client for the given cast-credits URL.
    #[instrument]
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    /// Fetches every credited character name.
    ///
    /// Characters are fetched concurrently; any failed request fails the
    /// whole list.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<Vec<String>, CreditsError> {
        let body = self.get_text(&self.url).await?;
        let links = decode_cast_credits(&body)?;
        info!(count = links.len(), "Fetched cast credits");

        let names = try_join_all(links.iter().map(|href| self.fetch_character(href))).await?;
        info!(count = names.len(), "Fetched character names");
        Ok(names)
    }

    #[instrument(skip(self))]
    async fn fetch_character(&self, href: &str) -> Result<String, CreditsError> {
        let body = self.get_text(href).await?;
        decode_character_name(&body)
    }

    async fn get_text(&self, url: &str) -> Result<String, CreditsError> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Credits fetch error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Credits error: {} at {}:{}", message, file, line)]
pub struct CreditsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CreditsError {
    /// Creates a new credits error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for CreditsError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("HTTP error: {}", err))
    }
}

impl From<serde_json::Error> for CreditsError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid JSON: {}", err))
    }
}
