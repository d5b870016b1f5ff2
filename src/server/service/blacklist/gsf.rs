use std::time::Duration;

use chrono::Utc;
use dioxus_logger::tracing;
use futures::stream::{FuturesUnordered, StreamExt};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    model::blacklist::GsfStatusDto,
    server::{
        data::blacklist::gsf::GsfRepository,
        error::{blacklist::BlacklistError, Error},
        model::db::EveCharacterModel,
        util::time::gsf_cache_expired,
    },
};

/// Status reported when a lookup failed or the GSF service is not configured.
pub const GSF_STATUS_UNKNOWN: &str = "UNKNOWN";

/// Statuses which don't flag a character.
pub const GSF_CLEAN_STATUSES: [&str; 2] = ["NOT FOUND", "CLEARED"];

/// Upper bound for a single lookup, a review waits on these
const GSF_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const MAX_CONCURRENT_GSF_LOOKUPS: usize = 10;

#[derive(Deserialize)]
struct GsfLookupEntry {
    output: String,
}

/// HTTP client for the GSF blacklist lookup service
#[derive(Clone)]
pub struct GsfClient {
    client: reqwest::Client,
    base_url: String,
}

impl GsfClient {
    /// Creates a client for `base_url`, lookups are sent to `{base_url}{character_id}`
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(GSF_REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Looks up a character, the service answers `[{"output": "<STATUS>"}]`
    pub async fn fetch_status(&self, character_id: i64) -> Result<String, Error> {
        let url = format!("{}{}", self.base_url, character_id);

        let entries: Vec<GsfLookupEntry> = self
            .client
            .post(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        entries
            .into_iter()
            .next()
            .map(|entry| entry.output)
            .ok_or_else(|| {
                BlacklistError::UnexpectedGsfResponse(format!(
                    "empty result for character ID {}",
                    character_id
                ))
                .into()
            })
    }
}

/// Whether a GSF status flags the character for a closer look
pub fn is_flagged(status: &str) -> bool {
    !GSF_CLEAN_STATUSES.contains(&status)
}

pub struct GsfService<'a> {
    db: &'a DatabaseConnection,
    client: Option<&'a GsfClient>,
}

impl<'a> GsfService<'a> {
    pub fn new(db: &'a DatabaseConnection, client: Option<&'a GsfClient>) -> Self {
        Self { db, client }
    }

    /// GSF status of a character, served from the 24 hour cache when possible
    ///
    /// Lookups are attempted once, a failure is reported rather than retried.
    ///
    /// # Returns
    /// - `Ok(status)` - Cached or freshly fetched status
    /// - `Ok("UNKNOWN")` - Service not configured or lookup failed (logged)
    /// - `Err(Error::DbErr)` - Reading or writing the cache failed
    pub async fn get_status(&self, character: &EveCharacterModel) -> Result<String, Error> {
        let Some(client) = self.client else {
            return Ok(GSF_STATUS_UNKNOWN.to_string());
        };

        let gsf_repo = GsfRepository::new(self.db);

        if let Some(cached) = gsf_repo.get_by_character(character.id).await? {
            if !gsf_cache_expired(cached.last_update_time, Utc::now()) {
                return Ok(cached.status);
            }
        }

        tracing::debug!(
            "Refreshing GSF blacklist status for character ID {}",
            character.character_id
        );

        let character_id = character.character_id;

        let status = match client.fetch_status(character_id).await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!(
                    "GSF blacklist lookup failed for character ID {}: {}",
                    character_id,
                    e
                );

                return Ok(GSF_STATUS_UNKNOWN.to_string());
            }
        };

        let cached = gsf_repo.upsert(character.id, status).await?;

        Ok(cached.status)
    }

    /// Statuses for each character in the given order, looked up concurrently
    pub async fn get_statuses(
        &self,
        characters: &[EveCharacterModel],
    ) -> Result<Vec<GsfStatusDto>, Error> {
        let mut fetched: Vec<(usize, String)> = Vec::with_capacity(characters.len());

        for (chunk_index, chunk) in characters.chunks(MAX_CONCURRENT_GSF_LOOKUPS).enumerate() {
            let mut futures = FuturesUnordered::new();

            for (offset, character) in chunk.iter().enumerate() {
                let index = chunk_index * MAX_CONCURRENT_GSF_LOOKUPS + offset;
                let future = async move {
                    let status = self.get_status(character).await?;
                    Ok::<_, Error>((index, status))
                };
                futures.push(future);
            }

            while let Some(result) = futures.next().await {
                fetched.push(result?);
            }
        }

        fetched.sort_unstable_by_key(|(index, _)| *index);

        Ok(characters
            .iter()
            .zip(fetched)
            .map(|(character, (_, status))| GsfStatusDto {
                character_name: character.name.clone(),
                status,
            })
            .collect())
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }
}
