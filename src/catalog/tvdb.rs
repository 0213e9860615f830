/*!
 * TVDB-style catalog client.
 *
 * Implements `CatalogProvider` over a REST API: API-key login yielding a
 * bearer token that is reused for the rest of the run, series search, and
 * paginated episode retrieval. Successful episode fetches are mirrored to
 * the on-disk response cache.
 */

use log::{debug, info};
use parking_lot::RwLock;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::app_config::CatalogConfig;
use crate::catalog::{
    sort_canonical, CatalogProvider, EpisodeRecord, ResponseCache, SeriesId, SeriesSummary,
};
use crate::errors::CatalogError;

use async_trait::async_trait;

/// Login request sent to the catalog
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    apikey: &'a str,
}

/// Login response carrying the bearer token
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

/// Series search response wrapper
#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Vec<SearchSeries>,
}

/// One series hit in a search response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSeries {
    id: u64,
    series_name: Option<String>,
    first_aired: Option<String>,
}

/// One page of an episode listing
#[derive(Debug, Serialize, Deserialize)]
struct EpisodePage {
    #[serde(default)]
    links: PageLinks,
    data: Vec<EpisodeData>,
}

/// Pagination links of an episode page
#[derive(Debug, Default, Serialize, Deserialize)]
struct PageLinks {
    next: Option<u32>,
}

/// Raw episode entry as returned by the catalog
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EpisodeData {
    id: u64,
    aired_season: Option<u32>,
    aired_episode_number: Option<u32>,
    episode_name: Option<String>,
}

/// Client for a TVDB-style episode catalog
#[derive(Debug)]
pub struct TvdbClient {
    /// Base URL of the catalog API
    base_url: String,
    /// API key used for login
    api_key: String,
    /// Preferred metadata language, sent as Accept-Language
    language: String,
    /// HTTP client for making requests
    client: Client,
    /// Bearer token obtained on first use and reused for the whole run
    token: RwLock<Option<String>>,
    /// Optional on-disk response cache
    cache: Option<ResponseCache>,
}

impl TvdbClient {
    /// Create a client from the catalog configuration
    pub fn new(config: &CatalogConfig, cache: Option<ResponseCache>) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            client,
            token: RwLock::new(None),
            cache,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| CatalogError::RequestFailed(format!("Invalid base URL: {}", e)))?;
        base.join(path)
            .map_err(|e| CatalogError::RequestFailed(format!("Invalid endpoint path: {}", e)))
    }

    /// Return the cached bearer token, logging in on first use
    async fn token(&self) -> Result<String, CatalogError> {
        if let Some(token) = self.token.read().clone() {
            return Ok(token);
        }

        let token = self.login().await?;
        *self.token.write() = Some(token.clone());
        Ok(token)
    }

    async fn login(&self) -> Result<String, CatalogError> {
        if self.api_key.is_empty() {
            return Err(CatalogError::AuthenticationError(
                "No API key configured".to_string(),
            ));
        }

        debug!("Logging in to catalog at {}", self.base_url);
        let response = self
            .client
            .post(self.endpoint("login")?)
            .json(&LoginRequest {
                apikey: &self.api_key,
            })
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        Ok(login.token)
    }

    async fn get_authorized(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<Response, CatalogError> {
        let token = self.token().await?;
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .header("Accept-Language", &self.language)
            .query(query)
            .send()
            .await?;

        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> Result<Response, CatalogError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED {
            Err(CatalogError::AuthenticationError(message))
        } else {
            Err(CatalogError::ApiError {
                status_code: status.as_u16(),
                message,
            })
        }
    }

    async fn fetch_episode_pages(&self, series: SeriesId) -> Result<Vec<EpisodeData>, CatalogError> {
        let url = self.endpoint(&format!("series/{}/episodes", series))?;
        let mut entries = Vec::new();
        let mut page = Some(1u32);

        while let Some(current) = page {
            debug!("Fetching episode page {} for series {}", current, series);
            let response = self
                .get_authorized(url.clone(), &[("page", current.to_string())])
                .await?;

            let body: EpisodePage = response
                .json()
                .await
                .map_err(|e| CatalogError::ParseError(e.to_string()))?;

            entries.extend(body.data);
            page = body.links.next;
        }

        Ok(entries)
    }
}

#[async_trait]
impl CatalogProvider for TvdbClient {
    async fn search_series(&self, name: &str) -> Result<Vec<SeriesSummary>, CatalogError> {
        let cache_key = ["search", name, self.language.as_str()];
        if let Some(cache) = &self.cache {
            if let Some(hits) = cache.load::<Vec<SeriesSummary>>(&cache_key) {
                return Ok(hits);
            }
        }

        let url = self.endpoint("search/series")?;
        let response = match self.get_authorized(url, &[("name", name.to_string())]).await {
            Ok(response) => response,
            // The catalog reports an empty result set as 404
            Err(CatalogError::ApiError { status_code: 404, .. }) => return Ok(Vec::new()),
            Err(error) => return Err(error),
        };

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let hits: Vec<SeriesSummary> = body
            .data
            .into_iter()
            .filter_map(|series| {
                Some(SeriesSummary {
                    id: series.id,
                    name: series.series_name?,
                    first_aired: series.first_aired,
                })
            })
            .collect();

        if let Some(cache) = &self.cache {
            cache.store(&cache_key, &hits);
        }

        Ok(hits)
    }

    async fn series_episodes(&self, series: SeriesId) -> Result<Vec<EpisodeRecord>, CatalogError> {
        let id = series.to_string();
        let cache_key = ["episodes", id.as_str(), self.language.as_str()];
        if let Some(cache) = &self.cache {
            if let Some(episodes) = cache.load::<Vec<EpisodeRecord>>(&cache_key) {
                return Ok(episodes);
            }
        }

        let entries = self.fetch_episode_pages(series).await?;
        let mut episodes: Vec<EpisodeRecord> = entries
            .into_iter()
            .filter_map(|entry| {
                let (Some(season_number), Some(number)) =
                    (entry.aired_season, entry.aired_episode_number)
                else {
                    debug!("Dropping episode {} with no air slot", entry.id);
                    return None;
                };

                Some(EpisodeRecord {
                    id: entry.id,
                    season_number,
                    number,
                    name: entry.episode_name,
                })
            })
            .collect();

        sort_canonical(&mut episodes);
        info!(
            "Fetched {} episodes for series {} from the catalog",
            episodes.len(),
            series
        );

        if let Some(cache) = &self.cache {
            cache.store(&cache_key, &episodes);
        }

        Ok(episodes)
    }
}
