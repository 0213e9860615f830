/*!
 * Catalog double serving fixed series and episode data.
 *
 * Mirrors the behavior the real client guarantees: episodes come back in
 * canonical order, and failures surface as typed catalog errors.
 */

use async_trait::async_trait;
use std::collections::HashMap;

use shownamer::catalog::{sort_canonical, CatalogProvider, EpisodeRecord, SeriesId, SeriesSummary};
use shownamer::errors::CatalogError;

/// In-memory catalog provider for tests
#[derive(Debug, Default)]
pub struct MockCatalog {
    series: Vec<SeriesSummary>,
    episodes: HashMap<SeriesId, Vec<EpisodeRecord>>,
    failing: bool,
}

impl MockCatalog {
    /// Catalog with one series and its episodes
    pub fn single_series(id: SeriesId, name: &str, episodes: Vec<EpisodeRecord>) -> Self {
        let mut catalog = Self::default();
        catalog.series.push(SeriesSummary {
            id,
            name: name.to_string(),
            first_aired: None,
        });
        catalog.add_episodes(id, episodes);
        catalog
    }

    /// Catalog that fails every request
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Register an additional series hit
    pub fn add_series(&mut self, id: SeriesId, name: &str, first_aired: Option<&str>) {
        self.series.push(SeriesSummary {
            id,
            name: name.to_string(),
            first_aired: first_aired.map(str::to_string),
        });
    }

    /// Register the episodes of a series, sorted canonically like the
    /// real client does
    pub fn add_episodes(&mut self, id: SeriesId, mut episodes: Vec<EpisodeRecord>) {
        sort_canonical(&mut episodes);
        self.episodes.insert(id, episodes);
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn search_series(&self, name: &str) -> Result<Vec<SeriesSummary>, CatalogError> {
        if self.failing {
            return Err(CatalogError::RequestFailed("mock failure".to_string()));
        }

        Ok(self
            .series
            .iter()
            .filter(|series| series.name.to_lowercase().contains(&name.to_lowercase()))
            .cloned()
            .collect())
    }

    async fn series_episodes(&self, series: SeriesId) -> Result<Vec<EpisodeRecord>, CatalogError> {
        if self.failing {
            return Err(CatalogError::RequestFailed("mock failure".to_string()));
        }

        self.episodes
            .get(&series)
            .cloned()
            .ok_or(CatalogError::ApiError {
                status_code: 404,
                message: "unknown series".to_string(),
            })
    }
}
