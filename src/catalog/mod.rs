/*!
 * Episode catalog abstraction.
 *
 * The matching engine consumes episode records from a remote catalog
 * service. The `CatalogProvider` trait is the seam: `TvdbClient` implements
 * it over a TVDB-style REST API, and tests drive the engine with a scripted
 * double instead.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::CatalogError;

pub mod cache;
pub mod tvdb;

pub use cache::ResponseCache;
pub use tvdb::TvdbClient;

/// Identifier of a series in the catalog service
pub type SeriesId = u64;

/// A single canonical episode record as supplied by the catalog.
///
/// `name` is nullable: the catalog may know an episode exists before it has
/// a title, and such episodes are skipped by the matcher rather than
/// matched or reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Stable catalog id of the episode
    pub id: u64,
    /// Season the episode aired in; season 0 holds specials
    pub season_number: u32,
    /// Episode number within the season
    pub number: u32,
    /// Display name, if the catalog has one
    pub name: Option<String>,
}

impl EpisodeRecord {
    /// Human-readable label, e.g. `S01E02 Second Episode`
    pub fn display_label(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => {
                format!("S{:02}E{:02} {}", self.season_number, self.number, name)
            }
            _ => format!("S{:02}E{:02}", self.season_number, self.number),
        }
    }
}

/// A series search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Stable catalog id of the series
    pub id: SeriesId,
    /// Primary name of the series
    pub name: String,
    /// First air date as reported by the catalog, if known
    pub first_aired: Option<String>,
}

/// Sort episodes into canonical matching order: season ascending with
/// season 0 (specials) last, episode number ascending within a season.
pub fn sort_canonical(episodes: &mut [EpisodeRecord]) {
    episodes.sort_by_key(|episode| {
        (
            episode.season_number == 0,
            episode.season_number,
            episode.number,
        )
    });
}

/// Read access to a remote episode catalog
#[async_trait]
pub trait CatalogProvider: Send + Sync + Debug {
    /// Search the catalog for series matching `name`
    async fn search_series(&self, name: &str) -> Result<Vec<SeriesSummary>, CatalogError>;

    /// Fetch every episode of a series, already in canonical order
    async fn series_episodes(&self, series: SeriesId) -> Result<Vec<EpisodeRecord>, CatalogError>;
}
