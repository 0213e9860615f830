/*!
 * The matching session: drives candidate filtering and disambiguation over
 * a whole episode list and plans the resulting renames.
 *
 * Episodes are processed strictly one at a time, in catalog order. A file
 * matched to an earlier episode is removed from the pool before the next
 * episode is filtered, so it can never be matched twice. The session itself
 * touches no file system state; applying the planned renames is the
 * caller's responsibility.
 */

use log::warn;
use std::path::PathBuf;

use crate::catalog::EpisodeRecord;
use crate::matching::candidates::find_candidates;
use crate::matching::resolver::{resolve, Chooser};
use crate::matching::MediaFile;

/// A single proposed rename, original path to new path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Current path of the matched file
    pub from: PathBuf,
    /// Proposed path under the canonical naming convention
    pub to: PathBuf,
}

/// Outcome of matching one episode against the current pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A file was matched and a rename was planned
    Matched(RenamePlan),
    /// The episode has no display name and was skipped entirely
    Skipped,
    /// No file could be resolved for the episode
    Unmatched,
}

/// Result of a completed matching run
#[derive(Debug, Default, Clone)]
pub struct MatchReport {
    /// Proposed renames for every matched file
    pub renames: Vec<RenamePlan>,
    /// Display labels of episodes with no resolved file
    pub unmatched_episodes: Vec<String>,
    /// Files left in the pool once all episodes were processed
    pub unmatched_files: Vec<PathBuf>,
}

impl MatchReport {
    /// Whether every episode and every file found a counterpart
    pub fn is_complete(&self) -> bool {
        self.unmatched_episodes.is_empty() && self.unmatched_files.is_empty()
    }
}

/// One matching run over a fixed episode list and file pool.
///
/// The session exclusively owns the mutable candidate pool; callers feed it
/// episodes in canonical order via [`MatchSession::step`] and collect the
/// report with [`MatchSession::finish`].
#[derive(Debug)]
pub struct MatchSession {
    series: String,
    pool: Vec<MediaFile>,
    renames: Vec<RenamePlan>,
    unmatched_episodes: Vec<String>,
}

impl MatchSession {
    /// Start a session over the discovered files for the given series
    pub fn new<S: Into<String>>(series: S, files: Vec<MediaFile>) -> Self {
        Self {
            series: series.into(),
            pool: files,
            renames: Vec::new(),
            unmatched_episodes: Vec::new(),
        }
    }

    /// Files still available for matching
    pub fn pool(&self) -> &[MediaFile] {
        &self.pool
    }

    /// Match one episode against the current pool.
    ///
    /// Exact candidates take precedence; the similar stage is only consulted
    /// when no exact candidate exists. Ties go through `chooser`, and a
    /// "none of the above" answer leaves the pool untouched and records the
    /// episode as unmatched.
    pub async fn step(&mut self, episode: &EpisodeRecord, chooser: &dyn Chooser) -> MatchOutcome {
        if episode.name.as_deref().is_none_or(str::is_empty) {
            warn!(
                "Skipping S{:02}E{:02}: episode has no name in the catalog",
                episode.season_number, episode.number
            );
            return MatchOutcome::Skipped;
        }

        let candidates = find_candidates(episode, &self.pool);
        let prompt = episode.display_label();

        let chosen = if !candidates.exact.is_empty() {
            resolve(&candidates.exact, &prompt, chooser).await
        } else if !candidates.similar.is_empty() {
            resolve(&candidates.similar, &prompt, chooser).await
        } else {
            None
        };

        match chosen {
            Some(file) => {
                let plan = RenamePlan {
                    to: self.target_path(&file, episode),
                    from: file.path.clone(),
                };
                self.pool.retain(|entry| entry.path != file.path);
                self.renames.push(plan.clone());
                MatchOutcome::Matched(plan)
            }
            None => {
                self.unmatched_episodes.push(prompt);
                MatchOutcome::Unmatched
            }
        }
    }

    /// Close the session, moving the remaining pool into the report
    pub fn finish(self) -> MatchReport {
        MatchReport {
            renames: self.renames,
            unmatched_episodes: self.unmatched_episodes,
            unmatched_files: self.pool.into_iter().map(|file| file.path).collect(),
        }
    }

    /// Run a whole episode list through a fresh session
    pub async fn run(
        series: &str,
        episodes: &[EpisodeRecord],
        files: Vec<MediaFile>,
        chooser: &dyn Chooser,
    ) -> MatchReport {
        let mut session = Self::new(series, files);
        for episode in episodes {
            session.step(episode, chooser).await;
        }
        session.finish()
    }

    fn target_path(&self, file: &MediaFile, episode: &EpisodeRecord) -> PathBuf {
        let mut name = canonical_name(&self.series, episode);
        if let Some(extension) = file.extension() {
            name.push('.');
            name.push_str(extension);
        }
        file.parent().join(name)
    }
}

/// Canonical base name for a matched episode:
/// `"{series} S{season:02}E{episode:02} {name}"`, restricted to
/// `[A-Za-z0-9 -]` so the result is a portable file name.
pub fn canonical_name(series: &str, episode: &EpisodeRecord) -> String {
    let raw = format!(
        "{} S{:02}E{:02} {}",
        series,
        episode.season_number,
        episode.number,
        episode.name.as_deref().unwrap_or_default()
    );

    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect()
}
