use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

use crate::app_config::Config;
use crate::catalog::{CatalogProvider, ResponseCache, SeriesId, SeriesSummary, TvdbClient};
use crate::errors::CatalogError;
use crate::file_utils::FileManager;
use crate::matching::{Chooser, MatchOutcome, MatchReport, MatchSession, MediaFile};
use crate::user_prompt::ConsoleChooser;

// @module: Application controller for episode matching and renaming

/// Matches base names that already follow the `"... SxxEyy ..."` convention
static RENAMED_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.+ S\d{2}E\d{2}( |$)").unwrap());

/// Options for a single rename run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Series name to look up in the catalog
    pub series_query: String,
    /// Directory containing the video files
    pub directory: PathBuf,
    /// When set, renames are reported but never performed
    pub dry_run: bool,
    /// Explicit catalog series id, bypassing the search
    pub series_id: Option<SeriesId>,
    /// Disable the on-disk response cache for this run
    pub no_cache: bool,
}

/// Main application controller for episode renaming
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run the rename workflow with the real catalog client and console prompt
    pub async fn run(&self, options: RunOptions) -> Result<()> {
        let cache = if self.config.catalog.use_cache && !options.no_cache {
            ResponseCache::open_default()
        } else {
            None
        };

        let provider = TvdbClient::new(&self.config.catalog, cache)?;
        let chooser = ConsoleChooser::new();
        self.run_with(&provider, &chooser, options).await
    }

    /// Run the rename workflow against explicit collaborators.
    ///
    /// The split from [`Controller::run`] keeps the whole workflow drivable
    /// headlessly with a scripted chooser and a catalog double.
    pub async fn run_with(
        &self,
        provider: &dyn CatalogProvider,
        chooser: &dyn Chooser,
        options: RunOptions,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(&options.directory) {
            return Err(anyhow!(
                "Target directory does not exist: {:?}",
                options.directory
            ));
        }

        let paths =
            FileManager::find_video_files(&options.directory, &self.config.video_extensions)?;
        if paths.is_empty() {
            return Err(anyhow!(
                "No video files found in {:?}",
                options.directory
            ));
        }
        info!("Found {} video files", paths.len());

        let series = self.resolve_series(provider, chooser, &options).await?;
        let episodes = provider
            .series_episodes(series.id)
            .await
            .context("Failed to fetch the episode list")?;
        info!(
            "Matching against {} episodes of '{}'",
            episodes.len(),
            series.name
        );

        let files: Vec<MediaFile> = paths
            .into_iter()
            .map(MediaFile::new)
            .filter(|file| {
                if RENAMED_PATTERN.is_match(&file.base_name) {
                    debug!("Skipping already renamed file: {}", file.file_name());
                    false
                } else {
                    true
                }
            })
            .collect();

        if files.is_empty() {
            info!("Every video file already follows the naming convention, nothing to do");
            return Ok(());
        }

        let progress_bar = ProgressBar::new(episodes.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner} [{bar:40}] {pos}/{len} episodes {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        let mut session = MatchSession::new(series.name.as_str(), files);
        for episode in &episodes {
            progress_bar.set_message(episode.display_label());
            match session.step(episode, chooser).await {
                MatchOutcome::Matched(plan) => {
                    debug!("Matched {:?} -> {:?}", plan.from, plan.to)
                }
                MatchOutcome::Skipped => {}
                MatchOutcome::Unmatched => {
                    debug!("No file matched {}", episode.display_label())
                }
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        let report = session.finish();
        self.print_report(&report);

        if options.dry_run {
            info!(
                "Dry run: {} renames planned, no files were touched",
                report.renames.len()
            );
        } else {
            let renamed = self.apply_renames(&report)?;
            info!("Renamed {} files", renamed);
        }

        info!(
            "Finished in {:.1}s",
            start_time.elapsed().as_secs_f32()
        );
        Ok(())
    }

    /// Resolve the series to match against, asking the user when the
    /// catalog returns several hits
    async fn resolve_series(
        &self,
        provider: &dyn CatalogProvider,
        chooser: &dyn Chooser,
        options: &RunOptions,
    ) -> Result<SeriesSummary> {
        if let Some(id) = options.series_id {
            return Ok(SeriesSummary {
                id,
                name: options.series_query.clone(),
                first_aired: None,
            });
        }

        let hits = provider
            .search_series(&options.series_query)
            .await
            .context("Series search failed")?;

        match hits.as_slice() {
            [] => Err(CatalogError::SeriesNotFound(options.series_query.clone()).into()),
            [only] => Ok(only.clone()),
            _ => {
                let labels: Vec<String> = hits
                    .iter()
                    .map(|series| match &series.first_aired {
                        Some(aired) => format!("{} (first aired {})", series.name, aired),
                        None => series.name.clone(),
                    })
                    .collect();

                let selected = chooser
                    .choose(&format!("series '{}'", options.series_query), &labels)
                    .await
                    .ok_or_else(|| anyhow!("No series selected, aborting"))?;

                hits.get(selected)
                    .cloned()
                    .ok_or_else(|| anyhow!("Series selection out of range"))
            }
        }
    }

    fn print_report(&self, report: &MatchReport) {
        for plan in &report.renames {
            info!(
                "{:?} -> {:?}",
                plan.from.file_name().unwrap_or_default(),
                plan.to.file_name().unwrap_or_default()
            );
        }

        for episode in &report.unmatched_episodes {
            warn!("No file found for {}", episode);
        }

        for file in &report.unmatched_files {
            warn!("No episode found for {:?}", file.file_name().unwrap_or_default());
        }

        if report.is_complete() {
            info!("Every episode and every file found a counterpart");
        }
    }

    /// Perform the planned renames, skipping any whose target already exists
    fn apply_renames(&self, report: &MatchReport) -> Result<usize> {
        let mut renamed = 0;

        for plan in &report.renames {
            if plan.to.exists() {
                warn!("Skipping rename, target already exists: {:?}", plan.to);
                continue;
            }

            FileManager::rename_file(&plan.from, &plan.to)?;
            renamed += 1;
        }

        Ok(renamed)
    }
}
