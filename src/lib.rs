/*!
 * # shownamer
 *
 * A Rust library for matching local video files against canonical episode
 * metadata and renaming them to a standard convention.
 *
 * ## Features
 *
 * - Fuzzy file-to-episode matching: exact normalized-name matching first,
 *   bounded edit distance and substring containment as fallback
 * - Interactive disambiguation when several files tie for one episode
 * - TVDB-style catalog client with token login, paginated episode
 *   retrieval and on-disk response caching
 * - Dry-run mode that plans renames without touching the file system
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `matching`: The matching engine:
 *   - `matching::normalize`: comparison-key normalization
 *   - `matching::distance`: edit-distance kernel and similarity predicate
 *   - `matching::candidates`: per-episode candidate filtering
 *   - `matching::resolver`: disambiguation through the `Chooser` capability
 *   - `matching::engine`: the matching session and rename planning
 * - `catalog`: Episode catalog access (`TvdbClient`, response cache)
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `user_prompt`: Console chooser implementation
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod catalog;
pub mod errors;
pub mod file_utils;
pub mod matching;
pub mod user_prompt;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunOptions};
pub use catalog::{CatalogProvider, EpisodeRecord, SeriesSummary, TvdbClient};
pub use errors::{AppError, CatalogError};
pub use matching::{Chooser, MatchReport, MatchSession, MediaFile, RenamePlan};
