/*!
 * File-to-episode matching engine.
 *
 * This module contains the core matching logic that pairs locally discovered
 * video files with canonical episode records:
 * - `normalize`: reduction of titles and file names to comparison keys
 * - `distance`: edit-distance kernel and the similarity predicate
 * - `candidates`: per-episode exact and similar candidate filtering
 * - `resolver`: tie-breaking through an external `Chooser` capability
 * - `engine`: the per-run matching session and rename planning
 */

use std::path::{Path, PathBuf};

pub mod candidates;
pub mod distance;
pub mod engine;
pub mod normalize;
pub mod resolver;

pub use candidates::{find_candidates, Candidates};
pub use distance::{is_similar, levenshtein, MAX_EDIT_DISTANCE};
pub use engine::{MatchOutcome, MatchReport, MatchSession, RenamePlan};
pub use normalize::normalize;
pub use resolver::{resolve, Chooser};

/// A locally discovered video file under consideration for matching.
///
/// Immutable once created; the matching session only ever moves files
/// out of its candidate pool, it never alters them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// Absolute path of the file
    pub path: PathBuf,
    /// File name without its extension
    pub base_name: String,
}

impl MediaFile {
    /// Create a media file entry from its path, deriving the base name
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let base_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self { path, base_name }
    }

    /// File name including the extension, for display purposes
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Extension of the file, if any
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }

    /// Directory containing the file
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}
