/*!
 * Per-episode candidate filtering.
 *
 * For one episode record and the current file pool this produces the ordered
 * exact-match set and, only when that set is empty, the ordered similar-match
 * set (bounded edit distance or substring containment).
 */

use crate::catalog::EpisodeRecord;
use crate::matching::distance::{is_similar, MAX_EDIT_DISTANCE};
use crate::matching::normalize::normalize;
use crate::matching::MediaFile;

/// Candidate files for a single episode at one matching stage.
///
/// Both sets preserve pool order and never contain duplicates. When `exact`
/// is non-empty, `similar` is left empty: an exact match always takes
/// precedence, regardless of how many files tie for it.
#[derive(Debug, Default, Clone)]
pub struct Candidates {
    /// Files whose normalized base name equals the normalized episode name
    pub exact: Vec<MediaFile>,
    /// Fallback matches, computed only when no exact match exists
    pub similar: Vec<MediaFile>,
}

impl Candidates {
    /// Whether neither stage produced any candidate
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.similar.is_empty()
    }
}

/// Collect the candidate files for `episode` out of the current `pool`.
///
/// An episode without a display name yields no candidates; the caller is
/// expected to skip such episodes before ever proposing a match.
pub fn find_candidates(episode: &EpisodeRecord, pool: &[MediaFile]) -> Candidates {
    let key = match episode.name.as_deref() {
        Some(name) if !name.is_empty() => normalize(name),
        _ => return Candidates::default(),
    };

    let exact: Vec<MediaFile> = pool
        .iter()
        .filter(|file| normalize(&file.base_name) == key)
        .cloned()
        .collect();

    if !exact.is_empty() {
        return Candidates {
            exact,
            similar: Vec::new(),
        };
    }

    let similar = pool
        .iter()
        .filter(|file| {
            let name = normalize(&file.base_name);
            is_similar(&key, &name, MAX_EDIT_DISTANCE)
                || key.contains(&name)
                || name.contains(&key)
        })
        .cloned()
        .collect();

    Candidates {
        exact: Vec::new(),
        similar,
    }
}
