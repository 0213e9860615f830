/*!
 * Common test utilities for the shownamer test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use shownamer::catalog::EpisodeRecord;
use shownamer::matching::MediaFile;

// Re-export the scripted test doubles
pub mod mock_catalog;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a set of empty video files and returns their paths
pub fn create_video_files(dir: &PathBuf, names: &[&str]) -> Result<Vec<PathBuf>> {
    names
        .iter()
        .map(|name| create_test_file(dir, name, ""))
        .collect()
}

/// Builds an episode record with a name
pub fn episode(id: u64, season: u32, number: u32, name: &str) -> EpisodeRecord {
    EpisodeRecord {
        id,
        season_number: season,
        number,
        name: Some(name.to_string()),
    }
}

/// Builds an episode record without a name
pub fn unnamed_episode(id: u64, season: u32, number: u32) -> EpisodeRecord {
    EpisodeRecord {
        id,
        season_number: season,
        number,
        name: None,
    }
}

/// Builds an in-memory media file pool from base names
pub fn media_pool(names: &[&str]) -> Vec<MediaFile> {
    names
        .iter()
        .map(|name| MediaFile::new(format!("/videos/{}.mkv", name)))
        .collect()
}
