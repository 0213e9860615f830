/*!
 * End-to-end rename workflow tests: controller + catalog double + scripted
 * chooser over a real temporary directory.
 */

use anyhow::Result;
use std::path::PathBuf;

use shownamer::app_controller::{Controller, RunOptions};

use crate::common;
use crate::common::mock_catalog::MockCatalog;
use crate::common::mock_chooser::ScriptedChooser;

fn run_options(directory: PathBuf, dry_run: bool) -> RunOptions {
    RunOptions {
        series_query: "Show".to_string(),
        directory,
        dry_run,
        series_id: None,
        no_cache: true,
    }
}

fn show_catalog() -> MockCatalog {
    MockCatalog::single_series(
        42,
        "Show",
        vec![
            common::episode(1, 1, 1, "Pilot"),
            common::episode(2, 1, 2, "Second"),
        ],
    )
}

/// A dry run reports the plan but leaves every file in place
#[tokio::test]
async fn test_workflow_dryRun_shouldNotTouchFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let originals = common::create_video_files(&dir, &["Pilot.mkv", "Second.mkv"])?;

    let controller = Controller::new_for_test()?;
    controller
        .run_with(
            &show_catalog(),
            &ScriptedChooser::unreachable(),
            run_options(dir.clone(), true),
        )
        .await?;

    for original in &originals {
        assert!(original.exists(), "dry run must not move {:?}", original);
    }
    assert!(!dir.join("Show S01E01 Pilot.mkv").exists());

    Ok(())
}

/// A real run renames matched files to the canonical convention
#[tokio::test]
async fn test_workflow_realRun_shouldRenameMatchedFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_video_files(&dir, &["Pilot.mkv", "Second.mkv"])?;

    let controller = Controller::new_for_test()?;
    controller
        .run_with(
            &show_catalog(),
            &ScriptedChooser::unreachable(),
            run_options(dir.clone(), false),
        )
        .await?;

    assert!(dir.join("Show S01E01 Pilot.mkv").exists());
    assert!(dir.join("Show S01E02 Second.mkv").exists());
    assert!(!dir.join("Pilot.mkv").exists());
    assert!(!dir.join("Second.mkv").exists());

    Ok(())
}

/// A missing target directory aborts before any matching happens
#[tokio::test]
async fn test_workflow_withMissingDirectory_shouldFail() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let result = controller
        .run_with(
            &show_catalog(),
            &ScriptedChooser::unreachable(),
            run_options(PathBuf::from("/definitely/not/here/12345"), true),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// A directory without any video files aborts before any matching happens
#[tokio::test]
async fn test_workflow_withNoVideoFiles_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "notes.txt", "no videos here")?;

    let controller = Controller::new_for_test()?;
    let result = controller
        .run_with(
            &show_catalog(),
            &ScriptedChooser::unreachable(),
            run_options(dir, true),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// A catalog failure aborts the run and leaves the directory untouched
#[tokio::test]
async fn test_workflow_withFailingCatalog_shouldAbortWithoutRenames() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let originals = common::create_video_files(&dir, &["Pilot.mkv"])?;

    let controller = Controller::new_for_test()?;
    let result = controller
        .run_with(
            &MockCatalog::failing(),
            &ScriptedChooser::unreachable(),
            run_options(dir, false),
        )
        .await;

    assert!(result.is_err());
    assert!(originals[0].exists());

    Ok(())
}

/// Several series hits go through the chooser; declining aborts the run
#[tokio::test]
async fn test_workflow_withAmbiguousSeries_shouldAskAndAbortOnDecline() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_video_files(&dir, &["Pilot.mkv"])?;

    let mut catalog = show_catalog();
    catalog.add_series(43, "Show (2005)", Some("2005-03-26"));

    let chooser = ScriptedChooser::with_answers(&[None]);
    let controller = Controller::new_for_test()?;
    let result = controller
        .run_with(&catalog, &chooser, run_options(dir.clone(), false))
        .await;

    assert!(result.is_err());
    assert_eq!(chooser.times_asked(), 1);
    assert!(dir.join("Pilot.mkv").exists());

    Ok(())
}

/// An explicit series id bypasses the search entirely
#[tokio::test]
async fn test_workflow_withSeriesId_shouldSkipSearch() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_video_files(&dir, &["Pilot.mkv"])?;

    // search would be ambiguous, but the id short-circuits it
    let mut catalog = show_catalog();
    catalog.add_series(43, "Show (2005)", Some("2005-03-26"));

    let controller = Controller::new_for_test()?;
    let mut options = run_options(dir.clone(), false);
    options.series_id = Some(42);

    controller
        .run_with(&catalog, &ScriptedChooser::unreachable(), options)
        .await?;

    assert!(dir.join("Show S01E01 Pilot.mkv").exists());

    Ok(())
}

/// Files already following the convention are skipped, a fully renamed
/// directory is a no-op
#[tokio::test]
async fn test_workflow_withAlreadyRenamedFiles_shouldDoNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_video_files(
        &dir,
        &["Show S01E01 Pilot.mkv", "Show S01E02 Second.mkv"],
    )?;

    let controller = Controller::new_for_test()?;
    controller
        .run_with(
            &show_catalog(),
            &ScriptedChooser::unreachable(),
            run_options(dir.clone(), false),
        )
        .await?;

    assert!(dir.join("Show S01E01 Pilot.mkv").exists());
    assert!(dir.join("Show S01E02 Second.mkv").exists());

    Ok(())
}
