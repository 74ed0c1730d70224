use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use engine::stats::GameStats;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("stats file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("stats file is not valid json: {0}")]
    Format(#[from] serde_json::Error),
}

fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("io.github", "rps", "rps-game").map(|p| p.config_dir().to_path_buf())
}

fn ensure_config_dir() -> io::Result<PathBuf> {
    if let Some(dir) = project_config_dir() {
        fs::create_dir_all(&dir)?;
        Ok(dir)
    } else {
        // No home directory; keep the file next to the binary instead
        std::env::current_dir()
    }
}

fn stats_path() -> io::Result<PathBuf> {
    let mut path = ensure_config_dir()?;
    path.push("stats.json");
    Ok(path)
}

fn read_stats(path: &Path) -> Result<GameStats, StorageError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn write_stats(path: &Path, stats: &GameStats) -> Result<(), StorageError> {
    let text = serde_json::to_string_pretty(stats)?;
    fs::write(path, text)?;
    Ok(())
}

/// Load the persisted record, degrading to zeroed stats when the file
/// is missing or unreadable. Corrupt data never reaches the engine.
pub fn load_stats() -> GameStats {
    let path = match stats_path() {
        Ok(path) => path,
        Err(error) => {
            warn!(%error, "no usable stats location, starting fresh");
            return GameStats::default();
        }
    };
    if !path.is_file() {
        return GameStats::default();
    }
    match read_stats(&path) {
        Ok(stats) => stats,
        Err(error) => {
            warn!(%error, "could not read saved stats, starting fresh");
            GameStats::default()
        }
    }
}

/// Overwrite the persisted record; called after every completed round
/// and on explicit reset.
pub fn save_stats(stats: &GameStats) -> Result<(), StorageError> {
    let path = stats_path()?;
    write_stats(&path, stats)
}
