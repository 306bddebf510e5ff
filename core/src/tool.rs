//! Fetches the latency-tester binary into a private temp directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::fetch;

/// A downloaded tool and the scratch directory holding it.
///
/// The directory is removed when the guard drops unless `keep` was
/// requested, so a finished or aborted pipeline leaves no stray binary
/// behind.
pub struct ToolDir {
    dir: PathBuf,
    binary: PathBuf,
    keep: bool,
}

impl ToolDir {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Drop for ToolDir {
    fn drop(&mut self) {
        if self.keep {
            debug!("Keeping tool directory {}", self.dir.display());
            return;
        }
        if let Err(e) = std::fs::remove_dir_all(&self.dir) {
            warn!("Failed to remove tool directory {}: {e}", self.dir.display());
        }
    }
}

/// Downloads the tool at `url` into a fresh process-unique directory
/// under the system temp dir and marks it executable.
pub async fn fetch_tool(client: &reqwest::Client, url: &str, keep: bool) -> Result<ToolDir> {
    let dir = std::env::temp_dir().join(format!("edgesift-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("failed to create tool directory {}", dir.display()))?;

    let name = url.rsplit('/').next().filter(|n| !n.is_empty()).unwrap_or("tool");
    let binary = dir.join(name);

    fetch::download_file(client, url, &binary).await?;
    mark_executable(&binary)?;

    Ok(ToolDir { dir, binary, keep })
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms)
        .with_context(|| format!("failed to mark {} executable", path.display()))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}
