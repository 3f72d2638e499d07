//! Deploy-time check that the static file server has the page's media.

use crate::content::MediaReference;
use crate::error::{Result, SiteError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Map a site-relative URL path onto a file under `public_dir`.
pub fn resolve(public_dir: &Path, url_path: &str) -> PathBuf {
    public_dir.join(url_path.trim_start_matches('/'))
}

/// Verify the poster and video exist under `public_dir`.
///
/// Returns the resolved files on success, or [`SiteError::MissingAssets`]
/// naming every file that is absent.
pub async fn check_assets(public_dir: &Path, media: &MediaReference) -> Result<Vec<PathBuf>> {
    let mut present = Vec::new();
    let mut missing = Vec::new();

    for url_path in media.static_paths() {
        let file = resolve(public_dir, url_path);
        if tokio::fs::try_exists(&file).await? {
            debug!("Found {}", file.display());
            present.push(file);
        } else {
            warn!("Missing static asset {}", file.display());
            missing.push(file);
        }
    }

    if missing.is_empty() {
        Ok(present)
    } else {
        Err(SiteError::MissingAssets(missing))
    }
}
