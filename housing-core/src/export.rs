//! Writing the rendered document to disk

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `html` to `out_dir/index.html`, creating the directory if needed.
pub async fn write_index(out_dir: &Path, html: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(out_dir).await?;
    let path = out_dir.join("index.html");
    tokio::fs::write(&path, html).await?;
    info!("Wrote {} ({} bytes)", path.display(), html.len());
    Ok(path)
}
