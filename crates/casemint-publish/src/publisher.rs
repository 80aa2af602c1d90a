use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{error, info};

use crate::errors::PublishError;
use crate::store::ObjectStore;

/// Extension the publisher looks for when scanning a directory.
pub const ARCHIVE_EXTENSION: &str = "7z";

/// Remote destination for published archives.
#[derive(Debug, Clone)]
pub struct UploadTarget {
    pub bucket: String,
    pub key_prefix: String,
}

impl UploadTarget {
    /// Remote object key for a local archive filename.
    pub fn key_for(&self, filename: &str) -> String {
        format!("{}{}", self.key_prefix, filename)
    }
}

/// Most recently modified `.7z` file in `directory`, if any.
///
/// Modification-time ties are broken arbitrarily.
pub fn latest_archive(directory: &Path) -> Result<Option<PathBuf>, PublishError> {
    let mut latest: Option<(SystemTime, PathBuf)> = None;

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(ARCHIVE_EXTENSION)
        {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        if latest.as_ref().map(|(time, _)| modified > *time).unwrap_or(true) {
            latest = Some((modified, path));
        }
    }

    Ok(latest.map(|(_, path)| path))
}

/// Upload the newest archive in `directory` to `target`.
///
/// Returns `true` only on confirmed upload success. A directory with no
/// matching archive, or a failed upload, is logged and reported as
/// `false` rather than propagated; no upload call is made in the former
/// case.
pub async fn publish_latest(
    directory: &Path,
    target: &UploadTarget,
    store: &dyn ObjectStore,
) -> Result<bool, PublishError> {
    let Some(latest) = latest_archive(directory)? else {
        error!(directory = %directory.display(), "no archive files found");
        return Ok(false);
    };

    let filename = latest
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let key = target.key_for(filename);

    info!(
        file = %latest.display(),
        bucket = %target.bucket,
        key = %key,
        "uploading latest archive"
    );

    match store.put_object(&target.bucket, &key, &latest).await {
        Ok(()) => {
            info!(bucket = %target.bucket, key = %key, "upload succeeded");
            Ok(true)
        }
        Err(err) => {
            error!(error = %err, "upload failed");
            Ok(false)
        }
    }
}
