use std::fs::File;
use std::path::{Path, PathBuf};

use sevenz_rust::{AesEncoderOptions, Password, SevenZArchiveEntry, SevenZMethod, SevenZWriter};
use tracing::info;

use crate::errors::ArchiveError;

/// Extension used for every archive casemint produces.
pub const ARCHIVE_EXTENSION: &str = "7z";

/// Root directory name entries are stored under inside the archive.
pub const ARCHIVE_ROOT: &str = "dummy";

const BASE_NAME: &str = "dummy_data";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Where and how to build one archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveOptions {
    /// Folder to compress. Must exist and be readable.
    pub source_dir: PathBuf,
    /// Where to save the archive. Created if missing.
    pub output_dir: PathBuf,
    /// Encrypts the archive contents when present.
    pub password: Option<String>,
    /// Prepended to the default archive base name when present.
    pub prefix: Option<String>,
}

/// Derive the archive filename for an optional prefix and a timestamp.
///
/// An absent or empty prefix yields the default base name. The prefix is
/// checked directly, never through an unrelated truthy expression.
pub fn archive_name(prefix: Option<&str>, timestamp: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => {
            format!("{prefix}_{BASE_NAME}_{timestamp}.{ARCHIVE_EXTENSION}")
        }
        _ => format!("{BASE_NAME}_{timestamp}.{ARCHIVE_EXTENSION}"),
    }
}

/// Compress a folder into a timestamped `.7z` archive under `output_dir`.
///
/// Every file under the source tree is stored below the fixed
/// [`ARCHIVE_ROOT`] entry name. The timestamp has second resolution, so
/// calls within the same second derive the same filename. I/O failures
/// propagate uncaught; a half-written archive is left in place.
pub fn compress(options: &ArchiveOptions) -> Result<PathBuf, ArchiveError> {
    std::fs::create_dir_all(&options.output_dir)?;

    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    let name = archive_name(options.prefix.as_deref(), &timestamp);
    let output_path = options.output_dir.join(&name);

    info!(
        source = %options.source_dir.display(),
        output = %output_path.display(),
        encrypted = options.password.is_some(),
        "creating archive"
    );

    let mut writer = SevenZWriter::create(&output_path)?;
    if let Some(password) = options.password.as_deref() {
        writer.set_content_methods(vec![
            AesEncoderOptions::new(Password::from(password)).into(),
            SevenZMethod::LZMA2.into(),
        ]);
    }
    push_dir(&mut writer, &options.source_dir, Path::new(ARCHIVE_ROOT))?;
    writer.finish()?;

    info!(output = %output_path.display(), "archive created");
    Ok(output_path)
}

fn push_dir(
    writer: &mut SevenZWriter<File>,
    dir: &Path,
    arc_dir: &Path,
) -> Result<(), ArchiveError> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let arc_path = arc_dir.join(entry.file_name());
        if path.is_dir() {
            push_dir(writer, &path, &arc_path)?;
        } else {
            // Archive entry names always use forward slashes.
            let name = arc_path.to_string_lossy().replace('\\', "/");
            let file = File::open(&path)?;
            writer.push_archive_entry(SevenZArchiveEntry::from_path(&path, name), Some(file))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_name_with_prefix() {
        assert_eq!(
            archive_name(Some("clean"), "20250101_120000"),
            "clean_dummy_data_20250101_120000.7z"
        );
    }

    #[test]
    fn archive_name_without_prefix() {
        assert_eq!(
            archive_name(None, "20250101_120000"),
            "dummy_data_20250101_120000.7z"
        );
    }

    #[test]
    fn archive_name_treats_empty_prefix_as_absent() {
        assert_eq!(
            archive_name(Some(""), "20250101_120000"),
            "dummy_data_20250101_120000.7z"
        );
    }
}
