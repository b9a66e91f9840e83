//! Full-fidelity backup artifact: the verbatim entry collection plus the
//! settings record, round-trip exact in both directions.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::settings::Settings;

pub const BACKUP_VERSION: &str = "1.0";

/// On-disk artifact shape. Unknown fields are ignored on import and a
/// missing `version` is treated as compatible; `entries` is the only
/// required field.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackupArtifact {
    entries: Vec<TimeEntry>,
    #[serde(default)]
    settings: Option<Settings>,
    #[serde(default)]
    export_date: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

/// Serialize the collection and settings into the artifact document.
pub fn export_backup(entries: &[TimeEntry], settings: &Settings) -> AppResult<String> {
    let artifact = BackupArtifact {
        entries: entries.to_vec(),
        settings: Some(settings.clone()),
        export_date: Some(Local::now().to_rfc3339()),
        version: Some(BACKUP_VERSION.to_string()),
    };

    serde_json::to_string_pretty(&artifact)
        .map_err(|e| AppError::Export(format!("backup serialization failed: {e}")))
}

/// Parse an artifact. All-or-nothing: any structural failure (including an
/// `entries` field that is not a sequence of entry records) rejects the whole
/// document and the caller's state stays untouched. Settings come back only
/// when the artifact carries them.
pub fn import_backup(raw: &str) -> AppResult<(Vec<TimeEntry>, Option<Settings>)> {
    let artifact: BackupArtifact =
        serde_json::from_str(raw).map_err(|e| AppError::Import(e.to_string()))?;

    Ok((artifact.entries, artifact.settings))
}

/// Default artifact filename, export date embedded.
pub fn default_backup_name(date: NaiveDate) -> String {
    format!("backup-controle-horas-{}.json", date.format("%Y-%m-%d"))
}

/// Write the artifact to `path`; with `compress` the JSON is wrapped in a
/// zip archive next to it and the plain copy removed. Returns the final path.
pub fn write_backup(
    path: &Path,
    entries: &[TimeEntry],
    settings: &Settings,
    compress: bool,
) -> AppResult<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let document = export_backup(entries, settings)?;
    fs::write(path, document)?;

    if !compress {
        return Ok(path.to_path_buf());
    }

    let zip_path = compress_artifact(path)?;
    if zip_path != path {
        fs::remove_file(path)?;
    }
    Ok(zip_path)
}

/// Read an artifact from disk, accepting both plain JSON and the zip wrapper
/// produced by `write_backup --compress`.
pub fn read_backup(path: &Path) -> AppResult<(Vec<TimeEntry>, Option<Settings>)> {
    let raw = if path.extension().is_some_and(|ext| ext == "zip") {
        read_zipped_artifact(path)?
    } else {
        fs::read_to_string(path)?
    };

    import_backup(&raw)
}

fn compress_artifact(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup.json".to_string());

    let mut src = fs::File::open(path)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;
    std::io::copy(&mut src, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}

fn read_zipped_artifact(path: &Path) -> AppResult<String> {
    let file = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(std::io::Error::other)?;

    if archive.is_empty() {
        return Err(AppError::Import("empty backup archive".to_string()));
    }

    let mut entry = archive.by_index(0).map_err(std::io::Error::other)?;
    let mut raw = String::new();
    entry.read_to_string(&mut raw)?;
    Ok(raw)
}
