//! Flat-file persistence for comic records.
//!
//! Each record is one pretty-printed JSON file named `<id>.json` inside the
//! storage directory. Saves go through write-temp-then-rename, so a partial
//! write never replaces a valid file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::ComicRecord;

/// Default storage directory, created on first use.
pub const DEFAULT_STORAGE_DIR: &str = "saved_prompts";

/// Store failures, distinguishable so callers can pick appropriate messaging.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No file exists for the requested id.
    #[error("prompt '{0}' not found")]
    NotFound(String),
    /// A file exists but does not parse into the expected shape.
    #[error("prompt '{id}' is corrupt: {source}")]
    Corrupt {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Lightweight listing metadata, extracted without full deserialization.
#[derive(Debug, Clone)]
pub struct PromptSummary {
    pub id: String,
    pub core_concept: String,
    pub created_at: Option<DateTime<Utc>>,
    pub is_approved: bool,
}

/// Partial shape read during listing. Unknown fields are ignored and every
/// field is optional so near-valid files still produce a summary.
#[derive(Debug, Deserialize)]
struct RawSummary {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    core_concept: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    is_approved: bool,
}

/// Key-value store for comic records, one JSON file per id.
///
/// Explicitly constructed and passed by reference to whatever layer needs
/// it; there is no ambient singleton.
#[derive(Debug, Clone)]
pub struct PromptStore {
    dir: PathBuf,
}

impl PromptStore {
    /// Creates a store rooted at `dir`. The directory itself is created
    /// lazily on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the storage directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Persists a record, assigning an id on first save.
    ///
    /// `updated_at` is refreshed on every save; `created_at` is never
    /// touched. An existing file for the same id is overwritten atomically.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] when the directory or file cannot be
    /// written.
    pub fn save(&self, record: &mut ComicRecord) -> Result<String, StoreError> {
        fs::create_dir_all(&self.dir)?;

        let id = record
            .id
            .get_or_insert_with(|| uuid::Uuid::new_v4().to_string())
            .clone();
        record.updated_at = Some(Utc::now());

        let json = serde_json::to_string_pretty(record).map_err(|source| StoreError::Corrupt {
            id: id.clone(),
            source,
        })?;

        let path = self.record_path(&id);
        let temp_path = path.with_extension("json.tmp");
        let mut temp = fs::File::create(&temp_path)?;
        temp.write_all(json.as_bytes())?;
        temp.sync_all()?;
        fs::rename(&temp_path, &path)?;

        debug!(id = %id, path = %path.display(), "saved comic prompt");
        Ok(id)
    }

    /// Loads a record by id.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when no file exists for the id;
    /// [`StoreError::Corrupt`] when the file exists but fails to parse.
    pub fn load(&self, id: &str) -> Result<ComicRecord, StoreError> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let contents = fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            id: id.to_string(),
            source,
        })
    }

    /// Lists metadata for every persisted record, newest first.
    ///
    /// Files that fail to parse are skipped with a warning rather than
    /// aborting the scan; records with missing or unparseable `created_at`
    /// sort last.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] only when the directory itself cannot be
    /// read.
    pub fn list(&self) -> Result<Vec<PromptSummary>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            let Ok(contents) = fs::read_to_string(&path) else {
                warn!(path = %path.display(), "skipping unreadable prompt file");
                continue;
            };
            let raw: RawSummary = match serde_json::from_str(&contents) {
                Ok(raw) => raw,
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping unparseable prompt file");
                    continue;
                }
            };

            // Fall back to the filename stem when the id field is absent.
            let id = raw.id.unwrap_or_else(|| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default()
            });

            summaries.push(PromptSummary {
                id,
                core_concept: raw.core_concept.unwrap_or_else(|| "Untitled".to_string()),
                created_at: raw
                    .created_at
                    .as_deref()
                    .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
                    .map(|ts| ts.with_timezone(&Utc)),
                is_approved: raw.is_approved,
            });
        }

        // Newest first; None timestamps sort last.
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    /// Deletes a record's file, returning whether one was actually removed.
    ///
    /// Deleting an absent id is not an error.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] when the file exists but cannot be
    /// removed.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        debug!(id = %id, "deleted comic prompt");
        Ok(true)
    }
}
