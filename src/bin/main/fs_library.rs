//! Filesystem-backed poem library.
//!
//! One JSON object per poem at `<poems_dir>/<id>.json` with required string
//! fields `title` and `body`; the matching photo lives at
//! `<photos_dir>/<id>.jpg`. Every per-file failure maps onto a recoverable
//! [`PoemError`] so the kiosk can skip and move on.

use std::fs;
use std::path::PathBuf;

use log::warn;
use serde_json::Value;
use versekiosk_core::content::{Poem, PoemError, PoemLibrary};

pub struct FsLibrary {
    poems_dir: PathBuf,
    photos_dir: PathBuf,
}

impl FsLibrary {
    pub fn new(poems_dir: PathBuf, photos_dir: PathBuf) -> Self {
        Self {
            poems_dir,
            photos_dir,
        }
    }

    fn poem_path(&self, id: &str) -> PathBuf {
        self.poems_dir.join(format!("{id}.json"))
    }
}

impl PoemLibrary for FsLibrary {
    fn list_ids(&mut self) -> Vec<String> {
        let entries = match fs::read_dir(&self.poems_dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    "cannot list poems dir {}: {err}",
                    self.poems_dir.display()
                );
                return Vec::new();
            }
        };

        let mut ids = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if id.is_empty() {
                continue;
            }

            let photo = self.photos_dir.join(format!("{id}.jpg"));
            if !photo.is_file() {
                // Photo-less poems stay in rotation; the renderer falls
                // back to a plain background for them.
                warn!("missing photo: {}", photo.display());
            }
            ids.push(id.to_string());
        }
        ids
    }

    fn load(&mut self, id: &str) -> Result<Poem, PoemError> {
        let path = self.poem_path(id);
        let raw = fs::read_to_string(&path).map_err(|err| PoemError::Unreadable {
            id: id.to_string(),
            reason: err.to_string(),
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|err| PoemError::Malformed {
            id: id.to_string(),
            reason: err.to_string(),
        })?;

        let Value::Object(fields) = value else {
            return Err(PoemError::Schema {
                id: id.to_string(),
                reason: "root must be an object".to_string(),
            });
        };
        match (
            fields.get("title").and_then(Value::as_str),
            fields.get("body").and_then(Value::as_str),
        ) {
            (Some(title), Some(body)) => Ok(Poem {
                title: title.to_string(),
                body: body.to_string(),
            }),
            _ => Err(PoemError::Schema {
                id: id.to_string(),
                reason: "title/body must be strings".to_string(),
            }),
        }
    }
}
