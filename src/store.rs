//! Write-through persistence of the last-entered birthday, so a rerun
//! repopulates the fields without retyping. Last-write-wins; a missing or
//! unreadable file just behaves as an empty one.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::form::DateFields;

pub const STORE_FILE: &str = "birthday.json";

#[derive(Serialize, Deserialize)]
struct StoredBirthday {
    year: i32,
    month: u32,
    day: u32,
}

pub struct BirthdayStore {
    path: PathBuf,
}

impl BirthdayStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The stored fields, or `None` when nothing usable is on disk.
    pub fn load(&self) -> Option<DateFields> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let stored: StoredBirthday = serde_json::from_str(&raw).ok()?;
        Some(DateFields {
            year: stored.year,
            month_index: stored.month,
            day: stored.day,
        })
    }

    pub fn save(&self, fields: DateFields) -> Result<()> {
        let stored = StoredBirthday {
            year: fields.year,
            month: fields.month_index,
            day: fields.day,
        };
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}
