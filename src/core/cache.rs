//! Read-through cache backed by an append-only JSON lines file.
//!
//! Every [`TtlCache::set`] appends one [`CacheEntry`] line; nothing is rewritten
//! in place. [`TtlCache::get`] scans the whole file and keeps the last entry
//! whose key matches, so "latest" is decided by position in the file rather
//! than by comparing timestamps. Entries older than the TTL are ignored but
//! stay on disk until [`TtlCache::compact`] is run.
//!
//! # Public API
//! - [`CacheEntry`]: One persisted line
//! - [`TtlCache`]: The store itself
//!
//! # Limitations
//! - The file grows with every `set` unless compacted explicitly.
//! - There is no locking. Appends from concurrent processes may interleave,
//!   which only reorders entries across processes and never corrupts an
//!   earlier line.

use crate::core::error::{Result, StatuslineError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub timestamp: DateTime<Utc>,
    pub key: String,
    pub content: String,
}

impl CacheEntry {
    pub fn new(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            key: key.into(),
            content: content.into(),
        }
    }

    /// Parse a single cache line. Blank and malformed lines yield `None`.
    fn parse_line(line: &[u8]) -> Option<Self> {
        let line = line.trim_ascii();
        if line.is_empty() {
            return None;
        }
        serde_json::from_slice(line).ok()
    }
}

#[derive(Debug, Clone)]
pub struct TtlCache {
    path: PathBuf,
    ttl: Duration,
}

impl TtlCache {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up the latest live value for `key`.
    ///
    /// A missing or unreadable file is a cold cache, not an error.
    pub fn get(&self, key: &str) -> Option<String> {
        let entry = self.latest_entry(key)?;

        if self.is_fresh(&entry, Utc::now()) {
            log::debug!("Cache hit for '{key}' (written {})", entry.timestamp);
            Some(entry.content)
        } else {
            log::debug!("Cache entry for '{key}' expired (written {})", entry.timestamp);
            None
        }
    }

    /// Append a new entry for `key` stamped with the current time.
    pub fn set(&self, key: &str, content: &str) -> Result<()> {
        let entry = CacheEntry::new(key, content);
        self.append_entry(&entry)
    }

    /// Rewrite the file keeping only the latest live entry per key.
    ///
    /// Returns the number of entries kept. The new content is written to a
    /// sibling file first and renamed over the cache.
    pub fn compact(&self) -> Result<usize> {
        let entries = match self.read_entries() {
            Some(entries) => entries,
            None => {
                log::debug!("Nothing to compact at {}", self.path.display());
                return Ok(0);
            }
        };

        let mut latest: HashMap<&str, usize> = HashMap::new();
        for (position, entry) in entries.iter().enumerate() {
            latest.insert(entry.key.as_str(), position);
        }

        let now = Utc::now();
        let mut buffer = String::new();
        let mut kept = 0;
        for (position, entry) in entries.iter().enumerate() {
            if latest.get(entry.key.as_str()) != Some(&position) || !self.is_fresh(entry, now) {
                continue;
            }
            let line = serde_json::to_string(entry)
                .map_err(StatuslineError::cache_serialization_failed)?;
            buffer.push_str(&line);
            buffer.push('\n');
            kept += 1;
        }

        let staging = self.staging_path();
        fs::write(&staging, buffer)
            .map_err(|e| StatuslineError::cache_write_failed(&staging, e))?;
        fs::rename(&staging, &self.path)
            .map_err(|e| StatuslineError::cache_write_failed(&self.path, e))?;

        log::debug!(
            "Compacted {} into {kept} of {} entries",
            self.path.display(),
            entries.len()
        );
        Ok(kept)
    }

    fn is_fresh(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        match now.signed_duration_since(entry.timestamp).to_std() {
            Ok(age) => age <= self.ttl,
            // Written "in the future" by a skewed clock
            Err(_) => true,
        }
    }

    fn latest_entry(&self, key: &str) -> Option<CacheEntry> {
        let file = self.open_for_scan()?;

        let mut latest = None;
        for line in BufReader::new(file).split(b'\n') {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::debug!("Stopped reading cache {}: {e}", self.path.display());
                    break;
                }
            };
            if let Some(entry) = CacheEntry::parse_line(&line) {
                if entry.key == key {
                    latest = Some(entry);
                }
            }
        }

        latest
    }

    fn read_entries(&self) -> Option<Vec<CacheEntry>> {
        let file = self.open_for_scan()?;

        let entries = BufReader::new(file)
            .split(b'\n')
            .map_while(|line| line.ok())
            .filter_map(|line| CacheEntry::parse_line(&line))
            .collect();

        Some(entries)
    }

    fn open_for_scan(&self) -> Option<File> {
        match File::open(&self.path) {
            Ok(file) => Some(file),
            Err(e) => {
                log::debug!(
                    "Cache file {} not readable, treating as cold: {e}",
                    self.path.display()
                );
                None
            }
        }
    }

    fn append_entry(&self, entry: &CacheEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| StatuslineError::cache_directory_creation_failed(parent, e))?;
            }
        }

        let mut line =
            serde_json::to_string(entry).map_err(StatuslineError::cache_serialization_failed)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StatuslineError::cache_write_failed(&self.path, e))?;

        // One write per entry keeps concurrent appends line-atomic in practice
        file.write_all(line.as_bytes())
            .map_err(|e| StatuslineError::cache_write_failed(&self.path, e))?;

        log::debug!("Cached '{}' in {}", entry.key, self.path.display());
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("statusline_cache"));
        name.push(".compact");
        self.path.with_file_name(name)
    }
}
