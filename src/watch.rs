//! Change-driven regeneration
//!
//! Polls the watched files at a fixed interval and compares content hashes,
//! so touch-without-change does not trigger a rebuild. Scheduling loop only;
//! the render pipeline is passed in as a callback.

use crate::error::Result;
use log::{error, info};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

pub struct FileWatcher {
    entries: Vec<WatchedFile>,
    interval: Duration,
}

struct WatchedFile {
    path: PathBuf,
    hash: Option<Vec<u8>>,
}

fn content_hash(path: &Path) -> Option<Vec<u8>> {
    let bytes = fs::read(path).ok()?;
    Some(Sha256::digest(&bytes).to_vec())
}

impl FileWatcher {
    pub fn new<I, P>(paths: I, interval: Duration) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let entries = paths
            .into_iter()
            .map(|p| {
                let path = p.into();
                let hash = content_hash(&path);
                WatchedFile { path, hash }
            })
            .collect();
        Self { entries, interval }
    }

    /// Paths whose content changed since the last check.
    pub fn changed(&mut self) -> Vec<PathBuf> {
        let mut changed = Vec::new();
        for entry in &mut self.entries {
            let current = content_hash(&entry.path);
            if current != entry.hash {
                entry.hash = current;
                changed.push(entry.path.clone());
            }
        }
        changed
    }

    /// Poll until the process is interrupted, invoking `on_change` for every
    /// batch of changed files. A failed regeneration is logged and watching
    /// continues.
    pub fn watch<F>(mut self, mut on_change: F) -> !
    where
        F: FnMut(&[PathBuf]) -> Result<()>,
    {
        info!(
            "watching {} files (poll interval {:?})",
            self.entries.len(),
            self.interval
        );

        loop {
            thread::sleep(self.interval);
            let changed = self.changed();
            if changed.is_empty() {
                continue;
            }

            let names: Vec<String> = changed
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            info!(
                "files changed at {}: {}",
                chrono::Local::now().format("%H:%M:%S"),
                names.join(", ")
            );

            if let Err(e) = on_change(&changed) {
                error!("regeneration failed: {}", e);
            }
        }
    }
}
