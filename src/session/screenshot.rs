//! Failure screenshot sinks
//!
//! The scenario runner hands captured screenshots to a sink; where they end
//! up is the sink's business. The filesystem sink is what live runs use, the
//! memory sink backs hermetic runs and tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

use crate::Result;

/// Destination for failure screenshots
pub trait ScreenshotSink: Send + Sync {
    /// Persist one PNG captured for the named scenario
    fn attach(&self, scenario: &str, png: &[u8]) -> Result<()>;
}

/// Writes screenshots as PNG files under a directory
pub struct FsScreenshotSink {
    dir: PathBuf,
}

impl FsScreenshotSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn slug(scenario: &str) -> String {
        scenario
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect()
    }
}

impl ScreenshotSink for FsScreenshotSink {
    fn attach(&self, scenario: &str, png: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let filename = format!(
            "{}-{}.png",
            Self::slug(scenario),
            chrono::Utc::now().format("%Y%m%dT%H%M%S%3f")
        );
        let path = self.dir.join(filename);
        std::fs::write(&path, png)?;
        info!("Failure screenshot written to {}", path.display());
        Ok(())
    }
}

/// Keeps screenshots in memory for inspection
#[derive(Default)]
pub struct MemoryScreenshotSink {
    attachments: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryScreenshotSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.attachments.lock().expect("sink lock poisoned").len()
    }

    pub fn scenarios(&self) -> Vec<String> {
        self.attachments
            .lock()
            .expect("sink lock poisoned")
            .iter()
            .map(|(scenario, _)| scenario.clone())
            .collect()
    }
}

impl ScreenshotSink for MemoryScreenshotSink {
    fn attach(&self, scenario: &str, png: &[u8]) -> Result<()> {
        self.attachments
            .lock()
            .expect("sink lock poisoned")
            .push((scenario.to_string(), png.to_vec()));
        Ok(())
    }
}
