//! Test fixtures and config helpers.

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Config files used across tests
pub mod yaml {
    pub const THRESHOLD_64: &str = "threshold: 64\n";

    pub const THRESHOLD_WITH_SHIFT: &str = "threshold: 200.0\ndiffusion_shift: 1\n";

    pub const BOTH_SOURCES: &str = "threshold: 10\nentries: [0, 1]\n";

    pub const MALFORMED: &str = "threshold: [unclosed\n";
}

/// A YAML config written into its own temporary directory
pub struct ConfigFile {
    // held so the directory outlives the test
    _dir: TempDir,
    pub path: PathBuf,
}

impl ConfigFile {
    pub fn new(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixelkit.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        Self { _dir: dir, path }
    }
}

/// YAML for an inverted (negative) 256-entry table
pub fn inverted_entries_yaml() -> String {
    let entries: Vec<String> = (0..=255u8).map(|v| (255 - v).to_string()).collect();
    format!("entries: [{}]\n", entries.join(", "))
}
