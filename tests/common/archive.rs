//! Reading back `.streamDeckProfile` archives in tests.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::path::Path;

use serde_json::Value;
use zip::{CompressionMethod, ZipArchive};

/// All entries of an archive, keyed by entry name.
pub struct ExtractedArchive {
    pub entries: BTreeMap<String, Vec<u8>>,
    /// Compression method of every entry.
    pub methods: Vec<CompressionMethod>,
}

impl ExtractedArchive {
    /// Read every entry of an in-memory archive.
    ///
    /// # Panics
    ///
    /// Panics if the bytes are not a readable zip archive.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("Invalid zip archive");
        let mut entries = BTreeMap::new();
        let mut methods = Vec::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i).expect("Unreadable entry");
            let mut data = Vec::new();
            file.read_to_end(&mut data).expect("Unreadable entry data");
            methods.push(file.compression());
            entries.insert(file.name().to_string(), data);
        }
        Self { entries, methods }
    }

    /// Read an archive from disk.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read or is not a zip archive.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        let bytes = std::fs::read(path).expect("Failed to read archive");
        Self::from_bytes(&bytes)
    }

    /// The single `<root>.sdProfile` folder name.
    ///
    /// # Panics
    ///
    /// Panics if the archive has no root folder.
    #[must_use]
    pub fn root(&self) -> String {
        self.entries
            .keys()
            .find_map(|name| name.strip_suffix("/").filter(|n| !n.contains('/')))
            .expect("No root folder in archive")
            .to_string()
    }

    /// Parse a JSON entry.
    ///
    /// # Panics
    ///
    /// Panics if the entry is missing or not JSON.
    #[must_use]
    pub fn json(&self, name: &str) -> Value {
        let data = self
            .entries
            .get(name)
            .unwrap_or_else(|| panic!("Missing entry {name}"));
        serde_json::from_slice(data).unwrap_or_else(|e| panic!("{name} is not JSON: {e}"))
    }

    /// Top-level profile manifest.
    #[must_use]
    pub fn profile_manifest(&self) -> Value {
        self.json(&format!("{}/manifest.json", self.root()))
    }

    /// Page folder tokens present under `Profiles/`, sorted by name.
    #[must_use]
    pub fn page_folders(&self) -> Vec<String> {
        let prefix = format!("{}/Profiles/", self.root());
        self.entries
            .keys()
            .filter_map(|name| name.strip_prefix(&prefix))
            .filter_map(|rest| rest.strip_suffix('/'))
            .filter(|rest| !rest.contains('/'))
            .map(str::to_string)
            .collect()
    }

    /// Manifest of the page stored in `folder`.
    #[must_use]
    pub fn page_manifest(&self, folder: &str) -> Value {
        self.json(&format!("{}/Profiles/{folder}/manifest.json", self.root()))
    }

    /// Image file names under a page's `Images/` folder.
    #[must_use]
    pub fn page_images(&self, folder: &str) -> Vec<String> {
        let prefix = format!("{}/Profiles/{folder}/Images/", self.root());
        self.entries
            .keys()
            .filter_map(|name| name.strip_prefix(&prefix))
            .filter(|rest| !rest.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Every `Image` reference in a page manifest.
    #[must_use]
    pub fn image_refs(&self, folder: &str) -> Vec<String> {
        let manifest = self.page_manifest(folder);
        manifest["Controllers"]
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|controller| controller["Actions"].as_object())
            .flat_map(|actions| actions.values())
            .filter_map(|action| action["States"][0]["Image"].as_str())
            .map(str::to_string)
            .collect()
    }
}
