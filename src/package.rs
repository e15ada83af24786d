//! Packaging a [`Profile`] into a `.streamDeckProfile` archive.
//!
//! The archive is built fully in memory and only touches the filesystem in
//! [`write_archive`], which writes through a temporary sibling file and
//! renames it into place.
//!
//! Layout:
//!
//! ```text
//! <root>.sdProfile/
//!   manifest.json
//!   Profiles/
//!     <folder>/
//!       manifest.json
//!       Images/
//!         <image>.png
//! ```

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use rand::{CryptoRng, RngCore};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument, trace};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{ProfileError, Result};
use crate::ids::IdGenerator;
use crate::page::Profile;

/// Extension of the bundle's root folder.
pub const BUNDLE_EXTENSION: &str = "sdProfile";

/// File extension of the archive itself.
pub const ARCHIVE_EXTENSION: &str = "streamDeckProfile";

/// Name of every manifest file inside the bundle.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Archive bytes ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedProfile {
    /// Compact token naming the root folder, without the extension.
    pub root_id: String,
    pub bytes: Vec<u8>,
}

impl PackagedProfile {
    /// Root folder name including the bundle extension.
    pub fn root_folder(&self) -> String {
        format!("{}.{BUNDLE_EXTENSION}", self.root_id)
    }

    /// Hex SHA-256 of the archive bytes.
    pub fn sha256(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.bytes);
        hex::encode(hasher.finalize())
    }
}

/// Summary of a written archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub path: PathBuf,
    /// Final archive size in bytes.
    pub size: u64,
    pub root_id: String,
    pub sha256: String,
    pub pages: usize,
    pub actions: usize,
    pub icons: usize,
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(zip::DateTime::default())
}

fn archive_err(e: impl std::fmt::Display) -> ProfileError {
    ProfileError::Archive(e.to_string())
}

struct BundleWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl BundleWriter {
    fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: entry_options(),
        }
    }

    fn directory(&mut self, name: &str) -> Result<()> {
        trace!(entry = name, "Adding directory");
        self.zip
            .add_directory(format!("{name}/"), self.options)
            .map_err(archive_err)
    }

    fn file(&mut self, name: &str, data: &[u8]) -> Result<()> {
        trace!(entry = name, bytes = data.len(), "Adding file");
        self.zip.start_file(name, self.options).map_err(archive_err)?;
        self.zip.write_all(data)?;
        Ok(())
    }

    fn json<T: Serialize>(&mut self, name: &str, value: &T) -> Result<()> {
        let data = serde_json::to_vec_pretty(value)?;
        self.file(name, &data)
    }

    fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish().map_err(archive_err)?;
        Ok(cursor.into_inner())
    }
}

/// Serialize a profile into archive bytes.
///
/// Draws one compact token for the root folder. Fails if any placed action
/// references an icon its page does not own.
#[instrument(skip_all, fields(profile = %profile.name, pages = profile.pages().len()))]
pub fn package_profile<R: RngCore + CryptoRng>(
    profile: &Profile,
    ids: &mut IdGenerator<R>,
) -> Result<PackagedProfile> {
    for page in profile.pages() {
        if let Some(image) = page.unresolved_images().first() {
            return Err(ProfileError::Archive(format!(
                "page {} references missing icon {image}",
                page.uuid
            )));
        }
    }

    let root_id = ids.compact();
    let root = format!("{root_id}.{BUNDLE_EXTENSION}");
    let mut bundle = BundleWriter::new();

    bundle.directory(&root)?;
    bundle.json(&format!("{root}/{MANIFEST_FILE}"), &profile.manifest())?;
    bundle.directory(&format!("{root}/Profiles"))?;

    for page in profile.pages() {
        let folder = format!("{root}/Profiles/{}", page.folder_id);
        bundle.directory(&folder)?;
        bundle.json(&format!("{folder}/{MANIFEST_FILE}"), &page.manifest())?;
        bundle.directory(&format!("{folder}/Images"))?;
        for icon in page.icons() {
            bundle.file(&format!("{folder}/Images/{}", icon.file_name()), &icon.data)?;
        }
        debug!(
            folder = %page.folder_id,
            actions = page.action_count(),
            icons = page.icons().len(),
            "Packaged page"
        );
    }

    let bytes = bundle.finish()?;
    info!(root = %root, bytes = bytes.len(), "Packaged profile");
    Ok(PackagedProfile { root_id, bytes })
}

/// Write archive bytes to `path` atomically.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `path`; on failure nothing is left behind.
pub fn write_archive(path: &Path, packaged: &PackagedProfile) -> Result<u64> {
    let write_err = |source| ProfileError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::Builder::new()
        .prefix(".sdprofile-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;
    tmp.write_all(&packaged.bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    let size = packaged.bytes.len() as u64;
    info!(path = %path.display(), size, "Wrote archive");
    Ok(size)
}

/// Package `profile` and write it to `path`.
pub fn write_profile<R: RngCore + CryptoRng>(
    path: &Path,
    profile: &Profile,
    ids: &mut IdGenerator<R>,
) -> Result<BuildReport> {
    let packaged = package_profile(profile, ids)?;
    let size = write_archive(path, &packaged)?;
    Ok(BuildReport {
        path: path.to_path_buf(),
        size,
        sha256: packaged.sha256(),
        root_id: packaged.root_id,
        pages: profile.pages().len(),
        actions: profile.action_count(),
        icons: profile.icon_count(),
    })
}
