//! Turns a path typed by the user into the metadata the file rules look at.
//!
//! The MIME type is derived from the extension, the same way a browser file
//! picker types a selected file. The content is never opened, so a renamed
//! file is judged by its name; the rules only ever see name, type and size.

use std::path::Path;

use anyhow::{bail, Context, Result};
use image::ImageFormat;
use log::debug;

use crate::models::SelectedFile;

impl SelectedFile {
    /// Builds a `SelectedFile` from a file on disk.
    ///
    /// # Returns
    /// * `Ok(SelectedFile)` with the name, guessed MIME type and size
    /// * `Err` if the path does not exist or is not a regular file
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;

        if !metadata.is_file() {
            bail!("{} is not a file", path.display());
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow::anyhow!("Invalid filename"))?;

        let mime_type = mime_type_of(path);
        debug!("Probed {name}: type {mime_type:?}, {} bytes", metadata.len());

        Ok(Self::new(name, mime_type, metadata.len()))
    }
}

/// MIME type of an image path, or the empty string when the extension is unknown
pub fn mime_type_of(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or("")
}
