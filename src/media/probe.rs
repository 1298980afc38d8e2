// SPDX-License-Identifier: MPL-2.0
//! Builds gallery items from image files by reading their headers.
//!
//! Only the dimensions are read; pixels are never decoded.

use crate::domain::gallery::{GalleryItem, Size};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Reads the natural size of an image file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its format is not
/// recognized.
pub fn probe_item(path: &Path) -> Result<GalleryItem<PathBuf>> {
    let (width, height) = image_rs::image_dimensions(path)?;
    Ok(GalleryItem::new(
        path.to_path_buf(),
        Size::from_pixels(width, height),
    ))
}

/// Probes every path, skipping files that cannot be read.
///
/// Order is preserved for the files that succeed.
pub fn probe_items<P: AsRef<Path>>(paths: &[P]) -> Vec<GalleryItem<PathBuf>> {
    paths
        .iter()
        .filter_map(|path| {
            let path = path.as_ref();
            match probe_item(path) {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "skipping unreadable image: {err}");
                    None
                }
            }
        })
        .collect()
}
