//! File-level helpers shared by the batch services.

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, ImageResult, Luma};

use crate::error::PrepError;
use crate::models::has_extension;

/// An image loaded by file name
#[derive(Debug, Clone)]
pub struct NamedImage {
    pub name: String,
    pub image: GrayImage,
}

/// Fail with `DirectoryNotFound` unless `path` is an existing directory.
pub fn require_dir(role: &'static str, path: &Path) -> Result<(), PrepError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(PrepError::DirectoryNotFound {
            role,
            path: path.to_path_buf(),
        })
    }
}

/// Names of the regular files in `dir`, sorted.
pub fn list_files(dir: &Path) -> Result<Vec<String>, PrepError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::warn!(file = ?raw, "Skipping file with non UTF-8 name"),
        }
    }
    names.sort();
    Ok(names)
}

/// Names of the files in `dir` whose extension is in `extensions`, sorted.
pub fn list_images(dir: &Path, extensions: &[String]) -> Result<Vec<String>, PrepError> {
    Ok(list_files(dir)?
        .into_iter()
        .filter(|name| has_extension(name, extensions))
        .collect())
}

/// Decode any supported image file and convert it to 8-bit luma.
pub fn read_gray(path: &Path) -> ImageResult<GrayImage> {
    Ok(to_gray(image::open(path)?))
}

/// Colour goes through ITU-R BT.601 weights (0.299, 0.587, 0.114), the
/// conversion the dataset's reference tooling applies.
pub fn to_gray(image: DynamicImage) -> GrayImage {
    if !image.color().has_color() {
        return image.into_luma8();
    }
    let rgb = image.into_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0.map(u32::from);
        Luma([((299 * r + 587 * g + 114 * b + 500) / 1000) as u8])
    })
}

/// Encode `image` as PNG at `path`, whatever its extension.
pub fn save_png(image: &GrayImage, path: &Path) -> ImageResult<()> {
    image.save_with_format(path, ImageFormat::Png)
}

/// Load the named files from `dir` as grayscale images, in order.
///
/// An empty list, a missing file or an undecodable file aborts the whole
/// load.
pub fn load_images<S: AsRef<str>>(names: &[S], dir: &Path) -> Result<Vec<NamedImage>, PrepError> {
    if names.is_empty() {
        return Err(PrepError::EmptyNameList);
    }

    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let path = dir.join(name);
            if !path.is_file() {
                return Err(PrepError::ImageNotFound {
                    name: name.to_string(),
                    dir: dir.to_path_buf(),
                });
            }
            let image = read_gray(&path)?;
            tracing::debug!(name, width = image.width(), height = image.height(), "Loaded image");
            Ok(NamedImage {
                name: name.to_string(),
                image,
            })
        })
        .collect()
}
