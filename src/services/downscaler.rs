use std::path::{Path, PathBuf};

use image::GrayImage;
use mask_roi::{resize_image, Interpolation};

use crate::error::PrepError;
use crate::models::AppConfig;
use crate::services::dataset::{list_images, read_gray, require_dir};

/// Result of downscaling a folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownscaleSummary {
    /// `{output}/{W}x{H}`
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
    /// Files that could not be decoded or written
    pub skipped: Vec<PathBuf>,
}

impl DownscaleSummary {
    pub fn count(&self) -> usize {
        self.written.len()
    }
}

/// Resizes single images or whole folders to a fixed size
#[derive(Debug, Clone)]
pub struct Downscaler {
    interpolation: Interpolation,
    extensions: Vec<String>,
}

impl Default for Downscaler {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl Downscaler {
    pub fn new(interpolation: Interpolation, extensions: Vec<String>) -> Self {
        Self {
            interpolation,
            extensions,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.downscale.interpolation, config.image_extensions.clone())
    }

    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn downscale(&self, image: &GrayImage, width: u32, height: u32) -> GrayImage {
        resize_image(image, width, height, self.interpolation)
    }

    /// Resize every image in `input` to `width` x `height`.
    ///
    /// Results go to `output/{W}x{H}/{W}x{H}_{name}`, encoded in the format
    /// of the original extension. Unreadable or unwritable files are logged
    /// and skipped; a missing input directory is an error.
    pub fn downscale_folder(
        &self,
        input: &Path,
        output: &Path,
        width: u32,
        height: u32,
    ) -> Result<DownscaleSummary, PrepError> {
        require_dir("Input", input)?;

        let size = format!("{width}x{height}");
        let mut summary = DownscaleSummary {
            output_dir: output.join(&size),
            ..Default::default()
        };
        std::fs::create_dir_all(&summary.output_dir)?;

        for name in list_images(input, &self.extensions)? {
            let source = input.join(&name);
            let image = match read_gray(&source) {
                Ok(image) => image,
                Err(e) => {
                    tracing::warn!(%e, path = %source.display(), "Could not read image, skipping");
                    summary.skipped.push(source);
                    continue;
                }
            };

            let target = summary.output_dir.join(format!("{size}_{name}"));
            match self.downscale(&image, width, height).save(&target) {
                Ok(()) => summary.written.push(target),
                Err(e) => {
                    tracing::warn!(%e, path = %target.display(), "Could not write image, skipping");
                    summary.skipped.push(source);
                }
            }
        }

        tracing::info!(
            count = summary.count(),
            skipped = summary.skipped.len(),
            output = %summary.output_dir.display(),
            "Downscaled {} images to {size}",
            summary.count()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_downscale_uses_configured_interpolation() {
        let image = GrayImage::from_fn(4, 4, |x, _| Luma([if x % 2 == 0 { 0 } else { 200 }]));

        let area = Downscaler::default().downscale(&image, 2, 2);
        assert!(area.pixels().all(|p| p[0] == 100));

        let nearest = Downscaler::default()
            .interpolation(Interpolation::Nearest)
            .downscale(&image, 2, 2);
        assert!(nearest.pixels().all(|p| p[0] == 0 || p[0] == 200));
    }

    #[test]
    fn test_missing_input_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Downscaler::default()
            .downscale_folder(&tmp.path().join("none"), tmp.path(), 2, 2)
            .unwrap_err();
        assert!(matches!(err, PrepError::DirectoryNotFound { role: "Input", .. }));
    }
}
