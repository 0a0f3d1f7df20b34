use std::path::Path;

use image::GrayImage;
use mask_roi::{has_black_frame, QualityMetrics};
use serde::Serialize;

use crate::error::PrepError;
use crate::models::{AppConfig, MetricsConfig};
use crate::services::dataset::{list_images, read_gray, require_dir};

/// Quality metrics of one image file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageMetrics {
    /// File name without a `.png` suffix
    pub name: String,
    #[serde(flatten)]
    pub metrics: QualityMetrics,
    /// Whether the image sits inside a dark frame
    pub black_frame: bool,
}

/// Computes [`ImageMetrics`] for every image in a folder
#[derive(Debug, Clone)]
pub struct MetricsScanner {
    settings: MetricsConfig,
    extensions: Vec<String>,
}

impl Default for MetricsScanner {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl MetricsScanner {
    pub fn new(settings: MetricsConfig, extensions: Vec<String>) -> Self {
        Self {
            settings,
            extensions,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.metrics.clone(), config.image_extensions.clone())
    }

    pub fn measure(&self, file_name: &str, image: &GrayImage) -> ImageMetrics {
        ImageMetrics {
            name: display_name(file_name).to_string(),
            metrics: QualityMetrics::measure(image),
            black_frame: has_black_frame(
                image,
                self.settings.frame_border,
                self.settings.frame_max_mean,
            ),
        }
    }

    /// Measure every image in `dir`, sorted by file name.
    ///
    /// Files that cannot be decoded are logged and left out.
    pub fn scan(&self, dir: &Path) -> Result<Vec<ImageMetrics>, PrepError> {
        require_dir("Images", dir)?;

        let mut records = Vec::new();
        for name in list_images(dir, &self.extensions)? {
            let path = dir.join(&name);
            match read_gray(&path) {
                Ok(image) => records.push(self.measure(&name, &image)),
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Could not read image, skipping")
                }
            }
        }

        tracing::info!(dir = %dir.display(), count = records.len(), "Computed image metrics");
        Ok(records)
    }
}

fn display_name(file_name: &str) -> &str {
    file_name.strip_suffix(".png").unwrap_or(file_name)
}
