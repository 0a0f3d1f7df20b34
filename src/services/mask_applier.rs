use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::GrayImage;
use mask_roi::{apply_mask_resized, Interpolation};

use crate::error::{PrepError, SkipReason};
use crate::models::{AppConfig, BatchReport, NamingConfig, PairEntry, PairingTable};
use crate::services::dataset::{read_gray, save_png};

/// Batch mask application: keep image pixels where the paired mask is
/// non-zero and write the result as PNG.
#[derive(Debug, Clone)]
pub struct MaskApplier {
    naming: NamingConfig,
    interpolation: Interpolation,
}

impl Default for MaskApplier {
    fn default() -> Self {
        Self::new(NamingConfig::default(), Interpolation::Nearest)
    }
}

impl MaskApplier {
    pub fn new(naming: NamingConfig, interpolation: Interpolation) -> Self {
        Self {
            naming,
            interpolation,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.naming.clone(), config.mask_interpolation)
    }

    pub fn naming(&self) -> &NamingConfig {
        &self.naming
    }

    /// Pair `images_dir` with `masks_dir` by name and process every pair.
    ///
    /// Only missing input directories abort the run.
    pub fn apply_dir(
        &self,
        images_dir: &Path,
        masks_dir: &Path,
        output_dir: &Path,
    ) -> Result<BatchReport, PrepError> {
        let table = PairingTable::from_dirs(images_dir, masks_dir, &self.naming)?;
        self.apply_table(&table, output_dir)
    }

    /// Process every entry of a pairing table.
    ///
    /// Unpaired entries, undecodable inputs, failed writes and images whose
    /// output name is already taken in this run (e.g. `a.png` and `a.jpg`)
    /// are recorded as skips. The output directory is created when the
    /// first pair is processed; failing to create it is fatal.
    pub fn apply_table(
        &self,
        table: &PairingTable,
        output_dir: &Path,
    ) -> Result<BatchReport, PrepError> {
        let mut report = BatchReport::new();
        let mut output_ready = false;
        // output path -> image name that claimed it
        let mut claimed: HashMap<PathBuf, &str> = HashMap::new();

        for entry in table.entries() {
            let (name, image_path, mask_path) = match entry {
                PairEntry::Paired { name, image, mask } => (name, image, mask),
                PairEntry::Unpaired { name, path, reason } => {
                    report.record_skip(name, path, reason.clone());
                    continue;
                }
            };

            let output = self.output_path(output_dir, name);
            if let Some(owner) = claimed.get(&output) {
                report.record_skip(name, image_path, SkipReason::DuplicateOutput(owner.to_string()));
                continue;
            }

            let masked = match self.apply_pair(image_path, mask_path) {
                Ok(masked) => masked,
                Err(e) => {
                    report.record_skip(name, image_path, SkipReason::Decode(e.to_string()));
                    continue;
                }
            };

            if !output_ready {
                std::fs::create_dir_all(output_dir)?;
                output_ready = true;
            }

            claimed.insert(output.clone(), name);
            match save_png(&masked, &output) {
                Ok(()) => report.record_processed(output),
                Err(e) => report.record_skip(name, &output, SkipReason::Write(e.to_string())),
            }
        }

        tracing::info!(
            processed = report.processed_count(),
            skipped = report.skip_count(),
            output = %output_dir.display(),
            "Mask application finished"
        );
        Ok(report)
    }

    /// Load one image and its mask and return the masked image.
    ///
    /// The mask is resized to the image when the dimensions differ.
    pub fn apply_pair(&self, image_path: &Path, mask_path: &Path) -> Result<GrayImage, PrepError> {
        let image = read_gray(image_path)?;
        let mask = read_gray(mask_path)?;
        if mask.dimensions() != image.dimensions() {
            tracing::debug!(
                mask = %mask_path.display(),
                from = ?mask.dimensions(),
                to = ?image.dimensions(),
                "Resizing mask"
            );
        }
        Ok(apply_mask_resized(&image, &mask, self.interpolation))
    }

    fn output_path(&self, output_dir: &Path, image_name: &str) -> PathBuf {
        output_dir.join(self.naming.output_name(image_name))
    }
}
