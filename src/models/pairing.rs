//! Explicit image/mask pairing.
//!
//! A [`PairingTable`] is built once, up front, either from a directory pair
//! and the mask naming rule or from a YAML manifest. Every image (and every
//! orphan mask) appears exactly once, as a [`PairEntry::Paired`] or a
//! [`PairEntry::Unpaired`] with its reason.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PrepError, SkipReason};
use crate::models::NamingConfig;
use crate::services::dataset::{list_files, require_dir};

/// One row of a pairing table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairEntry {
    Paired {
        /// Image file name, used to name the output
        name: String,
        image: PathBuf,
        mask: PathBuf,
    },
    Unpaired {
        name: String,
        /// The half of the pair that does exist
        path: PathBuf,
        reason: SkipReason,
    },
}

impl PairEntry {
    pub fn name(&self) -> &str {
        match self {
            PairEntry::Paired { name, .. } | PairEntry::Unpaired { name, .. } => name,
        }
    }
}

/// Validated list of image/mask pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingTable {
    entries: Vec<PairEntry>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    pairs: Vec<ManifestPair>,
}

#[derive(Debug, Deserialize)]
struct ManifestPair {
    image: PathBuf,
    mask: PathBuf,
}

impl PairingTable {
    /// Pair every file in `images_dir` with `mask_prefix + name` in `masks_dir`.
    ///
    /// Both directories must exist. Images without a mask become
    /// `MissingMask` entries; prefixed masks without an image become
    /// `MissingImage` entries. Entries are sorted by file name.
    pub fn from_dirs(
        images_dir: &Path,
        masks_dir: &Path,
        naming: &NamingConfig,
    ) -> Result<Self, PrepError> {
        require_dir("Images", images_dir)?;
        require_dir("Masks", masks_dir)?;

        let images = list_files(images_dir)?;
        let masks: BTreeSet<String> = list_files(masks_dir)?.into_iter().collect();

        let mut entries = Vec::with_capacity(images.len());
        let mut claimed = HashSet::new();

        for name in &images {
            let mask_name = naming.mask_name(name);
            let image = images_dir.join(name);
            if masks.contains(&mask_name) {
                entries.push(PairEntry::Paired {
                    name: name.clone(),
                    image,
                    mask: masks_dir.join(&mask_name),
                });
                claimed.insert(mask_name);
            } else {
                entries.push(PairEntry::Unpaired {
                    name: name.clone(),
                    path: image,
                    reason: SkipReason::MissingMask,
                });
            }
        }

        for mask_name in masks.iter().filter(|m| !claimed.contains(*m)) {
            match naming.image_name_for_mask(mask_name) {
                Some(image_name) => entries.push(PairEntry::Unpaired {
                    name: image_name.to_string(),
                    path: masks_dir.join(mask_name),
                    reason: SkipReason::MissingImage,
                }),
                None => {
                    tracing::debug!(file = %mask_name, "Ignoring file without mask prefix")
                }
            }
        }

        tracing::debug!(
            images = images.len(),
            masks = masks.len(),
            entries = entries.len(),
            "Built pairing table from directories"
        );
        Ok(Self { entries })
    }

    /// Load pairs from a YAML manifest:
    ///
    /// ```yaml
    /// pairs:
    ///   - image: images/COVID-1.png
    ///     mask: masks/lungs-COVID-1.png
    /// ```
    ///
    /// Relative paths resolve against the manifest's directory. Unreadable
    /// or malformed manifests and duplicate image names are errors; files
    /// that do not exist become unpaired entries.
    pub fn from_manifest(path: &Path) -> Result<Self, PrepError> {
        let manifest_error = |message: String| PrepError::Manifest {
            path: path.to_path_buf(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| manifest_error(e.to_string()))?;
        let manifest: Manifest = if content.trim().is_empty() {
            Manifest { pairs: Vec::new() }
        } else {
            serde_yaml::from_str(&content).map_err(|e| manifest_error(e.to_string()))?
        };

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(manifest.pairs.len());

        for pair in manifest.pairs {
            let image = base.join(&pair.image);
            let mask = base.join(&pair.mask);
            let name = pair
                .image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    manifest_error(format!("image path has no file name: {}", pair.image.display()))
                })?;

            if !seen.insert(name.clone()) {
                return Err(manifest_error(format!("duplicate image name '{name}'")));
            }

            let entry = if !image.is_file() {
                PairEntry::Unpaired {
                    name,
                    path: mask,
                    reason: SkipReason::MissingImage,
                }
            } else if !mask.is_file() {
                PairEntry::Unpaired {
                    name,
                    path: image,
                    reason: SkipReason::MissingMask,
                }
            } else {
                PairEntry::Paired { name, image, mask }
            };
            entries.push(entry);
        }

        tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded pairing manifest");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PairEntry] {
        &self.entries
    }

    /// Paired entries as `(name, image, mask)`.
    pub fn paired(&self) -> impl Iterator<Item = (&str, &Path, &Path)> {
        self.entries.iter().filter_map(|e| match e {
            PairEntry::Paired { name, image, mask } => {
                Some((name.as_str(), image.as_path(), mask.as_path()))
            }
            PairEntry::Unpaired { .. } => None,
        })
    }

    /// Unpaired entries as `(name, existing path, reason)`.
    pub fn unpaired(&self) -> impl Iterator<Item = (&str, &Path, &SkipReason)> {
        self.entries.iter().filter_map(|e| match e {
            PairEntry::Unpaired { name, path, reason } => {
                Some((name.as_str(), path.as_path(), reason))
            }
            PairEntry::Paired { .. } => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
