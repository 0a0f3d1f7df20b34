use std::path::{Path, PathBuf};

use mask_roi::{Interpolation, RoiOptions};
use serde::{Deserialize, Serialize};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "CXR_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// File naming conventions for masks and outputs
    #[serde(default)]
    pub naming: NamingConfig,

    /// Mask resampling used by the mask applier (keep it nearest so masks stay binary)
    #[serde(default = "default_mask_interpolation")]
    pub mask_interpolation: Interpolation,

    /// Contour-based ROI extraction
    #[serde(default)]
    pub roi: RoiOptions,

    /// Folder downscaling
    #[serde(default)]
    pub downscale: DownscaleConfig,

    /// Quality metrics scan
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// File extensions treated as images when scanning a folder
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,
}

fn default_mask_interpolation() -> Interpolation {
    Interpolation::Nearest
}

fn default_image_extensions() -> Vec<String> {
    vec!["png".to_string(), "jpg".to_string()]
}

/// How mask and output file names derive from the image file name
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    /// Mask file name = prefix + image file name
    #[serde(default = "default_mask_prefix")]
    pub mask_prefix: String,

    /// Output file name = prefix + image file name
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
}

fn default_mask_prefix() -> String {
    "m".to_string()
}

fn default_output_prefix() -> String {
    "mskd_".to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            mask_prefix: default_mask_prefix(),
            output_prefix: default_output_prefix(),
        }
    }
}

impl NamingConfig {
    /// Mask file name expected for an image.
    pub fn mask_name(&self, image_name: &str) -> String {
        format!("{}{}", self.mask_prefix, image_name)
    }

    /// Image file name a mask belongs to, if it carries the mask prefix.
    pub fn image_name_for_mask<'a>(&self, mask_name: &'a str) -> Option<&'a str> {
        mask_name
            .strip_prefix(self.mask_prefix.as_str())
            .filter(|rest| !rest.is_empty())
    }

    /// Output file name for a masked image.
    ///
    /// Outputs are always PNG, so non-PNG sources get their extension
    /// replaced.
    pub fn output_name(&self, image_name: &str) -> String {
        let path = Path::new(image_name);
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));

        if is_png {
            format!("{}{}", self.output_prefix, image_name)
        } else {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| image_name.to_string());
            format!("{}{}.png", self.output_prefix, stem)
        }
    }
}

/// Configuration for folder downscaling
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DownscaleConfig {
    #[serde(default = "default_downscale_interpolation")]
    pub interpolation: Interpolation,
}

fn default_downscale_interpolation() -> Interpolation {
    Interpolation::Area
}

impl Default for DownscaleConfig {
    fn default() -> Self {
        Self {
            interpolation: default_downscale_interpolation(),
        }
    }
}

/// Configuration for the quality metrics scan
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MetricsConfig {
    /// Border width checked for a dark frame, in pixels
    #[serde(default = "default_frame_border")]
    pub frame_border: u32,

    /// Border mean intensity below which the frame counts as black
    #[serde(default = "default_frame_max_mean")]
    pub frame_max_mean: f64,
}

fn default_frame_border() -> u32 {
    10
}

fn default_frame_max_mean() -> f64 {
    10.0
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            frame_border: default_frame_border(),
            frame_max_mean: default_frame_max_mean(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            naming: NamingConfig::default(),
            mask_interpolation: default_mask_interpolation(),
            roi: RoiOptions::default(),
            downscale: DownscaleConfig::default(),
            metrics: MetricsConfig::default(),
            image_extensions: default_image_extensions(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// Without a path, built-in defaults are used. A file that cannot be
    /// read or parsed is logged and also falls back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Config path from an explicit flag, else from [`CONFIG_ENV`].
    pub fn resolve_path(flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Whether a file name has one of the configured image extensions.
    pub fn is_image_file(&self, file_name: &str) -> bool {
        has_extension(file_name, &self.image_extensions)
    }
}

/// Case-insensitive extension check against a list like `["png", "jpg"]`.
pub fn has_extension(file_name: &str, extensions: &[String]) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}
