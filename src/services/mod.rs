pub mod dataset;
pub mod downscaler;
pub mod mask_applier;
pub mod metrics_scan;

pub use dataset::{load_images, read_gray, NamedImage};
pub use downscaler::{DownscaleSummary, Downscaler};
pub use mask_applier::MaskApplier;
pub use metrics_scan::{ImageMetrics, MetricsScanner};
