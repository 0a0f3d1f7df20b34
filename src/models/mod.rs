pub mod config;
pub mod pairing;
pub mod report;

pub use config::{has_extension, AppConfig, DownscaleConfig, MetricsConfig, NamingConfig, CONFIG_ENV};
pub use pairing::{PairEntry, PairingTable};
pub use report::{BatchReport, SkippedItem};
