pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, settings::Settings, ConverterConfig};
pub use crate::core::{engine::ConversionEngine, pipeline::GeoJsonPipeline};
pub use crate::domain::model::{ConversionSummary, Extraction};
pub use crate::utils::error::{ConvertError, Result};

use crate::utils::validation::Validate;

/// 以預設的本機儲存執行一次完整轉換
pub fn convert(config: ConverterConfig) -> Result<ConversionSummary> {
    config.validate()?;

    let storage = LocalStorage::new(config.atomic_write);
    let pipeline = GeoJsonPipeline::new(storage, config);
    ConversionEngine::new(pipeline).run()
}
