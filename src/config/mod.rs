pub mod cli;
pub mod settings;

use crate::core::{ConfigProvider, ExtractOptions};
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use settings::Settings;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "location-geojson")]
#[command(about = "Convert a location history JSON export into GeoJSON")]
pub struct CliConfig {
    /// Input file (Location History.json)
    pub input: String,

    /// Output file (will be overwritten!)
    pub output: String,

    /// Print every key of the input, indented by depth
    #[arg(long)]
    pub debug: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    /// Render timestampMs values as RFC 3339
    #[arg(long)]
    pub iso_timestamps: bool,

    /// Write single-line JSON instead of indented output
    #[arg(long)]
    pub compact: bool,

    /// Write the output file in place instead of via a temporary file
    #[arg(long)]
    pub no_atomic: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定檔與命令列旗標，命令列優先
    pub fn resolve(&self) -> Result<ConverterConfig> {
        let settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading settings from: {}", path);
                Settings::from_file(path)?
            }
            None => Settings::default(),
        };
        settings.validate()?;

        let mut config = ConverterConfig::from_settings(&self.input, &self.output, &settings);
        config.debug_keys = self.debug;
        if self.iso_timestamps {
            config.extract.iso_timestamps = true;
        }
        if self.compact {
            config.pretty = false;
        }
        if self.no_atomic {
            config.atomic_write = false;
        }
        Ok(config)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_distinct_paths(&self.input, &self.output)?;
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

/// 一次轉換實際使用的設定
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    pub input_path: String,
    pub output_path: String,
    pub debug_keys: bool,
    pub extract: ExtractOptions,
    pub pretty: bool,
    pub atomic_write: bool,
}

impl ConverterConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            debug_keys: false,
            extract: ExtractOptions::default(),
            pretty: true,
            atomic_write: true,
        }
    }

    pub fn from_settings(input_path: &str, output_path: &str, settings: &Settings) -> Self {
        Self {
            extract: ExtractOptions {
                default_timestamp: settings.default_timestamp().to_string(),
                iso_timestamps: settings.iso_timestamps(),
                check_ranges: settings.check_ranges(),
            },
            pretty: settings.pretty(),
            atomic_write: settings.atomic_write(),
            ..Self::new(input_path, output_path)
        }
    }
}

impl Validate for ConverterConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)
    }
}

impl ConfigProvider for ConverterConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn debug_keys(&self) -> bool {
        self.debug_keys
    }

    fn extract_options(&self) -> &ExtractOptions {
        &self.extract
    }

    fn pretty_output(&self) -> bool {
        self.pretty
    }
}
