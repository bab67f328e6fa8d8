use crate::domain::model::EPOCH_TIMESTAMP;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::Deserialize;
use std::path::Path;

/// 選用的 TOML 設定檔，缺少的欄位使用預設值
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub extract: ExtractSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractSettings {
    pub default_timestamp: Option<String>,
    pub iso_timestamps: Option<bool>,
    pub check_ranges: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub pretty: Option<bool>,
    pub atomic_write: Option<bool>,
}

impl Settings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::io(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn default_timestamp(&self) -> &str {
        self.extract
            .default_timestamp
            .as_deref()
            .unwrap_or(EPOCH_TIMESTAMP)
    }

    pub fn iso_timestamps(&self) -> bool {
        self.extract.iso_timestamps.unwrap_or(false)
    }

    pub fn check_ranges(&self) -> bool {
        self.extract.check_ranges.unwrap_or(false)
    }

    pub fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(true)
    }

    pub fn atomic_write(&self) -> bool {
        self.output.atomic_write.unwrap_or(true)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(timestamp) = &self.extract.default_timestamp {
            validate_non_empty_string("extract.default_timestamp", timestamp)?;
        }
        Ok(())
    }
}
