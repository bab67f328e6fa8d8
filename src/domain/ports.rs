use crate::domain::model::{Extraction, ExtractOptions};
use crate::utils::error::Result;
use geojson::FeatureCollection;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn debug_keys(&self) -> bool;
    fn extract_options(&self) -> &ExtractOptions;
    fn pretty_output(&self) -> bool;
}

/// 讀取 → 擷取 → 組裝 → 寫出，每個階段在一次執行中只呼叫一次
pub trait Pipeline {
    fn input_location(&self) -> &str;
    fn output_location(&self) -> &str;
    fn read_input(&self) -> Result<serde_json::Value>;
    fn inspect(&self, data: &serde_json::Value) -> Result<()>;
    fn extract(&self, data: &serde_json::Value) -> Extraction;
    fn assemble(&self, extraction: &Extraction) -> FeatureCollection;
    fn write_output(&self, collection: &FeatureCollection) -> Result<String>;
}
