use crate::domain::ports::Storage;
use crate::utils::error::{ConvertError, Result};
use serde::Deserialize;
use serde_json::Value;

pub fn load_json<S: Storage>(storage: &S, path: &str) -> Result<Value> {
    let bytes = storage.read_file(path)?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path);
    parse_json(&bytes, path)
}

/// 不限巢狀深度；遞迴過深時由 serde_stacker 在 heap 上擴充堆疊
pub fn parse_json(bytes: &[u8], path: &str) -> Result<Value> {
    let to_parse_error = |source: serde_json::Error| ConvertError::ParseError {
        path: path.to_string(),
        source,
    };

    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();

    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(to_parse_error)?;
    deserializer.end().map_err(to_parse_error)?;
    Ok(value)
}
