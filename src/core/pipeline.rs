use crate::core::assembler::{build_feature_collection, to_geojson_string};
use crate::core::extractor::extract_locations;
use crate::core::key_trace::write_key_trace;
use crate::core::loader::load_json;
use crate::core::{ConfigProvider, Extraction, Pipeline, Storage};
use crate::utils::error::{ConvertError, Result};
use geojson::FeatureCollection;
use serde_json::Value;
use std::io::Write;

pub struct GeoJsonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> GeoJsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for GeoJsonPipeline<S, C> {
    fn input_location(&self) -> &str {
        self.config.input_path()
    }

    fn output_location(&self) -> &str {
        self.config.output_path()
    }

    fn read_input(&self) -> Result<Value> {
        tracing::debug!("Reading location history from: {}", self.config.input_path());
        load_json(&self.storage, self.config.input_path())
    }

    fn inspect(&self, data: &Value) -> Result<()> {
        if !self.config.debug_keys() {
            return Ok(());
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "Logging JSON keys for debugging:")
            .and_then(|_| write_key_trace(data, &mut out))
            .map_err(|e| ConvertError::io("<stdout>", e))
    }

    fn extract(&self, data: &Value) -> Extraction {
        extract_locations(data, self.config.extract_options())
    }

    fn assemble(&self, extraction: &Extraction) -> FeatureCollection {
        build_feature_collection(extraction)
    }

    fn write_output(&self, collection: &FeatureCollection) -> Result<String> {
        let text = to_geojson_string(collection, self.config.pretty_output())?;

        tracing::debug!(
            "Writing {} features ({} bytes) to {}",
            collection.features.len(),
            text.len(),
            self.config.output_path()
        );
        self.storage
            .write_file(self.config.output_path(), text.as_bytes())?;

        Ok(self.config.output_path().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExtractOptions;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.as_bytes().to_vec());
            storage
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.get_file(path).ok_or_else(|| {
                ConvertError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                )
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        options: ExtractOptions,
        pretty: bool,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                options: ExtractOptions::default(),
                pretty: true,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            "history.json"
        }

        fn output_path(&self) -> &str {
            "history.geojson"
        }

        fn debug_keys(&self) -> bool {
            false
        }

        fn extract_options(&self) -> &ExtractOptions {
            &self.options
        }

        fn pretty_output(&self) -> bool {
            self.pretty
        }
    }

    #[test]
    fn test_read_input_missing_file() {
        let pipeline = GeoJsonPipeline::new(MockStorage::default(), MockConfig::new());
        let err = pipeline.read_input().unwrap_err();
        assert!(matches!(err, ConvertError::IoError { ref path, .. } if path == "history.json"));
    }

    #[test]
    fn test_read_input_invalid_json() {
        let storage = MockStorage::with_file("history.json", "not json");
        let pipeline = GeoJsonPipeline::new(storage, MockConfig::new());
        assert!(matches!(
            pipeline.read_input(),
            Err(ConvertError::ParseError { .. })
        ));
    }

    #[test]
    fn test_full_pipeline_writes_geojson() {
        let storage = MockStorage::with_file(
            "history.json",
            r#"{"locations": [{"latitudeE7": 532035733, "longitudeE7": 57900171, "timestampMs": "1000"}]}"#,
        );
        let pipeline = GeoJsonPipeline::new(storage.clone(), MockConfig::new());

        let data = pipeline.read_input().unwrap();
        pipeline.inspect(&data).unwrap();
        let extraction = pipeline.extract(&data);
        let collection = pipeline.assemble(&extraction);
        let output = pipeline.write_output(&collection).unwrap();

        assert_eq!(output, "history.geojson");
        let written = storage.get_file("history.geojson").unwrap();
        let value: Value = serde_json::from_slice(&written).unwrap();
        assert_eq!(value["features"][0]["properties"]["timestamp"], "1000");
    }

    #[test]
    fn test_compact_output_setting() {
        let storage = MockStorage::default();
        let config = MockConfig {
            pretty: false,
            ..MockConfig::new()
        };
        let pipeline = GeoJsonPipeline::new(storage.clone(), config);

        pipeline
            .write_output(&pipeline.assemble(&Extraction::default()))
            .unwrap();

        let written = String::from_utf8(storage.get_file("history.geojson").unwrap()).unwrap();
        assert_eq!(written, r#"{"type":"FeatureCollection","features":[]}"#);
    }
}
