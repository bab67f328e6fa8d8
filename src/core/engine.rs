use crate::core::{ConversionSummary, Pipeline};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::validate_distinct_paths;

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ConversionSummary> {
        let input = self.pipeline.input_location();
        let output = self.pipeline.output_location();

        // 必須在開啟任何檔案之前檢查
        validate_distinct_paths(input, output)?;

        tracing::info!("📖 Loading {}", input);
        let data = self.pipeline.read_input()?;

        self.pipeline.inspect(&data)?;

        tracing::info!("🔎 Extracting locations...");
        let extraction = self.pipeline.extract(&data);
        tracing::info!(
            "Found {} points and {} paths ({} skipped)",
            extraction.points.len(),
            extraction.lines.len(),
            extraction.dropped
        );

        if extraction.is_empty() {
            return Err(ConvertError::NoRecordsError {
                path: input.to_string(),
            });
        }

        let collection = self.pipeline.assemble(&extraction);

        tracing::info!("💾 Writing {} features...", collection.features.len());
        let output_path = self.pipeline.write_output(&collection)?;

        Ok(ConversionSummary {
            points: extraction.points.len(),
            lines: extraction.lines.len(),
            dropped: extraction.dropped,
            output_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Extraction, PointRecord};
    use crate::domain::model::Coordinate;
    use geojson::FeatureCollection;
    use serde_json::Value;
    use std::cell::Cell;

    struct StubPipeline {
        input: &'static str,
        output: &'static str,
        records: usize,
        reads: Cell<usize>,
        writes: Cell<usize>,
    }

    impl StubPipeline {
        fn new(input: &'static str, output: &'static str, records: usize) -> Self {
            Self {
                input,
                output,
                records,
                reads: Cell::new(0),
                writes: Cell::new(0),
            }
        }
    }

    impl Pipeline for StubPipeline {
        fn input_location(&self) -> &str {
            self.input
        }

        fn output_location(&self) -> &str {
            self.output
        }

        fn read_input(&self) -> Result<Value> {
            self.reads.set(self.reads.get() + 1);
            Ok(Value::Null)
        }

        fn inspect(&self, _data: &Value) -> Result<()> {
            Ok(())
        }

        fn extract(&self, _data: &Value) -> Extraction {
            let points = (0..self.records)
                .map(|i| PointRecord {
                    coordinates: Coordinate::new(i as f64, 0.0),
                    timestamp: "t".to_string(),
                })
                .collect();
            Extraction {
                points,
                ..Extraction::default()
            }
        }

        fn assemble(&self, extraction: &Extraction) -> FeatureCollection {
            crate::core::assembler::build_feature_collection(extraction)
        }

        fn write_output(&self, _collection: &FeatureCollection) -> Result<String> {
            self.writes.set(self.writes.get() + 1);
            Ok(self.output.to_string())
        }
    }

    #[test]
    fn test_identical_paths_abort_before_reading() {
        let engine = ConversionEngine::new(StubPipeline::new("a.json", "a.json", 1));

        assert!(matches!(engine.run(), Err(ConvertError::UsageError { .. })));
        assert_eq!(engine.pipeline.reads.get(), 0);
        assert_eq!(engine.pipeline.writes.get(), 0);
    }

    #[test]
    fn test_no_records_skips_write() {
        let engine = ConversionEngine::new(StubPipeline::new("in.json", "out.geojson", 0));

        assert!(matches!(
            engine.run(),
            Err(ConvertError::NoRecordsError { ref path }) if path == "in.json"
        ));
        assert_eq!(engine.pipeline.writes.get(), 0);
    }

    #[test]
    fn test_summary_counts_records() {
        let engine = ConversionEngine::new(StubPipeline::new("in.json", "out.geojson", 3));

        let summary = engine.run().unwrap();
        assert_eq!(summary.points, 3);
        assert_eq!(summary.lines, 0);
        assert_eq!(summary.output_path, "out.geojson");
        assert_eq!(engine.pipeline.writes.get(), 1);
    }
}
