pub mod assembler;
pub mod engine;
pub mod extractor;
pub mod key_trace;
pub mod latlng;
pub mod loader;
pub mod pipeline;

pub use crate::domain::model::{
    ConversionSummary, Coordinate, ExtractOptions, Extraction, LineRecord, PointRecord,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
