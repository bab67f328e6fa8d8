// Domain layer: records produced by the extractor and the ports the pipeline is built on.

pub mod model;
pub mod ports;
