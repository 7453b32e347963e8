pub mod pipeline;

pub use pipeline::{
    QuantizerOverrides, RenderPipeline, RenderReport, RenderRequest, Timings, WrittenView,
};
