pub mod classifier;
pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{Product, TransformResult, TransformedProduct};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
