pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::core::classifier::{classify, is_yogurt_product, Classification};
pub use crate::core::{
    etl::{EtlEngine, EtlReport},
    pipeline::YogurtPipeline,
};
pub use crate::domain::model::{Product, TransformResult, TransformedProduct};
pub use crate::utils::error::{EtlError, Result};
