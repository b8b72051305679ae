use crate::core::classifier::classify;
use crate::core::{ConfigProvider, Pipeline, Product, Storage, TransformResult, TransformedProduct};
use crate::utils::error::{EtlError, Result};

/// A top-level `null` decodes to no products; a `null` element decodes to a
/// zero-value product.
pub fn decode_products(data: &[u8]) -> Result<Vec<Product>> {
    let products: Option<Vec<Option<Product>>> =
        serde_json::from_slice(data).map_err(EtlError::DecodeError)?;

    Ok(products
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Pretty-printed with two-space indentation and no trailing newline.
pub fn encode_products(products: &[TransformedProduct]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(products).map_err(EtlError::EncodeError)
}

/// Classifies every product and counts yogurt and plain ones. One output
/// record per input record, in input order.
pub fn transform_products(products: Vec<Product>) -> TransformResult {
    let total_count = products.len();
    let mut transformed = Vec::with_capacity(total_count);
    let mut yogurt_count = 0;
    let mut plain_count = 0;

    for product in products {
        let classification = classify(&product.product_title);
        let is_yogurt = classification.is_yogurt();
        // Plainness only means something for yogurt.
        let is_plain = is_yogurt && product.is_plain_yogurt;

        if let Some(term) = classification.exclusion_term {
            tracing::debug!(
                "Excluded '{}' (matched exclusion term '{}')",
                product.product_title,
                term
            );
        }

        if is_yogurt {
            yogurt_count += 1;
        }
        if is_plain {
            plain_count += 1;
        }

        transformed.push(TransformedProduct {
            product_title: product.product_title,
            is_yogurt,
            is_plain,
            is_nonfat: product.is_nonfat,
            confidence: product.confidence,
        });
    }

    TransformResult {
        products: transformed,
        total_count,
        yogurt_count,
        plain_count,
    }
}

pub struct YogurtPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> YogurtPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for YogurtPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Product>> {
        tracing::debug!("Reading products from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;

        tracing::debug!("Decoding {} bytes of JSON", data.len());
        decode_products(&data)
    }

    async fn transform(&self, data: Vec<Product>) -> Result<TransformResult> {
        Ok(transform_products(data))
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path();
        let json_data = encode_products(&result.products)?;

        tracing::debug!("Writing {} bytes to {}", json_data.len(), output_path);
        self.storage.write_file(output_path, &json_data).await?;

        Ok(output_path.to_string())
    }
}
