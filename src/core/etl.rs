use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Counts and destination of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtlReport {
    pub output_path: String,
    pub total_count: usize,
    pub yogurt_count: usize,
    pub plain_count: usize,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load in order, printing the summary lines
    /// as each stage completes. Stops at the first failure.
    pub async fn run(&self) -> Result<EtlReport> {
        tracing::info!("Starting ETL process");

        let products = self.pipeline.extract().await?;
        println!("Successfully parsed {} products", products.len());
        self.monitor.log_stats("Extract");

        let result = self.pipeline.transform(products).await?;
        println!(
            "Total yogurt products: {} out of {}",
            result.yogurt_count, result.total_count
        );
        println!(
            "Total plain products: {} out of {}",
            result.plain_count, result.total_count
        );
        self.monitor.log_stats("Transform");

        let total_count = result.total_count;
        let yogurt_count = result.yogurt_count;
        let plain_count = result.plain_count;

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(EtlReport {
            output_path,
            total_count,
            yogurt_count,
            plain_count,
        })
    }
}
