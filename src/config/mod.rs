#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const USAGE: &str = "Usage: yogurt-etl [OPTIONS] <INPUT> <OUTPUT>";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "yogurt-etl", version)]
#[command(about = "Classify yogurt products in a JSON product list")]
pub struct CliConfig {
    /// JSON array of products to read
    #[arg(value_name = "INPUT")]
    pub input_path: String,

    /// Where to write the transformed JSON array
    #[arg(value_name = "OUTPUT")]
    pub output_path: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::{ErrorCategory, EtlError};
    use clap::CommandFactory;

    #[test]
    fn test_parse_two_positional_arguments() {
        let config = CliConfig::try_parse_from(["yogurt-etl", "in.json", "out.json"]).unwrap();

        assert_eq!(config.input_path(), "in.json");
        assert_eq!(config.output_path(), "out.json");
        assert!(!config.verbose);
        assert!(!config.monitor);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_do_not_count_as_arguments() {
        let config =
            CliConfig::try_parse_from(["yogurt-etl", "-v", "in.json", "--monitor", "out.json"])
                .unwrap();

        assert!(config.verbose);
        assert!(config.monitor);
        assert_eq!(config.output_path, "out.json");
    }

    #[test]
    fn test_wrong_argument_count_is_rejected() {
        assert!(CliConfig::try_parse_from(["yogurt-etl"]).is_err());
        assert!(CliConfig::try_parse_from(["yogurt-etl", "in.json"]).is_err());
        assert!(CliConfig::try_parse_from(["yogurt-etl", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_parse_failure_becomes_usage_error() {
        let parse_err = CliConfig::try_parse_from(["yogurt-etl", "in.json"]).unwrap_err();
        let err = EtlError::from(parse_err);

        assert!(matches!(err, EtlError::UsageError { .. }));
        assert_eq!(err.category(), ErrorCategory::Usage);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("Usage: yogurt-etl"));
        assert!(err.user_friendly_message().contains("<OUTPUT>"));
    }

    #[test]
    fn test_usage_line_matches_clap() {
        let rendered = CliConfig::command().render_usage().to_string();
        assert_eq!(rendered.trim(), USAGE);
    }

    #[test]
    fn test_empty_path_fails_validation() {
        let config = CliConfig::try_parse_from(["yogurt-etl", "", "out.json"]).unwrap();
        assert!(config.validate().is_err());
    }
}
