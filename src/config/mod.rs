pub mod settings;

use crate::core::filter::ALL_INDUSTRIES;
use crate::domain::model::ReportFormat;
use crate::domain::ports::SearchConfig;
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use settings::SettingsFile;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "client-finder")]
#[command(about = "Browse and filter the potential-client store")]
pub struct CliConfig {
    /// Free-text needle matched against name, company and needs
    #[arg(short, long)]
    pub query: Option<String>,

    /// Industry label, or "all"
    #[arg(long)]
    pub industry: Option<String>,

    /// Drop matches scoring below this threshold
    #[arg(long)]
    pub min_score: Option<u8>,

    /// JSON store file to browse instead of the built-in clients
    #[arg(long)]
    pub store: Option<String>,

    /// TOML settings file; flags given here still win
    #[arg(long)]
    pub config: Option<String>,

    /// Directory for report files (stdout only when omitted)
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Report formats: json, csv")]
    pub format: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log memory and timing per phase")]
    pub monitor: bool,
}

/// Fully resolved search inputs, ready for the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    pub query: String,
    pub industry: String,
    pub min_score: Option<u8>,
    pub enabled_sources: Option<Vec<String>>,
    pub store_path: Option<String>,
    pub output_path: Option<String>,
    pub formats: Vec<ReportFormat>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            query: String::new(),
            industry: ALL_INDUSTRIES.to_string(),
            min_score: None,
            enabled_sources: None,
            store_path: None,
            output_path: None,
            formats: vec![ReportFormat::Json],
        }
    }
}

#[cfg(feature = "cli")]
impl SearchSettings {
    /// Merge order: flags beat the settings file, the file beats defaults.
    pub fn resolve(cli: &CliConfig, file: Option<&SettingsFile>) -> Result<Self> {
        let defaults = SearchSettings::default();

        let query = cli
            .query
            .clone()
            .or_else(|| file.and_then(|f| f.query().map(str::to_string)))
            .unwrap_or(defaults.query);

        let industry = cli
            .industry
            .clone()
            .or_else(|| file.and_then(|f| f.industry().map(str::to_string)))
            .unwrap_or(defaults.industry);

        let min_score = cli.min_score.or_else(|| file.and_then(|f| f.min_score()));

        let enabled_sources = file.and_then(|f| f.enabled_sources()).map(<[String]>::to_vec);

        let store_path = cli
            .store
            .clone()
            .or_else(|| file.and_then(|f| f.store_path().map(str::to_string)));

        let output_path = cli
            .output
            .clone()
            .or_else(|| file.and_then(|f| f.output_path().map(str::to_string)));

        let formats = if !cli.format.is_empty() {
            let mut parsed = Vec::with_capacity(cli.format.len());
            for name in &cli.format {
                parsed.push(name.parse::<ReportFormat>()?);
            }
            parsed
        } else if let Some(from_file) = file.map(|f| f.report_formats()).transpose()?.flatten() {
            from_file
        } else {
            defaults.formats
        };

        Ok(Self {
            query,
            industry,
            min_score,
            enabled_sources,
            store_path,
            output_path,
            formats,
        })
    }
}

impl SearchConfig for SearchSettings {
    fn query(&self) -> &str {
        &self.query
    }

    fn industry(&self) -> &str {
        &self.industry
    }

    fn min_score(&self) -> Option<u8> {
        self.min_score
    }

    fn enabled_sources(&self) -> Option<&[String]> {
        self.enabled_sources.as_deref()
    }

    fn store_path(&self) -> Option<&str> {
        self.store_path.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn formats(&self) -> &[ReportFormat] {
        &self.formats
    }
}

impl Validate for SearchSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("industry", &self.industry)?;

        if let Some(min_score) = self.min_score {
            validation::validate_range("min_score", min_score, 0, 100)?;
        }

        if let Some(sources) = &self.enabled_sources {
            if sources.is_empty() {
                return Err(FinderError::InvalidConfigValueError {
                    field: "sources".to_string(),
                    value: "[]".to_string(),
                    reason: "Restricting to zero sources matches nothing".to_string(),
                });
            }
            for source in sources {
                validation::validate_non_empty_string("sources", source)?;
            }
        }

        if let Some(path) = &self.store_path {
            validation::validate_path("store", path)?;
        }

        if let Some(path) = &self.output_path {
            validation::validate_path("output", path)?;
        }

        if self.formats.is_empty() {
            return Err(FinderError::MissingConfigError {
                field: "format".to_string(),
            });
        }

        Ok(())
    }
}

/// Inputs for a lead-discovery run. No store here: the batch is fabricated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverySettings {
    pub count: usize,
    pub min_score: u8,
    /// Fixed seed reproduces a batch exactly; `None` draws from entropy.
    pub rng_seed: Option<u64>,
    pub query: String,
    pub industry: String,
    pub output_path: Option<String>,
    pub formats: Vec<ReportFormat>,
}

impl DiscoverySettings {
    /// Matches the discovery score ceiling: generated scores never exceed 98.
    pub const MAX_MIN_SCORE: u8 = 98;
    pub const MAX_COUNT: usize = 5000;
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            count: 8,
            min_score: 70,
            rng_seed: None,
            query: String::new(),
            industry: ALL_INDUSTRIES.to_string(),
            output_path: None,
            formats: vec![ReportFormat::Json],
        }
    }
}

impl Validate for DiscoverySettings {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("count", self.count, 1)?;
        validation::validate_range("count", self.count, 1, Self::MAX_COUNT)?;
        validation::validate_range("min_score", self.min_score, 0, Self::MAX_MIN_SCORE)?;
        validation::validate_non_empty_string("industry", &self.industry)?;

        if let Some(path) = &self.output_path {
            validation::validate_path("output", path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_search_settings_validate() {
        let settings = SearchSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.industry, "all");
        assert_eq!(settings.formats, vec![ReportFormat::Json]);
    }

    #[test]
    fn out_of_range_min_score_is_rejected() {
        let settings = SearchSettings {
            min_score: Some(101),
            ..SearchSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn empty_source_restriction_is_rejected() {
        let settings = SearchSettings {
            enabled_sources: Some(vec![]),
            ..SearchSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn discovery_defaults_validate() {
        let settings = DiscoverySettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.count, 8);
        assert_eq!(settings.min_score, 70);
    }

    #[test]
    fn discovery_bounds_are_enforced() {
        let zero = DiscoverySettings {
            count: 0,
            ..DiscoverySettings::default()
        };
        assert!(zero.validate().is_err());

        let too_strict = DiscoverySettings {
            min_score: 99,
            ..DiscoverySettings::default()
        };
        assert!(too_strict.validate().is_err());
    }

    #[cfg(feature = "cli")]
    mod resolution {
        use super::*;
        use crate::config::settings::SettingsFile;

        fn parse_cli(args: &[&str]) -> CliConfig {
            CliConfig::try_parse_from(args).unwrap()
        }

        #[test]
        fn flags_override_the_settings_file() {
            let file = SettingsFile::from_toml_str(
                r#"
[profile]
name = "crm-hunt"

[search]
query = "бот"
industry = "Финансы"
min_score = 80

[output]
path = "./reports"
formats = ["csv"]
"#,
            )
            .unwrap();

            let cli = parse_cli(&["client-finder", "--query", "CRM", "--min-score", "90"]);
            let settings = SearchSettings::resolve(&cli, Some(&file)).unwrap();

            assert_eq!(settings.query, "CRM");
            assert_eq!(settings.min_score, Some(90));
            // Untouched flags fall through to the file.
            assert_eq!(settings.industry, "Финансы");
            assert_eq!(settings.output_path.as_deref(), Some("./reports"));
            assert_eq!(settings.formats, vec![ReportFormat::Csv]);
        }

        #[test]
        fn bare_invocation_resolves_to_defaults() {
            let cli = parse_cli(&["client-finder"]);
            let settings = SearchSettings::resolve(&cli, None).unwrap();

            assert_eq!(settings.query, "");
            assert_eq!(settings.industry, "all");
            assert_eq!(settings.min_score, None);
            assert!(settings.store_path.is_none());
            assert_eq!(settings.formats, vec![ReportFormat::Json]);
        }

        #[test]
        fn cli_formats_are_parsed_and_split() {
            let cli = parse_cli(&["client-finder", "--format", "json,csv"]);
            let settings = SearchSettings::resolve(&cli, None).unwrap();
            assert_eq!(
                settings.formats,
                vec![ReportFormat::Json, ReportFormat::Csv]
            );
        }

        #[test]
        fn unknown_cli_format_fails_resolution() {
            let cli = parse_cli(&["client-finder", "--format", "yaml"]);
            assert!(SearchSettings::resolve(&cli, None).is_err());
        }
    }
}
