use crate::domain::model::ReportFormat;
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A saved search profile. Every section except `[profile]` is optional;
/// command-line flags override whatever the file provides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsFile {
    pub profile: ProfileSection,
    pub search: Option<SearchSection>,
    pub sources: Option<SourcesSection>,
    pub store: Option<StoreSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSection {
    pub query: Option<String>,
    pub industry: Option<String>,
    pub min_score: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesSection {
    pub enabled: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
    pub formats: Option<Vec<String>>,
}

impl SettingsFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FinderError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FinderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values.
    /// Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_settings(&self) -> Result<()> {
        validation::validate_non_empty_string("profile.name", &self.profile.name)?;

        if let Some(min_score) = self.min_score() {
            validation::validate_range("search.min_score", min_score, 0, 100)?;
        }

        if let Some(sources) = self.enabled_sources() {
            if sources.is_empty() {
                return Err(FinderError::ConfigValidationError {
                    field: "sources.enabled".to_string(),
                    message: "List at least one source, or drop the [sources] section"
                        .to_string(),
                });
            }
            for source in sources {
                validation::validate_non_empty_string("sources.enabled", source)?;
            }
        }

        if let Some(path) = self.store_path() {
            validation::validate_path("store.path", path)?;
        }

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }

        // Formats are parsed eagerly so a typo fails here, not mid-run.
        self.report_formats()?;

        Ok(())
    }

    pub fn query(&self) -> Option<&str> {
        self.search.as_ref()?.query.as_deref()
    }

    pub fn industry(&self) -> Option<&str> {
        self.search.as_ref()?.industry.as_deref()
    }

    pub fn min_score(&self) -> Option<u8> {
        self.search.as_ref()?.min_score
    }

    pub fn enabled_sources(&self) -> Option<&[String]> {
        self.sources.as_ref()?.enabled.as_deref()
    }

    pub fn store_path(&self) -> Option<&str> {
        self.store.as_ref()?.path.as_deref()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref()?.path.as_deref()
    }

    /// Parsed `[output] formats`, or `None` when the file does not set them.
    pub fn report_formats(&self) -> Result<Option<Vec<ReportFormat>>> {
        let Some(names) = self.output.as_ref().and_then(|o| o.formats.as_ref()) else {
            return Ok(None);
        };

        let mut formats = Vec::with_capacity(names.len());
        for name in names {
            formats.push(name.parse::<ReportFormat>()?);
        }
        Ok(Some(formats))
    }
}

impl Validate for SettingsFile {
    fn validate(&self) -> Result<()> {
        self.validate_settings()
    }
}
