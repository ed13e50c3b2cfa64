use crate::domain::model::Domain;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    #[serde(rename = "domain")]
    pub domains: Vec<DomainConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

/// One `[[domain]]` table: the tag plus the source and target store paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainConfig {
    pub tag: String,
    pub source: String,
    pub target: String,
}

impl DomainConfig {
    pub fn domain(&self) -> Result<Domain> {
        Domain::from_tag(&self.tag).ok_or_else(|| EtlError::InvalidConfigValueError {
            field: "domain.tag".to_string(),
            value: self.tag.clone(),
            reason: "Known tags: car, house, job".to_string(),
        })
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` references with the environment value, leaving
    /// unknown variables untouched.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;

        if self.domains.is_empty() {
            return Err(EtlError::ConfigValidationError {
                field: "domain".to_string(),
                message: "At least one [[domain]] table is required".to_string(),
            });
        }

        for domain in &self.domains {
            domain.domain()?;
            validation::validate_path("domain.source", &domain.source)?;
            validation::validate_path("domain.target", &domain.target)?;
        }

        Ok(())
    }
}
