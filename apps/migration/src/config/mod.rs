use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Unsupported file or missing file extension: `{0}`")]
    UnsupportedFile(String),
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationConfig {
    pub database_url: String,
    pub trace_level: Option<String>,
    pub trace_json: Option<bool>,
}

impl MigrationConfig {
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for path in files {
            let path = path.as_ref();
            if !path
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                return Err(ConfigParsingError::UnsupportedFile(
                    path.display().to_string(),
                ));
            }
            figment = figment.merge(Yaml::file(path));
        }

        Self::extract(figment)
    }

    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let figment = configs
            .into_iter()
            .fold(Figment::new(), |figment, config| {
                figment.merge(Yaml::string(config.as_ref()))
            });

        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Self, ConfigParsingError> {
        figment
            .merge(Env::prefixed("MIGRATION_").lowercase(false))
            .extract()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))
    }
}
