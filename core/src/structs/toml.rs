use crate::utils::error::CaseworkError;
use log::error;
use serde::Deserialize;
use std::str::from_utf8;

#[derive(Debug, Deserialize)]
pub struct CaseToml {
    pub case: CaseOptions,
    pub output: Output,
}

#[derive(Debug, Deserialize)]
pub struct CaseOptions {
    /// Case identifier. The report path is derived from this alone
    pub id: String,
    /// Evidence directory populated by the ingestion service
    pub directory: String,
    /// Year assumed for log formats that omit one. Defaults to the processing year
    pub reference_year: Option<i32>,
    /// Cap on visits returned per history store. Defaults to 200
    pub visit_limit: Option<usize>,
    /// Metadata containers larger than this many bytes are skipped. Defaults to 100MB
    pub max_metadata_size: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Output {
    pub directory: String,
    pub logging: Option<String>,
}

impl CaseToml {
    /// Parse the casework TOML case description
    pub(crate) fn parse_case_toml_data(toml_data: &[u8]) -> Result<CaseToml, CaseworkError> {
        let toml_results = toml::from_str(from_utf8(toml_data).unwrap_or_default());
        let case_config: CaseToml = match toml_results {
            Ok(results) => results,
            Err(err) => {
                error!("[casework] Failed to parse TOML data. Error: {err:?}");
                return Err(CaseworkError::BadToml);
            }
        };
        Ok(case_config)
    }
}
