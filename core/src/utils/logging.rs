use super::error::CaseworkError;
use crate::structs::toml::Output;
use log::{error, LevelFilter};
use std::fs::{create_dir_all, File};

/// Create the run log file and logging level based on TOML `Output` configuration.
/// One case analysis is one run, so a rerun replaces the previous log
pub(crate) fn create_log_file(output: &Output) -> Result<(File, LevelFilter), CaseworkError> {
    let path = &output.directory;
    let result = create_dir_all(path);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!("[casework] Failed to create logging output directory for {path}. Error: {err:?}");
            return Err(CaseworkError::CreateDirectory);
        }
    }

    let output_result = File::create(format!("{path}/casework.log"));
    let log_file = match output_result {
        Ok(result) => result,
        Err(err) => {
            error!("[casework] Failed to create log file at {path}. Error: {err:?}");
            return Err(CaseworkError::LogFile);
        }
    };

    let level = if let Some(log_level) = &output.logging {
        match log_level.to_lowercase().as_str() {
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            _ => LevelFilter::Warn,
        }
    } else {
        LevelFilter::Warn
    };

    Ok((log_file, level))
}
