use crate::{
    artifacts::{
        browser::parse_browser_history, hashes::hash_case_files, logs::parse_case_logs,
        metadata::extract_case_metadata,
    },
    error::CaseError,
    filesystem::{directory::is_directory, files::read_file},
    output::report::{render_report, write_report},
    structs::toml::CaseToml,
    timeline::build_timeline,
    utils::{logging::create_log_file, time::year_now},
};
use log::{error, info};
use simplelog::{Config, WriteLogger};

/// Analyze the case described by a TOML file at the provided path.
/// Returns the path of the written report for the delivery layer
pub fn parse_case_file(path: &str) -> Result<String, CaseError> {
    let buffer_results = read_file(path);
    let buffer = match buffer_results {
        Ok(results) => results,
        Err(_) => {
            return Err(CaseError::NoFile);
        }
    };
    parse_case_data(&buffer)
}

/// Analyze the case described by already read TOML data.
/// Returns the path of the written report for the delivery layer
pub fn parse_case_data(data: &[u8]) -> Result<String, CaseError> {
    let toml_results = CaseToml::parse_case_toml_data(data);
    let case_config = match toml_results {
        Ok(results) => results,
        Err(_) => {
            return Err(CaseError::BadToml);
        }
    };
    case_analysis(&case_config)
}

/// Run the analysis pipeline for one case: hash inventory, metadata findings,
/// then log and history events merged into a single timeline, all rendered to
/// one report. A malformed evidence item never stops the batch, only a missing
/// case directory or an unwritable report destination fails the run
fn case_analysis(config: &CaseToml) -> Result<String, CaseError> {
    if let Ok((log_file, level)) = create_log_file(&config.output) {
        let _ = WriteLogger::init(level, Config::default(), log_file);
    }

    let case_root = &config.case.directory;
    if !is_directory(case_root) {
        error!("[casework] Case directory {case_root} does not exist");
        return Err(CaseError::MissingCaseDirectory);
    }

    let reference_year = match config.case.reference_year {
        Some(year) => year,
        None => year_now(),
    };
    let default_visits = 200;
    let visit_limit = config.case.visit_limit.unwrap_or(default_visits);
    // 100MB cap on containers opened for metadata extraction
    let default_container_size = 104857600;
    let size_limit = config.case.max_metadata_size.unwrap_or(default_container_size);

    let hashes = hash_case_files(case_root);
    info!("[casework] Hashed {} files", hashes.len());

    let metadata = extract_case_metadata(case_root, &size_limit);
    info!("[casework] Recovered metadata for {} files", metadata.len());

    let mut events = parse_case_logs(case_root, &reference_year);
    events.append(&mut parse_browser_history(case_root, &visit_limit));
    let timeline = build_timeline(&events);
    info!("[casework] Merged {} events into the timeline", timeline.len());

    let report = render_report(&config.case.id, case_root, &hashes, &metadata, &timeline);
    let report_result = write_report(&report, &config.output, &config.case.id);
    match report_result {
        Ok(path) => Ok(path),
        Err(err) => {
            error!("[casework] Failed to write case report: {err:?}");
            Err(CaseError::ReportOutput)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_case_data, parse_case_file};
    use std::fs::{create_dir_all, read_to_string};
    use std::path::PathBuf;

    #[test]
    fn test_parse_case_file() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/case.toml");

        let report_path = parse_case_file(&test_location.display().to_string()).unwrap();
        assert_eq!(report_path, "./tmp/casework/case_2024-0001_report.md");

        let report = read_to_string(&report_path).unwrap();
        assert!(report.starts_with("# DFIR Case Report: 2024-0001"));
        assert!(report.contains("## File Hashes"));
        assert!(report.contains("auth.log"));
        assert!(report.contains("ssh_failed_login"));
        assert!(report.contains("http_request"));
        // The corrupt image produced hashes but no metadata findings
        assert!(report.contains("images/broken.jpg"));
        assert!(report.contains("(No metadata found)"));
    }

    #[test]
    #[should_panic(expected = "NoFile")]
    fn test_parse_case_file_missing() {
        let _ = parse_case_file("./tests/test_data/not_a_case.toml").unwrap();
    }

    #[test]
    #[should_panic(expected = "BadToml")]
    fn test_parse_case_data_malformed() {
        let _ = parse_case_data(b"case = [[[").unwrap();
    }

    #[test]
    #[should_panic(expected = "MissingCaseDirectory")]
    fn test_parse_case_data_missing_directory() {
        let config = r#"
[case]
id = "missing"
directory = "./tests/test_data/does_not_exist"

[output]
directory = "./tmp/casework"
"#;
        let _ = parse_case_data(config.as_bytes()).unwrap();
    }

    #[test]
    fn test_parse_case_data_empty_case() {
        let mut empty_case = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        empty_case.push("tmp/empty_case");
        create_dir_all(&empty_case).unwrap();

        let config = format!(
            r#"
[case]
id = "empty"
directory = "{}"

[output]
directory = "./tmp/casework"
"#,
            empty_case.display()
        );

        let report_path = parse_case_data(config.as_bytes()).unwrap();
        let report = read_to_string(&report_path).unwrap();
        assert!(report.contains("(No files hashed)"));
        assert!(report.contains("(No metadata found)"));
        assert!(report.contains("(No events found)"));
    }
}
