use super::error::ReportError;
use crate::structs::toml::Output;
use common::events::{EventKind, TimelineEvent};
use common::files::{FileHashes, FileMetadata};
use log::error;
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::Path;

/// Render the markdown case report: hash inventory, per-file metadata
/// findings, and the merged event timeline, always in that order
pub(crate) fn render_report(
    case_id: &str,
    case_root: &str,
    hashes: &[FileHashes],
    metadata: &[FileMetadata],
    timeline: &[TimelineEvent],
) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("# DFIR Case Report: {case_id}"));
    lines.push(String::new());
    lines.push(format!("Case directory: {case_root}"));
    lines.push(String::new());

    lines.push(String::from("## File Hashes"));
    lines.push(String::new());
    if hashes.is_empty() {
        lines.push(String::from("(No files hashed)"));
    } else {
        let rows: Vec<Vec<String>> = hashes
            .iter()
            .map(|entry| {
                vec![
                    relative_path(&entry.path, case_root),
                    entry.md5.clone(),
                    entry.sha1.clone(),
                    entry.sha256.clone(),
                ]
            })
            .collect();
        lines.push(md_table(&["File", "MD5", "SHA1", "SHA256"], &rows));
    }
    lines.push(String::new());

    lines.push(String::from("## Metadata Findings"));
    lines.push(String::new());
    if metadata.is_empty() {
        lines.push(String::from("(No metadata found)"));
    } else {
        let sections: Vec<String> = metadata
            .iter()
            .map(|entry| {
                let mut block = vec![format!("### {}", relative_path(&entry.path, case_root))];
                for (tag, value) in &entry.metadata {
                    block.push(format!("- {tag}: {value}"));
                }
                block.join("\n")
            })
            .collect();
        lines.push(sections.join("\n\n"));
    }
    lines.push(String::new());

    lines.push(String::from("## Event Timeline"));
    lines.push(String::new());
    if timeline.is_empty() {
        lines.push(String::from("(No events found)"));
    } else {
        let rows: Vec<Vec<String>> = timeline
            .iter()
            .map(|event| {
                vec![
                    event.timestamp.clone(),
                    event_type(event).to_string(),
                    event_details(event),
                ]
            })
            .collect();
        lines.push(md_table(&["Timestamp", "Type", "Details"], &rows));
    }
    lines.push(String::new());

    lines.join("\n")
}

/// Write the report under the output directory. The path is derived from the
/// case id alone, so rerunning an analysis replaces the previous report
pub(crate) fn write_report(
    report: &str,
    output: &Output,
    case_id: &str,
) -> Result<String, ReportError> {
    let result = create_dir_all(&output.directory);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!(
                "[report] Failed to create report directory {}. Error: {err:?}",
                output.directory
            );
            return Err(ReportError::CreateDirectory);
        }
    }

    let report_path = format!("{}/case_{case_id}_report.md", output.directory);
    let report_file_result = File::create(&report_path);
    let mut report_file = match report_file_result {
        Ok(results) => results,
        Err(err) => {
            error!("[report] Failed to create report file at {report_path}. Error: {err:?}");
            return Err(ReportError::CreateFile);
        }
    };

    let write_result = report_file.write_all(report.as_bytes());
    match write_result {
        Ok(_) => {}
        Err(err) => {
            error!("[report] Failed to write report at {report_path}. Error: {err:?}");
            return Err(ReportError::WriteReport);
        }
    }
    Ok(report_path)
}

/// Report rows reference evidence relative to the case root
fn relative_path(path: &str, case_root: &str) -> String {
    match Path::new(path).strip_prefix(case_root) {
        Ok(result) => result.display().to_string(),
        Err(_err) => path.to_string(),
    }
}

/// Stable kind label matching the external event shape
fn event_type(event: &TimelineEvent) -> &'static str {
    match &event.kind {
        EventKind::SshFailedLogin { .. } => "ssh_failed_login",
        EventKind::HttpRequest { .. } => "http_request",
        EventKind::BrowserVisit { .. } => "browser_visit",
        EventKind::Generic { .. } => "generic",
    }
}

/// Human readable detail string for each event kind
fn event_details(event: &TimelineEvent) -> String {
    let source = &event.source;
    match &event.kind {
        EventKind::SshFailedLogin { user, ip } => {
            format!("Failed SSH login for user `{user}` from {ip} (source: {source})")
        }
        EventKind::HttpRequest {
            ip,
            method,
            path,
            status,
        } => {
            format!("HTTP {method} {path} from {ip} with status {status} (source: {source})")
        }
        EventKind::BrowserVisit { url, title } => {
            format!("Visited {url} ({title}) (source: {source})")
        }
        EventKind::Generic { details } => {
            format!("Event details: {details} (source: {source})")
        }
    }
}

/// Markdown table with a header row and a separator row
fn md_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = vec![format!("| {} |", headers.join(" | "))];
    out.push(format!("| {} |", vec!["---"; headers.len()].join(" | ")));
    for row in rows {
        out.push(format!("| {} |", row.join(" | ")));
    }
    out.join("\n")
}
