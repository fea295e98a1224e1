use crate::filesystem::files::read_file;
use crate::utils::{regex_options::create_regex, strings::extract_utf8_string};
use chrono::NaiveDateTime;
use common::events::{EventKind, TimelineEvent};
use log::warn;

/// Pull HTTP request events out of an Apache-style access log.
/// Example line: `1.2.3.4 - - [10/Oct/2000:13:55:36 -0700] "GET /index.html HTTP/1.0" 200 2326`
pub(crate) fn parse_access_log(path: &str) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = Vec::new();

    let read_result = read_file(path);
    let buffer = match read_result {
        Ok(result) => result,
        Err(err) => {
            warn!("[logs] Could not read access log {path}: {err:?}");
            return events;
        }
    };

    let request_line = create_regex(
        r#"(?i)^(?P<ip>\d{1,3}(?:\.\d{1,3}){3}).*\[(?P<ts>[^\]]+)\]\s+"(?P<method>\S+)\s+(?P<path>\S+)\s+[^"]+"\s+(?P<status>\d{3})"#,
    )
    .unwrap();

    for line in extract_utf8_string(&buffer).lines() {
        let matches = match request_line.captures(line) {
            Some(result) => result,
            None => continue,
        };
        let ts_raw = &matches["ts"];

        // The bracketed value carries an offset ("10/Oct/2000:13:55:36 -0700").
        // Normalization only reads the date-time token and keeps the raw value on failure
        let timestamp = match ts_raw.split_whitespace().next() {
            Some(value) => match NaiveDateTime::parse_from_str(value, "%d/%b/%Y:%H:%M:%S") {
                Ok(result) => result.format("%Y-%m-%dT%H:%M:%S").to_string(),
                Err(_err) => ts_raw.to_string(),
            },
            None => ts_raw.to_string(),
        };

        events.push(TimelineEvent {
            timestamp,
            timestamp_raw: ts_raw.to_string(),
            source: path.to_string(),
            kind: EventKind::HttpRequest {
                ip: matches["ip"].to_string(),
                method: matches["method"].to_string(),
                path: matches["path"].to_string(),
                status: matches["status"].parse().unwrap_or_default(),
            },
        });
    }
    events
}
