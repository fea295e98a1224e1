use crate::filesystem::files::read_file;
use crate::utils::{regex_options::create_regex, strings::extract_utf8_string};
use chrono::NaiveDateTime;
use common::events::{EventKind, TimelineEvent};
use log::warn;

/// Pull failed SSH login attempts out of an auth.log file.
/// These logs carry no year, so the caller supplies the reference year used for
/// normalization. Entries from a log spanning a year boundary are misdated by
/// this heuristic, a known limitation of the format itself
pub(crate) fn parse_auth_log(path: &str, reference_year: &i32) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = Vec::new();

    let read_result = read_file(path);
    let buffer = match read_result {
        Ok(result) => result,
        Err(err) => {
            warn!("[logs] Could not read auth log {path}: {err:?}");
            return events;
        }
    };

    // Covers both "Failed password for user" and "Failed password for invalid user user"
    let failed_login = create_regex(
        r"(?i)^(?P<ts>\w{3}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2}).*Failed password for(?: invalid user)?\s+(?P<user>\S+)\s+from\s+(?P<ip>\d{1,3}(?:\.\d{1,3}){3})",
    )
    .unwrap();

    for line in extract_utf8_string(&buffer).lines() {
        let matches = match failed_login.captures(line) {
            Some(result) => result,
            None => continue,
        };
        let ts_raw = &matches["ts"];

        let parsed = NaiveDateTime::parse_from_str(
            &format!("{reference_year} {ts_raw}"),
            "%Y %b %d %H:%M:%S",
        );
        let timestamp = match parsed {
            Ok(result) => result.format("%Y-%m-%dT%H:%M:%S").to_string(),
            Err(_err) => ts_raw.to_string(),
        };

        events.push(TimelineEvent {
            timestamp,
            timestamp_raw: ts_raw.to_string(),
            source: path.to_string(),
            kind: EventKind::SshFailedLogin {
                user: matches["user"].to_string(),
                ip: matches["ip"].to_string(),
            },
        });
    }
    events
}

#[cfg(test)]
mod tests {
    use super::parse_auth_log;
    use common::events::EventKind;
    use std::path::PathBuf;

    #[test]
    fn test_parse_auth_log() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/logs/auth.log");

        let results = parse_auth_log(&test_location.display().to_string(), &2024);
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].timestamp, "2024-01-10T12:34:56");
        assert_eq!(results[0].timestamp_raw, "Jan 10 12:34:56");
        assert_eq!(
            results[0].kind,
            EventKind::SshFailedLogin {
                user: String::from("bob"),
                ip: String::from("10.0.0.5"),
            }
        );

        assert_eq!(results[1].timestamp, "2024-02-03T07:08:09");
        assert_eq!(
            results[1].kind,
            EventKind::SshFailedLogin {
                user: String::from("carol"),
                ip: String::from("172.16.0.2"),
            }
        );
    }

    #[test]
    fn test_parse_auth_log_keeps_raw_timestamp() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/logs/auth.log");

        let results = parse_auth_log(&test_location.display().to_string(), &2024);

        // "Xxx" is not a month, so normalization fails and the raw value is kept
        assert_eq!(results[2].timestamp, "Xxx 10 12:34:56");
        assert_eq!(results[2].timestamp_raw, "Xxx 10 12:34:56");
        assert_eq!(
            results[2].kind,
            EventKind::SshFailedLogin {
                user: String::from("dave"),
                ip: String::from("10.0.0.7"),
            }
        );
    }

    #[test]
    fn test_parse_auth_log_missing_file() {
        let results = parse_auth_log("./tests/test_data/does_not_exist/auth.log", &2024);
        assert_eq!(results.len(), 0);
    }
}
