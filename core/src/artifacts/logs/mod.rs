pub(crate) mod access;
pub(crate) mod auth;

use crate::filesystem::files::{get_filename, list_case_files};
use common::events::TimelineEvent;

/// Scan the case tree for recognized log filenames and extract their events.
/// Authentication logs match on exact name, access logs on substring, since
/// web servers commonly rotate or prefix the latter
pub(crate) fn parse_case_logs(root: &str, reference_year: &i32) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = Vec::new();

    for path in list_case_files(root) {
        let name = get_filename(&path).to_lowercase();
        if name == "auth.log" {
            events.append(&mut auth::parse_auth_log(&path, reference_year));
        } else if name.contains("access.log") {
            events.append(&mut access::parse_access_log(&path));
        }
    }
    events
}
