pub(crate) mod chromium;
mod error;
pub(crate) mod firefox;

use crate::filesystem::files::{get_filename, list_case_files};
use common::events::TimelineEvent;
use log::warn;

/// Locate Chromium (`History`) and Gecko (`places.sqlite`) stores anywhere in
/// the case tree and extract their visit events. A store that cannot be read
/// contributes nothing, the remaining stores are still scanned
pub(crate) fn parse_browser_history(root: &str, visit_limit: &usize) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = Vec::new();

    for path in list_case_files(root) {
        let name = get_filename(&path);
        if name == "History" {
            match chromium::chromium_visits(&path, visit_limit) {
                Ok(mut visits) => events.append(&mut visits),
                Err(err) => warn!("[browser] Skipping Chromium store {path}: {err:?}"),
            }
        } else if name == "places.sqlite" {
            match firefox::firefox_visits(&path, visit_limit) {
                Ok(mut visits) => events.append(&mut visits),
                Err(err) => warn!("[browser] Skipping Firefox store {path}: {err:?}"),
            }
        }
    }
    events
}
