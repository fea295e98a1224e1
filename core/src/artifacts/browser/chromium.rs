use super::error::BrowserHistoryError;
use crate::utils::time::webkit_micros_to_iso;
use common::events::{EventKind, TimelineEvent};
use log::{error, warn};
use rusqlite::{Connection, OpenFlags};

/// Query the most recent visits in a Chromium-family History store.
/// Visit times are microseconds since 1601-01-01 00:00:00 UTC
pub(crate) fn chromium_visits(
    path: &str,
    limit: &usize,
) -> Result<Vec<TimelineEvent>, BrowserHistoryError> {
    // Bypass SQLITE file lock
    let history_file = format!("file:{path}?immutable=1");
    let connection = Connection::open_with_flags(
        history_file,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_URI,
    );
    let conn = match connection {
        Ok(connect) => connect,
        Err(err) => {
            error!("[browser] Failed to read Chromium SQLITE history file {err:?}");
            return Err(BrowserHistoryError::SqliteParse);
        }
    };

    let statement = conn.prepare(
        "SELECT url, title, last_visit_time FROM urls ORDER BY last_visit_time DESC LIMIT ?1",
    );
    let mut stmt = match statement {
        Ok(query) => query,
        Err(err) => {
            error!("[browser] Failed to compose Chromium history SQL query {err:?}");
            return Err(BrowserHistoryError::BadSql);
        }
    };

    let history_data = stmt.query_map([*limit as i64], |row| {
        Ok((
            row.get::<_, String>("url").unwrap_or_default(),
            row.get::<_, String>("title").unwrap_or_default(),
            row.get::<_, i64>("last_visit_time").unwrap_or_default(),
        ))
    });

    match history_data {
        Ok(history_iter) => {
            let mut events: Vec<TimelineEvent> = Vec::new();

            for visit in history_iter {
                let (url, title, last_visit_time) = match visit {
                    Ok(result) => result,
                    Err(err) => {
                        warn!("[browser] Failed to iterate Chromium history row: {err:?}");
                        continue;
                    }
                };
                let timestamp = match webkit_micros_to_iso(&last_visit_time) {
                    Some(result) => result,
                    None => last_visit_time.to_string(),
                };

                events.push(TimelineEvent {
                    timestamp,
                    timestamp_raw: last_visit_time.to_string(),
                    source: path.to_string(),
                    kind: EventKind::BrowserVisit { url, title },
                });
            }
            Ok(events)
        }
        Err(err) => {
            error!("[browser] Failed to get Chromium history data: {err:?}");
            Err(BrowserHistoryError::SqliteParse)
        }
    }
}
