use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Best-effort ISO8601 timestamp. Falls back to the raw artifact value
    pub timestamp: String,
    /// Original unnormalized timestamp value from the artifact
    pub timestamp_raw: String,
    /// File the event was extracted from
    pub source: String,
    #[serde(flatten)]
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    SshFailedLogin {
        user: String,
        ip: String,
    },
    HttpRequest {
        ip: String,
        method: String,
        path: String,
        status: u16,
    },
    BrowserVisit {
        url: String,
        title: String,
    },
    Generic {
        details: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{EventKind, TimelineEvent};

    #[test]
    fn test_event_external_shape() {
        let event = TimelineEvent {
            timestamp: String::from("2024-01-10T12:34:56"),
            timestamp_raw: String::from("Jan 10 12:34:56"),
            source: String::from("/evidence/auth.log"),
            kind: EventKind::SshFailedLogin {
                user: String::from("bob"),
                ip: String::from("10.0.0.5"),
            },
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "ssh_failed_login");
        assert_eq!(value["timestamp"], "2024-01-10T12:34:56");
        assert_eq!(value["timestamp_raw"], "Jan 10 12:34:56");
        assert_eq!(value["source"], "/evidence/auth.log");
        assert_eq!(value["user"], "bob");
        assert_eq!(value["ip"], "10.0.0.5");
    }

    #[test]
    fn test_event_kind_labels() {
        let event = TimelineEvent {
            timestamp: String::from("2022-02-22T06:12:40"),
            timestamp_raw: String::from("13289983960000000"),
            source: String::from("/evidence/History"),
            kind: EventKind::BrowserVisit {
                url: String::from("https://www.example.com/"),
                title: String::new(),
            },
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "browser_visit");
        assert_eq!(value["url"], "https://www.example.com/");
    }
}
