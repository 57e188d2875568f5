use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Home-screen banner with an optional display window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    /// Sort position, ascending.
    pub position: i32,
    pub active: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Banner {
    /// Whether the banner should be displayed at `now`: the active flag
    /// is set and `now` falls inside the half-open display window.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.active
            && self.starts_at.map_or(true, |t| t <= now)
            && self.ends_at.map_or(true, |t| now < t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn banner(active: bool, starts_at: Option<i64>, ends_at: Option<i64>) -> Banner {
        let at = |secs| Utc.timestamp_opt(secs, 0).unwrap();
        Banner {
            id: 1,
            title: "Safety week".into(),
            image_url: "https://cdn.example.com/safety.png".into(),
            link_url: None,
            position: 0,
            active,
            starts_at: starts_at.map(at),
            ends_at: ends_at.map(at),
            created_at: at(0),
            updated_at: at(0),
        }
    }

    #[test]
    fn inactive_banner_is_never_live() {
        let now = Utc.timestamp_opt(500, 0).unwrap();
        assert!(!banner(false, None, None).is_live(now));
    }

    #[test]
    fn window_is_half_open() {
        let now = Utc.timestamp_opt(500, 0).unwrap();
        assert!(banner(true, Some(500), Some(1000)).is_live(now));
        assert!(!banner(true, Some(501), None).is_live(now));
        assert!(!banner(true, None, Some(500)).is_live(now));
    }

    #[test]
    fn unbounded_window_is_live_while_active() {
        let now = Utc.timestamp_opt(500, 0).unwrap();
        assert!(banner(true, None, None).is_live(now));
    }
}
