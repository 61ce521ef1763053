use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Scheduled => write!(f, "scheduled"),
            EventStatus::Completed => write!(f, "completed"),
            EventStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(EventStatus::Scheduled),
            "completed" => Ok(EventStatus::Completed),
            "cancelled" => Ok(EventStatus::Cancelled),
            _ => Err(format!("Unknown event status: {s}")),
        }
    }
}

/// A calendar entry extracted from a meeting's action items.
///
/// Pure data entry: validation of the date/time against a real calendar
/// backend happens outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub meeting_id: Uuid,
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: Option<String>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
}

impl CalendarEvent {
    pub fn new(meeting_id: Uuid, title: String, date: String, time: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            meeting_id,
            title,
            date,
            time,
            description: None,
            status: EventStatus::Scheduled,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}
