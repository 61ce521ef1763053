use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

use super::connection::DatabaseManager;
use crate::models::{CalendarEvent, EventStatus};

pub struct CalendarEventRepository {
    pool: Pool<Sqlite>,
}

impl CalendarEventRepository {
    pub fn new(db: &DatabaseManager) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    pub async fn create(&self, event: &CalendarEvent) -> Result<String> {
        sqlx::query(
            r#"
            INSERT INTO calendar_events (
                id, meeting_id, title, date, time, description, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(event.id.to_string())
        .bind(event.meeting_id.to_string())
        .bind(&event.title)
        .bind(&event.date)
        .bind(&event.time)
        .bind(&event.description)
        .bind(event.status.to_string())
        .bind(event.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to insert calendar event")?;

        Ok(event.id.to_string())
    }

    pub async fn list_for_meeting(&self, meeting_id: &Uuid) -> Result<Vec<CalendarEvent>> {
        let rows = sqlx::query(
            r#"
            SELECT id, meeting_id, title, date, time, description, status, created_at
            FROM calendar_events
            WHERE meeting_id = ?
            ORDER BY date, time
            "#,
        )
        .bind(meeting_id.to_string())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list calendar events")?;

        rows.iter().map(Self::row_to_event).collect()
    }

    /// Upcoming events within the next `days_ahead` days, soonest first.
    pub async fn list_upcoming(&self, days_ahead: i64) -> Result<Vec<CalendarEvent>> {
        let rows = sqlx::query(
            r#"
            SELECT id, meeting_id, title, date, time, description, status, created_at
            FROM calendar_events
            WHERE date(date) BETWEEN date('now') AND date('now', '+' || ? || ' days')
            ORDER BY date, time
            "#,
        )
        .bind(days_ahead)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list upcoming events")?;

        rows.iter().map(Self::row_to_event).collect()
    }

    fn row_to_event(row: &sqlx::sqlite::SqliteRow) -> Result<CalendarEvent> {
        let id_str: String = row.get("id");
        let meeting_id_str: String = row.get("meeting_id");
        let status_str: String = row.get("status");
        let created_at_str: String = row.get("created_at");

        Ok(CalendarEvent {
            id: Uuid::parse_str(&id_str).context("Invalid event id")?,
            meeting_id: Uuid::parse_str(&meeting_id_str).context("Invalid meeting id")?,
            title: row.get("title"),
            date: row.get("date"),
            time: row.get("time"),
            description: row.get("description"),
            status: status_str
                .parse::<EventStatus>()
                .unwrap_or(EventStatus::Scheduled),
            created_at: DateTime::parse_from_rfc3339(&created_at_str)
                .context("Invalid created_at timestamp")?
                .with_timezone(&Utc),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MeetingRepository;
    use crate::models::Meeting;
    use chrono::NaiveDate;

    async fn setup_meeting(db: &DatabaseManager) -> Uuid {
        let meeting = Meeting::new(
            "Planning".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        );
        MeetingRepository::new(db).create(&meeting).await.unwrap();
        meeting.id
    }

    #[tokio::test]
    async fn test_create_and_list_events() {
        let db = DatabaseManager::open_in_memory().await.unwrap();
        let meeting_id = setup_meeting(&db).await;
        let repo = CalendarEventRepository::new(&db);

        let event = CalendarEvent::new(
            meeting_id,
            "Design review".to_string(),
            "2024-03-20".to_string(),
            "14:00".to_string(),
        )
        .with_description("Review the new mockups".to_string());
        repo.create(&event).await.unwrap();

        let events = repo.list_for_meeting(&meeting_id).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Design review");
        assert_eq!(events[0].status, EventStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_list_upcoming_window() {
        let db = DatabaseManager::open_in_memory().await.unwrap();
        let meeting_id = setup_meeting(&db).await;
        let repo = CalendarEventRepository::new(&db);

        let tomorrow = (Utc::now() + chrono::Duration::days(1))
            .format("%Y-%m-%d")
            .to_string();
        let far_out = (Utc::now() + chrono::Duration::days(30))
            .format("%Y-%m-%d")
            .to_string();

        repo.create(&CalendarEvent::new(
            meeting_id,
            "Soon".to_string(),
            tomorrow,
            "09:00".to_string(),
        ))
        .await
        .unwrap();
        repo.create(&CalendarEvent::new(
            meeting_id,
            "Later".to_string(),
            far_out,
            "09:00".to_string(),
        ))
        .await
        .unwrap();

        let upcoming = repo.list_upcoming(7).await.unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].title, "Soon");
    }

    #[tokio::test]
    async fn test_events_deleted_with_meeting() {
        let db = DatabaseManager::open_in_memory().await.unwrap();
        let meeting_id = setup_meeting(&db).await;
        let repo = CalendarEventRepository::new(&db);

        let event = CalendarEvent::new(
            meeting_id,
            "Sync".to_string(),
            "2024-03-21".to_string(),
            "10:00".to_string(),
        );
        repo.create(&event).await.unwrap();

        MeetingRepository::new(&db)
            .delete(&meeting_id)
            .await
            .unwrap();

        let events = repo.list_for_meeting(&meeting_id).await.unwrap();
        assert!(events.is_empty());
    }
}
