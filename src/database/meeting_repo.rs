use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Pool, Row, Sqlite};
use std::collections::HashMap;
use uuid::Uuid;

use super::connection::DatabaseManager;
use crate::models::Meeting;

/// Aggregate numbers for the stats view.
#[derive(Debug, Clone)]
pub struct MeetingStatistics {
    pub total_meetings: i64,
    pub language_stats: Vec<(String, i64)>,
    pub recent_count: i64,
    pub calendar_events: i64,
    pub task_stats: HashMap<String, i64>,
}

pub struct MeetingRepository {
    pool: Pool<Sqlite>,
}

impl MeetingRepository {
    pub fn new(db: &DatabaseManager) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    /// Insert a new meeting record.
    pub async fn create(&self, meeting: &Meeting) -> Result<String> {
        let decisions_json =
            serde_json::to_string(&meeting.decisions).context("Failed to serialize decisions")?;
        let action_items_json = serde_json::to_string(&meeting.action_items)
            .context("Failed to serialize action_items")?;
        let participants_json = serde_json::to_string(&meeting.participants)
            .context("Failed to serialize participants")?;
        let follow_up_json =
            serde_json::to_string(&meeting.follow_up).context("Failed to serialize follow_up")?;

        sqlx::query(
            r#"
            INSERT INTO meetings (
                id, title, date, duration, transcript, summary,
                decisions, action_items, participants, follow_up,
                visual_summary_url, language, embedding, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(meeting.id.to_string())
        .bind(&meeting.title)
        .bind(meeting.date.to_string())
        .bind(&meeting.duration)
        .bind(&meeting.transcript)
        .bind(&meeting.summary)
        .bind(&decisions_json)
        .bind(&action_items_json)
        .bind(&participants_json)
        .bind(&follow_up_json)
        .bind(&meeting.visual_summary_url)
        .bind(&meeting.language)
        .bind(&meeting.embedding)
        .bind(meeting.created_at.to_rfc3339())
        .bind(meeting.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to insert meeting")?;

        Ok(meeting.id.to_string())
    }

    /// Get a complete meeting record including transcript and embedding.
    pub async fn get_by_id(&self, id: &Uuid) -> Result<Option<Meeting>> {
        let row = sqlx::query(
            r#"
            SELECT
                id, title, date, duration, transcript, summary,
                decisions, action_items, participants, follow_up,
                visual_summary_url, language, embedding, created_at, updated_at
            FROM meetings
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch meeting")?;

        row.map(|r| Self::row_to_meeting(&r)).transpose()
    }

    /// List meetings, most recently created first. Embeddings are not loaded.
    pub async fn list_all(&self, limit: i64, offset: i64) -> Result<Vec<Meeting>> {
        let rows = sqlx::query(
            r#"
            SELECT
                id, title, date, duration, transcript, summary,
                decisions, action_items, participants, follow_up,
                visual_summary_url, language, NULL AS embedding, created_at, updated_at
            FROM meetings
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list meetings")?;

        rows.iter().map(Self::row_to_meeting).collect()
    }

    /// Replace a meeting's stored embedding.
    pub async fn set_embedding(&self, id: &Uuid, encoded: &[u8]) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE meetings
            SET embedding = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(encoded)
        .bind(Utc::now().to_rfc3339())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .context("Failed to update meeting embedding")?;

        Ok(())
    }

    /// All candidate `(id, encoded vector)` pairs for a similarity search.
    ///
    /// Meetings that were never embedded are absent from the result, not
    /// represented as zero vectors. A single statement produces the whole
    /// set, so one search call sees one consistent snapshot.
    pub async fn all_embedded(&self) -> Result<Vec<(String, Vec<u8>)>> {
        let rows = sqlx::query(
            r#"
            SELECT id, embedding
            FROM meetings
            WHERE embedding IS NOT NULL
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch stored embeddings")?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get("id"), row.get("embedding")))
            .collect())
    }

    /// The stored embedding of one meeting, if it has one.
    pub async fn embedding_by_id(&self, id: &Uuid) -> Result<Option<Vec<u8>>> {
        let row = sqlx::query(
            r#"
            SELECT embedding
            FROM meetings
            WHERE id = ? AND embedding IS NOT NULL
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch meeting embedding")?;

        Ok(row.map(|r| r.get("embedding")))
    }

    /// Delete a meeting and everything hanging off it (events, tasks cascade).
    pub async fn delete(&self, id: &Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM meetings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .context("Failed to delete meeting")?;

        Ok(result.rows_affected() > 0)
    }

    /// Aggregate statistics across meetings, events and tasks.
    pub async fn statistics(&self) -> Result<MeetingStatistics> {
        let total_meetings: i64 = sqlx::query("SELECT COUNT(*) AS count FROM meetings")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count meetings")?
            .get("count");

        let language_rows = sqlx::query(
            r#"
            SELECT language, COUNT(*) AS count
            FROM meetings
            GROUP BY language
            ORDER BY COUNT(*) DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to aggregate languages")?;
        let language_stats = language_rows
            .into_iter()
            .map(|row| (row.get("language"), row.get("count")))
            .collect();

        let recent_count: i64 = sqlx::query(
            r#"
            SELECT COUNT(*) AS count FROM meetings
            WHERE datetime(created_at) >= datetime('now', '-30 days')
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .context("Failed to count recent meetings")?
        .get("count");

        let calendar_events: i64 = sqlx::query("SELECT COUNT(*) AS count FROM calendar_events")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count calendar events")?
            .get("count");

        let task_rows = sqlx::query(
            r#"
            SELECT status, COUNT(*) AS count
            FROM tasks
            GROUP BY status
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to aggregate task statuses")?;
        let task_stats = task_rows
            .into_iter()
            .map(|row| (row.get("status"), row.get("count")))
            .collect();

        Ok(MeetingStatistics {
            total_meetings,
            language_stats,
            recent_count,
            calendar_events,
            task_stats,
        })
    }

    fn row_to_meeting(row: &sqlx::sqlite::SqliteRow) -> Result<Meeting> {
        let id_str: String = row.get("id");
        let id = Uuid::parse_str(&id_str).context("Invalid meeting id")?;

        let date_str: String = row.get("date");
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .context("Invalid meeting date")?;

        let created_at_str: String = row.get("created_at");
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .context("Invalid created_at timestamp")?
            .with_timezone(&Utc);
        let updated_at_str: String = row.get("updated_at");
        let updated_at = DateTime::parse_from_rfc3339(&updated_at_str)
            .context("Invalid updated_at timestamp")?
            .with_timezone(&Utc);

        let decisions_json: String = row.get("decisions");
        let decisions =
            serde_json::from_str(&decisions_json).context("Failed to deserialize decisions")?;
        let action_items_json: String = row.get("action_items");
        let action_items = serde_json::from_str(&action_items_json)
            .context("Failed to deserialize action_items")?;
        let participants_json: String = row.get("participants");
        let participants = serde_json::from_str(&participants_json)
            .context("Failed to deserialize participants")?;
        let follow_up_json: String = row.get("follow_up");
        let follow_up =
            serde_json::from_str(&follow_up_json).context("Failed to deserialize follow_up")?;

        Ok(Meeting {
            id,
            title: row.get("title"),
            date,
            duration: row.get("duration"),
            transcript: row.get("transcript"),
            summary: row.get("summary"),
            decisions,
            action_items,
            participants,
            follow_up,
            visual_summary_url: row.get("visual_summary_url"),
            language: row.get("language"),
            embedding: row.get("embedding"),
            created_at,
            updated_at,
        })
    }
}
