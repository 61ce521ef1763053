use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

pub const SCHEMA_VERSION: u32 = 1;

/// Create all tables if they do not already exist.
///
/// The `embedding` column stores the meeting's encoded vector as an opaque
/// blob (4 bytes per dimension, little-endian f32). Meetings that were never
/// embedded keep it NULL and are skipped by the similarity read path.
pub async fn create_schema(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS meetings (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            date TEXT NOT NULL,
            duration TEXT,
            transcript TEXT NOT NULL DEFAULT '',
            summary TEXT NOT NULL DEFAULT '',
            decisions TEXT NOT NULL DEFAULT '[]',      -- JSON array
            action_items TEXT NOT NULL DEFAULT '[]',   -- JSON array
            participants TEXT NOT NULL DEFAULT '[]',   -- JSON array
            follow_up TEXT NOT NULL DEFAULT '[]',      -- JSON array
            visual_summary_url TEXT,
            language TEXT NOT NULL DEFAULT 'en',
            embedding BLOB,
            created_at TEXT NOT NULL DEFAULT (datetime('now', 'utc')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now', 'utc'))
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create meetings table")?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS calendar_events (
            id TEXT PRIMARY KEY,
            meeting_id TEXT NOT NULL,
            title TEXT NOT NULL,
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            description TEXT,
            status TEXT NOT NULL DEFAULT 'scheduled',
            created_at TEXT NOT NULL DEFAULT (datetime('now', 'utc')),
            FOREIGN KEY (meeting_id) REFERENCES meetings(id) ON DELETE CASCADE
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create calendar_events table")?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY,
            meeting_id TEXT NOT NULL,
            description TEXT NOT NULL,
            assignee TEXT NOT NULL,
            deadline TEXT,
            priority TEXT NOT NULL DEFAULT 'medium',
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL DEFAULT (datetime('now', 'utc')),
            FOREIGN KEY (meeting_id) REFERENCES meetings(id) ON DELETE CASCADE
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create tasks table")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_meetings_created_at ON meetings(created_at)")
        .execute(pool)
        .await
        .context("Failed to create meetings index")?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_calendar_events_meeting ON calendar_events(meeting_id)",
    )
    .execute(pool)
    .await
    .context("Failed to create calendar_events index")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_meeting ON tasks(meeting_id)")
        .execute(pool)
        .await
        .context("Failed to create tasks index")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status)")
        .execute(pool)
        .await
        .context("Failed to create tasks status index")?;

    Ok(())
}
