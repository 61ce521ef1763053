use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

use super::connection::DatabaseManager;
use crate::models::{Task, TaskPriority, TaskStatus};

pub struct TaskRepository {
    pool: Pool<Sqlite>,
}

impl TaskRepository {
    pub fn new(db: &DatabaseManager) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    pub async fn create(&self, task: &Task) -> Result<String> {
        sqlx::query(
            r#"
            INSERT INTO tasks (
                id, meeting_id, description, assignee, deadline, priority, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(task.meeting_id.to_string())
        .bind(&task.description)
        .bind(&task.assignee)
        .bind(&task.deadline)
        .bind(task.priority.to_string())
        .bind(task.status.to_string())
        .bind(task.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to insert task")?;

        Ok(task.id.to_string())
    }

    pub async fn list_for_meeting(&self, meeting_id: &Uuid) -> Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"
            SELECT id, meeting_id, description, assignee, deadline, priority, status, created_at
            FROM tasks
            WHERE meeting_id = ?
            ORDER BY created_at
            "#,
        )
        .bind(meeting_id.to_string())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list tasks")?;

        rows.iter().map(Self::row_to_task).collect()
    }

    /// All pending tasks, ordered by [`TaskPriority::rank`] (high first),
    /// then by deadline.
    pub async fn list_pending(&self) -> Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"
            SELECT id, meeting_id, description, assignee, deadline, priority, status, created_at
            FROM tasks
            WHERE status = 'pending'
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list pending tasks")?;

        let mut tasks = rows
            .iter()
            .map(Self::row_to_task)
            .collect::<Result<Vec<_>>>()?;
        tasks.sort_by(|a, b| {
            a.priority
                .rank()
                .cmp(&b.priority.rank())
                .then_with(|| a.deadline.cmp(&b.deadline))
        });

        Ok(tasks)
    }

    pub async fn update_status(&self, id: &Uuid, status: TaskStatus) -> Result<bool> {
        let result = sqlx::query("UPDATE tasks SET status = ? WHERE id = ?")
            .bind(status.to_string())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .context("Failed to update task status")?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_task(row: &sqlx::sqlite::SqliteRow) -> Result<Task> {
        let id_str: String = row.get("id");
        let meeting_id_str: String = row.get("meeting_id");
        let priority_str: String = row.get("priority");
        let status_str: String = row.get("status");
        let created_at_str: String = row.get("created_at");

        Ok(Task {
            id: Uuid::parse_str(&id_str).context("Invalid task id")?,
            meeting_id: Uuid::parse_str(&meeting_id_str).context("Invalid meeting id")?,
            description: row.get("description"),
            assignee: row.get("assignee"),
            deadline: row.get("deadline"),
            priority: priority_str
                .parse::<TaskPriority>()
                .unwrap_or(TaskPriority::Medium),
            status: status_str
                .parse::<TaskStatus>()
                .unwrap_or(TaskStatus::Pending),
            created_at: DateTime::parse_from_rfc3339(&created_at_str)
                .context("Invalid created_at timestamp")?
                .with_timezone(&Utc),
        })
    }
}
