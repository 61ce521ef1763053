use anyhow::Result;
use uuid::Uuid;

use crate::database::{DatabaseManager, TaskRepository};
use crate::error::MeetScribeError;
use crate::models::TaskStatus;

pub async fn handle_pending_command() -> Result<()> {
    let db_path = crate::database::get_default_db_path()?;
    let db = DatabaseManager::new(&db_path).await?;

    let tasks = TaskRepository::new(&db).list_pending().await?;

    if tasks.is_empty() {
        println!("No pending tasks");
        return Ok(());
    }

    println!("Pending tasks:");
    println!();
    for task in tasks {
        println!("[{}] {}", task.priority, task.description);
        println!("  ID: {}", task.id);
        println!("  Assignee: {}", task.assignee);
        if let Some(deadline) = &task.deadline {
            println!("  Deadline: {deadline}");
        }
        println!();
    }

    Ok(())
}

pub async fn handle_complete_command(task_id: String) -> Result<()> {
    let id = Uuid::parse_str(&task_id).map_err(MeetScribeError::Uuid)?;

    let db_path = crate::database::get_default_db_path()?;
    let db = DatabaseManager::new(&db_path).await?;

    if TaskRepository::new(&db)
        .update_status(&id, TaskStatus::Completed)
        .await?
    {
        println!("Task {task_id} marked as completed");
    } else {
        println!("Task not found: {task_id}");
    }

    Ok(())
}
