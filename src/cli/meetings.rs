use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

use crate::database::{
    CalendarEventRepository, DatabaseManager, MeetingRepository, TaskRepository,
};
use crate::error::MeetScribeError;
use crate::services::MeetingService;

pub async fn handle_list_command(page: Option<i64>, page_size: Option<i64>) -> Result<()> {
    let db_path = crate::database::get_default_db_path()?;
    let db = DatabaseManager::new(&db_path).await?;
    let repo = MeetingRepository::new(&db);

    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.unwrap_or(20).max(1);
    let offset = (page - 1) * page_size;

    let meetings = repo.list_all(page_size, offset).await?;

    if meetings.is_empty() {
        println!("No meetings stored");
        return Ok(());
    }

    println!("Meetings (page {page}):");
    println!();
    for meeting in meetings {
        println!("{} ({})", meeting.title, meeting.date);
        println!("  ID: {}", meeting.id);
        if let Some(duration) = &meeting.duration {
            println!("  Duration: {duration}");
        }
        println!("  Language: {}", meeting.language);
        if !meeting.summary.is_empty() {
            println!("  Summary: {}", meeting.summary);
        }
        println!();
    }

    Ok(())
}

pub async fn handle_show_command(meeting_id: String) -> Result<()> {
    let id = Uuid::parse_str(&meeting_id).map_err(MeetScribeError::Uuid)?;

    let db_path = crate::database::get_default_db_path()?;
    let db = DatabaseManager::new(&db_path).await?;

    let Some(meeting) = MeetingRepository::new(&db).get_by_id(&id).await? else {
        println!("Meeting not found: {meeting_id}");
        return Ok(());
    };

    println!("{} ({})", meeting.title, meeting.date);
    println!("  ID: {}", meeting.id);
    println!("  Language: {}", meeting.language);
    if let Some(duration) = &meeting.duration {
        println!("  Duration: {duration}");
    }
    if !meeting.summary.is_empty() {
        println!("\nSummary:\n{}", meeting.summary);
    }
    if !meeting.decisions.is_empty() {
        println!("\nDecisions:");
        for decision in &meeting.decisions {
            println!("  - {decision}");
        }
    }
    if !meeting.action_items.is_empty() {
        println!("\nAction items:");
        for item in &meeting.action_items {
            println!("  - {item}");
        }
    }
    if !meeting.participants.is_empty() {
        println!("\nParticipants: {}", meeting.participants.join(", "));
    }
    if !meeting.follow_up.is_empty() {
        println!("\nFollow-up:");
        for item in &meeting.follow_up {
            println!("  - {item}");
        }
    }

    let events = CalendarEventRepository::new(&db).list_for_meeting(&id).await?;
    if !events.is_empty() {
        println!("\nCalendar events:");
        for event in events {
            println!("  - {} on {} at {}", event.title, event.date, event.time);
        }
    }

    let tasks = TaskRepository::new(&db).list_for_meeting(&id).await?;
    if !tasks.is_empty() {
        println!("\nTasks:");
        for task in tasks {
            println!(
                "  - [{}] {} (assignee: {}, priority: {})",
                task.status, task.description, task.assignee, task.priority
            );
        }
    }

    if !meeting.transcript.is_empty() {
        println!("\nTranscript:\n{}", meeting.transcript);
    }

    Ok(())
}

pub async fn handle_delete_command(meeting_id: String) -> Result<()> {
    let id = Uuid::parse_str(&meeting_id).map_err(MeetScribeError::Uuid)?;

    let db_path = crate::database::get_default_db_path()?;
    let db = DatabaseManager::new(&db_path).await?;

    if MeetingRepository::new(&db).delete(&id).await? {
        println!("Deleted meeting {meeting_id}");
    } else {
        println!("Meeting not found: {meeting_id}");
    }

    Ok(())
}

pub async fn handle_reindex_command(meeting_id: String) -> Result<()> {
    let id = Uuid::parse_str(&meeting_id).map_err(MeetScribeError::Uuid)?;

    let db_path = crate::database::get_default_db_path()?;
    let db = DatabaseManager::new(&db_path).await?;

    let service = MeetingService::new(
        super::search::build_provider()?,
        Arc::new(MeetingRepository::new(&db)),
        Arc::new(CalendarEventRepository::new(&db)),
        Arc::new(TaskRepository::new(&db)),
    );

    service.reindex_meeting(&id).await?;
    println!("Re-indexed meeting {meeting_id}");

    Ok(())
}

pub async fn handle_stats_command() -> Result<()> {
    let db_path = crate::database::get_default_db_path()?;
    let db = DatabaseManager::new(&db_path).await?;

    let stats = MeetingRepository::new(&db).statistics().await?;

    println!("Meeting statistics:");
    println!("  Total meetings: {}", stats.total_meetings);
    println!("  Meetings in the last 30 days: {}", stats.recent_count);
    println!("  Calendar events: {}", stats.calendar_events);

    if !stats.language_stats.is_empty() {
        println!("  Languages:");
        for (language, count) in &stats.language_stats {
            println!("    {language}: {count}");
        }
    }

    if !stats.task_stats.is_empty() {
        println!("  Tasks by status:");
        for (status, count) in &stats.task_stats {
            println!("    {status}: {count}");
        }
    }

    Ok(())
}
