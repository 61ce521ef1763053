use anyhow::Result;

use crate::database::{CalendarEventRepository, DatabaseManager};

pub async fn handle_upcoming_command(days: i64) -> Result<()> {
    let db_path = crate::database::get_default_db_path()?;
    let db = DatabaseManager::new(&db_path).await?;

    let events = CalendarEventRepository::new(&db).list_upcoming(days).await?;

    if events.is_empty() {
        println!("No events in the next {days} day(s)");
        return Ok(());
    }

    println!("Upcoming events:");
    println!();
    for event in events {
        println!("{} on {} at {}", event.title, event.date, event.time);
        println!("  Status: {}", event.status);
        if let Some(description) = &event.description {
            println!("  {description}");
        }
        println!();
    }

    Ok(())
}
