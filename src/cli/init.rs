use anyhow::Result;

use crate::database::{self, DatabaseManager};

pub async fn handle_init_command() -> Result<()> {
    database::ensure_config_dir()?;

    let db_path = database::get_default_db_path()?;
    let db = DatabaseManager::new(&db_path).await?;
    db.health_check().await?;

    println!("Database initialized at: {}", db_path.display());
    Ok(())
}
