pub mod calendar_event_repo;
pub mod config;
pub mod connection;
pub mod meeting_repo;
pub mod schema;
pub mod task_repo;

pub use calendar_event_repo::CalendarEventRepository;
pub use config::{ensure_config_dir, get_config_dir, get_default_db_path};
pub use connection::DatabaseManager;
pub use meeting_repo::{MeetingRepository, MeetingStatistics};
pub use schema::{create_schema, SCHEMA_VERSION};
pub use task_repo::TaskRepository;
