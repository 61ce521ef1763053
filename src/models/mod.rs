pub mod calendar_event;
pub mod meeting;
pub mod task;

pub use calendar_event::{CalendarEvent, EventStatus};
pub use meeting::Meeting;
pub use task::{Task, TaskPriority, TaskStatus};
