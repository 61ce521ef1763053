pub mod events;
pub mod init;
pub mod meetings;
pub mod search;
pub mod tasks;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::services::{RELATED_LIMIT, RELATED_THRESHOLD, SEARCH_LIMIT, SEARCH_THRESHOLD};

#[derive(Parser)]
#[command(name = "meetscribe")]
#[command(about = "Meeting Intelligence Assistant")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the application database
    Init,
    /// Search meetings by semantic similarity
    Search {
        /// Search query
        query: String,
        /// Maximum number of results (default: 10)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Minimum similarity score, exclusive (default: 0.3)
        #[arg(short, long)]
        threshold: Option<f32>,
    },
    /// Find meetings similar to a stored one
    Similar {
        /// Meeting ID to compare against
        meeting_id: String,
        /// Maximum number of results (default: 3)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List stored meetings
    List {
        /// Page number (default: 1)
        #[arg(short, long)]
        page: Option<i64>,
        /// Page size (default: 20)
        #[arg(short = 's', long)]
        page_size: Option<i64>,
    },
    /// Show a meeting in full
    Show {
        /// Meeting ID to view
        meeting_id: String,
    },
    /// Delete a meeting and its events and tasks
    Delete {
        /// Meeting ID to delete
        meeting_id: String,
    },
    /// Regenerate a meeting's search embedding
    Reindex {
        /// Meeting ID to re-embed
        meeting_id: String,
    },
    /// Show meeting statistics
    Stats,
    /// List upcoming calendar events
    Events {
        /// How many days ahead to look (default: 7)
        #[arg(short, long)]
        days: Option<i64>,
    },
    /// Task management
    Tasks {
        #[command(subcommand)]
        command: TaskCommands,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List pending tasks across all meetings
    Pending,
    /// Mark a task as completed
    Complete {
        /// Task ID to complete
        task_id: String,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let rt = Runtime::new()?;

        rt.block_on(async {
            match self.command {
                Commands::Init => init::handle_init_command().await,
                Commands::Search {
                    query,
                    limit,
                    threshold,
                } => {
                    search::handle_search_command(
                        query,
                        threshold.unwrap_or(SEARCH_THRESHOLD),
                        limit.unwrap_or(SEARCH_LIMIT),
                    )
                    .await
                }
                Commands::Similar { meeting_id, limit } => {
                    search::handle_similar_command(
                        meeting_id,
                        RELATED_THRESHOLD,
                        limit.unwrap_or(RELATED_LIMIT),
                    )
                    .await
                }
                Commands::List { page, page_size } => {
                    meetings::handle_list_command(page, page_size).await
                }
                Commands::Show { meeting_id } => meetings::handle_show_command(meeting_id).await,
                Commands::Delete { meeting_id } => {
                    meetings::handle_delete_command(meeting_id).await
                }
                Commands::Reindex { meeting_id } => {
                    meetings::handle_reindex_command(meeting_id).await
                }
                Commands::Stats => meetings::handle_stats_command().await,
                Commands::Events { days } => {
                    events::handle_upcoming_command(days.unwrap_or(7)).await
                }
                Commands::Tasks { command } => match command {
                    TaskCommands::Pending => tasks::handle_pending_command().await,
                    TaskCommands::Complete { task_id } => {
                        tasks::handle_complete_command(task_id).await
                    }
                },
            }
        })
    }
}
