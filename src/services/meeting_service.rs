//! Meeting persistence orchestration.
//!
//! A meeting is embedded exactly once, when it is saved: the provider turns
//! the title + summary + decisions text into a vector, the codec packs it,
//! and the record lands in the store with its events and tasks. A provider
//! failure aborts the save before anything is written.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::database::{CalendarEventRepository, MeetingRepository, TaskRepository};
use crate::error::MeetScribeError;
use crate::models::{CalendarEvent, Meeting, Task};
use crate::services::embedding::EmbeddingProvider;
use crate::vector;

pub struct MeetingService {
    provider: Arc<dyn EmbeddingProvider>,
    meetings: Arc<MeetingRepository>,
    events: Arc<CalendarEventRepository>,
    tasks: Arc<TaskRepository>,
}

impl MeetingService {
    pub fn new(
        provider: Arc<dyn EmbeddingProvider>,
        meetings: Arc<MeetingRepository>,
        events: Arc<CalendarEventRepository>,
        tasks: Arc<TaskRepository>,
    ) -> Self {
        Self {
            provider,
            meetings,
            events,
            tasks,
        }
    }

    /// Embed and persist an analyzed meeting with its extracted events and
    /// tasks. Returns the stored meeting id.
    pub async fn save_meeting(
        &self,
        mut meeting: Meeting,
        events: Vec<CalendarEvent>,
        tasks: Vec<Task>,
    ) -> Result<Uuid> {
        let embedding = self
            .provider
            .embed(&meeting.embedding_text())
            .await
            .map_err(MeetScribeError::Provider)
            .context("Failed to embed meeting for search")?;
        meeting.set_embedding(vector::encode(&embedding));

        self.meetings.create(&meeting).await?;

        for event in &events {
            self.events.create(event).await?;
        }
        for task in &tasks {
            self.tasks.create(task).await?;
        }

        info!(
            meeting_id = %meeting.id,
            events = events.len(),
            tasks = tasks.len(),
            dimensions = embedding.len(),
            "Meeting saved"
        );
        Ok(meeting.id)
    }

    /// Re-embed a meeting whose content changed. The old vector is replaced
    /// wholesale; there is no incremental update path.
    pub async fn reindex_meeting(&self, meeting_id: &Uuid) -> Result<()> {
        let meeting = self
            .meetings
            .get_by_id(meeting_id)
            .await?
            .with_context(|| format!("Meeting not found: {meeting_id}"))?;

        let embedding = self
            .provider
            .embed(&meeting.embedding_text())
            .await
            .map_err(MeetScribeError::Provider)
            .context("Failed to re-embed meeting")?;

        self.meetings
            .set_embedding(meeting_id, &vector::encode(&embedding))
            .await?;

        info!(meeting_id = %meeting_id, "Meeting re-indexed");
        Ok(())
    }
}
