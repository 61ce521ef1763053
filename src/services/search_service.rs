//! Semantic search over stored meetings.
//!
//! Control flow per query: embed the query text through the provider, read
//! the snapshot of all stored `(id, encoded vector)` pairs, rank them with
//! the vector core, then resolve surviving ids back to display records.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::database::MeetingRepository;
use crate::error::MeetScribeError;
use crate::services::embedding::EmbeddingProvider;
use crate::vector;

/// Relevance floor for the broad meeting search.
pub const SEARCH_THRESHOLD: f32 = 0.3;
/// Default result cap for the broad meeting search.
pub const SEARCH_LIMIT: usize = 10;
/// Relevance floor for the narrower related-meetings lookup.
pub const RELATED_THRESHOLD: f32 = 0.2;
/// Default result cap for the related-meetings lookup.
pub const RELATED_LIMIT: usize = 3;
/// Transcript preview length in search listings.
pub const TRANSCRIPT_PREVIEW_CHARS: usize = 500;

/// A search hit resolved to its display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingMatch {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    pub transcript_preview: String,
    pub similarity: f32,
}

/// A related meeting, listed next to the one being viewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedMeeting {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    pub similarity: f32,
}

pub struct SearchService {
    provider: Arc<dyn EmbeddingProvider>,
    meetings: Arc<MeetingRepository>,
}

impl SearchService {
    pub fn new(provider: Arc<dyn EmbeddingProvider>, meetings: Arc<MeetingRepository>) -> Self {
        Self { provider, meetings }
    }

    /// Search stored meetings by semantic similarity to a free-text query.
    ///
    /// A provider failure or a corrupted index aborts the whole call; an
    /// empty result is a successful search with no candidate above the
    /// threshold.
    pub async fn search_meetings(
        &self,
        query: &str,
        threshold: f32,
        limit: usize,
    ) -> Result<Vec<MeetingMatch>> {
        let query_embedding = self
            .provider
            .embed(query)
            .await
            .map_err(MeetScribeError::Provider)
            .context("Failed to embed search query")?;

        let candidates = self.meetings.all_embedded().await?;
        debug!(
            candidates = candidates.len(),
            threshold, limit, "Running similarity search"
        );

        let scored = vector::search(&query_embedding, candidates, threshold, limit)
            .map_err(MeetScribeError::Vector)
            .context("Similarity search failed")?;

        let mut matches = Vec::with_capacity(scored.len());
        for candidate in scored {
            let id = Uuid::parse_str(&candidate.id).context("Invalid stored meeting id")?;
            // The snapshot read and the id resolution are separate queries;
            // a meeting deleted in between is simply dropped from the page.
            if let Some(meeting) = self.meetings.get_by_id(&id).await? {
                matches.push(MeetingMatch {
                    id,
                    title: meeting.title.clone(),
                    date: meeting.date,
                    summary: meeting.summary.clone(),
                    transcript_preview: meeting.transcript_preview(TRANSCRIPT_PREVIEW_CHARS),
                    similarity: candidate.score,
                });
            }
        }

        Ok(matches)
    }

    /// Find meetings similar to an already-stored one.
    ///
    /// Uses the stored embedding as the query and excludes the source
    /// meeting from the candidate set before scoring. A meeting that was
    /// never embedded has no neighbors: the result is empty, not an error.
    pub async fn find_similar(
        &self,
        meeting_id: &Uuid,
        threshold: f32,
        limit: usize,
    ) -> Result<Vec<RelatedMeeting>> {
        let Some(blob) = self.meetings.embedding_by_id(meeting_id).await? else {
            return Ok(Vec::new());
        };
        let query_embedding = vector::decode(&blob)
            .map_err(MeetScribeError::Vector)
            .context("Stored embedding for source meeting is corrupt")?;

        let source_id = meeting_id.to_string();
        let candidates: Vec<_> = self
            .meetings
            .all_embedded()
            .await?
            .into_iter()
            .filter(|(id, _)| *id != source_id)
            .collect();

        let scored = vector::search(&query_embedding, candidates, threshold, limit)
            .map_err(MeetScribeError::Vector)
            .context("Similarity search failed")?;

        let mut related = Vec::with_capacity(scored.len());
        for candidate in scored {
            let id = Uuid::parse_str(&candidate.id).context("Invalid stored meeting id")?;
            if let Some(meeting) = self.meetings.get_by_id(&id).await? {
                related.push(RelatedMeeting {
                    id,
                    title: meeting.title,
                    date: meeting.date,
                    summary: meeting.summary,
                    similarity: candidate.score,
                });
            }
        }

        Ok(related)
    }
}
