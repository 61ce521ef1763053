use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fully analyzed meeting record.
///
/// The transcript, summary and the extracted lists come from the upstream
/// analysis step. `embedding` holds the encoded vector produced once at save
/// time; a meeting whose content changes gets a fresh embedding, there is no
/// incremental update. Meetings that were never embedded simply carry `None`
/// and are invisible to similarity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub duration: Option<String>,
    pub transcript: String,
    pub summary: String,
    pub decisions: Vec<String>,
    pub action_items: Vec<String>,
    pub participants: Vec<String>,
    pub follow_up: Vec<String>,
    pub visual_summary_url: Option<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Meeting {
    pub fn new(title: String, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            date,
            duration: None,
            transcript: String::new(),
            summary: String::new(),
            decisions: Vec::new(),
            action_items: Vec::new(),
            participants: Vec::new(),
            follow_up: Vec::new(),
            visual_summary_url: None,
            language: "en".to_string(),
            embedding: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_duration(mut self, duration: String) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_transcript(mut self, transcript: String) -> Self {
        self.transcript = transcript;
        self
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_decisions(mut self, decisions: Vec<String>) -> Self {
        self.decisions = decisions;
        self
    }

    pub fn with_action_items(mut self, action_items: Vec<String>) -> Self {
        self.action_items = action_items;
        self
    }

    pub fn with_participants(mut self, participants: Vec<String>) -> Self {
        self.participants = participants;
        self
    }

    pub fn with_follow_up(mut self, follow_up: Vec<String>) -> Self {
        self.follow_up = follow_up;
        self
    }

    pub fn with_visual_summary_url(mut self, url: String) -> Self {
        self.visual_summary_url = Some(url);
        self
    }

    pub fn with_language(mut self, language: String) -> Self {
        self.language = language;
        self
    }

    pub fn set_embedding(&mut self, encoded: Vec<u8>) {
        self.embedding = Some(encoded);
        self.updated_at = Utc::now();
    }

    /// The text the embedding is generated from: title, summary and the
    /// decision list joined together.
    pub fn embedding_text(&self) -> String {
        format!("{} {} {}", self.title, self.summary, self.decisions.join(" "))
    }

    /// Transcript preview for search result listings.
    pub fn transcript_preview(&self, max_chars: usize) -> String {
        if self.transcript.chars().count() > max_chars {
            let truncated: String = self.transcript.chars().take(max_chars).collect();
            format!("{truncated}...")
        } else {
            self.transcript.clone()
        }
    }
}
