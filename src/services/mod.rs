pub mod embedding;
pub mod meeting_service;
pub mod search_service;

pub use embedding::{EmbeddingProvider, ProviderError};
#[cfg(feature = "reqwest")]
pub use embedding::{OpenAiConfig, OpenAiEmbeddingClient};
pub use meeting_service::MeetingService;
pub use search_service::{
    MeetingMatch, RelatedMeeting, SearchService, RELATED_LIMIT, RELATED_THRESHOLD, SEARCH_LIMIT,
    SEARCH_THRESHOLD, TRANSCRIPT_PREVIEW_CHARS,
};
