use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

use crate::database::{DatabaseManager, MeetingRepository};
use crate::error::MeetScribeError;
use crate::services::SearchService;

#[cfg(feature = "reqwest")]
pub(crate) fn build_provider() -> Result<Arc<dyn crate::services::EmbeddingProvider>> {
    use crate::config::Config;
    use crate::services::{OpenAiConfig, OpenAiEmbeddingClient};

    let config = Config::load()?;
    let api_key = config.openai_api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenAI API key configured. Set OPENAI_API_KEY or add it to ~/.meetscribe/config.toml"
        )
    })?;

    let mut provider_config = OpenAiConfig::new(api_key);
    if let Some(model) = config.api.embedding_model {
        provider_config = provider_config.with_model(model);
    }

    Ok(Arc::new(OpenAiEmbeddingClient::new(provider_config)?))
}

#[cfg(not(feature = "reqwest"))]
pub(crate) fn build_provider() -> Result<Arc<dyn crate::services::EmbeddingProvider>> {
    anyhow::bail!("Built without the 'reqwest' feature; no embedding provider is available")
}

pub async fn handle_search_command(query: String, threshold: f32, limit: usize) -> Result<()> {
    let db_path = crate::database::get_default_db_path()?;
    let db = DatabaseManager::new(&db_path).await?;
    let service = SearchService::new(
        build_provider()?,
        Arc::new(MeetingRepository::new(&db)),
    );

    let matches = service.search_meetings(&query, threshold, limit).await?;

    if matches.is_empty() {
        println!("No meetings matched \"{query}\"");
        return Ok(());
    }

    println!("Found {} matching meeting(s):", matches.len());
    println!();
    for result in matches {
        println!("{} ({})", result.title, result.date);
        println!("  ID: {}", result.id);
        println!("  Similarity: {:.3}", result.similarity);
        println!("  Summary: {}", result.summary);
        println!("  Transcript: {}", result.transcript_preview);
        println!();
    }

    Ok(())
}

pub async fn handle_similar_command(meeting_id: String, threshold: f32, limit: usize) -> Result<()> {
    let id = Uuid::parse_str(&meeting_id).map_err(MeetScribeError::Uuid)?;

    let db_path = crate::database::get_default_db_path()?;
    let db = DatabaseManager::new(&db_path).await?;
    let service = SearchService::new(
        build_provider()?,
        Arc::new(MeetingRepository::new(&db)),
    );

    let related = service.find_similar(&id, threshold, limit).await?;

    if related.is_empty() {
        println!("No similar meetings found");
        return Ok(());
    }

    println!("Similar meetings:");
    println!();
    for meeting in related {
        println!("{} ({})", meeting.title, meeting.date);
        println!("  ID: {}", meeting.id);
        println!("  Similarity: {:.3}", meeting.similarity);
        println!("  Summary: {}", meeting.summary);
        println!();
    }

    Ok(())
}
