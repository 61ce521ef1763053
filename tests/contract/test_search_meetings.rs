use async_trait::async_trait;
use chrono::NaiveDate;
use meetscribe::database::{DatabaseManager, MeetingRepository};
use meetscribe::models::Meeting;
use meetscribe::services::{
    EmbeddingProvider, ProviderError, SearchService, SEARCH_LIMIT, SEARCH_THRESHOLD,
};
use meetscribe::vector;
use std::sync::Arc;

/// Deterministic provider so the tests exercise the search pipeline rather
/// than a live embedding API.
struct FixedProvider {
    vector: Vec<f32>,
}

#[async_trait]
impl EmbeddingProvider for FixedProvider {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, ProviderError> {
        Ok(self.vector.clone())
    }
}

struct FailingProvider;

#[async_trait]
impl EmbeddingProvider for FailingProvider {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, ProviderError> {
        Err(ProviderError::RateLimitExceeded {
            message: "rate limited".to_string(),
        })
    }
}

async fn seed_meeting(db: &DatabaseManager, title: &str, embedding: &[f32]) -> Meeting {
    let mut meeting = Meeting::new(
        title.to_string(),
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
    )
    .with_summary(format!("{title} summary"))
    .with_transcript("word ".repeat(200));
    meeting.set_embedding(vector::encode(embedding));
    MeetingRepository::new(db).create(&meeting).await.unwrap();
    meeting
}

fn search_service(db: &DatabaseManager, query_vector: Vec<f32>) -> SearchService {
    SearchService::new(
        Arc::new(FixedProvider {
            vector: query_vector,
        }),
        Arc::new(MeetingRepository::new(db)),
    )
}

#[tokio::test]
async fn test_search_orders_by_similarity() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    let exact = seed_meeting(&db, "Quarterly roadmap", &[1.0, 0.0, 0.0]).await;
    let close = seed_meeting(&db, "Roadmap review", &[0.9, 0.1, 0.0]).await;
    seed_meeting(&db, "Team offsite", &[0.0, 0.0, 1.0]).await;

    let service = search_service(&db, vec![1.0, 0.0, 0.0]);
    let matches = service
        .search_meetings("roadmap", SEARCH_THRESHOLD, SEARCH_LIMIT)
        .await
        .unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, exact.id);
    assert_eq!(matches[1].id, close.id);
    assert!(matches[0].similarity >= matches[1].similarity);
}

#[tokio::test]
async fn test_search_threshold_is_exclusive() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    // Orthogonal to the query: similarity exactly 0.0.
    seed_meeting(&db, "Orthogonal", &[0.0, 1.0]).await;

    let service = search_service(&db, vec![1.0, 0.0]);
    let matches = service.search_meetings("query", 0.0, 10).await.unwrap();

    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_search_respects_limit() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    for i in 0..5 {
        seed_meeting(&db, &format!("Sync {i}"), &[1.0, 0.0]).await;
    }

    let service = search_service(&db, vec![1.0, 0.0]);
    let matches = service.search_meetings("sync", 0.3, 2).await.unwrap();

    assert_eq!(matches.len(), 2);
}

#[tokio::test]
async fn test_search_skips_unembedded_meetings() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    let embedded = seed_meeting(&db, "Indexed", &[1.0, 0.0]).await;

    let plain = Meeting::new(
        "Never indexed".to_string(),
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
    );
    MeetingRepository::new(&db).create(&plain).await.unwrap();

    let service = search_service(&db, vec![1.0, 0.0]);
    let matches = service
        .search_meetings("anything", SEARCH_THRESHOLD, SEARCH_LIMIT)
        .await
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, embedded.id);
}

#[tokio::test]
async fn test_search_truncates_transcript_preview() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    seed_meeting(&db, "Long one", &[1.0, 0.0]).await;

    let service = search_service(&db, vec![1.0, 0.0]);
    let matches = service
        .search_meetings("long", SEARCH_THRESHOLD, SEARCH_LIMIT)
        .await
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert!(matches[0].transcript_preview.ends_with("..."));
    assert_eq!(
        matches[0].transcript_preview.chars().count(),
        500 + "...".len()
    );
}

#[tokio::test]
async fn test_search_provider_failure_is_an_error() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    seed_meeting(&db, "Anything", &[1.0, 0.0]).await;

    let service = SearchService::new(
        Arc::new(FailingProvider),
        Arc::new(MeetingRepository::new(&db)),
    );

    let result = service
        .search_meetings("anything", SEARCH_THRESHOLD, SEARCH_LIMIT)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_search_empty_store_returns_empty() {
    let db = DatabaseManager::open_in_memory().await.unwrap();

    let service = search_service(&db, vec![1.0, 0.0]);
    let matches = service
        .search_meetings("anything", SEARCH_THRESHOLD, SEARCH_LIMIT)
        .await
        .unwrap();

    assert!(matches.is_empty());
}
