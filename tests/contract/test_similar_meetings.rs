use async_trait::async_trait;
use chrono::NaiveDate;
use meetscribe::database::{DatabaseManager, MeetingRepository};
use meetscribe::models::Meeting;
use meetscribe::services::{
    EmbeddingProvider, ProviderError, SearchService, RELATED_LIMIT, RELATED_THRESHOLD,
};
use meetscribe::vector;
use std::sync::Arc;
use uuid::Uuid;

/// The related-meetings lookup runs entirely on stored vectors, so the
/// provider must never be called.
struct UnreachableProvider;

#[async_trait]
impl EmbeddingProvider for UnreachableProvider {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, ProviderError> {
        panic!("related-meetings lookup must not call the embedding provider");
    }
}

async fn seed_meeting(db: &DatabaseManager, title: &str, embedding: Option<&[f32]>) -> Meeting {
    let mut meeting = Meeting::new(
        title.to_string(),
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
    )
    .with_summary(format!("{title} summary"));
    if let Some(vector) = embedding {
        meeting.set_embedding(vector::encode(vector));
    }
    MeetingRepository::new(db).create(&meeting).await.unwrap();
    meeting
}

fn service(db: &DatabaseManager) -> SearchService {
    SearchService::new(
        Arc::new(UnreachableProvider),
        Arc::new(MeetingRepository::new(db)),
    )
}

#[tokio::test]
async fn test_similar_excludes_the_source_meeting() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    let source = seed_meeting(&db, "Source", Some(&[1.0, 0.0])).await;
    let twin = seed_meeting(&db, "Twin", Some(&[1.0, 0.0])).await;

    let related = service(&db)
        .find_similar(&source.id, RELATED_THRESHOLD, RELATED_LIMIT)
        .await
        .unwrap();

    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, twin.id);
}

#[tokio::test]
async fn test_similar_orders_by_similarity_and_caps() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    let source = seed_meeting(&db, "Source", Some(&[1.0, 0.0, 0.0])).await;
    let nearest = seed_meeting(&db, "Nearest", Some(&[0.99, 0.1, 0.0])).await;
    seed_meeting(&db, "Second", Some(&[0.8, 0.6, 0.0])).await;
    seed_meeting(&db, "Third", Some(&[0.6, 0.8, 0.0])).await;
    seed_meeting(&db, "Fourth", Some(&[0.4, 0.9, 0.0])).await;

    let related = service(&db)
        .find_similar(&source.id, RELATED_THRESHOLD, RELATED_LIMIT)
        .await
        .unwrap();

    assert_eq!(related.len(), RELATED_LIMIT);
    assert_eq!(related[0].id, nearest.id);
    for pair in related.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
}

#[tokio::test]
async fn test_similar_applies_threshold() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    let source = seed_meeting(&db, "Source", Some(&[1.0, 0.0])).await;
    seed_meeting(&db, "Opposite", Some(&[-1.0, 0.0])).await;
    seed_meeting(&db, "Orthogonal", Some(&[0.0, 1.0])).await;

    let related = service(&db)
        .find_similar(&source.id, RELATED_THRESHOLD, RELATED_LIMIT)
        .await
        .unwrap();

    assert!(related.is_empty());
}

#[tokio::test]
async fn test_similar_for_unembedded_meeting_is_empty() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    let plain = seed_meeting(&db, "Plain", None).await;
    seed_meeting(&db, "Indexed", Some(&[1.0, 0.0])).await;

    let related = service(&db)
        .find_similar(&plain.id, RELATED_THRESHOLD, RELATED_LIMIT)
        .await
        .unwrap();

    assert!(related.is_empty());
}

#[tokio::test]
async fn test_similar_for_unknown_id_is_empty() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    seed_meeting(&db, "Indexed", Some(&[1.0, 0.0])).await;

    let related = service(&db)
        .find_similar(&Uuid::new_v4(), RELATED_THRESHOLD, RELATED_LIMIT)
        .await
        .unwrap();

    assert!(related.is_empty());
}
