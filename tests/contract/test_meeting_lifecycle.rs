use async_trait::async_trait;
use chrono::NaiveDate;
use meetscribe::database::{
    CalendarEventRepository, DatabaseManager, MeetingRepository, TaskRepository,
};
use meetscribe::models::{CalendarEvent, Meeting, Task, TaskPriority, TaskStatus};
use meetscribe::services::{EmbeddingProvider, MeetingService, ProviderError};
use meetscribe::vector;
use std::sync::Arc;

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
        Err(ProviderError::EmptyResponse)
    }
}

fn meeting_service(db: &DatabaseManager, provider: Arc<dyn EmbeddingProvider>) -> MeetingService {
    MeetingService::new(
        provider,
        Arc::new(MeetingRepository::new(db)),
        Arc::new(CalendarEventRepository::new(db)),
        Arc::new(TaskRepository::new(db)),
    )
}

fn analyzed_meeting() -> Meeting {
    Meeting::new(
        "Architecture review".to_string(),
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
    )
    .with_summary("Agreed on the storage layout".to_string())
    .with_decisions(vec!["Single writer".to_string()])
    .with_transcript("Long discussion about storage".to_string())
    .with_participants(vec!["Ana".to_string(), "Bo".to_string()])
}

#[tokio::test]
async fn test_save_persists_meeting_events_and_tasks() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    let service = meeting_service(
        &db,
        Arc::new(FixedProvider {
            vector: vec![0.6, 0.8],
        }),
    );

    let meeting = analyzed_meeting();
    let events = vec![CalendarEvent::new(
        meeting.id,
        "Follow-up review".to_string(),
        "2024-07-08".to_string(),
        "10:00".to_string(),
    )];
    let tasks = vec![
        Task::new(meeting.id, "Write ADR".to_string(), "Ana".to_string())
            .with_priority(TaskPriority::High),
        Task::new(meeting.id, "Update diagram".to_string(), "Bo".to_string()),
    ];

    let id = service.save_meeting(meeting, events, tasks).await.unwrap();

    let stored = MeetingRepository::new(&db)
        .get_by_id(&id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "Architecture review");
    assert_eq!(stored.participants, vec!["Ana", "Bo"]);
    assert_eq!(stored.embedding, Some(vector::encode(&[0.6, 0.8])));

    let events = CalendarEventRepository::new(&db)
        .list_for_meeting(&id)
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Follow-up review");

    let tasks = TaskRepository::new(&db).list_for_meeting(&id).await.unwrap();
    assert_eq!(tasks.len(), 2);
}

#[tokio::test]
async fn test_provider_failure_leaves_store_untouched() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    let service = meeting_service(&db, Arc::new(FailingProvider));

    let meeting = analyzed_meeting();
    let meeting_id = meeting.id;

    let result = service
        .save_meeting(
            meeting,
            Vec::new(),
            vec![Task::new(
                meeting_id,
                "Never stored".to_string(),
                "Ana".to_string(),
            )],
        )
        .await;

    assert!(result.is_err());
    assert!(MeetingRepository::new(&db)
        .get_by_id(&meeting_id)
        .await
        .unwrap()
        .is_none());
    assert!(TaskRepository::new(&db)
        .list_pending()
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_delete_cascades_to_events_and_tasks() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    let service = meeting_service(
        &db,
        Arc::new(FixedProvider {
            vector: vec![1.0, 0.0],
        }),
    );

    let meeting = analyzed_meeting();
    let events = vec![CalendarEvent::new(
        meeting.id,
        "Sync".to_string(),
        "2024-07-08".to_string(),
        "10:00".to_string(),
    )];
    let tasks = vec![Task::new(
        meeting.id,
        "Cleanup".to_string(),
        "Bo".to_string(),
    )];
    let id = service.save_meeting(meeting, events, tasks).await.unwrap();

    assert!(MeetingRepository::new(&db).delete(&id).await.unwrap());

    assert!(CalendarEventRepository::new(&db)
        .list_for_meeting(&id)
        .await
        .unwrap()
        .is_empty());
    assert!(TaskRepository::new(&db)
        .list_for_meeting(&id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_completed_task_leaves_pending_list() {
    let db = DatabaseManager::open_in_memory().await.unwrap();
    let service = meeting_service(
        &db,
        Arc::new(FixedProvider {
            vector: vec![1.0, 0.0],
        }),
    );

    let meeting = analyzed_meeting();
    let task = Task::new(meeting.id, "Ship it".to_string(), "Ana".to_string());
    let task_id = task.id;
    service
        .save_meeting(meeting, Vec::new(), vec![task])
        .await
        .unwrap();

    let repo = TaskRepository::new(&db);
    assert_eq!(repo.list_pending().await.unwrap().len(), 1);

    assert!(repo
        .update_status(&task_id, TaskStatus::Completed)
        .await
        .unwrap());
    assert!(repo.list_pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reindex_replaces_stored_embedding() {
    let db = DatabaseManager::open_in_memory().await.unwrap();

    let id = meeting_service(
        &db,
        Arc::new(FixedProvider {
            vector: vec![1.0, 0.0],
        }),
    )
    .save_meeting(analyzed_meeting(), Vec::new(), Vec::new())
    .await
    .unwrap();

    meeting_service(
        &db,
        Arc::new(FixedProvider {
            vector: vec![0.0, 1.0],
        }),
    )
    .reindex_meeting(&id)
    .await
    .unwrap();

    let stored = MeetingRepository::new(&db)
        .embedding_by_id(&id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, vector::encode(&[0.0, 1.0]));
}
