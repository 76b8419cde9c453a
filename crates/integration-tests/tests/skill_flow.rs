//! Skill service integration tests over a real SQLite store.
//!
//! Wires SkillService to SqliteJobStore exactly as the daemon does and
//! drives every intent through the store gateway.

use std::sync::Arc;

use jobjar_core::application::SkillService;
use jobjar_core::domain::{SkillEvent, SlotState, SpeechResponse};
use jobjar_core::port::{JobPicker, JobStore};
use jobjar_infra_sqlite::{create_pool, run_migrations, SqliteJobStore};

/// Deterministic picker for grab tests.
struct FixedPicker(usize);

impl JobPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

async fn setup() -> (SkillService, Arc<SqliteJobStore>) {
    let pool = create_pool(":memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let store = Arc::new(SqliteJobStore::new(pool));
    let service = SkillService::new(store.clone(), Arc::new(FixedPicker(0)));
    (service, store)
}

fn add(name: &str) -> SkillEvent {
    SkillEvent::AddJob {
        slot: SlotState::confirmed(name),
    }
}

fn delete(name: &str) -> SkillEvent {
    SkillEvent::DeleteJob {
        slot: SlotState::confirmed(name),
    }
}

#[tokio::test]
async fn add_then_duplicate_add_keeps_one_record() {
    let (service, store) = setup().await;

    let first = service.handle("U1", add("Dishes")).await.unwrap();
    assert_eq!(first, SpeechResponse::tell("Job Dishes added!"));

    let second = service.handle("U1", add("Dishes")).await.unwrap();
    assert_eq!(second, SpeechResponse::tell("Job Dishes already exists!"));

    assert_eq!(store.list("U1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_of_missing_job_fails_spoken() {
    let (service, _) = setup().await;

    let response = service.handle("U1", delete("Laundry")).await.unwrap();
    assert_eq!(response, SpeechResponse::tell("Job Laundry not found!"));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let (service, store) = setup().await;

    service.handle("U1", add("Laundry")).await.unwrap();
    let response = service.handle("U1", delete("Laundry")).await.unwrap();

    assert_eq!(response, SpeechResponse::tell("Job Laundry deleted!"));
    assert!(store.get("U1", "Laundry").await.unwrap().is_none());
}

#[tokio::test]
async fn list_speaks_every_job_exactly_once() {
    let (service, _) = setup().await;

    let empty = service.handle("U1", SkillEvent::ListJobs).await.unwrap();
    assert_eq!(empty, SpeechResponse::tell("No jobs found!"));

    for name in ["Dishes", "Laundry", "Vacuum"] {
        service.handle("U1", add(name)).await.unwrap();
    }

    let listed = service.handle("U1", SkillEvent::ListJobs).await.unwrap();
    assert!(listed.ends_session());
    for name in ["Dishes", "Laundry", "Vacuum"] {
        assert_eq!(listed.speech().matches(name).count(), 1, "job {name}");
    }
}

#[tokio::test]
async fn grab_with_single_job_always_returns_it_and_empties_the_jar() {
    let (service, store) = setup().await;

    service.handle("U1", add("Dishes")).await.unwrap();

    let response = service.handle("U1", SkillEvent::GrabJob).await.unwrap();
    assert!(response.speech().contains("You grabbed Dishes"));
    assert!(response.speech().contains("Get to work!"));

    assert!(store.list("U1").await.unwrap().is_empty());

    let again = service.handle("U1", SkillEvent::GrabJob).await.unwrap();
    assert_eq!(again, SpeechResponse::tell("No jobs added."));
}

#[tokio::test]
async fn grab_consumes_only_the_selected_job() {
    let pool = create_pool(":memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();
    let store = Arc::new(SqliteJobStore::new(pool));
    let service = SkillService::new(store.clone(), Arc::new(FixedPicker(2)));

    for name in ["Dishes", "Laundry", "Vacuum"] {
        service.handle("U1", add(name)).await.unwrap();
    }

    service.handle("U1", SkillEvent::GrabJob).await.unwrap();

    // Two jobs survive a single grab.
    assert_eq!(store.list("U1").await.unwrap().len(), 2);
}

#[tokio::test]
async fn users_never_see_each_others_jobs() {
    let (service, store) = setup().await;

    service.handle("U1", add("Dishes")).await.unwrap();
    service.handle("U2", add("Dishes")).await.unwrap();
    service.handle("U2", add("Laundry")).await.unwrap();

    // U1's delete and grab leave U2's records alone.
    service.handle("U1", delete("Dishes")).await.unwrap();
    let response = service.handle("U1", SkillEvent::GrabJob).await.unwrap();
    assert_eq!(response, SpeechResponse::tell("No jobs added."));

    assert_eq!(store.list("U2").await.unwrap().len(), 2);

    let listed = service.handle("U2", SkillEvent::ListJobs).await.unwrap();
    assert!(listed.speech().contains("Dishes"));
    assert!(listed.speech().contains("Laundry"));
}

#[tokio::test]
async fn dialog_gate_blocks_store_access_until_confirmed() {
    let (service, store) = setup().await;

    let elicited = service
        .handle(
            "U1",
            SkillEvent::AddJob {
                slot: SlotState::empty(),
            },
        )
        .await
        .unwrap();
    assert!(matches!(elicited, SpeechResponse::ElicitSlot { .. }));

    let confirm = service
        .handle(
            "U1",
            SkillEvent::AddJob {
                slot: SlotState::unconfirmed("Dishes"),
            },
        )
        .await
        .unwrap();
    assert!(matches!(confirm, SpeechResponse::ConfirmSlot { .. }));

    let re_elicited = service
        .handle(
            "U1",
            SkillEvent::AddJob {
                slot: SlotState::denied("Dishes"),
            },
        )
        .await
        .unwrap();
    assert_eq!(re_elicited, elicited);

    // None of the gated turns wrote anything.
    assert!(store.list("U1").await.unwrap().is_empty());
}

#[tokio::test]
async fn jobs_persist_across_restart() {
    let db_path = "/tmp/jobjar_test_persistence.db";
    let _ = std::fs::remove_file(db_path);

    {
        let pool = create_pool(db_path).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let service = SkillService::new(
            Arc::new(SqliteJobStore::new(pool)),
            Arc::new(FixedPicker(0)),
        );
        service.handle("U1", add("Dishes")).await.unwrap();
        // Pool dropped: simulates daemon shutdown.
    }

    {
        let pool = create_pool(db_path).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let store = SqliteJobStore::new(pool);
        assert!(store.get("U1", "Dishes").await.unwrap().is_some());
    }

    let _ = std::fs::remove_file(db_path);
}
