use entity::prelude::*;
use repository::{Repository, RepositoryError};

// Exercises the live compound unique index. Needs a reachable Postgres:
//
//     DATABASE_URL=postgres://... cargo test -p repository -- --ignored
#[tokio::test]
#[ignore = "requires a postgres database"]
async fn duplicate_booking_is_rejected_by_the_compound_index() {
    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
    let repo = Repository::new(&db_url).await.expect("connect");

    let event = repo
        .event
        .create(EventEntity {
            slug: format!("itest-dup-{}", std::process::id()),
            title: "Integration Event".to_string(),
            description: "fixture".to_string(),
            location: "nowhere".to_string(),
            date: "2025-01-01".to_string(),
            tags: vec!["test".to_string()],
            agenda: vec!["only item".to_string()],
            image: "https://media.example/events/itest.png".to_string(),
            ..Default::default()
        })
        .await
        .expect("create event");

    let first = repo.booking.create(event.id, "dup@test.com").await;
    assert!(first.is_ok());

    // same pair, differing only in case and padding
    let second = repo.booking.create(event.id, " DUP@TEST.COM ").await;
    assert!(matches!(
        second,
        Err(RepositoryError::DuplicateBooking { .. })
    ));
}

#[tokio::test]
#[ignore = "requires a postgres database"]
async fn booking_against_missing_event_is_rejected() {
    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
    let repo = Repository::new(&db_url).await.expect("connect");

    let result = repo.booking.create(i32::MAX, "ghost@test.com").await;
    assert!(matches!(result, Err(RepositoryError::EventNotFound(_))));
}
