use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, SqlErr};

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse, RepositoryError, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct BookingRepository {
    db: DatabaseConnection,
}

impl BookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<booking::Model> for BookingEntity {
    fn from(value: booking::Model) -> Self {
        Self {
            id: value.id,
            event_id: value.event_id,
            email: value.email,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.map(|t| t.and_utc()),
        }
    }
}

impl BookingRepository {
    /// Registers an email against an event. The email shape is checked
    /// before any statement is issued, then the referenced event is looked
    /// up as a pre-commit guard, then the insert runs under the
    /// (event_id, email) unique index. No retries; every failure surfaces
    /// to the caller.
    pub async fn create(
        &self,
        event_id: i32,
        email: &str,
    ) -> Response<BookingEntity> {
        let email = entity::booking::normalize_email(email);
        if entity::booking::validate_email(&email).is_err() {
            return Err(RepositoryError::InvalidEmail(email));
        }

        let event = Event::find_by_id(event_id)
            .one(&self.db)
            .await
            .into_response("in booking event guard")?;
        if event.is_none() {
            return Err(RepositoryError::EventNotFound(event_id));
        }

        let now = Utc::now().naive_utc();
        let model = booking::ActiveModel {
            id: ActiveValue::not_set(),
            event_id: ActiveValue::set(event_id),
            email: ActiveValue::set(email.clone()),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(Some(now)),
        };

        let created =
            match Booking::insert(model).exec_with_returning(&self.db).await {
                Ok(created) => created,
                Err(e) => {
                    if matches!(
                        e.sql_err(),
                        Some(SqlErr::UniqueConstraintViolation(_))
                    ) {
                        return Err(RepositoryError::DuplicateBooking {
                            event_id,
                            email,
                        });
                    }
                    return Err(RepositoryError::InSeaOrmDbErr {
                        message: "in create booking".to_string(),
                        source: e,
                    });
                }
            };

        Ok(created.into())
    }
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    use super::BookingRepository;
    use crate::active_models::{booking, event};
    use crate::RepositoryError;

    fn stored_event() -> event::Model {
        event::Model {
            id: 7,
            slug: "rustconf".to_string(),
            title: "RustConf".to_string(),
            description: "a conference".to_string(),
            location: "portland".to_string(),
            date: "2025-09-10".to_string(),
            tags: json!(["rust"]),
            agenda: json!(["keynote"]),
            image: "https://media.example/events/b.png".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    fn stored_booking() -> booking::Model {
        booking::Model {
            id: 1,
            event_id: 7,
            email: "a@b.com".to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Some(Utc::now().naive_utc()),
        }
    }

    #[tokio::test]
    async fn rejects_malformed_email_before_any_statement() {
        let db =
            MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = BookingRepository::new(db.clone());

        let err = repo.create(7, "not-an-email").await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidEmail(_)));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn rejects_booking_for_unknown_event() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<event::Model>::new()])
            .into_connection();
        let repo = BookingRepository::new(db);

        let err = repo.create(99, "a@b.com").await.unwrap_err();
        assert!(matches!(err, RepositoryError::EventNotFound(99)));
    }

    #[tokio::test]
    async fn creates_booking_with_normalized_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_event()]])
            .append_query_results([vec![stored_booking()]])
            .into_connection();
        let repo = BookingRepository::new(db.clone());

        let booking = repo.create(7, "  A@B.COM  ").await.unwrap();
        assert_eq!(booking.event_id, 7);
        assert_eq!(booking.email, "a@b.com");

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("a@b.com"));
        assert!(!log.contains("A@B.COM"));
    }
}
