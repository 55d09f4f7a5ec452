use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use serde_json::json;

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct EventRepository {
    db: DatabaseConnection,
}

impl EventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<event::Model> for EventEntity {
    fn from(value: event::Model) -> Self {
        Self {
            id: value.id,
            slug: value.slug,
            title: value.title,
            description: value.description,
            location: value.location,
            date: value.date,
            tags: string_list(value.tags),
            agenda: string_list(value.agenda),
            image: value.image,
            created_at: value.created_at.and_utc(),
        }
    }
}

fn string_list(value: serde_json::Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

impl EventRepository {
    pub async fn find_all(&self) -> Response<Vec<EventEntity>> {
        let events = Event::find()
            .order_by_desc(event::Column::CreatedAt)
            .all(&self.db)
            .await
            .into_response("in find all events")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    /// Slug lookups are exact-match against the normalized form; a miss is a
    /// normal outcome, not an error.
    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Response<Option<EventEntity>> {
        let slug = entity::event::normalize_slug(slug);
        let event = Event::find()
            .filter(event::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .into_response("in find event by slug")?;

        Ok(event.map(EventEntity::from))
    }

    pub async fn create(&self, event: EventEntity) -> Response<EventEntity> {
        let model = event::ActiveModel {
            id: ActiveValue::not_set(),
            slug: ActiveValue::set(entity::event::normalize_slug(
                &event.slug,
            )),
            title: ActiveValue::set(event.title),
            description: ActiveValue::set(event.description),
            location: ActiveValue::set(event.location),
            date: ActiveValue::set(event.date),
            tags: ActiveValue::set(json!(event.tags)),
            agenda: ActiveValue::set(json!(event.agenda)),
            image: ActiveValue::set(event.image),
            created_at: ActiveValue::set(Utc::now().naive_utc()),
        };

        let created = Event::insert(model)
            .exec_with_returning(&self.db)
            .await
            .into_response("in create event")?;

        Ok(created.into())
    }
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    use super::EventRepository;
    use crate::active_models::event;

    fn stored_event() -> event::Model {
        event::Model {
            id: 1,
            slug: "my-event".to_string(),
            title: "My Event".to_string(),
            description: "an event".to_string(),
            location: "online".to_string(),
            date: "2025-07-01".to_string(),
            tags: json!(["rust"]),
            agenda: json!(["intro", "talks"]),
            image: "https://media.example/events/a.png".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn find_by_slug_normalizes_before_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_event()]])
            .into_connection();
        let repo = EventRepository::new(db.clone());

        let found = repo.find_by_slug("  My-Event  ").await.unwrap();
        assert_eq!(found.unwrap().slug, "my-event");

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("my-event"));
        assert!(!log.contains("My-Event"));
    }

    #[tokio::test]
    async fn find_by_slug_miss_is_not_an_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<event::Model>::new()])
            .into_connection();
        let repo = EventRepository::new(db);

        let found = repo.find_by_slug("nope").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn find_all_orders_newest_first() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_event()]])
            .into_connection();
        let repo = EventRepository::new(db.clone());

        let events = repo.find_all().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tags, vec!["rust"]);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("ORDER BY"));
        assert!(log.contains("created_at"));
    }
}
