use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::OnceCell;

pub mod active_models;
pub mod booking;
pub mod event;

use booking::BookingRepository;
use event::EventRepository;

#[derive(Clone, Debug)]
pub struct Repository {
    pub event: EventRepository,
    pub booking: BookingRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },

    #[error("event with id {0} does not exist")]
    EventNotFound(i32),

    #[error("please provide a valid email address: {0}")]
    InvalidEmail(String),

    #[error("a booking already exists for event {event_id} and {email}")]
    DuplicateBooking { event_id: i32, email: String },
}

type Response<T> = Result<T, RepositoryError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, sea_orm::DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InSeaOrmDbErr {
            message: message.to_string(),
            source: e,
        })
    }
}

impl Repository {
    /// Builds the per-entity repositories on top of the shared process-wide
    /// connection. Safe to call repeatedly; every call reuses the one cached
    /// handle.
    pub async fn new(db_url: &str) -> Response<Self> {
        let db = connection(db_url).await?;

        Ok(Self {
            event: EventRepository::new(db.clone()),
            booking: BookingRepository::new(db.clone()),
        })
    }
}

static CONNECTION: OnceCell<DatabaseConnection> = OnceCell::const_new();

/// Shared database handle with single-flight acquisition: concurrent callers
/// before the first connection exists await the same attempt, and a failed
/// attempt leaves the cell empty so the next caller retries.
pub async fn connection(
    db_url: &str,
) -> Response<&'static DatabaseConnection> {
    CONNECTION.get_or_try_init(|| init_db(db_url)).await
}

async fn init_db(db_url: &str) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tokio::sync::OnceCell;

    // Pins the acquisition semantics the connection cache relies on: one
    // attempt shared by concurrent callers, and no caching of failures.
    #[tokio::test]
    async fn concurrent_callers_share_one_attempt() {
        let cell = Arc::new(OnceCell::<u32>::new());
        let attempts = Arc::new(AtomicUsize::new(0));

        let mut handles = vec![];
        for _ in 0..16 {
            let cell = cell.clone();
            let attempts = attempts.clone();
            handles.push(tokio::spawn(async move {
                *cell
                    .get_or_try_init(|| async {
                        attempts.fetch_add(1, Ordering::SeqCst);
                        Ok::<u32, ()>(42)
                    })
                    .await
                    .unwrap()
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), 42);
        }
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_attempt_is_not_cached() {
        let cell = OnceCell::<u32>::new();
        let attempts = AtomicUsize::new(0);

        let first = cell
            .get_or_try_init(|| async {
                attempts.fetch_add(1, Ordering::SeqCst);
                Err::<u32, &str>("connection refused")
            })
            .await;
        assert!(first.is_err());

        let second = cell
            .get_or_try_init(|| async {
                attempts.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, &str>(7)
            })
            .await;
        assert_eq!(*second.unwrap(), 7);
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
