use fixture_server_app::domain::{
    EventId, RepoError, RepoRetrieveError, RepoUpdateError,
    event::{Event, EventDetails, EventRepository, EventTime},
};
use sqlx::{Pool, Row, Sqlite, sqlite::SqliteRow};

use crate::{create_db_pool, create_in_memory_pool, create_schema};

pub struct SqliteEventRepository {
    pool: Pool<Sqlite>,
}

impl SqliteEventRepository {
    pub async fn connect(db_path: &str) -> Result<Self, sqlx::Error> {
        let pool = create_db_pool(db_path).await?;
        create_schema(&pool).await?;
        log::info!("Opened event database at {}", db_path);
        Ok(Self { pool })
    }

    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = create_in_memory_pool().await?;
        create_schema(&pool).await?;
        Ok(Self { pool })
    }

    fn event_from_row(row: &SqliteRow) -> Result<Event, String> {
        fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, String>
        where
            T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
        {
            row.try_get(name).map_err(|e| e.to_string())
        }
        fn time_column(row: &SqliteRow, name: &str) -> Result<EventTime, String> {
            let raw: String = column(row, name)?;
            raw.parse::<EventTime>().map_err(|e| e.to_string())
        }

        Ok(Event {
            id: EventId(column(row, "id")?),
            details: EventDetails {
                name: column(row, "name")?,
                description: column(row, "description")?,
                event_type: column(row, "event_type")?,
                category: column(row, "category")?,
                start_date: time_column(row, "start_date")?,
                end_date: time_column(row, "end_date")?,
                user_id: column(row, "user_id")?,
            },
            logos: column(row, "logos")?,
        })
    }
}

#[async_trait::async_trait]
impl EventRepository for SqliteEventRepository {
    async fn create_event(
        &self,
        details: EventDetails,
        logos: Option<String>,
    ) -> Result<Event, RepoError> {
        // Id is auto-incremented
        let res = sqlx::query(
            "INSERT INTO events (name, description, event_type, category, start_date, end_date, user_id, logos) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&details.name)
        .bind(&details.description)
        .bind(&details.event_type)
        .bind(&details.category)
        .bind(details.start_date.to_string())
        .bind(details.end_date.to_string())
        .bind(details.user_id)
        .bind(&logos)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::StorageError(e.to_string()))?;

        Ok(Event {
            id: EventId(res.last_insert_rowid()),
            details,
            logos,
        })
    }

    async fn get_event(&self, id: EventId) -> Result<Event, RepoRetrieveError> {
        let row = sqlx::query("SELECT * FROM events WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoRetrieveError::StorageError(e.to_string()))?;
        match row {
            Some(row) => Self::event_from_row(&row).map_err(RepoRetrieveError::StorageError),
            None => Err(RepoRetrieveError::NotFound),
        }
    }

    async fn list_events(&self) -> Result<Vec<Event>, RepoError> {
        let rows = sqlx::query("SELECT * FROM events ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;
        rows.iter()
            .map(|row| Self::event_from_row(row).map_err(RepoError::StorageError))
            .collect()
    }

    async fn update_event(
        &self,
        id: EventId,
        details: EventDetails,
        logos: Option<String>,
    ) -> Result<Event, RepoUpdateError> {
        let res = sqlx::query(
            "UPDATE events SET name = ?, description = ?, event_type = ?, category = ?, start_date = ?, end_date = ?, user_id = ?, logos = ? WHERE id = ?",
        )
        .bind(&details.name)
        .bind(&details.description)
        .bind(&details.event_type)
        .bind(&details.category)
        .bind(details.start_date.to_string())
        .bind(details.end_date.to_string())
        .bind(details.user_id)
        .bind(&logos)
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?;

        if res.rows_affected() == 0 {
            return Err(RepoUpdateError::NotFound);
        }
        Ok(Event { id, details, logos })
    }

    async fn delete_event(&self, id: EventId) -> Result<(), RepoUpdateError> {
        let res = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?;

        if res.rows_affected() == 0 {
            return Err(RepoUpdateError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str) -> EventDetails {
        EventDetails {
            name: name.to_string(),
            description: None,
            event_type: "match".to_string(),
            category: "football".to_string(),
            start_date: "2024-08-17T15:00:00".parse().unwrap(),
            end_date: "2024-08-17T17:00:00+01:00".parse().unwrap(),
            user_id: 42,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = SqliteEventRepository::in_memory().await.unwrap();

        let created = repo
            .create_event(details("Lions v Tigers"), Some("http://logo/lions.png|".to_string()))
            .await
            .unwrap();
        let fetched = repo.get_event(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.details.start_date.to_string(), "2024-08-17T15:00:00");
        assert_eq!(
            fetched.details.end_date.to_string(),
            "2024-08-17T17:00:00+01:00"
        );
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_listed() {
        let repo = SqliteEventRepository::in_memory().await.unwrap();

        let first = repo.create_event(details("A"), None).await.unwrap();
        let second = repo.create_event(details("B"), None).await.unwrap();
        assert_ne!(first.id, second.id);

        let listed = repo.list_events().await.unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = SqliteEventRepository::in_memory().await.unwrap();
        assert!(matches!(
            repo.get_event(EventId(999)).await,
            Err(RepoRetrieveError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = SqliteEventRepository::in_memory().await.unwrap();
        let created = repo
            .create_event(details("Lions v Tigers"), Some("a|b".to_string()))
            .await
            .unwrap();

        let mut new_details = details("Wolves v Bears");
        new_details.description = Some("Rescheduled".to_string());
        new_details.user_id = 7;
        let updated = repo
            .update_event(created.id, new_details.clone(), None)
            .await
            .unwrap();

        assert_eq!(updated.details, new_details);
        assert_eq!(repo.get_event(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = SqliteEventRepository::in_memory().await.unwrap();
        assert!(matches!(
            repo.update_event(EventId(999), details("A"), None).await,
            Err(RepoUpdateError::NotFound)
        ));
        assert!(repo.list_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = SqliteEventRepository::in_memory().await.unwrap();
        let created = repo.create_event(details("A"), None).await.unwrap();

        assert!(repo.delete_event(created.id).await.is_ok());
        assert!(matches!(
            repo.delete_event(created.id).await,
            Err(RepoUpdateError::NotFound)
        ));
        assert!(matches!(
            repo.get_event(created.id).await,
            Err(RepoRetrieveError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_unparseable_date_is_storage_error() {
        let repo = SqliteEventRepository::in_memory().await.unwrap();
        let res = sqlx::query(
            "INSERT INTO events (name, event_type, category, start_date, end_date, user_id) VALUES ('Lions v Tigers', 'match', 'football', 'garbage', '2024-08-17T17:00:00', 42)",
        )
        .execute(&repo.pool)
        .await
        .unwrap();
        let id = EventId(res.last_insert_rowid());

        assert!(matches!(
            repo.get_event(id).await,
            Err(RepoRetrieveError::StorageError(_))
        ));
        assert!(matches!(
            repo.list_events().await,
            Err(RepoError::StorageError(_))
        ));
    }

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let repo = SqliteEventRepository::in_memory().await.unwrap();
        repo.create_event(details("A"), None).await.unwrap();

        create_schema(&repo.pool).await.unwrap();
        assert_eq!(repo.list_events().await.unwrap().len(), 1);
    }
}
