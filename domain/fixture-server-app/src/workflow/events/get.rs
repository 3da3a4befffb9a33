use std::sync::Arc;

use crate::domain::{
    EventId, RepoRetrieveError,
    event::{Event, EventRepository},
};

#[async_trait::async_trait]
pub trait GetEventUseCase {
    async fn get_event(&self, id: EventId) -> Result<Event, GetEventError>;
}

#[derive(Debug)]
pub enum GetEventError {
    NotFound,
    RepositoryError,
}

pub struct GetEventUseCaseImpl<R: EventRepository> {
    event_repository: Arc<R>,
}

impl<R: EventRepository> GetEventUseCaseImpl<R> {
    pub fn new(event_repository: Arc<R>) -> Self {
        Self { event_repository }
    }
}

#[async_trait::async_trait]
impl<R: EventRepository + Send + Sync + 'static> GetEventUseCase for GetEventUseCaseImpl<R> {
    async fn get_event(&self, id: EventId) -> Result<Event, GetEventError> {
        match self.event_repository.get_event(id).await {
            Ok(event) => Ok(event),
            Err(RepoRetrieveError::NotFound) => Err(GetEventError::NotFound),
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to retrieve event {}: {}", id, e);
                Err(GetEventError::RepositoryError)
            }
        }
    }
}
