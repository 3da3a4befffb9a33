use std::sync::Arc;

use crate::domain::{EventId, RepoUpdateError, event::EventRepository};

#[async_trait::async_trait]
pub trait DeleteEventUseCase {
    async fn delete_event(&self, id: EventId) -> Result<(), DeleteEventError>;
}

#[derive(Debug)]
pub enum DeleteEventError {
    NotFound,
    RepositoryError,
}

pub struct DeleteEventUseCaseImpl<R: EventRepository> {
    event_repository: Arc<R>,
}

impl<R: EventRepository> DeleteEventUseCaseImpl<R> {
    pub fn new(event_repository: Arc<R>) -> Self {
        Self { event_repository }
    }
}

#[async_trait::async_trait]
impl<R: EventRepository + Send + Sync + 'static> DeleteEventUseCase for DeleteEventUseCaseImpl<R> {
    async fn delete_event(&self, id: EventId) -> Result<(), DeleteEventError> {
        match self.event_repository.delete_event(id).await {
            Ok(()) => {
                log::info!("Deleted event {}", id);
                Ok(())
            }
            Err(RepoUpdateError::NotFound) => Err(DeleteEventError::NotFound),
            Err(RepoUpdateError::StorageError(e)) => {
                log::error!("Failed to delete event {}: {}", id, e);
                Err(DeleteEventError::RepositoryError)
            }
        }
    }
}
