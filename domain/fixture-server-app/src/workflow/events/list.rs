use std::sync::Arc;

use crate::domain::{
    RepoError,
    event::{Event, EventRepository},
};

#[async_trait::async_trait]
pub trait ListEventsUseCase {
    async fn list_events(&self) -> Result<Vec<Event>, ListEventsError>;
}

#[derive(Debug)]
pub enum ListEventsError {
    RepositoryError,
}

pub struct ListEventsUseCaseImpl<R: EventRepository> {
    event_repository: Arc<R>,
}

impl<R: EventRepository> ListEventsUseCaseImpl<R> {
    pub fn new(event_repository: Arc<R>) -> Self {
        Self { event_repository }
    }
}

#[async_trait::async_trait]
impl<R: EventRepository + Send + Sync + 'static> ListEventsUseCase for ListEventsUseCaseImpl<R> {
    async fn list_events(&self) -> Result<Vec<Event>, ListEventsError> {
        match self.event_repository.list_events().await {
            Ok(events) => Ok(events),
            Err(RepoError::StorageError(e)) => {
                log::error!("Error retrieving events: {}", e);
                Err(ListEventsError::RepositoryError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{EventId, event::MockEventRepository},
        workflow::events::sample_details,
    };

    use super::*;

    #[tokio::test]
    async fn test_list_events() {
        let repo = MockEventRepository::default()
            .with_event(Event {
                id: EventId(1),
                details: sample_details("Lions v Tigers"),
                logos: Some("a|b".to_string()),
            })
            .with_event(Event {
                id: EventId(2),
                details: sample_details("Gala"),
                logos: None,
            });
        let use_case = ListEventsUseCaseImpl::new(Arc::new(repo.clone()));

        let events = use_case.list_events().await.unwrap();
        assert_eq!(events.len(), 2);

        repo.set_fail_storage(true);
        assert!(matches!(
            use_case.list_events().await,
            Err(ListEventsError::RepositoryError)
        ));
    }
}
