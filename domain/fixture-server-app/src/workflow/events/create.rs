use std::sync::Arc;

use crate::{
    domain::{
        RepoError,
        event::{Event, EventDetails, EventRepository},
    },
    services::logo_resolver::LogoResolverService,
};

#[async_trait::async_trait]
pub trait CreateEventUseCase {
    async fn create_event(&self, details: EventDetails) -> Result<Event, CreateEventError>;
}

#[derive(Debug)]
pub enum CreateEventError {
    RepositoryError,
}

pub struct CreateEventUseCaseImpl<R: EventRepository, L: LogoResolverService> {
    event_repository: Arc<R>,
    logo_resolver: Arc<L>,
}

impl<R: EventRepository, L: LogoResolverService> CreateEventUseCaseImpl<R, L> {
    pub fn new(event_repository: Arc<R>, logo_resolver: Arc<L>) -> Self {
        Self {
            event_repository,
            logo_resolver,
        }
    }
}

#[async_trait::async_trait]
impl<R, L> CreateEventUseCase for CreateEventUseCaseImpl<R, L>
where
    R: EventRepository + Send + Sync + 'static,
    L: LogoResolverService + Send + Sync + 'static,
{
    async fn create_event(&self, details: EventDetails) -> Result<Event, CreateEventError> {
        let logos = self.logo_resolver.resolve_logos(&details.name).await;
        let name = details.name.clone();
        match self.event_repository.create_event(details, logos).await {
            Ok(event) => {
                log::info!("Created event {} '{}'", event.id, event.details.name);
                Ok(event)
            }
            Err(RepoError::StorageError(e)) => {
                log::error!("Failed to create event '{}': {}", name, e);
                Err(CreateEventError::RepositoryError)
            }
        }
    }
}
