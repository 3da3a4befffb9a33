use std::sync::Arc;

use crate::{
    domain::{
        EventId, RepoRetrieveError, RepoUpdateError,
        event::{Event, EventDetails, EventRepository},
    },
    services::logo_resolver::LogoResolverService,
    workflow::events::{LogoRefresh, decide_logo_refresh},
};

#[async_trait::async_trait]
pub trait UpdateEventUseCase {
    async fn update_event(
        &self,
        id: EventId,
        details: EventDetails,
    ) -> Result<Event, UpdateEventError>;
}

#[derive(Debug)]
pub enum UpdateEventError {
    NotFound,
    RepositoryError,
}

pub struct UpdateEventUseCaseImpl<R: EventRepository, L: LogoResolverService> {
    event_repository: Arc<R>,
    logo_resolver: Arc<L>,
}

impl<R: EventRepository, L: LogoResolverService> UpdateEventUseCaseImpl<R, L> {
    pub fn new(event_repository: Arc<R>, logo_resolver: Arc<L>) -> Self {
        Self {
            event_repository,
            logo_resolver,
        }
    }
}

#[async_trait::async_trait]
impl<R, L> UpdateEventUseCase for UpdateEventUseCaseImpl<R, L>
where
    R: EventRepository + Send + Sync + 'static,
    L: LogoResolverService + Send + Sync + 'static,
{
    async fn update_event(
        &self,
        id: EventId,
        details: EventDetails,
    ) -> Result<Event, UpdateEventError> {
        let stored = match self.event_repository.get_event(id).await {
            Ok(event) => event,
            Err(RepoRetrieveError::NotFound) => return Err(UpdateEventError::NotFound),
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Failed to load event {} for update: {}", id, e);
                return Err(UpdateEventError::RepositoryError);
            }
        };

        let logos = match decide_logo_refresh(&stored.details.name, stored.logos, &details.name) {
            LogoRefresh::Keep(logos) => logos,
            LogoRefresh::Resolve => {
                log::debug!(
                    "Event {} renamed from '{}' to '{}', resolving logos",
                    id,
                    stored.details.name,
                    details.name
                );
                self.logo_resolver.resolve_logos(&details.name).await
            }
        };

        match self.event_repository.update_event(id, details, logos).await {
            Ok(event) => Ok(event),
            Err(RepoUpdateError::NotFound) => Err(UpdateEventError::NotFound),
            Err(RepoUpdateError::StorageError(e)) => {
                log::error!("Failed to update event {}: {}", id, e);
                Err(UpdateEventError::RepositoryError)
            }
        }
    }
}
