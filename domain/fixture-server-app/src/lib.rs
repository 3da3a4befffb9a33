use std::sync::Arc;

use crate::{
    domain::event::EventRepository,
    ports::team_directory::TeamDirectoryPort,
    services::logo_resolver::LogoResolverServiceImpl,
    workflow::events::{
        create::{CreateEventUseCase, CreateEventUseCaseImpl},
        delete::{DeleteEventUseCase, DeleteEventUseCaseImpl},
        get::{GetEventUseCase, GetEventUseCaseImpl},
        list::{ListEventsUseCase, ListEventsUseCaseImpl},
        update::{UpdateEventUseCase, UpdateEventUseCaseImpl},
    },
};

pub mod domain;
pub mod ports;
pub mod services;
pub mod workflow;

pub struct Application {
    pub event_create_use_case: Box<dyn CreateEventUseCase + Send + Sync + 'static>,
    pub event_get_use_case: Box<dyn GetEventUseCase + Send + Sync + 'static>,
    pub event_list_use_case: Box<dyn ListEventsUseCase + Send + Sync + 'static>,
    pub event_update_use_case: Box<dyn UpdateEventUseCase + Send + Sync + 'static>,
    pub event_delete_use_case: Box<dyn DeleteEventUseCase + Send + Sync + 'static>,
}

pub fn build_application<
    ER: EventRepository + Send + Sync + 'static,
    TD: TeamDirectoryPort + Send + Sync + 'static,
>(
    event_repository: Arc<ER>,
    team_directory: Arc<TD>,
) -> Application {
    let logo_resolver_service = Arc::new(LogoResolverServiceImpl::new(team_directory));

    Application {
        event_create_use_case: Box::new(CreateEventUseCaseImpl::new(
            event_repository.clone(),
            logo_resolver_service.clone(),
        )),
        event_get_use_case: Box::new(GetEventUseCaseImpl::new(event_repository.clone())),
        event_list_use_case: Box::new(ListEventsUseCaseImpl::new(event_repository.clone())),
        event_update_use_case: Box::new(UpdateEventUseCaseImpl::new(
            event_repository.clone(),
            logo_resolver_service,
        )),
        event_delete_use_case: Box::new(DeleteEventUseCaseImpl::new(event_repository)),
    }
}
