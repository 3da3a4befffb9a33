use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use fixture_server_app::{
    domain::{
        EventId,
        event::{Event, EventDetails, EventTime},
    },
    workflow::events::{
        create::CreateEventError, delete::DeleteEventError, get::GetEventError,
        list::ListEventsError, update::UpdateEventError,
    },
};

use crate::{ServiceError, http::AppState};

#[derive(serde::Serialize, Clone, Debug)]
pub struct JsonEvent {
    id: i64,
    name: String,
    description: Option<String>,
    event_type: String,
    category: String,
    start_date: String,
    end_date: String,
    user_id: i64,
    logos: Option<String>,
}

impl From<Event> for JsonEvent {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.0,
            name: event.details.name,
            description: event.details.description,
            event_type: event.details.event_type,
            category: event.details.category,
            start_date: event.details.start_date.to_string(),
            end_date: event.details.end_date.to_string(),
            user_id: event.details.user_id,
            logos: event.logos,
        }
    }
}

/// Request body for create and update. `id` and `logos` are not accepted
/// from clients and are dropped if present.
#[derive(serde::Deserialize)]
pub struct JsonEventInput {
    name: String,
    #[serde(default)]
    description: Option<String>,
    event_type: String,
    category: String,
    start_date: String,
    end_date: String,
    user_id: i64,
}

impl TryFrom<JsonEventInput> for EventDetails {
    type Error = ServiceError;

    fn try_from(input: JsonEventInput) -> Result<Self, Self::Error> {
        for (field, value) in [
            ("name", &input.name),
            ("event_type", &input.event_type),
            ("category", &input.category),
        ] {
            if value.trim().is_empty() {
                return Err(ServiceError::BadRequest(format!(
                    "Field '{}' must not be empty",
                    field
                )));
            }
        }
        let start_date = parse_time("start_date", &input.start_date)?;
        let end_date = parse_time("end_date", &input.end_date)?;

        Ok(EventDetails {
            name: input.name,
            description: input.description,
            event_type: input.event_type,
            category: input.category,
            start_date,
            end_date,
            user_id: input.user_id,
        })
    }
}

fn parse_time(field: &str, value: &str) -> Result<EventTime, ServiceError> {
    value
        .parse()
        .map_err(|e| ServiceError::BadRequest(format!("Field '{}': {}", field, e)))
}

fn parse_body(
    body: Result<Json<JsonEventInput>, JsonRejection>,
) -> Result<EventDetails, ServiceError> {
    let Json(input) =
        body.map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;
    EventDetails::try_from(input)
}

fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<EventId, ServiceError> {
    let Path(id) = id.map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;
    Ok(EventId::new(id))
}

fn not_found(id: EventId) -> ServiceError {
    ServiceError::NotFound(format!("Event {} not found", id))
}

pub async fn get_all_events(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonEvent>>, ServiceError> {
    let events = app_state
        .app
        .event_list_use_case
        .list_events()
        .await
        .map_err(|ListEventsError::RepositoryError| ServiceError::Internal)?;

    Ok(Json(events.into_iter().map(JsonEvent::from).collect()))
}

pub async fn get_event_by_id(
    State(app_state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<JsonEvent>, ServiceError> {
    let id = parse_id(id)?;
    match app_state.app.event_get_use_case.get_event(id).await {
        Ok(event) => Ok(Json(event.into())),
        Err(GetEventError::NotFound) => Err(not_found(id)),
        Err(GetEventError::RepositoryError) => Err(ServiceError::Internal),
    }
}

pub async fn create_event(
    State(app_state): State<AppState>,
    body: Result<Json<JsonEventInput>, JsonRejection>,
) -> Result<(StatusCode, Json<JsonEvent>), ServiceError> {
    let details = parse_body(body)?;
    match app_state.app.event_create_use_case.create_event(details).await {
        Ok(event) => Ok((StatusCode::CREATED, Json(event.into()))),
        Err(CreateEventError::RepositoryError) => Err(ServiceError::Internal),
    }
}

pub async fn update_event(
    State(app_state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<JsonEventInput>, JsonRejection>,
) -> Result<Json<JsonEvent>, ServiceError> {
    let id = parse_id(id)?;
    let details = parse_body(body)?;
    match app_state
        .app
        .event_update_use_case
        .update_event(id, details)
        .await
    {
        Ok(event) => Ok(Json(event.into())),
        Err(UpdateEventError::NotFound) => Err(not_found(id)),
        Err(UpdateEventError::RepositoryError) => Err(ServiceError::Internal),
    }
}

pub async fn delete_event(
    State(app_state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ServiceError> {
    let id = parse_id(id)?;
    match app_state.app.event_delete_use_case.delete_event(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(DeleteEventError::NotFound) => Err(not_found(id)),
        Err(DeleteEventError::RepositoryError) => Err(ServiceError::Internal),
    }
}
