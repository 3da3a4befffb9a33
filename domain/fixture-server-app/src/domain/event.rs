use std::{
    collections::BTreeMap,
    str::FromStr,
    sync::{Arc, Mutex},
};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};

use crate::domain::{EventId, RepoError, RepoRetrieveError, RepoUpdateError};

#[async_trait::async_trait]
pub trait EventRepository {
    async fn create_event(
        &self,
        details: EventDetails,
        logos: Option<String>,
    ) -> Result<Event, RepoError>;
    async fn get_event(&self, id: EventId) -> Result<Event, RepoRetrieveError>;
    async fn list_events(&self) -> Result<Vec<Event>, RepoError>;
    /// Replaces every stored column of the row, `logos` included.
    async fn update_event(
        &self,
        id: EventId,
        details: EventDetails,
        logos: Option<String>,
    ) -> Result<Event, RepoUpdateError>;
    async fn delete_event(&self, id: EventId) -> Result<(), RepoUpdateError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub details: EventDetails,
    /// `"<logoA>|<logoB>"`, derived from `details.name`.
    pub logos: Option<String>,
}

/// Caller-supplied fields of an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDetails {
    pub name: String,
    pub description: Option<String>,
    pub event_type: String,
    pub category: String,
    pub start_date: EventTime,
    pub end_date: EventTime,
    pub user_id: i64,
}

/// A point in time as submitted by the client. Naive timestamps stay naive,
/// offset timestamps keep their offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventTime {
    Local(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ISO-8601 timestamp: '{0}'")]
pub struct InvalidEventTime(pub String);

impl FromStr for EventTime {
    type Err = InvalidEventTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.replacen(' ', "T", 1);

        if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
            return Ok(EventTime::Offset(dt));
        }
        if let Ok(dt) = DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%#z") {
            return Ok(EventTime::Offset(dt));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, format) {
                return Ok(EventTime::Local(dt));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(EventTime::Local(date.and_time(NaiveTime::MIN)));
        }
        Err(InvalidEventTime(s.to_string()))
    }
}

impl std::fmt::Display for EventTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventTime::Local(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            EventTime::Offset(dt) => {
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, false))
            }
        }
    }
}

#[derive(Default)]
struct MockEventState {
    events: BTreeMap<i64, Event>,
    last_id: i64,
    writes: usize,
    fail_storage: bool,
}

/// In-memory store that counts writes and can be switched into a failing mode.
#[derive(Clone, Default)]
pub struct MockEventRepository {
    state: Arc<Mutex<MockEventState>>,
}

#[allow(unused)]
impl MockEventRepository {
    pub fn with_event(self, event: Event) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.last_id = state.last_id.max(event.id.0);
            state.events.insert(event.id.0, event);
        }
        self
    }

    pub fn set_fail_storage(&self, fail: bool) {
        self.state.lock().unwrap().fail_storage = fail;
    }

    pub fn stored(&self, id: EventId) -> Option<Event> {
        self.state.lock().unwrap().events.get(&id.0).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes
    }
}

#[async_trait::async_trait]
impl EventRepository for MockEventRepository {
    async fn create_event(
        &self,
        details: EventDetails,
        logos: Option<String>,
    ) -> Result<Event, RepoError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_storage {
            return Err(RepoError::StorageError("mock storage offline".to_string()));
        }
        state.last_id += 1;
        state.writes += 1;
        let event = Event {
            id: EventId(state.last_id),
            details,
            logos,
        };
        state.events.insert(event.id.0, event.clone());
        Ok(event)
    }

    async fn get_event(&self, id: EventId) -> Result<Event, RepoRetrieveError> {
        let state = self.state.lock().unwrap();
        if state.fail_storage {
            return Err(RepoRetrieveError::StorageError(
                "mock storage offline".to_string(),
            ));
        }
        state
            .events
            .get(&id.0)
            .cloned()
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn list_events(&self) -> Result<Vec<Event>, RepoError> {
        let state = self.state.lock().unwrap();
        if state.fail_storage {
            return Err(RepoError::StorageError("mock storage offline".to_string()));
        }
        Ok(state.events.values().cloned().collect())
    }

    async fn update_event(
        &self,
        id: EventId,
        details: EventDetails,
        logos: Option<String>,
    ) -> Result<Event, RepoUpdateError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_storage {
            return Err(RepoUpdateError::StorageError(
                "mock storage offline".to_string(),
            ));
        }
        if !state.events.contains_key(&id.0) {
            return Err(RepoUpdateError::NotFound);
        }
        state.writes += 1;
        let event = Event { id, details, logos };
        state.events.insert(id.0, event.clone());
        Ok(event)
    }

    async fn delete_event(&self, id: EventId) -> Result<(), RepoUpdateError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_storage {
            return Err(RepoUpdateError::StorageError(
                "mock storage offline".to_string(),
            ));
        }
        match state.events.remove(&id.0) {
            Some(_) => {
                state.writes += 1;
                Ok(())
            }
            None => Err(RepoUpdateError::NotFound),
        }
    }
}
