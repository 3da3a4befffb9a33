use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// External directory queried by team name for a logo reference.
///
/// Implementations never fail the caller: any lookup problem (network,
/// timeout, bad body, no match) is handled inside the adapter and reported
/// as an empty string.
#[async_trait::async_trait]
pub trait TeamDirectoryPort {
    async fn find_team_logo(&self, team_name: &str) -> String;
}

/// Directory answering from a fixed table; unknown teams yield an empty logo.
#[derive(Clone, Default)]
pub struct MockTeamDirectory {
    logos: HashMap<String, String>,
    lookups: Arc<Mutex<Vec<String>>>,
}

#[allow(unused)]
impl MockTeamDirectory {
    pub fn with_logo(mut self, team_name: &str, logo: &str) -> Self {
        self.logos.insert(team_name.to_string(), logo.to_string());
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TeamDirectoryPort for MockTeamDirectory {
    async fn find_team_logo(&self, team_name: &str) -> String {
        self.lookups.lock().unwrap().push(team_name.to_string());
        self.logos.get(team_name).cloned().unwrap_or_default()
    }
}
