use std::time::Duration;

use fixture_server_app::ports::team_directory::TeamDirectoryPort;
use serde::Deserialize;

pub const DEFAULT_SEARCH_URL: &str = "https://www.thesportsdb.com/api/v1/json/3/searchteams.php";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Deserialize)]
struct SearchTeamsResponse {
    #[serde(default)]
    teams: Option<Vec<TeamRecord>>,
}

#[derive(Deserialize)]
struct TeamRecord {
    #[serde(rename = "strLogo", default)]
    str_logo: Option<String>,
}

/// Team directory backed by the TheSportsDB `searchteams` endpoint.
pub struct SportsDbTeamDirectory {
    client: reqwest::Client,
    search_url: String,
}

impl SportsDbTeamDirectory {
    pub fn new(search_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            search_url: search_url.into(),
        })
    }

    async fn fetch_logo(&self, team_name: &str) -> Result<Option<String>, LookupError> {
        let resp = self
            .client
            .get(&self.search_url)
            .query(&[("t", team_name)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body: SearchTeamsResponse = resp.json().await?;
        Ok(body
            .teams
            .and_then(|teams| teams.into_iter().next())
            .and_then(|team| team.str_logo))
    }
}

#[async_trait::async_trait]
impl TeamDirectoryPort for SportsDbTeamDirectory {
    async fn find_team_logo(&self, team_name: &str) -> String {
        match self.fetch_logo(team_name).await {
            Ok(Some(logo)) => logo,
            Ok(None) => {
                log::info!("No team logo found for '{}'", team_name);
                String::new()
            }
            Err(e) => {
                log::error!("Failed to fetch logo for team '{}': {}", team_name, e);
                String::new()
            }
        }
    }
}
