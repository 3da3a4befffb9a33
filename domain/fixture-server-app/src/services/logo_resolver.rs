use std::sync::Arc;

use crate::ports::team_directory::TeamDirectoryPort;

pub const FIXTURE_DELIMITER: &str = " v ";

pub const LOGO_SEPARATOR: char = '|';

#[async_trait::async_trait]
pub trait LogoResolverService {
    /// Returns `"<home>|<away>"` for a two-team fixture name, or `None` when
    /// the name is no fixture or neither team produced a logo.
    async fn resolve_logos(&self, event_name: &str) -> Option<String>;
}

pub struct LogoResolverServiceImpl<T: TeamDirectoryPort> {
    team_directory: Arc<T>,
}

impl<T: TeamDirectoryPort> LogoResolverServiceImpl<T> {
    pub fn new(team_directory: Arc<T>) -> Self {
        Self { team_directory }
    }
}

#[async_trait::async_trait]
impl<T: TeamDirectoryPort + Send + Sync + 'static> LogoResolverService
    for LogoResolverServiceImpl<T>
{
    async fn resolve_logos(&self, event_name: &str) -> Option<String> {
        let (home, away) = split_fixture(event_name)?;
        let (home_logo, away_logo) = tokio::join!(
            self.team_directory.find_team_logo(home),
            self.team_directory.find_team_logo(away),
        );
        merge_logos(&home_logo, &away_logo)
    }
}

/// Splits `"Home v Away"` into its two team names. Anything other than
/// exactly two non-empty segments is not a fixture.
pub fn split_fixture(event_name: &str) -> Option<(&str, &str)> {
    let mut parts = event_name.split(FIXTURE_DELIMITER);
    let home = parts.next()?;
    let away = parts.next()?;
    if parts.next().is_some() || home.is_empty() || away.is_empty() {
        return None;
    }
    Some((home, away))
}

pub fn merge_logos(home_logo: &str, away_logo: &str) -> Option<String> {
    if home_logo.is_empty() && away_logo.is_empty() {
        return None;
    }
    Some(format!("{}{}{}", home_logo, LOGO_SEPARATOR, away_logo))
}

#[cfg(test)]
mod tests {
    use crate::ports::team_directory::MockTeamDirectory;

    use super::*;

    #[test]
    fn test_split_fixture() {
        assert_eq!(split_fixture("Lions v Tigers"), Some(("Lions", "Tigers")));
        assert_eq!(
            split_fixture("Manchester United v Arsenal"),
            Some(("Manchester United", "Arsenal"))
        );
        assert_eq!(split_fixture("Lions vs Tigers"), None);
        assert_eq!(split_fixture("Lions"), None);
        assert_eq!(split_fixture("A v B v C"), None);
        assert_eq!(split_fixture(" v Tigers"), None);
        assert_eq!(split_fixture("Lions v "), None);
        assert_eq!(split_fixture("Lions V Tigers"), None);
    }

    #[test]
    fn test_merge_logos() {
        assert_eq!(merge_logos("", ""), None);
        assert_eq!(merge_logos("a", "b"), Some("a|b".to_string()));
        assert_eq!(merge_logos("a", ""), Some("a|".to_string()));
        assert_eq!(
            merge_logos("", "https://logo2"),
            Some("|https://logo2".to_string())
        );
    }

    #[tokio::test]
    async fn test_non_fixture_issues_no_lookup() {
        let directory = MockTeamDirectory::default().with_logo("Lions", "l.png");
        let resolver = LogoResolverServiceImpl::new(Arc::new(directory.clone()));

        for name in ["Annual Gala", "Lions vs Tigers", "A v B v C", "Lions v "] {
            assert_eq!(resolver.resolve_logos(name).await, None);
        }
        assert!(directory.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_keeps_segment_order() {
        let directory = MockTeamDirectory::default()
            .with_logo("Lions", "http://logo/lions.png")
            .with_logo("Tigers", "http://logo/tigers.png");
        let resolver = LogoResolverServiceImpl::new(Arc::new(directory.clone()));

        assert_eq!(
            resolver.resolve_logos("Lions v Tigers").await,
            Some("http://logo/lions.png|http://logo/tigers.png".to_string())
        );
        assert_eq!(
            resolver.resolve_logos("Tigers v Lions").await,
            Some("http://logo/tigers.png|http://logo/lions.png".to_string())
        );

        let mut lookups = directory.lookups();
        lookups.sort();
        assert_eq!(lookups, vec!["Lions", "Lions", "Tigers", "Tigers"]);
    }

    #[tokio::test]
    async fn test_resolve_partial_and_empty() {
        let directory = MockTeamDirectory::default().with_logo("Lions", "http://logo/lions.png");
        let resolver = LogoResolverServiceImpl::new(Arc::new(directory.clone()));

        assert_eq!(
            resolver.resolve_logos("Lions v Tigers").await,
            Some("http://logo/lions.png|".to_string())
        );
        assert_eq!(
            resolver.resolve_logos("Bears v Lions").await,
            Some("|http://logo/lions.png".to_string())
        );
        assert_eq!(resolver.resolve_logos("Bears v Wolves").await, None);
        assert_eq!(directory.lookups().len(), 6);
    }
}
