pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

/// What to do with the stored logos when an event is rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoRefresh {
    Resolve,
    Keep(Option<String>),
}

/// Logos only depend on the event name, so they are recomputed only when the
/// name changes. Otherwise the previously stored value is carried over as is.
pub fn decide_logo_refresh(
    stored_name: &str,
    stored_logos: Option<String>,
    new_name: &str,
) -> LogoRefresh {
    if stored_name == new_name {
        LogoRefresh::Keep(stored_logos)
    } else {
        LogoRefresh::Resolve
    }
}

#[cfg(test)]
pub(crate) fn sample_details(name: &str) -> crate::domain::event::EventDetails {
    crate::domain::event::EventDetails {
        name: name.to_string(),
        description: Some("Season opener".to_string()),
        event_type: "match".to_string(),
        category: "football".to_string(),
        start_date: "2024-08-17T15:00:00".parse().unwrap(),
        end_date: "2024-08-17T17:00:00".parse().unwrap(),
        user_id: 42,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide_logo_refresh() {
        assert_eq!(
            decide_logo_refresh("Lions v Tigers", Some("a|b".to_string()), "Lions v Tigers"),
            LogoRefresh::Keep(Some("a|b".to_string()))
        );
        assert_eq!(
            decide_logo_refresh("Lions v Tigers", None, "Lions v Tigers"),
            LogoRefresh::Keep(None)
        );
        assert_eq!(
            decide_logo_refresh("Lions v Tigers", Some("a|b".to_string()), "Lions v Bears"),
            LogoRefresh::Resolve
        );
        assert_eq!(
            decide_logo_refresh("Lions v Tigers", None, "lions v tigers"),
            LogoRefresh::Resolve
        );
    }
}
