//! Application routes and their paths

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::FormMode;

/// A view the application can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "camelCase")]
pub enum Route {
    /// `/`
    #[default]
    Home,
    /// `/campaigns/{campaign_id}/adgroups/new`
    NewAdgroup { campaign_id: i64 },
    /// `/adgroups/{id}`
    AdgroupDetail { id: i64 },
    /// `/adgroups/{id}/edit`
    EditAdgroup { id: i64 },
}

impl Route {
    /// Detail view of a saved ad group.
    pub fn adgroup(id: i64) -> Self {
        Self::AdgroupDetail { id }
    }

    /// Form mode, for routes that show the ad group form.
    pub fn form_mode(self) -> Option<FormMode> {
        match self {
            Self::NewAdgroup { campaign_id } => Some(FormMode::Create { campaign_id }),
            Self::EditAdgroup { id } => Some(FormMode::Edit { id }),
            Self::Home | Self::AdgroupDetail { .. } => None,
        }
    }

    /// Ad group that must be fetched before the view can render.
    pub fn adgroup_to_load(self) -> Option<i64> {
        match self {
            Self::AdgroupDetail { id } | Self::EditAdgroup { id } => Some(id),
            Self::Home | Self::NewAdgroup { .. } => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::NewAdgroup { .. } => "New Ad Group",
            Self::AdgroupDetail { .. } => "Ad Group",
            Self::EditAdgroup { .. } => "Edit Ad Group",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::NewAdgroup { campaign_id } => {
                write!(f, "/campaigns/{campaign_id}/adgroups/new")
            }
            Self::AdgroupDetail { id } => write!(f, "/adgroups/{id}"),
            Self::EditAdgroup { id } => write!(f, "/adgroups/{id}/edit"),
        }
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidRoute(s.to_string());
        let id = |segment: &str| segment.parse::<i64>().map_err(|_| invalid());

        let segments: Vec<&str> = s
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|seg| !seg.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Self::Home),
            ["campaigns", campaign_id, "adgroups", "new"] => Ok(Self::NewAdgroup {
                campaign_id: id(*campaign_id)?,
            }),
            ["adgroups", ag] => Ok(Self::AdgroupDetail { id: id(*ag)? }),
            ["adgroups", ag, "edit"] => Ok(Self::EditAdgroup { id: id(*ag)? }),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Home,
            Route::NewAdgroup { campaign_id: 3 },
            Route::AdgroupDetail { id: 42 },
            Route::EditAdgroup { id: 7 },
        ] {
            assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn parse_tolerates_slashes_and_whitespace() {
        assert_eq!(" /adgroups/42/ ".parse::<Route>().unwrap(), Route::adgroup(42));
        assert_eq!("".parse::<Route>().unwrap(), Route::Home);
    }

    #[test]
    fn parse_rejects_unknown_paths() {
        assert_eq!(
            "/adgroups/abc".parse::<Route>(),
            Err(CoreError::InvalidRoute("/adgroups/abc".to_string()))
        );
        assert!("/campaigns/3".parse::<Route>().is_err());
        assert!("/accounts".parse::<Route>().is_err());
    }

    #[test]
    fn form_routes_carry_mode() {
        assert_eq!(
            Route::NewAdgroup { campaign_id: 3 }.form_mode(),
            Some(FormMode::Create { campaign_id: 3 })
        );
        assert_eq!(Route::EditAdgroup { id: 9 }.form_mode(), Some(FormMode::Edit { id: 9 }));
        assert_eq!(Route::adgroup(9).form_mode(), None);
        assert_eq!(Route::EditAdgroup { id: 9 }.adgroup_to_load(), Some(9));
        assert_eq!(Route::NewAdgroup { campaign_id: 1 }.adgroup_to_load(), None);
    }
}
