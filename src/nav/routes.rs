use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::form_urlencoded;

use crate::auth::Session;
use crate::domain::{ApplicationId, ClubId, EventId, Role, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unknown route '{path}'")]
    Unknown { path: String },

    #[error("Route '{route}' needs an identifier")]
    MissingArgument { route: &'static str },

    #[error("Malformed identifier in route '{path}'")]
    Encoding { path: String },
}

/// A destination in the app.
///
/// Identifiers are percent-encoded into the path, so any non-empty id
/// survives `Route::parse(&route.path())` unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    SignUp,
    ForgotPassword,
    VerifyEmail,
    Home,
    Browse,
    Notifications,
    Admin,
    Club(ClubId),
    Event(EventId),
    LeaderDashboard(ClubId),
    ApplicationReview(ApplicationId),
}

const CLUB: &str = "clubs";
const EVENT: &str = "events";
const LEADER: &str = "leader";
const APPLICATION: &str = "admin/applications";

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Login => "login".to_string(),
            Self::SignUp => "sign-up".to_string(),
            Self::ForgotPassword => "forgot-password".to_string(),
            Self::VerifyEmail => "verify-email".to_string(),
            Self::Home => "home".to_string(),
            Self::Browse => "browse".to_string(),
            Self::Notifications => "notifications".to_string(),
            Self::Admin => "admin".to_string(),
            Self::Club(id) => with_argument(CLUB, id.as_str()),
            Self::Event(id) => with_argument(EVENT, id.as_str()),
            Self::LeaderDashboard(id) => with_argument(LEADER, id.as_str()),
            Self::ApplicationReview(id) => with_argument(APPLICATION, id.as_str()),
        }
    }

    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim_matches('/');
        let simple = match trimmed {
            "login" => Some(Self::Login),
            "sign-up" => Some(Self::SignUp),
            "forgot-password" => Some(Self::ForgotPassword),
            "verify-email" => Some(Self::VerifyEmail),
            "home" => Some(Self::Home),
            "browse" => Some(Self::Browse),
            "notifications" => Some(Self::Notifications),
            "admin" => Some(Self::Admin),
            _ => None,
        };
        if let Some(route) = simple {
            return Ok(route);
        }

        // Longest template first: "admin/applications" shadows "admin".
        if let Some(argument) = argument_of(trimmed, APPLICATION, path)? {
            return Ok(Self::ApplicationReview(ApplicationId::new(argument)));
        }
        if let Some(argument) = argument_of(trimmed, CLUB, path)? {
            return Ok(Self::Club(ClubId::new(argument)));
        }
        if let Some(argument) = argument_of(trimmed, EVENT, path)? {
            return Ok(Self::Event(EventId::new(argument)));
        }
        if let Some(argument) = argument_of(trimmed, LEADER, path)? {
            return Ok(Self::LeaderDashboard(ClubId::new(argument)));
        }
        Err(RouteError::Unknown {
            path: path.to_string(),
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Where a user lands after launch.
///
/// `led_club` is the club a leader runs, when known; leaders without one
/// land on the student home.
pub fn start_for(session: Option<&Session>, profile: Option<&User>, led_club: Option<&ClubId>) -> Route {
    let Some(session) = session else {
        return Route::Login;
    };
    if !session.email_verified {
        return Route::VerifyEmail;
    }
    match profile {
        Some(user) if !user.active => Route::Login,
        Some(user) => match user.role {
            Role::Admin => Route::Admin,
            Role::ClubLeader => led_club
                .map(|club| Route::LeaderDashboard(club.clone()))
                .unwrap_or(Route::Home),
            Role::Student => Route::Home,
        },
        None => Route::Home,
    }
}

fn with_argument(template: &str, argument: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(argument.as_bytes()).collect();
    format!("{template}/{encoded}")
}

/// The decoded argument when `trimmed` is `{template}/{argument}`; `None`
/// when it is some other route.
fn argument_of(trimmed: &str, template: &'static str, path: &str) -> Result<Option<String>, RouteError> {
    if trimmed == template {
        return Err(RouteError::MissingArgument { route: template });
    }
    let Some(encoded) = trimmed
        .strip_prefix(template)
        .and_then(|rest| rest.strip_prefix('/'))
    else {
        return Ok(None);
    };
    if encoded.is_empty() {
        return Err(RouteError::MissingArgument { route: template });
    }
    if encoded.contains('/') {
        return Err(RouteError::Unknown {
            path: path.to_string(),
        });
    }
    if encoded.contains('&') || encoded.contains('=') {
        return Err(RouteError::Encoding {
            path: path.to_string(),
        });
    }

    let mut pairs = form_urlencoded::parse(encoded.as_bytes());
    match (pairs.next(), pairs.next()) {
        (Some((argument, value)), None) if value.is_empty() && !argument.is_empty() => {
            Ok(Some(argument.into_owned()))
        }
        _ => Err(RouteError::Encoding {
            path: path.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;

    fn session(verified: bool) -> Session {
        Session {
            uid: UserId::new("amy"),
            email: "amy@uni.edu".to_string(),
            email_verified: verified,
        }
    }

    #[test]
    fn simple_routes() {
        assert_eq!(Route::parse("home"), Ok(Route::Home));
        assert_eq!(Route::parse("/admin/"), Ok(Route::Admin));
        assert_eq!(Route::Notifications.to_string(), "notifications");
    }

    #[test]
    fn identifiers_are_encoded() {
        let route = Route::Club(ClubId::new("a/b c"));
        assert_eq!(route.path(), "clubs/a%2Fb+c");
        assert_eq!(Route::parse(&route.path()), Ok(route));
    }

    #[test]
    fn empty_identifier_parses_as_missing_argument() {
        let route = Route::Club(ClubId::new(""));
        assert_eq!(route.path(), "clubs/");
        assert_eq!(
            Route::parse(&route.path()),
            Err(RouteError::MissingArgument { route: "clubs" })
        );
        let route = Route::ApplicationReview(ApplicationId::new(""));
        assert_eq!(
            Route::parse(&route.path()),
            Err(RouteError::MissingArgument { route: "admin/applications" })
        );
    }

    #[test]
    fn application_route_is_not_mistaken_for_admin() {
        let route = Route::ApplicationReview(ApplicationId::new("app-1"));
        assert_eq!(route.path(), "admin/applications/app-1");
        assert_eq!("admin/applications/app-1".parse::<Route>(), Ok(route));
    }

    #[test]
    fn missing_and_unknown() {
        assert_eq!(
            Route::parse("clubs"),
            Err(RouteError::MissingArgument { route: "clubs" })
        );
        assert_eq!(
            Route::parse("events/"),
            Err(RouteError::MissingArgument { route: "events" })
        );
        assert!(matches!(Route::parse("settings"), Err(RouteError::Unknown { .. })));
        assert!(matches!(Route::parse("clubs/a/b"), Err(RouteError::Unknown { .. })));
        assert!(matches!(Route::parse("clubs/a=b"), Err(RouteError::Encoding { .. })));
    }

    #[test]
    fn start_route_by_session_and_role() {
        assert_eq!(start_for(None, None, None), Route::Login);
        assert_eq!(start_for(Some(&session(false)), None, None), Route::VerifyEmail);

        let mut user = User::student(UserId::new("amy"), "amy@uni.edu", "Amy");
        assert_eq!(start_for(Some(&session(true)), Some(&user), None), Route::Home);

        user.role = Role::ClubLeader;
        let club = ClubId::new("chess");
        assert_eq!(
            start_for(Some(&session(true)), Some(&user), Some(&club)),
            Route::LeaderDashboard(club)
        );
        assert_eq!(start_for(Some(&session(true)), Some(&user), None), Route::Home);

        user.role = Role::Admin;
        assert_eq!(start_for(Some(&session(true)), Some(&user), None), Route::Admin);

        user.active = false;
        assert_eq!(start_for(Some(&session(true)), Some(&user), None), Route::Login);
    }
}
