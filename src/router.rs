//! Static route table for the dashboard's two screens.
//!
//! A path resolves to a route through a fixed pattern list with
//! single-segment capture; there are no nested routes, guards, or
//! redirects.

use std::fmt;

use crate::error::{QuotedeskError, Result};

/// A resolved dashboard location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// The ticket list with status filtering.
    #[default]
    Dashboard,
    /// One ticket's extracted fields and email thread.
    TicketDetail { id: i64 },
}

impl Route {
    /// Canonical path for this route, the inverse of [`resolve`].
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::TicketDetail { id } => format!("/tickets/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Pattern table in match order. `{id}` captures exactly one segment; the
/// builder turns the captured text into a route or rejects it.
const ROUTES: &[(&str, fn(&str) -> Option<Route>)] = &[
    ("/", |_| Some(Route::Dashboard)),
    ("/tickets/{id}", |id| {
        id.parse().ok().map(|id| Route::TicketDetail { id })
    }),
];

/// Resolve a path against the route table.
pub fn resolve(path: &str) -> Result<Route> {
    if !path.starts_with('/') {
        return Err(QuotedeskError::InvalidPath(path.to_string()));
    }
    for (pattern, build) in ROUTES {
        if let Some(capture) = match_pattern(pattern, path)
            && let Some(route) = build(&capture)
        {
            return Ok(route);
        }
    }
    Err(QuotedeskError::InvalidPath(path.to_string()))
}

/// Match a path against a pattern, returning the captured segment (empty
/// when the pattern has no capture). Trailing slashes are tolerated.
fn match_pattern(pattern: &str, path: &str) -> Option<String> {
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut capture = String::new();
    for (expected, actual) in pattern_segments.iter().zip(&path_segments) {
        if expected.starts_with('{') && expected.ends_with('}') {
            if actual.is_empty() {
                return None;
            }
            capture = (*actual).to_string();
        } else if expected != actual {
            return None;
        }
    }
    Some(capture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root() {
        assert_eq!(resolve("/").unwrap(), Route::Dashboard);
    }

    #[test]
    fn test_resolve_ticket_detail() {
        assert_eq!(
            resolve("/tickets/42").unwrap(),
            Route::TicketDetail { id: 42 }
        );
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        assert_eq!(
            resolve("/tickets/42/").unwrap(),
            Route::TicketDetail { id: 42 }
        );
    }

    #[test]
    fn test_non_numeric_id_rejected() {
        assert!(matches!(
            resolve("/tickets/abc"),
            Err(QuotedeskError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_unknown_paths_rejected() {
        assert!(resolve("/nope").is_err());
        assert!(resolve("/tickets").is_err());
        assert!(resolve("/tickets/1/emails").is_err());
        assert!(resolve("").is_err());
    }

    #[test]
    fn test_route_path_roundtrip() {
        for route in [Route::Dashboard, Route::TicketDetail { id: 7 }] {
            assert_eq!(resolve(&route.path()).unwrap(), route);
        }
    }
}
