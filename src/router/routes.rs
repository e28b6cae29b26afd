//! Static route table and path resolution.
//!
//! DESIGN
//! ======
//! The table is the single source of truth for path patterns and the public
//! flag. `app` registers one Leptos `<Route>` per entry; the guard only ever
//! sees `ResolvedRoute` values produced by [`resolve`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped in a path segment: everything but RFC 3986 unreserved.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Named routes of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    Dashboard,
    MyTasks,
    Favorites,
    Board,
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern; `:id` marks the board id segment.
    pub path: &'static str,
    pub name: RouteName,
    /// Reachable without a session.
    pub public: bool,
}

/// The route table, in match order.
pub static ROUTES: [RouteDescriptor; 5] = [
    RouteDescriptor { path: "/login", name: RouteName::Login, public: true },
    RouteDescriptor { path: "/", name: RouteName::Dashboard, public: false },
    RouteDescriptor { path: "/my-tasks", name: RouteName::MyTasks, public: false },
    RouteDescriptor { path: "/favorites", name: RouteName::Favorites, public: false },
    RouteDescriptor { path: "/board/:id", name: RouteName::Board, public: false },
];

impl RouteName {
    pub fn descriptor(self) -> &'static RouteDescriptor {
        let index = match self {
            Self::Login => 0,
            Self::Dashboard => 1,
            Self::MyTasks => 2,
            Self::Favorites => 3,
            Self::Board => 4,
        };
        &ROUTES[index]
    }

    pub fn is_public(self) -> bool {
        self.descriptor().public
    }

    /// Path pattern for this route.
    pub fn path(self) -> &'static str {
        self.descriptor().path
    }
}

/// Parameters captured from the path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub id: Option<String>,
}

/// A navigation target: a named route plus its captured parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: RouteName,
    pub params: RouteParams,
}

impl ResolvedRoute {
    /// A parameterless route.
    pub fn new(name: RouteName) -> Self {
        Self { name, params: RouteParams::default() }
    }

    /// The board route for `id`.
    pub fn board(id: impl Into<String>) -> Self {
        Self {
            name: RouteName::Board,
            params: RouteParams { id: Some(id.into()) },
        }
    }

    pub fn is_public(&self) -> bool {
        self.name.is_public()
    }

    /// Concrete path for this target, with parameters percent-encoded and
    /// substituted.
    pub fn href(&self) -> String {
        let id = self.params.id.as_deref().unwrap_or_default();
        self.name
            .path()
            .replace(":id", &utf8_percent_encode(id, SEGMENT).to_string())
    }
}

impl fmt::Display for ResolvedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.name, self.href())
    }
}

/// Match a browser pathname against [`ROUTES`].
///
/// `pathname` is percent-encoded as the browser reports it; captured
/// parameters come back decoded. A trailing slash is ignored. Returns `None`
/// for paths outside the table,
/// which the router renders as "not found" without running the guard.
pub fn resolve(pathname: &str) -> Option<ResolvedRoute> {
    let path = normalize(pathname);
    ROUTES.iter().find_map(|route| {
        match_pattern(route.path, path).map(|params| ResolvedRoute { name: route.name, params })
    })
}

fn normalize(pathname: &str) -> &str {
    let trimmed = pathname.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn match_pattern(pattern: &str, path: &str) -> Option<RouteParams> {
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    let mut params = RouteParams::default();
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    if name == "id" {
                        let decoded = percent_decode_str(actual).decode_utf8_lossy();
                        params.id = Some(decoded.into_owned());
                    }
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}
