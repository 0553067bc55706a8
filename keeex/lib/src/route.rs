//! Route construction for the local API.
//!
//! A [`Route`] is the method, route group and trailing path segments of one
//! operation. Each dynamic value (`idx`, e-mail, variable name) is its own
//! segment, so it is percent-encoded when the URL is built and can never
//! inject extra path components. Empty, `.` and `..` values are rejected
//! since they cannot name a single segment.

use strum::{AsRefStr, Display, EnumIter};
use url::Url;

use crate::error::ConfigError;
use crate::method::RestMethod;

/// Top-level route groups under the API root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum RouteGroup {
    /// `/hello` connectivity check.
    Hello,
    /// `/token` token exchange.
    Token,
    /// `/topic` documents, discussions, comments and concepts.
    Topic,
    /// `/user` profiles.
    User,
    /// `/util` search, file generation and settings.
    Util,
    /// `/plugin` (reserved by the service).
    Plugin,
}

/// One remote operation's method and path.
///
/// ## Examples
///
/// ```rust
/// use keeex_lib::route::{Route, RouteGroup};
/// use url::Url;
///
/// let root = Url::parse("http://localhost:8288/kx/api").unwrap();
/// let route = Route::get("author", RouteGroup::Topic)
///     .segment("abc/def")
///     .segment("author");
/// assert_eq!(
///     route.url(&root).unwrap().as_str(),
///     "http://localhost:8288/kx/api/topic/abc%2Fdef/author"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: &'static str,
    method: RestMethod,
    group: RouteGroup,
    segments: Vec<String>,
    authorized: bool,
}

impl Route {
    /// Creates an authorized GET route.
    pub fn get(id: &'static str, group: RouteGroup) -> Self {
        Self::new(id, RestMethod::Get, group)
    }

    /// Creates an authorized POST route.
    pub fn post(id: &'static str, group: RouteGroup) -> Self {
        Self::new(id, RestMethod::Post, group)
    }

    /// Creates an authorized route with an explicit method.
    pub fn new(id: &'static str, method: RestMethod, group: RouteGroup) -> Self {
        Self {
            id,
            method,
            group,
            segments: Vec::new(),
            authorized: true,
        }
    }

    /// Appends a path segment.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Marks the route as not requiring the `Authorization` header.
    pub fn unauthenticated(mut self) -> Self {
        self.authorized = false;
        self
    }

    /// Operation identifier used in logs.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// HTTP method.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Route group.
    pub fn group(&self) -> RouteGroup {
        self.group
    }

    /// Whether the stored token is attached to the request.
    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    /// Builds the full request URL below `api_root`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::CannotBeABase`] if `api_root` cannot carry a
    /// path, or [`ConfigError::InvalidPathSegment`] for an empty, `.` or `..`
    /// segment.
    pub fn url(&self, api_root: &Url) -> Result<Url, ConfigError> {
        if let Some(segment) = self
            .segments
            .iter()
            .find(|s| matches!(s.as_str(), "" | "." | ".."))
        {
            return Err(ConfigError::InvalidPathSegment {
                segment: segment.clone(),
            });
        }

        let mut url = api_root.clone();
        url.path_segments_mut()
            .map_err(|()| ConfigError::CannotBeABase {
                url: api_root.to_string(),
            })?
            .pop_if_empty()
            .push(self.group.as_ref())
            .extend(&self.segments);
        Ok(url)
    }
}
