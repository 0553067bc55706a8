//! HTTP methods used by the KeeeX API.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods exposed by the local API.
///
/// The service only uses GET and POST; GET requests may still carry a JSON
/// body (`/token`, `/topic`, `/topic/locations`, `/user`).
///
/// ## Examples
///
/// ```rust
/// use keeex_lib::RestMethod;
///
/// let parsed: RestMethod = "POST".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Post);
/// assert_eq!(RestMethod::Get.to_string(), "GET");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Read a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
}

impl RestMethod {
    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
