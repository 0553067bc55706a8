//! Operations under `/user`.

use super::IdxsRequest;
use crate::client::{KeeexClient, NO_BODY};
use crate::error::Result;
use crate::route::{Route, RouteGroup};
use crate::types::User;

impl KeeexClient {
    /// Fetches the profile of the current user.
    pub async fn me(&self) -> Result<User> {
        let route = Route::get("me", RouteGroup::User).segment("me");
        self.execute(&route, NO_BODY).await
    }

    /// Fetches the profiles identified by `idxs`.
    pub async fn users(&self, idxs: &[String]) -> Result<Vec<User>> {
        let route = Route::get("users", RouteGroup::User);
        self.execute(&route, Some(&IdxsRequest { idxs })).await
    }

    /// Looks a user up by e-mail address.
    pub async fn user_by_email(&self, email: &str) -> Result<User> {
        let route = Route::get("user_by_email", RouteGroup::User)
            .segment("email")
            .segment(email);
        self.execute(&route, NO_BODY).await
    }
}
