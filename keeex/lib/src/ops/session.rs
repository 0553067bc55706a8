//! Connectivity check and token exchange.

use serde::Serialize;
use tracing::info;

use crate::client::{KeeexClient, NO_BODY};
use crate::error::Result;
use crate::response::decode_text;
use crate::route::{Route, RouteGroup};
use crate::types::TokenResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    app_name: &'a str,
}

impl KeeexClient {
    /// Checks that the API is reachable. The service answers with a fixed
    /// greeting.
    pub async fn hello(&self) -> Result<String> {
        let route = Route::get("hello", RouteGroup::Hello).unauthenticated();
        let body = self.send(&route, NO_BODY).await?;
        Ok(decode_text(&body))
    }

    /// Asks the user, through the application, to grant `app_name` access.
    ///
    /// On success the issued token is stored on this client and used by
    /// every following authorized request; there is no need to call
    /// [`set_token`](Self::set_token) afterwards.
    pub async fn request_token(&self, app_name: &str) -> Result<TokenResponse> {
        let route = Route::get("request_token", RouteGroup::Token).unauthenticated();
        let response: TokenResponse = self
            .execute(&route, Some(&TokenRequest { app_name }))
            .await?;

        if let Some(token) = response.token.as_deref().filter(|t| !t.is_empty()) {
            self.set_token(token);
            info!(app_name, "stored API token");
        }
        Ok(response)
    }
}
