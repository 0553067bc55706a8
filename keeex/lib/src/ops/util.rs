//! Operations under `/util`.

use serde::Serialize;
use serde_json::Value;

use crate::client::{KeeexClient, NO_BODY};
use crate::error::Result;
use crate::method::RestMethod;
use crate::route::{Route, RouteGroup};
use crate::types::{
    CurrentView, EnvValue, EnvVar, GeneratedFile, SearchOptions, Topic, WritableEnvVar,
};

#[derive(Debug, Serialize)]
struct GenerateFileRequest<'a> {
    name: &'a str,
    description: &'a str,
    target: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    filter: &'a str,
    topics: &'a [String],
    neg_topics: &'a [String],
    skip: u64,
    limit: u64,
    option: SearchOptions,
}

#[derive(Debug, Serialize)]
struct SetEnvRequest<'a> {
    value: &'a str,
}

/// `/util/env/{name}`
fn env_route(id: &'static str, method: RestMethod, name: EnvVar) -> Route {
    Route::new(id, method, RouteGroup::Util)
        .segment("env")
        .segment(name.as_ref())
}

impl KeeexClient {
    /// Creates an empty document `name` in the `target` folder.
    pub async fn generate_file(
        &self,
        name: &str,
        description: &str,
        target: &str,
    ) -> Result<GeneratedFile> {
        let route = Route::post("generate_file", RouteGroup::Util).segment("generateFile");
        let body = GenerateFileRequest {
            name,
            description,
            target,
        };
        self.execute(&route, Some(&body)).await
    }

    /// Full-text search.
    ///
    /// Results must reference every idx in `topics` and none in
    /// `neg_topics`; `skip` and `limit` page through them.
    pub async fn search(
        &self,
        filter: &str,
        topics: &[String],
        neg_topics: &[String],
        skip: u64,
        limit: u64,
        options: SearchOptions,
    ) -> Result<Vec<Topic>> {
        let route = Route::post("search", RouteGroup::Util).segment("search");
        let body = SearchRequest {
            filter,
            topics,
            neg_topics,
            skip,
            limit,
            option: options,
        };
        self.execute(&route, Some(&body)).await
    }

    /// Returns the topic currently displayed in the application.
    pub async fn current_view(&self) -> Result<CurrentView> {
        let route = Route::get("current_view", RouteGroup::Util).segment("currentView");
        self.execute(&route, NO_BODY).await
    }

    /// Reads an application variable.
    pub async fn env(&self, name: EnvVar) -> Result<EnvValue> {
        self.execute(&env_route("env", RestMethod::Get, name), NO_BODY)
            .await
    }

    /// Writes an application variable.
    pub async fn set_env(&self, name: WritableEnvVar, value: &str) -> Result<Value> {
        let route = env_route("set_env", RestMethod::Post, name.into());
        self.execute(&route, Some(&SetEnvRequest { value })).await
    }
}
