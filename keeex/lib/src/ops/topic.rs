//! Operations under `/topic`.

use serde::Serialize;
use serde_json::Value;

use super::IdxsRequest;
use crate::client::{KeeexClient, NO_BODY};
use crate::error::Result;
use crate::route::{Route, RouteGroup};
use crate::types::{
    Comment, KeeexOptions, KeeexResult, RefKind, ShareOptions, ShareResult, SharedLists, Topic,
    TopicLocation, User, VerifyOptions, VerifyResult,
};

#[derive(Debug, Serialize)]
struct KeeexRequest<'a> {
    path: &'a str,
    refs: &'a [String],
    prevs: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    description: &'a str,
    option: &'a KeeexOptions,
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    path: &'a str,
    option: VerifyOptions,
}

#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct ShareRequest<'a> {
    path: &'a str,
    recipients: &'a [String],
    option: ShareOptions,
}

#[derive(Debug, Serialize)]
struct MakeRefRequest<'a> {
    #[serde(rename = "type")]
    kind: RefKind,
    from: Option<&'a str>,
    to: &'a str,
}

/// `/topic/{idx}/{leaf}`
fn topic_route(id: &'static str, idx: &str, leaf: &str) -> Route {
    Route::get(id, RouteGroup::Topic).segment(idx).segment(leaf)
}

impl KeeexClient {
    /// Fingerprints the file at `path`, linking it to `refs` and to the
    /// previous versions in `prevs`.
    pub async fn keeex(
        &self,
        path: &str,
        refs: &[String],
        prevs: &[String],
        description: &str,
        options: &KeeexOptions,
    ) -> Result<KeeexResult> {
        let route = Route::post("keeex", RouteGroup::Topic).segment("keeex");
        let body = KeeexRequest {
            path,
            refs,
            prevs,
            name: options.name.as_deref(),
            description,
            option: options,
        };
        self.execute(&route, Some(&body)).await
    }

    /// Verifies the file at `path` against the registered fingerprints.
    pub async fn verify(&self, path: &str, options: VerifyOptions) -> Result<VerifyResult> {
        let route = Route::post("verify", RouteGroup::Topic).segment("verify");
        self.execute(&route, Some(&VerifyRequest { path, option: options }))
            .await
    }

    /// Fetches the topics identified by `idxs`.
    pub async fn topics(&self, idxs: &[String]) -> Result<Vec<Topic>> {
        let route = Route::get("topics", RouteGroup::Topic);
        self.execute(&route, Some(&IdxsRequest { idxs })).await
    }

    /// Fetches the known file locations of the topics identified by `idxs`.
    pub async fn locations(&self, idxs: &[String]) -> Result<Vec<TopicLocation>> {
        let route = Route::get("locations", RouteGroup::Topic).segment("locations");
        self.execute(&route, Some(&IdxsRequest { idxs })).await
    }

    /// Fetches the author of a topic.
    pub async fn author(&self, idx: &str) -> Result<User> {
        self.execute(&topic_route("author", idx, "author"), NO_BODY)
            .await
    }

    /// Fetches the comments of a topic.
    pub async fn comments(&self, idx: &str) -> Result<Vec<Comment>> {
        self.execute(&topic_route("comments", idx, "comments"), NO_BODY)
            .await
    }

    /// Posts a comment on a topic and returns the updated comment list.
    pub async fn comment(&self, idx: &str, message: &str) -> Result<Vec<Comment>> {
        let route = Route::post("comment", RouteGroup::Topic)
            .segment(idx)
            .segment("comment");
        self.execute(&route, Some(&CommentRequest { message })).await
    }

    /// Fetches the previous versions of a topic.
    pub async fn prevs(&self, idx: &str) -> Result<Vec<Topic>> {
        self.execute(&topic_route("prevs", idx, "prevs"), NO_BODY)
            .await
    }

    /// Fetches the next versions of a topic.
    pub async fn nexts(&self, idx: &str) -> Result<Vec<Topic>> {
        self.execute(&topic_route("nexts", idx, "nexts"), NO_BODY)
            .await
    }

    /// Fetches the topics referenced by a topic.
    pub async fn refs(&self, idx: &str) -> Result<Vec<Topic>> {
        self.execute(&topic_route("refs", idx, "refs"), NO_BODY).await
    }

    /// Fetches who a topic was shared with and who received it.
    pub async fn shared(&self, idx: &str) -> Result<SharedLists> {
        self.execute(&topic_route("shared", idx, "shared"), NO_BODY)
            .await
    }

    /// Fetches the users who agreed with a topic.
    pub async fn agreements(&self, idx: &str) -> Result<Vec<User>> {
        self.execute(&topic_route("agreements", idx, "agreements"), NO_BODY)
            .await
    }

    /// Shares the file of a topic with `recipients` (profile idxs).
    pub async fn share(
        &self,
        idx: &str,
        path: &str,
        recipients: &[String],
        options: ShareOptions,
    ) -> Result<ShareResult> {
        let route = Route::post("share", RouteGroup::Topic)
            .segment(idx)
            .segment("share");
        let body = ShareRequest {
            path,
            recipients,
            option: options,
        };
        self.execute(&route, Some(&body)).await
    }

    /// Links two topics. `from` is `None` for agreements.
    ///
    /// The service declares no payload; whatever body it returns is passed
    /// through (`Value::Null` when empty).
    pub async fn make_ref(&self, kind: RefKind, from: Option<&str>, to: &str) -> Result<Value> {
        let route = Route::post("make_ref", RouteGroup::Topic).segment("makeRef");
        self.execute(&route, Some(&MakeRefRequest { kind, from, to }))
            .await
    }

    /// Removes a topic.
    pub async fn remove(&self, idx: &str) -> Result<Value> {
        let route = Route::post("remove", RouteGroup::Topic)
            .segment(idx)
            .segment("remove");
        self.execute(&route, NO_BODY).await
    }
}
