//! Method, route and body of every operation against a mock service.

mod common;

use common::{authorized_client_for, idxs, TOKEN};
use keeex_lib::{
    EnvVar, KeeexOptions, RefKind, SearchOptions, ShareOptions, VerifiedStatus, VerifyOptions,
    WritableEnvVar,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn topic_json(idx: &str, name: &str) -> Value {
    json!({
        "idx": idx,
        "name": name,
        "description": "",
        "creationDate": 1_450_000_000_000_i64,
        "lastModify": 1_450_000_000_000_i64,
        "references": []
    })
}

fn user_json(profile_idx: &str, name: &str) -> Value {
    json!({
        "profileIdx": profile_idx,
        "name": name,
        "avatar": "/avatars/a.png",
        "email": format!("{name}@example.com")
    })
}

#[tokio::test]
async fn test_keeex_posts_file_and_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kx/api/topic/keeex"))
        .and(header("authorization", TOKEN))
        .and(body_json(json!({
            "path": "/docs/report.pdf",
            "refs": ["xref"],
            "prevs": [],
            "name": "Report",
            "description": "Quarterly report",
            "option": {"name": "Report", "targetFolder": "/out", "timestamp": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "path": "/out/report-xnew.pdf",
            "topic": topic_json("xnew", "Report")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let options = KeeexOptions {
        name: Some("Report".to_string()),
        target_folder: Some("/out".to_string()),
        timestamp: Some(true),
        ..Default::default()
    };
    let result = client
        .keeex(
            "/docs/report.pdf",
            &idxs(&["xref"]),
            &[],
            "Quarterly report",
            &options,
        )
        .await
        .unwrap();

    assert_eq!(result.path, "/out/report-xnew.pdf");
    assert_eq!(result.topic.idx, "xnew");
}

#[tokio::test]
async fn test_keeex_without_name_omits_it() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kx/api/topic/keeex"))
        .and(body_json(json!({
            "path": "/a.txt",
            "refs": [],
            "prevs": ["xold"],
            "description": "",
            "option": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "path": "/a-xnew.txt",
            "topic": topic_json("xnew", "a.txt")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    client
        .keeex("/a.txt", &[], &idxs(&["xold"]), "", &KeeexOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_verify_reports_each_status() {
    for (code, expected) in [
        (100, VerifiedStatus::Keeexed),
        (101, VerifiedStatus::NotKeeexed),
        (102, VerifiedStatus::Modified),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/kx/api/topic/verify"))
            .and(body_json(json!({"path": "/docs/a.pdf", "option": {"import": true}})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"verifiedStatus": code, "idx": "xa"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = authorized_client_for(&server);
        let result = client
            .verify("/docs/a.pdf", VerifyOptions { import: true })
            .await
            .unwrap();
        assert_eq!(result.verified_status, expected);
        assert_eq!(result.idx.as_deref(), Some("xa"));
    }
}

#[tokio::test]
async fn test_topics_sends_idxs_in_get_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kx/api/topic"))
        .and(body_json(json!({"idxs": ["x1", "x2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            topic_json("x1", "one"),
            topic_json("x2", "two")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let topics = client.topics(&idxs(&["x1", "x2"])).await.unwrap();
    let names: Vec<&str> = topics.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["one", "two"]);
}

#[tokio::test]
async fn test_topics_with_null_fields_succeed() {
    let server = MockServer::start().await;
    let raw = json!([
        {"idx": "x1", "name": "n", "description": null, "creationDate": null, "references": []}
    ]);
    Mock::given(method("GET"))
        .and(path("/kx/api/topic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(raw.clone()))
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let topics = client.topics(&idxs(&["x1"])).await.unwrap();
    assert_eq!(topics[0].description(), "");
    assert_eq!(topics[0].creation_date(), None);
    assert_eq!(serde_json::to_value(&topics).unwrap(), raw);
}

#[tokio::test]
async fn test_locations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kx/api/topic/locations"))
        .and(body_json(json!({"idxs": ["x1"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"idx": "x1", "location": ["/a/x1.pdf", "/b/x1.pdf"]}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let locations = client.locations(&idxs(&["x1"])).await.unwrap();
    assert_eq!(locations[0].location, ["/a/x1.pdf", "/b/x1.pdf"]);
}

#[tokio::test]
async fn test_author() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kx/api/topic/x1/author"))
        .and(header("authorization", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("xalice", "alice")))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let author = client.author("x1").await.unwrap();
    assert_eq!(author.name(), "alice");
}

#[tokio::test]
async fn test_comments_and_comment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kx/api/topic/x1/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            topic_json("xc1", "first!")
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/kx/api/topic/x1/comment"))
        .and(body_json(json!({"message": "looks good"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            topic_json("xc1", "first!"),
            topic_json("xc2", "looks good")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    assert_eq!(client.comments("x1").await.unwrap().len(), 1);
    let after = client.comment("x1", "looks good").await.unwrap();
    assert_eq!(after[1].name(), "looks good");
}

#[tokio::test]
async fn test_version_and_reference_graph() {
    let server = MockServer::start().await;
    for (leaf, idx) in [("prevs", "xprev"), ("nexts", "xnext"), ("refs", "xref")] {
        Mock::given(method("GET"))
            .and(path(format!("/kx/api/topic/x1/{leaf}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([topic_json(idx, leaf)])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = authorized_client_for(&server);
    assert_eq!(client.prevs("x1").await.unwrap()[0].idx, "xprev");
    assert_eq!(client.nexts("x1").await.unwrap()[0].idx, "xnext");
    assert_eq!(client.refs("x1").await.unwrap()[0].idx, "xref");
}

#[tokio::test]
async fn test_shared_and_agreements() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kx/api/topic/x1/shared"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"received": ["xbob"], "shared": ["xbob", "xcarol"]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/kx/api/topic/x1/agreements"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json("xbob", "bob")])))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let shared = client.shared("x1").await.unwrap();
    assert_eq!(shared.received, ["xbob"]);
    assert_eq!(shared.shared, ["xbob", "xcarol"]);
    assert_eq!(client.agreements("x1").await.unwrap()[0].profile_idx, "xbob");
}

#[tokio::test]
async fn test_share() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kx/api/topic/x1/share"))
        .and(body_json(json!({
            "path": "/docs/a.pdf",
            "recipients": ["xbob"],
            "option": {"email": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "idx": "x1",
            "shared": {"shared": ["xbob"], "received": []},
            "link": "https://share.example.com/x1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let result = client
        .share("x1", "/docs/a.pdf", &idxs(&["xbob"]), ShareOptions { email: true })
        .await
        .unwrap();
    assert_eq!(result.idx, "x1");
    assert_eq!(result.shared.shared, ["xbob"]);
}

#[tokio::test]
async fn test_make_ref_version() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kx/api/topic/makeRef"))
        .and(body_json(json!({"type": "version", "from": "ideaA", "to": "ideaB"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let body = client
        .make_ref(RefKind::Version, Some("ideaA"), "ideaB")
        .await
        .unwrap();
    assert_eq!(body, json!({"ok": 1}));
}

#[tokio::test]
async fn test_make_ref_agreement_sends_null_from() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kx/api/topic/makeRef"))
        .and(body_json(json!({"type": "agreement", "from": null, "to": "x1"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let body = client.make_ref(RefKind::Agreement, None, "x1").await.unwrap();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_remove() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kx/api/topic/x1/remove"))
        .and(header("authorization", TOKEN))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    assert_eq!(client.remove("x1").await.unwrap(), Value::Null);
}

#[tokio::test]
async fn test_users_and_lookup_by_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kx/api/user"))
        .and(body_json(json!({"idxs": ["xalice", "xbob"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            user_json("xalice", "alice"),
            user_json("xbob", "bob")
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/kx/api/user/email/bob@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("xbob", "bob")))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    assert_eq!(client.users(&idxs(&["xalice", "xbob"])).await.unwrap().len(), 2);
    assert_eq!(
        client.user_by_email("bob@example.com").await.unwrap().profile_idx,
        "xbob"
    );
}

#[tokio::test]
async fn test_path_parameters_are_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kx/api/user/email/a%2Fb%3Fc@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("xab", "ab")))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let user = client.user_by_email("a/b?c@example.com").await.unwrap();
    assert_eq!(user.profile_idx, "xab");
}

#[tokio::test]
async fn test_generate_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kx/api/util/generateFile"))
        .and(body_json(json!({"name": "notes", "description": "d", "target": "/tmp"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"file": "/tmp/notes.txt"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let generated = client.generate_file("notes", "d", "/tmp").await.unwrap();
    assert_eq!(generated.file, "/tmp/notes.txt");
}

#[tokio::test]
async fn test_search_body_and_passthrough() {
    let server = MockServer::start().await;
    let found = json!([
        {
            "idx": "x1",
            "name": "foo.pdf",
            "description": "",
            "creationDate": 1,
            "lastModify": 2,
            "references": ["x0"],
            "score": 0.75
        }
    ]);
    Mock::given(method("POST"))
        .and(path("/kx/api/util/search"))
        .and(body_json(json!({
            "filter": "foo",
            "topics": [],
            "negTopics": [],
            "skip": 0,
            "limit": 10,
            "option": {"document": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(found.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let topics = client
        .search("foo", &[], &[], 0, 10, SearchOptions::documents())
        .await
        .unwrap();
    assert_eq!(serde_json::to_value(&topics).unwrap(), found);
}

#[tokio::test]
async fn test_env_get_and_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kx/api/util/env/DATA_PATH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": "/home/u/.keeex"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/kx/api/util/env/FILENAME_FORMAT"))
        .and(body_json(json!({"value": "%name%-%idx%"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let value = client.env(EnvVar::DataPath).await.unwrap();
    assert_eq!(value.value.as_deref(), Some("/home/u/.keeex"));
    let ack = client
        .set_env(WritableEnvVar::FilenameFormat, "%name%-%idx%")
        .await
        .unwrap();
    assert_eq!(ack, Value::Null);
}
