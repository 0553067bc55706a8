//! Shared helpers for the integration tests.

#![allow(dead_code)]

use keeex_lib::KeeexClient;
use url::Url;
use wiremock::MockServer;

/// Token used by tests that need an authorized client.
pub const TOKEN: &str = "test-token";

/// Builds a client whose API root points at the mock server.
pub fn client_for(server: &MockServer) -> KeeexClient {
    let base_url = Url::parse(&format!("{}/kx/api", server.uri())).unwrap();
    KeeexClient::builder().base_url(base_url).build().unwrap()
}

/// Builds a client that already holds [`TOKEN`].
pub fn authorized_client_for(server: &MockServer) -> KeeexClient {
    let client = client_for(server);
    client.set_token(TOKEN);
    client
}

/// Returns a localhost port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// Converts string literals into owned idx lists.
pub fn idxs(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
