//! Common test utilities and helpers

use std::path::Path;

use canvaskit::{AuthorizationClient, Client, OAuthClient};
use wiremock::MockServer;

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Create a test access token
#[allow(dead_code)]
pub fn test_access_token() -> String {
    "test-access-token-0123456789abcdef".to_string()
}

/// Test client credentials (`id`, `secret`)
#[allow(dead_code)]
pub fn test_client_credentials() -> (&'static str, &'static str) {
    ("test-client-id", "test-client-secret")
}

/// `Client-Authorization` value for [`test_client_credentials`]
#[allow(dead_code)]
pub fn test_client_authorization() -> &'static str {
    // base64("test-client-id:test-client-secret")
    "Basic dGVzdC1jbGllbnQtaWQ6dGVzdC1jbGllbnQtc2VjcmV0"
}

/// Route SDK logs to the test harness output
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("canvaskit=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Main API client pointed at the mock server
#[allow(dead_code)]
pub fn client(server: &MockServer) -> Client {
    Client::builder()
        .access_token(test_access_token())
        .base_url(format!("{}/v1/", server.uri()))
        .build()
        .expect("Failed to build client")
}

/// Authorization client pointed at the mock server
#[allow(dead_code)]
pub fn authorization_client(server: &MockServer) -> AuthorizationClient {
    let (id, secret) = test_client_credentials();
    Client::builder()
        .client_credentials(id, secret)
        .base_url(format!("{}/v1/", server.uri()))
        .build_authorization_client()
        .expect("Failed to build authorization client")
}

/// OAuth client pointed at the mock server
#[allow(dead_code)]
pub fn oauth_client(server: &MockServer) -> OAuthClient {
    let (id, secret) = test_client_credentials();
    Client::builder()
        .client_credentials(id, secret)
        .base_url(format!("{}/v1/", server.uri()))
        .build_oauth_client()
        .expect("Failed to build OAuth client")
}
