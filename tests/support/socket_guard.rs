//! Socket availability guard for wiremock-backed integration tests.
//!
//! Sandboxed environments sometimes forbid binding local TCP sockets; tests
//! that need a mock HTTP server skip themselves instead of failing.

use wiremock::MockServer;

/// Starts a wiremock server, or returns `None` when the environment does
/// not allow binding a local TCP socket (the caller should skip the test).
pub async fn start_mock_server_or_skip() -> Option<MockServer> {
    if std::net::TcpListener::bind("127.0.0.1:0").is_err() {
        eprintln!("skipping test: cannot bind local sockets in this environment");
        return None;
    }
    Some(MockServer::start().await)
}
