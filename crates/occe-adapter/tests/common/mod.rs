/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for occe-adapter tests

use occe_adapter::{ClientConfig, Credentials, OcceClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const ACCESS_KEY: &str = "test-access-key";
pub const SECRET_KEY: &str = "test-secret-key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Fixed credential pair used by every test
pub fn test_credentials() -> Credentials {
    Credentials::new(ACCESS_KEY, SECRET_KEY)
}

/// Client pointed at the mock server, with or without credentials
pub fn mock_client(server: &MockServer, credentials: Option<Credentials>) -> OcceClient {
    OcceClient::with_config_and_base_urls(
        ClientConfig::default(),
        &format!("{}/public/", server.uri()),
        &server.uri(),
        credentials,
    )
    .expect("client init")
}

/// Balance response in the shape the exchange documents
#[allow(dead_code)]
pub fn balances_fixture(balance_version: u64) -> Value {
    json!({
        "result": "success",
        "data": {
            "currencies": [
                {
                    "name": "KRB",
                    "depositBlocked": false,
                    "withdrawBlocked": false,
                    "onOrder": 0,
                    "value": 1000
                },
                {
                    "name": "UAH",
                    "depositBlocked": false,
                    "withdrawBlocked": false,
                    "onOrder": 12.5,
                    "value": "250.75"
                }
            ],
            "balanceVersion": balance_version
        }
    })
}
