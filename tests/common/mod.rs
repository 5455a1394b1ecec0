//! Shared test infrastructure.
//!
//! Provides the gate password constants used across auth tests and a
//! helper for building a `VisionClient` pointed at a local mock server.

use httpmock::MockServer;
use vanguard::ocr::VisionClient;

pub const TEST_PASSWORD: &str = "correct horse battery staple";
pub const TEST_API_KEY: &str = "test-key";

/// A Vision client whose endpoint is a local mock server.
pub fn mock_vision(server: &MockServer, api_key: Option<&str>) -> VisionClient {
    VisionClient::with_endpoint(
        reqwest::Client::new(),
        api_key.map(String::from),
        server.base_url(),
    )
}
