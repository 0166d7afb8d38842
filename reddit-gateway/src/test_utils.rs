use crate::config::GatewayConfig;
use crate::create_app;
use crate::state::AppState;
use axum::body::Body;
use axum::Router;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use log::LevelFilter;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

/// Path of the token endpoint on the Reddit mock server
pub const TOKEN_PATH: &str = "/api/v1/access_token";

/// Test fixture for setting up a complete test environment with a mocked Reddit API.
///
/// The fixture starts a mock server standing in for both the token endpoint and the listing
/// API, configures the application to use it, and provides helpers for making requests.
///
/// # Examples
///
/// ```rust
/// #[tokio::test]
/// async fn test_endpoint() {
///     let fixture = TestFixture::new().await;
///     fixture.mount_token(1).await;
///     fixture
///         .add_listing_mock("/r/rust/hot", listing(vec![json!({"id": "a"})]), StatusCode::OK, 1)
///         .await;
///
///     let response = fixture.get("/subreddit/article/rust").await;
///
///     response.assert_ok();
///     let result = response.json_as::<SubmissionList>();
///     assert_eq!(result.count, 1);
/// }
/// ```
pub struct TestFixture {
    /// The application router
    pub app: Router,
    /// Configuration settings
    pub config: GatewayConfig,
    /// Mock server for the Reddit token endpoint and API
    pub reddit_mock: MockServer,
}

impl TestFixture {
    /// Creates a new test fixture with a Reddit mock server.
    ///
    /// The application gets a fresh client, so the first listing request of every test
    /// requests an access token.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Creates a test fixture whose configuration is adjusted before the app is built.
    ///
    /// The configuration passed to `adjust` already points at the Reddit mock server.
    pub async fn with_config(adjust: impl FnOnce(&mut GatewayConfig)) -> Self {
        // Initialize test logger
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();

        let reddit_mock = MockServer::start().await;
        let mut config = GatewayConfig::for_test_with_mocks(&reddit_mock);
        adjust(&mut config);

        let state = AppState::new(&config).expect("Failed to create app state");
        let app = create_app(state).await;

        Self {
            app,
            config,
            reddit_mock,
        }
    }

    /// Sends a GET request to the specified URI.
    pub async fn get(&self, uri: impl AsRef<str>) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri.as_ref())
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Sends a request and returns a TestResponse.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        // Try to parse as JSON, defaulting to empty object if parsing fails or empty body
        let json = if !body.is_empty() {
            serde_json::from_slice(&body).unwrap_or_else(|_| json!({}))
        } else {
            json!({})
        };

        TestResponse { status, json }
    }

    /// Answers token requests with a valid access token.
    ///
    /// # Parameters
    ///
    /// - `expected_calls`: Number of token requests the test expects
    pub async fn mount_token(&self, expected_calls: u64) {
        Mock::given(matchers::method("POST"))
            .and(matchers::path(TOKEN_PATH))
            .and(matchers::basic_auth(
                &self.config.reddit.client_id,
                &self.config.reddit.client_secret,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "test-access-token",
                "token_type": "bearer",
                "expires_in": 86400,
                "scope": "*"
            })))
            .expect(expected_calls)
            .mount(&self.reddit_mock)
            .await;
    }

    /// Adds a mock listing route with the given path and response.
    ///
    /// # Parameters
    ///
    /// - `path`: The upstream API path to mock (e.g., "/r/rust/hot")
    /// - `response_body`: The JSON response body to return
    /// - `status_code`: HTTP status code for the response
    /// - `expected_calls`: Number of expected calls to this mock
    pub async fn add_listing_mock(
        &self,
        path: impl Into<String>,
        response_body: impl Serialize,
        status_code: StatusCode,
        expected_calls: u64,
    ) {
        Mock::given(matchers::method("GET"))
            .and(matchers::path(path.into()))
            .and(matchers::bearer_token("test-access-token"))
            .respond_with(ResponseTemplate::new(status_code.as_u16()).set_body_json(response_body))
            .expect(expected_calls)
            .mount(&self.reddit_mock)
            .await;
    }

    /// Query string of the only listing request the mock server received
    pub async fn listing_query(&self) -> Vec<(String, String)> {
        let requests = self
            .reddit_mock
            .received_requests()
            .await
            .expect("Request recording is enabled");
        let listing_requests: Vec<_> = requests
            .iter()
            .filter(|request| request.method.as_str() == "GET")
            .collect();
        assert_eq!(listing_requests.len(), 1, "Expected one listing request");

        listing_requests[0]
            .url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }
}

/// Wraps submissions into the upstream listing envelope
pub fn listing(submissions: Vec<Value>) -> Value {
    let children: Vec<Value> = submissions
        .into_iter()
        .map(|data| json!({"kind": "t3", "data": data}))
        .collect();
    json!({
        "kind": "Listing",
        "data": {"after": null, "dist": children.len(), "children": children}
    })
}

/// Response from a test request that provides convenient access to status and JSON body.
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as JSON (if present and valid JSON)
    pub json: Value,
}

impl TestResponse {
    /// Asserts that the response has the expected status code.
    ///
    /// # Panics
    ///
    /// Panics if the status code doesn't match the expected value.
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {} but got {} with body: {}",
            expected,
            self.status,
            serde_json::to_string_pretty(&self.json).unwrap_or_default()
        );
        self
    }

    /// Asserts that the response status is OK (200).
    pub fn assert_ok(&self) -> &Self {
        self.assert_status(StatusCode::OK)
    }

    /// Converts the response body to the specified type.
    ///
    /// # Panics
    ///
    /// Panics if deserialization fails.
    pub fn json_as<T: DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.json.clone()).expect("Failed to deserialize response JSON")
    }
}
