//! Shared test infrastructure for crelate integration tests.
//!
//! Provides a recording FakeTransport and a TestEnv wrapping a client.

#![allow(dead_code)]

use crelate::error::Result;
use crelate::{Client, Connection, HttpRequest, HttpResponse, Method, Transport};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::VecDeque;

/// API root used by every test client.
pub const BASE_URL: &str = "https://crelate.test/api3";

/// Transport that records requests and replays queued responses.
#[derive(Default)]
pub struct FakeTransport {
    pub requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<HttpResponse>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response to return.
    pub fn push(&self, response: Result<HttpResponse>) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Queue a response with the given status and JSON body.
    pub fn push_json(&self, status: u16, body: Value) {
        self.push(Ok(HttpResponse::new(status, body.to_string())));
    }

    /// Number of requests sent so far.
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Get a recorded request by index.
    pub fn request(&self, index: usize) -> HttpRequest {
        self.requests.borrow()[index].clone()
    }

    /// Methods of all recorded requests, in order.
    pub fn methods(&self) -> Vec<Method> {
        self.requests.borrow().iter().map(|r| r.method).collect()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .expect("FakeTransport received a request with no queued response")
    }
}

/// Test environment holding a client over a fake transport.
pub struct TestEnv {
    pub client: Client<FakeTransport>,
}

impl TestEnv {
    /// Create a client with a valid API key.
    pub fn new() -> Self {
        Self::with_key("test-key")
    }

    /// Create a client with the given API key.
    pub fn with_key(api_key: &str) -> Self {
        let client = Client::with_transport(Connection::new(api_key), FakeTransport::new()).with_base_url(BASE_URL);
        Self { client }
    }

    pub fn transport(&self) -> &FakeTransport {
        self.client.transport()
    }

    /// Queue a `{"Data": ...}` success response.
    pub fn respond_data(&self, data: Value) {
        self.transport().push_json(200, json!({ "Data": data }));
    }

    /// Queue a contact whose `Tags` field is `tags`.
    pub fn respond_contact_with_tags(&self, id: &str, tags: Value) {
        self.respond_data(json!({ "Id": id, "FirstName": "Ada", "Tags": tags }));
    }

    /// Queue an empty success response for a PATCH.
    pub fn respond_patch_ok(&self) {
        self.transport().push(Ok(HttpResponse::new(200, "{}")));
    }

    /// JSON body of a recorded request.
    pub fn body_of(&self, index: usize) -> Value {
        self.transport()
            .request(index)
            .json_body()
            .expect("request had no JSON body")
    }

    /// Assert the standard headers were sent on a recorded request.
    pub fn assert_headers(&self, index: usize, api_key: &str) {
        let req = self.transport().request(index);
        assert_eq!(req.header("X-API-KEY"), Some(api_key));
        assert_eq!(req.header("Accept"), Some("application/json"));
        assert_eq!(req.header("Content-Type"), Some("application/json"));
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
