// Copyright 2023 Dmitry Tantsur <dtantsur@protonmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-memory transport for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ETAG, LOCATION, RETRY_AFTER};
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::client::Client;
use crate::transport::{Response, Transport};
use crate::{Error, ErrorKind, Result};

/// A request seen by the mock.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct State {
    /// Canned responses by URI, the last one repeats
    responses: HashMap<String, VecDeque<Response>>,
    requests: Vec<Recorded>,
}

/// Transport answering from canned responses and recording requests.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

fn json_body(body: &Value) -> Vec<u8> {
    if body.is_null() {
        Vec::new()
    } else {
        body.to_string().into_bytes()
    }
}

impl MockTransport {
    pub fn new() -> MockTransport {
        MockTransport::default()
    }

    /// Queue a response for the URI.
    pub fn with_response<S: Into<String>>(self, uri: S, response: Response) -> MockTransport {
        {
            let mut state = self.state.lock().expect("mock state lock");
            state
                .responses
                .entry(uri.into())
                .or_default()
                .push_back(response);
        }
        self
    }

    /// Queue a JSON response with the given status.
    pub fn with_status<S: Into<String>>(self, uri: S, status: StatusCode, body: Value) -> MockTransport {
        self.with_response(
            uri,
            Response {
                status,
                headers: HeaderMap::new(),
                body: json_body(&body),
            },
        )
    }

    /// Queue a successful JSON response.
    pub fn with_json<S: Into<String>>(self, uri: S, body: Value) -> MockTransport {
        self.with_status(uri, StatusCode::OK, body)
    }

    /// Queue a successful JSON response carrying an `ETag` header.
    pub fn with_etag<S: Into<String>>(self, uri: S, etag: &'static str, body: Value) -> MockTransport {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ETAG, HeaderValue::from_static(etag));
        self.with_response(
            uri,
            Response {
                status: StatusCode::OK,
                headers,
                body: json_body(&body),
            },
        )
    }

    /// Queue a `202 Accepted` pointing at a task monitor.
    pub fn with_accepted<S: Into<String>>(self, uri: S, location: &'static str) -> MockTransport {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(LOCATION, HeaderValue::from_static(location));
        let _ = headers.insert(RETRY_AFTER, HeaderValue::from_static("5"));
        self.with_response(
            uri,
            Response {
                status: StatusCode::ACCEPTED,
                headers,
                body: Vec::new(),
            },
        )
    }

    /// Create a client on top of this transport.
    ///
    /// The mock stays shared, so requests can be inspected afterwards.
    pub fn into_client(self) -> Client {
        Client::new(self)
    }

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().expect("mock state lock").requests.clone()
    }

    /// Requests other than GET seen so far.
    pub fn writes(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|req| req.method != Method::GET)
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<Response> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| Error::new(ErrorKind::TransportError, "mock state lock"))?;
        state.requests.push(Recorded {
            method,
            uri: uri.to_string(),
            headers,
            body: body.cloned(),
        });

        let response = match state.responses.get_mut(uri) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        Ok(response.unwrap_or_else(|| Response {
            status: StatusCode::NOT_FOUND,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }))
    }
}
