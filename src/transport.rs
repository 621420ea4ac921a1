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

//! HTTP transport.
//!
//! The object model only needs [Transport](trait.Transport.html): a way to send one request and
//! get back the status, the headers and the body. [HttpTransport](struct.HttpTransport.html) is
//! the default implementation on top of `reqwest`.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Method, StatusCode, Url};
use serde_json::Value;

use crate::config::Config;
use crate::{Error, ErrorKind, Result};

const SERVICE_ROOT: &str = "/redfish/v1/";
const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Raw response of a service.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Vec<u8>,
}

/// A way to send requests to a Redfish service.
///
/// Implementations return every HTTP status as data. Only failures to get a response at all
/// (connection, TLS, timeout) are errors.
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    /// Send a request and wait for the response.
    async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<Response>;
}

#[derive(Clone)]
enum Credentials {
    None,
    Basic { username: String, password: String },
    Token(HeaderValue),
}

/// Transport using `reqwest`.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    credentials: Credentials,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let auth = match self.credentials {
            Credentials::None => "none",
            Credentials::Basic { .. } => "basic",
            Credentials::Token(..) => "token",
        };
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint.as_str())
            .field("auth", &auth)
            .finish()
    }
}

impl HttpTransport {
    /// Create a transport without authentication.
    pub fn new<S: AsRef<str>>(endpoint: S) -> Result<HttpTransport> {
        let client = reqwest::Client::builder().build()?;
        Ok(HttpTransport {
            client,
            endpoint: parse_endpoint(endpoint.as_ref())?,
            credentials: Credentials::None,
        })
    }

    /// Create a transport from a configuration.
    pub fn from_config(config: &Config) -> Result<HttpTransport> {
        let mut builder = reqwest::Client::builder();
        #[cfg(any(feature = "native-tls", feature = "rustls"))]
        {
            builder = builder.danger_accept_invalid_certs(config.insecure);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let credentials = match (&config.token, &config.username) {
            (Some(token), _) => {
                let mut value = HeaderValue::from_str(token).map_err(|e| {
                    Error::new(ErrorKind::InvalidInput, format!("invalid token: {}", e))
                })?;
                value.set_sensitive(true);
                Credentials::Token(value)
            }
            (None, Some(username)) => Credentials::Basic {
                username: username.clone(),
                password: config.password.clone().unwrap_or_default(),
            },
            (None, None) => Credentials::None,
        };

        Ok(HttpTransport {
            client: builder.build()?,
            endpoint: parse_endpoint(&config.endpoint)?,
            credentials,
        })
    }

    /// Use HTTP basic authentication.
    pub fn with_basic_auth<U, P>(mut self, username: U, password: P) -> HttpTransport
    where
        U: Into<String>,
        P: Into<String>,
    {
        self.credentials = Credentials::Basic {
            username: username.into(),
            password: password.into(),
        };
        self
    }

    /// Base URL of the service.
    #[inline]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn url_for(&self, uri: &str) -> Result<Url> {
        let uri = if uri.is_empty() { SERVICE_ROOT } else { uri };
        self.endpoint.join(uri).map_err(|e| {
            Error::new(ErrorKind::InvalidInput, format!("invalid URI {}: {}", uri, e))
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<Response> {
        let url = self.url_for(uri)?;
        debug!("{} {}", method, url);

        let mut builder = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .headers(headers);
        builder = match self.credentials {
            Credentials::None => builder,
            Credentials::Basic {
                ref username,
                ref password,
            } => builder.basic_auth(username, Some(password)),
            Credentials::Token(ref token) => {
                builder.header(HeaderName::from_static(AUTH_TOKEN_HEADER), token.clone())
            }
        };
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();
        trace!("Received {} with {} bytes", status, body.len());
        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    Url::parse(endpoint).map_err(|e| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("invalid endpoint {}: {}", endpoint, e),
        )
    })
}
