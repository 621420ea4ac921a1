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

//! Client API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, IF_MATCH};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use static_assertions::assert_impl_all;

use crate::chassis::Chassis;
use crate::common::{api, Collected, Collection, Resource, TaskMonitor};
use crate::config::Config;
use crate::managers::Manager;
use crate::service::ServiceRoot;
use crate::systems::ComputerSystem;
use crate::transport::{HttpTransport, Response, Transport};
use crate::{Error, Result};

const SERVICE_ROOT: &str = "/redfish/v1/";

#[derive(Debug, Clone, Copy, Default)]
struct ClientOptions {
    strip_etag_quotes: bool,
    disable_etag_match: bool,
}

/// Redfish service client.
///
/// A cheap handle shared by every record fetched through it. Cloning it does not create a new
/// connection.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    options: ClientOptions,
}

assert_impl_all!(Client: Send, Sync);

impl Client {
    /// Create a client with the given transport.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// fn client() -> redfish::Result<redfish::Client> {
    ///     let transport = redfish::HttpTransport::new("https://bmc.example.com")?
    ///         .with_basic_auth("root", "calvin");
    ///     Ok(redfish::Client::new(transport))
    /// }
    /// # fn main() { client().unwrap(); }
    /// ```
    ///
    /// # See Also
    ///
    /// * [from_config](#method.from_config) to create a Client from redfish.yaml
    /// * [from_env](#method.from_env) to create a Client from environment variables
    pub fn new<T: Transport + 'static>(transport: T) -> Client {
        Client {
            transport: Arc::new(transport),
            options: ClientOptions::default(),
        }
    }

    /// Create a client from a configuration.
    pub fn with_config(config: &Config) -> Result<Client> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Client {
            transport: Arc::new(transport),
            options: ClientOptions {
                strip_etag_quotes: config.strip_etag_quotes,
                disable_etag_match: config.disable_etag_match,
            },
        })
    }

    /// Create a client from a named service in the configuration file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # fn client_from_config() -> redfish::Result<()> {
    /// let client = redfish::Client::from_config("lab-1")?;
    /// # Ok(()) }
    /// # fn main() { client_from_config().unwrap(); }
    /// ```
    pub fn from_config<S: AsRef<str>>(name: S) -> Result<Client> {
        Client::with_config(&Config::from_config(name)?)
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Client> {
        Client::with_config(&Config::from_env()?)
    }

    /// Remove quotes around ETags before sending them.
    pub fn with_strip_etag_quotes(mut self, value: bool) -> Client {
        self.options.strip_etag_quotes = value;
        self
    }

    /// Never send `If-Match` headers.
    pub fn with_disable_etag_match(mut self, value: bool) -> Client {
        self.options.disable_etag_match = value;
        self
    }

    /// Fetch the service root.
    pub async fn service_root(&self) -> Result<ServiceRoot> {
        api::get_object(self, SERVICE_ROOT).await
    }

    /// Fetch a resource of any type.
    pub async fn get<T: Resource>(&self, uri: &str) -> Result<T> {
        api::get_object(self, uri).await
    }

    /// Fetch all members of a collection of any type.
    pub async fn list<T: Resource>(&self, uri: &str) -> Result<Collected<T>> {
        api::get_collection(self, uri).await
    }

    /// Build a lazy query against a collection of any type.
    ///
    /// No requests are made until the query is used.
    pub fn find<T: Resource, S: Into<String>>(&self, uri: S) -> Collection<T> {
        Collection::new(self.clone(), uri)
    }

    /// List all computer systems of the service.
    pub async fn list_systems(&self) -> Result<Collected<ComputerSystem>> {
        self.service_root().await?.systems().await
    }

    /// List all chassis of the service.
    pub async fn list_chassis(&self) -> Result<Collected<Chassis>> {
        self.service_root().await?.chassis().await
    }

    /// List all managers of the service.
    pub async fn list_managers(&self) -> Result<Collected<Manager>> {
        self.service_root().await?.managers().await
    }

    /// Headers for a request modifying a resource with the given ETag.
    pub(crate) fn default_headers(&self, etag: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if self.options.disable_etag_match {
            return headers;
        }

        if let Some(etag) = etag.filter(|etag| !etag.is_empty()) {
            let etag = if self.options.strip_etag_quotes {
                etag.trim_matches('"')
            } else {
                etag
            };
            match HeaderValue::from_str(etag) {
                Ok(value) => {
                    let _ = headers.insert(IF_MATCH, value);
                }
                Err(..) => warn!("Ignoring ETag {:?} that is not a valid header", etag),
            }
        }
        headers
    }

    /// Issue a GET request, failing on any non-2xx status.
    pub(crate) async fn fetch(&self, uri: &str) -> Result<Response> {
        self.send(Method::GET, uri, None, HeaderMap::new()).await
    }

    /// Issue a POST request, failing on any non-2xx status.
    pub(crate) async fn post(&self, uri: &str, body: &Value, headers: HeaderMap) -> Result<Response> {
        self.send(Method::POST, uri, Some(body), headers).await
    }

    /// Issue a PATCH request, failing on any non-2xx status.
    pub(crate) async fn patch(
        &self,
        uri: &str,
        body: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        self.send(Method::PATCH, uri, Some(body), headers).await
    }

    /// Issue a POST request and surface `202 Accepted` as a task monitor.
    pub(crate) async fn post_with_task(
        &self,
        uri: &str,
        body: &Value,
        headers: HeaderMap,
    ) -> Result<(Response, Option<TaskMonitor>)> {
        let resp = self.post(uri, body, headers).await?;
        self.with_task(resp)
    }

    /// Issue a PATCH request and surface `202 Accepted` as a task monitor.
    pub(crate) async fn patch_with_task(
        &self,
        uri: &str,
        body: &Value,
        headers: HeaderMap,
    ) -> Result<(Response, Option<TaskMonitor>)> {
        let resp = self.patch(uri, body, headers).await?;
        self.with_task(resp)
    }

    fn with_task(&self, resp: Response) -> Result<(Response, Option<TaskMonitor>)> {
        if resp.status == StatusCode::ACCEPTED {
            let monitor = TaskMonitor::from_response(self.clone(), &resp)?;
            Ok((resp, monitor))
        } else {
            Ok((resp, None))
        }
    }

    /// Send a request and return the response regardless of its status.
    pub(crate) async fn send_unchecked(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<Response> {
        debug!("{} {}", method, uri);
        if let Some(body) = body {
            trace!("Request body {}", body);
        }
        self.transport.request(method, uri, body, headers).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<Response> {
        let resp = self.send_unchecked(method, uri, body, headers).await?;
        if resp.status.is_success() {
            Ok(resp)
        } else {
            Err(Error::from_status(resp.status, uri, &resp.body))
        }
    }
}

#[cfg(test)]
mod test {
    use reqwest::header::IF_MATCH;
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::mock::MockTransport;
    use crate::ErrorKind;

    #[test]
    fn test_default_headers() {
        let client = MockTransport::new().into_client();
        let headers = client.default_headers(Some("\"abc\""));
        assert_eq!(headers.get(IF_MATCH).unwrap(), "\"abc\"");
        assert!(client.default_headers(None).is_empty());
        assert!(client.default_headers(Some("")).is_empty());

        let client = client.with_strip_etag_quotes(true);
        let headers = client.default_headers(Some("\"abc\""));
        assert_eq!(headers.get(IF_MATCH).unwrap(), "abc");

        let client = client.with_disable_etag_match(true);
        assert!(client.default_headers(Some("\"abc\"")).is_empty());
    }

    #[tokio::test]
    async fn test_status_classification() {
        let mock = MockTransport::new()
            .with_status("/missing", StatusCode::NOT_FOUND, json!({}))
            .with_status("/stale", StatusCode::PRECONDITION_FAILED, json!({}))
            .with_status("/broken", StatusCode::SERVICE_UNAVAILABLE, json!({}));
        let client = mock.into_client();

        let err = client.fetch("/missing").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
        let err = client
            .patch("/stale", &json!({}), Default::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionFailed);
        let err = client.fetch("/broken").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProtocolError);
        let err = client.fetch("/unknown").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    }

    #[tokio::test]
    async fn test_post_with_task() {
        let mock = MockTransport::new()
            .with_accepted("/redfish/v1/Systems/1/Actions/ComputerSystem.Reset", "/redfish/v1/TaskService/TaskMonitors/7")
            .with_status("/redfish/v1/Actions/Sync", StatusCode::NO_CONTENT, json!(null));
        let client = mock.clone().into_client();

        let (resp, task) = client
            .post_with_task(
                "/redfish/v1/Systems/1/Actions/ComputerSystem.Reset",
                &json!({"ResetType": "On"}),
                Default::default(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status, StatusCode::ACCEPTED);
        assert_eq!(task.unwrap().uri(), "/redfish/v1/TaskService/TaskMonitors/7");

        let (resp, task) = client
            .post_with_task("/redfish/v1/Actions/Sync", &json!({}), Default::default())
            .await
            .unwrap();
        assert_eq!(resp.status, StatusCode::NO_CONTENT);
        assert!(task.is_none());
        assert_eq!(mock.requests().len(), 2);
    }
}
