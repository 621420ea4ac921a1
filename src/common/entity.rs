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

//! Entity base shared by all records.

use reqwest::header::{HeaderMap, ETAG};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::Settings;
use crate::client::Client;

/// Identity common to every resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entity {
    #[serde(default, rename = "@odata.id")]
    pub odata_id: String,
    #[serde(default, rename = "@odata.type", skip_serializing_if = "String::is_empty")]
    pub odata_type: String,
    #[serde(default, rename = "@odata.etag", skip_serializing_if = "Option::is_none")]
    pub odata_etag: Option<String>,
    #[serde(default, rename = "@odata.context", skip_serializing_if = "Option::is_none")]
    pub odata_context: Option<String>,
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Private state every record carries next to its public fields.
#[derive(Debug, Clone)]
pub struct ResourceState {
    client: Client,
    headers: HeaderMap,
    raw: Option<Vec<u8>>,
    etag: Option<String>,
}

/// A record decoded from a service payload.
///
/// Implemented by every resource type of this crate.
pub trait Resource: Sized + Send + Sync {
    /// Wire representation.
    #[doc(hidden)]
    type Inner: DeserializeOwned + Serialize + Send + Sync;

    /// Name of the record type.
    const NAME: &'static str;

    #[doc(hidden)]
    fn from_parts(inner: Self::Inner, state: ResourceState) -> Self;

    #[doc(hidden)]
    fn inner(&self) -> &Self::Inner;

    #[doc(hidden)]
    fn state(&self) -> &ResourceState;

    #[doc(hidden)]
    fn state_mut(&mut self) -> &mut ResourceState;

    /// Identity of the resource.
    fn entity(&self) -> &Entity;

    /// Settings redirection advertised by the service (if any).
    fn settings(&self) -> Option<&Settings> {
        None
    }
}

impl ResourceState {
    /// Create a state for a record decoded from a response.
    ///
    /// The body ETag wins over the response header.
    pub(crate) fn new(
        client: Client,
        headers: HeaderMap,
        raw: Vec<u8>,
        body_etag: Option<&str>,
    ) -> ResourceState {
        let etag = body_etag
            .filter(|etag| !etag.is_empty())
            .map(String::from)
            .or_else(|| header_etag(&headers));
        ResourceState {
            client,
            headers,
            raw: Some(raw),
            etag,
        }
    }

    /// Client used to fetch this record.
    #[inline]
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Headers of the response the record was decoded from.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The payload last observed from the service.
    #[inline]
    pub fn raw(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }

    /// Cached concurrency token.
    #[inline]
    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    /// Headers for a request modifying this record.
    pub(crate) fn request_headers(&self) -> HeaderMap {
        self.client.default_headers(self.etag())
    }

    pub(crate) fn set_raw(&mut self, raw: Vec<u8>) {
        self.raw = Some(raw);
    }

    pub(crate) fn invalidate(&mut self) {
        self.raw = None;
    }

    /// Take the ETag of a write response.
    ///
    /// Without one the cached token is stale and is dropped.
    pub(crate) fn set_etag_from(&mut self, headers: &HeaderMap) {
        self.etag = header_etag(headers);
    }
}

/// ETag from response headers.
pub(crate) fn header_etag(headers: &HeaderMap) -> Option<String> {
    headers
        .get(ETAG)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod test {
    use reqwest::header::{HeaderMap, HeaderValue, ETAG};
    use serde_json::json;

    use super::{Entity, ResourceState};
    use crate::common::mock::MockTransport;

    #[test]
    fn test_entity_decode() {
        let entity: Entity = serde_json::from_value(json!({
            "@odata.id": "/redfish/v1/Systems/1",
            "@odata.type": "#ComputerSystem.v1_20_0.ComputerSystem",
            "@odata.etag": "W/\"1234\"",
            "Id": "1",
            "Name": "System",
            "Model": "ignored"
        }))
        .unwrap();
        assert_eq!(entity.odata_id, "/redfish/v1/Systems/1");
        assert_eq!(entity.odata_etag.as_deref(), Some("W/\"1234\""));
        assert_eq!(entity.id, "1");
        assert_eq!(entity.description, None);
    }

    #[test]
    fn test_etag_body_wins() {
        let client = MockTransport::new().into_client();
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ETAG, HeaderValue::from_static("\"header\""));

        let state = ResourceState::new(client.clone(), headers.clone(), Vec::new(), Some("\"body\""));
        assert_eq!(state.etag(), Some("\"body\""));

        let state = ResourceState::new(client.clone(), headers, Vec::new(), Some(""));
        assert_eq!(state.etag(), Some("\"header\""));

        let state = ResourceState::new(client, HeaderMap::new(), Vec::new(), None);
        assert_eq!(state.etag(), None);
        assert!(state.raw().is_some());
    }
}
