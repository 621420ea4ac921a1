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

//! Generic fetching of resources and collections.

use std::collections::HashSet;
use std::marker::PhantomData;
use std::ops::Deref;

use async_stream::stream;
use futures::stream::{Stream, TryStreamExt};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{Link, Links, Resource, ResourceState};
use crate::client::Client;
use crate::transport::Response;
use crate::{Error, ErrorKind, Result};

/// Records fetched from several URIs, with the failures that were not fatal.
///
/// Members that returned 404 are skipped silently; any other failure is kept in `failures`
/// together with the URI that caused it.
#[derive(Debug)]
pub struct Collected<T> {
    /// Records fetched successfully, in service (or caller) order.
    pub items: Vec<T>,
    /// URIs that could not be fetched or decoded.
    pub failures: Vec<(String, Error)>,
}

/// A lazy query over a collection.
///
/// No requests are made until the query is executed.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    client: Client,
    uri: String,
    marker: PhantomData<fn() -> T>,
}

#[derive(Debug, Deserialize)]
struct CollectionLinks {
    #[serde(rename = "Members", default)]
    members: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct CollectionPage {
    #[serde(rename = "Members", default)]
    members: Option<Vec<Value>>,
    #[serde(rename = "Links", default)]
    links: Option<CollectionLinks>,
    #[serde(rename = "@odata.nextLink", default)]
    next_link: Option<String>,
    #[serde(rename = "Members@odata.nextLink", default)]
    members_next_link: Option<String>,
}

#[derive(Debug)]
enum Member {
    Link(String),
    Inline(String, Value),
}

#[derive(Debug)]
struct Page {
    members: Vec<Member>,
    next: Option<String>,
}

impl Member {
    fn parse(value: Value) -> Option<Member> {
        let (uri, inline) = {
            let object = value.as_object()?;
            let uri = object
                .get("@odata.id")
                .or_else(|| object.get("href"))
                .and_then(Value::as_str)
                .map(String::from);
            // Annotations alone do not make an expanded member.
            let inline = object
                .keys()
                .any(|key| !key.starts_with('@') && key != "href");
            (uri, inline)
        };

        if inline {
            Some(Member::Inline(uri.unwrap_or_default(), value))
        } else {
            uri.map(Member::Link)
        }
    }

    fn uri(&self) -> &str {
        match self {
            Member::Link(uri) => uri,
            Member::Inline(uri, _) => uri,
        }
    }
}

impl<T> Collected<T> {
    pub(crate) fn new() -> Collected<T> {
        Collected {
            items: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Whether every member was fetched.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Split into records and failures.
    #[inline]
    pub fn into_parts(self) -> (Vec<T>, Vec<(String, Error)>) {
        (self.items, self.failures)
    }

    /// Convert into a `Result`, failing if any member failed.
    ///
    /// The error has the kind of the first failure and lists every failed URI.
    pub fn into_result(self) -> Result<Vec<T>> {
        let mut failures = self.failures.into_iter();
        match failures.next() {
            None => Ok(self.items),
            Some((uri, first)) => {
                let mut uris = vec![uri];
                uris.extend(failures.map(|(uri, _)| uri));
                Err(Error::new(
                    first.kind(),
                    format!("failed to fetch {}: {}", uris.join(", "), first),
                ))
            }
        }
    }

    fn record(&mut self, uri: String, result: Result<T>) {
        match result {
            Ok(item) => self.items.push(item),
            Err(err) if err.is_not_found() => debug!("Skipping missing member {}", uri),
            Err(err) => self.failures.push((uri, err)),
        }
    }
}

impl<T> Default for Collected<T> {
    fn default() -> Collected<T> {
        Collected::new()
    }
}

impl<T> Deref for Collected<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for Collected<T> {
    type Item = T;
    type IntoIter = ::std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Resource> Collection<T> {
    pub(crate) fn new<S: Into<String>>(client: Client, uri: S) -> Collection<T> {
        Collection {
            client,
            uri: uri.into(),
            marker: PhantomData,
        }
    }

    /// URI of the collection.
    #[inline]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Fetch the member links of all pages without fetching the members.
    pub async fn links(&self) -> Result<Links> {
        let members = collect_members(&self.client, &self.uri).await?;
        Ok(Links::new(members.iter().map(|m| m.uri().to_string())))
    }

    /// Convert this query into a stream executing the requests.
    ///
    /// Returns a `TryStream`, which is a stream with each `next` call returning a `Result`.
    /// Members that return 404 are skipped. A failure to fetch a page ends the stream.
    ///
    /// Note that no requests are done until you start iterating.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        debug!("Streaming {} collection {}", T::NAME, self.uri);
        stream! {
            let mut walk = Walk::starting_at(&self.uri);
            let mut next = Some(self.uri);
            while let Some(uri) = next.take() {
                let page = match fetch_page(&self.client, &uri).await {
                    Ok(page) => page,
                    Err(err) => {
                        yield Err(err);
                        break;
                    }
                };
                next = walk.continuation(page.next);
                for member in walk.filter(page.members) {
                    match load_member::<T>(&self.client, member).await {
                        Ok(item) => yield Ok(item),
                        Err((uri, err)) if err.is_not_found() => {
                            debug!("Skipping missing member {}", uri)
                        }
                        Err((_, err)) => yield Err(err),
                    }
                }
            }
        }
    }

    /// Execute this request and return all results.
    ///
    /// A convenience shortcut for `self.into_stream().try_collect().await`.
    #[inline]
    pub async fn all(self) -> Result<Vec<T>> {
        self.into_stream().try_collect().await
    }
}

/// Bookkeeping of a collection walk: seen members and visited pages.
#[derive(Debug, Default)]
struct Walk {
    members: HashSet<String>,
    pages: HashSet<String>,
}

impl Walk {
    fn starting_at(uri: &str) -> Walk {
        let mut walk = Walk::default();
        let _ = walk.pages.insert(uri.to_string());
        walk
    }

    fn continuation(&mut self, next: Option<String>) -> Option<String> {
        let next = next.filter(|uri| !uri.is_empty())?;
        if self.pages.insert(next.clone()) {
            Some(next)
        } else {
            warn!("Page {} was already visited, stopping", next);
            None
        }
    }

    fn filter(&mut self, members: Vec<Member>) -> Vec<Member> {
        members
            .into_iter()
            .filter(|member| {
                let uri = member.uri();
                if uri.is_empty() || self.members.insert(uri.to_string()) {
                    true
                } else {
                    warn!("Duplicate collection member {}", uri);
                    false
                }
            })
            .collect()
    }
}

/// Decode a response into a record.
pub(crate) fn decode<T: Resource>(client: &Client, resp: Response) -> Result<T> {
    let value: Value = serde_json::from_slice(&resp.body)?;
    let object = match value {
        Value::Object(ref object) => object,
        _ => {
            return Err(Error::new(
                ErrorKind::InvalidResponse,
                "payload is not a JSON object",
            ))
        }
    };

    let inner = T::Inner::deserialize(&value).map_err(|err| decode_error::<T>(object, err))?;
    let etag = object.get("@odata.etag").and_then(Value::as_str);
    let state = ResourceState::new(client.clone(), resp.headers, resp.body, etag);
    Ok(T::from_parts(inner, state))
}

/// Decode a value into the wire representation of a record, naming the offending field on failure.
pub(crate) fn decode_inner<T: Resource>(value: &Value) -> Result<T::Inner> {
    match value {
        Value::Object(object) => {
            T::Inner::deserialize(value).map_err(|err| decode_error::<T>(object, err))
        }
        _ => Err(Error::new(
            ErrorKind::InvalidResponse,
            "payload is not a JSON object",
        )),
    }
}

fn decode_error<T: Resource>(object: &Map<String, Value>, err: serde_json::Error) -> Error {
    let field = object.iter().find_map(|(key, value)| {
        let mut single = Map::new();
        let _ = single.insert(key.clone(), value.clone());
        match T::Inner::deserialize(&Value::Object(single)) {
            Err(e) if !e.to_string().starts_with("missing field") => Some(key.as_str()),
            _ => None,
        }
    });

    let message = match field {
        Some(field) => format!("field `{}`: {}", field, err),
        None => err.to_string(),
    };
    Error::new(ErrorKind::InvalidResponse, message)
}

/// Fetch a single resource.
pub(crate) async fn get_object<T: Resource>(client: &Client, uri: &str) -> Result<T> {
    let resp = client.fetch(uri).await?;
    trace!("Received {} from {}: {}", T::NAME, uri, String::from_utf8_lossy(&resp.body));
    decode(client, resp).map_err(|e| e.with_context(format!("cannot decode {} from {}", T::NAME, uri)))
}

/// Fetch a resource behind an optional link.
pub(crate) async fn get_link<T: Resource>(client: &Client, link: Option<&Link>) -> Result<Option<T>> {
    match link.filter(|link| !link.is_empty()) {
        Some(link) => get_object(client, link.as_str()).await.map(Some),
        None => Ok(None),
    }
}

/// Fetch resources from a list of links, preserving the order.
pub(crate) async fn get_objects<T: Resource>(client: &Client, links: &Links) -> Collected<T> {
    let mut result = Collected::new();
    for link in links {
        let uri = link.as_str();
        result.record(uri.to_string(), get_object(client, uri).await);
    }
    result
}

/// Fetch all members of a collection, following continuation links.
pub(crate) async fn get_collection<T: Resource>(client: &Client, uri: &str) -> Result<Collected<T>> {
    let members = collect_members(client, uri).await?;
    debug!("Collection {} has {} member(s)", uri, members.len());

    let mut result = Collected::new();
    for member in members {
        match load_member::<T>(client, member).await {
            Ok(item) => result.items.push(item),
            Err((uri, err)) => result.record(uri, Err(err)),
        }
    }
    Ok(result)
}

/// Fetch all members of a collection behind an optional link.
///
/// A missing link yields an empty result.
pub(crate) async fn get_linked_collection<T: Resource>(
    client: &Client,
    link: Option<&Link>,
) -> Result<Collected<T>> {
    match link.filter(|link| !link.is_empty()) {
        Some(link) => get_collection(client, link.as_str()).await,
        None => Ok(Collected::new()),
    }
}

/// Re-fetch a record by its identifier.
pub(crate) async fn refresh<T: Resource>(record: &mut T) -> Result<()> {
    let uri = record.entity().odata_id.clone();
    if uri.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("{} has no @odata.id to refresh from", T::NAME),
        ));
    }
    *record = get_object(record.state().client(), &uri).await?;
    Ok(())
}

async fn fetch_page(client: &Client, uri: &str) -> Result<Page> {
    let resp = client.fetch(uri).await?;
    let page: CollectionPage = serde_json::from_slice(&resp.body)
        .map_err(|e| Error::from(e).with_context(format!("cannot decode collection {}", uri)))?;

    let values = match (page.members, page.links) {
        (Some(members), _) => members,
        (None, Some(links)) => links.members.unwrap_or_default(),
        (None, None) => Vec::new(),
    };
    let members = values
        .into_iter()
        .filter_map(|value| {
            let member = Member::parse(value);
            if member.is_none() {
                warn!("Ignoring a member of {} without a link", uri);
            }
            member
        })
        .collect();

    Ok(Page {
        members,
        next: page.next_link.or(page.members_next_link),
    })
}

async fn collect_members(client: &Client, uri: &str) -> Result<Vec<Member>> {
    let mut walk = Walk::starting_at(uri);
    let mut result = Vec::new();
    let mut next = Some(uri.to_string());
    while let Some(uri) = next.take() {
        let page = fetch_page(client, &uri).await?;
        next = walk.continuation(page.next);
        result.extend(walk.filter(page.members));
    }
    Ok(result)
}

async fn load_member<T: Resource>(
    client: &Client,
    member: Member,
) -> ::std::result::Result<T, (String, Error)> {
    match member {
        Member::Link(uri) => get_object(client, &uri).await.map_err(|e| (uri, e)),
        Member::Inline(uri, value) => {
            let resp = Response {
                status: reqwest::StatusCode::OK,
                headers: Default::default(),
                body: value.to_string().into_bytes(),
            };
            decode(client, resp).map_err(|e| (uri, e))
        }
    }
}

#[cfg(test)]
mod test {
    use futures::TryStreamExt;
    use reqwest::StatusCode;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::{decode_inner, get_collection, get_object, get_objects, Collection};
    use crate::common::mock::MockTransport;
    use crate::common::{Entity, Links, Refresh};
    use crate::ErrorKind;

    #[derive(Debug, Clone, Deserialize, Serialize)]
    pub struct ThingInner {
        #[serde(flatten)]
        pub entity: Entity,
        #[serde(rename = "Size", default)]
        pub size: Option<u32>,
    }

    redfish_resource! {
        Thing = ThingInner
    }

    fn thing(id: &str) -> serde_json::Value {
        json!({"@odata.id": format!("/things/{}", id), "Id": id, "Name": "Thing", "Size": 1})
    }

    #[tokio::test]
    async fn test_get_object() {
        let mock = MockTransport::new()
            .with_etag("/things/1", "\"header\"", thing("1"))
            .with_json("/things/2", json!({"@odata.id": "/things/2", "@odata.etag": "W/\"body\""}))
            .with_json("/things/3", json!([1, 2]))
            .with_json("/things/4", json!({"@odata.id": "/things/4", "Size": "big"}));
        let client = mock.into_client();

        let one: Thing = get_object(&client, "/things/1").await.unwrap();
        assert_eq!(one.id(), "1");
        assert_eq!(one.etag(), Some("\"header\""));
        assert!(one.is_refreshed());

        let two: Thing = get_object(&client, "/things/2").await.unwrap();
        assert_eq!(two.etag(), Some("W/\"body\""));

        let err = get_object::<Thing>(&client, "/things/3").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);

        let err = get_object::<Thing>(&client, "/things/4").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
        assert!(err.to_string().contains("`Size`"), "{}", err);

        let err = get_object::<Thing>(&client, "/things/5").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    }

    #[test]
    fn test_decode_inner_names_field() {
        let err = decode_inner::<Thing>(&json!({"Id": "1", "Size": -1})).unwrap_err();
        assert!(err.to_string().contains("`Size`"), "{}", err);
        assert!(decode_inner::<Thing>(&json!("thing")).is_err());
    }

    #[tokio::test]
    async fn test_collection_pages() {
        let mock = MockTransport::new()
            .with_json(
                "/things",
                json!({
                    "Members": [{"@odata.id": "/things/1"}, {"@odata.id": "/things/2"}],
                    "Members@odata.count": 4,
                    "Members@odata.nextLink": "/things?skip=2"
                }),
            )
            .with_json(
                "/things?skip=2",
                json!({
                    "Members": [{"@odata.id": "/things/2"}, {"@odata.id": "/things/3"}, {"@odata.id": "/things/4"}],
                    "@odata.nextLink": "/things"
                }),
            )
            .with_json("/things/1", thing("1"))
            .with_json("/things/2", thing("2"))
            .with_status("/things/3", StatusCode::NOT_FOUND, json!({}))
            .with_status("/things/4", StatusCode::INTERNAL_SERVER_ERROR, json!({}));
        let client = mock.clone().into_client();

        let result = get_collection::<Thing>(&client, "/things").await.unwrap();
        let ids: Vec<_> = result.items.iter().map(|t| t.id().to_string()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].0, "/things/4");
        assert!(!result.is_complete());

        let err = result.into_result().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProtocolError);
        assert!(err.to_string().contains("/things/4"));

        let pages = mock
            .requests()
            .into_iter()
            .filter(|r| r.uri.starts_with("/things?") || r.uri == "/things")
            .count();
        assert_eq!(pages, 2);
    }

    #[tokio::test]
    async fn test_collection_inline_and_links_members() {
        let mock = MockTransport::new()
            .with_json(
                "/inline",
                json!({"Members": [thing("7"), {"@odata.id": "/things/8"}]}),
            )
            .with_json(
                "/swordfish",
                json!({"Links": {"Members": [{"@odata.id": "/things/8"}]}}),
            )
            .with_json("/things/8", thing("8"));
        let client = mock.clone().into_client();

        let result = get_collection::<Thing>(&client, "/inline").await.unwrap();
        let ids: Vec<_> = result.iter().map(|t| t.id().to_string()).collect();
        assert_eq!(ids, vec!["7", "8"]);
        assert!(!mock.requests().iter().any(|r| r.uri == "/things/7"));

        let result = get_collection::<Thing>(&client, "/swordfish").await.unwrap();
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_collection_annotated_links_are_fetched() {
        let mock = MockTransport::new()
            .with_json(
                "/annotated",
                json!({"Members": [
                    {"@odata.id": "/things/1", "@odata.etag": "W/\"1\""},
                    {"@odata.id": "/things/2", "@odata.type": "#Thing.v1_0_0.Thing"}
                ]}),
            )
            .with_json(
                "/things/1",
                json!({"@odata.id": "/things/1", "Id": "1", "Name": "Real", "Size": 7}),
            )
            .with_json("/things/2", thing("2"));
        let client = mock.clone().into_client();

        let result = get_collection::<Thing>(&client, "/annotated").await.unwrap();
        assert!(result.is_complete());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name(), "Real");
        assert_eq!(result[0].inner.size, Some(7));
        assert_eq!(result[1].id(), "2");
        let fetched: Vec<_> = mock.requests().into_iter().map(|r| r.uri).collect();
        assert!(fetched.contains(&"/things/1".to_string()));
        assert!(fetched.contains(&"/things/2".to_string()));
    }

    #[tokio::test]
    async fn test_get_objects_preserves_order() {
        let mock = MockTransport::new()
            .with_json("/things/1", thing("1"))
            .with_json("/things/2", thing("2"));
        let client = mock.into_client();
        let links = Links::new(["/things/2", "/things/9", "/things/1"]);
        let result = get_objects::<Thing>(&client, &links).await;
        let ids: Vec<_> = result.iter().map(|t| t.id().to_string()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert!(result.is_complete());
    }

    #[tokio::test]
    async fn test_stream() {
        let mock = MockTransport::new()
            .with_json(
                "/things",
                json!({"Members": [{"@odata.id": "/things/1"}, {"@odata.id": "/things/2"}]}),
            )
            .with_json("/things/1", thing("1"))
            .with_json("/things/2", thing("2"));
        let client = mock.clone().into_client();

        let query: Collection<Thing> = Collection::new(client.clone(), "/things");
        assert!(mock.requests().is_empty());
        let links = query.links().await.unwrap();
        assert_eq!(links.to_strings(), vec!["/things/1", "/things/2"]);

        let items: Vec<Thing> = query.into_stream().try_collect().await.unwrap();
        assert_eq!(items.len(), 2);

        let err = Collection::<Thing>::new(client, "/nothing").all().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    }

    #[tokio::test]
    async fn test_refresh() {
        let mock = MockTransport::new()
            .with_json("/things/1", thing("1"))
            .with_json(
                "/things/1",
                json!({"@odata.id": "/things/1", "Id": "1", "Name": "Renamed"}),
            );
        let client = mock.into_client();
        let mut one: Thing = get_object(&client, "/things/1").await.unwrap();
        assert_eq!(one.name(), "Thing");
        one.refresh().await.unwrap();
        assert_eq!(one.name(), "Renamed");
    }
}
