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

//! Action invocation.

use std::collections::HashMap;

use serde::de::Error as DeserError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tokio::sync::OnceCell;

use super::{ResetType, ResourceState, TaskMonitor};
use crate::client::Client;
use crate::registries::ActionInfo;
use crate::{Error, ErrorKind, Result};

const ALLOWABLE_VALUES: &str = "@Redfish.AllowableValues";
const ACTION_INFO: &str = "@Redfish.ActionInfo";

/// An action advertised by a resource.
#[derive(Debug, Clone, Default)]
pub struct ActionDescriptor {
    target: String,
    title: Option<String>,
    action_info: Option<String>,
    allowable_values: HashMap<String, Vec<String>>,
    info: OnceCell<HashMap<String, Vec<String>>>,
}

impl ActionDescriptor {
    /// URI to POST the action to.
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Human-readable title (if provided).
    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// URI of the `ActionInfo` describing the parameters (if provided).
    #[inline]
    pub fn action_info(&self) -> Option<&str> {
        self.action_info.as_deref()
    }

    /// Allowable values listed inline with the action.
    pub fn inline_allowable_values(&self, parameter: &str) -> Option<&[String]> {
        self.allowable_values
            .get(parameter)
            .map(Vec::as_slice)
            .filter(|values| !values.is_empty())
    }

    /// Resolve the allowable values of a parameter.
    ///
    /// Inline values win. Otherwise the `ActionInfo` document is fetched on first use and
    /// cached. `None` means that any value is accepted.
    pub async fn allowable_values(
        &self,
        client: &Client,
        parameter: &str,
    ) -> Result<Option<Vec<String>>> {
        if let Some(values) = self.inline_allowable_values(parameter) {
            return Ok(Some(values.to_vec()));
        }

        let uri = match self.action_info {
            Some(ref uri) if !uri.is_empty() => uri,
            _ => return Ok(None),
        };

        let info = self
            .info
            .get_or_try_init(|| async {
                debug!("Fetching action info {}", uri);
                let info = ActionInfo::load(client, uri).await?;
                Ok::<_, Error>(info.allowable_values())
            })
            .await?;
        Ok(info
            .get(parameter)
            .filter(|values| !values.is_empty())
            .cloned())
    }
}

impl<'de> Deserialize<'de> for ActionDescriptor {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<ActionDescriptor, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let mut result = ActionDescriptor::default();
        for (key, value) in object {
            match key.as_str() {
                "target" => {
                    result.target = value
                        .as_str()
                        .ok_or_else(|| D::Error::custom("action target must be a string"))?
                        .to_string();
                }
                "title" => result.title = value.as_str().map(String::from),
                ACTION_INFO => result.action_info = value.as_str().map(String::from),
                _ => {
                    if let Some(parameter) = key.strip_suffix(ALLOWABLE_VALUES) {
                        let values = match value {
                            Value::Array(items) => items
                                .into_iter()
                                .map(|item| match item {
                                    Value::String(s) => s,
                                    other => other.to_string(),
                                })
                                .collect(),
                            _ => Vec::new(),
                        };
                        let _ = result.allowable_values.insert(parameter.to_string(), values);
                    }
                }
            }
        }
        Ok(result)
    }
}

impl Serialize for ActionDescriptor {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("target", &self.target)?;
        if let Some(ref title) = self.title {
            map.serialize_entry("title", title)?;
        }
        if let Some(ref info) = self.action_info {
            map.serialize_entry(ACTION_INFO, info)?;
        }
        for (parameter, values) in &self.allowable_values {
            map.serialize_entry(&format!("{}{}", parameter, ALLOWABLE_VALUES), values)?;
        }
        map.end()
    }
}

/// Get the descriptor of an action, failing if the resource does not advertise it.
pub(crate) fn require<'a>(
    descriptor: Option<&'a ActionDescriptor>,
    name: &str,
) -> Result<&'a ActionDescriptor> {
    descriptor
        .filter(|descriptor| !descriptor.target.is_empty())
        .ok_or_else(|| {
            Error::new(
                ErrorKind::Unsupported,
                format!("action {} is not supported by this resource", name),
            )
        })
}

/// Validate parameters and POST an action.
///
/// Parameters named in `enumerated` are checked against their allowable values (when known)
/// before any request is sent.
pub(crate) async fn invoke(
    state: &ResourceState,
    descriptor: Option<&ActionDescriptor>,
    name: &str,
    parameters: Map<String, Value>,
    enumerated: &[&str],
) -> Result<Option<TaskMonitor>> {
    let descriptor = require(descriptor, name)?;
    let client = state.client();

    for &parameter in enumerated {
        let values: Vec<&str> = match parameters.get(parameter) {
            Some(Value::String(value)) => vec![value.as_str()],
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => continue,
        };
        if values.is_empty() {
            continue;
        }

        if let Some(allowed) = descriptor.allowable_values(client, parameter).await? {
            let invalid = values
                .into_iter()
                .find(|value| !allowed.iter().any(|item| item == value));
            if let Some(value) = invalid {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!(
                        "{} is not an allowed value of {} for {}, expected one of {:?}",
                        value, parameter, name, allowed
                    ),
                ));
            }
        }
    }

    let body = Value::Object(parameters);
    trace!("Invoking {} at {}: {}", name, descriptor.target, body);
    let (_, task) = client
        .post_with_task(&descriptor.target, &body, state.request_headers())
        .await?;
    Ok(task)
}

/// Invoke a `Reset`-style action with a `ResetType` parameter.
pub(crate) async fn reset(
    state: &ResourceState,
    descriptor: Option<&ActionDescriptor>,
    name: &str,
    reset_type: ResetType,
) -> Result<Option<TaskMonitor>> {
    let mut parameters = Map::new();
    let _ = parameters.insert("ResetType".into(), Value::from(reset_type.as_str()));
    invoke(state, descriptor, name, parameters, &["ResetType"]).await
}

/// Reset types a `Reset`-style action accepts.
///
/// Empty when the service does not restrict them. Values unknown to this crate are skipped.
pub(crate) async fn supported_reset_types(
    state: &ResourceState,
    descriptor: Option<&ActionDescriptor>,
    name: &str,
) -> Result<Vec<ResetType>> {
    let descriptor = require(descriptor, name)?;
    let values = descriptor
        .allowable_values(state.client(), "ResetType")
        .await?
        .unwrap_or_default();
    Ok(values
        .iter()
        .filter_map(|value| match value.parse() {
            Ok(reset_type) => Some(reset_type),
            Err(..) => {
                warn!("Ignoring unknown reset type {} of {}", value, name);
                None
            }
        })
        .collect())
}

/// Convert a parameters structure into the body of an action.
pub(crate) fn to_parameters<T: Serialize>(parameters: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(parameters)? {
        Value::Object(object) => Ok(object),
        Value::Null => Ok(Map::new()),
        other => Err(Error::new(
            ErrorKind::InvalidInput,
            format!("action parameters must be an object, got {}", other),
        )),
    }
}

/// Fail with `InvalidInput` if a required string parameter is empty.
pub(crate) fn require_non_empty(parameter: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(Error::new(
            ErrorKind::InvalidInput,
            format!("{} must not be empty", parameter),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use reqwest::header::IF_MATCH;
    use reqwest::StatusCode;
    use serde_json::{json, Map};

    use super::{invoke, ActionDescriptor};
    use crate::common::mock::MockTransport;
    use crate::common::ResourceState;
    use crate::ErrorKind;

    const TARGET: &str = "/redfish/v1/Systems/1/Actions/ComputerSystem.Reset";
    const INFO: &str = "/redfish/v1/Systems/1/ResetActionInfo";

    fn reset(value: &str) -> Map<String, serde_json::Value> {
        let mut params = Map::new();
        let _ = params.insert("ResetType".into(), json!(value));
        params
    }

    #[test]
    fn test_decode() {
        let action: ActionDescriptor = serde_json::from_value(json!({
            "target": TARGET,
            "title": "Reset",
            "ResetType@Redfish.AllowableValues": ["On", "ForceOff"],
            "@Redfish.ActionInfo": INFO
        }))
        .unwrap();
        assert_eq!(action.target(), TARGET);
        assert_eq!(action.title(), Some("Reset"));
        assert_eq!(action.action_info(), Some(INFO));
        assert_eq!(
            action.inline_allowable_values("ResetType").unwrap(),
            &["On".to_string(), "ForceOff".to_string()]
        );
        assert!(action.inline_allowable_values("Other").is_none());

        let encoded = serde_json::to_value(&action).unwrap();
        assert_eq!(encoded["ResetType@Redfish.AllowableValues"], json!(["On", "ForceOff"]));
    }

    #[tokio::test]
    async fn test_invalid_value_no_request() {
        let mock = MockTransport::new();
        let state = ResourceState::new(mock.clone().into_client(), Default::default(), Vec::new(), Some("\"1\""));
        let action: ActionDescriptor = serde_json::from_value(json!({
            "target": TARGET,
            "ResetType@Redfish.AllowableValues": ["On", "ForceOff"]
        }))
        .unwrap();

        let err = invoke(&state, Some(&action), "Reset", reset("Nmi"), &["ResetType"])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("ResetType"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_valid_value() {
        let mock = MockTransport::new().with_status(TARGET, StatusCode::NO_CONTENT, json!(null));
        let state = ResourceState::new(mock.clone().into_client(), Default::default(), Vec::new(), Some("\"1\""));
        let action: ActionDescriptor = serde_json::from_value(json!({
            "target": TARGET,
            "ResetType@Redfish.AllowableValues": ["On", "ForceOff"]
        }))
        .unwrap();

        let task = invoke(&state, Some(&action), "Reset", reset("On"), &["ResetType"])
            .await
            .unwrap();
        assert!(task.is_none());
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, Some(json!({"ResetType": "On"})));
        assert_eq!(requests[0].headers.get(IF_MATCH).unwrap(), "\"1\"");
    }

    #[tokio::test]
    async fn test_action_info_fetched_once() {
        let mock = MockTransport::new()
            .with_json(
                INFO,
                json!({
                    "@odata.id": INFO,
                    "Id": "ResetActionInfo",
                    "Name": "Reset Action Info",
                    "Parameters": [{
                        "Name": "ResetType",
                        "Required": true,
                        "DataType": "String",
                        "AllowableValues": ["On", "GracefulShutdown"]
                    }]
                }),
            )
            .with_status(TARGET, StatusCode::NO_CONTENT, json!(null));
        let state = ResourceState::new(mock.clone().into_client(), Default::default(), Vec::new(), None);
        let action: ActionDescriptor = serde_json::from_value(json!({
            "target": TARGET,
            "@Redfish.ActionInfo": INFO
        }))
        .unwrap();

        let err = invoke(&state, Some(&action), "Reset", reset("ForceOff"), &["ResetType"])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        invoke(&state, Some(&action), "Reset", reset("GracefulShutdown"), &["ResetType"])
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests.iter().filter(|r| r.uri == INFO).count(), 1);
        assert_eq!(requests.iter().filter(|r| r.uri == TARGET).count(), 1);
    }

    #[tokio::test]
    async fn test_unsupported() {
        let mock = MockTransport::new();
        let state = ResourceState::new(mock.clone().into_client(), Default::default(), Vec::new(), None);
        let err = invoke(&state, None, "ResetBios", Map::new(), &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        let empty = ActionDescriptor::default();
        let err = invoke(&state, Some(&empty), "ResetBios", Map::new(), &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert!(mock.requests().is_empty());
    }
}
