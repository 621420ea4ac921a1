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

//! Settings redirection and apply times.
//!
//! Some resources separate the current state from the pending one: reads go to the resource
//! itself, writes go to the object named in `@Redfish.Settings`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::entity::header_etag;
use super::update::{after_patch, differs, not_refreshed};
use super::{Link, Message, Resource, TaskMonitor};
use crate::{Error, ErrorKind, Result};

const APPLY_TIME: &str = "@Redfish.SettingsApplyTime";

protocol_enum! {
    /// When the service applies pending settings.
    enum SettingsApplyTime = Unknown {
        /// Apply immediately, may reset the host.
        Immediate = "Immediate",
        /// Apply on the next reset.
        OnReset = "OnReset",
        /// Apply during the maintenance window.
        AtMaintenanceWindowStart = "AtMaintenanceWindowStart",
        /// Apply if a reset happens during the maintenance window.
        InMaintenanceWindowOnReset = "InMaintenanceWindowOnReset",
        /// A value this crate does not know.
        Unknown = ""
    }
}

/// Settings redirection of a resource (`@Redfish.Settings`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// ETag of the resource after the settings were applied.
    #[serde(rename = "ETag", default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Resource holding the maintenance window.
    #[serde(
        rename = "MaintenanceWindowResource",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub maintenance_window_resource: Option<Link>,
    /// Messages about the last application of settings.
    #[serde(rename = "Messages", default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
    /// Where writes should go.
    #[serde(rename = "SettingsObject", default, skip_serializing_if = "Option::is_none")]
    pub settings_object: Option<Link>,
    /// Apply times a client may request.
    #[serde(
        rename = "SupportedApplyTimes",
        default,
        deserialize_with = "crate::utils::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub supported_apply_times: Vec<SettingsApplyTime>,
    /// When the settings were last applied.
    #[serde(rename = "Time", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Apply times a client may try for a resource.
///
/// Returns the advertised list or, when nothing is advertised, the four standard values. The
/// fallback is a guess: the service may reject any of these values.
pub fn allowed_apply_times(settings: Option<&Settings>) -> Vec<SettingsApplyTime> {
    match settings {
        Some(settings) if !settings.supported_apply_times.is_empty() => {
            settings.supported_apply_times.clone()
        }
        _ => vec![
            SettingsApplyTime::Immediate,
            SettingsApplyTime::OnReset,
            SettingsApplyTime::AtMaintenanceWindowStart,
            SettingsApplyTime::InMaintenanceWindowOnReset,
        ],
    }
}

/// Apply times the service advertised for the record (possibly none).
pub(crate) fn advertised_apply_times<T: Resource>(record: &T) -> &[SettingsApplyTime] {
    record
        .settings()
        .map(|settings| settings.supported_apply_times.as_slice())
        .unwrap_or(&[])
}

/// URI that writes to the record must go to.
pub(crate) fn write_target<T: Resource>(record: &T) -> String {
    record
        .settings()
        .and_then(|settings| settings.settings_object.as_ref())
        .filter(|link| !link.is_empty())
        .map(|link| link.to_string())
        .unwrap_or_else(|| record.entity().odata_id.clone())
}

/// Reject an apply time the record does not advertise.
pub(crate) fn check_apply_time<T: Resource>(
    record: &T,
    apply_time: Option<SettingsApplyTime>,
) -> Result<()> {
    let advertised = advertised_apply_times(record);
    match apply_time {
        Some(value) if !advertised.is_empty() && !advertised.contains(&value) => {
            Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "apply time {} is not supported by {} {}, expected one of {:?}",
                    value,
                    T::NAME,
                    record.entity().odata_id,
                    advertised
                ),
            ))
        }
        _ => Ok(()),
    }
}

/// Add the apply time envelope to a PATCH body.
pub(crate) fn with_apply_time(mut body: Map<String, Value>, apply_time: Option<SettingsApplyTime>) -> Value {
    if let Some(value) = apply_time {
        let _ = body.insert(APPLY_TIME.to_string(), json!({ "ApplyTime": value }));
    }
    Value::Object(body)
}

/// Write an attribute map nested under `envelope` (e.g. `Attributes` or `Boot`).
///
/// Only keys that differ from the last observed payload are sent, plus keys starting with
/// `always_prefix`. The write target is read first to get its current ETag.
pub(crate) async fn update_attributes<T: Resource>(
    record: &mut T,
    envelope: &str,
    attributes: &Map<String, Value>,
    always_prefix: Option<&str>,
    apply_time: Option<SettingsApplyTime>,
) -> Result<Option<TaskMonitor>> {
    let raw = record.state().raw().ok_or_else(|| not_refreshed(record))?;
    let original: Value = serde_json::from_slice(raw)?;
    let original = original
        .get(envelope)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let mut changes = Map::new();
    for (key, value) in attributes {
        let always = always_prefix
            .map(|prefix| key.starts_with(prefix))
            .unwrap_or(false);
        if always || differs(original.get(key), Some(value)) {
            let _ = changes.insert(key.clone(), value.clone());
        }
    }

    if changes.is_empty() {
        debug!(
            "No changes to {} of {} {}",
            envelope,
            T::NAME,
            record.entity().odata_id
        );
        return Ok(None);
    }
    check_apply_time(record, apply_time)?;

    let target = write_target(record);
    let client = record.state().client().clone();
    let current = client.fetch(&target).await?;
    let etag = header_etag(&current.headers).or_else(|| {
        serde_json::from_slice::<Value>(&current.body)
            .ok()
            .and_then(|body| {
                body.get("@odata.etag")
                    .and_then(Value::as_str)
                    .map(String::from)
            })
    });

    let mut patch = Map::new();
    let _ = patch.insert(envelope.to_string(), Value::Object(changes));
    let body = with_apply_time(patch.clone(), apply_time);
    trace!("Updating {} of {} at {}: {}", envelope, T::NAME, target, body);

    let (resp, task) = client
        .patch_with_task(&target, &body, client.default_headers(etag.as_deref()))
        .await?;
    after_patch(record, &target, &resp, task, &Value::Object(patch))
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{allowed_apply_times, Settings, SettingsApplyTime};

    #[test]
    fn test_settings_decode() {
        let settings: Settings = serde_json::from_value(json!({
            "@odata.type": "#Settings.v1_3_5.Settings",
            "ETag": "9A12",
            "SettingsObject": {"@odata.id": "/redfish/v1/Systems/1/Bios/Settings"},
            "SupportedApplyTimes": ["OnReset", "InMaintenanceWindowOnReset", "Later"],
            "Time": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(settings.etag.as_deref(), Some("9A12"));
        assert_eq!(
            settings.settings_object.as_ref().unwrap().as_str(),
            "/redfish/v1/Systems/1/Bios/Settings"
        );
        assert_eq!(
            settings.supported_apply_times,
            vec![
                SettingsApplyTime::OnReset,
                SettingsApplyTime::InMaintenanceWindowOnReset,
                SettingsApplyTime::Unknown
            ]
        );
        assert_eq!(
            allowed_apply_times(Some(&settings)),
            settings.supported_apply_times
        );
    }

    #[test]
    fn test_allowed_apply_times_fallback() {
        assert_eq!(allowed_apply_times(None).len(), 4);
        let settings: Settings = serde_json::from_value(json!({"SupportedApplyTimes": null})).unwrap();
        assert_eq!(
            allowed_apply_times(Some(&settings)),
            vec![
                SettingsApplyTime::Immediate,
                SettingsApplyTime::OnReset,
                SettingsApplyTime::AtMaintenanceWindowStart,
                SettingsApplyTime::InMaintenanceWindowOnReset,
            ]
        );
    }
}
