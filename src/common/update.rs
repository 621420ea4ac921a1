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

//! Partial updates of mutable resources.

use reqwest::StatusCode;
use serde_json::{Map, Value};

use super::api::decode_inner;
use super::settings::{check_apply_time, with_apply_time, write_target};
use super::{Resource, SettingsApplyTime, TaskMonitor};
use crate::transport::Response;
use crate::{Error, ErrorKind, Result};

/// Whether two optional JSON values differ, treating `null` as absent.
pub(crate) fn differs(old: Option<&Value>, new: Option<&Value>) -> bool {
    let old = old.filter(|value| !value.is_null());
    let new = new.filter(|value| !value.is_null());
    old != new
}

/// Top-level fields from `fields` whose values differ between two objects.
///
/// A field that became absent is reported as `null`.
pub(crate) fn diff_fields(
    original: &Map<String, Value>,
    current: &Map<String, Value>,
    fields: &[&str],
) -> Map<String, Value> {
    let mut result = Map::new();
    for &field in fields {
        let new = current.get(field);
        if differs(original.get(field), new) {
            let _ = result.insert(field.to_string(), new.cloned().unwrap_or(Value::Null));
        }
    }
    result
}

pub(crate) fn not_refreshed<T: Resource>(record: &T) -> Error {
    Error::new(
        ErrorKind::PreconditionFailed,
        format!(
            "{} {} was not refreshed since the last asynchronous change",
            T::NAME,
            record.entity().odata_id
        ),
    )
}

fn to_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(Error::new(
            ErrorKind::InvalidInput,
            format!("expected a JSON object, got {}", other),
        )),
    }
}

/// Send the changed mutable fields of a record to the service.
///
/// Returns a task monitor when the service applies the change asynchronously. An unchanged
/// record results in no request at all.
pub(crate) async fn update_resource<T: Resource>(
    record: &mut T,
    fields: &[&str],
    apply_time: Option<SettingsApplyTime>,
) -> Result<Option<TaskMonitor>> {
    let raw = record.state().raw().ok_or_else(|| not_refreshed(record))?;
    let raw: Value = serde_json::from_slice(raw)?;
    let shadow = decode_inner::<T>(&raw)?;
    let original = to_object(serde_json::to_value(&shadow)?)?;
    let current = to_object(serde_json::to_value(record.inner())?)?;

    let patch = diff_fields(&original, &current, fields);
    if patch.is_empty() {
        debug!("No changes to {} {}", T::NAME, record.entity().odata_id);
        return Ok(None);
    }
    check_apply_time(record, apply_time)?;

    let target = write_target(record);
    let body = with_apply_time(patch.clone(), apply_time);
    trace!("Updating {} at {}: {}", T::NAME, target, body);

    let client = record.state().client().clone();
    let (resp, task) = client
        .patch_with_task(&target, &body, record.state().request_headers())
        .await?;
    after_patch(record, &target, &resp, task, &Value::Object(patch))
}

/// Bring the record in line with a successful PATCH.
///
/// An accepted change drops the snapshot, since the final state is unknown. A change written
/// directly to the resource is merged into the snapshot.
pub(crate) fn after_patch<T: Resource>(
    record: &mut T,
    target: &str,
    resp: &Response,
    task: Option<TaskMonitor>,
    patch: &Value,
) -> Result<Option<TaskMonitor>> {
    if resp.status == StatusCode::ACCEPTED {
        debug!("Update of {} was accepted for later", target);
        record.state_mut().invalidate();
        return Ok(task);
    }

    if target != record.entity().odata_id {
        debug!("Pending settings of {} written to {}", T::NAME, target);
        return Ok(None);
    }

    let mut raw: Value = match record.state().raw() {
        Some(raw) => serde_json::from_slice(raw)?,
        None => return Ok(None),
    };
    json_patch::merge(&mut raw, patch);
    let inner = decode_inner::<T>(&raw)?;

    let mut state = record.state().clone();
    state.set_raw(serde_json::to_vec(&raw)?);
    state.set_etag_from(&resp.headers);
    *record = T::from_parts(inner, state);
    Ok(None)
}
