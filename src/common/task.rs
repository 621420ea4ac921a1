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

//! Handles of asynchronous operations.

use chrono::{DateTime, Duration, Utc};
use reqwest::header::{HeaderMap, LOCATION, RETRY_AFTER};
use reqwest::StatusCode;
use serde_json::Value;

use super::api;
use crate::client::Client;
use crate::tasks::Task;
use crate::transport::Response;
use crate::Result;

/// A handle of an operation the service accepted asynchronously.
///
/// The handle does not poll on its own, use [poll](#method.poll) when appropriate.
#[derive(Debug, Clone)]
pub struct TaskMonitor {
    client: Client,
    uri: String,
    retry_after: Option<DateTime<Utc>>,
    task: Option<Task>,
}

/// Result of polling a task monitor.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum TaskProgress {
    /// The operation is still running.
    Pending {
        /// Current representation of the task (if returned).
        task: Option<Task>,
        /// Time after which the monitor should be polled again (if requested).
        retry_after: Option<DateTime<Utc>>,
    },
    /// The operation is finished.
    Completed {
        /// Status of the final response.
        status: StatusCode,
        /// Body of the final response (if any).
        body: Option<Value>,
    },
}

impl TaskMonitor {
    /// Build a monitor from a `202 Accepted` response.
    ///
    /// Returns `None` when the response gives no way to track the operation.
    pub(crate) fn from_response(client: Client, resp: &Response) -> Result<Option<TaskMonitor>> {
        let task = task_from_body(&client, &resp.body);
        let location = resp
            .headers
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(String::from)
            .or_else(|| {
                task.as_ref()
                    .and_then(|task| task.task_monitor())
                    .map(String::from)
            });

        match location {
            Some(uri) => {
                debug!("Operation accepted, task monitor {}", uri);
                Ok(Some(TaskMonitor {
                    client,
                    uri,
                    retry_after: retry_after(&resp.headers, Utc::now()),
                    task,
                }))
            }
            None => {
                warn!("Operation accepted without a task monitor location");
                Ok(None)
            }
        }
    }

    /// URI to poll.
    #[inline]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Time before which polling is pointless (if the service said so).
    #[inline]
    pub fn retry_after(&self) -> Option<DateTime<Utc>> {
        self.retry_after
    }

    /// Task representation returned with the initial response (if any).
    #[inline]
    pub fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    /// Poll the monitor once.
    pub async fn poll(&self) -> Result<TaskProgress> {
        let resp = self.client.fetch(&self.uri).await?;
        if resp.status == StatusCode::ACCEPTED {
            trace!("Task monitor {} is still pending", self.uri);
            Ok(TaskProgress::Pending {
                task: task_from_body(&self.client, &resp.body),
                retry_after: retry_after(&resp.headers, Utc::now()),
            })
        } else {
            debug!("Task monitor {} finished with {}", self.uri, resp.status);
            let body = if resp.body.is_empty() {
                None
            } else {
                serde_json::from_slice(&resp.body).ok()
            };
            Ok(TaskProgress::Completed {
                status: resp.status,
                body,
            })
        }
    }
}

impl TaskProgress {
    /// Whether the operation is finished.
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskProgress::Completed { .. })
    }
}

fn task_from_body(client: &Client, body: &[u8]) -> Option<Task> {
    if body.is_empty() {
        return None;
    }

    let value: Value = serde_json::from_slice(body).ok()?;
    let object = value.as_object()?;
    if !object.contains_key("@odata.id") && !object.contains_key("TaskState") {
        return None;
    }

    let resp = Response {
        status: StatusCode::OK,
        headers: HeaderMap::new(),
        body: body.to_vec(),
    };
    match api::decode::<Task>(client, resp) {
        Ok(task) => Some(task),
        Err(err) => {
            debug!("Ignoring a task representation that cannot be decoded: {}", err);
            None
        }
    }
}

fn retry_after(headers: &HeaderMap, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| parse_retry_after(value, now))
}

/// Parse `Retry-After`: either a number of seconds or an HTTP date.
pub(crate) fn parse_retry_after(value: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<i64>() {
        return Duration::try_seconds(seconds).and_then(|delay| now.checked_add_signed(delay));
    }

    DateTime::parse_from_rfc2822(value)
        .map(|date| date.with_timezone(&Utc))
        .ok()
}
