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


//! Task wire structures.

#![allow(missing_docs)]

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{Entity, Health, Link, Links, Message};
use crate::utils::null_as_default;

protocol_enum! {
    #[doc = "State of a task."]
    enum TaskState = Unknown {
        New = "New",
        Starting = "Starting",
        Running = "Running",
        Suspended = "Suspended",
        Interrupted = "Interrupted",
        Pending = "Pending",
        Stopping = "Stopping",
        Completed = "Completed",
        Killed = "Killed",
        Exception = "Exception",
        Service = "Service",
        Cancelling = "Cancelling",
        Cancelled = "Cancelled",
        Unknown = ""
    }
}

impl TaskState {
    /// Whether the task will not change its state any more.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Completed | TaskState::Killed | TaskState::Exception | TaskState::Cancelled
        )
    }
}

/// Request that created a task.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub http_headers: Vec<String>,
    #[serde(default)]
    pub http_operation: Option<String>,
    #[serde(default)]
    pub json_body: Option<String>,
    #[serde(default, rename = "TargetUri")]
    pub target_uri: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskLinks {
    #[serde(default)]
    pub created_resources: Links,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub end_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub estimated_duration: Option<String>,
    #[serde(default)]
    pub hide_payload: bool,
    #[serde(default)]
    pub links: TaskLinks,
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub payload: Option<TaskPayload>,
    #[serde(default)]
    pub percent_complete: Option<u32>,
    #[serde(default)]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub sub_tasks: Option<Link>,
    #[serde(default)]
    pub task_monitor: Option<String>,
    #[serde(default)]
    pub task_state: Option<TaskState>,
    #[serde(default)]
    pub task_status: Option<Health>,
}

protocol_enum! {
    #[doc = "What happens when the task limit is reached."]
    enum OverWritePolicy = Unknown {
        Manual = "Manual",
        Oldest = "Oldest",
        Unknown = ""
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskService {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub completed_task_over_write_policy: Option<OverWritePolicy>,
    #[serde(default)]
    pub date_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub life_cycle_event_on_task_state_change: bool,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub service_enabled: Option<bool>,
    #[serde(default)]
    pub tasks: Option<Link>,
    #[serde(default)]
    pub task_auto_delete_timeout_minutes: Option<u32>,
}
