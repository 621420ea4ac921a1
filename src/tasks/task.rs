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


//! Tasks tracking long-running operations.

use chrono::{DateTime, FixedOffset};

use super::protocol::{self, TaskPayload, TaskState};
use crate::common::{api, Collected, Health, Links, Message};
use crate::Result;

redfish_resource! {
    #[doc = "A long-running operation executed by the service."]
    Task = protocol::Task
}

impl Task {
    transparent_property! {
        #[doc = "When the task finished (if it did)."]
        end_time: Option<DateTime<FixedOffset>>
    }

    transparent_property! {
        #[doc = "Estimated duration as an ISO 8601 duration (if known)."]
        estimated_duration: ref Option<String>
    }

    transparent_property! {
        #[doc = "Whether the service hides the payload of the task."]
        hide_payload: bool
    }

    /// Messages produced by the task.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.inner.messages
    }

    /// Request that created the task (unless hidden).
    #[inline]
    pub fn payload(&self) -> Option<&TaskPayload> {
        self.inner.payload.as_ref()
    }

    transparent_property! {
        #[doc = "Completion percentage (if reported)."]
        percent_complete: Option<u32>
    }

    transparent_property! {
        #[doc = "When the task started (if it did)."]
        start_time: Option<DateTime<FixedOffset>>
    }

    /// URI of the task monitor (if any).
    #[inline]
    pub fn task_monitor(&self) -> Option<&str> {
        self.inner.task_monitor.as_deref()
    }

    transparent_property! {
        #[doc = "Current state of the task."]
        task_state: Option<TaskState>
    }

    transparent_property! {
        #[doc = "Health of the task."]
        task_status: Option<Health>
    }

    /// Whether the task reached a final state.
    pub fn is_finished(&self) -> bool {
        self.inner
            .task_state
            .map(|state| state.is_terminal())
            .unwrap_or(false)
    }

    /// Resources created by the task.
    #[inline]
    pub fn created_resources(&self) -> &Links {
        &self.inner.links.created_resources
    }

    /// Fetch the sub-tasks of this task.
    pub async fn sub_tasks(&self) -> Result<Collected<Task>> {
        match self.inner.sub_tasks {
            Some(ref link) => api::get_collection(self.state.client(), link.as_str()).await,
            None => Ok(Collected::new()),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::Task;
    use crate::common::mock::MockTransport;
    use crate::common::Health;
    use crate::tasks::TaskState;

    const URI: &str = "/redfish/v1/TaskService/Tasks/545";

    #[tokio::test]
    async fn test_task() {
        let mock = MockTransport::new()
            .with_json(
                URI,
                json!({
                    "@odata.type": "#Task.v1_7_1.Task",
                    "@odata.id": URI,
                    "Id": "545",
                    "Name": "Task 545",
                    "TaskMonitor": "/taskmon/545",
                    "TaskState": "Completed",
                    "StartTime": "2012-03-07T14:44:00+06:00",
                    "EndTime": "2012-03-07T14:45:00+06:00",
                    "TaskStatus": "OK",
                    "PercentComplete": 100,
                    "HidePayload": false,
                    "Payload": {
                        "HttpHeaders": ["Content-Type: application/json"],
                        "HttpOperation": "POST",
                        "JsonBody": "{}",
                        "TargetUri": "/redfish/v1/Systems/1/Actions/ComputerSystem.Reset"
                    },
                    "SubTasks": {"@odata.id": "/redfish/v1/TaskService/Tasks/545/SubTasks"},
                    "Links": {
                        "CreatedResources": [{"@odata.id": "/redfish/v1/Systems/1/LogServices/Dump/Entries/1"}]
                    },
                    "Messages": [
                        {
                            "MessageId": "Base.1.0.Success",
                            "Message": "Successfully Completed Request",
                            "Severity": "OK"
                        }
                    ]
                }),
            )
            .with_json(
                "/redfish/v1/TaskService/Tasks/545/SubTasks",
                json!({
                    "Members": [{"@odata.id": "/redfish/v1/TaskService/Tasks/545/SubTasks/1"}]
                }),
            )
            .with_json(
                "/redfish/v1/TaskService/Tasks/545/SubTasks/1",
                json!({
                    "@odata.id": "/redfish/v1/TaskService/Tasks/545/SubTasks/1",
                    "Id": "1",
                    "Name": "Sub task",
                    "TaskState": "Running"
                }),
            );
        let client = mock.into_client();

        let task = Task::load(&client, URI).await.unwrap();
        assert_eq!(task.id(), "545");
        assert_eq!(task.task_state(), Some(TaskState::Completed));
        assert_eq!(task.task_status(), Some(Health::Ok));
        assert_eq!(task.percent_complete(), Some(100));
        assert_eq!(task.task_monitor(), Some("/taskmon/545"));
        assert!(task.is_finished());
        assert!(task.start_time().is_some());
        assert_eq!(task.payload().unwrap().http_operation.as_deref(), Some("POST"));
        assert_eq!(task.messages().len(), 1);
        assert_eq!(
            task.created_resources().to_strings(),
            vec!["/redfish/v1/Systems/1/LogServices/Dump/Entries/1"]
        );

        let sub = task.sub_tasks().await.unwrap();
        assert!(sub.is_complete());
        assert_eq!(sub.items.len(), 1);
        assert_eq!(sub.items[0].task_state(), Some(TaskState::Running));
        assert!(!sub.items[0].is_finished());
    }
}
