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


//! Task service.

use chrono::{DateTime, FixedOffset};

use super::protocol::{self, OverWritePolicy};
use super::Task;
use crate::common::{api, Collected};
use crate::Result;

redfish_resource! {
    #[doc = "Service tracking long-running operations."]
    TaskService = protocol::TaskService
}

impl TaskService {
    transparent_property! {
        #[doc = "What happens to completed tasks when the limit is reached."]
        completed_task_over_write_policy: Option<OverWritePolicy>
    }

    transparent_property! {
        #[doc = "Current date and time of the service."]
        date_time: Option<DateTime<FixedOffset>>
    }

    transparent_property! {
        #[doc = "Whether state changes of tasks produce events."]
        life_cycle_event_on_task_state_change: bool
    }

    transparent_property! {
        #[doc = "Whether the service is enabled."]
        service_enabled: Option<bool>
    }

    transparent_property! {
        #[doc = "Minutes after which completed tasks are deleted."]
        task_auto_delete_timeout_minutes: Option<u32>
    }

    /// Fetch all tasks.
    pub async fn tasks(&self) -> Result<Collected<Task>> {
        api::get_linked_collection(self.state.client(), self.inner.tasks.as_ref()).await
    }
}
