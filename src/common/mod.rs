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

//! Types and traits shared by all resources.

use async_trait::async_trait;

use crate::Result;

pub(crate) mod action;
pub(crate) mod api;
mod entity;
#[cfg(test)]
pub(crate) mod mock;
pub(crate) mod settings;
mod task;
mod types;
pub(crate) mod update;

pub use self::action::ActionDescriptor;
pub use self::api::{Collected, Collection};
pub use self::entity::{Entity, Resource, ResourceState};
pub use self::settings::{allowed_apply_times, Settings, SettingsApplyTime};
pub use self::task::{TaskMonitor, TaskProgress};
pub use self::types::{
    Health, IndicatorLed, Link, Links, Message, PowerState, ResetType, State, Status,
};

/// Trait representing something that can be refreshed.
#[async_trait]
pub trait Refresh {
    /// Refresh the resource representation.
    async fn refresh(&mut self) -> Result<()>;
}
