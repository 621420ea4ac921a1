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


//! Entry point of a Redfish service.

use super::protocol::{self, ProtocolFeatures};
use crate::chassis::{Cable, Chassis};
use crate::common::{api, Collected, Link};
use crate::composition::{CompositionService, ResourceBlock};
use crate::fabrics::Fabric;
use crate::managers::Manager;
use crate::systems::ComputerSystem;
use crate::tasks::{Task, TaskService};
use crate::Result;

redfish_resource! {
    #[doc = "Root of a Redfish service."]
    #[doc = ""]
    #[doc = "Use [Client::service_root](../struct.Client.html#method.service_root) to fetch it."]
    ServiceRoot = protocol::ServiceRoot
}

impl ServiceRoot {
    transparent_property! {
        #[doc = "Product name of the service (if provided)."]
        product: ref Option<String>
    }

    transparent_property! {
        #[doc = "Optional protocol features of the service (if provided)."]
        protocol_features_supported: ref Option<ProtocolFeatures>
    }

    transparent_property! {
        #[doc = "Version of the Redfish protocol implemented."]
        redfish_version: ref Option<String>
    }

    transparent_property! {
        #[doc = "Vendor-assigned identification of the service (if provided)."]
        service_identification: ref Option<String>
    }

    transparent_property! {
        #[doc = "UUID of the service."]
        uuid: ref Option<String>
    }

    transparent_property! {
        #[doc = "Vendor of the service (if provided)."]
        vendor: ref Option<String>
    }

    /// Computer systems of the service.
    pub async fn systems(&self) -> Result<Collected<ComputerSystem>> {
        api::get_linked_collection(self.state.client(), self.inner.systems.as_ref()).await
    }

    /// Chassis of the service.
    pub async fn chassis(&self) -> Result<Collected<Chassis>> {
        api::get_linked_collection(self.state.client(), self.inner.chassis.as_ref()).await
    }

    /// Managers of the service.
    pub async fn managers(&self) -> Result<Collected<Manager>> {
        api::get_linked_collection(self.state.client(), self.inner.managers.as_ref()).await
    }

    /// Cables of the service.
    pub async fn cables(&self) -> Result<Collected<Cable>> {
        api::get_linked_collection(self.state.client(), self.inner.cables.as_ref()).await
    }

    /// Fabrics of the service.
    pub async fn fabrics(&self) -> Result<Collected<Fabric>> {
        api::get_linked_collection(self.state.client(), self.inner.fabrics.as_ref()).await
    }

    /// Composition service (if the service supports composability).
    pub async fn composition_service(&self) -> Result<Option<CompositionService>> {
        api::get_link(self.state.client(), self.inner.composition_service.as_ref()).await
    }

    /// Resource blocks available for composition.
    ///
    /// Uses the link of the service root, falling back to the one of the composition service.
    pub async fn resource_blocks(&self) -> Result<Collected<ResourceBlock>> {
        if self.inner.resource_blocks.is_some() {
            return api::get_linked_collection(
                self.state.client(),
                self.inner.resource_blocks.as_ref(),
            )
            .await;
        }

        match self.composition_service().await? {
            Some(service) => service.resource_blocks().await,
            None => Ok(Collected::new()),
        }
    }

    /// Task service (if provided).
    pub async fn task_service(&self) -> Result<Option<TaskService>> {
        api::get_link(self.state.client(), self.inner.tasks.as_ref()).await
    }

    /// Tasks known to the task service.
    pub async fn tasks(&self) -> Result<Collected<Task>> {
        match self.task_service().await? {
            Some(service) => service.tasks().await,
            None => Ok(Collected::new()),
        }
    }

    /// Manager that provides this service (if known).
    pub async fn manager_providing_service(&self) -> Result<Option<Manager>> {
        api::get_link(
            self.state.client(),
            self.inner.links.manager_providing_service.as_ref(),
        )
        .await
    }

    /// Link to the account service.
    #[inline]
    pub fn account_service_link(&self) -> Option<&Link> {
        self.inner.account_service.as_ref()
    }

    /// Link to the event service.
    #[inline]
    pub fn event_service_link(&self) -> Option<&Link> {
        self.inner.event_service.as_ref()
    }

    /// Link to the power equipment.
    #[inline]
    pub fn power_equipment_link(&self) -> Option<&Link> {
        self.inner.power_equipment.as_ref()
    }

    /// Link to the collection of registries.
    #[inline]
    pub fn registries_link(&self) -> Option<&Link> {
        self.inner.registries.as_ref()
    }

    /// Link to the session service.
    #[inline]
    pub fn session_service_link(&self) -> Option<&Link> {
        self.inner.session_service.as_ref()
    }

    /// Link to the collection of sessions.
    #[inline]
    pub fn sessions_link(&self) -> Option<&Link> {
        self.inner.links.sessions.as_ref()
    }

    /// Link to the update service.
    #[inline]
    pub fn update_service_link(&self) -> Option<&Link> {
        self.inner.update_service.as_ref()
    }
}
