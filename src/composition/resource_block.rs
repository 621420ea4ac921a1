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


//! Resource blocks.

use super::protocol::{self, CompositionStatus, PoolType, ResourceBlockType};
use crate::chassis::Chassis;
use crate::common::update::update_resource;
use crate::common::{api, Collected, Links, Status, TaskMonitor};
use crate::fabrics::Zone;
use crate::systems::{ComputerSystem, Memory};
use crate::Result;

const MUTABLE_FIELDS: &[&str] = &["Client", "Pool"];

redfish_resource! {
    #[doc = "A resource block: the smallest unit of composition."]
    ResourceBlock = protocol::ResourceBlock
}

impl ResourceBlock {
    transparent_property! {
        #[doc = "Client the block is assigned to (if any)."]
        client: ref Option<String>
    }

    update_field! {
        #[doc = "Assign the block to a client."]
        set_client, with_client -> client: optional String
    }

    transparent_property! {
        #[doc = "Composition status."]
        composition_status: ref CompositionStatus
    }

    transparent_property! {
        #[doc = "Pool the block belongs to."]
        pool: Option<PoolType>
    }

    update_field! {
        #[doc = "Move the block to another pool."]
        set_pool, with_pool -> pool: optional PoolType
    }

    transparent_property! {
        #[doc = "Kinds of resources in the block."]
        resource_block_type: ref Vec<ResourceBlockType>
    }

    transparent_property! {
        #[doc = "Status and health."]
        status: ref Status
    }

    /// Send changes of the mutable fields to the service.
    pub async fn update(&mut self) -> Result<Option<TaskMonitor>> {
        update_resource(self, MUTABLE_FIELDS, None).await
    }

    /// Computer systems in the block.
    pub async fn computer_systems(&self) -> Collected<ComputerSystem> {
        api::get_objects(self.state.client(), &self.inner.computer_systems).await
    }

    /// Memory modules in the block.
    pub async fn memory(&self) -> Collected<Memory> {
        api::get_objects(self.state.client(), &self.inner.memory).await
    }

    /// Chassis containing the block.
    pub async fn chassis(&self) -> Collected<Chassis> {
        api::get_objects(self.state.client(), &self.inner.links.chassis).await
    }

    /// Systems composed from the block.
    pub async fn linked_computer_systems(&self) -> Collected<ComputerSystem> {
        api::get_objects(self.state.client(), &self.inner.links.computer_systems).await
    }

    /// Zones the block belongs to.
    pub async fn zones(&self) -> Collected<Zone> {
        api::get_objects(self.state.client(), &self.inner.links.zones).await
    }

    /// Drives in the block.
    #[inline]
    pub fn drives(&self) -> &Links {
        &self.inner.drives
    }

    /// Ethernet interfaces in the block.
    #[inline]
    pub fn ethernet_interfaces(&self) -> &Links {
        &self.inner.ethernet_interfaces
    }

    /// Network interfaces in the block.
    #[inline]
    pub fn network_interfaces(&self) -> &Links {
        &self.inner.network_interfaces
    }

    /// Processors in the block.
    #[inline]
    pub fn processors(&self) -> &Links {
        &self.inner.processors
    }

    /// Simple storage controllers in the block.
    #[inline]
    pub fn simple_storage(&self) -> &Links {
        &self.inner.simple_storage
    }

    /// Storage subsystems in the block.
    #[inline]
    pub fn storage(&self) -> &Links {
        &self.inner.storage
    }

    /// Blocks consuming this one.
    #[inline]
    pub fn consuming_resource_blocks(&self) -> &Links {
        &self.inner.links.consuming_resource_blocks
    }

    /// Blocks supplying this one.
    #[inline]
    pub fn supplying_resource_blocks(&self) -> &Links {
        &self.inner.links.supplying_resource_blocks
    }
}
