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


//! Computer systems.

use serde_json::{Map, Value};

use super::protocol::{
    self, Boot, DecommissionParameters, ExportConfigurationParameters, MemorySummary, PowerMode,
    PowerRestorePolicy, ProcessorSummary, ResourceBlockChange, SystemType,
};
use super::{Bios, Memory};
use crate::chassis::Chassis;
use crate::common::action::{self, to_parameters};
use crate::common::settings::{self, update_attributes};
use crate::common::update::update_resource;
use crate::common::{
    api, Collected, IndicatorLed, Link, Links, PowerState, ResetType, SettingsApplyTime, Status,
    TaskMonitor,
};
use crate::composition::ResourceBlock;
use crate::managers::Manager;
use crate::Result;

const MUTABLE_FIELDS: &[&str] = &[
    "AssetTag",
    "HostName",
    "IndicatorLED",
    "LocationIndicatorActive",
    "PowerCycleDelaySeconds",
    "PowerMode",
    "PowerOffDelaySeconds",
    "PowerOnDelaySeconds",
    "PowerRestorePolicy",
];

redfish_resource! {
    #[doc = "A computer system: a server, a partition or a virtual machine."]
    ComputerSystem = protocol::ComputerSystem, settings = settings
}

impl ComputerSystem {
    transparent_property! {
        #[doc = "Asset tag (if set)."]
        asset_tag: ref Option<String>
    }

    update_field! {
        #[doc = "Set the asset tag."]
        set_asset_tag, with_asset_tag -> asset_tag: optional String
    }

    transparent_property! {
        #[doc = "Version of the BIOS (if known)."]
        bios_version: ref Option<String>
    }

    /// Boot settings (if reported).
    #[inline]
    pub fn boot(&self) -> Option<&Boot> {
        self.inner.boot.as_ref()
    }

    transparent_property! {
        #[doc = "Host name as seen by the operating system (if known)."]
        host_name: ref Option<String>
    }

    update_field! {
        #[doc = "Set the host name."]
        set_host_name, with_host_name -> host_name: optional String
    }

    transparent_property! {
        #[doc = "State of the indicator LED (deprecated in favor of `location_indicator_active`)."]
        indicator_led: Option<IndicatorLed>
    }

    update_field! {
        #[doc = "Set the state of the indicator LED."]
        set_indicator_led, with_indicator_led -> indicator_led: optional IndicatorLed
    }

    transparent_property! {
        #[doc = "Whether the location indicator is active."]
        location_indicator_active: Option<bool>
    }

    update_field! {
        #[doc = "Turn the location indicator on or off."]
        set_location_indicator_active, with_location_indicator_active -> location_indicator_active: optional bool
    }

    transparent_property! {
        #[doc = "Manufacturer (if known)."]
        manufacturer: ref Option<String>
    }

    transparent_property! {
        #[doc = "Summary of the installed memory."]
        memory_summary: ref Option<MemorySummary>
    }

    transparent_property! {
        #[doc = "Model (if known)."]
        model: ref Option<String>
    }

    transparent_property! {
        #[doc = "Vendor-specific extensions, as received."]
        oem: ref Option<Value>
    }

    transparent_property! {
        #[doc = "Part number (if known)."]
        part_number: ref Option<String>
    }

    transparent_property! {
        #[doc = "Delay in seconds before a power cycle."]
        power_cycle_delay_seconds: Option<f64>
    }

    update_field! {
        #[doc = "Set the delay before a power cycle."]
        set_power_cycle_delay_seconds, with_power_cycle_delay_seconds -> power_cycle_delay_seconds: optional f64
    }

    transparent_property! {
        #[doc = "Power mode."]
        power_mode: Option<PowerMode>
    }

    update_field! {
        #[doc = "Set the power mode."]
        set_power_mode, with_power_mode -> power_mode: optional PowerMode
    }

    transparent_property! {
        #[doc = "Delay in seconds before powering off."]
        power_off_delay_seconds: Option<f64>
    }

    update_field! {
        #[doc = "Set the delay before powering off."]
        set_power_off_delay_seconds, with_power_off_delay_seconds -> power_off_delay_seconds: optional f64
    }

    transparent_property! {
        #[doc = "Delay in seconds before powering on."]
        power_on_delay_seconds: Option<f64>
    }

    update_field! {
        #[doc = "Set the delay before powering on."]
        set_power_on_delay_seconds, with_power_on_delay_seconds -> power_on_delay_seconds: optional f64
    }

    transparent_property! {
        #[doc = "What happens when power is restored."]
        power_restore_policy: Option<PowerRestorePolicy>
    }

    update_field! {
        #[doc = "Set what happens when power is restored."]
        set_power_restore_policy, with_power_restore_policy -> power_restore_policy: optional PowerRestorePolicy
    }

    transparent_property! {
        #[doc = "Current power state."]
        power_state: Option<PowerState>
    }

    transparent_property! {
        #[doc = "Summary of the processors."]
        processor_summary: ref Option<ProcessorSummary>
    }

    transparent_property! {
        #[doc = "Serial number (if known)."]
        serial_number: ref Option<String>
    }

    transparent_property! {
        #[doc = "Stock-keeping unit (if known)."]
        sku: ref Option<String>
    }

    transparent_property! {
        #[doc = "Status and health."]
        status: Status
    }

    transparent_property! {
        #[doc = "Type of the system."]
        system_type: Option<SystemType>
    }

    transparent_property! {
        #[doc = "UUID of the system."]
        uuid: ref Option<String>
    }

    /// Apply times the caller may request for updates.
    ///
    /// Falls back to the four standard values when the service advertises nothing.
    pub fn allowed_apply_times(&self) -> Vec<SettingsApplyTime> {
        settings::allowed_apply_times(self.inner.settings.as_ref())
    }

    /// Apply times the service advertised (possibly none).
    pub fn advertised_apply_times(&self) -> &[SettingsApplyTime] {
        settings::advertised_apply_times(self)
    }

    /// Send changes of the mutable fields to the service.
    ///
    /// Returns a task monitor if the service applies the change asynchronously. Nothing is
    /// sent if nothing changed.
    pub async fn update(&mut self) -> Result<Option<TaskMonitor>> {
        update_resource(self, MUTABLE_FIELDS, None).await
    }

    /// Send changes of the mutable fields, requesting the given apply time.
    pub async fn update_apply_at(
        &mut self,
        apply_time: SettingsApplyTime,
    ) -> Result<Option<TaskMonitor>> {
        update_resource(self, MUTABLE_FIELDS, Some(apply_time)).await
    }

    /// Update boot attributes.
    ///
    /// Only attributes that differ from the last observed `Boot` are sent.
    pub async fn update_boot_attributes(
        &mut self,
        attributes: &Map<String, Value>,
    ) -> Result<Option<TaskMonitor>> {
        update_attributes(self, "Boot", attributes, None, None).await
    }

    /// Update boot attributes, requesting the given apply time.
    pub async fn update_boot_attributes_apply_at(
        &mut self,
        attributes: &Map<String, Value>,
        apply_time: SettingsApplyTime,
    ) -> Result<Option<TaskMonitor>> {
        update_attributes(self, "Boot", attributes, None, Some(apply_time)).await
    }

    /// Reset the system.
    pub async fn reset(&self, reset_type: ResetType) -> Result<Option<TaskMonitor>> {
        action::reset(&self.state, self.inner.actions.reset.as_ref(), "Reset", reset_type).await
    }

    /// Reset types the service accepts.
    ///
    /// Empty when the service does not restrict them. Values unknown to this crate are skipped.
    pub async fn supported_reset_types(&self) -> Result<Vec<ResetType>> {
        action::supported_reset_types(&self.state, self.inner.actions.reset.as_ref(), "Reset")
            .await
    }

    /// Reset the boot order to the default.
    pub async fn set_default_boot_order(&self) -> Result<Option<TaskMonitor>> {
        action::invoke(
            &self.state,
            self.inner.actions.set_default_boot_order.as_ref(),
            "SetDefaultBootOrder",
            Map::new(),
            &[],
        )
        .await
    }

    /// Add a resource block to a composed system.
    pub async fn add_resource_block(
        &self,
        change: &ResourceBlockChange,
    ) -> Result<Option<TaskMonitor>> {
        action::invoke(
            &self.state,
            self.inner.actions.add_resource_block.as_ref(),
            "AddResourceBlock",
            to_parameters(change)?,
            &[],
        )
        .await
    }

    /// Remove a resource block from a composed system.
    pub async fn remove_resource_block(
        &self,
        change: &ResourceBlockChange,
    ) -> Result<Option<TaskMonitor>> {
        action::invoke(
            &self.state,
            self.inner.actions.remove_resource_block.as_ref(),
            "RemoveResourceBlock",
            to_parameters(change)?,
            &[],
        )
        .await
    }

    /// Remove data from the system.
    pub async fn decommission(
        &self,
        parameters: &DecommissionParameters,
    ) -> Result<Option<TaskMonitor>> {
        action::invoke(
            &self.state,
            self.inner.actions.decommission.as_ref(),
            "Decommission",
            to_parameters(parameters)?,
            &["DecommissionTypes"],
        )
        .await
    }

    /// Export the configuration of the system.
    ///
    /// The service reports the location of the exported file once the operation finishes.
    pub async fn export_configuration(
        &self,
        parameters: &ExportConfigurationParameters,
    ) -> Result<Option<TaskMonitor>> {
        action::invoke(
            &self.state,
            self.inner.actions.export_configuration.as_ref(),
            "ExportConfiguration",
            to_parameters(parameters)?,
            &["ExportType", "Security"],
        )
        .await
    }

    /// BIOS of the system (if exposed).
    pub async fn bios(&self) -> Result<Option<Bios>> {
        api::get_link(self.state.client(), self.inner.bios.as_ref()).await
    }

    /// Memory modules of the system.
    pub async fn memory(&self) -> Result<Collected<Memory>> {
        api::get_linked_collection(self.state.client(), self.inner.memory.as_ref()).await
    }

    /// Chassis containing the system.
    pub async fn chassis(&self) -> Collected<Chassis> {
        api::get_objects(self.state.client(), &self.inner.links.chassis).await
    }

    /// Managers of the system.
    pub async fn managed_by(&self) -> Collected<Manager> {
        api::get_objects(self.state.client(), &self.inner.links.managed_by).await
    }

    /// Resource blocks composing the system.
    pub async fn resource_blocks(&self) -> Collected<ResourceBlock> {
        api::get_objects(self.state.client(), &self.inner.links.resource_blocks).await
    }

    /// Systems consuming resources of this system.
    #[inline]
    pub fn consuming_computer_systems(&self) -> &Links {
        &self.inner.links.consuming_computer_systems
    }

    /// Resources cooling the system.
    #[inline]
    pub fn cooled_by(&self) -> &Links {
        &self.inner.links.cooled_by
    }

    /// Resources powering the system.
    #[inline]
    pub fn powered_by(&self) -> &Links {
        &self.inner.links.powered_by
    }

    /// Link to the collection of Ethernet interfaces.
    #[inline]
    pub fn ethernet_interfaces_link(&self) -> Option<&Link> {
        self.inner.ethernet_interfaces.as_ref()
    }

    /// Link to the collection of log services.
    #[inline]
    pub fn log_services_link(&self) -> Option<&Link> {
        self.inner.log_services.as_ref()
    }

    /// Link to the collection of processors.
    #[inline]
    pub fn processors_link(&self) -> Option<&Link> {
        self.inner.processors.as_ref()
    }

    /// Link to the secure boot settings.
    #[inline]
    pub fn secure_boot_link(&self) -> Option<&Link> {
        self.inner.secure_boot.as_ref()
    }

    /// Link to the collection of storage subsystems.
    #[inline]
    pub fn storage_link(&self) -> Option<&Link> {
        self.inner.storage.as_ref()
    }
}
