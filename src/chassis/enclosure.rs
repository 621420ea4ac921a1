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


//! Chassis: enclosures, racks, blades and other physical containers.

use serde_json::Value;

use super::protocol::{self, ChassisType, EnvironmentalClass, ThermalDirection};
use super::{Cable, ThermalSubsystem};
use crate::common::action;
use crate::common::update::update_resource;
use crate::common::{
    api, Collected, IndicatorLed, Link, Links, PowerState, ResetType, SettingsApplyTime, Status,
    TaskMonitor,
};
use crate::composition::ResourceBlock;
use crate::managers::Manager;
use crate::systems::{ComputerSystem, Memory};
use crate::Result;

const MUTABLE_FIELDS: &[&str] = &[
    "AssetTag",
    "EnvironmentalClass",
    "IndicatorLED",
    "LocationIndicatorActive",
];

redfish_resource! {
    #[doc = "A physical container of other resources."]
    Chassis = protocol::Chassis
}

impl Chassis {
    transparent_property! {
        #[doc = "Asset tag (if set)."]
        asset_tag: ref Option<String>
    }

    update_field! {
        #[doc = "Set the asset tag."]
        set_asset_tag, with_asset_tag -> asset_tag: optional String
    }

    transparent_property! {
        #[doc = "Physical form of the chassis."]
        chassis_type: Option<ChassisType>
    }

    transparent_property! {
        #[doc = "Depth in millimeters."]
        depth_mm: Option<f64>
    }

    transparent_property! {
        #[doc = "ASHRAE environmental class."]
        environmental_class: Option<EnvironmentalClass>
    }

    update_field! {
        #[doc = "Set the ASHRAE environmental class."]
        set_environmental_class, with_environmental_class -> environmental_class: optional EnvironmentalClass
    }

    transparent_property! {
        #[doc = "Height in millimeters."]
        height_mm: Option<f64>
    }

    transparent_property! {
        #[doc = "Whether the chassis can be inserted or removed while powered."]
        hot_pluggable: Option<bool>
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
        #[doc = "Location of the chassis, as received."]
        location: ref Option<Value>
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
        #[doc = "Upper bound of the power consumption in watts."]
        max_power_watts: Option<f64>
    }

    transparent_property! {
        #[doc = "Lower bound of the power consumption in watts."]
        min_power_watts: Option<f64>
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
        #[doc = "Current power state."]
        power_state: Option<PowerState>
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
        status: ref Status
    }

    transparent_property! {
        #[doc = "Direction of the air flow."]
        thermal_direction: Option<ThermalDirection>
    }

    transparent_property! {
        #[doc = "UUID of the chassis."]
        uuid: ref Option<String>
    }

    transparent_property! {
        #[doc = "Hardware version (if known)."]
        version: ref Option<String>
    }

    transparent_property! {
        #[doc = "Weight in kilograms."]
        weight_kg: Option<f64>
    }

    transparent_property! {
        #[doc = "Width in millimeters."]
        width_mm: Option<f64>
    }

    /// Send changes of the mutable fields to the service.
    ///
    /// Returns a task monitor if the service applies the change asynchronously.
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

    /// Reset the chassis.
    pub async fn reset(&self, reset_type: ResetType) -> Result<Option<TaskMonitor>> {
        action::reset(&self.state, self.inner.actions.reset.as_ref(), "Reset", reset_type).await
    }

    /// Reset types the service accepts.
    pub async fn supported_reset_types(&self) -> Result<Vec<ResetType>> {
        action::supported_reset_types(&self.state, self.inner.actions.reset.as_ref(), "Reset")
            .await
    }

    /// Memory modules in the chassis.
    pub async fn memory(&self) -> Result<Collected<Memory>> {
        api::get_linked_collection(self.state.client(), self.inner.memory.as_ref()).await
    }

    /// Thermal subsystem of the chassis (if exposed).
    pub async fn thermal_subsystem(&self) -> Result<Option<ThermalSubsystem>> {
        api::get_link(self.state.client(), self.inner.thermal_subsystem.as_ref()).await
    }

    /// Cables connected to the chassis.
    pub async fn cables(&self) -> Collected<Cable> {
        api::get_objects(self.state.client(), &self.inner.links.cables).await
    }

    /// Systems in the chassis.
    pub async fn computer_systems(&self) -> Collected<ComputerSystem> {
        api::get_objects(self.state.client(), &self.inner.links.computer_systems).await
    }

    /// Chassis containing this one (if any).
    pub async fn contained_by(&self) -> Result<Option<Chassis>> {
        api::get_link(self.state.client(), self.inner.links.contained_by.as_ref()).await
    }

    /// Chassis contained in this one.
    pub async fn contains(&self) -> Collected<Chassis> {
        api::get_objects(self.state.client(), &self.inner.links.contains).await
    }

    /// Managers of the chassis.
    pub async fn managed_by(&self) -> Collected<Manager> {
        api::get_objects(self.state.client(), &self.inner.links.managed_by).await
    }

    /// Managers located in the chassis.
    pub async fn managers_in_chassis(&self) -> Collected<Manager> {
        api::get_objects(self.state.client(), &self.inner.links.managers_in_chassis).await
    }

    /// Resource blocks in the chassis.
    pub async fn resource_blocks(&self) -> Collected<ResourceBlock> {
        api::get_objects(self.state.client(), &self.inner.links.resource_blocks).await
    }

    /// Resources cooling the chassis.
    #[inline]
    pub fn cooled_by(&self) -> &Links {
        &self.inner.links.cooled_by
    }

    /// Drives in the chassis.
    #[inline]
    pub fn drives(&self) -> &Links {
        &self.inner.links.drives
    }

    /// Fans in the chassis.
    #[inline]
    pub fn fans(&self) -> &Links {
        &self.inner.links.fans
    }

    /// PCIe devices in the chassis.
    #[inline]
    pub fn pcie_devices(&self) -> &Links {
        &self.inner.links.pcie_devices
    }

    /// Resources powering the chassis.
    #[inline]
    pub fn powered_by(&self) -> &Links {
        &self.inner.links.powered_by
    }

    /// Processors in the chassis.
    #[inline]
    pub fn processors(&self) -> &Links {
        &self.inner.links.processors
    }

    /// Storage subsystems in the chassis.
    #[inline]
    pub fn storage(&self) -> &Links {
        &self.inner.links.storage
    }

    /// Switches in the chassis.
    #[inline]
    pub fn switches(&self) -> &Links {
        &self.inner.links.switches
    }

    /// Link to the assembly data.
    #[inline]
    pub fn assembly_link(&self) -> Option<&Link> {
        self.inner.assembly.as_ref()
    }

    /// Link to the collection of log services.
    #[inline]
    pub fn log_services_link(&self) -> Option<&Link> {
        self.inner.log_services.as_ref()
    }

    /// Link to the collection of PCIe devices.
    #[inline]
    pub fn pcie_devices_link(&self) -> Option<&Link> {
        self.inner.pcie_devices.as_ref()
    }

    /// Link to the power subsystem.
    #[inline]
    pub fn power_subsystem_link(&self) -> Option<&Link> {
        self.inner.power_subsystem.as_ref()
    }

    /// Link to the collection of sensors.
    #[inline]
    pub fn sensors_link(&self) -> Option<&Link> {
        self.inner.sensors.as_ref()
    }
}
