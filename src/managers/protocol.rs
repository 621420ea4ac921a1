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


//! Manager wire structures.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{ActionDescriptor, Entity, Link, Links, PowerState, Status};

protocol_enum! {
    #[doc = "Kind of a manager."]
    enum ManagerType = Unknown {
        ManagementController = "ManagementController",
        EnclosureManager = "EnclosureManager",
        Bmc = "BMC",
        RackManager = "RackManager",
        AuxiliaryController = "AuxiliaryController",
        Service = "Service",
        FabricManager = "FabricManager",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Settings to keep when resetting a manager to defaults."]
    enum ResetToDefaultsType {
        ResetAll = "ResetAll",
        PreserveNetworkAndUsers = "PreserveNetworkAndUsers",
        PreserveNetwork = "PreserveNetwork"
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ManagerActions {
    #[serde(default, rename = "#Manager.Reset", skip_serializing_if = "Option::is_none")]
    pub reset: Option<ActionDescriptor>,
    #[serde(
        default,
        rename = "#Manager.ResetToDefaults",
        skip_serializing_if = "Option::is_none"
    )]
    pub reset_to_defaults: Option<ActionDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagerLinks {
    #[serde(default)]
    pub active_software_image: Option<Link>,
    #[serde(default)]
    pub managed_by: Links,
    #[serde(default)]
    pub manager_for_chassis: Links,
    #[serde(default)]
    pub manager_for_managers: Links,
    #[serde(default)]
    pub manager_for_servers: Links,
    #[serde(default)]
    pub manager_for_switches: Links,
    #[serde(default)]
    pub manager_in_chassis: Option<Link>,
    #[serde(default)]
    pub software_images: Links,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Manager {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub actions: ManagerActions,
    #[serde(default, rename = "AutoDSTEnabled")]
    pub auto_dst_enabled: Option<bool>,
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub date_time_local_offset: Option<String>,
    #[serde(default)]
    pub ethernet_interfaces: Option<Link>,
    #[serde(default)]
    pub firmware_version: Option<String>,
    #[serde(default)]
    pub links: ManagerLinks,
    #[serde(default)]
    pub location_indicator_active: Option<bool>,
    #[serde(default)]
    pub log_services: Option<Link>,
    #[serde(default)]
    pub manager_type: Option<ManagerType>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub network_protocol: Option<Link>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub power_state: Option<PowerState>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default, rename = "ServiceEntryPointUUID")]
    pub service_entry_point_uuid: Option<String>,
    #[serde(default)]
    pub service_identification: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub time_zone_name: Option<String>,
    #[serde(default, rename = "UUID")]
    pub uuid: Option<String>,
    #[serde(default)]
    pub virtual_media: Option<Link>,
}
