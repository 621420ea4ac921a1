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


//! Fabric, switch and zone wire structures.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{ActionDescriptor, Entity, Link, Links, PowerState, Status};
use crate::utils::null_as_default;

protocol_enum! {
    #[doc = "Accessibility of endpoints in a zone from outside of it."]
    enum ExternalAccessibility = Unknown {
        GloballyAccessible = "GloballyAccessible",
        NonZonedAccessible = "NonZonedAccessible",
        ZoneOnly = "ZoneOnly",
        NoInternalRouting = "NoInternalRouting",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Type of a zone."]
    enum ZoneType = Unknown {
        Default = "Default",
        ZoneOfEndpoints = "ZoneOfEndpoints",
        ZoneOfZones = "ZoneOfZones",
        ZoneOfResourceBlocks = "ZoneOfResourceBlocks",
        Unknown = ""
    }
}

/// Parameters of `AddEndpoint` and `RemoveEndpoint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointChange {
    /// Endpoint to add or remove.
    pub endpoint: Link,
    /// Current ETag of the endpoint, echoed to the service as is.
    #[serde(rename = "EndpointETag", skip_serializing_if = "Option::is_none")]
    pub endpoint_etag: Option<String>,
    /// Current ETag of the zone, echoed to the service as is.
    #[serde(rename = "ZoneETag", skip_serializing_if = "Option::is_none")]
    pub zone_etag: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fabric {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub address_pools: Option<Link>,
    #[serde(default)]
    pub connections: Option<Link>,
    #[serde(default)]
    pub endpoint_groups: Option<Link>,
    #[serde(default)]
    pub endpoints: Option<Link>,
    #[serde(default)]
    pub fabric_type: Option<String>,
    #[serde(default)]
    pub max_zones: Option<u32>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub switches: Option<Link>,
    #[serde(default, rename = "UUID")]
    pub uuid: Option<String>,
    #[serde(default)]
    pub zones: Option<Link>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SwitchActions {
    #[serde(default, rename = "#Switch.Reset", skip_serializing_if = "Option::is_none")]
    pub reset: Option<ActionDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SwitchLinks {
    #[serde(default)]
    pub chassis: Option<Link>,
    #[serde(default)]
    pub endpoints: Links,
    #[serde(default, rename = "Endpoints@odata.count")]
    pub endpoints_count: Option<usize>,
    #[serde(default)]
    pub managed_by: Links,
    #[serde(default, rename = "ManagedBy@odata.count")]
    pub managed_by_count: Option<usize>,
    #[serde(default, rename = "PCIeDevice")]
    pub pcie_device: Option<Link>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Switch {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub actions: SwitchActions,
    #[serde(default)]
    pub asset_tag: Option<String>,
    #[serde(default)]
    pub current_bandwidth_gbps: Option<f64>,
    #[serde(default, rename = "DomainID")]
    pub domain_id: Option<i64>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub firmware_version: Option<String>,
    #[serde(default)]
    pub is_managed: Option<bool>,
    #[serde(default)]
    pub links: SwitchLinks,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub location_indicator_active: Option<bool>,
    #[serde(default)]
    pub log_services: Option<Link>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub max_bandwidth_gbps: Option<f64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub ports: Option<Link>,
    #[serde(default)]
    pub power_state: Option<PowerState>,
    #[serde(default, rename = "SKU")]
    pub sku: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supported_protocols: Vec<String>,
    #[serde(default)]
    pub switch_type: Option<String>,
    #[serde(default)]
    pub total_switch_width: Option<u32>,
    #[serde(default, rename = "UUID")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZoneActions {
    #[serde(default, rename = "#Zone.AddEndpoint", skip_serializing_if = "Option::is_none")]
    pub add_endpoint: Option<ActionDescriptor>,
    #[serde(default, rename = "#Zone.RemoveEndpoint", skip_serializing_if = "Option::is_none")]
    pub remove_endpoint: Option<ActionDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneLinks {
    #[serde(default)]
    pub address_pools: Links,
    #[serde(default, rename = "AddressPools@odata.count")]
    pub address_pools_count: Option<usize>,
    #[serde(default)]
    pub contained_by_zones: Links,
    #[serde(default, rename = "ContainedByZones@odata.count")]
    pub contained_by_zones_count: Option<usize>,
    #[serde(default)]
    pub contains_zones: Links,
    #[serde(default, rename = "ContainsZones@odata.count")]
    pub contains_zones_count: Option<usize>,
    #[serde(default)]
    pub endpoints: Links,
    #[serde(default, rename = "Endpoints@odata.count")]
    pub endpoints_count: Option<usize>,
    #[serde(default)]
    pub involved_switches: Links,
    #[serde(default, rename = "InvolvedSwitches@odata.count")]
    pub involved_switches_count: Option<usize>,
    #[serde(default)]
    pub resource_blocks: Links,
    #[serde(default, rename = "ResourceBlocks@odata.count")]
    pub resource_blocks_count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Zone {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub actions: ZoneActions,
    #[serde(default)]
    pub default_routing_enabled: Option<bool>,
    #[serde(default)]
    pub external_accessibility: Option<ExternalAccessibility>,
    #[serde(default)]
    pub links: ZoneLinks,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub zone_type: Option<ZoneType>,
}
