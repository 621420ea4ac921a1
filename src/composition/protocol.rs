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


//! Composition wire structures.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{Entity, Link, Links, Status};
use crate::utils::null_as_default;

protocol_enum! {
    #[doc = "Composition state of a resource block."]
    enum CompositionState = Unknown {
        Composing = "Composing",
        ComposedAndAvailable = "ComposedAndAvailable",
        Composed = "Composed",
        Unused = "Unused",
        Failed = "Failed",
        Unavailable = "Unavailable",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Pool a resource block belongs to."]
    enum PoolType = Unknown {
        Free = "Free",
        Active = "Active",
        Unassigned = "Unassigned",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Kind of resources in a resource block."]
    enum ResourceBlockType = Unknown {
        Compute = "Compute",
        Processor = "Processor",
        Memory = "Memory",
        Network = "Network",
        Storage = "Storage",
        ComputerSystem = "ComputerSystem",
        Expansion = "Expansion",
        IndependentResource = "IndependentResource",
        Unknown = ""
    }
}

/// Composition status of a resource block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompositionStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition_state: Option<CompositionState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_compositions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_compositions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_capable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceBlockLinks {
    #[serde(default)]
    pub chassis: Links,
    #[serde(default)]
    pub computer_systems: Links,
    #[serde(default)]
    pub consuming_resource_blocks: Links,
    #[serde(default)]
    pub supplying_resource_blocks: Links,
    #[serde(default)]
    pub zones: Links,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceBlock {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub composition_status: CompositionStatus,
    #[serde(default)]
    pub computer_systems: Links,
    #[serde(default)]
    pub drives: Links,
    #[serde(default)]
    pub ethernet_interfaces: Links,
    #[serde(default)]
    pub links: ResourceBlockLinks,
    #[serde(default)]
    pub memory: Links,
    #[serde(default)]
    pub network_interfaces: Links,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub pool: Option<PoolType>,
    #[serde(default)]
    pub processors: Links,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_block_type: Vec<ResourceBlockType>,
    #[serde(default)]
    pub simple_storage: Links,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub storage: Links,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompositionService {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub allow_overprovisioning: Option<bool>,
    #[serde(default)]
    pub allow_zone_affinity: Option<bool>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub resource_blocks: Option<Link>,
    #[serde(default)]
    pub resource_zones: Option<Link>,
    #[serde(default)]
    pub service_enabled: Option<bool>,
    #[serde(default)]
    pub status: Status,
}
