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


//! Service root wire structures.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{Entity, Link};

/// Options of `$expand` the service supports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpandQuery {
    #[serde(default)]
    pub expand_all: bool,
    #[serde(default)]
    pub levels: bool,
    #[serde(default)]
    pub links: bool,
    #[serde(default)]
    pub max_levels: Option<u32>,
    #[serde(default)]
    pub no_links: bool,
}

/// Optional protocol features the service supports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProtocolFeatures {
    #[serde(default)]
    pub excerpt_query: bool,
    #[serde(default)]
    pub expand_query: Option<ExpandQuery>,
    #[serde(default)]
    pub filter_query: bool,
    #[serde(default)]
    pub only_member_query: bool,
    #[serde(default)]
    pub select_query: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRootLinks {
    #[serde(default)]
    pub manager_providing_service: Option<Link>,
    #[serde(default)]
    pub sessions: Option<Link>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRoot {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub account_service: Option<Link>,
    #[serde(default)]
    pub cables: Option<Link>,
    #[serde(default)]
    pub chassis: Option<Link>,
    #[serde(default)]
    pub composition_service: Option<Link>,
    #[serde(default)]
    pub event_service: Option<Link>,
    #[serde(default)]
    pub fabrics: Option<Link>,
    #[serde(default)]
    pub links: ServiceRootLinks,
    #[serde(default)]
    pub managers: Option<Link>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub power_equipment: Option<Link>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub protocol_features_supported: Option<ProtocolFeatures>,
    #[serde(default)]
    pub redfish_version: Option<String>,
    #[serde(default)]
    pub registries: Option<Link>,
    #[serde(default)]
    pub resource_blocks: Option<Link>,
    #[serde(default)]
    pub service_identification: Option<String>,
    #[serde(default)]
    pub session_service: Option<Link>,
    #[serde(default)]
    pub systems: Option<Link>,
    #[serde(default)]
    pub tasks: Option<Link>,
    #[serde(default)]
    pub update_service: Option<Link>,
    #[serde(default, rename = "UUID")]
    pub uuid: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
}
