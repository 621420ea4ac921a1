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


//! Power domain wire structures.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{Entity, Links, Status};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerDomainLinks {
    #[serde(default)]
    pub electrical_buses: Links,
    #[serde(default, rename = "ElectricalBuses@odata.count")]
    pub electrical_buses_count: Option<usize>,
    #[serde(default, rename = "FloorPDUs")]
    pub floor_pdus: Links,
    #[serde(default, rename = "FloorPDUs@odata.count")]
    pub floor_pdus_count: Option<usize>,
    #[serde(default)]
    pub managed_by: Links,
    #[serde(default, rename = "ManagedBy@odata.count")]
    pub managed_by_count: Option<usize>,
    #[serde(default)]
    pub power_shelves: Links,
    #[serde(default, rename = "PowerShelves@odata.count")]
    pub power_shelves_count: Option<usize>,
    #[serde(default, rename = "RackPDUs")]
    pub rack_pdus: Links,
    #[serde(default, rename = "RackPDUs@odata.count")]
    pub rack_pdus_count: Option<usize>,
    #[serde(default)]
    pub switchgear: Links,
    #[serde(default, rename = "Switchgear@odata.count")]
    pub switchgear_count: Option<usize>,
    #[serde(default)]
    pub transfer_switches: Links,
    #[serde(default, rename = "TransferSwitches@odata.count")]
    pub transfer_switches_count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerDomain {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub links: PowerDomainLinks,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub status: Status,
}
