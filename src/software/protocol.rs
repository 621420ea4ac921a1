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


//! Software inventory wire structures.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{Entity, Links, Status};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SoftwareInventory {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub lowest_supported_version: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub related_item: Links,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub software_id: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub updateable: Option<bool>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub write_protected: Option<bool>,
}
