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

//! JSON structures and protocol bits for registries.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::*;
use crate::common::Entity;
use crate::utils::null_as_default;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeRegistry {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub owning_entity: Option<String>,
    #[serde(default)]
    pub registry_entries: RegistryEntries,
    #[serde(default)]
    pub registry_version: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supported_systems: Vec<SupportedSystem>,
    #[serde(default)]
    pub oem: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionInfo {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<ActionParameter>,
    #[serde(default)]
    pub oem: Option<Value>,
}
