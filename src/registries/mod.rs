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

//! Attribute registries and action descriptions.

mod action_info;
mod attribute_registry;
mod protocol;
mod types;

pub use self::action_info::ActionInfo;
pub use self::attribute_registry::AttributeRegistry;
pub use self::types::{
    ActionParameter, Attribute, AttributeDependency, AttributeType, AttributeValue, Dependency,
    MapFrom, MapFromCondition, MapTerms, Menu, ParameterType, RegistryEntries, SupportedSystem,
};
