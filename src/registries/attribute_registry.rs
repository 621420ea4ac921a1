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

//! Attribute registries.

use super::protocol;
use super::types::{Attribute, AttributeDependency, Menu, RegistryEntries, SupportedSystem};

redfish_resource! {
    #[doc = "Definitions of the attributes of a resource (for example BIOS settings)."]
    AttributeRegistry = protocol::AttributeRegistry
}

impl AttributeRegistry {
    transparent_property! {
        #[doc = "Language of the registry texts."]
        language: ref Option<String>
    }

    transparent_property! {
        #[doc = "Organization that owns the registry."]
        owning_entity: ref Option<String>
    }

    transparent_property! {
        #[doc = "Version of the registry."]
        registry_version: ref Option<String>
    }

    transparent_property! {
        #[doc = "All entries of the registry."]
        registry_entries: ref RegistryEntries
    }

    transparent_property! {
        #[doc = "Systems the registry applies to."]
        supported_systems: ref Vec<SupportedSystem>
    }

    /// Attribute definitions.
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.inner.registry_entries.attributes
    }

    /// Dependencies between attributes.
    #[inline]
    pub fn dependencies(&self) -> &[AttributeDependency] {
        &self.inner.registry_entries.dependencies
    }

    /// Menus of the attributes.
    #[inline]
    pub fn menus(&self) -> &[Menu] {
        &self.inner.registry_entries.menus
    }

    /// Find an attribute by its name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes()
            .iter()
            .find(|attr| attr.attribute_name == name)
    }
}
