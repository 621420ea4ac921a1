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


//! Composition service.

use super::protocol;
use super::ResourceBlock;
use crate::common::{api, Collected, Status};
use crate::fabrics::Zone;
use crate::Result;

redfish_resource! {
    #[doc = "Service composing systems from resource blocks."]
    CompositionService = protocol::CompositionService
}

impl CompositionService {
    transparent_property! {
        #[doc = "Whether a request may be satisfied with more resources than asked for."]
        allow_overprovisioning: Option<bool>
    }

    transparent_property! {
        #[doc = "Whether a request may be constrained to a single zone."]
        allow_zone_affinity: Option<bool>
    }

    transparent_property! {
        #[doc = "Whether the service is enabled."]
        service_enabled: Option<bool>
    }

    transparent_property! {
        #[doc = "Status and health."]
        status: ref Status
    }

    /// Resource blocks available for composition.
    pub async fn resource_blocks(&self) -> Result<Collected<ResourceBlock>> {
        api::get_linked_collection(self.state.client(), self.inner.resource_blocks.as_ref()).await
    }

    /// Zones constraining composition.
    pub async fn resource_zones(&self) -> Result<Collected<Zone>> {
        api::get_linked_collection(self.state.client(), self.inner.resource_zones.as_ref()).await
    }
}
