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


//! Thermal subsystem of a chassis.

use super::protocol;
use super::Fan;
use crate::common::{api, Collected, Link, Status};
use crate::Result;

redfish_resource! {
    #[doc = "Cooling equipment of a chassis."]
    ThermalSubsystem = protocol::ThermalSubsystem
}

impl ThermalSubsystem {
    transparent_property! {
        #[doc = "Whether all fans are forced to run at full speed."]
        fans_full_speed_override_enable: Option<bool>
    }

    transparent_property! {
        #[doc = "Status and health."]
        status: ref Status
    }

    /// Fans of the subsystem.
    pub async fn fans(&self) -> Result<Collected<Fan>> {
        api::get_linked_collection(self.state.client(), self.inner.fans.as_ref()).await
    }

    /// Link to the collection of coolant connectors.
    #[inline]
    pub fn coolant_connectors_link(&self) -> Option<&Link> {
        self.inner.coolant_connectors.as_ref()
    }

    /// Link to the collection of heaters.
    #[inline]
    pub fn heaters_link(&self) -> Option<&Link> {
        self.inner.heaters.as_ref()
    }

    /// Link to the leak detection resource.
    #[inline]
    pub fn leak_detection_link(&self) -> Option<&Link> {
        self.inner.leak_detection.as_ref()
    }

    /// Link to the collection of pumps.
    #[inline]
    pub fn pumps_link(&self) -> Option<&Link> {
        self.inner.pumps.as_ref()
    }

    /// Link to the thermal metrics.
    #[inline]
    pub fn thermal_metrics_link(&self) -> Option<&Link> {
        self.inner.thermal_metrics.as_ref()
    }
}
