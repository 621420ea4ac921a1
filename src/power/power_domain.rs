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


//! Power domains of a facility.

use serde_json::Value;

use super::protocol;
use crate::common::{api, Collected, Links, Status};
use crate::managers::Manager;

/// Reported count or, when missing, the number of links.
fn count(reported: Option<usize>, links: &Links) -> usize {
    reported.unwrap_or_else(|| links.len())
}

redfish_resource! {
    #[doc = "A power domain: the power equipment serving a set of resources."]
    PowerDomain = protocol::PowerDomain
}

impl PowerDomain {
    transparent_property! {
        #[doc = "Vendor-specific extensions, as received."]
        oem: ref Option<Value>
    }

    transparent_property! {
        #[doc = "Status and health."]
        status: ref Status
    }

    /// Electrical buses of the domain.
    #[inline]
    pub fn electrical_buses(&self) -> &Links {
        &self.inner.links.electrical_buses
    }

    /// Number of electrical buses.
    pub fn electrical_buses_count(&self) -> usize {
        let links = &self.inner.links;
        count(links.electrical_buses_count, &links.electrical_buses)
    }

    /// Floor power distribution units of the domain.
    #[inline]
    pub fn floor_pdus(&self) -> &Links {
        &self.inner.links.floor_pdus
    }

    /// Number of floor power distribution units.
    pub fn floor_pdus_count(&self) -> usize {
        let links = &self.inner.links;
        count(links.floor_pdus_count, &links.floor_pdus)
    }

    /// Links to the managers of the domain.
    #[inline]
    pub fn managed_by_links(&self) -> &Links {
        &self.inner.links.managed_by
    }

    /// Managers of the domain.
    pub async fn managed_by(&self) -> Collected<Manager> {
        api::get_objects(self.state.client(), &self.inner.links.managed_by).await
    }

    /// Number of managers.
    pub fn managed_by_count(&self) -> usize {
        let links = &self.inner.links;
        count(links.managed_by_count, &links.managed_by)
    }

    /// Power shelves of the domain.
    #[inline]
    pub fn power_shelves(&self) -> &Links {
        &self.inner.links.power_shelves
    }

    /// Number of power shelves.
    pub fn power_shelves_count(&self) -> usize {
        let links = &self.inner.links;
        count(links.power_shelves_count, &links.power_shelves)
    }

    /// Rack power distribution units of the domain.
    #[inline]
    pub fn rack_pdus(&self) -> &Links {
        &self.inner.links.rack_pdus
    }

    /// Number of rack power distribution units.
    pub fn rack_pdus_count(&self) -> usize {
        let links = &self.inner.links;
        count(links.rack_pdus_count, &links.rack_pdus)
    }

    /// Switchgear of the domain.
    #[inline]
    pub fn switchgear(&self) -> &Links {
        &self.inner.links.switchgear
    }

    /// Number of switchgear units.
    pub fn switchgear_count(&self) -> usize {
        let links = &self.inner.links;
        count(links.switchgear_count, &links.switchgear)
    }

    /// Transfer switches of the domain.
    #[inline]
    pub fn transfer_switches(&self) -> &Links {
        &self.inner.links.transfer_switches
    }

    /// Number of transfer switches.
    pub fn transfer_switches_count(&self) -> usize {
        let links = &self.inner.links;
        count(links.transfer_switches_count, &links.transfer_switches)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::PowerDomain;
    use crate::common::mock::MockTransport;

    const URI: &str = "/redfish/v1/Facilities/Room237/PowerDomains/Row1";

    #[tokio::test]
    async fn test_decode() {
        let client = MockTransport::new()
            .with_json(
                URI,
                json!({
                    "@odata.type": "#PowerDomain.v1_2_1.PowerDomain",
                    "@odata.id": URI,
                    "Id": "Row1",
                    "Name": "Row #1 Domain",
                    "Status": {"State": "Enabled", "Health": "OK"},
                    "Links": {
                        "ManagedBy": [{"@odata.id": "/redfish/v1/Managers/BMC"}],
                        "RackPDUs": [{"@odata.id": "/redfish/v1/PowerEquipment/RackPDUs/1"}],
                        "RackPDUs@odata.count": 1,
                        "Switchgear": [{"@odata.id": "/redfish/v1/PowerEquipment/Switchgear/1"}],
                        "TransferSwitches": [
                            {"@odata.id": "/redfish/v1/PowerEquipment/TransferSwitches/1"},
                            {"@odata.id": "/redfish/v1/PowerEquipment/TransferSwitches/2"}
                        ],
                        "TransferSwitches@odata.count": 2
                    }
                }),
            )
            .into_client();
        let domain = PowerDomain::load(&client, URI).await.unwrap();
        assert_eq!(domain.name(), "Row #1 Domain");
        assert_eq!(
            domain.managed_by_links().to_strings(),
            vec!["/redfish/v1/Managers/BMC".to_string()]
        );
        assert_eq!(domain.managed_by_count(), 1);
        assert_eq!(
            domain.rack_pdus().to_strings(),
            vec!["/redfish/v1/PowerEquipment/RackPDUs/1".to_string()]
        );
        assert_eq!(domain.rack_pdus_count(), 1);
        assert_eq!(domain.switchgear_count(), 1);
        assert_eq!(domain.transfer_switches_count(), 2);
        assert_eq!(domain.floor_pdus_count(), 0);
        assert!(domain.electrical_buses().is_empty());
    }
}
