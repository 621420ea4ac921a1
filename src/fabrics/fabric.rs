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


//! Fabrics.

use serde_json::Value;

use super::protocol;
use super::{Switch, Zone};
use crate::common::{api, Collected, Link, Status};
use crate::Result;

redfish_resource! {
    #[doc = "A network fabric connecting endpoints through switches."]
    Fabric = protocol::Fabric
}

impl Fabric {
    transparent_property! {
        #[doc = "Protocol of the fabric, e.g. `PCIe` or `Ethernet`."]
        fabric_type: ref Option<String>
    }

    transparent_property! {
        #[doc = "Maximum number of zones."]
        max_zones: Option<u32>
    }

    transparent_property! {
        #[doc = "Vendor-specific extensions, as received."]
        oem: ref Option<Value>
    }

    transparent_property! {
        #[doc = "Status and health."]
        status: ref Status
    }

    transparent_property! {
        #[doc = "UUID of the fabric."]
        uuid: ref Option<String>
    }

    /// Switches of the fabric.
    pub async fn switches(&self) -> Result<Collected<Switch>> {
        api::get_linked_collection(self.state.client(), self.inner.switches.as_ref()).await
    }

    /// Zones of the fabric.
    pub async fn zones(&self) -> Result<Collected<Zone>> {
        api::get_linked_collection(self.state.client(), self.inner.zones.as_ref()).await
    }

    /// Link to the collection of endpoints.
    #[inline]
    pub fn endpoints_link(&self) -> Option<&Link> {
        self.inner.endpoints.as_ref()
    }

    /// Link to the collection of address pools.
    #[inline]
    pub fn address_pools_link(&self) -> Option<&Link> {
        self.inner.address_pools.as_ref()
    }

    /// Link to the collection of connections.
    #[inline]
    pub fn connections_link(&self) -> Option<&Link> {
        self.inner.connections.as_ref()
    }

    /// Link to the collection of endpoint groups.
    #[inline]
    pub fn endpoint_groups_link(&self) -> Option<&Link> {
        self.inner.endpoint_groups.as_ref()
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::Fabric;
    use crate::common::mock::MockTransport;

    const URI: &str = "/redfish/v1/Fabrics/PCIe";

    #[tokio::test]
    async fn test_switches_and_zones() {
        let client = MockTransport::new()
            .with_json(
                URI,
                json!({
                    "@odata.id": URI,
                    "Id": "PCIe",
                    "Name": "PCIe Fabric",
                    "FabricType": "PCIe",
                    "MaxZones": 8,
                    "Switches": {"@odata.id": "/redfish/v1/Fabrics/PCIe/Switches"},
                    "Endpoints": {"@odata.id": "/redfish/v1/Fabrics/PCIe/Endpoints"}
                }),
            )
            .with_json(
                "/redfish/v1/Fabrics/PCIe/Switches",
                json!({
                    "Members": [{"@odata.id": "/redfish/v1/Fabrics/PCIe/Switches/1"}]
                }),
            )
            .with_json(
                "/redfish/v1/Fabrics/PCIe/Switches/1",
                json!({
                    "@odata.id": "/redfish/v1/Fabrics/PCIe/Switches/1",
                    "Id": "1",
                    "Name": "PCIe Switch"
                }),
            )
            .into_client();
        let fabric = Fabric::load(&client, URI).await.unwrap();
        assert_eq!(fabric.fabric_type().as_deref(), Some("PCIe"));
        assert_eq!(fabric.max_zones(), Some(8));
        assert_eq!(
            fabric.endpoints_link().unwrap().as_str(),
            "/redfish/v1/Fabrics/PCIe/Endpoints"
        );

        let switches = fabric.switches().await.unwrap().into_result().unwrap();
        assert_eq!(switches.len(), 1);
        assert_eq!(switches[0].name(), "PCIe Switch");
        assert!(fabric.zones().await.unwrap().items.is_empty());
    }
}
