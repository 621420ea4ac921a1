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


//! Zones of a fabric.

use serde_json::Value;

use super::protocol::{self, EndpointChange, ExternalAccessibility, ZoneType};
use super::Switch;
use crate::common::action::{self, to_parameters};
use crate::common::update::update_resource;
use crate::common::{api, Collected, Links, Status, TaskMonitor};
use crate::composition::ResourceBlock;
use crate::Result;

const MUTABLE_FIELDS: &[&str] = &["DefaultRoutingEnabled", "ExternalAccessibility", "ZoneType"];

redfish_resource! {
    #[doc = "A zone: a set of endpoints or resource blocks allowed to communicate."]
    Zone = protocol::Zone
}

impl Zone {
    transparent_property! {
        #[doc = "Whether routing within the zone is enabled by default."]
        default_routing_enabled: Option<bool>
    }

    update_field! {
        #[doc = "Enable or disable default routing within the zone."]
        set_default_routing_enabled, with_default_routing_enabled -> default_routing_enabled: optional bool
    }

    transparent_property! {
        #[doc = "Accessibility of the endpoints from outside of the zone."]
        external_accessibility: Option<ExternalAccessibility>
    }

    update_field! {
        #[doc = "Set the accessibility from outside of the zone."]
        set_external_accessibility, with_external_accessibility -> external_accessibility: optional ExternalAccessibility
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
        #[doc = "Type of the zone."]
        zone_type: Option<ZoneType>
    }

    update_field! {
        #[doc = "Set the type of the zone."]
        set_zone_type, with_zone_type -> zone_type: optional ZoneType
    }

    /// Send changes of the mutable fields to the service.
    pub async fn update(&mut self) -> Result<Option<TaskMonitor>> {
        update_resource(self, MUTABLE_FIELDS, None).await
    }

    /// Add an endpoint to the zone.
    ///
    /// The service may require the current ETags of both the endpoint and the zone and
    /// reject the request with 428 if they do not match.
    pub async fn add_endpoint(&self, change: &EndpointChange) -> Result<Option<TaskMonitor>> {
        action::invoke(
            &self.state,
            self.inner.actions.add_endpoint.as_ref(),
            "AddEndpoint",
            to_parameters(change)?,
            &[],
        )
        .await
    }

    /// Remove an endpoint from the zone.
    pub async fn remove_endpoint(&self, change: &EndpointChange) -> Result<Option<TaskMonitor>> {
        action::invoke(
            &self.state,
            self.inner.actions.remove_endpoint.as_ref(),
            "RemoveEndpoint",
            to_parameters(change)?,
            &[],
        )
        .await
    }

    /// Resource blocks in the zone.
    pub async fn resource_blocks(&self) -> Collected<ResourceBlock> {
        api::get_objects(self.state.client(), &self.inner.links.resource_blocks).await
    }

    /// Links to the resource blocks in the zone.
    #[inline]
    pub fn resource_block_links(&self) -> &Links {
        &self.inner.links.resource_blocks
    }

    /// Number of resource blocks in the zone.
    pub fn resource_blocks_count(&self) -> usize {
        let links = &self.inner.links;
        links
            .resource_blocks_count
            .unwrap_or_else(|| links.resource_blocks.len())
    }

    /// Zones containing this one.
    pub async fn contained_by_zones(&self) -> Collected<Zone> {
        api::get_objects(self.state.client(), &self.inner.links.contained_by_zones).await
    }

    /// Zones contained in this one.
    pub async fn contains_zones(&self) -> Collected<Zone> {
        api::get_objects(self.state.client(), &self.inner.links.contains_zones).await
    }

    /// Switches involved in the zone.
    pub async fn involved_switches(&self) -> Collected<Switch> {
        api::get_objects(self.state.client(), &self.inner.links.involved_switches).await
    }

    /// Endpoints in the zone.
    #[inline]
    pub fn endpoints(&self) -> &Links {
        &self.inner.links.endpoints
    }

    /// Number of endpoints in the zone.
    pub fn endpoints_count(&self) -> usize {
        let links = &self.inner.links;
        links
            .endpoints_count
            .unwrap_or_else(|| links.endpoints.len())
    }

    /// Address pools of the zone.
    #[inline]
    pub fn address_pools(&self) -> &Links {
        &self.inner.links.address_pools
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use super::Zone;
    use crate::common::mock::MockTransport;
    use crate::common::Link;
    use crate::fabrics::{EndpointChange, ExternalAccessibility, ZoneType};
    use crate::ErrorKind;

    const URI: &str = "/redfish/v1/CompositionService/ResourceZones/1";
    const ADD: &str = "/redfish/v1/CompositionService/ResourceZones/1/Actions/Zone.AddEndpoint";

    fn payload() -> Value {
        json!({
            "@odata.type": "#Zone.v1_6_1.Zone",
            "@odata.id": URI,
            "Id": "1",
            "Name": "Resource Zone 1",
            "ZoneType": "ZoneOfResourceBlocks",
            "Status": {"State": "Enabled", "Health": "OK"},
            "Links": {
                "ResourceBlocks": [
                    {"@odata.id": "/redfish/v1/CompositionService/ResourceBlocks/ComputeBlock"},
                    {"@odata.id": "/redfish/v1/CompositionService/ResourceBlocks/DrivesBlock"},
                    {"@odata.id": "/redfish/v1/CompositionService/ResourceBlocks/NetworkBlock"}
                ]
            },
            "Actions": {
                "#Zone.AddEndpoint": {"target": ADD}
            }
        })
    }

    #[tokio::test]
    async fn test_decode() {
        let client = MockTransport::new().with_json(URI, payload()).into_client();
        let zone = Zone::load(&client, URI).await.unwrap();
        assert_eq!(zone.zone_type(), Some(ZoneType::ZoneOfResourceBlocks));
        assert_eq!(
            zone.resource_block_links().to_strings(),
            vec![
                "/redfish/v1/CompositionService/ResourceBlocks/ComputeBlock".to_string(),
                "/redfish/v1/CompositionService/ResourceBlocks/DrivesBlock".to_string(),
                "/redfish/v1/CompositionService/ResourceBlocks/NetworkBlock".to_string(),
            ]
        );
        assert_eq!(zone.resource_blocks_count(), 3);
        assert_eq!(zone.endpoints_count(), 0);
    }

    #[tokio::test]
    async fn test_update() {
        let mock = MockTransport::new()
            .with_json(URI, payload())
            .with_status(URI, StatusCode::NO_CONTENT, json!(null));
        let mut zone = Zone::load(&mock.clone().into_client(), URI).await.unwrap();
        zone.set_external_accessibility(ExternalAccessibility::ZoneOnly);
        zone.set_default_routing_enabled(true);
        let _ = zone.update().await.unwrap();
        assert_eq!(
            mock.writes()[0].body,
            Some(json!({"DefaultRoutingEnabled": true, "ExternalAccessibility": "ZoneOnly"}))
        );
    }

    #[tokio::test]
    async fn test_endpoints() {
        let mock = MockTransport::new()
            .with_json(URI, payload())
            .with_status(ADD, StatusCode::NO_CONTENT, json!(null));
        let zone = Zone::load(&mock.clone().into_client(), URI).await.unwrap();
        let change = EndpointChange {
            endpoint: Link::new("/redfish/v1/Fabrics/PCIe/Endpoints/1"),
            endpoint_etag: Some("\"e1\"".into()),
            zone_etag: Some("\"z1\"".into()),
        };

        let _ = zone.add_endpoint(&change).await.unwrap();
        assert_eq!(
            mock.writes()[0].body,
            Some(json!({
                "Endpoint": {"@odata.id": "/redfish/v1/Fabrics/PCIe/Endpoints/1"},
                "EndpointETag": "\"e1\"",
                "ZoneETag": "\"z1\""
            }))
        );

        let err = zone.remove_endpoint(&change).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert_eq!(mock.writes().len(), 1);
    }
}
