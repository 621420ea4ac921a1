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


//! Cables connecting chassis and ports.

use serde_json::Value;

use super::protocol::{self, CableClass, CableConnectorType, CableStatus};
use super::Chassis;
use crate::common::update::update_resource;
use crate::common::{api, Collected, Link, Links, Status, TaskMonitor};
use crate::Result;

const MUTABLE_FIELDS: &[&str] = &[
    "AssetTag",
    "CableClass",
    "CableStatus",
    "CableType",
    "DownstreamConnectorTypes",
    "DownstreamName",
    "LengthMeters",
    "Manufacturer",
    "Model",
    "PartNumber",
    "SKU",
    "SerialNumber",
    "UpstreamConnectorTypes",
    "UpstreamName",
    "UserDescription",
    "UserLabel",
    "Vendor",
];

redfish_resource! {
    #[doc = "A cable."]
    #[doc = ""]
    #[doc = "Most properties are writable so that users can record what is physically installed."]
    Cable = protocol::Cable
}

impl Cable {
    transparent_property! {
        #[doc = "Asset tag (if set)."]
        asset_tag: ref Option<String>
    }

    update_field! {
        #[doc = "Set the asset tag."]
        set_asset_tag, with_asset_tag -> asset_tag: optional String
    }

    transparent_property! {
        #[doc = "Purpose of the cable."]
        cable_class: Option<CableClass>
    }

    update_field! {
        #[doc = "Set the purpose of the cable."]
        set_cable_class, with_cable_class -> cable_class: optional CableClass
    }

    transparent_property! {
        #[doc = "User-reported state of the cable."]
        cable_status: Option<CableStatus>
    }

    update_field! {
        #[doc = "Set the user-reported state of the cable."]
        set_cable_status, with_cable_status -> cable_status: optional CableStatus
    }

    transparent_property! {
        #[doc = "Type of the cable, e.g. `HDMI`."]
        cable_type: ref Option<String>
    }

    update_field! {
        #[doc = "Set the type of the cable."]
        set_cable_type, with_cable_type -> cable_type: optional String
    }

    transparent_property! {
        #[doc = "Connectors on the downstream end."]
        downstream_connector_types: ref Vec<CableConnectorType>
    }

    update_field! {
        #[doc = "Set the connectors on the downstream end."]
        set_downstream_connector_types, with_downstream_connector_types -> downstream_connector_types: Vec<CableConnectorType>
    }

    transparent_property! {
        #[doc = "Name of the downstream connection."]
        downstream_name: ref Option<String>
    }

    update_field! {
        #[doc = "Set the name of the downstream connection."]
        set_downstream_name, with_downstream_name -> downstream_name: optional String
    }

    transparent_property! {
        #[doc = "Length in meters."]
        length_meters: Option<f64>
    }

    update_field! {
        #[doc = "Set the length in meters."]
        set_length_meters, with_length_meters -> length_meters: optional f64
    }

    transparent_property! {
        #[doc = "Location of the cable, as received."]
        location: ref Option<Value>
    }

    transparent_property! {
        #[doc = "Manufacturer (if known)."]
        manufacturer: ref Option<String>
    }

    update_field! {
        #[doc = "Set the manufacturer."]
        set_manufacturer, with_manufacturer -> manufacturer: optional String
    }

    transparent_property! {
        #[doc = "Model (if known)."]
        model: ref Option<String>
    }

    update_field! {
        #[doc = "Set the model."]
        set_model, with_model -> model: optional String
    }

    transparent_property! {
        #[doc = "Vendor-specific extensions, as received."]
        oem: ref Option<Value>
    }

    transparent_property! {
        #[doc = "Part number (if known)."]
        part_number: ref Option<String>
    }

    update_field! {
        #[doc = "Set the part number."]
        set_part_number, with_part_number -> part_number: optional String
    }

    transparent_property! {
        #[doc = "Serial number (if known)."]
        serial_number: ref Option<String>
    }

    update_field! {
        #[doc = "Set the serial number."]
        set_serial_number, with_serial_number -> serial_number: optional String
    }

    transparent_property! {
        #[doc = "Stock-keeping unit (if known)."]
        sku: ref Option<String>
    }

    update_field! {
        #[doc = "Set the stock-keeping unit."]
        set_sku, with_sku -> sku: optional String
    }

    transparent_property! {
        #[doc = "Status and health."]
        status: ref Status
    }

    transparent_property! {
        #[doc = "Connectors on the upstream end."]
        upstream_connector_types: ref Vec<CableConnectorType>
    }

    update_field! {
        #[doc = "Set the connectors on the upstream end."]
        set_upstream_connector_types, with_upstream_connector_types -> upstream_connector_types: Vec<CableConnectorType>
    }

    transparent_property! {
        #[doc = "Name of the upstream connection."]
        upstream_name: ref Option<String>
    }

    update_field! {
        #[doc = "Set the name of the upstream connection."]
        set_upstream_name, with_upstream_name -> upstream_name: optional String
    }

    transparent_property! {
        #[doc = "Free-form description provided by the user."]
        user_description: ref Option<String>
    }

    update_field! {
        #[doc = "Set the free-form description."]
        set_user_description, with_user_description -> user_description: optional String
    }

    transparent_property! {
        #[doc = "Label provided by the user."]
        user_label: ref Option<String>
    }

    update_field! {
        #[doc = "Set the label."]
        set_user_label, with_user_label -> user_label: optional String
    }

    transparent_property! {
        #[doc = "Vendor (if known)."]
        vendor: ref Option<String>
    }

    update_field! {
        #[doc = "Set the vendor."]
        set_vendor, with_vendor -> vendor: optional String
    }

    /// Send changes of the mutable fields to the service.
    pub async fn update(&mut self) -> Result<Option<TaskMonitor>> {
        update_resource(self, MUTABLE_FIELDS, None).await
    }

    /// Link to the assembly data.
    #[inline]
    pub fn assembly_link(&self) -> Option<&Link> {
        self.inner.assembly.as_ref()
    }

    /// Chassis on the downstream end.
    pub async fn downstream_chassis(&self) -> Collected<Chassis> {
        api::get_objects(self.state.client(), &self.inner.links.downstream_chassis).await
    }

    /// Number of chassis on the downstream end.
    pub fn downstream_chassis_count(&self) -> usize {
        let links = &self.inner.links;
        links
            .downstream_chassis_count
            .unwrap_or_else(|| links.downstream_chassis.len())
    }

    /// Ports on the downstream end.
    #[inline]
    pub fn downstream_ports(&self) -> &Links {
        &self.inner.links.downstream_ports
    }

    /// Number of ports on the downstream end.
    pub fn downstream_ports_count(&self) -> usize {
        let links = &self.inner.links;
        links
            .downstream_ports_count
            .unwrap_or_else(|| links.downstream_ports.len())
    }

    /// Resources on the downstream end.
    #[inline]
    pub fn downstream_resources(&self) -> &Links {
        &self.inner.links.downstream_resources
    }

    /// Number of resources on the downstream end.
    pub fn downstream_resources_count(&self) -> usize {
        let links = &self.inner.links;
        links
            .downstream_resources_count
            .unwrap_or_else(|| links.downstream_resources.len())
    }

    /// Chassis on the upstream end.
    pub async fn upstream_chassis(&self) -> Collected<Chassis> {
        api::get_objects(self.state.client(), &self.inner.links.upstream_chassis).await
    }

    /// Links to the chassis on the upstream end.
    #[inline]
    pub fn upstream_chassis_links(&self) -> &Links {
        &self.inner.links.upstream_chassis
    }

    /// Links to the chassis on the downstream end.
    #[inline]
    pub fn downstream_chassis_links(&self) -> &Links {
        &self.inner.links.downstream_chassis
    }

    /// Number of chassis on the upstream end.
    pub fn upstream_chassis_count(&self) -> usize {
        let links = &self.inner.links;
        links
            .upstream_chassis_count
            .unwrap_or_else(|| links.upstream_chassis.len())
    }

    /// Ports on the upstream end.
    #[inline]
    pub fn upstream_ports(&self) -> &Links {
        &self.inner.links.upstream_ports
    }

    /// Number of ports on the upstream end.
    pub fn upstream_ports_count(&self) -> usize {
        let links = &self.inner.links;
        links
            .upstream_ports_count
            .unwrap_or_else(|| links.upstream_ports.len())
    }

    /// Resources on the upstream end.
    #[inline]
    pub fn upstream_resources(&self) -> &Links {
        &self.inner.links.upstream_resources
    }

    /// Number of resources on the upstream end.
    pub fn upstream_resources_count(&self) -> usize {
        let links = &self.inner.links;
        links
            .upstream_resources_count
            .unwrap_or_else(|| links.upstream_resources.len())
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use super::Cable;
    use crate::chassis::{CableClass, CableConnectorType, CableStatus};
    use crate::common::mock::MockTransport;

    const URI: &str = "/redfish/v1/Cables/hdmi_dp";

    fn payload() -> Value {
        json!({
            "@odata.type": "#Cable.v1_2_0.Cable",
            "@odata.id": URI,
            "Id": "hdmi_dp",
            "Name": "HDMI to DP Cable",
            "UserDescription": "HDMI to DisplayPort Cable",
            "UpstreamName": "HDMI0",
            "DownstreamName": "Video Out",
            "CableType": "HDMI",
            "LengthMeters": 0.1,
            "CableClass": "Video",
            "UpstreamConnectorTypes": ["HDMI"],
            "DownstreamConnectorTypes": ["DisplayPort"],
            "Links": {
                "UpstreamChassis": [{"@odata.id": "/redfish/v1/Chassis/bmc"}],
                "UpstreamChassis@odata.count": 1
            },
            "Vendor": "Generic",
            "Status": {"State": "Enabled", "Health": "OK"},
            "CableStatus": "Normal"
        })
    }

    #[tokio::test]
    async fn test_decode() {
        let client = MockTransport::new().with_json(URI, payload()).into_client();
        let cable = Cable::load(&client, URI).await.unwrap();
        assert_eq!(cable.id(), "hdmi_dp");
        assert_eq!(cable.name(), "HDMI to DP Cable");
        assert_eq!(cable.upstream_name().as_deref(), Some("HDMI0"));
        assert_eq!(cable.downstream_name().as_deref(), Some("Video Out"));
        assert_eq!(cable.cable_type().as_deref(), Some("HDMI"));
        assert_eq!(cable.cable_class(), Some(CableClass::Video));
        assert_eq!(cable.cable_status(), Some(CableStatus::Normal));
        assert_eq!(cable.length_meters(), Some(0.1));
        assert_eq!(
            cable.upstream_chassis_links().to_strings(),
            vec!["/redfish/v1/Chassis/bmc".to_string()]
        );
        assert_eq!(cable.upstream_chassis_count(), 1);
        assert_eq!(cable.downstream_chassis_count(), 0);
        assert_eq!(cable.upstream_connector_types(), &vec![CableConnectorType::Hdmi]);
    }

    #[tokio::test]
    async fn test_update() {
        let mock = MockTransport::new()
            .with_json(URI, payload())
            .with_status(URI, StatusCode::NO_CONTENT, json!(null));
        let mut cable = Cable::load(&mock.clone().into_client(), URI).await.unwrap();
        cable.set_user_label("rack 4 video");
        cable.set_length_meters(0.5);
        cable.set_downstream_connector_types(vec![CableConnectorType::Hdmi]);
        let _ = cable.update().await.unwrap();

        let writes = mock.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(
            writes[0].body,
            Some(json!({
                "DownstreamConnectorTypes": ["HDMI"],
                "LengthMeters": 0.5,
                "UserLabel": "rack 4 video"
            }))
        );
    }
}
