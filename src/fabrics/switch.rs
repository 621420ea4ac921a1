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


//! Fabric switches.

use serde_json::Value;

use super::protocol;
use crate::chassis::Chassis;
use crate::common::action;
use crate::common::update::update_resource;
use crate::common::{api, Collected, Link, Links, PowerState, ResetType, Status, TaskMonitor};
use crate::managers::Manager;
use crate::Result;

const MUTABLE_FIELDS: &[&str] = &["AssetTag", "Enabled", "IsManaged", "LocationIndicatorActive"];

redfish_resource! {
    #[doc = "A switch of a fabric."]
    Switch = protocol::Switch
}

impl Switch {
    transparent_property! {
        #[doc = "Asset tag (if set)."]
        asset_tag: ref Option<String>
    }

    update_field! {
        #[doc = "Set the asset tag."]
        set_asset_tag, with_asset_tag -> asset_tag: optional String
    }

    transparent_property! {
        #[doc = "Current bandwidth in Gbit/s."]
        current_bandwidth_gbps: Option<f64>
    }

    transparent_property! {
        #[doc = "Domain identifier of the switch."]
        domain_id: Option<i64>
    }

    transparent_property! {
        #[doc = "Whether the switch is enabled."]
        enabled: Option<bool>
    }

    update_field! {
        #[doc = "Enable or disable the switch."]
        set_enabled, with_enabled -> enabled: optional bool
    }

    transparent_property! {
        #[doc = "Firmware version (if known)."]
        firmware_version: ref Option<String>
    }

    transparent_property! {
        #[doc = "Whether the switch is in a managed mode."]
        is_managed: Option<bool>
    }

    update_field! {
        #[doc = "Switch between the managed and unmanaged modes."]
        set_is_managed, with_is_managed -> is_managed: optional bool
    }

    transparent_property! {
        #[doc = "Location of the switch, as received."]
        location: ref Option<Value>
    }

    transparent_property! {
        #[doc = "Whether the location indicator is active."]
        location_indicator_active: Option<bool>
    }

    update_field! {
        #[doc = "Turn the location indicator on or off."]
        set_location_indicator_active, with_location_indicator_active -> location_indicator_active: optional bool
    }

    transparent_property! {
        #[doc = "Manufacturer (if known)."]
        manufacturer: ref Option<String>
    }

    transparent_property! {
        #[doc = "Maximum bandwidth in Gbit/s."]
        max_bandwidth_gbps: Option<f64>
    }

    transparent_property! {
        #[doc = "Model (if known)."]
        model: ref Option<String>
    }

    transparent_property! {
        #[doc = "Vendor-specific extensions, as received."]
        oem: ref Option<Value>
    }

    transparent_property! {
        #[doc = "Part number (if known)."]
        part_number: ref Option<String>
    }

    transparent_property! {
        #[doc = "Current power state."]
        power_state: Option<PowerState>
    }

    transparent_property! {
        #[doc = "Serial number (if known)."]
        serial_number: ref Option<String>
    }

    transparent_property! {
        #[doc = "Stock-keeping unit (if known)."]
        sku: ref Option<String>
    }

    transparent_property! {
        #[doc = "Status and health."]
        status: ref Status
    }

    transparent_property! {
        #[doc = "Protocols the switch supports."]
        supported_protocols: ref Vec<String>
    }

    transparent_property! {
        #[doc = "Protocol of the switch."]
        switch_type: ref Option<String>
    }

    transparent_property! {
        #[doc = "Number of lanes, phys or other physical transport links."]
        total_switch_width: Option<u32>
    }

    transparent_property! {
        #[doc = "UUID of the switch."]
        uuid: ref Option<String>
    }

    /// Send changes of the mutable fields to the service.
    pub async fn update(&mut self) -> Result<Option<TaskMonitor>> {
        update_resource(self, MUTABLE_FIELDS, None).await
    }

    /// Reset the switch.
    pub async fn reset(&self, reset_type: ResetType) -> Result<Option<TaskMonitor>> {
        action::reset(&self.state, self.inner.actions.reset.as_ref(), "Reset", reset_type).await
    }

    /// Reset types the service accepts.
    pub async fn supported_reset_types(&self) -> Result<Vec<ResetType>> {
        action::supported_reset_types(&self.state, self.inner.actions.reset.as_ref(), "Reset")
            .await
    }

    /// Chassis containing the switch (if known).
    pub async fn chassis(&self) -> Result<Option<Chassis>> {
        api::get_link(self.state.client(), self.inner.links.chassis.as_ref()).await
    }

    /// Managers of the switch.
    pub async fn managed_by(&self) -> Collected<Manager> {
        api::get_objects(self.state.client(), &self.inner.links.managed_by).await
    }

    /// Endpoints connected to the switch.
    #[inline]
    pub fn endpoints(&self) -> &Links {
        &self.inner.links.endpoints
    }

    /// Number of endpoints connected to the switch.
    pub fn endpoints_count(&self) -> usize {
        let links = &self.inner.links;
        links
            .endpoints_count
            .unwrap_or_else(|| links.endpoints.len())
    }

    /// Link to the collection of log services.
    #[inline]
    pub fn log_services_link(&self) -> Option<&Link> {
        self.inner.log_services.as_ref()
    }

    /// Link to the PCIe device of the switch.
    #[inline]
    pub fn pcie_device_link(&self) -> Option<&Link> {
        self.inner.links.pcie_device.as_ref()
    }

    /// Link to the collection of ports.
    #[inline]
    pub fn ports_link(&self) -> Option<&Link> {
        self.inner.ports.as_ref()
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use super::Switch;
    use crate::common::mock::MockTransport;
    use crate::common::ResetType;
    use crate::ErrorKind;

    const URI: &str = "/redfish/v1/Fabrics/SAS/Switches/Switch1";
    const RESET: &str = "/redfish/v1/Fabrics/SAS/Switches/Switch1/Actions/Switch.Reset";

    fn payload() -> Value {
        json!({
            "@odata.type": "#Switch.v1_9_0.Switch",
            "@odata.id": URI,
            "Id": "Switch1",
            "Name": "SAS Switch",
            "SwitchType": "SAS",
            "Manufacturer": "Contoso",
            "Model": "SAS1000",
            "DomainID": 1,
            "IsManaged": true,
            "TotalSwitchWidth": 64,
            "Enabled": true,
            "Status": {"State": "Enabled", "Health": "OK"},
            "Ports": {"@odata.id": "/redfish/v1/Fabrics/SAS/Switches/Switch1/Ports"},
            "Links": {
                "Chassis": {"@odata.id": "/redfish/v1/Chassis/Switch1"},
                "ManagedBy": [{"@odata.id": "/redfish/v1/Managers/Switch1"}],
                "Endpoints": [
                    {"@odata.id": "/redfish/v1/Fabrics/SAS/Endpoints/Initiator1"},
                    {"@odata.id": "/redfish/v1/Fabrics/SAS/Endpoints/Drive1"}
                ]
            },
            "Actions": {
                "#Switch.Reset": {
                    "target": RESET,
                    "ResetType@Redfish.AllowableValues": ["ForceRestart", "GracefulRestart"]
                }
            }
        })
    }

    #[tokio::test]
    async fn test_update_and_reset() {
        let mock = MockTransport::new()
            .with_json(URI, payload())
            .with_status(URI, StatusCode::NO_CONTENT, json!(null))
            .with_accepted(RESET, "/redfish/v1/TaskService/TaskMonitors/7");
        let mut switch = Switch::load(&mock.clone().into_client(), URI).await.unwrap();
        assert_eq!(switch.domain_id(), Some(1));
        assert_eq!(switch.endpoints_count(), 2);
        assert_eq!(switch.switch_type().as_deref(), Some("SAS"));

        switch.set_enabled(false);
        switch.set_asset_tag("rack-12");
        let _ = switch.update().await.unwrap();
        assert_eq!(
            mock.writes()[0].body,
            Some(json!({"AssetTag": "rack-12", "Enabled": false}))
        );

        let err = switch.reset(ResetType::On).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let task = switch.reset(ResetType::ForceRestart).await.unwrap().unwrap();
        assert_eq!(task.uri(), "/redfish/v1/TaskService/TaskMonitors/7");
    }
}
