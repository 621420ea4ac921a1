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


//! Managers: BMCs and other management controllers.

use serde_json::{Map, Value};

use super::protocol::{self, ManagerType, ResetToDefaultsType};
use crate::chassis::Chassis;
use crate::common::action;
use crate::common::update::update_resource;
use crate::common::{
    api, Collected, Link, Links, PowerState, ResetType, SettingsApplyTime, Status, TaskMonitor,
};
use crate::fabrics::Switch;
use crate::software::SoftwareInventory;
use crate::systems::ComputerSystem;
use crate::Result;

const MUTABLE_FIELDS: &[&str] = &[
    "AutoDSTEnabled",
    "DateTime",
    "DateTimeLocalOffset",
    "LocationIndicatorActive",
    "ServiceIdentification",
    "TimeZoneName",
];

redfish_resource! {
    #[doc = "A manager, e.g. a baseboard management controller."]
    Manager = protocol::Manager
}

impl Manager {
    transparent_property! {
        #[doc = "Whether the manager adjusts for daylight saving time."]
        auto_dst_enabled: Option<bool>
    }

    update_field! {
        #[doc = "Enable or disable the daylight saving time adjustment."]
        set_auto_dst_enabled, with_auto_dst_enabled -> auto_dst_enabled: optional bool
    }

    transparent_property! {
        #[doc = "Current date and time as reported by the manager."]
        date_time: ref Option<String>
    }

    update_field! {
        #[doc = "Set the date and time (RFC 3339)."]
        set_date_time, with_date_time -> date_time: optional String
    }

    transparent_property! {
        #[doc = "Offset from UTC, e.g. `+01:00`."]
        date_time_local_offset: ref Option<String>
    }

    update_field! {
        #[doc = "Set the offset from UTC."]
        set_date_time_local_offset, with_date_time_local_offset -> date_time_local_offset: optional String
    }

    transparent_property! {
        #[doc = "Firmware version (if known)."]
        firmware_version: ref Option<String>
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
        #[doc = "Kind of the manager."]
        manager_type: Option<ManagerType>
    }

    transparent_property! {
        #[doc = "Manufacturer (if known)."]
        manufacturer: ref Option<String>
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
        #[doc = "UUID of the Redfish service provided by the manager."]
        service_entry_point_uuid: ref Option<String>
    }

    transparent_property! {
        #[doc = "Identification of the service, set by the user."]
        service_identification: ref Option<String>
    }

    update_field! {
        #[doc = "Set the identification of the service."]
        set_service_identification, with_service_identification -> service_identification: optional String
    }

    transparent_property! {
        #[doc = "Status and health."]
        status: ref Status
    }

    transparent_property! {
        #[doc = "Time zone name, e.g. `Europe/Berlin`."]
        time_zone_name: ref Option<String>
    }

    update_field! {
        #[doc = "Set the time zone name."]
        set_time_zone_name, with_time_zone_name -> time_zone_name: optional String
    }

    transparent_property! {
        #[doc = "UUID of the manager."]
        uuid: ref Option<String>
    }

    /// Send changes of the mutable fields to the service.
    pub async fn update(&mut self) -> Result<Option<TaskMonitor>> {
        update_resource(self, MUTABLE_FIELDS, None).await
    }

    /// Send changes of the mutable fields, requesting the given apply time.
    pub async fn update_apply_at(
        &mut self,
        apply_time: SettingsApplyTime,
    ) -> Result<Option<TaskMonitor>> {
        update_resource(self, MUTABLE_FIELDS, Some(apply_time)).await
    }

    /// Reset the manager.
    pub async fn reset(&self, reset_type: ResetType) -> Result<Option<TaskMonitor>> {
        action::reset(&self.state, self.inner.actions.reset.as_ref(), "Reset", reset_type).await
    }

    /// Reset types the service accepts.
    pub async fn supported_reset_types(&self) -> Result<Vec<ResetType>> {
        action::supported_reset_types(&self.state, self.inner.actions.reset.as_ref(), "Reset")
            .await
    }

    /// Reset the settings of the manager to factory defaults.
    ///
    /// The manager may reset as a result.
    pub async fn reset_to_defaults(
        &self,
        reset_type: ResetToDefaultsType,
    ) -> Result<Option<TaskMonitor>> {
        let mut parameters = Map::new();
        let _ = parameters.insert("ResetType".into(), Value::from(reset_type.as_str()));
        action::invoke(
            &self.state,
            self.inner.actions.reset_to_defaults.as_ref(),
            "ResetToDefaults",
            parameters,
            &["ResetType"],
        )
        .await
    }

    /// Software image the manager is running (if known).
    pub async fn active_software_image(&self) -> Result<Option<SoftwareInventory>> {
        api::get_link(
            self.state.client(),
            self.inner.links.active_software_image.as_ref(),
        )
        .await
    }

    /// Software images of the manager.
    pub async fn software_images(&self) -> Collected<SoftwareInventory> {
        api::get_objects(self.state.client(), &self.inner.links.software_images).await
    }

    /// Managers of this manager.
    pub async fn managed_by(&self) -> Collected<Manager> {
        api::get_objects(self.state.client(), &self.inner.links.managed_by).await
    }

    /// Chassis managed by this manager.
    pub async fn manager_for_chassis(&self) -> Collected<Chassis> {
        api::get_objects(self.state.client(), &self.inner.links.manager_for_chassis).await
    }

    /// Managers managed by this manager.
    pub async fn manager_for_managers(&self) -> Collected<Manager> {
        api::get_objects(self.state.client(), &self.inner.links.manager_for_managers).await
    }

    /// Systems managed by this manager.
    pub async fn manager_for_servers(&self) -> Collected<ComputerSystem> {
        api::get_objects(self.state.client(), &self.inner.links.manager_for_servers).await
    }

    /// Switches managed by this manager.
    pub async fn manager_for_switches(&self) -> Collected<Switch> {
        api::get_objects(self.state.client(), &self.inner.links.manager_for_switches).await
    }

    /// Links to the systems managed by this manager.
    #[inline]
    pub fn manager_for_servers_links(&self) -> &Links {
        &self.inner.links.manager_for_servers
    }

    /// Chassis containing the manager (if known).
    pub async fn manager_in_chassis(&self) -> Result<Option<Chassis>> {
        api::get_link(self.state.client(), self.inner.links.manager_in_chassis.as_ref()).await
    }

    /// Link to the collection of Ethernet interfaces.
    #[inline]
    pub fn ethernet_interfaces_link(&self) -> Option<&Link> {
        self.inner.ethernet_interfaces.as_ref()
    }

    /// Link to the collection of log services.
    #[inline]
    pub fn log_services_link(&self) -> Option<&Link> {
        self.inner.log_services.as_ref()
    }

    /// Link to the network protocol settings.
    #[inline]
    pub fn network_protocol_link(&self) -> Option<&Link> {
        self.inner.network_protocol.as_ref()
    }

    /// Link to the collection of virtual media.
    #[inline]
    pub fn virtual_media_link(&self) -> Option<&Link> {
        self.inner.virtual_media.as_ref()
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use super::Manager;
    use crate::common::mock::MockTransport;
    use crate::common::{PowerState, ResetType};
    use crate::managers::{ManagerType, ResetToDefaultsType};
    use crate::ErrorKind;

    const URI: &str = "/redfish/v1/Managers/BMC";
    const RESET: &str = "/redfish/v1/Managers/BMC/Actions/Manager.Reset";
    const DEFAULTS: &str = "/redfish/v1/Managers/BMC/Actions/Manager.ResetToDefaults";
    const FIRMWARE: &str = "/redfish/v1/UpdateService/FirmwareInventory/BMC";

    fn payload() -> Value {
        json!({
            "@odata.type": "#Manager.v1_19_0.Manager",
            "@odata.id": URI,
            "Id": "BMC",
            "Name": "Manager",
            "ManagerType": "BMC",
            "ServiceEntryPointUUID": "92384634-2938-2342-8820-489239905423",
            "UUID": "58893887-8974-2487-2389-841168418919",
            "Model": "Joo Janta 200",
            "FirmwareVersion": "4.4.6521",
            "DateTime": "2015-03-13T04:14:33+06:00",
            "DateTimeLocalOffset": "+06:00",
            "TimeZoneName": "Asia/Dhaka",
            "AutoDSTEnabled": false,
            "PowerState": "On",
            "Status": {"State": "Enabled", "Health": "OK"},
            "NetworkProtocol": {"@odata.id": "/redfish/v1/Managers/BMC/NetworkProtocol"},
            "EthernetInterfaces": {"@odata.id": "/redfish/v1/Managers/BMC/EthernetInterfaces"},
            "Links": {
                "ManagerForServers": [{"@odata.id": "/redfish/v1/Systems/437XR1138R2"}],
                "ManagerForChassis": [{"@odata.id": "/redfish/v1/Chassis/1U"}],
                "ManagerInChassis": {"@odata.id": "/redfish/v1/Chassis/1U"},
                "ActiveSoftwareImage": {"@odata.id": FIRMWARE}
            },
            "Actions": {
                "#Manager.Reset": {
                    "target": RESET,
                    "ResetType@Redfish.AllowableValues": ["ForceRestart", "GracefulRestart"]
                },
                "#Manager.ResetToDefaults": {
                    "target": DEFAULTS,
                    "ResetType@Redfish.AllowableValues": ["ResetAll", "PreserveNetworkAndUsers"]
                }
            }
        })
    }

    #[tokio::test]
    async fn test_decode() {
        let client = MockTransport::new()
            .with_json(URI, payload())
            .with_json(
                FIRMWARE,
                json!({
                    "@odata.id": FIRMWARE,
                    "Id": "BMC",
                    "Name": "Contoso BMC Firmware",
                    "Version": "4.4.6521",
                    "Updateable": true
                }),
            )
            .into_client();
        let manager = Manager::load(&client, URI).await.unwrap();
        assert_eq!(manager.manager_type(), Some(ManagerType::Bmc));
        assert_eq!(manager.power_state(), Some(PowerState::On));
        assert_eq!(manager.time_zone_name().as_deref(), Some("Asia/Dhaka"));
        assert_eq!(manager.manager_for_servers_links().len(), 1);
        assert!(manager.virtual_media_link().is_none());

        let image = manager.active_software_image().await.unwrap().unwrap();
        assert_eq!(image.version().as_deref(), Some("4.4.6521"));
    }

    #[tokio::test]
    async fn test_update_time() {
        let mock = MockTransport::new()
            .with_json(URI, payload())
            .with_status(URI, StatusCode::NO_CONTENT, json!(null));
        let mut manager = Manager::load(&mock.clone().into_client(), URI).await.unwrap();
        manager.set_date_time_local_offset("+00:00");
        manager.set_time_zone_name("UTC");
        manager.set_auto_dst_enabled(false);
        let _ = manager.update().await.unwrap();
        assert_eq!(
            mock.writes()[0].body,
            Some(json!({"DateTimeLocalOffset": "+00:00", "TimeZoneName": "UTC"}))
        );
    }

    #[tokio::test]
    async fn test_resets() {
        let mock = MockTransport::new()
            .with_json(URI, payload())
            .with_status(RESET, StatusCode::NO_CONTENT, json!(null))
            .with_status(DEFAULTS, StatusCode::NO_CONTENT, json!(null));
        let manager = Manager::load(&mock.clone().into_client(), URI).await.unwrap();

        let err = manager.reset(ResetType::ForceOff).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let _ = manager.reset(ResetType::GracefulRestart).await.unwrap();

        let err = manager
            .reset_to_defaults(ResetToDefaultsType::PreserveNetwork)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let _ = manager
            .reset_to_defaults(ResetToDefaultsType::ResetAll)
            .await
            .unwrap();

        let writes = mock.writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].uri, RESET);
        assert_eq!(writes[0].body, Some(json!({"ResetType": "GracefulRestart"})));
        assert_eq!(writes[1].uri, DEFAULTS);
        assert_eq!(writes[1].body, Some(json!({"ResetType": "ResetAll"})));
    }
}
