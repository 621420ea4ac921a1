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


//! Fans.

use serde_json::Value;

use super::protocol::{self, FanSpeed, PowerReading};
use super::Chassis;
use crate::common::update::update_resource;
use crate::common::{api, Collected, Link, Status, TaskMonitor};
use crate::Result;

const MUTABLE_FIELDS: &[&str] = &["LocationIndicatorActive"];

redfish_resource! {
    #[doc = "A fan."]
    #[doc = ""]
    #[doc = "The name is taken from `FanName` when the service provides one."]
    Fan = protocol::Fan
}

impl Fan {
    transparent_property! {
        #[doc = "Diameter in millimeters."]
        fan_diameter_mm: Option<u32>
    }

    transparent_property! {
        #[doc = "Whether the fan can be replaced while powered."]
        hot_pluggable: Option<bool>
    }

    transparent_property! {
        #[doc = "Location of the fan, as received."]
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
        #[doc = "Area or device the fan is associated with."]
        physical_context: ref Option<String>
    }

    transparent_property! {
        #[doc = "Power consumption reading."]
        power_watts: ref Option<PowerReading>
    }

    transparent_property! {
        #[doc = "Rated speed in revolutions per minute."]
        rated_speed_rpm: Option<u32>
    }

    transparent_property! {
        #[doc = "Whether the fan can be replaced."]
        replaceable: Option<bool>
    }

    transparent_property! {
        #[doc = "Speed of the secondary rotor of a dual rotor fan."]
        secondary_speed_percent: ref Option<FanSpeed>
    }

    transparent_property! {
        #[doc = "Serial number (if known)."]
        serial_number: ref Option<String>
    }

    transparent_property! {
        #[doc = "Part number of a spare (if known)."]
        spare_part_number: ref Option<String>
    }

    transparent_property! {
        #[doc = "Current speed."]
        speed_percent: ref Option<FanSpeed>
    }

    transparent_property! {
        #[doc = "Status and health."]
        status: ref Status
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

    /// Chassis cooled by this fan (when not only its own chassis).
    pub async fn cooling_chassis(&self) -> Collected<Chassis> {
        api::get_objects(self.state.client(), &self.inner.links.cooling_chassis).await
    }

    /// Number of chassis cooled by this fan.
    pub fn cooling_chassis_count(&self) -> usize {
        let links = &self.inner.links;
        links
            .cooling_chassis_count
            .unwrap_or_else(|| links.cooling_chassis.len())
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use super::Fan;
    use crate::chassis::ThermalSubsystem;
    use crate::common::mock::MockTransport;

    const URI: &str = "/redfish/v1/Chassis/1U/ThermalSubsystem/Fans/Bay1";

    fn payload() -> Value {
        json!({
            "@odata.type": "#Fan.v1_5_0.Fan",
            "@odata.id": URI,
            "Id": "Bay1",
            "Name": "Fan Bay 1",
            "PhysicalContext": "SystemBoard",
            "Status": {"State": "Enabled", "Health": "OK"},
            "SpeedPercent": {
                "Reading": 45,
                "SpeedRPM": 2200,
                "DataSourceUri": "/redfish/v1/Chassis/1U/Sensors/FanBay1"
            },
            "PartNumber": "02-3467",
            "SparePartNumber": "02-3467",
            "SerialNumber": "2837264",
            "Manufacturer": "Contoso Fans",
            "Model": "MegaSpin 3000",
            "HotPluggable": true,
            "LocationIndicatorActive": true
        })
    }

    #[tokio::test]
    async fn test_decode() {
        let client = MockTransport::new().with_json(URI, payload()).into_client();
        let fan = Fan::load(&client, URI).await.unwrap();
        assert_eq!(fan.name(), "Fan Bay 1");
        let speed = fan.speed_percent().as_ref().unwrap();
        assert_eq!(speed.reading, Some(45.0));
        assert_eq!(speed.speed_rpm, Some(2200.0));
        assert_eq!(
            speed.data_source_uri.as_deref(),
            Some("/redfish/v1/Chassis/1U/Sensors/FanBay1")
        );
        assert_eq!(fan.location_indicator_active(), Some(true));
        assert_eq!(fan.hot_pluggable(), Some(true));
        assert_eq!(fan.cooling_chassis_count(), 0);
    }

    #[tokio::test]
    async fn test_fan_name_overrides_name() {
        let mut body = payload();
        body["FanName"] = json!("CPU Fan");
        body["Links"] = json!({
            "CoolingChassis": [{"@odata.id": "/redfish/v1/Chassis/1U"}],
            "CoolingChassis@odata.count": 1
        });
        let client = MockTransport::new().with_json(URI, body).into_client();
        let fan = Fan::load(&client, URI).await.unwrap();
        assert_eq!(fan.name(), "CPU Fan");
        assert_eq!(fan.cooling_chassis_count(), 1);

        let mut body = payload();
        body["FanName"] = json!("");
        let client = MockTransport::new().with_json(URI, body).into_client();
        let fan = Fan::load(&client, URI).await.unwrap();
        assert_eq!(fan.name(), "Fan Bay 1");
    }

    #[tokio::test]
    async fn test_update() {
        let mock = MockTransport::new()
            .with_json(URI, payload())
            .with_status(URI, StatusCode::NO_CONTENT, json!(null));
        let mut fan = Fan::load(&mock.clone().into_client(), URI).await.unwrap();
        fan.set_location_indicator_active(false);
        let _ = fan.update().await.unwrap();
        assert_eq!(
            mock.writes()[0].body,
            Some(json!({"LocationIndicatorActive": false}))
        );
        assert_eq!(fan.location_indicator_active(), Some(false));
    }

    #[tokio::test]
    async fn test_thermal_subsystem_fans() {
        let subsystem = "/redfish/v1/Chassis/1U/ThermalSubsystem";
        let fans = "/redfish/v1/Chassis/1U/ThermalSubsystem/Fans";
        let client = MockTransport::new()
            .with_json(
                subsystem,
                json!({
                    "@odata.id": subsystem,
                    "Id": "ThermalSubsystem",
                    "Name": "Thermal Subsystem for Chassis",
                    "Fans": {"@odata.id": fans},
                    "Status": {"State": "Enabled", "Health": "OK"}
                }),
            )
            .with_json(
                fans,
                json!({
                    "@odata.id": fans,
                    "Members": [{"@odata.id": URI}],
                    "Members@odata.count": 1
                }),
            )
            .with_json(URI, payload())
            .into_client();
        let subsystem = ThermalSubsystem::load(&client, subsystem).await.unwrap();
        assert!(subsystem.pumps_link().is_none());
        let fans = subsystem.fans().await.unwrap().into_result().unwrap();
        assert_eq!(fans.len(), 1);
        assert_eq!(fans[0].id(), "Bay1");
    }
}
