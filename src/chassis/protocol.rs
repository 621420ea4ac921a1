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


//! Chassis, cable and cooling wire structures.

#![allow(missing_docs)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::common::{ActionDescriptor, Entity, IndicatorLed, Link, Links, PowerState, Status};
use crate::utils::null_as_default;

protocol_enum! {
    #[doc = "Physical form of a chassis."]
    enum ChassisType = Unknown {
        Rack = "Rack",
        Blade = "Blade",
        Enclosure = "Enclosure",
        StandAlone = "StandAlone",
        RackMount = "RackMount",
        Card = "Card",
        Cartridge = "Cartridge",
        Row = "Row",
        Pod = "Pod",
        Expansion = "Expansion",
        Sidecar = "Sidecar",
        Zone = "Zone",
        Sled = "Sled",
        Shelf = "Shelf",
        Drawer = "Drawer",
        Module = "Module",
        Component = "Component",
        IpBasedDrive = "IPBasedDrive",
        RackGroup = "RackGroup",
        StorageEnclosure = "StorageEnclosure",
        ImmersionTank = "ImmersionTank",
        Heater = "Heater",
        Other = "Other",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "ASHRAE environmental class of a chassis."]
    enum EnvironmentalClass = Unknown {
        A1 = "A1",
        A2 = "A2",
        A3 = "A3",
        A4 = "A4",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Purpose of a cable."]
    enum CableClass = Unknown {
        Power = "Power",
        Network = "Network",
        Storage = "Storage",
        Fan = "Fan",
        Pcie = "PCIe",
        Usb = "USB",
        Video = "Video",
        Fabric = "Fabric",
        Serial = "Serial",
        General = "General",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "User-reported state of a cable."]
    enum CableStatus = Unknown {
        Normal = "Normal",
        Degraded = "Degraded",
        Failed = "Failed",
        Testing = "Testing",
        Disabled = "Disabled",
        SetByService = "SetByService",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Connector on either end of a cable."]
    enum CableConnectorType = Unknown {
        AcPower = "ACPower",
        Db9 = "DB9",
        DcPower = "DCPower",
        DisplayPort = "DisplayPort",
        Hdmi = "HDMI",
        Ici = "ICI",
        Ipass = "IPASS",
        Pcie = "PCIe",
        Proprietary = "Proprietary",
        Rj45 = "RJ45",
        Sata = "SATA",
        Scsi = "SCSI",
        SlimSas = "SlimSAS",
        Sfp = "SFP",
        SfpPlus = "SFPPlus",
        UsbA = "USBA",
        UsbC = "USBC",
        Qsfp = "QSFP",
        Cdfp = "CDFP",
        Osfp = "OSFP",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Direction of the air flow through a chassis."]
    enum ThermalDirection = Unknown {
        FrontToBack = "FrontToBack",
        BackToFront = "BackToFront",
        TopExhaust = "TopExhaust",
        Sealed = "Sealed",
        Unknown = ""
    }
}

/// A fan speed reading embedded into a fan.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FanSpeed {
    /// Sensor the reading comes from.
    #[serde(default, rename = "DataSourceUri", skip_serializing_if = "Option::is_none")]
    pub data_source_uri: Option<String>,
    /// Speed in percent of the maximum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<f64>,
    /// Speed in revolutions per minute.
    #[serde(default, rename = "SpeedRPM", skip_serializing_if = "Option::is_none")]
    pub speed_rpm: Option<f64>,
}

/// A power reading embedded into a device.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerReading {
    /// Sensor the reading comes from.
    #[serde(default, rename = "DataSourceUri", skip_serializing_if = "Option::is_none")]
    pub data_source_uri: Option<String>,
    /// Power in watts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChassisActions {
    #[serde(default, rename = "#Chassis.Reset", skip_serializing_if = "Option::is_none")]
    pub reset: Option<ActionDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChassisLinks {
    #[serde(default)]
    pub cables: Links,
    #[serde(default)]
    pub computer_systems: Links,
    #[serde(default)]
    pub contained_by: Option<Link>,
    #[serde(default)]
    pub contains: Links,
    #[serde(default)]
    pub cooled_by: Links,
    #[serde(default)]
    pub drives: Links,
    #[serde(default)]
    pub fans: Links,
    #[serde(default)]
    pub managed_by: Links,
    #[serde(default)]
    pub managers_in_chassis: Links,
    #[serde(default, rename = "PCIeDevices")]
    pub pcie_devices: Links,
    #[serde(default)]
    pub powered_by: Links,
    #[serde(default)]
    pub processors: Links,
    #[serde(default)]
    pub resource_blocks: Links,
    #[serde(default)]
    pub storage: Links,
    #[serde(default)]
    pub switches: Links,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Chassis {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub actions: ChassisActions,
    #[serde(default)]
    pub assembly: Option<Link>,
    #[serde(default)]
    pub asset_tag: Option<String>,
    #[serde(default)]
    pub chassis_type: Option<ChassisType>,
    #[serde(default)]
    pub depth_mm: Option<f64>,
    #[serde(default)]
    pub environmental_class: Option<EnvironmentalClass>,
    #[serde(default)]
    pub height_mm: Option<f64>,
    #[serde(default)]
    pub hot_pluggable: Option<bool>,
    #[serde(default, rename = "IndicatorLED")]
    pub indicator_led: Option<IndicatorLed>,
    #[serde(default)]
    pub links: ChassisLinks,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub location_indicator_active: Option<bool>,
    #[serde(default)]
    pub log_services: Option<Link>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub max_power_watts: Option<f64>,
    #[serde(default)]
    pub memory: Option<Link>,
    #[serde(default)]
    pub min_power_watts: Option<f64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default, rename = "PCIeDevices")]
    pub pcie_devices: Option<Link>,
    #[serde(default)]
    pub power_state: Option<PowerState>,
    #[serde(default)]
    pub power_subsystem: Option<Link>,
    #[serde(default)]
    pub sensors: Option<Link>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default, rename = "SKU")]
    pub sku: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub thermal_direction: Option<ThermalDirection>,
    #[serde(default)]
    pub thermal_subsystem: Option<Link>,
    #[serde(default, rename = "UUID")]
    pub uuid: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub width_mm: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CableLinks {
    #[serde(default)]
    pub downstream_chassis: Links,
    #[serde(default, rename = "DownstreamChassis@odata.count")]
    pub downstream_chassis_count: Option<usize>,
    #[serde(default)]
    pub downstream_ports: Links,
    #[serde(default, rename = "DownstreamPorts@odata.count")]
    pub downstream_ports_count: Option<usize>,
    #[serde(default)]
    pub downstream_resources: Links,
    #[serde(default, rename = "DownstreamResources@odata.count")]
    pub downstream_resources_count: Option<usize>,
    #[serde(default)]
    pub upstream_chassis: Links,
    #[serde(default, rename = "UpstreamChassis@odata.count")]
    pub upstream_chassis_count: Option<usize>,
    #[serde(default)]
    pub upstream_ports: Links,
    #[serde(default, rename = "UpstreamPorts@odata.count")]
    pub upstream_ports_count: Option<usize>,
    #[serde(default)]
    pub upstream_resources: Links,
    #[serde(default, rename = "UpstreamResources@odata.count")]
    pub upstream_resources_count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Cable {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub assembly: Option<Link>,
    #[serde(default)]
    pub asset_tag: Option<String>,
    #[serde(default)]
    pub cable_class: Option<CableClass>,
    #[serde(default)]
    pub cable_status: Option<CableStatus>,
    #[serde(default)]
    pub cable_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub downstream_connector_types: Vec<CableConnectorType>,
    #[serde(default)]
    pub downstream_name: Option<String>,
    #[serde(default)]
    pub length_meters: Option<f64>,
    #[serde(default)]
    pub links: CableLinks,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default, rename = "SKU")]
    pub sku: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upstream_connector_types: Vec<CableConnectorType>,
    #[serde(default)]
    pub upstream_name: Option<String>,
    #[serde(default)]
    pub user_description: Option<String>,
    #[serde(default)]
    pub user_label: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThermalSubsystem {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub coolant_connectors: Option<Link>,
    #[serde(default)]
    pub fans: Option<Link>,
    #[serde(default)]
    pub fans_full_speed_override_enable: Option<bool>,
    #[serde(default)]
    pub heaters: Option<Link>,
    #[serde(default)]
    pub leak_detection: Option<Link>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub pumps: Option<Link>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub thermal_metrics: Option<Link>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FanLinks {
    #[serde(default)]
    pub cooling_chassis: Links,
    #[serde(default, rename = "CoolingChassis@odata.count")]
    pub cooling_chassis_count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", remote = "Self")]
pub struct Fan {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub assembly: Option<Link>,
    #[serde(default)]
    pub fan_diameter_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fan_name: Option<String>,
    #[serde(default)]
    pub hot_pluggable: Option<bool>,
    #[serde(default)]
    pub links: FanLinks,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub location_indicator_active: Option<bool>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub physical_context: Option<String>,
    #[serde(default)]
    pub power_watts: Option<PowerReading>,
    #[serde(default, rename = "RatedSpeedRPM")]
    pub rated_speed_rpm: Option<u32>,
    #[serde(default)]
    pub replaceable: Option<bool>,
    #[serde(default)]
    pub secondary_speed_percent: Option<FanSpeed>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub spare_part_number: Option<String>,
    #[serde(default)]
    pub speed_percent: Option<FanSpeed>,
    #[serde(default)]
    pub status: Status,
}

// A non-empty FanName takes over the generic Name.
impl<'de> Deserialize<'de> for Fan {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Fan, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fan = Fan::deserialize(deserializer)?;
        if let Some(name) = fan.fan_name.as_ref().filter(|name| !name.is_empty()) {
            fan.entity.name = name.clone();
        }
        Ok(fan)
    }
}

impl Serialize for Fan {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Fan::serialize(self, serializer)
    }
}
