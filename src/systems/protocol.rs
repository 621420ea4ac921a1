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


//! Computer system wire structures.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::common::{
    ActionDescriptor, Entity, IndicatorLed, Link, Links, PowerState, Settings, Status,
};
use crate::utils::null_as_default;

protocol_enum! {
    #[doc = "Type of a computer system."]
    enum SystemType = Unknown {
        Physical = "Physical",
        Virtual = "Virtual",
        Os = "OS",
        PhysicallyPartitioned = "PhysicallyPartitioned",
        VirtuallyPartitioned = "VirtuallyPartitioned",
        Composed = "Composed",
        Dpu = "DPU",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Power mode of a computer system."]
    enum PowerMode = Unknown {
        MaximumPerformance = "MaximumPerformance",
        BalancedPerformance = "BalancedPerformance",
        PowerSaving = "PowerSaving",
        Static = "Static",
        OsControlled = "OSControlled",
        Oem = "OEM",
        EfficiencyFavorPower = "EfficiencyFavorPower",
        EfficiencyFavorPerformance = "EfficiencyFavorPerformance",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "What happens when power is restored."]
    enum PowerRestorePolicy = Unknown {
        AlwaysOn = "AlwaysOn",
        AlwaysOff = "AlwaysOff",
        LastState = "LastState",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Whether the boot source override is active."]
    enum BootSourceOverrideEnabled = Unknown {
        Disabled = "Disabled",
        Once = "Once",
        Continuous = "Continuous",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Boot mode used with the boot source override."]
    enum BootSourceOverrideMode = Unknown {
        Legacy = "Legacy",
        Uefi = "UEFI",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Device to boot from instead of the normal boot order."]
    enum BootSourceOverrideTarget = Unknown {
        None = "None",
        Pxe = "Pxe",
        Floppy = "Floppy",
        Cd = "Cd",
        Usb = "Usb",
        Hdd = "Hdd",
        BiosSetup = "BiosSetup",
        Utilities = "Utilities",
        Diags = "Diags",
        UefiShell = "UefiShell",
        UefiTarget = "UefiTarget",
        SdCard = "SDCard",
        UefiHttp = "UefiHttp",
        RemoteDrive = "RemoteDrive",
        UefiBootNext = "UefiBootNext",
        Recovery = "Recovery",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Data to remove when decommissioning a system."]
    enum DecommissionType {
        All = "All",
        UserData = "UserData",
        ManagerConfig = "ManagerConfig",
        BiosConfig = "BIOSConfig",
        NetworkConfig = "NetworkConfig",
        StorageConfig = "StorageConfig",
        Logs = "Logs",
        Tpm = "TPM"
    }
}

protocol_enum! {
    #[doc = "Component of a system whose configuration is exported."]
    enum ExportComponent {
        All = "All",
        Manager = "Manager",
        Bios = "BIOS",
        Network = "Network",
        Storage = "Storage"
    }
}

protocol_enum! {
    #[doc = "Kind of configuration export."]
    enum ExportType {
        NonDestructive = "NonDestructive",
        CloneWithinFabric = "CloneWithinFabric",
        Replacement = "Replacement"
    }
}

protocol_enum! {
    #[doc = "Treatment of sensitive data in an export."]
    enum ExportSecurity {
        IncludeSensitiveData = "IncludeSensitiveData",
        HashedDataOnly = "HashedDataOnly",
        ExcludeSensitiveData = "ExcludeSensitiveData"
    }
}

protocol_enum! {
    #[doc = "Security state of a memory module."]
    enum SecurityState = Unknown {
        Enabled = "Enabled",
        Disabled = "Disabled",
        Unlocked = "Unlocked",
        Locked = "Locked",
        Frozen = "Frozen",
        Passphraselimit = "Passphraselimit",
        Unknown = ""
    }
}

protocol_enum! {
    #[doc = "Type of a memory module."]
    enum MemoryType = Unknown {
        Dram = "DRAM",
        NvdimmN = "NVDIMM_N",
        NvdimmF = "NVDIMM_F",
        NvdimmP = "NVDIMM_P",
        IntelOptane = "IntelOptane",
        Unknown = ""
    }
}

/// Boot settings of a computer system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Boot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_retry_attempts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_retry_config: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_options: Option<Link>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub boot_order: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_source_override_enabled: Option<BootSourceOverrideEnabled>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_source_override_mode: Option<BootSourceOverrideMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_source_override_target: Option<BootSourceOverrideTarget>,
    /// Targets the service accepts (if it said so).
    #[serde(
        default,
        rename = "BootSourceOverrideTarget@Redfish.AllowableValues",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub allowed_override_targets: Vec<BootSourceOverrideTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Link>,
    #[serde(default, rename = "HttpBootUri", skip_serializing_if = "Option::is_none")]
    pub http_boot_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uefi_target_boot_source_override: Option<String>,
}

/// Summary of the memory of a computer system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemorySummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_mirroring: Option<String>,
    #[serde(default, rename = "TotalSystemMemoryGiB", skip_serializing_if = "Option::is_none")]
    pub total_system_memory_gib: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// Summary of the processors of a computer system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_processor_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// Parameters of the `Decommission` action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DecommissionParameters {
    /// Current ETag of the system, echoed to the service as is.
    #[serde(rename = "ComputerSystemETag", skip_serializing_if = "Option::is_none")]
    pub computer_system_etag: Option<String>,
    /// Types of data to remove.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decommission_types: Vec<DecommissionType>,
    /// OEM-specific types of data to remove.
    #[serde(rename = "OEMDecommissionTypes", skip_serializing_if = "Vec::is_empty")]
    pub oem_decommission_types: Vec<String>,
    /// Whether a secure erase is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_secure_erase: Option<bool>,
}

/// Parameters of the `ExportConfiguration` action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportConfigurationParameters {
    /// Components to export.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ExportComponent>,
    /// Passphrase to encrypt the exported file with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_passphrase: Option<String>,
    /// Kind of export.
    pub export_type: ExportType,
    /// OEM-specific components to export.
    #[serde(rename = "OEMComponents", skip_serializing_if = "Vec::is_empty")]
    pub oem_components: Vec<String>,
    /// Treatment of sensitive data.
    pub security: ExportSecurity,
}

/// Parameters of `AddResourceBlock` and `RemoveResourceBlock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceBlockChange {
    /// Current ETag of the system, echoed to the service as is.
    #[serde(rename = "ComputerSystemETag", skip_serializing_if = "Option::is_none")]
    pub computer_system_etag: Option<String>,
    /// Resource block to add or remove.
    pub resource_block: Link,
    /// Current ETag of the resource block, echoed to the service as is.
    #[serde(rename = "ResourceBlockETag", skip_serializing_if = "Option::is_none")]
    pub resource_block_etag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ComputerSystemActions {
    #[serde(default, rename = "#ComputerSystem.AddResourceBlock", skip_serializing_if = "Option::is_none")]
    pub add_resource_block: Option<ActionDescriptor>,
    #[serde(default, rename = "#ComputerSystem.Decommission", skip_serializing_if = "Option::is_none")]
    pub decommission: Option<ActionDescriptor>,
    #[serde(default, rename = "#ComputerSystem.ExportConfiguration", skip_serializing_if = "Option::is_none")]
    pub export_configuration: Option<ActionDescriptor>,
    #[serde(default, rename = "#ComputerSystem.RemoveResourceBlock", skip_serializing_if = "Option::is_none")]
    pub remove_resource_block: Option<ActionDescriptor>,
    #[serde(default, rename = "#ComputerSystem.Reset", skip_serializing_if = "Option::is_none")]
    pub reset: Option<ActionDescriptor>,
    #[serde(default, rename = "#ComputerSystem.SetDefaultBootOrder", skip_serializing_if = "Option::is_none")]
    pub set_default_boot_order: Option<ActionDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComputerSystemLinks {
    #[serde(default)]
    pub chassis: Links,
    #[serde(default)]
    pub consuming_computer_systems: Links,
    #[serde(default)]
    pub cooled_by: Links,
    #[serde(default)]
    pub managed_by: Links,
    #[serde(default)]
    pub powered_by: Links,
    #[serde(default)]
    pub resource_blocks: Links,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComputerSystem {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub actions: ComputerSystemActions,
    #[serde(default)]
    pub asset_tag: Option<String>,
    #[serde(default)]
    pub bios: Option<Link>,
    #[serde(default)]
    pub bios_version: Option<String>,
    #[serde(default)]
    pub boot: Option<Boot>,
    #[serde(default)]
    pub ethernet_interfaces: Option<Link>,
    #[serde(default)]
    pub host_name: Option<String>,
    #[serde(default, rename = "IndicatorLED")]
    pub indicator_led: Option<IndicatorLed>,
    #[serde(default)]
    pub links: ComputerSystemLinks,
    #[serde(default)]
    pub location_indicator_active: Option<bool>,
    #[serde(default)]
    pub log_services: Option<Link>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub memory: Option<Link>,
    #[serde(default)]
    pub memory_summary: Option<MemorySummary>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub power_cycle_delay_seconds: Option<f64>,
    #[serde(default)]
    pub power_mode: Option<PowerMode>,
    #[serde(default)]
    pub power_off_delay_seconds: Option<f64>,
    #[serde(default)]
    pub power_on_delay_seconds: Option<f64>,
    #[serde(default)]
    pub power_restore_policy: Option<PowerRestorePolicy>,
    #[serde(default)]
    pub power_state: Option<PowerState>,
    #[serde(default)]
    pub processor_summary: Option<ProcessorSummary>,
    #[serde(default)]
    pub processors: Option<Link>,
    #[serde(default)]
    pub secure_boot: Option<Link>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default, rename = "@Redfish.Settings")]
    pub settings: Option<Settings>,
    #[serde(default, rename = "SKU")]
    pub sku: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub storage: Option<Link>,
    #[serde(default)]
    pub system_type: Option<SystemType>,
    #[serde(default, rename = "UUID")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BiosActions {
    #[serde(default, rename = "#Bios.ChangePassword", skip_serializing_if = "Option::is_none")]
    pub change_password: Option<ActionDescriptor>,
    #[serde(default, rename = "#Bios.ResetBios", skip_serializing_if = "Option::is_none")]
    pub reset_bios: Option<ActionDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BiosLinks {
    #[serde(default)]
    pub active_software_image: Option<Link>,
    #[serde(default)]
    pub software_images: Links,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bios {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub actions: BiosActions,
    #[serde(default)]
    pub attribute_registry: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub links: BiosLinks,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default, rename = "@Redfish.Settings")]
    pub settings: Option<Settings>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemoryLinks {
    #[serde(default)]
    pub chassis: Option<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemoryLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_controller: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Memory {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub assembly: Option<Link>,
    #[serde(default, rename = "CapacityMiB")]
    pub capacity_mib: Option<u64>,
    #[serde(default, rename = "DataWidthBits")]
    pub data_width_bits: Option<u32>,
    #[serde(default)]
    pub device_locator: Option<String>,
    #[serde(default)]
    pub links: MemoryLinks,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub memory_device_type: Option<String>,
    #[serde(default)]
    pub memory_location: Option<MemoryLocation>,
    #[serde(default)]
    pub memory_type: Option<MemoryType>,
    #[serde(default)]
    pub oem: Option<Value>,
    #[serde(default)]
    pub operating_speed_mhz: Option<u32>,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub security_state: Option<SecurityState>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub status: Status,
}
