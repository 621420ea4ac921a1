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


//! Memory modules.

use serde_json::Value;

use super::protocol::{self, MemoryLocation, MemoryType, SecurityState};
use crate::chassis::Chassis;
use crate::common::update::update_resource;
use crate::common::{api, Link, Status, TaskMonitor};
use crate::Result;

const MUTABLE_FIELDS: &[&str] = &["SecurityState"];

redfish_resource! {
    #[doc = "A memory module (DIMM)."]
    Memory = protocol::Memory
}

impl Memory {
    transparent_property! {
        #[doc = "Capacity in MiB."]
        capacity_mib: Option<u64>
    }

    transparent_property! {
        #[doc = "Data width in bits."]
        data_width_bits: Option<u32>
    }

    transparent_property! {
        #[doc = "Label of the memory slot."]
        device_locator: ref Option<String>
    }

    transparent_property! {
        #[doc = "Manufacturer (if known)."]
        manufacturer: ref Option<String>
    }

    transparent_property! {
        #[doc = "Device type, e.g. `DDR4`."]
        memory_device_type: ref Option<String>
    }

    transparent_property! {
        #[doc = "Location of the module."]
        memory_location: ref Option<MemoryLocation>
    }

    transparent_property! {
        #[doc = "Type of the memory."]
        memory_type: Option<MemoryType>
    }

    transparent_property! {
        #[doc = "Vendor-specific extensions, as received."]
        oem: ref Option<Value>
    }

    transparent_property! {
        #[doc = "Operating speed in MHz or MT/s."]
        operating_speed_mhz: Option<u32>
    }

    transparent_property! {
        #[doc = "Part number (if known)."]
        part_number: ref Option<String>
    }

    transparent_property! {
        #[doc = "Security state."]
        security_state: Option<SecurityState>
    }

    update_field! {
        #[doc = "Set the security state."]
        set_security_state, with_security_state -> security_state: optional SecurityState
    }

    transparent_property! {
        #[doc = "Serial number (if known)."]
        serial_number: ref Option<String>
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

    /// Chassis containing the module.
    pub async fn chassis(&self) -> Result<Option<Chassis>> {
        api::get_link(self.state.client(), self.inner.links.chassis.as_ref()).await
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use super::Memory;
    use crate::common::mock::MockTransport;
    use crate::common::Health;
    use crate::systems::{MemoryType, SecurityState};

    const URI: &str = "/redfish/v1/Systems/1/Memory/DIMM1";

    fn payload() -> Value {
        json!({
            "@odata.type": "#Memory.v1_17_0.Memory",
            "@odata.id": URI,
            "Id": "DIMM1",
            "Name": "DIMM Slot 1",
            "CapacityMiB": 32768,
            "DataWidthBits": 64,
            "DeviceLocator": "PROC 1 DIMM 1",
            "Manufacturer": "Contoso",
            "MemoryDeviceType": "DDR5",
            "MemoryLocation": {"Channel": 0, "MemoryController": 0, "Slot": 1, "Socket": 1},
            "MemoryType": "DRAM",
            "OperatingSpeedMhz": 4800,
            "SecurityState": "Unlocked",
            "Status": {"State": "Enabled", "Health": "OK"},
            "Links": {"Chassis": {"@odata.id": "/redfish/v1/Chassis/1U"}}
        })
    }

    #[tokio::test]
    async fn test_decode() {
        let client = MockTransport::new().with_json(URI, payload()).into_client();
        let memory = Memory::load(&client, URI).await.unwrap();
        assert_eq!(memory.capacity_mib(), Some(32768));
        assert_eq!(memory.memory_type(), Some(MemoryType::Dram));
        assert_eq!(memory.memory_location().as_ref().unwrap().slot, Some(1));
        assert_eq!(memory.security_state(), Some(SecurityState::Unlocked));
        assert_eq!(memory.status().health, Some(Health::Ok));
        assert!(memory.assembly_link().is_none());
    }

    #[tokio::test]
    async fn test_update_security_state() {
        let mock = MockTransport::new()
            .with_json(URI, payload())
            .with_status(URI, StatusCode::NO_CONTENT, json!(null));
        let mut memory = Memory::load(&mock.clone().into_client(), URI).await.unwrap();
        memory.set_security_state(SecurityState::Locked);
        assert!(memory.update().await.unwrap().is_none());
        let writes = mock.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].body, Some(json!({"SecurityState": "Locked"})));
        assert_eq!(memory.security_state(), Some(SecurityState::Locked));
    }
}
