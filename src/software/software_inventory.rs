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


//! Firmware and software images.

use serde_json::Value;

use super::protocol;
use crate::common::update::update_resource;
use crate::common::{Links, Status, TaskMonitor};
use crate::Result;

const MUTABLE_FIELDS: &[&str] = &["WriteProtected"];

redfish_resource! {
    #[doc = "A firmware or software image known to the service."]
    SoftwareInventory = protocol::SoftwareInventory
}

impl SoftwareInventory {
    transparent_property! {
        #[doc = "Lowest version the image can be downgraded to (if known)."]
        lowest_supported_version: ref Option<String>
    }

    transparent_property! {
        #[doc = "Manufacturer (if known)."]
        manufacturer: ref Option<String>
    }

    transparent_property! {
        #[doc = "Vendor-specific extensions, as received."]
        oem: ref Option<Value>
    }

    transparent_property! {
        #[doc = "Release date (if known)."]
        release_date: ref Option<String>
    }

    transparent_property! {
        #[doc = "Implementation-specific identifier of the image."]
        software_id: ref Option<String>
    }

    transparent_property! {
        #[doc = "Status and health."]
        status: ref Status
    }

    transparent_property! {
        #[doc = "Whether the image can be updated."]
        updateable: Option<bool>
    }

    transparent_property! {
        #[doc = "Version of the image."]
        version: ref Option<String>
    }

    transparent_property! {
        #[doc = "Whether the image is protected from updates."]
        write_protected: Option<bool>
    }

    update_field! {
        #[doc = "Protect the image from updates or remove the protection."]
        set_write_protected, with_write_protected -> write_protected: optional bool
    }

    /// Links to the resources the image applies to.
    #[inline]
    pub fn related_item(&self) -> &Links {
        &self.inner.related_item
    }

    /// Send changes of the mutable fields to the service.
    pub async fn update(&mut self) -> Result<Option<TaskMonitor>> {
        update_resource(self, MUTABLE_FIELDS, None).await
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;
    use serde_json::json;

    use super::SoftwareInventory;
    use crate::common::mock::MockTransport;

    const URI: &str = "/redfish/v1/UpdateService/FirmwareInventory/BIOS";

    #[tokio::test]
    async fn test_decode_and_protect() {
        let mock = MockTransport::new()
            .with_json(
                URI,
                json!({
                    "@odata.id": URI,
                    "@odata.type": "#SoftwareInventory.v1_10_0.SoftwareInventory",
                    "Id": "BIOS",
                    "Name": "Contoso BIOS Firmware",
                    "Status": {"State": "Enabled", "Health": "OK"},
                    "Updateable": true,
                    "Manufacturer": "Contoso",
                    "ReleaseDate": "2017-08-22T12:00:00Z",
                    "Version": "P79 v1.45 (12/06/2017)",
                    "SoftwareId": "FW-BIOS-1",
                    "WriteProtected": false,
                    "RelatedItem": [{"@odata.id": "/redfish/v1/Systems/437XR1138R2/Bios"}]
                }),
            )
            .with_status(URI, StatusCode::NO_CONTENT, json!(null));
        let mut image = SoftwareInventory::load(&mock.clone().into_client(), URI)
            .await
            .unwrap();
        assert_eq!(image.name(), "Contoso BIOS Firmware");
        assert_eq!(image.updateable(), Some(true));
        assert_eq!(image.software_id().as_deref(), Some("FW-BIOS-1"));
        assert_eq!(
            image.related_item().to_strings(),
            vec!["/redfish/v1/Systems/437XR1138R2/Bios".to_string()]
        );

        assert!(image.update().await.unwrap().is_none());
        assert!(mock.writes().is_empty());

        image.set_write_protected(true);
        let _ = image.update().await.unwrap();
        let writes = mock.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].body, Some(json!({"WriteProtected": true})));
        assert_eq!(image.write_protected(), Some(true));
    }
}
