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


//! BIOS settings.

use serde_json::{Map, Value};

use super::protocol;
use crate::common::action::{self, require_non_empty};
use crate::common::settings::{self, update_attributes};
use crate::common::{api, Collected, Settings, SettingsApplyTime, TaskMonitor};
use crate::software::SoftwareInventory;
use crate::Result;

/// Attributes that are sent even when they did not change.
const ALWAYS_SEND_PREFIX: &str = "BootTypeOrder";

redfish_resource! {
    #[doc = "BIOS of a computer system."]
    #[doc = ""]
    #[doc = "Attribute changes usually go to a separate settings object and take effect on reset."]
    Bios = protocol::Bios, settings = settings
}

impl Bios {
    transparent_property! {
        #[doc = "Identifier of the attribute registry describing the attributes."]
        attribute_registry: ref Option<String>
    }

    /// All attributes with their current values.
    #[inline]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.inner.attributes
    }

    /// Raw value of an attribute.
    #[inline]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.inner.attributes.get(name)
    }

    /// Value of a string attribute.
    pub fn string(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(Value::as_str)
    }

    /// Value of an integer attribute.
    ///
    /// Floating point values are truncated.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.attribute(name)
            .and_then(|value| value.as_i64().or_else(|| value.as_f64().map(|f| f as i64)))
    }

    /// Value of a numeric attribute.
    pub fn float(&self, name: &str) -> Option<f64> {
        self.attribute(name).and_then(Value::as_f64)
    }

    /// Value of a boolean attribute.
    ///
    /// Accepts JSON booleans, `1`/`0` and (case-insensitively) `"true"`, `"1"` and `"enabled"`
    /// strings as true. Other strings are false.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.attribute(name).and_then(|value| match value {
            Value::Bool(value) => Some(*value),
            Value::Number(number) => number.as_f64().map(|n| n != 0.0),
            Value::String(s) => {
                let s = s.to_lowercase();
                Some(s == "true" || s == "1" || s == "enabled")
            }
            _ => None,
        })
    }

    /// Settings redirection (if the service separates pending settings).
    #[inline]
    pub fn pending_settings(&self) -> Option<&Settings> {
        self.inner.settings.as_ref()
    }

    /// Apply times the caller may request for attribute updates.
    ///
    /// Falls back to the four standard values when the service advertises nothing.
    pub fn allowed_apply_times(&self) -> Vec<SettingsApplyTime> {
        settings::allowed_apply_times(self.inner.settings.as_ref())
    }

    /// Apply times the service advertised (possibly none).
    pub fn advertised_apply_times(&self) -> &[SettingsApplyTime] {
        settings::advertised_apply_times(self)
    }

    /// Update BIOS attributes.
    ///
    /// Only attributes that differ from the last observed values are sent, except for
    /// `BootTypeOrder*` attributes that are always sent.
    pub async fn update_attributes(
        &mut self,
        attributes: &Map<String, Value>,
    ) -> Result<Option<TaskMonitor>> {
        update_attributes(self, "Attributes", attributes, Some(ALWAYS_SEND_PREFIX), None).await
    }

    /// Update BIOS attributes, requesting the given apply time.
    pub async fn update_attributes_apply_at(
        &mut self,
        attributes: &Map<String, Value>,
        apply_time: SettingsApplyTime,
    ) -> Result<Option<TaskMonitor>> {
        update_attributes(
            self,
            "Attributes",
            attributes,
            Some(ALWAYS_SEND_PREFIX),
            Some(apply_time),
        )
        .await
    }

    /// Change a BIOS password.
    pub async fn change_password(
        &self,
        password_name: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<Option<TaskMonitor>> {
        require_non_empty("PasswordName", password_name)?;
        require_non_empty("OldPassword", old_password)?;
        require_non_empty("NewPassword", new_password)?;

        let mut parameters = Map::new();
        let _ = parameters.insert("PasswordName".into(), Value::from(password_name));
        let _ = parameters.insert("OldPassword".into(), Value::from(old_password));
        let _ = parameters.insert("NewPassword".into(), Value::from(new_password));
        action::invoke(
            &self.state,
            self.inner.actions.change_password.as_ref(),
            "ChangePassword",
            parameters,
            &["PasswordName"],
        )
        .await
    }

    /// Reset all attributes to their defaults.
    ///
    /// A reset of the system is usually required to apply the change.
    pub async fn reset_bios(&self) -> Result<Option<TaskMonitor>> {
        action::invoke(
            &self.state,
            self.inner.actions.reset_bios.as_ref(),
            "ResetBios",
            Map::new(),
            &[],
        )
        .await
    }

    /// Software image the BIOS is running (if known).
    pub async fn active_software_image(&self) -> Result<Option<SoftwareInventory>> {
        api::get_link(
            self.state.client(),
            self.inner.links.active_software_image.as_ref(),
        )
        .await
    }

    /// Software images of the BIOS.
    pub async fn software_images(&self) -> Collected<SoftwareInventory> {
        api::get_objects(self.state.client(), &self.inner.links.software_images).await
    }
}
