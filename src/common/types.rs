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

//! Types shared between services.

use std::fmt;
use std::ops::Deref;

use serde::de::Error as DeserError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A hyperlink to another resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Link(String);

/// An ordered list of hyperlinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<Link>);

impl Link {
    /// Create a link to the given URI.
    #[inline]
    pub fn new<S: Into<String>>(uri: S) -> Link {
        Link(uri.into())
    }

    /// The target URI.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the link has no target.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Link {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Link> for String {
    fn from(value: Link) -> String {
        value.0
    }
}

impl<'s> From<&'s str> for Link {
    fn from(value: &'s str) -> Link {
        Link(String::from(value))
    }
}

impl From<String> for Link {
    fn from(value: String) -> Link {
        Link(value)
    }
}

impl Serialize for Link {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Reference<'a> {
            #[serde(rename = "@odata.id")]
            odata_id: &'a str,
        }

        Reference { odata_id: &self.0 }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Link {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Link, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Reference {
            #[serde(default, rename = "@odata.id")]
            odata_id: Option<String>,
            // Some older services use href.
            #[serde(default)]
            href: Option<String>,
        }

        let value = Reference::deserialize(deserializer)?;
        value
            .odata_id
            .or(value.href)
            .map(Link)
            .ok_or_else(|| DeserError::missing_field("@odata.id"))
    }
}

impl Links {
    /// Create a list from URIs.
    pub fn new<I, S>(uris: I) -> Links
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Links(uris.into_iter().map(|uri| Link(uri.into())).collect())
    }

    /// Target URIs in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|link| link.0.clone()).collect()
    }
}

impl Deref for Links {
    type Target = [Link];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Links {
    type Item = Link;
    type IntoIter = ::std::vec::IntoIter<Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Links {
    type Item = &'a Link;
    type IntoIter = ::std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Link>> for Links {
    fn from(value: Vec<Link>) -> Links {
        Links(value)
    }
}

impl Serialize for Links {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Links, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<Vec<Link>> = Deserialize::deserialize(deserializer)?;
        Ok(Links(value.unwrap_or_default()))
    }
}

protocol_enum! {
    /// Health of a resource.
    enum Health = Unknown {
        /// Normal.
        Ok = "OK",
        /// A condition requires attention.
        Warning = "Warning",
        /// A critical condition requires immediate attention.
        Critical = "Critical",
        /// Reported health is not known.
        Unknown = ""
    }
}

protocol_enum! {
    /// Known state of a resource.
    enum State = Unknown {
        /// The function or resource is enabled.
        Enabled = "Enabled",
        /// The function or resource is disabled.
        Disabled = "Disabled",
        /// Enabled but awaits an external action to activate it.
        StandbyOffline = "StandbyOffline",
        /// Part of a redundancy set, awaiting a failover.
        StandbySpare = "StandbySpare",
        /// Undergoing testing.
        InTest = "InTest",
        /// Starting.
        Starting = "Starting",
        /// Not present or not detected.
        Absent = "Absent",
        /// Present but cannot be used.
        UnavailableOffline = "UnavailableOffline",
        /// Not processing commands but queues new ones.
        Deferring = "Deferring",
        /// Enabled but only processes a restricted set of commands.
        Quiesced = "Quiesced",
        /// Being updated.
        Updating = "Updating",
        /// Qualified for use but not yet enabled.
        Qualified = "Qualified",
        /// Reported state is not known.
        Unknown = ""
    }
}

/// Status of a resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Status {
    /// Health of the resource itself.
    #[serde(default, rename = "Health", skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    /// Health of the resource and its dependent resources.
    #[serde(default, rename = "HealthRollup", skip_serializing_if = "Option::is_none")]
    pub health_rollup: Option<Health>,
    /// Known state of the resource.
    #[serde(default, rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
}

protocol_enum! {
    /// State of an indicator LED.
    enum IndicatorLed = Unknown {
        /// The indicator is lit.
        Lit = "Lit",
        /// The indicator is blinking.
        Blinking = "Blinking",
        /// The indicator is off.
        Off = "Off",
        /// Reported state is not known.
        Unknown = ""
    }
}

protocol_enum! {
    /// Power state of a resource.
    enum PowerState = Unknown {
        /// Powered on.
        On = "On",
        /// Powered off.
        Off = "Off",
        /// Paused.
        Paused = "Paused",
        /// Transitioning to on.
        PoweringOn = "PoweringOn",
        /// Transitioning to off.
        PoweringOff = "PoweringOff",
        /// Reported state is not known.
        Unknown = ""
    }
}

protocol_enum! {
    /// Type of reset to perform.
    enum ResetType {
        /// Turn on the unit.
        On = "On",
        /// Turn on the unit immediately.
        ForceOn = "ForceOn",
        /// Turn off the unit immediately (non-graceful shutdown).
        ForceOff = "ForceOff",
        /// Shut down immediately and non-gracefully and restart.
        ForceRestart = "ForceRestart",
        /// Full power cycle.
        FullPowerCycle = "FullPowerCycle",
        /// Shut down gracefully and restart.
        GracefulRestart = "GracefulRestart",
        /// Shut down gracefully and power off.
        GracefulShutdown = "GracefulShutdown",
        /// Simulate the pressing of the physical power button.
        PushPowerButton = "PushPowerButton",
        /// Power cycle, off then on.
        PowerCycle = "PowerCycle",
        /// Generate a diagnostic interrupt.
        Nmi = "Nmi",
        /// Pause execution.
        Pause = "Pause",
        /// Resume execution.
        Resume = "Resume",
        /// Write state to memory and suspend.
        Suspend = "Suspend"
    }
}

/// A message returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Message {
    /// Registry-qualified identifier of the message.
    #[serde(default, rename = "MessageId")]
    pub message_id: String,
    /// Human-readable message.
    #[serde(default, rename = "Message")]
    pub message: String,
    /// Substitution arguments of the message.
    #[serde(default, rename = "MessageArgs", skip_serializing_if = "Vec::is_empty")]
    pub message_args: Vec<String>,
    /// Severity of the message.
    #[serde(default, rename = "MessageSeverity", skip_serializing_if = "Option::is_none")]
    pub severity: Option<Health>,
    /// Properties the message relates to.
    #[serde(default, rename = "RelatedProperties", skip_serializing_if = "Vec::is_empty")]
    pub related_properties: Vec<String>,
    /// Suggested corrective action.
    #[serde(default, rename = "Resolution", skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Vendor-specific extensions.
    #[serde(default, rename = "Oem", skip_serializing_if = "Option::is_none")]
    pub oem: Option<Value>,
}
