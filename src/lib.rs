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


//! Redfish client in Rust.
//!
//! The goal of this project is to provide a typed object model for working with
//! [Redfish](https://www.dmtf.org/standards/redfish) services exposed by baseboard
//! management controllers and other management software.
//!
//! # Usage
//!
//! Start with a [Client](struct.Client.html), created from a [Config](struct.Config.html)
//! or from any [Transport](trait.Transport.html) implementation:
//!
//! ```rust,no_run
//! async fn power_off() -> redfish::Result<()> {
//!     let client = redfish::Client::from_env()?;
//!     let systems = client.list_systems().await?.into_result()?;
//!     for system in systems {
//!         println!("{} is {:?}", system.id(), system.power_state());
//!         let _ = system.reset(redfish::ResetType::GracefulShutdown).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Records are snapshots: they never change unless refreshed with
//! [Refresh::refresh](trait.Refresh.html#tymethod.refresh) or updated by the caller. Writes send
//! only the mutable fields that differ from the last observed representation.
//!
//! # Features
//!
//! * [Computer systems](systems/index.html), BIOS and memory
//! * [Chassis](chassis/index.html), cables and thermal subsystems
//! * [Managers](managers/index.html) and [software inventory](software/index.html)
//! * [Fabrics](fabrics/index.html), switches and zones
//! * [Composition](composition/index.html) and [power domains](power/index.html)
//! * [Attribute registries](registries/index.html) and [tasks](tasks/index.html)

#![crate_name = "redfish"]
#![crate_type = "lib"]
// NOTE: we do not use generic deny(warnings) to avoid breakages with new
// versions of the compiler. Add more warnings here as you discover them.
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    while_true
)]

#[macro_use]
extern crate log;

#[macro_use]
mod utils;

pub mod chassis;
mod client;
mod common;
pub mod composition;
mod config;
mod error;
pub mod fabrics;
pub mod managers;
pub mod power;
pub mod registries;
pub mod service;
pub mod software;
pub mod systems;
pub mod tasks;
mod transport;

pub use crate::client::Client;
pub use crate::common::{
    allowed_apply_times, ActionDescriptor, Collected, Collection, Entity, Health, IndicatorLed,
    Link, Links, Message, PowerState, Refresh, ResetType, Resource, ResourceState, Settings,
    SettingsApplyTime, State, Status, TaskMonitor, TaskProgress,
};
pub use crate::config::Config;
pub use crate::error::{Error, ErrorKind, RedfishError, Result};
pub use crate::transport::{HttpTransport, Response, Transport};
