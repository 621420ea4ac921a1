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


//! Read-only checks against a live service.
//!
//! Set `REDFISH_ENDPOINT` (and credentials, see `Config::from_env`) to run them.

use std::env;
use std::sync::Once;

use redfish::Refresh;

static INIT: Once = Once::new();

fn set_up() -> Option<redfish::Client> {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });

    if env::var("REDFISH_ENDPOINT").is_err() {
        eprintln!("REDFISH_ENDPOINT is not set, skipping");
        return None;
    }

    Some(redfish::Client::from_env().expect("Failed to create a client from the environment"))
}

#[tokio::test]
async fn test_service_root() {
    let Some(client) = set_up() else { return };
    let mut root = client.service_root().await.expect("Cannot get the service root");
    assert!(!root.odata_id().is_empty());
    root.refresh().await.expect("Cannot refresh the service root");
}

#[tokio::test]
async fn test_list_systems() {
    let Some(client) = set_up() else { return };
    let systems = client
        .list_systems()
        .await
        .expect("Cannot list systems")
        .into_result()
        .expect("Cannot fetch a system");
    for system in systems {
        assert!(!system.odata_id().is_empty());
        let _ = system.bios().await.expect("Cannot get BIOS");
        let _ = system
            .memory()
            .await
            .expect("Cannot list memory")
            .into_result()
            .expect("Cannot fetch memory");
    }
}

#[tokio::test]
async fn test_list_chassis() {
    let Some(client) = set_up() else { return };
    let chassis = client
        .list_chassis()
        .await
        .expect("Cannot list chassis")
        .into_result()
        .expect("Cannot fetch a chassis");
    assert!(!chassis.is_empty());
    for item in chassis {
        if let Some(thermal) = item
            .thermal_subsystem()
            .await
            .expect("Cannot get thermal subsystem")
        {
            let _ = thermal.fans().await.expect("Cannot list fans");
        }
    }
}

#[tokio::test]
async fn test_list_managers() {
    let Some(client) = set_up() else { return };
    let managers = client
        .list_managers()
        .await
        .expect("Cannot list managers")
        .into_result()
        .expect("Cannot fetch a manager");
    for manager in managers {
        let _ = manager
            .supported_reset_types()
            .await
            .or_else(|err| match err.kind() {
                redfish::ErrorKind::Unsupported => Ok(Vec::new()),
                _ => Err(err),
            })
            .expect("Cannot get reset types");
    }
}

#[tokio::test]
async fn test_stream_systems() {
    use futures::TryStreamExt;

    let Some(client) = set_up() else { return };
    let systems: Vec<redfish::systems::ComputerSystem> = client
        .find("/redfish/v1/Systems")
        .into_stream()
        .try_collect()
        .await
        .expect("Cannot stream systems");
    for system in systems {
        assert!(!system.id().is_empty());
    }
}
