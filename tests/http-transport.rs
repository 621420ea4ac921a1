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


use std::sync::Once;

use mockito::{Matcher, Server};
use serde_json::json;

use redfish::systems::ComputerSystem;
use redfish::{Client, Config, ErrorKind, HttpTransport, ResetType};

static INIT: Once = Once::new();

const SYSTEM: &str = "/redfish/v1/Systems/1";

fn set_up() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn system_body() -> String {
    json!({
        "@odata.id": SYSTEM,
        "@odata.type": "#ComputerSystem.v1_20_0.ComputerSystem",
        "@odata.etag": "W/\"1\"",
        "Id": "1",
        "Name": "Web server",
        "AssetTag": "old",
        "PowerState": "On",
        "Actions": {
            "#ComputerSystem.Reset": {
                "target": "/redfish/v1/Systems/1/Actions/ComputerSystem.Reset"
            }
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_basic_auth() {
    set_up();
    let mut server = Server::new_async().await;
    let root = server
        .mock("GET", "/redfish/v1/")
        .match_header("authorization", "Basic cm9vdDpjYWx2aW4=")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "@odata.id": "/redfish/v1/",
                "Id": "RootService",
                "Name": "Root Service",
                "RedfishVersion": "1.15.0"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let config = Config {
        username: Some("root".into()),
        password: Some("calvin".into()),
        ..Config::new(server.url())
    };
    let client = Client::with_config(&config).unwrap();
    let service = client.service_root().await.unwrap();
    assert_eq!(service.redfish_version().as_deref(), Some("1.15.0"));
    root.assert_async().await;
}

#[tokio::test]
async fn test_token_auth() {
    set_up();
    let mut server = Server::new_async().await;
    let system = server
        .mock("GET", SYSTEM)
        .match_header("x-auth-token", "secret-token")
        .with_status(200)
        .with_body(system_body())
        .create_async()
        .await;

    let config = Config {
        token: Some("secret-token".into()),
        ..Config::new(server.url())
    };
    let client = Client::with_config(&config).unwrap();
    let system_record = ComputerSystem::load(&client, SYSTEM).await.unwrap();
    assert_eq!(system_record.name(), "Web server");
    system.assert_async().await;
}

#[tokio::test]
async fn test_update_sends_if_match() {
    set_up();
    let mut server = Server::new_async().await;
    let _get = server
        .mock("GET", SYSTEM)
        .with_status(200)
        .with_body(system_body())
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", SYSTEM)
        .match_header("if-match", "W/\"1\"")
        .match_body(Matcher::Json(json!({"AssetTag": "new"})))
        .with_status(204)
        .with_header("etag", "W/\"2\"")
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(HttpTransport::new(server.url()).unwrap());
    let mut system = ComputerSystem::load(&client, SYSTEM).await.unwrap();
    system.set_asset_tag("new");
    assert!(system.update().await.unwrap().is_none());
    assert_eq!(system.etag(), Some("W/\"2\""));
    // The change is now part of the snapshot.
    assert!(system.update().await.unwrap().is_none());
    patch.assert_async().await;
}

#[tokio::test]
async fn test_reset_accepted() {
    set_up();
    let mut server = Server::new_async().await;
    let _get = server
        .mock("GET", SYSTEM)
        .with_status(200)
        .with_body(system_body())
        .create_async()
        .await;
    let reset = server
        .mock("POST", "/redfish/v1/Systems/1/Actions/ComputerSystem.Reset")
        .match_body(Matcher::Json(json!({"ResetType": "ForceRestart"})))
        .with_status(202)
        .with_header("location", "/redfish/v1/TaskService/TaskMonitors/42")
        .with_header("retry-after", "5")
        .create_async()
        .await;
    let _monitor = server
        .mock("GET", "/redfish/v1/TaskService/TaskMonitors/42")
        .with_status(202)
        .create_async()
        .await;

    let client = Client::new(HttpTransport::new(server.url()).unwrap());
    let system = ComputerSystem::load(&client, SYSTEM).await.unwrap();
    let monitor = system
        .reset(ResetType::ForceRestart)
        .await
        .unwrap()
        .expect("a task monitor");
    assert_eq!(monitor.uri(), "/redfish/v1/TaskService/TaskMonitors/42");
    assert!(monitor.retry_after().is_some());
    assert!(!monitor.poll().await.unwrap().is_completed());
    reset.assert_async().await;
}

#[tokio::test]
async fn test_error_body() {
    set_up();
    let mut server = Server::new_async().await;
    let _missing = server
        .mock("GET", "/redfish/v1/Systems/2")
        .with_status(404)
        .with_body(
            json!({
                "error": {
                    "code": "Base.1.8.GeneralError",
                    "message": "A general error has occurred.",
                    "@Message.ExtendedInfo": [{
                        "MessageId": "Base.1.8.ResourceMissingAtURI",
                        "Message": "The resource at the URI /redfish/v1/Systems/2 was not found."
                    }]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = Client::new(HttpTransport::new(server.url()).unwrap());
    let err = ComputerSystem::load(&client, "/redfish/v1/Systems/2")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    assert!(err.is_not_found());
    let body = err.redfish_error().expect("decoded error body");
    assert_eq!(body.code, "Base.1.8.GeneralError");
    assert_eq!(body.extended_info.len(), 1);
}
